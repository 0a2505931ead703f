//! Named colors and two-color gradient construction
//!
//! Maps the nine supported color names to RGB, interpolates a linear
//! gradient across a line count, and wraps rendered lines in true-color
//! escape sequences.

use crossterm::style::{Color, ResetColor, SetForegroundColor};

/// An 8-bit-per-channel RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Which end of the gradient a color name is resolved for.
///
/// Unknown names fall back to black at the start and white at the end.
/// The asymmetry is kept for compatibility with existing configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientPosition {
    Start,
    End,
}

const NAMED_COLORS: [(&str, Rgb); 9] = [
    ("black", Rgb { r: 0, g: 0, b: 0 }),
    ("red", Rgb { r: 255, g: 0, b: 0 }),
    ("green", Rgb { r: 0, g: 255, b: 0 }),
    ("yellow", Rgb { r: 255, g: 255, b: 0 }),
    ("blue", Rgb { r: 0, g: 0, b: 255 }),
    ("magenta", Rgb { r: 255, g: 0, b: 255 }),
    ("cyan", Rgb { r: 0, g: 255, b: 255 }),
    ("white", Rgb { r: 255, g: 255, b: 255 }),
    ("gray", Rgb { r: 128, g: 128, b: 128 }),
];

/// Resolve a color name case-insensitively, falling back to the positional
/// default for unknown names.
pub fn name_to_rgb(name: &str, position: GradientPosition) -> Rgb {
    let name = name.trim();
    NAMED_COLORS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|(_, rgb)| *rgb)
        .unwrap_or(match position {
            GradientPosition::Start => Rgb { r: 0, g: 0, b: 0 },
            GradientPosition::End => Rgb {
                r: 255,
                g: 255,
                b: 255,
            },
        })
}

/// Build a linear gradient with exactly `steps` entries.
///
/// Entry 0 is `start` and entry `steps - 1` is `end`; channels are
/// interpolated independently with truncating integer conversion. Fewer
/// than two steps is the no-gradient case: zero steps yields nothing, one
/// step yields the start color alone.
pub fn build_gradient(start: Rgb, end: Rgb, steps: usize) -> Vec<Rgb> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => (0..steps)
            .map(|i| Rgb {
                r: lerp(start.r, end.r, i, steps - 1),
                g: lerp(start.g, end.g, i, steps - 1),
                b: lerp(start.b, end.b, i, steps - 1),
            })
            .collect(),
    }
}

fn lerp(a: u8, b: u8, step: usize, last: usize) -> u8 {
    // Truncating, not rounding
    (f64::from(a) + (f64::from(b) - f64::from(a)) * step as f64 / last as f64) as u8
}

/// Colorize multi-line text with a gradient from `start_name` to `end_name`.
///
/// Each line is prefixed with a 24-bit foreground escape and suffixed with a
/// reset so color never bleeds into subsequent output.
pub fn apply_gradient(text: &str, start_name: &str, end_name: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let gradient = build_gradient(
        name_to_rgb(start_name, GradientPosition::Start),
        name_to_rgb(end_name, GradientPosition::End),
        lines.len(),
    );

    let mut out = String::with_capacity(text.len() + lines.len() * 24);
    for (line, rgb) in lines.iter().zip(gradient) {
        let fg = SetForegroundColor(Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        });
        out.push_str(&format!("{}{}{}\n", fg, line, ResetColor));
    }
    out
}
