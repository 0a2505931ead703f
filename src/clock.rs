//! The clock display loop
//!
//! Once per second: capture the wall-clock time, render it as ASCII art,
//! colorize, clear the screen, print, sleep. Runs until the shutdown flag is
//! set by the interrupt handler. The tick is a fixed 1 s sleep, so long-term
//! drift by the per-frame render time is accepted.

use chrono::Local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crate::color;
use crate::config::Config;
use crate::display;
use crate::error::{NeoclockError, Result};
use crate::figlet;

const TICK: Duration = Duration::from_secs(1);
// Sleep in slices so an interrupt is observed promptly
const POLL: Duration = Duration::from_millis(50);

/// Run the display loop until `shutdown` is set.
pub fn run(config: &Config, colors_enabled: bool, shutdown: &AtomicBool) -> Result<()> {
    while !shutdown.load(Ordering::SeqCst) {
        let frame = render_frame(config, colors_enabled)?;
        display::clear_screen()?;
        println!("{}", frame);
        sleep_tick(shutdown);
    }
    Ok(())
}

/// Render and print a single frame without clearing or sleeping.
///
/// Used by `--once` for scripting and testing.
pub fn run_once(config: &Config, colors_enabled: bool) -> Result<()> {
    println!("{}", render_frame(config, colors_enabled)?);
    Ok(())
}

fn render_frame(config: &Config, colors_enabled: bool) -> Result<String> {
    let time = Local::now().format("%H : %M : %S").to_string();

    let banner = match figlet::render(&time, &config.font) {
        Ok(banner) => banner,
        Err(NeoclockError::FontNotFound(name)) => {
            eprintln!(
                "⚠️ Font '{}' not found. Using '{}'.",
                name,
                figlet::DEFAULT_FONT
            );
            figlet::render(&time, figlet::DEFAULT_FONT)?
        }
        Err(e) => return Err(e),
    };

    if colors_enabled && config.gradient_enabled() {
        Ok(color::apply_gradient(&banner, &config.color1, &config.color2))
    } else {
        Ok(banner)
    }
}

fn sleep_tick(shutdown: &AtomicBool) {
    let mut waited = Duration::ZERO;
    while waited < TICK && !shutdown.load(Ordering::SeqCst) {
        thread::sleep(POLL);
        waited += POLL;
    }
}
