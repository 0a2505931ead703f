//! Figlet rendering collaborator
//!
//! Thin wrapper around figlet-rs: the embedded "standard" font plus any
//! `.flf` files found on the search path (system figlet directories and the
//! per-user neoclock data directory).

use directories::ProjectDirs;
use figlet_rs::FIGfont;
use std::fs;
use std::path::PathBuf;

use crate::error::{NeoclockError, Result};

/// Font every installation is guaranteed to have.
pub const DEFAULT_FONT: &str = "standard";

/// Render `text` as ASCII art in the named font.
///
/// An unresolvable font name yields [`NeoclockError::FontNotFound`], which
/// callers treat as the recoverable fall-back-to-default signal.
pub fn render(text: &str, font: &str) -> Result<String> {
    let figfont = load_font(font)?;
    let figure = figfont
        .convert(text)
        .ok_or_else(|| NeoclockError::Font(format!("cannot render '{}'", text)))?;
    Ok(figure.to_string())
}

/// Enumerate every font name `render` would accept, sorted and deduplicated.
pub fn available_fonts() -> Vec<String> {
    let mut fonts = vec![DEFAULT_FONT.to_string()];

    for dir in font_dirs() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("flf") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                fonts.push(stem.to_string());
            }
        }
    }

    fonts.sort();
    fonts.dedup();
    fonts
}

fn load_font(name: &str) -> Result<FIGfont> {
    if name.eq_ignore_ascii_case(DEFAULT_FONT) {
        return FIGfont::standard().map_err(NeoclockError::Font);
    }

    match find_font_file(name) {
        Some(path) => FIGfont::from_file(&path.to_string_lossy()).map_err(NeoclockError::Font),
        None => Err(NeoclockError::FontNotFound(name.to_string())),
    }
}

fn find_font_file(name: &str) -> Option<PathBuf> {
    font_dirs()
        .into_iter()
        .map(|dir| dir.join(format!("{}.flf", name)))
        .find(|path| path.is_file())
}

fn font_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("/usr/share/figlet"),
        PathBuf::from("/usr/local/share/figlet"),
    ];
    if let Some(proj) = ProjectDirs::from("", "", "neoclock") {
        dirs.push(proj.data_dir().join("fonts"));
    }
    dirs
}
