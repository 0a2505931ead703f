use std::collections::BTreeMap;

/// Config file key for the figlet font.
pub const KEY_FONT: &str = "neoclock_font";
/// Config file key for the gradient start color.
pub const KEY_COLOR1: &str = "color1";
/// Config file key for the gradient end color.
pub const KEY_COLOR2: &str = "color2";

pub const DEFAULT_COLOR1: &str = "yellow";
pub const DEFAULT_COLOR2: &str = "orange";

/// Neoclock configuration
///
/// Backed by a flat `key: value` file. Keys the current version does not
/// recognize are kept in `extra` and written back on save, so older or newer
/// versions of the config survive a round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Figlet font used to render the clock face
    pub font: String,

    /// Gradient start color (top line)
    pub color1: String,

    /// Gradient end color (bottom line)
    pub color2: String,

    /// Unrecognized keys, preserved verbatim
    pub extra: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font: crate::figlet::DEFAULT_FONT.to_string(),
            color1: DEFAULT_COLOR1.to_string(),
            color2: DEFAULT_COLOR2.to_string(),
            extra: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Whether the clock face should be colorized at all.
    ///
    /// Both gradient endpoints must be set; a blank on either side means
    /// plain uncolored output.
    pub fn gradient_enabled(&self) -> bool {
        !self.color1.is_empty() && !self.color2.is_empty()
    }
}
