//! Command-line interface module
//!
//! Implements the three CLI modes:
//! - info: print version metadata
//! - fonts: list available figlet fonts
//! - clock: run the display loop (default mode)

pub mod clock;
pub mod fonts;
pub mod info;
