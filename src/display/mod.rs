//! Terminal display module
//!
//! Color-support detection and viewport clearing.

mod terminal;

pub use terminal::{clear_screen, should_use_colors};
