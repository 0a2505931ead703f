use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::clock;
use crate::config;
use crate::display;
use crate::error::Result;

/// Options for clock mode, taken straight from the parsed CLI.
pub struct ClockArgs {
    pub config_path: Option<PathBuf>,
    pub font: Option<String>,
    pub color1: Option<String>,
    pub color2: Option<String>,
    pub reset_config: bool,
    pub once: bool,
}

/// Run clock mode: resolve config (wizard on first run or reset), apply
/// transient flag overrides, then enter the display loop.
pub fn run(args: ClockArgs) -> Result<()> {
    let config_path = args.config_path.unwrap_or_else(config::default_path);

    let mut config = if args.reset_config {
        config::wizard::run(&config_path)?
    } else {
        match config::load(&config_path)? {
            Some(config) => config,
            // First run
            None => config::wizard::run(&config_path)?,
        }
    };

    // Flag overrides apply to this run only and are never written back
    if let Some(font) = args.font {
        config.font = font;
    }
    if let Some(color1) = args.color1 {
        config.color1 = color1;
    }
    if let Some(color2) = args.color2 {
        config.color2 = color2;
    }

    let colors_enabled = display::should_use_colors();

    if args.once {
        return clock::run_once(&config, colors_enabled);
    }

    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&shutdown);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))?;

    clock::run(&config, colors_enabled, &shutdown)?;

    println!("👋 Goodbye! Thanks for using neoclock.");
    Ok(())
}
