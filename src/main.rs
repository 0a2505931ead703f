mod cli;
mod clock;
mod color;
mod config;
mod display;
mod error;
mod figlet;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "neoclock")]
#[command(about = "Your terminal timepiece in style", long_about = None)]
struct Cli {
    /// Show version info and exit
    #[arg(short, long)]
    info: bool,

    /// List available figlet fonts and exit
    #[arg(long)]
    list_fonts: bool,

    /// Font for the ASCII clock (this run only)
    #[arg(short, long)]
    font: Option<String>,

    /// Gradient start color (this run only)
    #[arg(long, alias = "c1")]
    color1: Option<String>,

    /// Gradient end color (this run only)
    #[arg(long, alias = "c2")]
    color2: Option<String>,

    /// Re-run the configuration wizard before starting
    #[arg(long, alias = "rc")]
    reset_config: bool,

    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render a single frame and exit
    #[arg(long)]
    once: bool,
}

fn main() {
    if running_as_root() {
        eprintln!("❌ neoclock does not support running as root. Exiting.");
        std::process::exit(1);
    }

    let cli = Cli::parse();

    let result = if cli.info {
        cli::info::run();
        Ok(())
    } else if cli.list_fonts {
        cli::fonts::run();
        Ok(())
    } else {
        cli::clock::run(cli::clock::ClockArgs {
            config_path: cli.config,
            font: cli.font,
            color1: cli.color1,
            color2: cli.color2,
            reset_config: cli.reset_config,
            once: cli.once,
        })
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(unix)]
fn running_as_root() -> bool {
    // Containers routinely run everything as root; NEOCLOCK_ALLOW_ROOT
    // opts out of the check there.
    if std::env::var_os("NEOCLOCK_ALLOW_ROOT").is_some() {
        return false;
    }
    // SAFETY: geteuid has no preconditions and cannot fail
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
fn running_as_root() -> bool {
    false
}
