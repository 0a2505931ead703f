//! First-run configuration wizard
//!
//! Prompts for font and gradient colors, substituting the documented
//! defaults for empty answers, and writes the result to disk. Prompt I/O is
//! generic so tests can drive it with in-memory readers.

use std::io::{self, BufRead, Write};
use std::path::Path;

use super::types::{DEFAULT_COLOR1, DEFAULT_COLOR2};
use super::Config;
use crate::error::Result;
use crate::figlet::DEFAULT_FONT;

/// Run the interactive wizard on stdin/stdout and persist the answers.
pub fn run(path: &Path) -> Result<Config> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let config = prompt_config(&mut input, &mut output)?;
    super::save(&config, path)?;

    writeln!(output, "✅ Config saved. Launching neoclock...")?;
    Ok(config)
}

fn prompt_config<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Config> {
    writeln!(output, "🚀 Welcome to neoclock! Let's create your config.")?;

    let font = prompt(input, output, "Choose font (default = standard): ", DEFAULT_FONT)?;
    let color1 = prompt(
        input,
        output,
        "Gradient start color (default = yellow): ",
        DEFAULT_COLOR1,
    )?;
    let color2 = prompt(
        input,
        output,
        "Gradient end color (default = orange): ",
        DEFAULT_COLOR2,
    )?;

    Ok(Config {
        font,
        color1,
        color2,
        extra: Default::default(),
    })
}

/// Read one answer; empty input (or EOF) means the stated default.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: &str,
) -> Result<String> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();

    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_config_with_answers() {
        let mut input = Cursor::new("slant\nred\nblue\n");
        let mut output = Vec::new();

        let config = prompt_config(&mut input, &mut output).unwrap();

        assert_eq!(config.font, "slant");
        assert_eq!(config.color1, "red");
        assert_eq!(config.color2, "blue");
    }

    #[test]
    fn test_prompt_config_empty_answers_use_defaults() {
        let mut input = Cursor::new("\n\n\n");
        let mut output = Vec::new();

        let config = prompt_config(&mut input, &mut output).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_prompt_config_eof_uses_defaults() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let config = prompt_config(&mut input, &mut output).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_prompt_trims_whitespace() {
        let mut input = Cursor::new("  big  \n");
        let mut output = Vec::new();

        let answer = prompt(&mut input, &mut output, "Font: ", "standard").unwrap();

        assert_eq!(answer, "big");
    }

    #[test]
    fn test_prompts_are_written_in_order() {
        let mut input = Cursor::new("\n\n\n");
        let mut output = Vec::new();

        prompt_config(&mut input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        let font_at = text.find("Choose font").unwrap();
        let start_at = text.find("Gradient start color").unwrap();
        let end_at = text.find("Gradient end color").unwrap();
        assert!(font_at < start_at && start_at < end_at);
    }
}
