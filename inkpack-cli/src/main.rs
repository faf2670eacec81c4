//! Command-line renderer: text in, SVG out.

mod cli;

use std::io::Read;

use clap::Parser;
use color_eyre::Report;
use inkpack_font::{FALLBACK_CHAR, Font};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    init_logging();

    let cli = cli::Cli::parse();

    if cli.list_fonts {
        for key in inkpack_font::font_keys() {
            println!("{key}");
        }
        return Ok(());
    }

    let text = read_text(cli.text.as_deref().unwrap_or_default())?;
    let config = cli.build_config()?;
    debug!(chars = text.len(), font = %config.font, "rendering");

    let font = Font::get(&config.font)?;
    let missing = unsupported_chars(&text, font);
    if !missing.is_empty() {
        let chars: String = missing.into_iter().collect();
        warn!(%chars, fallback = %FALLBACK_CHAR, "substituting the fallback glyph");
    }

    let svg = inkpack_core::render_svg(&text, &config)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &svg)?;
            info!(path = %path.display(), bytes = svg.len(), "wrote svg");
        },
        None => print!("{svg}"),
    }
    Ok(())
}

/// Reads the text argument; `-` pulls from standard input with one trailing
/// newline stripped, so piped input does not grow an empty row.
fn read_text(arg: &str) -> Result<String, Report> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    if buffer.ends_with('\n') {
        buffer.pop();
    }
    Ok(buffer)
}

/// Characters the font cannot draw, deduplicated in codepoint order. Line
/// breaks are structural tokens and never reach glyph lookup.
fn unsupported_chars(text: &str, font: &Font) -> Vec<char> {
    let mut missing: Vec<char> = text
        .chars()
        .filter(|&ch| ch != '\n' && !font.supports(ch))
        .collect();
    missing.sort_unstable();
    missing.dedup();
    missing
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_characters_the_font_cannot_draw() {
        let font = Font::get("skeletal").unwrap();
        assert_eq!(unsupported_chars("café\u{7f}", font), ['\u{7f}', 'é']);
        assert!(unsupported_chars("ascii only\nline two", font).is_empty());
    }

    #[test]
    fn repeated_offenders_are_reported_once() {
        let font = Font::get("skeletal").unwrap();
        assert_eq!(unsupported_chars("ééé\tzz\té", font), ['\t', 'é']);
    }
}
