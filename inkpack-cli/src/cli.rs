use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::{Report, eyre::eyre};
use compact_str::ToCompactString;
use inkpack_core::{GridStyle, Layout, RenderConfig, WordStyle};

#[derive(Parser, Debug)]
#[command(
    name = "inkpack",
    about = "Render short text as stylized vector stroke art",
    long_about = "Packs each word into a cell, subdivides the cell into one box per character \
                  and draws every character's pen-stroke glyph as a smoothed SVG path"
)]
pub struct Cli {
    /// Text to render; use "-" to read from standard input
    #[arg(value_name = "TEXT", required_unless_present = "list_fonts")]
    pub text: Option<String>,

    /// JSON configuration file; explicit flags override its fields
    #[arg(short = 'c', long, value_name = "PATH", value_parser = validate_file_exists)]
    pub config: Option<PathBuf>,

    /// Cell edge in pixels, applied to both axes
    #[arg(short = 's', long, value_name = "PX")]
    pub cell_size: Option<f32>,

    /// Cell width in pixels
    #[arg(long, value_name = "PX")]
    pub cell_width: Option<f32>,

    /// Cell height in pixels
    #[arg(long, value_name = "PX")]
    pub cell_height: Option<f32>,

    /// Outer padding as a fraction of the shorter cell side
    #[arg(short = 'p', long, value_name = "FRACTION")]
    pub padding: Option<f32>,

    /// Font key (see --list-fonts)
    #[arg(short, long, value_name = "FONT")]
    pub font: Option<String>,

    /// Packing strategy
    #[arg(short, long, value_enum, value_name = "STRATEGY")]
    pub layout: Option<LayoutArg>,

    /// Render each word as one continuous stroke
    #[arg(long)]
    pub cursive: bool,

    /// Glyph stroke color
    #[arg(long, value_name = "COLOR")]
    pub stroke: Option<String>,

    /// Glyph stroke width in pixels
    #[arg(long, value_name = "PX")]
    pub stroke_width: Option<f32>,

    /// Draw per-cell grid outlines
    #[arg(long)]
    pub grid: bool,

    /// Whole-drawing background fill
    #[arg(long, value_name = "COLOR")]
    pub canvas: Option<String>,

    /// Output file path; defaults to standard output
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// List available font keys and exit
    #[arg(short = 'L', long)]
    pub list_fonts: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq)]
pub enum LayoutArg {
    Flex,
    Treemap,
}

impl Cli {
    /// Builds the render configuration: the JSON file (when given) over the
    /// defaults, then explicit flags over both.
    pub fn build_config(&self) -> Result<RenderConfig, Report> {
        let mut config = match &self.config {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                serde_json::from_str(&raw)
                    .map_err(|e| eyre!("invalid config {}: {e}", path.display()))?
            },
            None => RenderConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut RenderConfig) {
        if let Some(size) = self.cell_size {
            config.cell_size = Some(size);
        }
        if let Some(width) = self.cell_width {
            config.cell_width = Some(width);
        }
        if let Some(height) = self.cell_height {
            config.cell_height = Some(height);
        }
        if let Some(padding) = self.padding {
            config.padding = padding;
        }
        if let Some(font) = &self.font {
            config.font = font.to_compact_string();
        }
        if let Some(layout) = self.layout {
            let padding = config.layout.padding();
            config.layout = match layout {
                LayoutArg::Flex => Layout::Flex { padding },
                LayoutArg::Treemap => Layout::Treemap { padding },
            };
        }
        if self.cursive {
            config.cursive = true;
        }
        if let Some(stroke) = &self.stroke {
            config.word.get_or_insert_with(WordStyle::default).stroke =
                stroke.to_compact_string();
        }
        if let Some(width) = self.stroke_width {
            config.word.get_or_insert_with(WordStyle::default).stroke_width = width;
        }
        if self.grid {
            config.grid.get_or_insert_with(GridStyle::default);
        }
        if let Some(canvas) = &self.canvas {
            config.canvas = Some(canvas.to_compact_string());
        }
    }
}

fn validate_file_exists(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("file not found: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("inkpack").chain(args.iter().copied()))
    }

    #[test]
    fn flags_override_defaults() {
        let cli = parse(&[
            "hello",
            "--cell-size",
            "320",
            "--font",
            "plume",
            "--layout",
            "treemap",
            "--stroke",
            "#492577",
            "--stroke-width",
            "10",
            "--grid",
        ]);
        let config = cli.build_config().unwrap();
        assert_eq!(config.cell_width(), 320.0);
        assert_eq!(config.font, "plume");
        assert_eq!(config.layout, Layout::Treemap { padding: 0.05 });
        assert!(config.grid.is_some());
        assert!(config.validate().is_ok());
        let word = config.word.unwrap();
        assert_eq!(word.stroke, "#492577");
        assert_eq!(word.stroke_width, 10.0);
    }

    #[test]
    fn layout_override_keeps_the_configured_pack_padding() {
        let cli = parse(&["x", "--layout", "treemap"]);
        let mut config = RenderConfig {
            layout: Layout::Flex { padding: 0.12 },
            ..Default::default()
        };
        cli.apply_overrides(&mut config);
        assert_eq!(config.layout, Layout::Treemap { padding: 0.12 });
    }

    #[test]
    fn unset_flags_leave_the_config_untouched() {
        let cli = parse(&["x"]);
        let mut config = RenderConfig::default();
        cli.apply_overrides(&mut config);
        assert!(!config.cursive);
        assert!(config.grid.is_none());
        assert_eq!(config.cell_width(), 80.0);
    }

    #[test]
    fn list_fonts_needs_no_text_argument() {
        let cli = parse(&["--list-fonts"]);
        assert!(cli.list_fonts);
        assert!(cli.text.is_none());
    }
}
