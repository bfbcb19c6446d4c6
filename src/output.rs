//! Rendering palettes for the terminal or other programs.

use clap::ValueEnum;
use serde::Serialize;

use palettegen::{Lab, Srgb};

/// How generated colors are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `#rrggbb` per line
    #[default]
    Hex,
    /// One `r, g, b` byte triple per line
    Rgb,
    /// JSON array of `{hex, rgb, lab}` objects
    Json,
}

/// One color in JSON output
#[derive(Debug, Serialize)]
pub struct ColorRecord {
    pub hex: String,
    pub rgb: [u8; 3],
    pub lab: [f64; 3],
}

impl From<Srgb> for ColorRecord {
    fn from(color: Srgb) -> Self {
        let lab = Lab::from(color);
        Self {
            hex: color.to_hex(),
            rgb: color.to_bytes(),
            lab: [lab.l, lab.a, lab.b],
        }
    }
}

/// Format `colors` as text. Line-based formats end without a trailing newline.
pub fn render(colors: &[Srgb], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Hex => Ok(colors
            .iter()
            .map(|c| c.to_hex())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Rgb => Ok(colors
            .iter()
            .map(|c| {
                let [r, g, b] = c.to_bytes();
                format!("{r}, {g}, {b}")
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let records: Vec<ColorRecord> = colors.iter().copied().map(ColorRecord::from).collect();
            serde_json::to_string_pretty(&records)
        }
    }
}
