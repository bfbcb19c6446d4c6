use palettegen::{PaletteError, ParseColorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Invalid preset '{name}': {reason}")]
    InvalidPreset { name: String, reason: String },

    #[error("Invalid color '{input}': {source}")]
    InvalidColor {
        input: String,
        #[source]
        source: ParseColorError,
    },

    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_unknown_preset() {
        let error = AppError::UnknownPreset("neon".to_string());
        assert_eq!(error.to_string(), "Unknown preset: neon");
    }

    #[test]
    fn test_app_error_invalid_preset() {
        let error = AppError::InvalidPreset {
            name: "dark".to_string(),
            reason: "lightness min 0.8 is above max 0.2".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid preset 'dark': lightness min 0.8 is above max 0.2"
        );
    }

    #[test]
    fn test_app_error_invalid_color() {
        let error = AppError::InvalidColor {
            input: "#12".to_string(),
            source: ParseColorError::InvalidLength,
        };
        assert_eq!(
            error.to_string(),
            "Invalid color '#12': invalid hex color length (expected 3 or 6 characters)"
        );
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_app_error_palette_is_transparent() {
        let inner = PaletteError::Infeasible {
            requested: 5,
            available: 2,
        };
        let error = AppError::from(inner.clone());
        assert_eq!(error.to_string(), inner.to_string());
    }

    #[test]
    fn test_app_error_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = AppError::from(io_error);
        assert_eq!(error.to_string(), "IO error: file not found");
    }
}
