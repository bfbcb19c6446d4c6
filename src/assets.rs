//! Config loading with an embedded fallback
//!
//! - If `SOFTPAL_CONFIG` is NOT set: use the embedded `palettes.yaml` (no filesystem access)
//! - If `SOFTPAL_CONFIG` IS set: read that file; the caller decides what to do when it fails
//!
//! `softpal init` extracts the embedded file so it can be customized.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Name of the embedded config file, also the default `init` target.
pub const CONFIG_FILE_NAME: &str = "palettes.yaml";

/// Environment variable pointing at an external config file.
pub const CONFIG_ENV_VAR: &str = "SOFTPAL_CONFIG";

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "palettes.yaml"]
struct EmbeddedConfig;

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Config loader with optional filesystem override
pub struct AssetLoader {
    /// External config file path (from SOFTPAL_CONFIG env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// `config_file` should be `Some` only if the env var was set.
    /// If `None`, the embedded config is used exclusively.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// Create a loader from `SOFTPAL_CONFIG`
    pub fn from_env() -> Self {
        Self::new(std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
    }

    /// The external config path, if one is configured
    pub fn config_file(&self) -> Option<&PathBuf> {
        self.config_file.as_ref()
    }

    /// Read the config file
    ///
    /// An external path, when configured, is read without fallback so that a
    /// typo in `SOFTPAL_CONFIG` surfaces as an error instead of silently
    /// using the embedded presets.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            tracing::trace!(path = %path.display(), "Loading config from filesystem");
            return Ok(Cow::Owned(fs::read(path)?));
        }

        Self::embedded_config().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("Embedded {CONFIG_FILE_NAME} not found"),
            )
        })
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// The embedded default config
    pub fn embedded_config() -> Option<Cow<'static, [u8]>> {
        EmbeddedConfig::get(CONFIG_FILE_NAME).map(|f| {
            tracing::trace!("Loading config from embedded assets");
            f.data
        })
    }

    /// Extract the embedded config to the filesystem (init command)
    ///
    /// Writes to `target` if given, else to the configured path, else to
    /// `./palettes.yaml`. Existing files are skipped unless `force` is set.
    pub fn init(&self, target: Option<PathBuf>, force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();
        let path = target
            .or_else(|| self.config_file.clone())
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

        if !force && path.exists() {
            report.skipped.push(path.display().to_string());
            return Ok(report);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        if let Some(data) = Self::embedded_config() {
            fs::write(&path, &*data)?;
            tracing::info!(path = %path.display(), "Wrote embedded config");
            report.written.push(path.display().to_string());
        }

        Ok(report)
    }
}
