//! Test application wrapper around an on-disk config.

use std::fs;
use std::path::PathBuf;

use softpal::assets::AssetLoader;
use softpal::models::AppConfig;
use softpal::services::PaletteService;
use tempfile::TempDir;

/// Service loaded from a config written to a temporary directory
pub struct TestApp {
    pub service: PaletteService,
    pub config_path: Option<PathBuf>,
    // Keeps the directory alive for the test's duration
    _dir: Option<TempDir>,
}

impl TestApp {
    /// Write `yaml` to a fresh `palettes.yaml` and load it
    pub fn with_config(yaml: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_path = dir.path().join("palettes.yaml");
        fs::write(&config_path, yaml).expect("Failed to write config");

        let loader = AssetLoader::new(Some(config_path.clone()));
        let service = PaletteService::new(AppConfig::load_from_assets(&loader));

        Self {
            service,
            config_path: Some(config_path),
            _dir: Some(dir),
        }
    }

    /// Service backed by the embedded config
    pub fn embedded() -> Self {
        let loader = AssetLoader::new(None);
        Self {
            service: PaletteService::new(AppConfig::load_from_assets(&loader)),
            config_path: None,
            _dir: None,
        }
    }
}
