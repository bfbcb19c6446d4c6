use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use palettegen::presets::{happy_settings, warm_settings};
use palettegen::{Hcl, Lab, Predicate, SoftPaletteSettings};

use crate::assets::AssetLoader;
use crate::error::AppError;

/// Names that resolve to the library's ready-made presets.
pub const BUILTIN_PRESETS: [&str; 2] = ["warm", "happy"];

/// Application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Generator defaults applied to every preset
    #[serde(default)]
    pub defaults: GeneratorDefaults,

    /// Named color-space constraints
    #[serde(default)]
    pub presets: BTreeMap<String, PresetConfig>,
}

/// Defaults for the soft palette generator
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GeneratorDefaults {
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    #[serde(default)]
    pub dense_sampling: bool,
}

fn default_iterations() -> u32 {
    palettegen::soft::DEFAULT_ITERATIONS
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            dense_sampling: false,
        }
    }
}

/// A declarative constraint over HCL, plus optional generator overrides
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct PresetConfig {
    /// Shown by `softpal presets`
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub lightness: Option<Bounds>,

    #[serde(default)]
    pub chroma: Option<Bounds>,

    /// Hue in degrees; `min > max` wraps through 0
    #[serde(default)]
    pub hue: Option<Bounds>,

    #[serde(default)]
    pub iterations: Option<u32>,

    #[serde(default)]
    pub dense_sampling: Option<bool>,
}

/// Inclusive range with optional ends
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    #[serde(default)]
    pub min: Option<f64>,

    #[serde(default)]
    pub max: Option<f64>,
}

impl Bounds {
    fn contains(self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    /// Hue test: a range with `min > max` covers `min..360` and `0..=max`.
    fn contains_hue(self, hue: f64) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => hue >= min || hue <= max,
            _ => self.contains(hue),
        }
    }

    fn check_ordered(self, axis: &str) -> Result<(), String> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => {
                Err(format!("{axis} min {min} is above max {max}"))
            }
            _ => Ok(()),
        }
    }
}

impl PresetConfig {
    /// Reject ranges that can never match
    pub fn validate(&self) -> Result<(), String> {
        if let Some(bounds) = self.lightness {
            bounds.check_ordered("lightness")?;
        }
        if let Some(bounds) = self.chroma {
            bounds.check_ordered("chroma")?;
        }
        Ok(())
    }

    /// Turn the ranges into a predicate over Lab samples
    pub fn predicate(&self) -> Predicate {
        let (lightness, chroma, hue) = (self.lightness, self.chroma, self.hue);
        Arc::new(move |lab: Lab| {
            let hcl = Hcl::from(lab);
            lightness.map_or(true, |b| b.contains(hcl.l))
                && chroma.map_or(true, |b| b.contains(hcl.c))
                && hue.map_or(true, |b| b.contains_hue(hcl.h))
        })
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        presets = config.presets.len(),
                        iterations = config.defaults.iterations,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Whether `name` resolves to a preset, configured or built in
    pub fn has_preset(&self, name: &str) -> bool {
        self.presets.contains_key(name) || BUILTIN_PRESETS.contains(&name)
    }

    /// Generator settings for a named preset, or the bare defaults when no
    /// name is given.
    ///
    /// Configured presets take precedence over built-ins of the same name.
    pub fn settings_for(&self, preset: Option<&str>) -> Result<SoftPaletteSettings, AppError> {
        let base = SoftPaletteSettings::new()
            .iterations(self.defaults.iterations)
            .dense_sampling(self.defaults.dense_sampling);

        let Some(name) = preset else {
            return Ok(base);
        };

        if let Some(preset) = self.presets.get(name) {
            preset.validate().map_err(|reason| AppError::InvalidPreset {
                name: name.to_string(),
                reason,
            })?;
            return Ok(base
                .shared_predicate(preset.predicate())
                .iterations(preset.iterations.unwrap_or(self.defaults.iterations))
                .dense_sampling(preset.dense_sampling.unwrap_or(self.defaults.dense_sampling)));
        }

        match name {
            "warm" => Ok(warm_settings()),
            "happy" => Ok(happy_settings()),
            _ => Err(AppError::UnknownPreset(name.to_string())),
        }
    }
}
