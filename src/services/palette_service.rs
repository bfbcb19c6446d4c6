use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::SeedableRng;

use palettegen::{gradient, harmony, presets, SoftPalette, Srgb};

use crate::error::AppError;
use crate::models::{AppConfig, BUILTIN_PRESETS};

/// Mood for the fast (HSV) generators
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mood {
    Warm,
    Happy,
}

/// Color-wheel harmony
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HarmonyKind {
    Complementary,
    Analogous,
    Monochromatic,
    Triad,
    SplitComplementary,
    Square,
    Tetradic,
}

/// Parameters for a soft palette run
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub count: usize,
    pub preset: Option<String>,
    /// Overrides the preset's / default iteration count
    pub iterations: Option<u32>,
    /// Forces dense sampling on; `false` leaves the preset's choice alone
    pub dense: bool,
    pub seed: Option<u64>,
}

/// Preset listing entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetInfo {
    pub name: String,
    pub description: Option<String>,
    pub builtin: bool,
}

/// Resolves presets against the configuration and runs the generators
pub struct PaletteService {
    config: AppConfig,
}

impl PaletteService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the soft palette generator
    pub fn generate(&self, request: &GenerateRequest) -> Result<Vec<Srgb>, AppError> {
        let mut settings = self.config.settings_for(request.preset.as_deref())?;
        if let Some(iterations) = request.iterations {
            settings = settings.iterations(iterations);
        }
        if request.dense {
            settings = settings.dense_sampling(true);
        }
        if let Some(seed) = request.seed {
            settings = settings.seed(seed);
        }

        tracing::info!(
            count = request.count,
            preset = request.preset.as_deref().unwrap_or("-"),
            iterations = settings.iterations,
            dense = settings.dense_sampling,
            "Generating soft palette"
        );

        Ok(SoftPalette::new(settings).generate(request.count)?)
    }

    /// Evenly spaced hues in HSV, no distinctness guarantee
    pub fn fast(&self, count: usize, mood: Mood, seed: Option<u64>) -> Vec<Srgb> {
        let mut rng = rng_for(seed);
        match mood {
            Mood::Warm => presets::fast_warm_palette(count, &mut rng),
            Mood::Happy => presets::fast_happy_palette(count, &mut rng),
        }
    }

    /// Harmony of a hex color; `count` and `slices` only matter for the
    /// analogous and monochromatic kinds
    pub fn harmony(
        &self,
        color: &str,
        kind: HarmonyKind,
        count: usize,
        slices: usize,
    ) -> Result<Vec<Srgb>, AppError> {
        let base = parse_color(color)?;
        Ok(match kind {
            HarmonyKind::Complementary => harmony::complementary(base),
            HarmonyKind::Analogous => harmony::analogous(base, count, slices),
            HarmonyKind::Monochromatic => harmony::monochromatic(base, count),
            HarmonyKind::Triad => harmony::triad(base),
            HarmonyKind::SplitComplementary => harmony::split_complementary(base),
            HarmonyKind::Square => harmony::square(base),
            HarmonyKind::Tetradic => harmony::tetradic(base),
        })
    }

    /// RGB gradient between two hex colors
    pub fn gradient(&self, from: &str, to: &str, count: usize) -> Result<Vec<Srgb>, AppError> {
        Ok(gradient::rgb_steps(parse_color(from)?, parse_color(to)?, count))
    }

    /// Configured presets followed by built-ins not shadowed by them
    pub fn presets(&self) -> Vec<PresetInfo> {
        let mut list: Vec<PresetInfo> = self
            .config
            .presets
            .iter()
            .map(|(name, preset)| PresetInfo {
                name: name.clone(),
                description: preset.description.clone(),
                builtin: false,
            })
            .collect();

        for name in BUILTIN_PRESETS {
            if !self.config.presets.contains_key(name) {
                list.push(PresetInfo {
                    name: name.to_string(),
                    description: Some(builtin_description(name).to_string()),
                    builtin: true,
                });
            }
        }

        list
    }
}

fn builtin_description(name: &str) -> &'static str {
    match name {
        "warm" => "Muted, darkish colors (chroma 0.1-0.4, lightness 0.2-0.5)",
        "happy" => "Saturated, bright colors (chroma >= 0.3, lightness 0.4-0.8)",
        _ => "",
    }
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Parse a hex color, keeping the input for the error message
pub fn parse_color(input: &str) -> Result<Srgb, AppError> {
    input.parse::<Srgb>().map_err(|source| AppError::InvalidColor {
        input: input.to_string(),
        source,
    })
}
