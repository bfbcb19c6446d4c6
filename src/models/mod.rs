pub mod config;

pub use config::{AppConfig, Bounds, GeneratorDefaults, PresetConfig, BUILTIN_PRESETS};
