//! Test fixtures and constants.

/// Config with one preset per constraint axis plus an override of a built-in
pub const CONFIG_YAML: &str = r#"
defaults:
  iterations: 10
  dense_sampling: false

presets:
  dark:
    description: Dark colors
    lightness: { max: 0.4 }

  muted:
    chroma: { max: 0.15 }

  blues:
    description: Blue hues only
    hue: { min: 230, max: 300 }
    chroma: { min: 0.2 }
    dense_sampling: true
    iterations: 5

  warm:
    description: Overridden warm
    lightness: { min: 0.6 }
"#;

/// YAML that does not parse into the config schema
pub const MALFORMED_YAML: &str = "presets: [this, is, a, list]\n";

/// Preset whose lightness range is inverted
pub const INVERTED_YAML: &str = r#"
presets:
  impossible:
    lightness: { min: 0.9, max: 0.1 }
"#;

/// Greys around L = 0.5: one sparse grid sample, three dense ones
pub const TINY_YAML: &str = r#"
presets:
  sliver:
    lightness: { min: 0.5, max: 0.525 }
    chroma: { max: 0.01 }
"#;
