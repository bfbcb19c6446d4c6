pub mod palette_service;

pub use palette_service::{
    parse_color, GenerateRequest, HarmonyKind, Mood, PaletteService, PresetInfo,
};
