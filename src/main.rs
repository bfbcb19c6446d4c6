use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use softpal::assets::{AssetLoader, CONFIG_ENV_VAR};
use softpal::models::AppConfig;
use softpal::output::{self, OutputFormat};
use softpal::services::{GenerateRequest, HarmonyKind, Mood, PaletteService};

#[derive(Parser)]
#[command(name = "softpal")]
#[command(version)]
#[command(about = "Generate palettes of visually distinct colors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate distinct colors by k-means over CIE Lab
    Generate {
        /// Number of colors
        count: usize,

        /// Named constraint from the config, or a built-in (warm, happy)
        #[arg(short, long)]
        preset: Option<String>,

        /// Number of k-means rounds (overrides config)
        #[arg(short, long)]
        iterations: Option<u32>,

        /// Sample the color space on a finer grid
        #[arg(short, long)]
        dense: bool,

        /// Random seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Hex)]
        format: OutputFormat,
    },
    /// Evenly spaced HSV hues; instant, but colors may look alike
    Fast {
        /// Number of colors
        count: usize,

        #[arg(short, long, value_enum)]
        mood: Mood,

        /// Random seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Hex)]
        format: OutputFormat,
    },
    /// Color-wheel harmony of a base color
    Harmony {
        /// Base color as hex (e.g. "#3366cc" or "36c")
        color: String,

        #[arg(short, long, value_enum)]
        kind: HarmonyKind,

        /// Number of colors (analogous, monochromatic)
        #[arg(short, long, default_value_t = 3)]
        count: usize,

        /// Hue wheel divisions (analogous)
        #[arg(long, default_value_t = 12)]
        slices: usize,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Hex)]
        format: OutputFormat,
    },
    /// Stepped RGB gradient between two colors
    Gradient {
        /// Start color as hex
        from: String,

        /// End color as hex
        to: String,

        /// Number of steps (at least 3)
        #[arg(short, long, default_value_t = 5)]
        count: usize,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Hex)]
        format: OutputFormat,
    },
    /// List configured and built-in presets
    Presets,
    /// Write the embedded palettes.yaml for customization
    Init {
        /// Target path (default: $SOFTPAL_CONFIG or ./palettes.yaml)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "softpal=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let loader = AssetLoader::from_env();
    // Config is only read by commands that need it; `init` must work without one
    let service = || PaletteService::new(AppConfig::load_from_assets(&loader));

    let (colors, format) = match cli.command {
        Commands::Generate {
            count,
            preset,
            iterations,
            dense,
            seed,
            format,
        } => {
            let request = GenerateRequest {
                count,
                preset,
                iterations,
                dense,
                seed,
            };
            (service().generate(&request)?, format)
        }
        Commands::Fast {
            count,
            mood,
            seed,
            format,
        } => (service().fast(count, mood, seed), format),
        Commands::Harmony {
            color,
            kind,
            count,
            slices,
            format,
        } => (service().harmony(&color, kind, count, slices)?, format),
        Commands::Gradient {
            from,
            to,
            count,
            format,
        } => (service().gradient(&from, &to, count)?, format),
        Commands::Presets => {
            run_presets_command(&service());
            return Ok(());
        }
        Commands::Init { path, force } => return run_init_command(&loader, path, force),
    };

    let text = output::render(&colors, format)?;
    if !text.is_empty() {
        println!("{text}");
    }

    Ok(())
}

/// Print preset names and descriptions
fn run_presets_command(service: &PaletteService) {
    for preset in service.presets() {
        let origin = if preset.builtin { " (built-in)" } else { "" };
        match preset.description {
            Some(description) => println!("{:<16} {description}{origin}", preset.name),
            None => println!("{}{origin}", preset.name),
        }
    }
}

/// Extract the embedded config to the filesystem
fn run_init_command(
    loader: &AssetLoader,
    path: Option<PathBuf>,
    force: bool,
) -> anyhow::Result<()> {
    let report = loader.init(path, force)?;

    for file in &report.written {
        println!("Wrote {file}");
    }
    for file in &report.skipped {
        println!("Skipped {file} (exists, use --force to overwrite)");
    }
    if !report.written.is_empty() && loader.config_file().is_none() {
        println!("\nSet {CONFIG_ENV_VAR} to the written file to use it.");
    }

    Ok(())
}
