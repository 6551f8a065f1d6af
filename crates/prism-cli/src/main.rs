//! Prism token build CLI
//!
//! Thin wrapper around the `prism-tokens` pipeline: assembles one build
//! configuration for the core tokens and one per theme variant, runs the
//! pipeline for each, and writes the index files.
//!
//! ## Usage
//!
//! ```bash
//! # Build the base tokens with the default light theme
//! prism-tokens
//!
//! # Build light and dark themes into a custom directory
//! prism-tokens --build-dir ./dist/tokens/ --themes light dark
//!
//! # Overlay brand tokens on top of the base set
//! prism-tokens --source ./brand-tokens
//!
//! # Emit only the overlay tokens (base tokens still resolve references)
//! prism-tokens --source ./brand-tokens --source-tokens-only
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use prism_tokens::{
    base, write_index_css, BuildConfig, BuildPipeline, CssFormat, FileSpec, IndexScope,
    TokenSource,
};

/// Custom-property prefix for all emitted tokens.
const PREFIX: &str = "prism";

/// Prism Design System - token build
#[derive(Parser, Debug)]
#[command(name = "prism-tokens")]
#[command(version = "0.1.0")]
#[command(about = "Build Prism design tokens into CSS custom-property files")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory to put the built token files into
    #[arg(long, default_value = "./build/")]
    build_dir: PathBuf,

    /// Root directory of additional tokens merged over the base set; must
    /// contain `core` and `themes/<variant>` subdirectories
    #[arg(long)]
    source: Option<PathBuf>,

    /// Only include tokens from --source in the output; base tokens are
    /// still used for reference resolution
    #[arg(long)]
    source_tokens_only: bool,

    /// Theme variants to build
    #[arg(long, num_args = 1.., default_values_t = vec!["light".to_string()])]
    themes: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    BuildPipeline::new(core_config(&cli)).build_all()?;
    write_index_css(&cli.build_dir, IndexScope::Core)?;

    for theme in &cli.themes {
        BuildPipeline::new(theme_config(&cli, theme)).build_all()?;
    }
    write_index_css(&cli.build_dir, IndexScope::Themes)?;
    tracing::info!("token build complete in {}", cli.build_dir.display());

    Ok(())
}

fn core_config(cli: &Cli) -> BuildConfig {
    BuildConfig {
        include: base::core_sources(),
        source: overlay_sources(cli, "core"),
        source_tokens_only: cli.source_tokens_only,
        prefix: PREFIX.to_string(),
        build_path: cli.build_dir.clone(),
        theme: None,
        files: vec![
            FileSpec {
                format: CssFormat::Variables,
                destination: PathBuf::from("core/variables.css"),
                output_references: !cli.source_tokens_only,
            },
            FileSpec {
                format: CssFormat::CustomMediaBreakpoints,
                destination: PathBuf::from("core/custom-media-breakpoints.css"),
                output_references: !cli.source_tokens_only,
            },
        ],
    }
}

fn theme_config(cli: &Cli, theme: &str) -> BuildConfig {
    let mut include = base::core_sources();
    include.extend(base::theme_sources(theme));
    BuildConfig {
        include,
        source: overlay_sources(cli, &format!("themes/{}", theme)),
        source_tokens_only: cli.source_tokens_only,
        prefix: PREFIX.to_string(),
        build_path: cli.build_dir.clone(),
        theme: Some(theme.to_string()),
        files: vec![
            FileSpec {
                format: CssFormat::Variables,
                destination: PathBuf::from(format!("themes/{}/variables.css", theme)),
                output_references: !cli.source_tokens_only,
            },
            FileSpec {
                format: CssFormat::UtilityClasses,
                destination: PathBuf::from(format!("themes/{}/utility-classes.css", theme)),
                output_references: !cli.source_tokens_only,
            },
        ],
    }
}

fn overlay_sources(cli: &Cli, subdir: &str) -> Vec<TokenSource> {
    match &cli.source {
        Some(root) => vec![TokenSource::Dir(root.join(subdir))],
        None => Vec::new(),
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}
