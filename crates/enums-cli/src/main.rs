//! CLI entry point for the enums generator.
//!
//! Generates integer enumerations with string conversions from tree-sitter
//! grammars or JSON manifests.
//!
//! # Usage
//!
//! ```bash
//! enums [OPTIONS] <COMMAND>
//!
//! # List built-in grammars
//! enums languages
//!
//! # Go enums for every built-in grammar into ./gen
//! enums generate --output gen
//!
//! # Rust enum for TSX only
//! enums generate --language tsx --target rust
//!
//! # Enum from a hand-written name list
//! enums render --manifest names.json --target go
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod generate;

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand, ValueEnum};
use enums_core::{GenerateConfig, Target};
use enums_grammar::{Lang, load_manifest};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::generate::{render_languages, render_table, resolve_languages, write_files};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Generates integer enumerations with string conversions.
#[derive(Parser)]
#[command(name = "enums", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON configuration file.
    #[arg(short, long, global = true, env = "ENUMS_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List built-in grammars.
    Languages,

    /// Generate enumerations for built-in grammars.
    Generate {
        /// Grammar to generate for; repeat for several (defaults to all).
        #[arg(short, long = "language", value_name = "LANGUAGE")]
        languages: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate an enumeration from a JSON manifest.
    Render {
        /// Manifest file.
        #[arg(short, long)]
        manifest: Utf8PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Options overriding the configuration file.
#[derive(Args)]
struct OutputArgs {
    /// Target language.
    #[arg(short, long, value_enum)]
    target: Option<TargetArg>,

    /// Output directory.
    #[arg(short, long, value_name = "OUTPUT DIR", env = "ENUMS_OUTPUT")]
    output: Option<Utf8PathBuf>,

    /// File name template; `$` is replaced by the lowercase container name.
    #[arg(short, long, value_name = "FILE TEMPLATE")]
    file_template: Option<String>,

    /// Prefix of generated type names.
    #[arg(long)]
    type_prefix: Option<String>,
}

/// Target language.
#[derive(Clone, Copy, ValueEnum)]
enum TargetArg {
    /// Go source.
    Go,
    /// Rust source.
    Rust,
    /// JSON document.
    Json,
}

impl From<TargetArg> for Target {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Go => Self::Go,
            TargetArg::Rust => Self::Rust,
            TargetArg::Json => Self::Json,
        }
    }
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `info` level by default.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(level)
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Builds a [`GenerateConfig`] from the configuration file and CLI overrides.
///
/// # Errors
///
/// Returns an error if the configuration file cannot be loaded or the
/// resulting configuration is invalid.
fn build_config(cli: &Cli, output: &OutputArgs) -> color_eyre::Result<GenerateConfig> {
    let mut config = match &cli.config {
        Some(path) => GenerateConfig::load(path)?,
        None => GenerateConfig::default(),
    };

    if let Some(target) = output.target {
        config.target = target.into();
    }
    if let Some(dir) = &output.output {
        config.output_dir.clone_from(dir);
    }
    if let Some(template) = &output.file_template {
        config.file_template.clone_from(template);
    }
    if let Some(prefix) = &output.type_prefix {
        config.type_prefix.clone_from(prefix);
    }

    config.validate()?;
    Ok(config)
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Prints the built-in grammars with their node kind counts.
fn run_languages() -> color_eyre::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    for lang in Lang::ALL {
        let container = lang.container_name()?;
        writeln!(
            handle,
            "{:<12} {:<24} {} kinds",
            lang.name(),
            container.type_name(enums_core::DEFAULT_TYPE_PREFIX),
            lang.language().node_kind_count()
        )?;
    }

    Ok(())
}

/// Generates files for the selected built-in grammars.
fn run_generate(mut config: GenerateConfig, languages: &[String]) -> color_eyre::Result<()> {
    if !languages.is_empty() {
        config.languages = languages.to_vec();
    }
    let langs = resolve_languages(&config.languages)?;
    info!(output = %config.output_dir, "Generating enums");

    let files = render_languages(&langs, &config)?;
    write_files(&files)
}

/// Generates a file from a manifest.
fn run_render(config: &GenerateConfig, manifest: &Utf8Path) -> color_eyre::Result<()> {
    info!(manifest = %manifest, output = %config.output_dir, "Rendering manifest");

    let table = load_manifest(manifest)?.into_table(&config.type_prefix)?;
    let file = render_table(&table, config)?;
    write_files(&[file])
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Initialize tracing (handles --no-color for log output)
    init_tracing(cli.verbose, cli.no_color);

    // 4. Route to appropriate command
    match &cli.command {
        Commands::Languages => run_languages(),
        Commands::Generate { languages, output } => {
            let config = build_config(&cli, output)?;
            run_generate(config, languages)
        }
        Commands::Render { manifest, output } => {
            let config = build_config(&cli, output)?;
            run_render(&config, manifest)
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overrides_apply_over_defaults() {
        let cli = Cli::parse_from([
            "enums",
            "generate",
            "-l",
            "tsx",
            "--target",
            "rust",
            "--output",
            "gen",
            "--type-prefix",
            "Kind",
        ]);
        let Commands::Generate { languages, output } = &cli.command else {
            unreachable!("parsed generate");
        };
        assert_eq!(languages, &vec!["tsx".to_owned()]);

        let config = build_config(&cli, output).unwrap();
        assert_eq!(config.target, Target::Rust);
        assert_eq!(config.output_dir, Utf8PathBuf::from("gen"));
        assert_eq!(config.type_prefix, "Kind");
        assert_eq!(config.file_template, "language_$");
    }

    #[test]
    fn test_invalid_prefix_rejected() {
        let cli = Cli::parse_from(["enums", "generate", "--type-prefix", "9x"]);
        let Commands::Generate { output, .. } = &cli.command else {
            unreachable!("parsed generate");
        };
        assert!(build_config(&cli, output).is_err());
    }

    #[test]
    fn test_render_manifest_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        let manifest = root.join("names.json");
        std::fs::write(
            &manifest,
            r#"{"name": "Foo", "names": [
                {"constant": "Identifier", "display": "identifier", "raw": "id"},
                {"constant": "Keyword", "display": "keyword", "raw": "kw"},
                {"constant": "Identifier2", "display": "identifier", "raw": "id2"}
            ]}"#,
        )
        .unwrap();

        let config = GenerateConfig {
            output_dir: root.join("out"),
            target: Target::Rust,
            ..GenerateConfig::default()
        };
        run_render(&config, &manifest).unwrap();

        let rendered = std::fs::read_to_string(root.join("out/language_foo.rs")).unwrap();
        assert!(rendered.contains("Identifier2 = 2,"));
        assert_eq!(rendered.matches("\"identifier\" => Ok(").count(), 1);
    }
}
