// SPDX-License-Identifier: MIT
//
// gratia — command-line entry point.
//
//   gratia tokens    stylesheet / example tokens → tokens.json
//   gratia generate  tokens.json + template → one theme per mood
//   gratia lint      check generated themes for required/deprecated keys
//   gratia palette   print the derived palette for a mood
//   gratia overlay   print the mood-sensitive slice of a generated theme

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use gratia::lint::lint_dir;
use gratia::overlay::overlay_from_file;
use gratia::publish::publish;
use gratia::{GratiaError, Project, generate};
use gratia_theme::tokens::skin_from_env;
use gratia_theme::{Mood, derive_palette};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "gratia")]
#[command(about = "Mood-aware editor theme generator")]
#[command(version)]
struct Cli {
    /// Theme project root (holds tokens.json and themes/)
    #[arg(long, short = 'C', global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the theme template for every mood
    Generate,

    /// Print the derived palette as JSON
    Palette {
        /// Mood name (soft, focused, celebratory); defaults to soft
        #[arg(long, short)]
        mood: Option<String>,
    },

    /// Extract the tone from the design-system stylesheet into tokens.json
    Tokens {
        /// Stylesheet to read before the built-in candidate paths
        #[arg(long, env = "GARDEN_TOKENS")]
        source: Option<PathBuf>,

        /// Skin id whose overrides apply last; `none` disables skins
        #[arg(long, env = "GARDEN_SKIN")]
        skin: Option<String>,
    },

    /// Lint generated themes in the themes directory
    Lint {
        /// Directory to lint (defaults to <root>/themes)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Print the mood-sensitive color overrides of a generated theme
    Overlay {
        /// Mood whose generated theme to read
        #[arg(long, short, default_value_t = Mood::DEFAULT)]
        mood: Mood,

        /// Existing color customizations (JSON object) to layer onto
        #[arg(long)]
        onto: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let project = Project::new(cli.root);

    match cli.command {
        Commands::Generate => {
            generate::generate(&project).context("theme generation failed")?;
        }

        Commands::Palette { mood } => {
            let palette = derive_palette(&project.read_tokens(), mood.as_deref());
            println!("{}", serde_json::to_string_pretty(&palette)?);
        }

        Commands::Tokens { source, skin } => {
            let skin = skin_from_env(skin.as_deref());
            publish(&project, source.as_deref(), skin.as_deref(), Utc::now())
                .context("token publishing failed")?;
        }

        Commands::Lint { dir } => {
            let dir = dir.unwrap_or_else(|| project.themes_dir());
            let reports = lint_dir(&dir).with_context(|| format!("cannot lint {}", dir.display()))?;

            let mut failed = 0;
            for (path, report) in &reports {
                let file = path.file_name().map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
                if !report.deprecated.is_empty() {
                    error!("✖ {file}: deprecated keys: {}", report.deprecated.join(", "));
                }
                if !report.missing.is_empty() {
                    error!("✖ {file}: missing keys: {}", report.missing.join(", "));
                }
                for entry in &report.non_hex {
                    warn!("! {file}: non-hex value (ok if intentional): {} → {}", entry.key, entry.value);
                }
                if !report.passed() {
                    failed += 1;
                }
            }

            if failed > 0 {
                return Err(GratiaError::LintFailed(failed).into());
            }
            info!("✓ Theme lint passed ({} file(s))", reports.len());
        }

        Commands::Overlay { mood, onto } => {
            let theme = project.theme_path(Some(mood));
            let overlay = overlay_from_file(&theme, onto.as_deref())
                .with_context(|| format!("cannot read {}", theme.display()))?;
            println!("{}", serde_json::to_string_pretty(&overlay)?);
        }
    }

    Ok(())
}
