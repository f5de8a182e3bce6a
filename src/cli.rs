use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use natives_redirect::commands;
use natives_redirect::core::config::Settings;
use natives_redirect::core::error::NativesError;
use natives_redirect::core::maven::Repository;
use natives_redirect::core::platforms::Platform;
use natives_redirect::core::redirect::Lwjgl;

/// Generates the native library redirect tables used by the launcher.
#[derive(Debug, Parser)]
#[command(name = "natives-redirect", version)]
#[command(about = "Per-platform native library redirect table generator", long_about = None)]
pub struct Cli {
    /// Settings file (defaults to <config dir>/natives-redirect/config.json).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the artifact cache directory.
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Download from primary repository URLs instead of mirrors.
    #[arg(long, global = true)]
    pub no_mirror: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve every redirect rule and write the JSON descriptor.
    Generate {
        /// Output file (defaults to the configured output, build/natives.json).
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Only generate these platforms (repeatable).
        #[arg(long = "platform", value_parser = parse_platform)]
        platforms: Vec<Platform>,
    },

    /// Resolve one Maven coordinate and print its library descriptor.
    Fetch {
        /// Coordinate, e.g. org.lwjgl:lwjgl:3.3.2:natives-linux-arm64.
        coordinate: String,

        /// Repository id.
        #[arg(long, default_value = "maven-central", value_parser = parse_repository)]
        repo: Repository,
    },

    /// List the supported platforms.
    Platforms,

    /// List the LWJGL 3 modules covered by the tables.
    Lwjgl,
}

fn parse_platform(s: &str) -> Result<Platform, String> {
    s.parse().map_err(|e: NativesError| e.to_string())
}

fn parse_repository(s: &str) -> Result<Repository, String> {
    s.parse().map_err(|e: NativesError| e.to_string())
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::load(self.config.as_deref()).context("loading settings")?;
        if let Some(cache_dir) = &self.cache_dir {
            settings.cache_dir = cache_dir.clone();
        }
        if self.no_mirror {
            settings.use_mirrors = false;
        }
        tracing::debug!("settings: {:?}", settings);
        Ok(settings)
    }

    pub async fn run(self) -> Result<()> {
        match &self.command {
            CliCommand::Generate { output, platforms } => {
                let settings = self.settings()?;
                let output = output.clone().unwrap_or_else(|| settings.output.clone());
                commands::generate(&settings, &output, platforms)
                    .await
                    .with_context(|| format!("generating {}", output.display()))?;
            }
            CliCommand::Fetch { coordinate, repo } => {
                let settings = self.settings()?;
                let library = commands::fetch_library(&settings, coordinate, *repo)
                    .await
                    .with_context(|| format!("fetching {coordinate}"))?;
                println!("{}", serde_json::to_string_pretty(&library)?);
            }
            CliCommand::Platforms => {
                for platform in Platform::ALL {
                    println!("{platform}");
                }
            }
            CliCommand::Lwjgl => {
                for lib in Lwjgl::BASE1 {
                    println!("{lib}");
                }
            }
        }
        Ok(())
    }
}
