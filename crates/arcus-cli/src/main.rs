mod commands;

use std::path::PathBuf;

use arcus_core::{DocumentKind, EngagementMode};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "arcus-cli")]
#[command(about = "Parse generated campaign deliverables into structured records")]
struct Cli {
    /// Estimate missing engagement with this seed (implies seeded mode)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse one raw markdown deliverable and print its records as JSON
    Parse {
        /// Which kind of deliverable the input is
        #[arg(long, value_enum)]
        kind: KindArg,
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// Parse a saved campaign response and print every parsed deliverable
    Campaign {
        /// Campaign response JSON; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// Print the effective field vocabularies as YAML
    Vocabulary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Social,
    Ads,
    Brand,
}

impl From<KindArg> for DocumentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Social => DocumentKind::SocialPosts,
            KindArg::Ads => DocumentKind::AdCopy,
            KindArg::Brand => DocumentKind::BrandGuidelines,
        }
    }
}

/// A `--seed` on the command line wins over `ARCUS_ENGAGEMENT_SEED` and turns
/// estimation on if the environment left it off.
fn apply_seed(config: &mut arcus_core::AppConfig, seed: Option<u64>) {
    if let Some(seed) = seed {
        config.engagement_seed = seed;
        if config.engagement == EngagementMode::Off {
            config.engagement = EngagementMode::Seeded;
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = arcus_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    apply_seed(&mut config, cli.seed);
    let parser = arcus_parser::DeliverableParser::from_config(&config)?;
    tracing::debug!(
        engagement = ?config.engagement,
        seed = config.engagement_seed,
        vocabulary = ?config.vocabulary_path,
        "parser configured"
    );

    match cli.command {
        Some(Commands::Parse { kind, file }) => {
            commands::run_parse(&parser, kind.into(), file.as_deref())?;
        }
        Some(Commands::Campaign { file }) => {
            commands::run_campaign(&parser, file.as_deref())?;
        }
        Some(Commands::Vocabulary) => commands::run_vocabulary(&parser)?,
        None => println!("arcus-cli: run with --help to list commands"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
