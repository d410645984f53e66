use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use nela_core::{ArabicNela, ExtractorConfig};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    name = "arabic-nela",
    about = "Style and bias features for Arabic text"
)]
struct Cli {
    /// Path to the extractor config file (JSON); falls back to $NELA_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Stopword file, one word per line (overrides the config)
    #[arg(long, global = true)]
    stopwords: Option<PathBuf>,

    /// Directory with one `<category>.txt` file per lexicon (overrides the config)
    #[arg(long, global = true)]
    lexicon_dir: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true, env = "NELA_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute every feature and print them as a flat JSON object
    Extract {
        /// Input file; stdin is read when neither a file nor --text is given
        file: Option<PathBuf>,
        /// Inline text instead of a file
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the approximate syllable count of each word
    Syllables {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Write the default configuration to a file
    InitConfig { path: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    match &cli.command {
        Commands::Extract { file, text, pretty } => {
            let nela = build_extractor(&cli)?;
            let input = read_input(file.as_ref(), text.as_deref())?;
            debug!(bytes = input.len(), "read input text");

            let features = nela.extract(&input).to_map();
            let output = if *pretty {
                serde_json::to_string_pretty(&features)?
            } else {
                serde_json::to_string(&features)?
            };
            println!("{output}");
        }
        Commands::Syllables { words } => {
            let nela = ArabicNela::new();
            for word in words {
                println!("{word}\t{}", nela.count_syllables(word));
            }
        }
        Commands::InitConfig { path } => {
            ExtractorConfig::default()
                .to_path(path)
                .with_context(|| format!("writing config to {}", path.display()))?;
            info!("wrote default configuration to {}", path.display());
        }
    }

    Ok(())
}

fn build_extractor(cli: &Cli) -> anyhow::Result<ArabicNela> {
    let mut config = match &cli.config {
        Some(path) => ExtractorConfig::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ExtractorConfig::from_env_or_default()
            .context("loading config from $NELA_CONFIG")?,
    };
    if let Some(path) = &cli.stopwords {
        config.stopwords_path = Some(path.clone());
    }
    if let Some(dir) = &cli.lexicon_dir {
        config.lexicon_dir = Some(dir.clone());
    }

    Ok(ArabicNela::from_config(&config)?)
}

fn read_input(file: Option<&PathBuf>, text: Option<&str>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn init_logging(json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,nela_core=info".into());
    let registry = tracing_subscriber::registry().with(env_filter);

    // stdout carries the feature output
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        registry.with(fmt_layer.json()).init();
    } else {
        registry.with(fmt_layer).init();
    }
}
