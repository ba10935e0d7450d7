//! Play one match, or a batch, from a match input file.
//!
//!     duel --input in.file.json --output summary.json --seed 42
//!     duel --input in.file.json --matches 1000 > batch.json

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ccg_duel::game::{run_batch, MatchBuilder};
use ccg_duel::io::{write_summary, MatchInput};
use ccg_duel::{CardCatalog, MatchConfig};

#[derive(Parser)]
#[command(name = "duel", about = "Simulate a two-player card battle")]
struct Cli {
    /// Match input: both decks and strategies
    #[arg(short, long, default_value = "in.file.json", env = "DUEL_INPUT")]
    input: PathBuf,

    /// Where to write the summary (default: stdout)
    #[arg(short, long, env = "DUEL_OUTPUT")]
    output: Option<PathBuf>,

    /// Match rules (TOML)
    #[arg(long, env = "DUEL_CONFIG")]
    config: Option<PathBuf>,

    /// Card catalog (TOML; default: built-in)
    #[arg(long, env = "DUEL_CATALOG")]
    catalog: Option<PathBuf>,

    /// RNG seed; overrides the config file
    #[arg(long, env = "DUEL_SEED")]
    seed: Option<u64>,

    /// Number of matches to run
    #[arg(short, long, default_value = "1")]
    matches: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let catalog = Arc::new(match &cli.catalog {
        Some(path) => CardCatalog::load(path)?,
        None => CardCatalog::builtin()?,
    });
    tracing::info!(cards = catalog.len(), "catalog loaded");

    let [first, second] = MatchInput::load(&cli.input)?.into_setups()?;

    if cli.matches <= 1 {
        let summary = MatchBuilder::new(config)
            .catalog(catalog)
            .player(first)
            .player(second)
            .build()?
            .run()?;
        write_summary(&summary, cli.output.as_deref())?;
    } else {
        let summaries = run_batch(&config, &catalog, &[first, second], cli.matches)
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(
            matches = summaries.len(),
            ties = summaries.iter().filter(|s| s.is_tie()).count(),
            "batch finished"
        );
        write_summary(&summaries, cli.output.as_deref())?;
    }

    Ok(())
}
