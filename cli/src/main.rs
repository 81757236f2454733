mod error;
mod replay;

use clap::{Parser, Subcommand, ValueEnum};
use error::{CliError, Result};
use serde_json::Value;
use sift_core::types::{AppConfig, CaseMatching, MatchMode};
use sift_search::{FilteredSearch, ManualClock, SearchConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sift")]
#[command(version)]
#[command(about = "Debounced multi-key filtering of JSON records", long_about = None)]
struct Cli {
    /// JSON file holding an array of records
    #[arg(short, long)]
    items: PathBuf,

    /// TOML config file (defaults apply when missing)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fields to search, comma separated (overrides config)
    #[arg(short, long, value_delimiter = ',')]
    keys: Option<Vec<String>>,

    /// Debounce delay in milliseconds (overrides config)
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Case matching (overrides config)
    #[arg(long, value_enum)]
    case: Option<CaseArg>,

    /// Match mode (overrides config)
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter once and print the matching records as JSON
    Query {
        /// Query text (use -- before text if it starts with -)
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Replay a timed keystroke script and print each settled query
    Replay {
        /// Script of `<t_ms> <query>` lines
        script: PathBuf,

        /// Print the matching records after each settle
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CaseArg {
    Insensitive,
    Sensitive,
    Smart,
}

impl From<CaseArg> for CaseMatching {
    fn from(arg: CaseArg) -> Self {
        match arg {
            CaseArg::Insensitive => CaseMatching::Insensitive,
            CaseArg::Sensitive => CaseMatching::Sensitive,
            CaseArg::Smart => CaseMatching::Smart,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Substring,
    Fuzzy,
}

impl From<ModeArg> for MatchMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Substring => MatchMode::Substring,
            ModeArg::Fuzzy => MatchMode::Fuzzy,
        }
    }
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<()> {
    let config = search_config(cli)?;
    let items = load_items(&cli.items)?;

    match &cli.command {
        Commands::Query { text } => cmd_query(items, config, text),
        Commands::Replay { script, show } => cmd_replay(items, config, script, *show),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolves the search config from the config file and command line overrides.
fn search_config(cli: &Cli) -> Result<SearchConfig> {
    let mut app_config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    if let Some(keys) = &cli.keys {
        app_config.search.keys = keys.clone();
    }
    if let Some(delay_ms) = cli.delay_ms {
        app_config.search.delay_ms = delay_ms;
    }
    if let Some(case) = cli.case {
        app_config.search.case_matching = case.into();
    }
    if let Some(mode) = cli.mode {
        app_config.search.mode = mode.into();
    }

    let errors = app_config.validate();
    if !errors.is_empty() {
        for error in &errors {
            tracing::warn!(%error, "invalid config value replaced");
        }
        app_config = app_config.with_defaults_for_invalid();
    }

    Ok(SearchConfig::try_from(&app_config.search)?)
}

fn load_items(path: &Path) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let items: Vec<Value> = serde_json::from_str(&content).map_err(|source| CliError::Items {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(count = items.len(), "items loaded");
    Ok(items)
}

fn cmd_query(items: Vec<Value>, config: SearchConfig, text: &str) -> Result<()> {
    let clock = ManualClock::new();
    let mut search: FilteredSearch<Value, ManualClock> =
        FilteredSearch::new(items, config, clock.clone());

    search.set_query(text);
    clock.advance(search.delay());
    search.tick();

    let matches = search.filtered_items().to_vec();
    println!("{}", serde_json::to_string_pretty(&matches)?);
    Ok(())
}

fn cmd_replay(items: Vec<Value>, config: SearchConfig, script: &Path, show: bool) -> Result<()> {
    let text = std::fs::read_to_string(script).map_err(|source| CliError::Read {
        path: script.to_path_buf(),
        source,
    })?;
    let keystrokes = replay::parse_script(&text)?;

    let clock = ManualClock::new();
    let mut search: FilteredSearch<Value, ManualClock> =
        FilteredSearch::new(items, config, clock.clone());

    for settle in replay::run(&mut search, &clock, &keystrokes) {
        println!(
            "t={} query={} matches={}",
            settle.at.as_millis(),
            serde_json::to_string(&settle.query)?,
            settle.matches.len()
        );
        if show {
            for record in settle.matches.iter() {
                println!("  {}", serde_json::to_string(record)?);
            }
        }
    }
    Ok(())
}
