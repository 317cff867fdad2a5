use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grocery_list::consolidator::GroceryListBuilder;
use grocery_list::grocery_config::GroceryConfig;
use grocery_list::occurrence_loader::load_occurrences;
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Output rendering for the generated grocery list
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Consolidate recipe ingredient occurrences into a grocery list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON file of ingredient occurrences
    #[arg(env = "GROCERY_INPUT")]
    input: PathBuf,

    /// Output format
    #[arg(long, value_enum, env = "GROCERY_OUTPUT", default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Shorthand for `--format json`
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging; log records from the library are bridged into tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if env::var("GROCERY_LOG_FORMAT").map(|v| v == "json").unwrap_or(false) {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let cli = Cli::parse();

    let config = GroceryConfig::from_env().context("Invalid GROCERY_* configuration")?;
    let builder = GroceryListBuilder::with_config(config)?;

    let occurrences = load_occurrences(&cli.input)
        .with_context(|| format!("Failed to load {}", cli.input.display()))?;
    info!("Loaded {} ingredient occurrences", occurrences.len());

    let list = builder.build(&occurrences);

    match cli.output_format() {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&list)?),
        OutputFormat::Text => print!("{}", list),
    }

    Ok(())
}
