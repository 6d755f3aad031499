use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use chainscope_core::{format, icon, Capability, ChainList};
use colored::Colorize;
use url::Url;

mod api;
mod render;

/// Default chain-listing endpoint
const DEFAULT_ENDPOINT: &str = "https://api.sim.dune.com/idx/supported-chains";

/// chainscope — supported-chains toolkit CLI
///
/// Resolve chain icons, format chain names, and list supported chains
/// with their capabilities.
#[derive(Parser)]
#[command(name = "chainscope", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a chain name to its canonical icon identifier
    Resolve {
        /// Chain name as reported by the listing API
        name: String,
    },

    /// Print the branded icon URL for a chain name
    IconUrl {
        /// Chain name as reported by the listing API
        name: String,
    },

    /// Convert a chain name to its PascalCase enum token
    Enum {
        /// Chain name as reported by the listing API
        name: String,
        /// Print the display label instead of the token
        #[arg(long)]
        display: bool,
    },

    /// List supported chains with icons, enum tokens and ids
    Chains {
        #[command(flatten)]
        source: Source,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Group chains by supported capability
    Capabilities {
        #[command(flatten)]
        source: Source,
        /// Show a single capability, e.g. balances or token_info
        #[arg(long)]
        capability: Option<Capability>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

/// Where to load the chain document from
#[derive(Args)]
struct Source {
    /// Read the chain document from a local JSON file instead of the API
    #[arg(long, conflicts_with = "url")]
    file: Option<PathBuf>,

    /// Chain-listing endpoint to query
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    url: Url,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let exit_code = match run(cli.command).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            2
        }
    };

    process::exit(exit_code);
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Resolve { name } => {
            println!("{}", icon::resolve(&name));
        }
        Commands::IconUrl { name } => {
            println!("{}", icon::icon_url(&name));
        }
        Commands::Enum { name, display } => {
            let token = format::to_enum_format(&name);
            if display {
                println!("{}", format::to_display_name(&token));
            } else {
                println!("{}", token);
            }
        }
        Commands::Chains { source, json } => {
            let list = load(&source).await?;
            if json {
                render::print_chains_json(&list)?;
            } else {
                render::print_chains(&list);
            }
        }
        Commands::Capabilities {
            source,
            capability,
            json,
        } => {
            let list = load(&source).await?;
            if json {
                render::print_capabilities_json(&list, capability)?;
            } else {
                render::print_capabilities(&list, capability);
            }
        }
        Commands::Version => {
            println!(
                "chainscope {} (chainscope-core {})",
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_VERSION")
            );
        }
    }
    Ok(())
}

/// Load the chain document from the configured source
async fn load(source: &Source) -> Result<ChainList> {
    match &source.file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let list = ChainList::from_json(&text)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(list)
        }
        None => {
            let api = api::SupportedChainsApi::new(reqwest::Client::new(), source.url.clone());
            api.supported_chains()
                .await
                .context("fetching supported chains")
        }
    }
}
