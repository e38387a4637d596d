//! `mrisafe` — terminal client for the MRI implant safety search proxy.

mod client;
mod render;
mod search;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use client::ApiClient;
use search::{InFlightPolicy, SearchOrchestrator, SearchState};

#[derive(Parser)]
#[command(name = "mrisafe")]
#[command(about = "MRI implant safety search CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up MRI safety information for a medical implant
    Search {
        /// Implant name to search for
        implant_name: String,
        /// Print the raw JSON result instead of the formatted report
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search { implant_name, json } => {
            let client = Arc::new(ApiClient::from_env()?);
            let mut orchestrator =
                SearchOrchestrator::new(client, InFlightPolicy::CancelPrevious);

            orchestrator.submit(&implant_name);
            match orchestrator.wait().await {
                SearchState::Success(result) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(result)?);
                    } else {
                        render::print_report(&render::build_report(result));
                    }
                }
                SearchState::Failed(message) => {
                    eprintln!("{}", message.red());
                    std::process::exit(1);
                }
                // submit + wait always resolves the session
                SearchState::Idle | SearchState::Loading => unreachable!(),
            }
        }
    }

    Ok(())
}
