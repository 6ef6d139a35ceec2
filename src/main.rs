// SPDX-License-Identifier: GPL-3.0-only

use pokesprites::{Api, Config, DownloadOutcome, ReqwestHttpClient, pipeline};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None => {}
        Some("-h") | Some("--help") => {
            print_help();
            return;
        }
        Some(flag) => {
            println!("Invalid flag: {flag}");
            print_help();
            return;
        }
    }

    let config = Config::default();

    let client = match ReqwestHttpClient::new(&config.user_agent, config.request_timeout) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build the HTTP client: {e}");
            return;
        }
    };
    let api = Api::new(client, &config);

    match pipeline::run(&api, &config).await {
        Ok(outcomes) => {
            let written = outcomes
                .iter()
                .flat_map(|outcome| [&outcome.korean, &outcome.english])
                .filter(|download| matches!(download, Some(DownloadOutcome::Written(_))))
                .count();
            tracing::info!(
                species = outcomes.len(),
                written,
                "Finished downloading sprites"
            );
        }
        Err(e) => tracing::error!("{e}"),
    }
}

fn print_help() {
    println!(
        "Usage: {}",
        std::env::args()
            .next()
            .unwrap_or_else(|| "pokesprites".to_string())
    );
    println!();
    println!("Downloads the sprites of generations 1 to 3 from PokéApi into");
    println!("sprites/kr (Korean names) and sprites/en (English names).");
    println!();
    println!("FLAGS:");
    println!("  -h, --help    Print this help");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=debug) to change the log verbosity.");
}
