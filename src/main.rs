//
//  ynab-client
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ynab_client::cli::{self, Cli, Commands};
use ynab_client::exit_codes;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let result = run(cli).await;

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::for_error(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("YNAB_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::User => cli::show_user(&cli.global).await,
        Commands::Budget(cmd) => cmd.run(&cli.global).await,
        Commands::Account(cmd) => cmd.run(&cli.global).await,
        Commands::Category(cmd) => cmd.run(&cli.global).await,
        Commands::Payee(cmd) => cmd.run(&cli.global).await,
        Commands::Month(cmd) => cmd.run(&cli.global).await,
        Commands::Transaction(cmd) => cmd.run(&cli.global).await,
        Commands::Scheduled(cmd) => cmd.run(&cli.global).await,
        Commands::Api(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("ynab version {}", ynab_client::VERSION);
            Ok(())
        }
    }
}
