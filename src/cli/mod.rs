//
//  ynab-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod account;
mod api;
mod budget;
mod category;
mod config;
mod month;
mod payee;
mod scheduled;
mod transaction;

pub use account::AccountCommand;
pub use api::ApiCommand;
pub use budget::BudgetCommand;
pub use category::CategoryCommand;
pub use config::ConfigCommand;
pub use month::MonthCommand;
pub use payee::PayeeCommand;
pub use scheduled::ScheduledCommand;
pub use transaction::TransactionCommand;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;

use crate::api::{ReqwestTransport, YnabClient};
use crate::config::Config;
use crate::output::OutputWriter;

/// Budget id YNAB resolves to the most recently used budget.
pub const LAST_USED_BUDGET: &str = "last-used";

/// Work with YNAB from the command line
#[derive(Parser, Debug)]
#[command(
    name = "ynab",
    version,
    about = "Work with YNAB from the command line",
    long_about = "ynab is a CLI for the YNAB (You Need A Budget) API.\n\n\
                  It brings budgets, accounts, categories and transactions to your terminal.",
    propagate_version = true,
    after_help = "Use 'ynab <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options shared by every command
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Personal access token
    #[arg(long, global = true, env = "YNAB_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Budget id (defaults to the configured budget, then "last-used")
    #[arg(long, short = 'b', global = true, env = "YNAB_BUDGET")]
    pub budget: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, env = "YNAB_BASE_URL")]
    pub base_url: Option<String>,

    /// Print compact single-line JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the authenticated user
    User,

    /// Work with budgets
    Budget(BudgetCommand),

    /// Work with accounts
    #[command(visible_alias = "acct")]
    Account(AccountCommand),

    /// Work with categories
    #[command(visible_alias = "cat")]
    Category(CategoryCommand),

    /// Work with payees and payee locations
    Payee(PayeeCommand),

    /// Work with budget months
    Month(MonthCommand),

    /// Work with transactions
    #[command(visible_alias = "tx")]
    Transaction(TransactionCommand),

    /// Work with scheduled transactions
    Scheduled(ScheduledCommand),

    /// Make an authenticated API request
    Api(ApiCommand),

    /// Manage configuration
    Config(ConfigCommand),

    /// Show version information
    Version,
}

/// A configured client plus the settings a command needs.
pub(crate) struct Session {
    pub client: YnabClient,
    pub budget: String,
    pub output: OutputWriter,
}

impl Session {
    /// Builds a session from flags, environment and the config file.
    pub fn open(global: &GlobalOptions) -> Result<Self> {
        let config = Config::load()?;
        Self::from_config(global, config)
    }

    pub fn from_config(global: &GlobalOptions, config: Config) -> Result<Self> {
        let token = global
            .token
            .clone()
            .or(config.access_token.clone())
            .context(
                "No access token. Set YNAB_ACCESS_TOKEN, pass --token, \
                 or run 'ynab config set access_token <TOKEN>'",
            )?;

        let transport = match config.timeout() {
            Some(timeout) => ReqwestTransport::with_timeout(timeout),
            None => ReqwestTransport::new(),
        }
        .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        let mut client = YnabClient::with_transport(token, Arc::new(transport))?;
        if let Some(base_url) = global.base_url.as_ref().or(config.base_url.as_ref()) {
            client = client.with_base_url(base_url)?;
        }

        let budget = global
            .budget
            .clone()
            .or(config.default_budget)
            .unwrap_or_else(|| LAST_USED_BUDGET.to_string());

        Ok(Self {
            client,
            budget,
            output: OutputWriter::from_flag(global.json),
        })
    }

    /// Prints `value` and releases the client.
    pub async fn finish<T: Serialize>(self, value: &T) -> Result<()> {
        self.output.write(value)?;
        self.client.close().await;
        Ok(())
    }
}

/// Prints the authenticated user.
pub async fn show_user(global: &GlobalOptions) -> Result<()> {
    let session = Session::open(global)?;
    let data = session.client.user().await?;
    session.finish(&data).await
}

/// Reads a JSON document from a file, or from stdin when `path` is `-`.
pub(crate) fn read_json_input(path: &str) -> Result<Value> {
    let content = if path == "-" {
        let mut buffer = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
    };

    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_session_requires_token() {
        let global = GlobalOptions::default();
        let err = Session::from_config(&global, Config::default()).err().unwrap();
        assert!(err.to_string().contains("No access token"));
    }

    #[test]
    fn test_session_resolution_order() {
        let global = GlobalOptions {
            token: Some("flag-token".to_string()),
            base_url: Some("http://127.0.0.1:9/v1".to_string()),
            ..Default::default()
        };
        let config = Config {
            access_token: Some("config-token".to_string()),
            default_budget: Some("config-budget".to_string()),
            ..Default::default()
        };

        let session = Session::from_config(&global, config).unwrap();
        assert_eq!(session.client.access_token(), "flag-token");
        assert_eq!(session.client.base_url(), "http://127.0.0.1:9/v1");
        assert_eq!(session.budget, "config-budget");
    }

    #[test]
    fn test_session_defaults_to_last_used_budget() {
        let global = GlobalOptions {
            token: Some("t".to_string()),
            ..Default::default()
        };
        let session = Session::from_config(&global, Config::default()).unwrap();
        assert_eq!(session.budget, LAST_USED_BUDGET);
    }

    #[test]
    fn test_read_json_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tx.json");
        std::fs::write(&path, r#"{"amount": -1000}"#).unwrap();

        let value = read_json_input(path.to_str().unwrap()).unwrap();
        assert_eq!(value["amount"], -1000);
    }
}
