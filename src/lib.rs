//
//  ynab-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # YNAB Client Library
//!
//! An async client for the YNAB (You Need A Budget) REST API, plus the
//! library side of the `ynab` command-line tool.
//!
//! ## Overview
//!
//! Every remote resource (user, budgets, accounts, categories, payees,
//! months, transactions and scheduled transactions) is a method on
//! [`YnabClient`]. All of them go through one request primitive that adds
//! the bearer token, unwraps the `{"data": ...}` envelope and turns failures
//! into a typed [`ClientError`].
//!
//! ## Module Structure
//!
//! - [`api`]: The client, endpoint table, transport and error types
//! - [`config`]: Configuration file management for the CLI
//! - [`cli`]: Command-line interface definitions using clap
//! - [`output`]: JSON output helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ynab_client::YnabClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ynab_client::ClientError> {
//!     let client = YnabClient::new("personal-access-token")?;
//!     let accounts = client.accounts("last-used", None).await?;
//!     println!("{}", accounts);
//!     client.close().await;
//!     Ok(())
//! }
//! ```
//!
//! ## Runtime
//!
//! The library never creates or installs an async runtime. Calls are plain
//! futures driven by whatever executor the caller runs; the `ynab` binary
//! uses tokio.

/// API client for YNAB.
///
/// Handles authentication, request building, response envelope unwrapping
/// and error classification.
pub mod api;

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the clap derive API.
pub mod cli;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/ynab/config.toml`
/// - macOS: `~/Library/Application Support/ynab/config.toml`
/// - Windows: `%APPDATA%\ynab\config.toml`
pub mod config;

/// JSON output helpers for the CLI.
pub mod output;

pub use api::{ClientError, YnabClient};
pub use cli::Cli;
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes and configuration paths.
pub const APP_NAME: &str = "ynab";

/// Application version constant, derived from Cargo.toml at compile time.
///
/// # Example
///
/// ```rust
/// use ynab_client::VERSION;
///
/// println!("ynab version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    use crate::api::ClientError;

    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Authentication required or failed (HTTP 401).
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found (HTTP 404).
    pub const NOT_FOUND: i32 = 8;

    /// API rate limit exceeded (HTTP 429).
    ///
    /// YNAB allows 200 requests per hour per access token.
    pub const RATE_LIMIT: i32 = 32;

    /// Could not reach the API.
    pub const NETWORK: i32 = 33;

    /// Maps an error to the exit code the CLI should use.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ynab_client::exit_codes;
    /// use ynab_client::api::{ApiError, ClientError};
    ///
    /// let err = anyhow::Error::from(ClientError::from(ApiError::new(404, serde_json::json!({}))));
    /// assert_eq!(exit_codes::for_error(&err), exit_codes::NOT_FOUND);
    /// ```
    pub fn for_error(err: &anyhow::Error) -> i32 {
        match err.downcast_ref::<ClientError>() {
            Some(ClientError::Api(api)) => match api.status {
                401 => AUTH_ERROR,
                404 => NOT_FOUND,
                429 => RATE_LIMIT,
                _ => ERROR,
            },
            Some(ClientError::Usage(_)) => USAGE,
            Some(ClientError::Transport(_)) => NETWORK,
            _ => ERROR,
        }
    }
}
