//
//  ynab-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the async client for the YNAB REST API
//! (`https://api.youneedabudget.com/v1`).
//!
//! ## Architecture
//!
//! - [`client`]: The request pipeline and every resource method
//! - [`endpoints`]: Static table of path templates, verbs and body wrap keys
//! - [`query`]: Optional query parameter assembly
//! - [`transport`]: The pluggable HTTP transport and its reqwest implementation
//! - [`models`]: Typed request payloads
//! - [`common`]: Error types and the response envelope
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ynab_client::api::{TransactionFilter, YnabClient};
//! use ynab_client::api::models::TransactionType;
//!
//! # async fn example() -> ynab_client::api::Result<()> {
//! let client = YnabClient::new("your-token")?;
//!
//! let unapproved = client
//!     .transactions("last-used", &TransactionFilter::new().kind(TransactionType::Unapproved))
//!     .await?;
//!
//! client.close().await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`Result`], whose error is a [`ClientError`]:
//!
//! - `Transport`: the HTTP exchange did not complete
//! - `Parse` / `MissingData`: the body could not be decoded
//! - `Api`: the server answered with an `error` object or a status of 400+
//! - `Usage`: invalid arguments, rejected before any request is sent

/// The request pipeline.
pub mod client;

/// Shared error and envelope types.
pub mod common;

/// Endpoint descriptors.
pub mod endpoints;

/// Request payload types.
pub mod models;

/// Query-string assembly.
pub mod query;

/// HTTP transport abstraction.
pub mod transport;

pub use client::{Result, YnabClient, BASE_URL};
pub use common::{ApiError, ClientError};
pub use query::{QueryParams, TransactionFilter};
pub use transport::{HttpMethod, ReqwestTransport, Transport};
