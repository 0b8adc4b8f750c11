//
//  ynab-client
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! Sends an authenticated request to any path under the API root through
//! the same pipeline the typed commands use, so the `data` payload is
//! printed and failures surface as the usual errors.
//!
//! ## Examples
//!
//! ```bash
//! # Fetch the current user
//! ynab api /user
//!
//! # Only changes since a known server knowledge value
//! ynab api /budgets/last-used/accounts -q last_knowledge_of_server=42
//!
//! # Budget a category for a month
//! ynab api -X PATCH /budgets/last-used/months/2024-01-01/categories/<id> \
//!     -F category.budgeted=50000
//! ```

use anyhow::{bail, Result};
use clap::Args;
use serde_json::{Map, Value};

use crate::api::{HttpMethod, QueryParams};

use super::{read_json_input, GlobalOptions, Session};

/// Make direct API requests
#[derive(Args, Debug)]
pub struct ApiCommand {
    /// API path relative to the base URL (e.g., /budgets)
    pub path: String,

    /// HTTP method (GET, POST, PUT, PATCH)
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Query parameters as key=value (can be specified multiple times)
    #[arg(long, short = 'q', action = clap::ArgAction::Append)]
    pub query: Vec<String>,

    /// Request body fields as JSON (key=value, can be nested with dots)
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// Raw field values (not JSON-encoded, strings only)
    #[arg(long, action = clap::ArgAction::Append)]
    pub raw_field: Vec<String>,

    /// Read request body from file (- for stdin)
    #[arg(long, short = 'f', conflicts_with_all = ["field", "raw_field"])]
    pub input: Option<String>,
}

impl ApiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let method: HttpMethod = self.method.parse().map_err(anyhow::Error::msg)?;
        let query = self.build_query()?;
        let body = self.build_body()?;

        let session = Session::open(global)?;
        let data = session
            .client
            .request(
                &self.path,
                method,
                (!query.is_empty()).then_some(&query),
                body.as_ref(),
            )
            .await?;
        session.finish(&data).await
    }

    fn build_query(&self) -> Result<QueryParams> {
        self.query
            .iter()
            .map(|pair| split_pair(pair).map(|(k, v)| (k.to_string(), v.to_string())))
            .collect()
    }

    fn build_body(&self) -> Result<Option<Value>> {
        if let Some(input) = &self.input {
            return read_json_input(input).map(Some);
        }

        if self.field.is_empty() && self.raw_field.is_empty() {
            return Ok(None);
        }

        let mut body = Map::new();

        for field in &self.field {
            let (key, value) = split_pair(field)?;
            set_nested_value(&mut body, key, parse_value(value));
        }

        for field in &self.raw_field {
            let (key, value) = split_pair(field)?;
            set_nested_value(&mut body, key, Value::String(value.to_string()));
        }

        Ok(Some(Value::Object(body)))
    }
}

fn split_pair(field: &str) -> Result<(&str, &str)> {
    match field.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => bail!("Invalid field format: {}. Expected key=value", field),
    }
}

/// Interprets a `-F` value as JSON where it looks like JSON.
fn parse_value(value: &str) -> Value {
    match value {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => {
            if let Ok(n) = value.parse::<i64>() {
                Value::Number(n.into())
            } else if value.starts_with('[') || value.starts_with('{') {
                serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()))
            } else {
                Value::String(value.to_string())
            }
        }
    }
}

fn set_nested_value(obj: &mut Map<String, Value>, key: &str, value: Value) {
    match key.split_once('.') {
        None => {
            obj.insert(key.to_string(), value);
        }
        Some((first, rest)) => {
            let entry = obj
                .entry(first.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(nested) = entry {
                set_nested_value(nested, rest, value);
            }
        }
    }
}
