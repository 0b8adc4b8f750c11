//
//  ynab-client
//  api/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request payload types for the YNAB API.
//!
//! Responses are returned as raw [`serde_json::Value`] payloads; the types
//! here only cover what callers send. Every mutating method on
//! [`YnabClient`](crate::api::YnabClient) accepts any `Serialize` value, so a
//! `serde_json::json!` literal works just as well as these structs.
//!
//! # Amounts
//!
//! YNAB expresses money in *milliunits*: `1000` is one unit of the budget's
//! currency, so `-12340` is an outflow of 12.34.
//!
//! # Example
//!
//! ```rust
//! use ynab_client::api::models::{SaveTransaction, ClearedStatus};
//!
//! let tx = SaveTransaction::new("account-id", "2019-01-02", -12340)
//!     .payee_name("Coffee Shop")
//!     .cleared(ClearedStatus::Cleared);
//!
//! let json = serde_json::to_value(&tx).unwrap();
//! assert_eq!(json["amount"], -12340);
//! assert!(json.get("memo").is_none());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Transaction type filter accepted by the transaction list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Only transactions without a category.
    Uncategorized,
    /// Only transactions awaiting approval.
    Unapproved,
}

impl TransactionType {
    /// The query-string value of the filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uncategorized => "uncategorized",
            Self::Unapproved => "unapproved",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cleared state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClearedStatus {
    Cleared,
    Uncleared,
    Reconciled,
}

/// Flag colour of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FlagColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

/// A transaction to create or update.
///
/// For bulk updates, set either `id` or `import_id` to identify the
/// transaction being changed. Unset fields are omitted from the request so
/// the server leaves them untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveTransaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// ISO date (e.g. `2016-12-01`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Amount in milliunits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee_id: Option<String>,

    /// Used to find or create a payee when `payee_id` is not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleared: Option<ClearedStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag_color: Option<FlagColor>,

    /// Deduplication key, e.g. `YNAB:-294230:2015-12-30:1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_id: Option<String>,
}

impl SaveTransaction {
    /// Creates a transaction with the fields required for creation.
    pub fn new(account_id: impl Into<String>, date: impl Into<String>, amount: i64) -> Self {
        Self {
            account_id: Some(account_id.into()),
            date: Some(date.into()),
            amount: Some(amount),
            ..Default::default()
        }
    }

    /// Creates an update diff addressed by transaction id.
    pub fn update(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn payee_id(mut self, payee_id: impl Into<String>) -> Self {
        self.payee_id = Some(payee_id.into());
        self
    }

    pub fn payee_name(mut self, payee_name: impl Into<String>) -> Self {
        self.payee_name = Some(payee_name.into());
        self
    }

    pub fn category_id(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn cleared(mut self, cleared: ClearedStatus) -> Self {
        self.cleared = Some(cleared);
        self
    }

    pub fn approved(mut self, approved: bool) -> Self {
        self.approved = Some(approved);
        self
    }

    pub fn flag_color(mut self, flag_color: FlagColor) -> Self {
        self.flag_color = Some(flag_color);
        self
    }

    pub fn import_id(mut self, import_id: impl Into<String>) -> Self {
        self.import_id = Some(import_id.into());
        self
    }
}

/// Update for a category in a specific budget month.
///
/// Only `budgeted` can be changed through this endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveMonthCategory {
    /// Budgeted amount in milliunits.
    pub budgeted: i64,
}
