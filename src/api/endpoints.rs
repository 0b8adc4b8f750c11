//
//  ynab-client
//  api/endpoints.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Static table of YNAB API endpoints.
//!
//! Each [`Endpoint`] pairs a path template with its HTTP verb and, for
//! mutations, the key the payload is wrapped under. Resource methods on
//! [`YnabClient`](crate::api::YnabClient) are one-line lookups into this
//! table.
//!
//! ```rust
//! use ynab_client::api::endpoints::CATEGORY_MONTH;
//!
//! let path = CATEGORY_MONTH.resolve(&["B", "2018-01-01", "C"]).unwrap();
//! assert_eq!(path, "/budgets/B/months/2018-01-01/categories/C");
//! ```

use super::common::ClientError;
use super::transport::HttpMethod;

/// A remote resource action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Stable name, matching the client method.
    pub name: &'static str,
    /// Path relative to the base URL, with `{placeholder}` segments.
    pub template: &'static str,
    /// HTTP verb.
    pub method: HttpMethod,
    /// Key the request payload is wrapped under, for mutations.
    pub wrap: Option<&'static str>,
}

impl Endpoint {
    const fn get(name: &'static str, template: &'static str) -> Self {
        Self {
            name,
            template,
            method: HttpMethod::Get,
            wrap: None,
        }
    }

    const fn mutation(
        name: &'static str,
        template: &'static str,
        method: HttpMethod,
        wrap: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            template,
            method,
            wrap,
        }
    }

    /// Substitutes `ids` into the template, in placeholder order.
    ///
    /// Identifiers are used verbatim. A missing or empty identifier, or an
    /// extra one, is a usage error.
    pub fn resolve(&self, ids: &[&str]) -> Result<String, ClientError> {
        let mut ids = ids.iter();
        let mut path = String::with_capacity(self.template.len() + 64);

        for segment in self.template.split('/').skip(1) {
            path.push('/');
            match placeholder(segment) {
                Some(name) => match ids.next() {
                    Some(id) if !id.is_empty() => path.push_str(id),
                    _ => {
                        return Err(ClientError::usage(format!(
                            "Missing `{}` for endpoint `{}`",
                            name, self.name
                        )))
                    }
                },
                None => path.push_str(segment),
            }
        }

        if ids.next().is_some() {
            return Err(ClientError::usage(format!(
                "Too many identifiers for endpoint `{}`",
                self.name
            )));
        }

        Ok(path)
    }
}

fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

pub const USER: Endpoint = Endpoint::get("user", "/user");
pub const BUDGETS: Endpoint = Endpoint::get("budgets", "/budgets");
pub const BUDGET: Endpoint = Endpoint::get("budget", "/budgets/{budget_id}");
pub const BUDGET_SETTINGS: Endpoint =
    Endpoint::get("budget_settings", "/budgets/{budget_id}/settings");

pub const ACCOUNTS: Endpoint = Endpoint::get("accounts", "/budgets/{budget_id}/accounts");
pub const ACCOUNT: Endpoint =
    Endpoint::get("account", "/budgets/{budget_id}/accounts/{account_id}");

pub const CATEGORIES: Endpoint = Endpoint::get("categories", "/budgets/{budget_id}/categories");
pub const CATEGORY: Endpoint =
    Endpoint::get("category", "/budgets/{budget_id}/categories/{category_id}");
pub const CATEGORY_MONTH: Endpoint = Endpoint::get(
    "category_month",
    "/budgets/{budget_id}/months/{month}/categories/{category_id}",
);
pub const UPDATE_CATEGORY_MONTH: Endpoint = Endpoint::mutation(
    "update_category_month",
    "/budgets/{budget_id}/months/{month}/categories/{category_id}",
    HttpMethod::Patch,
    Some("category"),
);

pub const PAYEES: Endpoint = Endpoint::get("payees", "/budgets/{budget_id}/payees");
pub const PAYEE: Endpoint = Endpoint::get("payee", "/budgets/{budget_id}/payees/{payee_id}");
pub const PAYEE_LOCATIONS: Endpoint =
    Endpoint::get("payee_locations", "/budgets/{budget_id}/payee_locations");
pub const PAYEE_LOCATION: Endpoint = Endpoint::get(
    "payee_location",
    "/budgets/{budget_id}/payee_locations/{payee_location_id}",
);
pub const LOCATIONS_PAYEE: Endpoint = Endpoint::get(
    "locations_payee",
    "/budgets/{budget_id}/payees/{payee_id}/payee_locations",
);

pub const BUDGET_MONTHS: Endpoint = Endpoint::get("budget_months", "/budgets/{budget_id}/months");
pub const BUDGET_MONTH: Endpoint =
    Endpoint::get("budget_month", "/budgets/{budget_id}/months/{month}");

pub const TRANSACTIONS: Endpoint =
    Endpoint::get("transactions", "/budgets/{budget_id}/transactions");
// Bulk endpoints pick `transaction` or `transactions` per call.
pub const CREATE_TRANSACTIONS: Endpoint = Endpoint::mutation(
    "create_transactions",
    "/budgets/{budget_id}/transactions",
    HttpMethod::Post,
    None,
);
pub const UPDATE_TRANSACTIONS: Endpoint = Endpoint::mutation(
    "update_transactions",
    "/budgets/{budget_id}/transactions",
    HttpMethod::Patch,
    None,
);
pub const TRANSACTION: Endpoint = Endpoint::get(
    "transaction",
    "/budgets/{budget_id}/transactions/{transaction_id}",
);
pub const UPDATE_TRANSACTION: Endpoint = Endpoint::mutation(
    "update_transaction",
    "/budgets/{budget_id}/transactions/{transaction_id}",
    HttpMethod::Put,
    Some("transaction"),
);
pub const ACCOUNT_TRANSACTIONS: Endpoint = Endpoint::get(
    "account_transactions",
    "/budgets/{budget_id}/accounts/{account_id}/transactions",
);
pub const CATEGORY_TRANSACTIONS: Endpoint = Endpoint::get(
    "category_transactions",
    "/budgets/{budget_id}/categories/{category_id}/transactions",
);
pub const PAYEE_TRANSACTIONS: Endpoint = Endpoint::get(
    "payee_transactions",
    "/budgets/{budget_id}/payees/{payee_id}/transactions",
);

pub const SCHEDULED_TRANSACTIONS: Endpoint = Endpoint::get(
    "scheduled_transactions",
    "/budgets/{budget_id}/scheduled_transactions",
);
pub const SCHEDULED_TRANSACTION: Endpoint = Endpoint::get(
    "scheduled_transaction",
    "/budgets/{budget_id}/scheduled_transactions/{scheduled_transaction_id}",
);
