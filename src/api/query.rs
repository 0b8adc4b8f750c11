//
//  ynab-client
//  api/query.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Query-string assembly.
//!
//! Optional filters are only sent when the caller supplied them. An absent
//! filter never appears in the URL, not even as an empty value.
//!
//! ```rust
//! use ynab_client::api::query::{QueryParams, TransactionFilter};
//! use ynab_client::api::models::TransactionType;
//!
//! assert!(QueryParams::knowledge(None).is_empty());
//!
//! let filter = TransactionFilter::new()
//!     .since_date("2019-01-01")
//!     .kind(TransactionType::Unapproved);
//! let query = filter.to_query();
//! assert_eq!(query.get("type"), Some("unapproved"));
//! assert_eq!(query.get("last_knowledge_of_server"), None);
//! ```

use super::models::TransactionType;

/// Name of the delta cursor parameter.
pub const LAST_KNOWLEDGE_OF_SERVER: &str = "last_knowledge_of_server";

/// Ordered key/value pairs sent as the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query holding only the delta cursor, when present.
    pub fn knowledge(last_knowledge_of_server: Option<i64>) -> Self {
        Self::new().with_opt(LAST_KNOWLEDGE_OF_SERVER, last_knowledge_of_server)
    }

    /// Appends a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Appends a parameter only if `value` is `Some`.
    pub fn push_opt<T: ToString>(&mut self, key: impl Into<String>, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Builder form of [`push_opt`](Self::push_opt).
    pub fn with_opt<T: ToString>(mut self, key: impl Into<String>, value: Option<T>) -> Self {
        self.push_opt(key, value);
        self
    }

    /// Returns the first value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (key, value) in iter {
            query.push(key, value);
        }
        query
    }
}

/// Filters shared by every transaction list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Only transactions on or after this ISO date (e.g. `2016-12-30`).
    pub since_date: Option<String>,
    /// Only transactions of this type.
    pub kind: Option<TransactionType>,
    /// Only entities changed since this server knowledge.
    pub last_knowledge_of_server: Option<i64>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn since_date(mut self, since_date: impl Into<String>) -> Self {
        self.since_date = Some(since_date.into());
        self
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn last_knowledge_of_server(mut self, knowledge: i64) -> Self {
        self.last_knowledge_of_server = Some(knowledge);
        self
    }

    /// Translates the set filters into query parameters.
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt(LAST_KNOWLEDGE_OF_SERVER, self.last_knowledge_of_server)
            .with_opt("since_date", self.since_date.as_deref())
            .with_opt("type", self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knowledge_absent_is_empty() {
        assert!(QueryParams::knowledge(None).is_empty());
    }

    #[test]
    fn test_knowledge_zero_is_sent() {
        let query = QueryParams::knowledge(Some(0));
        assert_eq!(query.get(LAST_KNOWLEDGE_OF_SERVER), Some("0"));
    }

    #[test]
    fn test_filter_order() {
        let query = TransactionFilter::new()
            .kind(TransactionType::Uncategorized)
            .since_date("2019-01-01")
            .last_knowledge_of_server(7)
            .to_query();
        let pairs: Vec<_> = query.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("last_knowledge_of_server", "7"),
                ("since_date", "2019-01-01"),
                ("type", "uncategorized"),
            ]
        );
    }

    #[test]
    fn test_empty_filter() {
        assert!(TransactionFilter::default().to_query().is_empty());
    }

    #[test]
    fn test_from_iter() {
        let query: QueryParams = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(query.len(), 2);
        assert_eq!(query.get("b"), Some("2"));
    }
}
