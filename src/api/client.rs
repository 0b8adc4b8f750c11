//
//  ynab-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client for the YNAB API
//!
//! This module provides [`YnabClient`], the request pipeline every resource
//! call goes through. It handles authentication, URL construction, the
//! response envelope and error classification.
//!
//! ## Features
//!
//! - Bearer header computed once at construction
//! - Single [`request`](YnabClient::request) primitive behind every resource method
//! - Fallback JSON parsing for responses with a non-JSON content type (HTTP 429)
//! - Typed errors for transport, parse, API and usage failures
//! - Pluggable [`Transport`]

use std::fmt;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, error};
use url::Url;

use super::common::{ApiError, ClientError, Envelope};
use super::endpoints::{self, Endpoint};
use super::query::{QueryParams, TransactionFilter};
use super::transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};

/// The base API URL for YNAB.
pub const BASE_URL: &str = "https://api.youneedabudget.com/v1";

/// Result type returned by every client call.
pub type Result<T, E = ClientError> = std::result::Result<T, E>;

/// The main client for the YNAB API.
///
/// The client holds only immutable state (base URL, auth headers and a
/// shared transport), so it is `Send + Sync` and concurrent calls on one
/// instance never block each other.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use ynab_client::api::YnabClient;
///
/// # async fn example() -> ynab_client::api::Result<()> {
/// let client = YnabClient::new("personal-access-token")?;
/// let user = client.user().await?;
/// println!("Authenticated as {}", user["user"]["id"]);
/// client.close().await;
/// # Ok(())
/// # }
/// ```
///
/// # Lifecycle
///
/// [`close`](Self::close) consumes the client, so no call can be issued
/// afterwards. Dropping the client without closing it is also fine for the
/// default transport.
#[derive(Clone)]
pub struct YnabClient {
    /// The transport that performs HTTP exchanges
    transport: Arc<dyn Transport>,
    /// Base URL without trailing slash
    base_url: String,
    /// The personal access token
    access_token: String,
    /// Headers sent with every request
    headers: HeaderMap,
}

impl fmt::Debug for YnabClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YnabClient")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl YnabClient {
    /// Creates a client using the default [`ReqwestTransport`].
    ///
    /// # Parameters
    ///
    /// * `access_token` - A YNAB personal access token. Create one at
    ///   `https://app.youneedabudget.com/settings/developer`.
    ///
    /// # Errors
    ///
    /// Returns a usage error if the token cannot be used in an HTTP header,
    /// or a transport error if the HTTP client could not be created.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        let transport = ReqwestTransport::new().map_err(ClientError::Transport)?;
        Self::with_transport(access_token, Arc::new(transport))
    }

    /// Creates a client around a pre-configured transport.
    ///
    /// No network activity happens here.
    pub fn with_transport(
        access_token: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let access_token = access_token.into();
        let headers = auth_headers(&access_token)?;

        Ok(Self {
            transport,
            base_url: BASE_URL.to_string(),
            access_token,
            headers,
        })
    }

    /// Points the client at a different API root.
    ///
    /// Useful for proxies and tests. The URL must be absolute; a trailing
    /// slash is ignored.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ClientError::usage(format!("Invalid base URL {}: {}", base_url, e)))?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::usage(format!("Invalid base URL {}", base_url)));
        }
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Returns the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the personal access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Returns the headers sent with every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Releases the transport.
    pub async fn close(self) {
        self.transport.close().await;
    }

    /// Performs a request and returns the `data` payload of the response.
    ///
    /// This is the primitive every resource method is built on. The full URL
    /// is the base URL followed by `path`.
    ///
    /// # Parameters
    ///
    /// * `path` - A resolved API path (e.g. `"/budgets/123/accounts"`)
    /// * `method` - The HTTP verb
    /// * `query` - Optional query parameters; an empty set sends no query string
    /// * `body` - Optional JSON body
    ///
    /// # Errors
    ///
    /// - [`ClientError::Transport`] if the exchange did not complete
    /// - [`ClientError::Parse`] if the body is not JSON
    /// - [`ClientError::Api`] if the status is 400 or above, or the body has an `error` key
    /// - [`ClientError::MissingData`] if a successful body has no `data` key
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use ynab_client::api::YnabClient;
    /// use ynab_client::api::transport::HttpMethod;
    ///
    /// # async fn example() -> ynab_client::api::Result<()> {
    /// let client = YnabClient::new("token")?;
    /// let budgets = client.request("/budgets", HttpMethod::Get, None, None).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn request(
        &self,
        path: &str,
        method: HttpMethod,
        query: Option<&QueryParams>,
        body: Option<&Value>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let request = HttpRequest {
            method,
            url: url.clone(),
            headers: self.headers.clone(),
            query: query.cloned().map(QueryParams::into_pairs).unwrap_or_default(),
            body: body.cloned(),
        };

        debug!("Requesting {} {}", method, url);

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                error!("Error requesting {} {}: {}", method, url, e);
                return Err(ClientError::Transport(e));
            }
        };

        let envelope = Envelope::from_value(decode_body(&response)?);

        if response.status >= 400 || envelope.error.is_some() {
            let error = ApiError::new(response.status, envelope.error.unwrap_or(Value::Null));
            error!(
                "{} Error requesting {} {}: {}",
                response.status,
                method,
                url,
                error.detail()
            );
            return Err(error.into());
        }

        envelope.data.ok_or(ClientError::MissingData)
    }

    /// Resolves `endpoint`, wraps `payload` under its wrap key and calls
    /// [`request`](Self::request).
    async fn call(
        &self,
        endpoint: &Endpoint,
        ids: &[&str],
        query: QueryParams,
        payload: Option<Value>,
    ) -> Result<Value> {
        let path = endpoint.resolve(ids)?;
        let body = match (endpoint.wrap, payload) {
            (Some(key), Some(payload)) => Some(wrap(key, payload)),
            (_, payload) => payload,
        };
        self.request(&path, endpoint.method, Some(&query), body.as_ref())
            .await
    }

    async fn get(&self, endpoint: &Endpoint, ids: &[&str]) -> Result<Value> {
        self.call(endpoint, ids, QueryParams::new(), None).await
    }

    // ------------------------------------------------------------------
    // User and budgets
    // ------------------------------------------------------------------

    /// Returns authenticated user information (`/user`).
    pub async fn user(&self) -> Result<Value> {
        self.get(&endpoints::USER, &[]).await
    }

    /// Returns the budget list with summary information (`/budgets`).
    pub async fn budgets(&self) -> Result<Value> {
        self.get(&endpoints::BUDGETS, &[]).await
    }

    /// Returns a single budget with all related entities.
    ///
    /// This is effectively a full budget export. When
    /// `last_knowledge_of_server` is given, only entities changed since then
    /// are included.
    pub async fn budget(
        &self,
        budget_id: &str,
        last_knowledge_of_server: Option<i64>,
    ) -> Result<Value> {
        let query = QueryParams::knowledge(last_knowledge_of_server);
        self.call(&endpoints::BUDGET, &[budget_id], query, None)
            .await
    }

    /// Returns settings for a budget.
    pub async fn budget_settings(&self, budget_id: &str) -> Result<Value> {
        self.get(&endpoints::BUDGET_SETTINGS, &[budget_id]).await
    }

    // ------------------------------------------------------------------
    // Accounts
    // ------------------------------------------------------------------

    /// Returns all accounts of a budget.
    pub async fn accounts(
        &self,
        budget_id: &str,
        last_knowledge_of_server: Option<i64>,
    ) -> Result<Value> {
        let query = QueryParams::knowledge(last_knowledge_of_server);
        self.call(&endpoints::ACCOUNTS, &[budget_id], query, None)
            .await
    }

    /// Returns a single account.
    pub async fn account(&self, budget_id: &str, account_id: &str) -> Result<Value> {
        self.get(&endpoints::ACCOUNT, &[budget_id, account_id]).await
    }

    // ------------------------------------------------------------------
    // Categories
    // ------------------------------------------------------------------

    /// Returns all categories grouped by category group.
    pub async fn categories(
        &self,
        budget_id: &str,
        last_knowledge_of_server: Option<i64>,
    ) -> Result<Value> {
        let query = QueryParams::knowledge(last_knowledge_of_server);
        self.call(&endpoints::CATEGORIES, &[budget_id], query, None)
            .await
    }

    /// Returns a single category. Amounts are for the current budget month (UTC).
    pub async fn category(&self, budget_id: &str, category_id: &str) -> Result<Value> {
        self.get(&endpoints::CATEGORY, &[budget_id, category_id])
            .await
    }

    /// Returns a single category for a specific budget month.
    ///
    /// `month` is an ISO date (e.g. `2016-12-01`) or `current`.
    pub async fn category_month(
        &self,
        budget_id: &str,
        category_id: &str,
        month: &str,
    ) -> Result<Value> {
        self.get(&endpoints::CATEGORY_MONTH, &[budget_id, month, category_id])
            .await
    }

    /// Updates a category for a specific month.
    ///
    /// `data` is sent as `{"category": data}`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use ynab_client::api::YnabClient;
    /// use ynab_client::api::models::SaveMonthCategory;
    ///
    /// # async fn example(client: YnabClient) -> ynab_client::api::Result<()> {
    /// let updated = client
    ///     .update_category_month("budget", "category", "current", &SaveMonthCategory { budgeted: 25000 })
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn update_category_month<T: Serialize + ?Sized>(
        &self,
        budget_id: &str,
        category_id: &str,
        month: &str,
        data: &T,
    ) -> Result<Value> {
        let payload = to_payload(data)?;
        self.call(
            &endpoints::UPDATE_CATEGORY_MONTH,
            &[budget_id, month, category_id],
            QueryParams::new(),
            Some(payload),
        )
        .await
    }

    // ------------------------------------------------------------------
    // Payees and payee locations
    // ------------------------------------------------------------------

    /// Returns all payees.
    pub async fn payees(
        &self,
        budget_id: &str,
        last_knowledge_of_server: Option<i64>,
    ) -> Result<Value> {
        let query = QueryParams::knowledge(last_knowledge_of_server);
        self.call(&endpoints::PAYEES, &[budget_id], query, None)
            .await
    }

    /// Returns a single payee.
    pub async fn payee(&self, budget_id: &str, payee_id: &str) -> Result<Value> {
        self.get(&endpoints::PAYEE, &[budget_id, payee_id]).await
    }

    /// Returns all payee locations.
    pub async fn payee_locations(&self, budget_id: &str) -> Result<Value> {
        self.get(&endpoints::PAYEE_LOCATIONS, &[budget_id]).await
    }

    /// Returns a single payee location.
    pub async fn payee_location(&self, budget_id: &str, payee_location_id: &str) -> Result<Value> {
        self.get(&endpoints::PAYEE_LOCATION, &[budget_id, payee_location_id])
            .await
    }

    /// Returns all locations of a payee.
    pub async fn locations_payee(&self, budget_id: &str, payee_id: &str) -> Result<Value> {
        self.get(&endpoints::LOCATIONS_PAYEE, &[budget_id, payee_id])
            .await
    }

    // ------------------------------------------------------------------
    // Months
    // ------------------------------------------------------------------

    /// Returns all budget months.
    pub async fn budget_months(
        &self,
        budget_id: &str,
        last_knowledge_of_server: Option<i64>,
    ) -> Result<Value> {
        let query = QueryParams::knowledge(last_knowledge_of_server);
        self.call(&endpoints::BUDGET_MONTHS, &[budget_id], query, None)
            .await
    }

    /// Returns a single budget month (`month` is an ISO date or `current`).
    pub async fn budget_month(&self, budget_id: &str, month: &str) -> Result<Value> {
        self.get(&endpoints::BUDGET_MONTH, &[budget_id, month]).await
    }

    // ------------------------------------------------------------------
    // Transactions
    // ------------------------------------------------------------------

    /// Returns budget transactions matching `filter`.
    pub async fn transactions(&self, budget_id: &str, filter: &TransactionFilter) -> Result<Value> {
        self.call(
            &endpoints::TRANSACTIONS,
            &[budget_id],
            filter.to_query(),
            None,
        )
        .await
    }

    /// Creates a single transaction or multiple transactions.
    ///
    /// Exactly one of `transaction` or `transactions` must be given. The body
    /// is `{"transaction": ...}` or `{"transactions": [...]}` respectively.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Usage`], without touching the network, when
    /// neither or both are given. An empty `transactions` slice counts as
    /// not given.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use ynab_client::api::YnabClient;
    /// use ynab_client::api::models::SaveTransaction;
    ///
    /// # async fn example(client: YnabClient) -> ynab_client::api::Result<()> {
    /// let tx = SaveTransaction::new("account", "2019-01-02", -4500).memo("coffee");
    /// client.create_transactions("budget", Some(&tx), None).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_transactions<T: Serialize>(
        &self,
        budget_id: &str,
        transaction: Option<&T>,
        transactions: Option<&[T]>,
    ) -> Result<Value> {
        let body = bulk_payload(transaction, transactions)?;
        self.call(
            &endpoints::CREATE_TRANSACTIONS,
            &[budget_id],
            QueryParams::new(),
            Some(body),
        )
        .await
    }

    /// Updates one or more transactions, matched by `id` or `import_id`.
    ///
    /// Same argument rules as [`create_transactions`](Self::create_transactions).
    pub async fn update_transactions<T: Serialize>(
        &self,
        budget_id: &str,
        transaction: Option<&T>,
        transactions: Option<&[T]>,
    ) -> Result<Value> {
        let body = bulk_payload(transaction, transactions)?;
        self.call(
            &endpoints::UPDATE_TRANSACTIONS,
            &[budget_id],
            QueryParams::new(),
            Some(body),
        )
        .await
    }

    /// Returns a single transaction.
    pub async fn transaction(&self, budget_id: &str, transaction_id: &str) -> Result<Value> {
        self.get(&endpoints::TRANSACTION, &[budget_id, transaction_id])
            .await
    }

    /// Updates a single transaction; `data` is sent as `{"transaction": data}`.
    pub async fn update_transaction<T: Serialize + ?Sized>(
        &self,
        budget_id: &str,
        transaction_id: &str,
        data: &T,
    ) -> Result<Value> {
        let payload = to_payload(data)?;
        self.call(
            &endpoints::UPDATE_TRANSACTION,
            &[budget_id, transaction_id],
            QueryParams::new(),
            Some(payload),
        )
        .await
    }

    /// Returns the transactions of an account.
    pub async fn account_transactions(
        &self,
        budget_id: &str,
        account_id: &str,
        filter: &TransactionFilter,
    ) -> Result<Value> {
        self.call(
            &endpoints::ACCOUNT_TRANSACTIONS,
            &[budget_id, account_id],
            filter.to_query(),
            None,
        )
        .await
    }

    /// Returns the transactions of a category.
    pub async fn category_transactions(
        &self,
        budget_id: &str,
        category_id: &str,
        filter: &TransactionFilter,
    ) -> Result<Value> {
        self.call(
            &endpoints::CATEGORY_TRANSACTIONS,
            &[budget_id, category_id],
            filter.to_query(),
            None,
        )
        .await
    }

    /// Returns the transactions of a payee.
    pub async fn payee_transactions(
        &self,
        budget_id: &str,
        payee_id: &str,
        filter: &TransactionFilter,
    ) -> Result<Value> {
        self.call(
            &endpoints::PAYEE_TRANSACTIONS,
            &[budget_id, payee_id],
            filter.to_query(),
            None,
        )
        .await
    }

    // ------------------------------------------------------------------
    // Scheduled transactions
    // ------------------------------------------------------------------

    /// Returns all scheduled transactions.
    pub async fn scheduled_transactions(&self, budget_id: &str) -> Result<Value> {
        self.get(&endpoints::SCHEDULED_TRANSACTIONS, &[budget_id])
            .await
    }

    /// Returns a single scheduled transaction.
    pub async fn scheduled_transaction(
        &self,
        budget_id: &str,
        scheduled_transaction_id: &str,
    ) -> Result<Value> {
        self.get(
            &endpoints::SCHEDULED_TRANSACTION,
            &[budget_id, scheduled_transaction_id],
        )
        .await
    }
}

/// Builds the `Authorization: Bearer` header set.
fn auth_headers(access_token: &str) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", access_token))
        .map_err(|_| ClientError::usage("Access token contains invalid header characters"))?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

/// Decodes a response body, first strictly and then from the raw text.
///
/// Rate-limit (429) responses are not sent with a JSON content type but
/// their body is still JSON.
fn decode_body(response: &HttpResponse) -> Result<Value> {
    match response.decode_json() {
        Ok(value) => Ok(value),
        Err(e) => {
            debug!(
                "{} response not decoded directly ({}), parsing raw text",
                response.status, e
            );
            serde_json::from_str(response.text()).map_err(|source| {
                error!("Error parsing response as json: {}", response.text());
                ClientError::Parse {
                    body: response.body.clone(),
                    source,
                }
            })
        }
    }
}

/// Wraps a payload as `{key: payload}`.
fn wrap(key: &str, payload: Value) -> Value {
    let mut map = Map::new();
    map.insert(key.to_string(), payload);
    Value::Object(map)
}

fn to_payload<T: Serialize + ?Sized>(data: &T) -> Result<Value> {
    serde_json::to_value(data)
        .map_err(|e| ClientError::usage(format!("Request body could not be serialized: {}", e)))
}

/// Picks the body for a bulk transaction call.
///
/// A blank single transaction (`null` or `{}`) and an empty list both count
/// as not given.
fn bulk_payload<T: Serialize>(transaction: Option<&T>, transactions: Option<&[T]>) -> Result<Value> {
    let transaction = transaction
        .map(to_payload)
        .transpose()?
        .filter(|single| !is_blank(single));
    let transactions = transactions.filter(|items| !items.is_empty());

    match (transaction, transactions) {
        (None, None) => Err(ClientError::usage(
            "Must specify one of transaction or transactions.",
        )),
        (Some(_), Some(_)) => Err(ClientError::usage(
            "Only one of transaction or transactions can be specified, not both.",
        )),
        (Some(single), None) => Ok(wrap("transaction", single)),
        (None, Some(items)) => Ok(wrap("transactions", to_payload(items)?)),
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
