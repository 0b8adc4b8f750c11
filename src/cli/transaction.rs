//
//  ynab-client
//  cli/transaction.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Transaction commands
//!
//! Transactions can be built from flags or read as JSON with `--input`. A
//! JSON array creates or updates several transactions in one request.
//!
//! ## Examples
//!
//! ```bash
//! # Unapproved transactions since the start of the year
//! ynab transaction list --since-date 2024-01-01 --type unapproved
//!
//! # Record a 12.34 purchase
//! ynab transaction create --account <id> --date 2024-01-15 --amount -12340 \
//!     --payee-name "Corner Shop"
//!
//! # Approve a batch of transactions
//! ynab transaction update-many --input approvals.json
//! ```

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use crate::api::models::{ClearedStatus, FlagColor, SaveTransaction, TransactionType};
use crate::api::TransactionFilter;

use super::{read_json_input, GlobalOptions, Session};

/// Work with transactions
#[derive(Args, Debug)]
pub struct TransactionCommand {
    #[command(subcommand)]
    pub command: TransactionSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TransactionSubcommand {
    /// List transactions, optionally scoped to an account, category or payee
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a single transaction
    View(ViewArgs),

    /// Create one transaction, or several from a JSON array
    Create(CreateArgs),

    /// Update a single transaction
    Update(UpdateArgs),

    /// Update several transactions, identified by id or import_id
    UpdateMany(UpdateManyArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only transactions of this account
    #[arg(long, conflicts_with_all = ["category", "payee"])]
    pub account: Option<String>,

    /// Only transactions of this category
    #[arg(long, conflicts_with = "payee")]
    pub category: Option<String>,

    /// Only transactions of this payee
    #[arg(long)]
    pub payee: Option<String>,

    /// Only transactions on or after this date (e.g., 2024-01-01)
    #[arg(long)]
    pub since_date: Option<String>,

    /// Only transactions of this type
    #[arg(long = "type", value_enum)]
    pub kind: Option<TransactionType>,

    /// Only transactions changed since this server knowledge
    #[arg(long)]
    pub since_knowledge: Option<i64>,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Transaction id
    pub transaction_id: String,
}

/// Transaction fields settable from the command line
#[derive(Args, Debug, Default)]
pub struct TransactionFields {
    /// Account id
    #[arg(long)]
    pub account: Option<String>,

    /// Transaction date (e.g., 2024-01-15)
    #[arg(long)]
    pub date: Option<String>,

    /// Amount in milliunits (negative for outflows)
    #[arg(long, allow_negative_numbers = true)]
    pub amount: Option<i64>,

    /// Payee id
    #[arg(long)]
    pub payee_id: Option<String>,

    /// Payee name, created if it does not exist
    #[arg(long)]
    pub payee_name: Option<String>,

    /// Category id
    #[arg(long)]
    pub category_id: Option<String>,

    /// Memo
    #[arg(long)]
    pub memo: Option<String>,

    /// Cleared status
    #[arg(long, value_enum)]
    pub cleared: Option<ClearedStatus>,

    /// Approval state
    #[arg(long)]
    pub approved: Option<bool>,

    /// Flag colour
    #[arg(long, value_enum)]
    pub flag_color: Option<FlagColor>,

    /// Import id used for de-duplication
    #[arg(long)]
    pub import_id: Option<String>,
}

impl TransactionFields {
    fn is_empty(&self) -> bool {
        self.account.is_none()
            && self.date.is_none()
            && self.amount.is_none()
            && self.payee_id.is_none()
            && self.payee_name.is_none()
            && self.category_id.is_none()
            && self.memo.is_none()
            && self.cleared.is_none()
            && self.approved.is_none()
            && self.flag_color.is_none()
            && self.import_id.is_none()
    }

    fn to_transaction(&self) -> SaveTransaction {
        SaveTransaction {
            id: None,
            account_id: self.account.clone(),
            date: self.date.clone(),
            amount: self.amount,
            payee_id: self.payee_id.clone(),
            payee_name: self.payee_name.clone(),
            category_id: self.category_id.clone(),
            memo: self.memo.clone(),
            cleared: self.cleared,
            approved: self.approved,
            flag_color: self.flag_color,
            import_id: self.import_id.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Read the transaction (object) or transactions (array) from JSON (- for stdin)
    #[arg(long, short = 'f')]
    pub input: Option<String>,

    #[command(flatten)]
    pub fields: TransactionFields,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Transaction id
    pub transaction_id: String,

    /// Read the changes from JSON (- for stdin)
    #[arg(long, short = 'f')]
    pub input: Option<String>,

    #[command(flatten)]
    pub fields: TransactionFields,
}

#[derive(Args, Debug)]
pub struct UpdateManyArgs {
    /// JSON object or array of transactions (- for stdin)
    #[arg(long, short = 'f')]
    pub input: String,
}

impl TransactionCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            TransactionSubcommand::List(args) => self.list(args, global).await,
            TransactionSubcommand::View(args) => self.view(args, global).await,
            TransactionSubcommand::Create(args) => self.create(args, global).await,
            TransactionSubcommand::Update(args) => self.update(args, global).await,
            TransactionSubcommand::UpdateMany(args) => self.update_many(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let filter = TransactionFilter {
            since_date: args.since_date.clone(),
            kind: args.kind,
            last_knowledge_of_server: args.since_knowledge,
        };

        let session = Session::open(global)?;
        let client = &session.client;
        let budget = session.budget.as_str();

        let data = if let Some(account) = &args.account {
            client.account_transactions(budget, account, &filter).await?
        } else if let Some(category) = &args.category {
            client
                .category_transactions(budget, category, &filter)
                .await?
        } else if let Some(payee) = &args.payee {
            client.payee_transactions(budget, payee, &filter).await?
        } else {
            client.transactions(budget, &filter).await?
        };
        session.finish(&data).await
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let session = Session::open(global)?;
        let data = session
            .client
            .transaction(&session.budget, &args.transaction_id)
            .await?;
        session.finish(&data).await
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let input = resolve_input(args.input.as_deref(), &args.fields)?;

        let session = Session::open(global)?;
        let client = &session.client;
        let data = match input {
            Input::Fields(transaction) => {
                client
                    .create_transactions(&session.budget, Some(&transaction), None)
                    .await?
            }
            Input::Json(value) => bulk(&session, value, BulkAction::Create).await?,
        };
        session.finish(&data).await
    }

    async fn update(&self, args: &UpdateArgs, global: &GlobalOptions) -> Result<()> {
        let input = match resolve_input(args.input.as_deref(), &args.fields)? {
            Input::Json(value) => Input::Json(single_object(value)?),
            fields => fields,
        };

        let session = Session::open(global)?;
        let client = &session.client;
        let budget = session.budget.as_str();
        let data = match input {
            Input::Fields(transaction) => {
                client
                    .update_transaction(budget, &args.transaction_id, &transaction)
                    .await?
            }
            Input::Json(value) => {
                client
                    .update_transaction(budget, &args.transaction_id, &value)
                    .await?
            }
        };
        session.finish(&data).await
    }

    async fn update_many(&self, args: &UpdateManyArgs, global: &GlobalOptions) -> Result<()> {
        let value = read_json_input(&args.input)?;

        let session = Session::open(global)?;
        let data = bulk(&session, value, BulkAction::Update).await?;
        session.finish(&data).await
    }
}

#[derive(Debug)]
enum Input {
    Fields(SaveTransaction),
    Json(Value),
}

#[derive(Debug, Clone, Copy)]
enum BulkAction {
    Create,
    Update,
}

fn resolve_input(input: Option<&str>, fields: &TransactionFields) -> Result<Input> {
    match input {
        Some(_) if !fields.is_empty() => {
            bail!("Use either --input or transaction flags, not both")
        }
        Some(path) => Ok(Input::Json(read_json_input(path)?)),
        None if fields.is_empty() => {
            bail!("No transaction given. Pass --input or transaction flags")
        }
        None => Ok(Input::Fields(fields.to_transaction())),
    }
}

/// Accepts only a JSON object, as a single transaction update requires.
fn single_object(value: Value) -> Result<Value> {
    if !value.is_object() {
        bail!("A single transaction update takes a JSON object; use update-many for arrays");
    }
    Ok(value)
}

/// Sends a JSON array as `transactions` and anything else as `transaction`.
async fn bulk(session: &Session, value: Value, action: BulkAction) -> Result<Value> {
    let client = &session.client;
    let budget = session.budget.as_str();

    let data = match (action, value) {
        (BulkAction::Create, Value::Array(items)) => {
            client
                .create_transactions(budget, None, Some(items.as_slice()))
                .await?
        }
        (BulkAction::Create, single) => {
            client
                .create_transactions(budget, Some(&single), None)
                .await?
        }
        (BulkAction::Update, Value::Array(items)) => {
            client
                .update_transactions(budget, None, Some(items.as_slice()))
                .await?
        }
        (BulkAction::Update, single) => {
            client
                .update_transactions(budget, Some(&single), None)
                .await?
        }
    };
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_to_transaction() {
        let fields = TransactionFields {
            account: Some("a1".to_string()),
            date: Some("2024-01-15".to_string()),
            amount: Some(-12340),
            cleared: Some(ClearedStatus::Cleared),
            ..Default::default()
        };

        let tx = fields.to_transaction();
        assert_eq!(tx, SaveTransaction::new("a1", "2024-01-15", -12340).cleared(ClearedStatus::Cleared));
    }

    #[test]
    fn test_resolve_input_requires_something() {
        let err = resolve_input(None, &TransactionFields::default()).unwrap_err();
        assert!(err.to_string().contains("No transaction given"));
    }

    #[test]
    fn test_resolve_input_rejects_both() {
        let fields = TransactionFields {
            memo: Some("lunch".to_string()),
            ..Default::default()
        };
        assert!(resolve_input(Some("tx.json"), &fields).is_err());
    }

    #[test]
    fn test_single_update_requires_object() {
        let err = single_object(serde_json::json!([{"memo": "a"}])).unwrap_err();
        assert!(err.to_string().contains("JSON object"));
        assert!(single_object(serde_json::json!("memo")).is_err());

        let changes = single_object(serde_json::json!({"memo": "a"})).unwrap();
        assert_eq!(changes["memo"], "a");
    }

    #[test]
    fn test_resolve_input_from_flags() {
        let fields = TransactionFields {
            approved: Some(true),
            ..Default::default()
        };
        match resolve_input(None, &fields).unwrap() {
            Input::Fields(tx) => assert_eq!(tx.approved, Some(true)),
            other => panic!("unexpected input {:?}", other),
        }
    }
}
