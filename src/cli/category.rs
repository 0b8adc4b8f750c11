//
//  ynab-client
//  cli/category.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Category commands
//!
//! Amounts are in milliunits: `--amount 50000` budgets 50.00 in the budget's
//! currency.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::models::SaveMonthCategory;

use super::{GlobalOptions, Session};

/// Work with categories
#[derive(Args, Debug)]
pub struct CategoryCommand {
    #[command(subcommand)]
    pub command: CategorySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CategorySubcommand {
    /// List category groups and their categories
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a category, for the current month or a given one
    View(ViewArgs),

    /// Set the budgeted amount of a category for a month
    Budget(BudgetArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only include categories changed since this server knowledge
    #[arg(long)]
    pub since_knowledge: Option<i64>,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Category id
    pub category_id: String,

    /// Budget month (ISO date such as 2024-01-01, or "current")
    #[arg(long, short = 'm')]
    pub month: Option<String>,
}

#[derive(Args, Debug)]
pub struct BudgetArgs {
    /// Category id
    pub category_id: String,

    /// Budget month (ISO date such as 2024-01-01, or "current")
    #[arg(long, short = 'm')]
    pub month: String,

    /// Budgeted amount in milliunits
    #[arg(long, short = 'a', allow_negative_numbers = true)]
    pub amount: i64,
}

impl CategoryCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = Session::open(global)?;
        let client = &session.client;
        let budget = session.budget.as_str();

        let data = match &self.command {
            CategorySubcommand::List(args) => client.categories(budget, args.since_knowledge).await?,
            CategorySubcommand::View(args) => match &args.month {
                Some(month) => {
                    client
                        .category_month(budget, &args.category_id, month)
                        .await?
                }
                None => client.category(budget, &args.category_id).await?,
            },
            CategorySubcommand::Budget(args) => {
                let update = SaveMonthCategory {
                    budgeted: args.amount,
                };
                client
                    .update_category_month(budget, &args.category_id, &args.month, &update)
                    .await?
            }
        };
        session.finish(&data).await
    }
}
