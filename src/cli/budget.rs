//
//  ynab-client
//  cli/budget.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Budget commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{GlobalOptions, Session};

/// Work with budgets
#[derive(Args, Debug)]
pub struct BudgetCommand {
    #[command(subcommand)]
    pub command: BudgetSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BudgetSubcommand {
    /// List budgets with summary information
    #[command(visible_alias = "ls")]
    List,

    /// Export a single budget with all related entities
    View(ViewArgs),

    /// Show budget settings
    Settings,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Only include entities changed since this server knowledge
    #[arg(long)]
    pub since_knowledge: Option<i64>,
}

impl BudgetCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = Session::open(global)?;
        let data = match &self.command {
            BudgetSubcommand::List => session.client.budgets().await?,
            BudgetSubcommand::View(args) => {
                session
                    .client
                    .budget(&session.budget, args.since_knowledge)
                    .await?
            }
            BudgetSubcommand::Settings => session.client.budget_settings(&session.budget).await?,
        };
        session.finish(&data).await
    }
}
