//
//  ynab-client
//  cli/month.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Budget month commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{GlobalOptions, Session};

/// Work with budget months
#[derive(Args, Debug)]
pub struct MonthCommand {
    #[command(subcommand)]
    pub command: MonthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum MonthSubcommand {
    /// List budget months
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a single budget month with its categories
    View(ViewArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only include months changed since this server knowledge
    #[arg(long)]
    pub since_knowledge: Option<i64>,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Budget month (ISO date such as 2024-01-01, or "current")
    pub month: String,
}

impl MonthCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = Session::open(global)?;
        let data = match &self.command {
            MonthSubcommand::List(args) => {
                session
                    .client
                    .budget_months(&session.budget, args.since_knowledge)
                    .await?
            }
            MonthSubcommand::View(args) => {
                session
                    .client
                    .budget_month(&session.budget, &args.month)
                    .await?
            }
        };
        session.finish(&data).await
    }
}
