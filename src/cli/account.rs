//
//  ynab-client
//  cli/account.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Account commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{GlobalOptions, Session};

/// Work with accounts
#[derive(Args, Debug)]
pub struct AccountCommand {
    #[command(subcommand)]
    pub command: AccountSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AccountSubcommand {
    /// List accounts in the budget
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a single account
    View(ViewArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only include accounts changed since this server knowledge
    #[arg(long)]
    pub since_knowledge: Option<i64>,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Account id
    pub account_id: String,
}

impl AccountCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = Session::open(global)?;
        let data = match &self.command {
            AccountSubcommand::List(args) => {
                session
                    .client
                    .accounts(&session.budget, args.since_knowledge)
                    .await?
            }
            AccountSubcommand::View(args) => {
                session
                    .client
                    .account(&session.budget, &args.account_id)
                    .await?
            }
        };
        session.finish(&data).await
    }
}
