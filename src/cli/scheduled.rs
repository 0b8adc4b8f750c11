//
//  ynab-client
//  cli/scheduled.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Scheduled transaction commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{GlobalOptions, Session};

/// Work with scheduled transactions
#[derive(Args, Debug)]
pub struct ScheduledCommand {
    #[command(subcommand)]
    pub command: ScheduledSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ScheduledSubcommand {
    /// List scheduled transactions
    #[command(visible_alias = "ls")]
    List,

    /// Show a single scheduled transaction
    View(ViewArgs),
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Scheduled transaction id
    pub scheduled_transaction_id: String,
}

impl ScheduledCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = Session::open(global)?;
        let data = match &self.command {
            ScheduledSubcommand::List => {
                session
                    .client
                    .scheduled_transactions(&session.budget)
                    .await?
            }
            ScheduledSubcommand::View(args) => {
                session
                    .client
                    .scheduled_transaction(&session.budget, &args.scheduled_transaction_id)
                    .await?
            }
        };
        session.finish(&data).await
    }
}
