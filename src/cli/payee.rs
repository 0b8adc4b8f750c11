//
//  ynab-client
//  cli/payee.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Payee and payee location commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{GlobalOptions, Session};

/// Work with payees and payee locations
#[derive(Args, Debug)]
pub struct PayeeCommand {
    #[command(subcommand)]
    pub command: PayeeSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PayeeSubcommand {
    /// List payees in the budget
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a single payee
    View(PayeeArgs),

    /// List payee locations, for all payees or just one
    Locations(LocationsArgs),

    /// Show a single payee location
    Location(LocationArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only include payees changed since this server knowledge
    #[arg(long)]
    pub since_knowledge: Option<i64>,
}

#[derive(Args, Debug)]
pub struct PayeeArgs {
    /// Payee id
    pub payee_id: String,
}

#[derive(Args, Debug)]
pub struct LocationsArgs {
    /// Only locations of this payee
    #[arg(long, short = 'p')]
    pub payee: Option<String>,
}

#[derive(Args, Debug)]
pub struct LocationArgs {
    /// Payee location id
    pub payee_location_id: String,
}

impl PayeeCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = Session::open(global)?;
        let client = &session.client;
        let budget = session.budget.as_str();

        let data = match &self.command {
            PayeeSubcommand::List(args) => client.payees(budget, args.since_knowledge).await?,
            PayeeSubcommand::View(args) => client.payee(budget, &args.payee_id).await?,
            PayeeSubcommand::Locations(args) => match &args.payee {
                Some(payee_id) => client.locations_payee(budget, payee_id).await?,
                None => client.payee_locations(budget).await?,
            },
            PayeeSubcommand::Location(args) => {
                client
                    .payee_location(budget, &args.payee_location_id)
                    .await?
            }
        };
        session.finish(&data).await
    }
}
