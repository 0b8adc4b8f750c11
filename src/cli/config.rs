//
//  ynab-client
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Get, set, unset and list the values stored in the configuration file.
//! The access token is masked when listed.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::config::{Config, VALID_KEYS};

use super::GlobalOptions;

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get a configuration value
    Get(KeyArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Unset a configuration value
    Unset(KeyArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List,

    /// Show configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Configuration key
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::Unset(args) => self.unset(args, global),
            ConfigSubcommand::List => self.list(global),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    fn get(&self, args: &KeyArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let value = config.get(&args.key)?;

        if global.json {
            let result = serde_json::json!({
                "key": args.key,
                "value": value,
            });
            println!("{}", result);
        } else if let Some(v) = value {
            println!("{}", v);
        }

        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        config.set(&args.key, &args.value)?;
        config.save()?;

        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
            });
            println!("{}", result);
        } else {
            let shown = if args.key == "access_token" {
                mask(&args.value)
            } else {
                args.value.clone()
            };
            println!(
                "{} Set {} = {}",
                style("✓").green(),
                style(&args.key).cyan(),
                shown
            );
        }

        Ok(())
    }

    fn unset(&self, args: &KeyArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        config.unset(&args.key)?;
        config.save()?;

        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
            });
            println!("{}", result);
        } else {
            println!("{} Unset {}", style("✓").green(), style(&args.key).cyan());
        }

        Ok(())
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;

        let mut entries = Vec::with_capacity(VALID_KEYS.len());
        for key in VALID_KEYS {
            let value = config.get(key)?.map(|v| {
                if *key == "access_token" {
                    mask(&v)
                } else {
                    v
                }
            });
            entries.push((*key, value));
        }

        if global.json {
            let result: serde_json::Map<String, serde_json::Value> = entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), serde_json::json!(v)))
                .collect();
            println!("{}", serde_json::Value::Object(result));
            return Ok(());
        }

        println!();
        println!("{}", style("Configuration").bold());
        println!("{}", "-".repeat(50));
        for (key, value) in entries {
            match value {
                Some(v) => println!("  {}: {}", style(key).cyan(), v),
                None => println!("  {}: {}", style(key).cyan(), style("(not set)").dim()),
            }
        }
        println!();

        Ok(())
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let path = Config::config_path()?;

        if global.json {
            let result = serde_json::json!({
                "path": path.display().to_string(),
                "exists": path.exists(),
            });
            println!("{}", result);
        } else {
            println!("{}", path.display());
        }

        Ok(())
    }
}

/// Keeps the last four characters of a secret.
fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert_eq!(mask("0123456789abcdef"), "****cdef");
        assert_eq!(mask("abc"), "****");
    }
}
