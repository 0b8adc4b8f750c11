//
//  ynab-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Output formatting for CLI results.
//!
//! Every command prints the API payload as JSON, pretty-printed by default or
//! on a single line with `--json`.

mod json;

pub use json::*;

use serde::Serialize;

/// How JSON results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented, human readable JSON.
    #[default]
    Pretty,
    /// One line per value, for scripting.
    Compact,
}

/// Writes command results to stdout in the selected format.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Picks [`OutputFormat::Compact`] when `compact` is set.
    pub fn from_flag(compact: bool) -> Self {
        if compact {
            Self::new(OutputFormat::Compact)
        } else {
            Self::new(OutputFormat::Pretty)
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn write<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Pretty => write_json(value),
            OutputFormat::Compact => write_json_compact(value),
        }
    }
}
