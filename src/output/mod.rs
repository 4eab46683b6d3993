//
//  starr
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! How the CLI prints results: human-readable tables (the default) or
//! pretty-printed JSON with `--json`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use starr::output::{OutputFormat, OutputWriter, TableBuilder, TableOutput};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Row { name: String }
//!
//! impl TableOutput for Row {
//!     fn print_table(&self, color: bool) {
//!         TableBuilder::new().color(color).headers(["Name"]).row([self.name.clone()]).print();
//!     }
//! }
//!
//! let writer = OutputWriter::new(OutputFormat::Table);
//! writer.write(&Row { name: "tv".into() }).unwrap();
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    /// `Json` when `json` is set, else `Table`.
    pub fn from_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Table
        }
    }
}

/// Writes command results in the selected format.
///
/// Color follows the terminal (`console::colors_enabled`), so piping the
/// output strips styling.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Writes a single value.
    pub fn write<T: Serialize + TableOutput + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value),
            OutputFormat::Table => {
                value.print_table(self.color);
                Ok(())
            }
        }
    }

    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// Types that know how to render themselves as a table.
pub trait TableOutput {
    fn print_table(&self, color: bool);
}

/// Prints a `key: value` line, dimming the key when color is on.
pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}
