//
//  starr
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! JSON output helpers.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::Value;

/// Prints `value` as pretty JSON on stdout.
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let stdout = io::stdout();
    write_json_to(&mut stdout.lock(), value)
}

/// Writes `value` as pretty JSON followed by a newline.
pub fn write_json_to<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Renders a field of a JSON record for a table cell.
///
/// `pointer` is a JSON pointer such as `/quality/quality/name`. Missing and
/// null values render as an empty string; strings render without quotes.
pub fn json_cell(record: &Value, pointer: &str) -> String {
    match record.pointer(pointer) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
