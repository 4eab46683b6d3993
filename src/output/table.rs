//
//  starr
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Table formatting built on `comfy-table`.

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

/// A table with the CLI's default preset and dynamic column widths.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Fluent builder over [`comfy_table::Table`].
///
/// # Example
///
/// ```rust
/// use starr::output::TableBuilder;
///
/// let table = TableBuilder::new()
///     .color(false)
///     .headers(["Name", "App"])
///     .row(["tv", "sonarr"])
///     .build();
/// assert!(table.to_string().contains("sonarr"));
/// ```
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Sets the header row, in cyan when color is on.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if self.color {
            let cells: Vec<Cell> = headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
            self.table.set_header(cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        self.table.add_row(row);
        self
    }

    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            let row: Vec<String> = row.into_iter().map(Into::into).collect();
            self.table.add_row(row);
        }
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors a status word: healthy green, finished blue, broken red, waiting yellow.
pub fn format_status(status: &str, color: bool) -> String {
    if !color {
        return status.to_string();
    }

    use console::style;
    match status.to_lowercase().as_str() {
        "ok" | "started" | "downloading" | "grabbed" => style(status).green().to_string(),
        "completed" | "imported" | "downloadfolderimported" => style(status).blue().to_string(),
        "failed" | "error" | "warning" | "downloadfailed" => style(status).red().to_string(),
        "queued" | "paused" | "delay" | "pending" => style(status).yellow().to_string(),
        _ => status.to_string(),
    }
}

pub fn format_bool(value: bool, color: bool) -> String {
    if color {
        use console::style;
        if value {
            style("Yes").green().to_string()
        } else {
            style("No").dim().to_string()
        }
    } else if value {
        "Yes".to_string()
    } else {
        "No".to_string()
    }
}

/// Human-readable byte count (`1.5 GiB`).
pub fn format_size(bytes: f64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut size = bytes.max(0.0);
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", size as u64, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

/// Shortens `s` to at most `max_len` characters, ending in `...` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{kept}...")
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("The.Expanse.S01E01.720p", 10), "The.Exp...");
        assert_eq!(truncate("Amélie", 4), "A...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512.0), "512 B");
        assert_eq!(format_size(1536.0), "1.5 KiB");
        assert_eq!(format_size(3.0 * 1024.0 * 1024.0 * 1024.0), "3.0 GiB");
    }

    #[test]
    fn test_plain_output() {
        assert_eq!(format_status("completed", false), "completed");
        assert_eq!(format_bool(true, false), "Yes");
    }
}
