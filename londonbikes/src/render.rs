//! Rendering of result tables for the terminal

use clap::ValueEnum;
use console::Style;
use londonbikeslib::{ResultTable, TableFormatter};

/// How a result table is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text columns
    #[default]
    Table,
    /// `{"header": [...], "rows": [[...]]}`
    Json,
}

/// Render a table in the requested format, newline-terminated.
///
/// With `styled`, the header line of a text table is bold.
pub fn render(
    table: &ResultTable,
    format: OutputFormat,
    styled: bool,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table => Ok(render_text(table, styled)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(table)? + "\n"),
    }
}

fn render_text(table: &ResultTable, styled: bool) -> String {
    let header_style = if styled {
        Style::new().bold().force_styling(true)
    } else {
        Style::new()
    };

    let mut out = String::new();
    for (i, line) in TableFormatter::new(table).render().into_iter().enumerate() {
        if i == 0 {
            out.push_str(&header_style.apply_to(line).to_string());
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }
    out
}
