//! View-model assertions.
//!
//! Each helper returns `anyhow::Result` so tests can chain them with `?`
//! and get a message naming what was actually rendered.

use anyhow::{Context, Result, bail};
use taskview_types::{ActionDescriptor, Button, Cell, Row, Table, ViewModel};

pub fn expect_table(view: &ViewModel) -> Result<&Table> {
    view.as_table()
        .with_context(|| format!("Expected a table, got {}", view.kind()))
}

pub fn expect_plaintext(view: &ViewModel) -> Result<&str> {
    view.as_plaintext()
        .with_context(|| format!("Expected plaintext, got {}", view.kind()))
}

/// Plain-text values of one column, top to bottom
pub fn column_values(table: &Table, column: &str) -> Result<Vec<String>> {
    table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row.get(column)
                .and_then(Cell::display_value)
                .with_context(|| format!("Row {i} has no text cell '{column}'"))
        })
        .collect()
}

pub fn menu_actions<'a>(row: &'a Row, column: &str) -> Result<&'a [ActionDescriptor]> {
    match row.get(column).and_then(Cell::as_button) {
        Some(Button::Menu(menu)) => Ok(&menu.value),
        Some(other) => bail!("Column '{column}' holds {other:?}, not a menu"),
        None => bail!("Column '{column}' is missing or not a button"),
    }
}

/// Every row carries exactly the declared columns, in header order
pub fn assert_rows_conform(table: &Table) -> Result<()> {
    let labels = table.labels();
    for (i, row) in table.rows.iter().enumerate() {
        let columns: Vec<&str> = row.columns().collect();
        if columns != labels {
            bail!("Row {i} has columns {columns:?}, headers are {labels:?}");
        }
    }
    Ok(())
}
