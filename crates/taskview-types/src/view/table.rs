use super::{Cell, is_false};
use indexmap::IndexMap;
use serde::Serialize;

/// Rendering type tag of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Size,
    Number,
    Button,
}

/// Column declaration; the label doubles as the row key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    #[serde(rename = "plaintext")]
    pub label: String,

    #[serde(rename = "type")]
    pub column_type: ColumnType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(skip_serializing_if = "is_false")]
    pub fill_width: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub disable_sort: bool,
}

impl Header {
    pub fn new(label: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            label: label.into(),
            column_type,
            width: None,
            fill_width: false,
            disable_sort: false,
        }
    }

    pub fn string(label: impl Into<String>) -> Self {
        Self::new(label, ColumnType::String)
    }

    pub fn size(label: impl Into<String>) -> Self {
        Self::new(label, ColumnType::Size)
    }

    pub fn number(label: impl Into<String>) -> Self {
        Self::new(label, ColumnType::Number)
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::new(label, ColumnType::Button)
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self.fill_width = false;
        self
    }

    pub fn fill_width(mut self) -> Self {
        self.fill_width = true;
        self.width = None;
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.disable_sort = true;
        self
    }
}

/// One table row: column label -> cell, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row(IndexMap<String, Cell>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, cell: impl Into<Cell>) -> Self {
        self.insert(column, cell);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, cell: impl Into<Cell>) {
        self.0.insert(column.into(), cell.into());
    }

    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.0.get(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reshape the row to exactly the declared columns, in header order.
    /// Missing columns get an empty text cell; undeclared ones are dropped.
    pub fn conform_to(mut self, headers: &[Header]) -> Self {
        let cells = headers
            .iter()
            .map(|header| {
                let cell = self.0.shift_remove(&header.label).unwrap_or_else(Cell::empty);
                (header.label.clone(), cell)
            })
            .collect();
        Row(cells)
    }
}

/// Top-level table view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub title: String,
    pub headers: Vec<Header>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(title: impl Into<String>, headers: Vec<Header>) -> Self {
        Self {
            title: title.into(),
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        let row = row.conform_to(&self.headers);
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.headers.iter().map(|h| h.label.as_str()).collect()
    }
}

/// Table embedded in a button cell (no title of its own)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubTable {
    pub headers: Vec<Header>,
    pub rows: Vec<Row>,
}

impl SubTable {
    pub fn new(headers: Vec<Header>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        let row = row.conform_to(&self.headers);
        self.rows.push(row);
    }
}
