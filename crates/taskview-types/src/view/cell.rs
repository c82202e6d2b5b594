use super::{ActionDescriptor, SubTable, is_false};
use indexmap::IndexMap;
use serde::Serialize;

/// Scalar shown in a text cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(u64),
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<u64> for CellValue {
    fn from(value: u64) -> Self {
        CellValue::Number(value)
    }
}

impl From<u16> for CellValue {
    fn from(value: u16) -> Self {
        CellValue::Number(u64::from(value))
    }
}

/// Icon drawn in front of a cell value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartIcon {
    pub start_icon: String,
    pub start_icon_hover_text: String,
    pub start_icon_color: String,
}

impl StartIcon {
    pub fn new(icon: &str, hover_text: &str, color: &str) -> Self {
        Self {
            start_icon: icon.to_string(),
            start_icon_hover_text: hover_text.to_string(),
            start_icon_color: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextCell {
    pub plaintext: CellValue,

    #[serde(skip_serializing_if = "is_false")]
    pub copy_icon: bool,

    #[serde(flatten)]
    pub icon: Option<StartIcon>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuButton {
    pub name: String,
    pub start_icon: String,
    pub value: Vec<ActionDescriptor>,
}

/// Attribute/value detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryButton {
    pub name: String,
    pub title: String,
    pub left_column_title: String,
    pub right_column_title: String,
    pub value: IndexMap<String, String>,
    pub start_icon: String,
    pub hover_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableButton {
    pub name: String,
    pub title: String,
    pub start_icon: String,
    pub hover_text: String,
    pub value: SubTable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Button {
    Menu(MenuButton),
    Dictionary(DictionaryButton),
    Table(TableButton),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonCell {
    pub button: Button,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(TextCell),
    Button(ButtonCell),
}

impl Cell {
    pub fn text(value: impl Into<CellValue>) -> Self {
        Cell::Text(TextCell {
            plaintext: value.into(),
            copy_icon: false,
            icon: None,
        })
    }

    pub fn copyable(value: impl Into<CellValue>) -> Self {
        Cell::Text(TextCell {
            plaintext: value.into(),
            copy_icon: true,
            icon: None,
        })
    }

    /// Placeholder for a declared column the record has no value for
    pub fn empty() -> Self {
        Cell::text("")
    }

    /// Action menu; the label shown on the button is always "Actions"
    pub fn menu(actions: Vec<ActionDescriptor>) -> Self {
        Cell::Button(ButtonCell {
            button: Button::Menu(MenuButton {
                name: "Actions".to_string(),
                start_icon: "list".to_string(),
                value: actions,
            }),
        })
    }

    pub fn dictionary(
        title: impl Into<String>,
        hover_text: impl Into<String>,
        value: IndexMap<String, String>,
    ) -> Self {
        Cell::Button(ButtonCell {
            button: Button::Dictionary(DictionaryButton {
                name: "view".to_string(),
                title: title.into(),
                left_column_title: "Attribute".to_string(),
                right_column_title: "Value".to_string(),
                value,
                start_icon: "list".to_string(),
                hover_text: hover_text.into(),
            }),
        })
    }

    pub fn sub_table(
        title: impl Into<String>,
        hover_text: impl Into<String>,
        table: SubTable,
    ) -> Self {
        Cell::Button(ButtonCell {
            button: Button::Table(TableButton {
                name: "view".to_string(),
                title: title.into(),
                start_icon: "list".to_string(),
                hover_text: hover_text.into(),
                value: table,
            }),
        })
    }

    pub fn as_text(&self) -> Option<&TextCell> {
        match self {
            Cell::Text(cell) => Some(cell),
            Cell::Button(_) => None,
        }
    }

    pub fn as_button(&self) -> Option<&Button> {
        match self {
            Cell::Button(cell) => Some(&cell.button),
            Cell::Text(_) => None,
        }
    }

    /// Text value of a plain cell, numbers rendered in decimal
    pub fn display_value(&self) -> Option<String> {
        self.as_text().map(|cell| match &cell.plaintext {
            CellValue::Text(text) => text.clone(),
            CellValue::Number(n) => n.to_string(),
        })
    }
}

impl From<TextCell> for Cell {
    fn from(cell: TextCell) -> Self {
        Cell::Text(cell)
    }
}
