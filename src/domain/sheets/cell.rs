use serde_json::Value;

/// Text of a cell as the spreadsheet would display it. Empty cells become an empty string.
pub trait CellText {
    fn cell_text(&self) -> String;
}

impl CellText for Value {
    fn cell_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

pub trait FirstRow<T> {
    fn first_row(self) -> T;
}

impl FirstRow<Vec<String>> for Vec<Vec<Value>> {
    fn first_row(self) -> Vec<String> {
        self.into_iter()
            .next()
            .unwrap_or_default()
            .iter()
            .map(CellText::cell_text)
            .collect()
    }
}
