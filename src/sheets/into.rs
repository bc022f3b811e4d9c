use serde_json::Value;

pub type Grid = Vec<Vec<String>>;

pub trait IntoGrid {
    fn into_grid(self) -> Grid;
}

impl IntoGrid for Vec<Vec<Value>> {
    fn into_grid(self) -> Grid {
        self.into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect()
    }
}

fn cell_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
