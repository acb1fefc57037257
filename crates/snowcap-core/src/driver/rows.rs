use crate::stmt::{Value, ValueRecord};

/// Rows returned by the warehouse, in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rows {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Value>>,
}

impl Rows {
    pub fn new(columns: Vec<String>, values: Vec<Vec<Value>>) -> Rows {
        Rows { columns, values }
    }

    pub fn empty() -> Rows {
        Rows::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Each row as a record keyed by column name.
    pub fn into_records(self) -> Vec<ValueRecord> {
        let columns = self.columns;
        self.values
            .into_iter()
            .map(|row| columns.iter().cloned().zip(row).collect())
            .collect()
    }
}
