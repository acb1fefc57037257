use super::Statement;

use snowcap_core::schema::Table;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CreateTable {
    pub table: Arc<Table>,

    /// Whether or not to add an `IF NOT EXISTS` clause.
    pub if_not_exists: bool,
}

impl Statement {
    pub fn create_table(table: &Arc<Table>) -> Self {
        CreateTable {
            table: table.clone(),
            if_not_exists: false,
        }
        .into()
    }

    pub fn create_table_if_not_exists(table: &Arc<Table>) -> Self {
        CreateTable {
            table: table.clone(),
            if_not_exists: true,
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
