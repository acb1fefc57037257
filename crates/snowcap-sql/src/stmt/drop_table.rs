use super::Statement;

use snowcap_core::schema::Table;
use std::sync::Arc;

/// A statement to drop a table.
#[derive(Debug, Clone)]
pub struct DropTable {
    pub table: Arc<Table>,

    /// Whether or not to add an `IF EXISTS` clause.
    pub if_exists: bool,
}

impl Statement {
    /// Drops a table.
    ///
    /// This function _does not_ add an `IF EXISTS` clause.
    pub fn drop_table(table: &Arc<Table>) -> Self {
        DropTable {
            table: table.clone(),
            if_exists: false,
        }
        .into()
    }

    /// Drops a table if it exists.
    pub fn drop_table_if_exists(table: &Arc<Table>) -> Self {
        DropTable {
            table: table.clone(),
            if_exists: true,
        }
        .into()
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}
