use super::Subquery;
use crate::schema::Table;

use std::sync::Arc;

/// What a query reads from or joins against.
#[derive(Debug, Clone)]
pub enum TableSource {
    /// A table or view, possibly aliased
    Table(Arc<Table>),

    /// A derived table or a reference to a CTE
    Subquery(Subquery),
}

impl TableSource {
    /// Name the source is referenced by in the query.
    pub fn name(&self) -> &str {
        match self {
            TableSource::Table(table) => &table.name,
            TableSource::Subquery(subquery) => &subquery.alias,
        }
    }

    /// The table whose columns are exposed by this source.
    pub fn table(&self) -> &Arc<Table> {
        match self {
            TableSource::Table(table) => table,
            TableSource::Subquery(subquery) => subquery.table(),
        }
    }
}

impl From<Arc<Table>> for TableSource {
    fn from(value: Arc<Table>) -> Self {
        TableSource::Table(value)
    }
}

impl From<&Arc<Table>> for TableSource {
    fn from(value: &Arc<Table>) -> Self {
        TableSource::Table(value.clone())
    }
}

impl From<Subquery> for TableSource {
    fn from(value: Subquery) -> Self {
        TableSource::Subquery(value)
    }
}

impl From<&Subquery> for TableSource {
    fn from(value: &Subquery) -> Self {
        TableSource::Subquery(value.clone())
    }
}
