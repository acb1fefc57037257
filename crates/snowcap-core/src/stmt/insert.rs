use super::{Expr, Select, Selection, Subquery, With};
use crate::schema::Table;

use indexmap::IndexMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Insert {
    pub with: Option<With>,
    pub table: Arc<Table>,
    pub source: InsertSource,

    /// Accepted for builder compatibility; the warehouse dialect does not
    /// render it.
    pub on_conflict: Option<OnConflict>,

    /// Accepted for builder compatibility; not rendered.
    pub returning: Option<Selection>,
}

#[derive(Debug, Clone)]
pub enum InsertSource {
    Values(Vec<InsertRow>),
    Select(Box<Select>),
}

/// Values of one inserted row, keyed by column key.
#[derive(Debug, Clone, Default)]
pub struct InsertRow {
    pub values: IndexMap<String, Expr>,
}

#[derive(Debug, Clone)]
pub enum OnConflict {
    DoNothing,
    DoUpdate {
        target: Vec<String>,
        set: IndexMap<String, Expr>,
    },
}

impl Insert {
    pub fn into_table(table: &Arc<Table>) -> Insert {
        Insert {
            with: None,
            table: table.clone(),
            source: InsertSource::Values(vec![]),
            on_conflict: None,
            returning: None,
        }
    }

    pub fn row(mut self, row: InsertRow) -> Insert {
        match &mut self.source {
            InsertSource::Values(rows) => rows.push(row),
            InsertSource::Select(_) => self.source = InsertSource::Values(vec![row]),
        }
        self
    }

    pub fn rows(self, rows: impl IntoIterator<Item = InsertRow>) -> Insert {
        rows.into_iter().fold(self, Insert::row)
    }

    pub fn select(mut self, select: Select) -> Insert {
        self.source = InsertSource::Select(Box::new(select));
        self
    }

    pub fn with(mut self, cte: Subquery) -> Insert {
        self.with.get_or_insert_with(With::default).ctes.push(cte);
        self
    }

    pub fn on_conflict(mut self, on_conflict: OnConflict) -> Insert {
        self.on_conflict = Some(on_conflict);
        self
    }

    pub fn returning(mut self, returning: Selection) -> Insert {
        self.returning = Some(returning);
        self
    }
}

impl InsertRow {
    pub fn new() -> InsertRow {
        InsertRow::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<Expr>) -> InsertRow {
        self.values.insert(key.into(), value.into());
        self
    }
}
