use super::{Expr, Selection, Subquery, With};
use crate::schema::Table;

use indexmap::IndexMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Update {
    pub with: Option<With>,
    pub table: Arc<Table>,

    /// Assigned values keyed by column key.
    pub assignments: IndexMap<String, Expr>,

    pub filter: Option<Expr>,

    /// Accepted for builder compatibility; not rendered.
    pub returning: Option<Selection>,
}

impl Update {
    pub fn table(table: &Arc<Table>) -> Update {
        Update {
            with: None,
            table: table.clone(),
            assignments: IndexMap::new(),
            filter: None,
            returning: None,
        }
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<Expr>) -> Update {
        self.assignments.insert(key.into(), value.into());
        self
    }

    pub fn filter(mut self, expr: impl Into<Expr>) -> Update {
        self.filter = Some(match self.filter.take() {
            Some(filter) => Expr::and(filter, expr),
            None => expr.into(),
        });
        self
    }

    pub fn with(mut self, cte: Subquery) -> Update {
        self.with.get_or_insert_with(With::default).ctes.push(cte);
        self
    }

    pub fn returning(mut self, returning: Selection) -> Update {
        self.returning = Some(returning);
        self
    }
}
