use super::{Expr, Selection, Subquery, With};
use crate::schema::Table;

use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Delete {
    pub with: Option<With>,
    pub table: Arc<Table>,
    pub filter: Option<Expr>,

    /// Accepted for builder compatibility; not rendered.
    pub returning: Option<Selection>,
}

impl Delete {
    pub fn from_table(table: &Arc<Table>) -> Delete {
        Delete {
            with: None,
            table: table.clone(),
            filter: None,
            returning: None,
        }
    }

    pub fn filter(mut self, expr: impl Into<Expr>) -> Delete {
        self.filter = Some(match self.filter.take() {
            Some(filter) => Expr::and(filter, expr),
            None => expr.into(),
        });
        self
    }

    pub fn with(mut self, cte: Subquery) -> Delete {
        self.with.get_or_insert_with(With::default).ctes.push(cte);
        self
    }

    pub fn returning(mut self, returning: Selection) -> Delete {
        self.returning = Some(returning);
        self
    }
}
