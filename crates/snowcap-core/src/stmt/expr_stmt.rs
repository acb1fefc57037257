use super::{Expr, Select};

/// A scalar subquery. Decodes its result with the decoder of its sole
/// selected field.
#[derive(Debug, Clone)]
pub struct ExprStmt {
    pub select: Box<Select>,
}

impl Expr {
    pub fn stmt(select: Select) -> Self {
        ExprStmt {
            select: Box::new(select),
        }
        .into()
    }
}

impl From<ExprStmt> for Expr {
    fn from(value: ExprStmt) -> Self {
        Self::Stmt(value)
    }
}

impl From<Select> for Expr {
    fn from(value: Select) -> Self {
        Expr::stmt(value)
    }
}
