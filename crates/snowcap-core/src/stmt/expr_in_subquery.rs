use super::{Expr, Select};

#[derive(Debug, Clone)]
pub struct ExprInSubquery {
    pub expr: Box<Expr>,
    pub subquery: Box<Select>,
    pub negate: bool,
}

impl Expr {
    pub fn in_subquery(expr: impl Into<Self>, subquery: Select) -> Self {
        ExprInSubquery {
            expr: Box::new(expr.into()),
            subquery: Box::new(subquery),
            negate: false,
        }
        .into()
    }

    pub fn not_in_subquery(expr: impl Into<Self>, subquery: Select) -> Self {
        ExprInSubquery {
            expr: Box::new(expr.into()),
            subquery: Box::new(subquery),
            negate: true,
        }
        .into()
    }
}

impl From<ExprInSubquery> for Expr {
    fn from(value: ExprInSubquery) -> Self {
        Self::InSubquery(value)
    }
}
