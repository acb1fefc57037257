use super::{Expr, Select};

#[derive(Debug, Clone)]
pub struct ExprExists {
    pub subquery: Box<Select>,
    pub negate: bool,
}

impl Expr {
    pub fn exists(subquery: Select) -> Self {
        ExprExists {
            subquery: Box::new(subquery),
            negate: false,
        }
        .into()
    }

    pub fn not_exists(subquery: Select) -> Self {
        ExprExists {
            subquery: Box::new(subquery),
            negate: true,
        }
        .into()
    }
}

impl From<ExprExists> for Expr {
    fn from(value: ExprExists) -> Self {
        Self::Exists(value)
    }
}
