use super::Expr;

#[derive(Debug, Clone)]
pub struct ExprNot {
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn not(expr: impl Into<Self>) -> Self {
        ExprNot {
            expr: Box::new(expr.into()),
        }
        .into()
    }
}

impl From<ExprNot> for Expr {
    fn from(value: ExprNot) -> Self {
        Self::Not(value)
    }
}
