use super::Expr;

#[derive(Debug, Clone)]
pub struct ExprBetween {
    pub expr: Box<Expr>,
    pub low: Box<Expr>,
    pub high: Box<Expr>,
    pub negate: bool,
}

impl Expr {
    pub fn between(expr: impl Into<Self>, low: impl Into<Self>, high: impl Into<Self>) -> Self {
        ExprBetween {
            expr: Box::new(expr.into()),
            low: Box::new(low.into()),
            high: Box::new(high.into()),
            negate: false,
        }
        .into()
    }

    pub fn not_between(
        expr: impl Into<Self>,
        low: impl Into<Self>,
        high: impl Into<Self>,
    ) -> Self {
        ExprBetween {
            expr: Box::new(expr.into()),
            low: Box::new(low.into()),
            high: Box::new(high.into()),
            negate: true,
        }
        .into()
    }
}

impl From<ExprBetween> for Expr {
    fn from(value: ExprBetween) -> Self {
        Self::Between(value)
    }
}
