use super::Expr;

#[derive(Debug, Clone)]
pub struct ExprLike {
    pub expr: Box<Expr>,
    pub pattern: Box<Expr>,
    pub negate: bool,
    pub case_insensitive: bool,
}

impl Expr {
    pub fn like(expr: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        Expr::like_impl(expr.into(), pattern.into(), false, false)
    }

    pub fn not_like(expr: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        Expr::like_impl(expr.into(), pattern.into(), true, false)
    }

    pub fn ilike(expr: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        Expr::like_impl(expr.into(), pattern.into(), false, true)
    }

    pub fn not_ilike(expr: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        Expr::like_impl(expr.into(), pattern.into(), true, true)
    }

    fn like_impl(expr: Expr, pattern: Expr, negate: bool, case_insensitive: bool) -> Self {
        ExprLike {
            expr: Box::new(expr),
            pattern: Box::new(pattern),
            negate,
            case_insensitive,
        }
        .into()
    }
}

impl From<ExprLike> for Expr {
    fn from(value: ExprLike) -> Self {
        Self::Like(value)
    }
}
