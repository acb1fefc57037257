use super::Expr;

/// An expression projected under `alias`.
///
/// When `is_selection_field` is set, the expression is a field re-exposed by
/// a subquery or CTE and renders as the bare alias identifier. Otherwise it
/// renders as `expr as "alias"` in a selection and as `expr` elsewhere.
#[derive(Debug, Clone)]
pub struct ExprAliased {
    pub expr: Box<Expr>,
    pub alias: String,
    pub is_selection_field: bool,
}

impl Expr {
    pub fn aliased(expr: impl Into<Expr>, alias: impl Into<String>) -> Expr {
        ExprAliased {
            expr: Box::new(expr.into()),
            alias: alias.into(),
            is_selection_field: false,
        }
        .into()
    }
}

impl From<ExprAliased> for Expr {
    fn from(value: ExprAliased) -> Self {
        Expr::Aliased(value)
    }
}
