use super::*;
use crate::schema::ColumnRef;

#[derive(Debug, Clone)]
pub enum Expr {
    /// An expression projected under a name
    Aliased(ExprAliased),

    /// AND a set of boolean expressions
    And(ExprAnd),

    /// `expr [not] between low and high`
    Between(ExprBetween),

    /// Binary comparison
    BinaryOp(ExprBinaryOp),

    /// A column of a table, view, or derived table
    Column(ColumnRef),

    /// `[not] exists (subquery)`
    Exists(ExprExists),

    /// `expr [not] in (list)`
    InList(ExprInList),

    /// `expr [not] in (subquery)`
    InSubquery(ExprInSubquery),

    /// `expr is [not] null`
    IsNull(ExprIsNull),

    /// `expr [not] [i]like pattern`
    Like(ExprLike),

    /// Negates a boolean expression
    Not(ExprNot),

    /// OR a set of boolean expressions
    Or(ExprOr),

    /// Named parameter slot filled at execution time
    Placeholder(String),

    /// Raw SQL fragment
    Raw(Fragment),

    /// Scalar subquery
    Stmt(ExprStmt),

    /// Bound value
    Value(Value),
}

impl Expr {
    pub fn value(value: impl Into<Value>) -> Expr {
        Expr::Value(value.into())
    }

    pub fn placeholder(name: impl Into<String>) -> Expr {
        Expr::Placeholder(name.into())
    }

    pub fn raw(fragment: Fragment) -> Expr {
        Expr::Raw(fragment)
    }

    pub fn null() -> Expr {
        Expr::Value(Value::Null)
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Expr::Value(Value::Bool(true)))
    }

    pub fn as_column(&self) -> Option<&ColumnRef> {
        match self {
            Expr::Column(column) => Some(column),
            _ => None,
        }
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Expr::Column(_))
    }

    /// How values produced by this expression are decoded when it is
    /// selected.
    pub fn decoder(&self) -> Option<Decoder> {
        match self {
            Expr::Column(column) => Some(Decoder::Column(column.column().ty.clone())),
            Expr::Aliased(aliased) => aliased.expr.decoder(),
            Expr::Raw(fragment) => fragment.decoder.clone(),
            Expr::Stmt(stmt) => {
                let fields = stmt.select.selected_fields();
                match &fields[..] {
                    [field] => field.expr.decoder(),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

impl From<ColumnRef> for Expr {
    fn from(value: ColumnRef) -> Self {
        Expr::Column(value)
    }
}

impl From<&ColumnRef> for Expr {
    fn from(value: &ColumnRef) -> Self {
        Expr::Column(value.clone())
    }
}

impl From<Fragment> for Expr {
    fn from(value: Fragment) -> Self {
        Expr::Raw(value)
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Value(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Expr::Value(value.into())
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::Value(value.into())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Value(value.into())
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Value(value.into())
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Expr::Value(value.into())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Expr::Value(value.into())
    }
}

impl From<chrono::NaiveDate> for Expr {
    fn from(value: chrono::NaiveDate) -> Self {
        Expr::Value(value.into())
    }
}

impl From<chrono::NaiveDateTime> for Expr {
    fn from(value: chrono::NaiveDateTime) -> Self {
        Expr::Value(value.into())
    }
}
