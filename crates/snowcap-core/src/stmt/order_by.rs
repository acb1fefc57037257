use super::{Expr, Fragment};
use crate::schema::ColumnRef;

#[derive(Debug, Clone)]
pub struct OrderByExpr {
    pub expr: Expr,
    pub direction: Option<Direction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl OrderByExpr {
    pub fn asc(expr: impl Into<Expr>) -> OrderByExpr {
        OrderByExpr {
            expr: expr.into(),
            direction: Some(Direction::Asc),
        }
    }

    pub fn desc(expr: impl Into<Expr>) -> OrderByExpr {
        OrderByExpr {
            expr: expr.into(),
            direction: Some(Direction::Desc),
        }
    }
}

impl From<Expr> for OrderByExpr {
    fn from(value: Expr) -> Self {
        OrderByExpr {
            expr: value,
            direction: None,
        }
    }
}

impl From<ColumnRef> for OrderByExpr {
    fn from(value: ColumnRef) -> Self {
        Expr::Column(value).into()
    }
}

impl From<Fragment> for OrderByExpr {
    fn from(value: Fragment) -> Self {
        Expr::Raw(value).into()
    }
}
