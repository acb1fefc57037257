use super::{Limit, OrderByExpr, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOperator {
    Union,
    Intersect,
    Except,
}

impl SetOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            SetOperator::Union => "union",
            SetOperator::Intersect => "intersect",
            SetOperator::Except => "except",
        }
    }
}

/// One link of a set-operation chain. The chain folds onto the query it is
/// attached to: `(left) op [all ](right)`.
#[derive(Debug, Clone)]
pub struct SetOperation {
    pub op: SetOperator,
    pub all: bool,
    pub right: Box<Select>,
    pub order_by: Vec<OrderByExpr>,
    pub limit: Option<Limit>,
    pub offset: Option<Limit>,
}

impl SetOperation {
    pub fn new(op: SetOperator, all: bool, right: Select) -> SetOperation {
        SetOperation {
            op,
            all,
            right: Box::new(right),
            order_by: vec![],
            limit: None,
            offset: None,
        }
    }
}
