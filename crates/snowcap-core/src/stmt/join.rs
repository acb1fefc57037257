use super::{Expr, TableSource};

#[derive(Debug, Clone)]
pub struct Join {
    pub ty: JoinType,
    pub source: TableSource,

    /// Join predicate. Cross joins have none.
    pub on: Option<Expr>,

    pub lateral: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Left,
    Right,
    Inner,
    Full,
    Cross,
}

impl JoinType {
    pub fn as_str(self) -> &'static str {
        match self {
            JoinType::Left => "left",
            JoinType::Right => "right",
            JoinType::Inner => "inner",
            JoinType::Full => "full",
            JoinType::Cross => "cross",
        }
    }
}

impl Join {
    pub fn new(ty: JoinType, source: impl Into<TableSource>, on: Option<Expr>) -> Join {
        Join {
            ty,
            source: source.into(),
            on,
            lateral: false,
        }
    }

    pub fn lateral(mut self) -> Join {
        self.lateral = true;
        self
    }

    /// Name the joined source is referenced by.
    pub fn name(&self) -> &str {
        self.source.name()
    }
}
