use super::{Formatter, ToSql};

use snowcap_core::{stmt::Param, Result};

/// Collects bound parameters while a statement is serialized.
pub trait Params {
    fn push(&mut self, param: Param, hint: TypeHint) -> Placeholder;
}

/// Position of a pushed parameter, starting at 1.
pub struct Placeholder(pub usize);

/// Wire type hint attached to each bound parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeHint {
    None,
    Timestamp,
    Date,
}

/// A compiled statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub sql: String,
    pub params: Vec<Param>,

    /// One hint per entry of `params`.
    pub typings: Vec<TypeHint>,
}

impl TypeHint {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeHint::None => "none",
            TypeHint::Timestamp => "timestamp",
            TypeHint::Date => "date",
        }
    }
}

impl Params for Query {
    fn push(&mut self, param: Param, hint: TypeHint) -> Placeholder {
        self.params.push(param);
        self.typings.push(hint);
        Placeholder(self.params.len())
    }
}

impl Params for Vec<Param> {
    fn push(&mut self, param: Param, _hint: TypeHint) -> Placeholder {
        Vec::push(self, param);
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: super::Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        f.dst.push_str(f.serializer.escape_param(self.0));
        Ok(())
    }
}
