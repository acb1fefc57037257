use super::{Decoder, Expr, Param, Value};
use crate::{
    schema::{ColumnType, Table},
    Result,
};

use std::{fmt, sync::Arc};

/// A composable piece of SQL.
///
/// Fragments are built by appending chunks and may carry a decoder used when
/// the fragment is selected.
#[derive(Clone, Default)]
pub struct Fragment {
    pub chunks: Vec<Chunk>,
    pub decoder: Option<Decoder>,
}

#[derive(Debug, Clone)]
pub enum Chunk {
    /// Verbatim SQL text
    Raw(String),

    /// Escaped identifier
    Ident(String),

    /// Escaped string literal
    Str(String),

    /// Bound parameter or named placeholder
    Param(Param),

    /// Embedded expression (columns, subqueries, ..)
    Expr(Box<Expr>),

    /// Table reference
    Table(Arc<Table>),

    /// Nested fragment
    Fragment(Fragment),
}

impl Fragment {
    pub fn new() -> Fragment {
        Fragment::default()
    }

    pub fn raw(sql: impl Into<String>) -> Fragment {
        Fragment::new().append_raw(sql)
    }

    pub fn append_raw(mut self, sql: impl Into<String>) -> Fragment {
        self.chunks.push(Chunk::Raw(sql.into()));
        self
    }

    pub fn append_ident(mut self, name: impl Into<String>) -> Fragment {
        self.chunks.push(Chunk::Ident(name.into()));
        self
    }

    pub fn append_str(mut self, s: impl Into<String>) -> Fragment {
        self.chunks.push(Chunk::Str(s.into()));
        self
    }

    pub fn append_param(mut self, value: impl Into<Value>) -> Fragment {
        self.chunks.push(Chunk::Param(Param::value(value)));
        self
    }

    pub fn append_placeholder(mut self, name: impl Into<String>) -> Fragment {
        self.chunks.push(Chunk::Param(Param::placeholder(name)));
        self
    }

    pub fn append_expr(mut self, expr: impl Into<Expr>) -> Fragment {
        self.chunks.push(Chunk::Expr(Box::new(expr.into())));
        self
    }

    pub fn append_table(mut self, table: &Arc<Table>) -> Fragment {
        self.chunks.push(Chunk::Table(table.clone()));
        self
    }

    pub fn append(mut self, fragment: Fragment) -> Fragment {
        self.chunks.push(Chunk::Fragment(fragment));
        self
    }

    /// Concatenates fragments with `separator` between each.
    pub fn join(fragments: impl IntoIterator<Item = Fragment>, separator: &str) -> Fragment {
        let mut ret = Fragment::new();
        for (i, fragment) in fragments.into_iter().enumerate() {
            if i > 0 {
                ret.chunks.push(Chunk::Raw(separator.to_string()));
            }
            ret.chunks.push(Chunk::Fragment(fragment));
        }
        ret
    }

    /// Decodes selected values with `f`.
    pub fn map_with(mut self, f: impl Fn(Value) -> Result<Value> + Send + Sync + 'static) -> Fragment {
        self.decoder = Some(Decoder::custom(f));
        self
    }

    /// Decodes selected values through `ty`.
    pub fn decode_as(mut self, ty: ColumnType) -> Fragment {
        self.decoder = Some(Decoder::Column(ty));
        self
    }

    /// Projects the fragment under `alias`.
    pub fn alias(self, alias: impl Into<String>) -> Expr {
        Expr::aliased(self, alias)
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fragment")
            .field("chunks", &self.chunks)
            .field("decoder", &self.decoder)
            .finish()
    }
}

impl From<&str> for Fragment {
    fn from(value: &str) -> Self {
        Fragment::raw(value)
    }
}

impl From<String> for Fragment {
    fn from(value: String) -> Self {
        Fragment::raw(value)
    }
}
