#[macro_use]
mod fmt;
use fmt::ToSql;

mod column;
use column::{TableFrom, TableName, TableRef};

mod cte;

mod delim;
use delim::{Comma, Delimited};

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder, Query, TypeHint};

// Fragment serializers
mod ddl;
mod expr;
mod fragment;
mod select;
mod statement;
mod value;

use crate::stmt::{Select, SetOperation, Statement};

use snowcap_core::{
    schema::{Casing, ColumnType},
    Result,
};

/// Serializes statements into warehouse SQL.
///
/// Every bound value renders as a positional `?` and is pushed to the
/// params collector in textual order.
#[derive(Debug, Default, Clone)]
pub struct Serializer {
    /// Naming policy for columns whose SQL name derives from their key.
    casing: Option<Casing>,
}

/// Transaction control statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Begin,
    Commit,
    Rollback,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,

    /// True when column references render without their table qualifier.
    /// Set for the selection of a single-source query and for the ORDER BY
    /// of a set operation.
    unqualified: bool,
}

impl Serializer {
    pub fn new() -> Serializer {
        Serializer::default()
    }

    pub fn with_casing(casing: Option<Casing>) -> Serializer {
        Serializer { casing }
    }

    pub fn casing(&self) -> Option<Casing> {
        self.casing
    }

    /// Serialize a statement, pushing its bound values to `params`.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
            unqualified: false,
        };

        stmt.to_sql(&mut fmt)?;

        Ok(ret)
    }

    /// Serialize a statement into SQL text, params and typings.
    pub fn compile(&self, stmt: &Statement) -> Result<Query> {
        let mut query = Query::default();
        query.sql = self.serialize(stmt, &mut query)?;
        Ok(query)
    }

    /// Folds a chain of set operators onto `left`, right to left:
    /// `((left) op1 (r1)) op2 (r2)`. An empty chain is an error.
    pub fn build_set_operations(&self, left: &Select, ops: &[SetOperation]) -> Result<Query> {
        let mut query = Query::default();
        let mut sql = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut sql,
            params: &mut query,
            unqualified: false,
        };

        let chain: Vec<_> = left.set_ops.iter().chain(ops).cloned().collect();
        select::with_set_operations(&mut fmt, left, &chain)?;

        query.sql = sql;
        Ok(query)
    }

    /// Serialize a transaction control operation.
    pub fn serialize_transaction(&self, op: Transaction) -> &'static str {
        match op {
            Transaction::Begin => "BEGIN TRANSACTION",
            Transaction::Commit => "COMMIT",
            Transaction::Rollback => "ROLLBACK",
        }
    }

    /// Quotes an identifier, doubling embedded double quotes. No case
    /// folding is applied.
    pub fn escape_name(&self, name: &str) -> String {
        format!("\"{}\"", name.replace('"', "\"\""))
    }

    /// The marker for a bound parameter. Positional: the index is ignored.
    pub fn escape_param(&self, _index: usize) -> &'static str {
        "?"
    }

    /// Quotes a string literal, doubling embedded single quotes.
    pub fn escape_string(&self, s: &str) -> String {
        format!("'{}'", s.replace('\'', "''"))
    }

    /// The wire type hint for a parameter encoded through `ty`.
    pub fn prepare_typing(&self, ty: Option<&ColumnType>) -> TypeHint {
        match ty {
            Some(ColumnType::Timestamp { .. }) => TypeHint::Timestamp,
            Some(ColumnType::Date { .. }) => TypeHint::Date,
            _ => TypeHint::None,
        }
    }
}

impl<T: Params> Formatter<'_, T> {
    /// Runs `build` with `unqualified` set, restoring the previous value.
    fn scoped(
        &mut self,
        unqualified: bool,
        build: impl FnOnce(&mut Self) -> Result<()>,
    ) -> Result<()> {
        let prev = std::mem::replace(&mut self.unqualified, unqualified);
        let ret = build(self);
        self.unqualified = prev;
        ret
    }
}

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Raw(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}
