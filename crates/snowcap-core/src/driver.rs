mod callback;
pub use callback::{CallbackConnection, Complete};

mod rows;
pub use rows::Rows;

use crate::{async_trait, stmt::Value};

use std::fmt::Debug;

/// A warehouse connection.
///
/// Statements are submitted one at a time; the returned future resolves once
/// the warehouse has completed the statement.
#[async_trait]
pub trait Connection: Debug + Send + Sync + 'static {
    /// Execute one SQL statement with positional binds.
    async fn execute(&self, statement: Statement) -> crate::Result<Rows>;
}

/// SQL text and the values bound to its `?` markers, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql_text: String,
    pub binds: Vec<Value>,
}

impl Statement {
    pub fn new(sql_text: impl Into<String>, binds: Vec<Value>) -> Statement {
        Statement {
            sql_text: sql_text.into(),
            binds,
        }
    }
}
