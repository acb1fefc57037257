use crate::{Logger, Placeholders, PreparedQuery, Transaction};

use snowcap_core::{
    driver::{self, Connection, Rows},
    stmt::{Select, Value},
    Result,
};
use snowcap_sql::{Query, Serializer, Statement, Transaction as TransactionOp};

use std::{fmt, sync::Arc};

/// Compiles statements and runs them on the warehouse connection.
#[derive(Clone)]
pub struct Session {
    connection: Arc<dyn Connection>,
    serializer: Serializer,
    logger: Arc<dyn Logger>,
}

impl Session {
    pub(crate) fn new(
        connection: Arc<dyn Connection>,
        serializer: Serializer,
        logger: Arc<dyn Logger>,
    ) -> Session {
        Session {
            connection,
            serializer,
            logger,
        }
    }

    pub fn serializer(&self) -> &Serializer {
        &self.serializer
    }

    /// Compiles `stmt`. Selects capture their fields and join nullability so
    /// rows can be mapped into nested records.
    pub fn prepare(&self, stmt: impl Into<Statement>) -> Result<PreparedQuery> {
        let stmt = stmt.into();
        let query = self.serializer.compile(&stmt)?;
        let prepared = self.prepare_query(query);

        Ok(match stmt.as_select() {
            Some(select) => {
                prepared.with_fields(select.selected_fields(), Some(select.joins_not_nullable()))
            }
            None => prepared,
        })
    }

    /// Wraps an already compiled query.
    pub fn prepare_query(&self, query: Query) -> PreparedQuery {
        PreparedQuery::new(self.connection.clone(), self.logger.clone(), query)
    }

    pub async fn execute(&self, stmt: impl Into<Statement>) -> Result<Vec<Value>> {
        self.prepare(stmt)?.execute(&Placeholders::new()).await
    }

    /// Runs `stmt` and returns the rows without mapping.
    pub async fn all(&self, stmt: impl Into<Statement>) -> Result<Rows> {
        self.prepare(stmt)?.all(&Placeholders::new()).await
    }

    pub async fn select(&self, select: Select) -> Result<Vec<Value>> {
        self.execute(select).await
    }

    /// Runs `f` inside `BEGIN TRANSACTION`.
    ///
    /// The transaction commits when `f` returns `Ok` and rolls back when it
    /// returns `Err`, after which the error from `f` is returned. A failing
    /// `COMMIT` or `ROLLBACK` is returned in place of the result of `f`.
    pub async fn transaction<O>(
        &self,
        f: impl AsyncFnOnce(&Transaction) -> Result<O>,
    ) -> Result<O> {
        let tx = Transaction::new(self.clone(), 0);

        self.control(TransactionOp::Begin).await?;

        match f(&tx).await {
            Ok(value) => {
                self.control(TransactionOp::Commit).await?;
                Ok(value)
            }
            Err(err) => {
                tracing::debug!(error = %err, "rolling back transaction");
                self.control(TransactionOp::Rollback).await?;
                Err(err)
            }
        }
    }

    async fn control(&self, op: TransactionOp) -> Result<()> {
        let sql = self.serializer.serialize_transaction(op);
        tracing::trace!(sql, "transaction control");

        self.logger.log_query(sql, &[]);
        self.connection
            .execute(driver::Statement::new(sql, vec![]))
            .await?;
        Ok(())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("connection", &self.connection)
            .field("serializer", &self.serializer)
            .finish_non_exhaustive()
    }
}
