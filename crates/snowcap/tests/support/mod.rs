use snowcap::{
    driver::{Connection, Rows, Statement},
    Error, Result,
};
use snowcap_core::async_trait;

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

/// Records every statement and answers with scripted rows.
#[derive(Debug, Clone, Default)]
pub struct RecordingConnection {
    /// Log of all statements submitted through this connection
    statements: Arc<Mutex<Vec<Statement>>>,

    /// Returned in order; empty rows once exhausted
    responses: Arc<Mutex<VecDeque<Rows>>>,

    /// SQL texts that fail with a driver error
    failures: Arc<Mutex<Vec<String>>>,
}

impl RecordingConnection {
    pub fn new() -> RecordingConnection {
        RecordingConnection::default()
    }

    pub fn respond(&self, rows: Rows) {
        self.responses.lock().unwrap().push_back(rows);
    }

    pub fn fail_on(&self, sql: &str) {
        self.failures.lock().unwrap().push(sql.to_string());
    }

    pub fn statements(&self) -> Vec<Statement> {
        self.statements.lock().unwrap().clone()
    }

    pub fn sql(&self) -> Vec<String> {
        self.statements()
            .into_iter()
            .map(|statement| statement.sql_text)
            .collect()
    }
}

#[async_trait]
impl Connection for RecordingConnection {
    async fn execute(&self, statement: Statement) -> Result<Rows> {
        let sql = statement.sql_text.clone();
        self.statements.lock().unwrap().push(statement);

        if self.failures.lock().unwrap().contains(&sql) {
            return Err(Error::driver(std::io::Error::other(format!(
                "warehouse rejected `{sql}`"
            ))));
        }

        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }
}
