use super::{Connection, Rows, Statement};
use crate::{async_trait, Error, Result};

use std::fmt;
use tokio::sync::oneshot;

/// Completion handle handed to a callback-style client.
pub type Complete =
    Box<dyn FnOnce(std::result::Result<Rows, Box<dyn std::error::Error + Send + Sync>>) + Send>;

/// Adapts a client exposing `execute(statement, complete)` to [`Connection`].
///
/// Errors passed to `complete` surface as driver errors with the original
/// error as their source.
pub struct CallbackConnection<F> {
    execute: F,
}

impl<F> CallbackConnection<F>
where
    F: Fn(Statement, Complete) + Send + Sync + 'static,
{
    pub fn new(execute: F) -> CallbackConnection<F> {
        CallbackConnection { execute }
    }
}

#[async_trait]
impl<F> Connection for CallbackConnection<F>
where
    F: Fn(Statement, Complete) + Send + Sync + 'static,
{
    async fn execute(&self, statement: Statement) -> Result<Rows> {
        let (tx, rx) = oneshot::channel();

        (self.execute)(
            statement,
            Box::new(move |res| {
                // The receiver is gone only if the caller stopped waiting.
                let _ = tx.send(res);
            }),
        );

        match rx.await {
            Ok(Ok(rows)) => Ok(rows),
            Ok(Err(err)) => Err(Error::driver_boxed(err)),
            Err(_) => Err(crate::err!(
                "connection dropped the completion callback without calling it"
            )),
        }
    }
}

impl<F> fmt::Debug for CallbackConnection<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackConnection").finish_non_exhaustive()
    }
}
