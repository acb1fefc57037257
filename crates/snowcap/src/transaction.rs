use crate::Session;

use snowcap_core::{Error, Result};

use std::ops::Deref;

/// Handle passed to a transaction body.
///
/// Statements run on the same connection as the enclosing session. Nested
/// transactions share the outermost `BEGIN`/`COMMIT`; no savepoints are
/// issued.
#[derive(Debug, Clone)]
pub struct Transaction {
    session: Session,

    /// 0 for the outermost transaction.
    nested_index: usize,
}

impl Transaction {
    pub(crate) fn new(session: Session, nested_index: usize) -> Transaction {
        Transaction {
            session,
            nested_index,
        }
    }

    pub fn nested_index(&self) -> usize {
        self.nested_index
    }

    /// Runs `f` with a nested handle. No transaction statements are issued.
    pub async fn transaction<O>(
        &self,
        f: impl AsyncFnOnce(&Transaction) -> Result<O>,
    ) -> Result<O> {
        let nested = Transaction::new(self.session.clone(), self.nested_index + 1);
        tracing::trace!(nested_index = nested.nested_index, "nested transaction");
        f(&nested).await
    }

    /// Aborts the transaction.
    ///
    /// Always returns the rollback error. Propagating it out of the
    /// transaction body makes the outermost transaction issue `ROLLBACK`.
    pub fn rollback(&self) -> Result<()> {
        Err(Error::transaction_rollback())
    }
}

impl Deref for Transaction {
    type Target = Session;

    fn deref(&self) -> &Session {
        &self.session
    }
}
