mod builder;
pub use builder::Builder;

use crate::Session;

use std::ops::Deref;

/// A database handle bound to one warehouse connection.
///
/// Dereferences to [`Session`] for executing statements and opening
/// transactions.
#[derive(Debug, Clone)]
pub struct Db {
    session: Session,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

impl Deref for Db {
    type Target = Session;

    fn deref(&self) -> &Session {
        &self.session
    }
}
