use super::Db;
use crate::{LoggerConfig, Session};

use snowcap_core::{driver::Connection, schema::Casing};
use snowcap_sql::Serializer;

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    logger: LoggerConfig,

    /// Naming policy for columns whose name derives from their key
    casing: Option<Casing>,
}

impl Builder {
    /// Accepts `true`/`false` or an explicit [`LoggerConfig`].
    pub fn logger(&mut self, logger: impl Into<LoggerConfig>) -> &mut Self {
        self.logger = logger.into();
        self
    }

    pub fn casing(&mut self, casing: Casing) -> &mut Self {
        self.casing = Some(casing);
        self
    }

    pub fn build(&self, connection: impl Connection) -> Db {
        self.build_shared(Arc::new(connection))
    }

    pub fn build_shared(&self, connection: Arc<dyn Connection>) -> Db {
        Db {
            session: Session::new(
                connection,
                Serializer::with_casing(self.casing),
                self.logger.logger(),
            ),
        }
    }
}
