pub mod db;
pub use db::{Builder, Db};

mod logger;
pub use logger::{DefaultLogger, Logger, LoggerConfig, NoopLogger};

mod migrate;
pub use migrate::{MigrationConfig, MigrationMeta};

mod query;
pub use query::{Placeholders, PreparedQuery, ResultMapper};

mod result;

mod session;
pub use session::Session;

mod transaction;
pub use transaction::Transaction;

pub use snowcap_core::{driver, schema, Error, Result};
pub use snowcap_sql::{stmt, Query, Serializer, Statement};
