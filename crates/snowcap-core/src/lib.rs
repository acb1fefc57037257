pub mod driver;
pub use driver::Connection;

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{Column, ColumnType, Table};

pub mod stmt;

pub use async_trait::async_trait;

pub type Result<T, E = Error> = core::result::Result<T, E>;
