pub mod migration;
pub use migration::MigrationTable;

pub mod serializer;
pub use serializer::{Params, Placeholder, Query, Serializer, Transaction, TypeHint};

pub mod stmt;
pub use stmt::Statement;
