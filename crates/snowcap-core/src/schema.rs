mod builder;
pub use builder::TableBuilder;

mod casing;
pub use casing::Casing;

mod column;
pub use column::{Column, ColumnRef, DefaultValue, ValueFn};

mod foreign_key;
pub use foreign_key::{ForeignKey, ForeignKeyDef, ReferentialAction};

mod index;
pub use index::Index;

mod pk;
pub use pk::PrimaryKey;

mod table;
pub use table::{Table, TableKind};

mod ty;
pub use ty::{ColumnType, DateMode};

mod unique;
pub use unique::UniqueConstraint;
