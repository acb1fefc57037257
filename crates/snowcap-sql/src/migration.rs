use crate::stmt::{Fragment, Statement};

/// Location of the table recording applied migrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationTable {
    pub schema: String,
    pub table: String,
}

impl MigrationTable {
    pub const DEFAULT_SCHEMA: &'static str = "drizzle";
    pub const DEFAULT_TABLE: &'static str = "__drizzle_migrations";

    pub fn new(schema: Option<&str>, table: Option<&str>) -> MigrationTable {
        MigrationTable {
            schema: schema.unwrap_or(Self::DEFAULT_SCHEMA).to_string(),
            table: table.unwrap_or(Self::DEFAULT_TABLE).to_string(),
        }
    }

    pub fn create_schema(&self) -> Statement {
        Fragment::raw("create schema if not exists ")
            .append_ident(&self.schema)
            .into()
    }

    pub fn create_table(&self) -> Statement {
        self.qualified(Fragment::raw("create table if not exists "))
            .append_raw(" (id integer autoincrement primary key, hash text not null, created_at bigint)")
            .into()
    }

    /// The most recently applied migration, at most one row.
    pub fn select_latest(&self) -> Statement {
        self.qualified(Fragment::raw("select id, hash, created_at from "))
            .append_raw(" order by created_at desc limit 1")
            .into()
    }

    pub fn record(&self, hash: &str, created_at: i64) -> Statement {
        self.qualified(Fragment::raw("insert into "))
            .append_raw(" (\"hash\", \"created_at\") values (")
            .append_param(hash)
            .append_raw(", ")
            .append_param(created_at)
            .append_raw(")")
            .into()
    }

    fn qualified(&self, fragment: Fragment) -> Fragment {
        fragment
            .append_ident(&self.schema)
            .append_raw(".")
            .append_ident(&self.table)
    }
}

impl Default for MigrationTable {
    fn default() -> Self {
        MigrationTable::new(None, None)
    }
}
