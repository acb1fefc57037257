use crate::Db;

use snowcap_core::{
    driver::Rows,
    stmt::{Fragment, Value},
    Error, Result,
};
use snowcap_sql::MigrationTable;

use serde::{Deserialize, Serialize};

/// One migration folder: its statements, creation time and content hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationMeta {
    pub sql: Vec<String>,
    pub folder_millis: i64,
    pub hash: String,
    pub breakpoints: bool,
}

/// Where applied migrations are recorded. Unset fields use the defaults of
/// [`MigrationTable`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationConfig {
    pub migrations_table: Option<String>,
    pub migrations_schema: Option<String>,
}

impl Db {
    /// Applies every migration newer than the latest recorded one.
    ///
    /// Statements run outside a transaction; DDL auto-commits on the
    /// warehouse.
    pub async fn migrate(
        &self,
        migrations: &[MigrationMeta],
        config: &MigrationConfig,
    ) -> Result<()> {
        let table = MigrationTable::new(
            config.migrations_schema.as_deref(),
            config.migrations_table.as_deref(),
        );

        self.execute(table.create_schema()).await?;
        self.execute(table.create_table()).await?;

        let latest = self.all(table.select_latest()).await?;
        let last_applied = last_created_at(&latest)?;

        for migration in migrations {
            if last_applied.is_some_and(|last| migration.folder_millis <= last) {
                continue;
            }

            tracing::debug!(
                hash = %migration.hash,
                folder_millis = migration.folder_millis,
                "applying migration"
            );

            for sql in &migration.sql {
                if sql.trim().is_empty() {
                    continue;
                }
                self.execute(Fragment::raw(sql.as_str())).await?;
            }

            self.execute(table.record(&migration.hash, migration.folder_millis))
                .await?;
        }

        Ok(())
    }
}

/// `created_at` of the first returned row. The warehouse may report column
/// names upper-cased and numbers as strings.
fn last_created_at(rows: &Rows) -> Result<Option<i64>> {
    let Some(row) = rows.values.first() else {
        return Ok(None);
    };

    let index = rows
        .columns
        .iter()
        .position(|column| column.eq_ignore_ascii_case("created_at"))
        .unwrap_or(2);

    match row.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(value @ (Value::I64(_) | Value::F64(_))) => match value.as_exact_i64() {
            Some(v) => Ok(Some(v)),
            None => Err(Error::type_conversion(value.clone(), "I64")),
        },
        Some(Value::String(s)) => match s.trim().parse::<i64>() {
            Ok(v) => Ok(Some(v)),
            Err(_) => Err(Error::type_conversion(Value::String(s.clone()), "I64")),
        },
        Some(value) => Err(Error::type_conversion(value.clone(), "I64")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(columns: &[&str], value: Value) -> Rows {
        Rows::new(
            columns.iter().map(|c| c.to_string()).collect(),
            vec![vec![Value::I64(1), Value::from("h"), value]],
        )
    }

    #[test]
    fn created_at_forms() {
        let columns = ["ID", "HASH", "CREATED_AT"];
        assert_eq!(last_created_at(&Rows::empty()).unwrap(), None);
        assert_eq!(
            last_created_at(&rows(&columns, Value::I64(5))).unwrap(),
            Some(5)
        );
        assert_eq!(
            last_created_at(&rows(&columns, Value::from("1700000000000"))).unwrap(),
            Some(1700000000000)
        );
        assert_eq!(
            last_created_at(&rows(&columns, Value::F64(12.0))).unwrap(),
            Some(12)
        );
        assert!(last_created_at(&rows(&columns, Value::F64(1e30)))
            .unwrap_err()
            .is_type_conversion());
        assert!(last_created_at(&rows(&columns, Value::Bool(true)))
            .unwrap_err()
            .is_type_conversion());
    }
}
