use super::{
    Column, ForeignKey, ForeignKeyDef, Index, PrimaryKey, Table, TableKind, UniqueConstraint,
};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// Collects column and constraint declarations, then resolves constraint
/// names and validates references in one `build` pass.
#[derive(Debug)]
pub struct TableBuilder {
    schema: Option<String>,
    name: String,
    kind: TableKind,
    columns: Vec<Column>,
    primary_key: Option<(Option<String>, Vec<String>)>,
    foreign_keys: Vec<ForeignKeyDef>,
    uniques: Vec<(Option<String>, Vec<String>)>,
    indices: Vec<Index>,
}

impl TableBuilder {
    pub(super) fn new(name: impl Into<String>, kind: TableKind) -> Self {
        Self {
            schema: None,
            name: name.into(),
            kind,
            columns: vec![],
            primary_key: None,
            foreign_keys: vec![],
            uniques: vec![],
            indices: vec![],
        }
    }

    pub fn schema(&mut self, schema: impl Into<String>) -> &mut Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn column(&mut self, column: Column) -> &mut Self {
        self.columns.push(column);
        self
    }

    /// Composite primary key over the given column keys.
    pub fn primary_key<I>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.primary_key = Some((None, columns.into_iter().map(Into::into).collect()));
        self
    }

    pub fn primary_key_named<I>(&mut self, name: impl Into<String>, columns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.primary_key = Some((
            Some(name.into()),
            columns.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn unique<I>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.uniques
            .push((None, columns.into_iter().map(Into::into).collect()));
        self
    }

    pub fn unique_named<I>(&mut self, name: impl Into<String>, columns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.uniques.push((
            Some(name.into()),
            columns.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn foreign_key(&mut self, def: ForeignKeyDef) -> &mut Self {
        self.foreign_keys.push(def);
        self
    }

    pub fn index<I>(&mut self, name: impl Into<String>, columns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.push_index(name.into(), columns, false)
    }

    pub fn unique_index<I>(&mut self, name: impl Into<String>, columns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.push_index(name.into(), columns, true)
    }

    fn push_index<I>(&mut self, name: String, columns: I, unique: bool) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.indices.push(Index {
            name,
            columns: columns.into_iter().map(Into::into).collect(),
            unique,
        });
        self
    }

    pub fn build(&self) -> Result<Arc<Table>> {
        if self.name.is_empty() {
            return Err(Error::invalid_schema("table name must not be empty"));
        }

        let mut columns = IndexMap::new();
        let mut inline_foreign_keys = vec![];

        for column in &self.columns {
            let mut column = column.clone();

            if columns.contains_key(&column.key) {
                return Err(Error::invalid_schema(format!(
                    "duplicate column `{}` on table `{}`",
                    column.key, self.name
                )));
            }

            if column.unique && column.unique_name.is_none() {
                column.unique_name = Some(format!("{}_{}_unique", self.name, column.name));
            }

            inline_foreign_keys.extend(column.references.take());
            columns.insert(column.key.clone(), column);
        }

        let primary_key = match &self.primary_key {
            Some((name, keys)) => Some((name.clone(), keys.clone())),
            None => {
                let keys: Vec<_> = columns
                    .values()
                    .filter(|column| column.primary_key)
                    .map(|column| column.key.clone())
                    .collect();
                (!keys.is_empty()).then_some((None, keys))
            }
        };

        let primary_key = match primary_key {
            Some((name, keys)) => {
                let derived = format!(
                    "{}_{}_pk",
                    self.name,
                    self.column_names(&columns, &keys, "primary key")?.join("_")
                );
                for key in &keys {
                    if let Some(column) = columns.get_mut(key) {
                        column.primary_key = true;
                        column.nullable = false;
                    }
                }
                Some(PrimaryKey {
                    name: name.unwrap_or(derived),
                    columns: keys,
                })
            }
            None => None,
        };

        let mut uniques = vec![];
        for (name, keys) in &self.uniques {
            let names = self.column_names(&columns, keys, "unique constraint")?;
            uniques.push(UniqueConstraint {
                name: name
                    .clone()
                    .unwrap_or_else(|| format!("{}_{}_unique", self.name, names.join("_"))),
                columns: keys.clone(),
            });
        }

        let mut foreign_keys = vec![];
        for def in inline_foreign_keys.iter().chain(&self.foreign_keys) {
            foreign_keys.push(self.build_foreign_key(&columns, def)?);
        }

        for index in &self.indices {
            if index.name.is_empty() {
                return Err(Error::invalid_schema(format!(
                    "index on table `{}` must be named",
                    self.name
                )));
            }
            self.column_names(&columns, &index.columns, "index")?;
        }

        Ok(Arc::new(Table {
            schema: self.schema.clone(),
            name: self.name.clone(),
            original_name: self.name.clone(),
            kind: self.kind,
            columns,
            primary_key,
            foreign_keys,
            uniques,
            indices: self.indices.clone(),
        }))
    }

    fn build_foreign_key(
        &self,
        columns: &IndexMap<String, Column>,
        def: &ForeignKeyDef,
    ) -> Result<ForeignKey> {
        if def.columns.is_empty() || def.columns.len() != def.foreign_columns.len() {
            return Err(Error::invalid_schema(format!(
                "foreign key on table `{}` must reference as many columns as it covers",
                self.name
            )));
        }

        let names = self.column_names(columns, &def.columns, "foreign key")?;
        let foreign_table = &def.foreign_table;
        let mut foreign_names = vec![];
        for key in &def.foreign_columns {
            match foreign_table.column(key) {
                Some(column) => foreign_names.push(column.name.as_str()),
                None => {
                    return Err(Error::invalid_schema(format!(
                        "foreign key on table `{}` references unknown column `{key}` on `{}`",
                        self.name, foreign_table.original_name
                    )))
                }
            }
        }

        let name = def.name.clone().unwrap_or_else(|| {
            format!(
                "{}_{}_{}_{}_fk",
                self.name,
                names.join("_"),
                foreign_table.original_name,
                foreign_names.join("_")
            )
        });

        Ok(ForeignKey {
            name,
            columns: def.columns.clone(),
            foreign_table: def.foreign_table.clone(),
            foreign_columns: def.foreign_columns.clone(),
            on_delete: def.on_delete,
            on_update: def.on_update,
        })
    }

    fn column_names<'a>(
        &self,
        columns: &'a IndexMap<String, Column>,
        keys: &[String],
        what: &str,
    ) -> Result<Vec<&'a str>> {
        if keys.is_empty() {
            return Err(Error::invalid_schema(format!(
                "{what} on table `{}` must cover at least one column",
                self.name
            )));
        }

        keys.iter()
            .map(|key| match columns.get(key) {
                Some(column) => Ok(column.name.as_str()),
                None => Err(Error::invalid_schema(format!(
                    "{what} on table `{}` references unknown column `{key}`",
                    self.name
                ))),
            })
            .collect()
    }
}
