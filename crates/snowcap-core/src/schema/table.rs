use super::{Column, ColumnRef, ForeignKey, Index, PrimaryKey, TableBuilder, UniqueConstraint};

use indexmap::IndexMap;
use std::sync::Arc;

/// A warehouse table or view.
#[derive(Debug, Clone)]
pub struct Table {
    pub schema: Option<String>,

    /// Name the table is referenced by in queries. Equal to
    /// `original_name` unless the table is aliased.
    pub name: String,

    /// Name of the table in the warehouse.
    pub original_name: String,

    pub kind: TableKind,

    /// Columns keyed by their logical key, in declaration order.
    pub columns: IndexMap<String, Column>,

    pub primary_key: Option<PrimaryKey>,

    pub foreign_keys: Vec<ForeignKey>,

    pub uniques: Vec<UniqueConstraint>,

    pub indices: Vec<Index>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Table,
    View,
}

impl Table {
    pub fn builder(name: impl Into<String>) -> TableBuilder {
        TableBuilder::new(name, TableKind::Table)
    }

    pub fn view_builder(name: impl Into<String>) -> TableBuilder {
        TableBuilder::new(name, TableKind::View)
    }

    /// A copy of this table referenced under `alias`.
    pub fn alias(self: &Arc<Self>, alias: impl Into<String>) -> Arc<Table> {
        let mut table = Table::clone(self);
        table.name = alias.into();
        Arc::new(table)
    }

    pub fn is_aliased(&self) -> bool {
        self.name != self.original_name
    }

    pub fn is_view(&self) -> bool {
        self.kind == TableKind::View
    }

    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.get(key)
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.columns.values()
    }

    /// References the column with the given key.
    ///
    /// # Panics
    ///
    /// Panics if the table has no such column.
    #[track_caller]
    pub fn col(self: &Arc<Self>, key: &str) -> ColumnRef {
        match self.try_col(key) {
            Some(column) => column,
            None => panic!("table `{}` has no column `{key}`", self.name),
        }
    }

    pub fn try_col(self: &Arc<Self>, key: &str) -> Option<ColumnRef> {
        self.columns.contains_key(key).then(|| ColumnRef {
            table: self.clone(),
            key: key.to_string(),
        })
    }

    pub fn primary_key_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.primary_key
            .iter()
            .flat_map(|pk| pk.columns.iter())
            .map(|key| &self.columns[key.as_str()])
    }

    /// A table derived from a subquery or CTE, exposing `columns` under
    /// `alias`.
    pub(crate) fn derived(alias: &str, columns: IndexMap<String, Column>) -> Table {
        Table {
            schema: None,
            name: alias.to_string(),
            original_name: alias.to_string(),
            kind: TableKind::View,
            columns,
            primary_key: None,
            foreign_keys: vec![],
            uniques: vec![],
            indices: vec![],
        }
    }
}
