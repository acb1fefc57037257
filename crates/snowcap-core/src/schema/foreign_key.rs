use super::Table;

use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub name: String,

    /// Referencing column keys on the owning table.
    pub columns: Vec<String>,

    pub foreign_table: Arc<Table>,

    /// Referenced column keys on `foreign_table`.
    pub foreign_columns: Vec<String>,

    pub on_delete: Option<ReferentialAction>,

    pub on_update: Option<ReferentialAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferentialAction {
    Cascade,
    Restrict,
    NoAction,
    SetNull,
    SetDefault,
}

/// A foreign key as declared, before `TableBuilder::build` resolves its name.
#[derive(Debug, Clone)]
pub struct ForeignKeyDef {
    pub(super) name: Option<String>,
    pub(super) columns: Vec<String>,
    pub(super) foreign_table: Arc<Table>,
    pub(super) foreign_columns: Vec<String>,
    pub(super) on_delete: Option<ReferentialAction>,
    pub(super) on_update: Option<ReferentialAction>,
}

impl ReferentialAction {
    pub fn as_sql(self) -> &'static str {
        match self {
            ReferentialAction::Cascade => "cascade",
            ReferentialAction::Restrict => "restrict",
            ReferentialAction::NoAction => "no action",
            ReferentialAction::SetNull => "set null",
            ReferentialAction::SetDefault => "set default",
        }
    }
}

impl ForeignKeyDef {
    pub fn new<C, F>(columns: C, foreign_table: &Arc<Table>, foreign_columns: F) -> ForeignKeyDef
    where
        C: IntoIterator,
        C::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        ForeignKeyDef {
            name: None,
            columns: columns.into_iter().map(Into::into).collect(),
            foreign_table: foreign_table.clone(),
            foreign_columns: foreign_columns.into_iter().map(Into::into).collect(),
            on_delete: None,
            on_update: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> ForeignKeyDef {
        self.name = Some(name.into());
        self
    }

    pub fn on_delete(mut self, action: ReferentialAction) -> ForeignKeyDef {
        self.on_delete = Some(action);
        self
    }

    pub fn on_update(mut self, action: ReferentialAction) -> ForeignKeyDef {
        self.on_update = Some(action);
        self
    }
}
