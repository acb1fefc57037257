use super::Expr;
use crate::schema::Table;

use indexmap::IndexMap;
use std::sync::Arc;

/// The fields a query projects: an ordered, possibly nested, map from field
/// name to expression.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub items: IndexMap<String, SelectionItem>,
}

#[derive(Debug, Clone)]
pub enum SelectionItem {
    Expr(Expr),
    Nested(Selection),
}

/// One projected expression together with its path in the result record.
#[derive(Debug, Clone)]
pub struct SelectedField {
    pub path: Vec<String>,
    pub expr: Expr,
}

impl Selection {
    pub fn new() -> Selection {
        Selection::default()
    }

    /// Every column of `table`, keyed by column key.
    pub fn from_table(table: &Arc<Table>) -> Selection {
        let mut selection = Selection::new();
        for key in table.columns.keys() {
            selection = selection.field(key.clone(), table.col(key));
        }
        selection
    }

    pub fn field(mut self, name: impl Into<String>, expr: impl Into<Expr>) -> Selection {
        self.items
            .insert(name.into(), SelectionItem::Expr(expr.into()));
        self
    }

    pub fn nested(mut self, name: impl Into<String>, selection: Selection) -> Selection {
        self.items
            .insert(name.into(), SelectionItem::Nested(selection));
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Depth-first list of projected expressions in selection order.
    pub fn flatten(&self) -> Vec<SelectedField> {
        let mut fields = vec![];
        self.flatten_into(&mut vec![], &mut fields);
        fields
    }

    fn flatten_into(&self, prefix: &mut Vec<String>, fields: &mut Vec<SelectedField>) {
        for (name, item) in &self.items {
            prefix.push(name.clone());
            match item {
                SelectionItem::Expr(expr) => fields.push(SelectedField {
                    path: prefix.clone(),
                    expr: expr.clone(),
                }),
                SelectionItem::Nested(nested) => nested.flatten_into(prefix, fields),
            }
            prefix.pop();
        }
    }
}

impl SelectedField {
    /// The path as shown in error messages, `a->b`.
    pub fn path_display(&self) -> String {
        self.path.join("->")
    }
}
