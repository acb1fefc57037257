use super::{Expr, ExprAliased, Select, Selection, SelectionItem};
use crate::{
    schema::{Column, ColumnRef, Table},
    Error, Result,
};

use indexmap::IndexMap;
use std::sync::Arc;

/// A select exposed under an alias, either as a derived table in FROM/JOIN
/// or as a CTE.
///
/// Column fields of the inner select are re-parented to a derived table named
/// after the alias, so outer references render as `"alias"."column"`.
/// Aliased fields are re-exposed as selection fields and render as the bare
/// alias. Nested selections keep their shape; their columns join the derived
/// table under a dotted key.
#[derive(Debug, Clone)]
pub struct Subquery {
    pub alias: String,
    pub select: Box<Select>,

    /// Rendered by name only in FROM/JOIN; the body lives in `WITH`.
    pub is_cte: bool,

    table: Arc<Table>,
    selection: Selection,

    /// Why the inner select cannot be exposed, reported when compiled.
    defect: Option<String>,
}

impl Subquery {
    pub(super) fn new(alias: String, select: Select, is_cte: bool) -> Subquery {
        let inner = select.selection();

        let mut columns = IndexMap::new();
        let mut defect = None;
        collect_columns(&alias, &inner, &mut vec![], &mut columns, &mut defect);

        let table = Arc::new(Table::derived(&alias, columns));
        let selection = expose(&table, &inner, &mut vec![]);

        Subquery {
            alias,
            select: Box::new(select),
            is_cte,
            table,
            selection,
            defect,
        }
    }

    /// Fails when a field of the inner select cannot be referenced from the
    /// outer query.
    pub fn check(&self) -> Result<()> {
        match &self.defect {
            Some(defect) => Err(Error::invalid_statement(defect.clone())),
            None => Ok(()),
        }
    }

    /// Derived table exposing the column fields.
    pub fn table(&self) -> &Arc<Table> {
        &self.table
    }

    /// References a field of the subquery from the outer query.
    ///
    /// # Panics
    ///
    /// Panics if the subquery exposes no such field.
    #[track_caller]
    pub fn field(&self, key: &str) -> Expr {
        match self.try_field(key) {
            Some(expr) => expr,
            None => panic!("subquery `{}` exposes no field `{key}`", self.alias),
        }
    }

    pub fn try_field(&self, key: &str) -> Option<Expr> {
        self.try_field_at(&[key])
    }

    /// References a field inside a nested selection, e.g. `["pets", "id"]`.
    pub fn try_field_at(&self, path: &[&str]) -> Option<Expr> {
        let (last, parents) = path.split_last()?;
        let mut selection = &self.selection;
        for key in parents {
            match selection.items.get(*key)? {
                SelectionItem::Nested(nested) => selection = nested,
                SelectionItem::Expr(_) => return None,
            }
        }

        match selection.items.get(*last)? {
            SelectionItem::Expr(expr) => Some(expr.clone()),
            SelectionItem::Nested(_) => None,
        }
    }

    /// Every exposed field, in the inner selection's order and shape.
    pub fn selection(&self) -> Selection {
        self.selection.clone()
    }
}

/// Key of a nested field's column in the derived table.
fn column_key(path: &[String]) -> String {
    path.join(".")
}

fn collect_columns(
    alias: &str,
    selection: &Selection,
    path: &mut Vec<String>,
    columns: &mut IndexMap<String, Column>,
    defect: &mut Option<String>,
) {
    for (key, item) in &selection.items {
        path.push(key.clone());
        match item {
            SelectionItem::Expr(Expr::Column(column)) => {
                let mut column = column.column().clone();
                let duplicate = columns.values().any(|c: &Column| c.name == column.name);
                if duplicate && defect.is_none() {
                    *defect = Some(format!(
                        "subquery `{alias}` exposes more than one column named `{}`; alias the fields",
                        column.name
                    ));
                }
                column.key = column_key(path);
                columns.insert(column.key.clone(), column);
            }
            SelectionItem::Expr(Expr::Aliased(_)) => {}
            SelectionItem::Expr(_) => {
                if defect.is_none() {
                    *defect = Some(format!(
                        "field `{}` of subquery `{alias}` is an expression without an alias; use `.alias(..)`",
                        path.join("->")
                    ));
                }
            }
            SelectionItem::Nested(nested) => {
                collect_columns(alias, nested, path, columns, defect)
            }
        }
        path.pop();
    }
}

fn expose(table: &Arc<Table>, selection: &Selection, path: &mut Vec<String>) -> Selection {
    let mut exposed = Selection::new();

    for (key, item) in &selection.items {
        path.push(key.clone());
        match item {
            SelectionItem::Expr(Expr::Column(_)) => {
                exposed = exposed.field(
                    key.clone(),
                    Expr::Column(ColumnRef {
                        table: table.clone(),
                        key: column_key(path),
                    }),
                );
            }
            SelectionItem::Expr(Expr::Aliased(aliased)) => {
                exposed = exposed.field(
                    key.clone(),
                    ExprAliased {
                        expr: aliased.expr.clone(),
                        alias: aliased.alias.clone(),
                        is_selection_field: true,
                    },
                );
            }
            SelectionItem::Expr(_) => {}
            SelectionItem::Nested(nested) => {
                exposed = exposed.nested(key.clone(), expose(table, nested, path));
            }
        }
        path.pop();
    }

    exposed
}
