use super::{expr::Encoded, Comma, Formatter, Ident, Params, TableFrom, TableName, ToSql};

use snowcap_core::{
    schema::{Column, Table},
    stmt::{Delete, Expr, Insert, InsertRow, InsertSource, Select, Update},
    Error, Result,
};

/// The column list of an INSERT.
struct Columns<'a>(&'a [&'a Column]);

/// One parenthesized VALUES row.
struct Row<'a> {
    columns: &'a [&'a Column],
    row: &'a InsertRow,
}

/// The value written to a column that the row leaves unset.
enum Fallback {
    Expr(Expr),
    Default,
}

impl ToSql for &Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if self.on_conflict.is_some() {
            tracing::debug!(table = %self.table.name, "on conflict clause is not rendered by this dialect");
        }

        if self.returning.is_some() {
            tracing::debug!(table = %self.table.name, "returning clause is not rendered by this dialect");
        }

        let columns: Vec<&Column> = self
            .table
            .columns()
            .filter(|column| !column.is_insert_disabled())
            .collect();

        if columns.is_empty() {
            return Err(Error::invalid_statement(format!(
                "table `{}` has no insertable columns",
                self.table.name
            )));
        }

        fmt!(f, self.with.as_ref() "insert into " TableName(&self.table) " (" Columns(&columns) ") ");

        match &self.source {
            InsertSource::Values(rows) => {
                if rows.is_empty() {
                    return Err(Error::invalid_statement(format!(
                        "insert into `{}` has no rows",
                        self.table.name
                    )));
                }

                for row in rows {
                    check_keys(&self.table, row.values.keys())?;
                }

                let rows = rows.iter().map(|row| Row {
                    columns: &columns,
                    row,
                });
                fmt!(f, "values " Comma(rows));
            }
            InsertSource::Select(select) => {
                let select: &Select = select;
                fmt!(f, select);
            }
        }

        Ok(())
    }
}

impl ToSql for Columns<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let casing = f.serializer.casing;
        let names = self.0.iter().map(|column| Ident(column.sql_name(casing)));
        fmt!(f, Comma(names));
        Ok(())
    }
}

impl ToSql for Row<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        fmt!(f, "(");

        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                fmt!(f, ", ");
            }

            let encoder = Some(&column.ty);

            match self.row.values.get(&column.key) {
                Some(expr) => fmt!(f, Encoded { expr, encoder }),
                None => match fallback(column) {
                    Fallback::Expr(expr) => fmt!(f, Encoded { expr: &expr, encoder }),
                    Fallback::Default => fmt!(f, "default"),
                },
            }
        }

        fmt!(f, ")");
        Ok(())
    }
}

/// Runtime default first, then the update hook when the column has no
/// static default, then the warehouse default.
fn fallback(column: &Column) -> Fallback {
    if let Some(default_fn) = &column.default_fn {
        return Fallback::Expr(default_fn());
    }

    match &column.on_update_fn {
        Some(on_update_fn) if !column.has_default() => Fallback::Expr(on_update_fn()),
        _ => Fallback::Default,
    }
}

impl ToSql for &Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if self.returning.is_some() {
            tracing::debug!(table = %self.table.name, "returning clause is not rendered by this dialect");
        }

        check_keys(&self.table, self.assignments.keys())?;

        let mut assignments = vec![];
        for column in self.table.columns() {
            let expr = match self.assignments.get(&column.key) {
                Some(expr) => expr.clone(),
                None => match &column.on_update_fn {
                    Some(on_update_fn) => on_update_fn(),
                    None => continue,
                },
            };
            assignments.push((column, expr));
        }

        if assignments.is_empty() {
            return Err(Error::invalid_statement(format!(
                "update of `{}` sets no columns",
                self.table.name
            )));
        }

        fmt!(f, self.with.as_ref() "update " TableFrom(&self.table) " set ");

        let casing = f.serializer.casing;
        for (i, (column, expr)) in assignments.iter().enumerate() {
            if i > 0 {
                fmt!(f, ", ");
            }

            let encoder = Some(&column.ty);
            fmt!(f, Ident(column.sql_name(casing)) " = " Encoded { expr, encoder });
        }

        if let Some(filter) = &self.filter {
            fmt!(f, " where " filter);
        }

        Ok(())
    }
}

impl ToSql for &Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if self.returning.is_some() {
            tracing::debug!(table = %self.table.name, "returning clause is not rendered by this dialect");
        }

        fmt!(f, self.with.as_ref() "delete from " TableFrom(&self.table));

        if let Some(filter) = &self.filter {
            fmt!(f, " where " filter);
        }

        Ok(())
    }
}

fn check_keys<'a>(table: &Table, keys: impl IntoIterator<Item = &'a String>) -> Result<()> {
    for key in keys {
        if table.column(key).is_none() {
            return Err(Error::invalid_statement(format!(
                "table `{}` has no column `{key}`",
                table.name
            )));
        }
    }

    Ok(())
}
