use super::{value::Literal, Comma, Formatter, Ident, Params, TableName, ToSql};

use crate::stmt::{CreateTable, DropTable};

use snowcap_core::{
    schema::{Column, DefaultValue, ForeignKey, Table},
    Error, Result,
};

struct ColumnDef<'a>(&'a Column);

/// A constraint clause, each rendered as `constraint "name" ..`.
enum Constraint<'a> {
    PrimaryKey(&'a str, &'a [String]),
    Unique(&'a str, &'a [String]),
    ColumnUnique(&'a str, &'a Column),
    ForeignKey(&'a ForeignKey),
}

/// Column keys rendered as a parenthesized list of SQL names.
struct KeyList<'a>(&'a Table, &'a [String]);

impl ToSql for &CreateTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let table = &self.table;

        if table.is_view() {
            return Err(Error::invalid_statement(format!(
                "`{}` is a view; views cannot be created as tables",
                table.name
            )));
        }

        let mut constraints = vec![];

        if let Some(pk) = &table.primary_key {
            constraints.push(Constraint::PrimaryKey(&pk.name, &pk.columns));
        }

        for column in table.columns() {
            if let (true, Some(name)) = (column.unique, &column.unique_name) {
                constraints.push(Constraint::ColumnUnique(name, column));
            }
        }

        for unique in &table.uniques {
            constraints.push(Constraint::Unique(&unique.name, &unique.columns));
        }

        for fk in &table.foreign_keys {
            constraints.push(Constraint::ForeignKey(fk));
        }

        let if_not_exists = if self.if_not_exists { "if not exists " } else { "" };
        fmt!(
            f,
            "create table " if_not_exists TableName(table) " ("
            Comma(table.columns().map(ColumnDef))
        );

        for constraint in constraints {
            fmt!(f, ", " ConstraintDef { table, constraint });
        }

        fmt!(f, ")");
        Ok(())
    }
}

impl ToSql for &DropTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let if_exists = if self.if_exists { "if exists " } else { "" };
        fmt!(f, "drop table " if_exists TableName(&self.table));
        Ok(())
    }
}

impl ToSql for ColumnDef<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let column = self.0;
        let ty = column.ty.sql_type();

        fmt!(f, Ident(column.sql_name(f.serializer.casing)) " " ty);

        if column.autoincrement {
            fmt!(f, " autoincrement");
        }

        if let Some(generated) = &column.generated {
            fmt!(f, " as (" generated ")");
        }

        if !column.nullable {
            fmt!(f, " not null");
        }

        match &column.default {
            Some(DefaultValue::Value(value)) => fmt!(f, " default " Literal(value)),
            Some(DefaultValue::Sql(sql)) => fmt!(f, " default " sql),
            None => {}
        }

        Ok(())
    }
}

struct ConstraintDef<'a> {
    table: &'a Table,
    constraint: Constraint<'a>,
}

impl ToSql for ConstraintDef<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self.constraint {
            Constraint::PrimaryKey(name, keys) => {
                fmt!(f, "constraint " Ident(name) " primary key " KeyList(self.table, keys));
            }
            Constraint::Unique(name, keys) => {
                fmt!(f, "constraint " Ident(name) " unique " KeyList(self.table, keys));
            }
            Constraint::ColumnUnique(name, column) => {
                let column_name = column.sql_name(f.serializer.casing);
                fmt!(f, "constraint " Ident(name) " unique (" Ident(column_name) ")");
            }
            Constraint::ForeignKey(fk) => {
                let foreign_table: &Table = &fk.foreign_table;
                fmt!(
                    f,
                    "constraint " Ident(&fk.name) " foreign key " KeyList(self.table, &fk.columns)
                    " references " TableName(&fk.foreign_table) KeyList(foreign_table, &fk.foreign_columns)
                );

                if let Some(action) = fk.on_delete {
                    fmt!(f, " on delete " action.as_sql());
                }

                if let Some(action) = fk.on_update {
                    fmt!(f, " on update " action.as_sql());
                }
            }
        }

        Ok(())
    }
}

impl ToSql for KeyList<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let casing = f.serializer.casing;
        let mut names = Vec::with_capacity(self.1.len());

        for key in self.1 {
            let Some(column) = self.0.column(key) else {
                return Err(Error::invalid_schema(format!(
                    "table `{}` has no column `{key}`",
                    self.0.name
                )));
            };
            names.push(Ident(column.sql_name(casing)));
        }

        fmt!(f, "(" Comma(names) ")");
        Ok(())
    }
}
