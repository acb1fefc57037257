use super::{Formatter, Ident, Params, ToSql};

use snowcap_core::{
    schema::{ColumnRef, Table},
    stmt::{Select, TableSource},
    Result,
};

use std::sync::Arc;

/// A table as referenced from an expression: the alias when aliased,
/// otherwise the schema-qualified name.
pub(super) struct TableRef<'a>(pub(super) &'a Arc<Table>);

/// A table in FROM, JOIN, UPDATE or DELETE position: the schema-qualified
/// warehouse name followed by the alias, if any.
pub(super) struct TableFrom<'a>(pub(super) &'a Arc<Table>);

/// The schema-qualified warehouse name of a table.
pub(super) struct TableName<'a>(pub(super) &'a Arc<Table>);

impl ToSql for &ColumnRef {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let name = self.column().sql_name(f.serializer.casing);

        if f.unqualified {
            fmt!(f, Ident(name));
        } else if self.table.is_aliased() {
            fmt!(f, Ident(&self.table.name) "." Ident(name));
        } else {
            fmt!(f, TableName(&self.table) "." Ident(name));
        }

        Ok(())
    }
}

impl ToSql for TableRef<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if self.0.is_aliased() {
            fmt!(f, Ident(&self.0.name));
            Ok(())
        } else {
            TableName(self.0).to_sql(f)
        }
    }
}

impl ToSql for TableFrom<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        fmt!(f, TableName(self.0));

        if self.0.is_aliased() {
            fmt!(f, " " Ident(&self.0.name));
        }

        Ok(())
    }
}

impl ToSql for TableName<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if let Some(schema) = &self.0.schema {
            fmt!(f, Ident(schema) ".");
        }

        fmt!(f, Ident(&self.0.original_name));
        Ok(())
    }
}

impl ToSql for &TableSource {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self {
            TableSource::Table(table) => fmt!(f, TableFrom(table)),
            TableSource::Subquery(subquery) if subquery.is_cte => {
                subquery.check()?;
                fmt!(f, Ident(&subquery.alias))
            }
            TableSource::Subquery(subquery) => {
                subquery.check()?;
                let select: &Select = &subquery.select;
                fmt!(f, "(" select ") " Ident(&subquery.alias))
            }
        }

        Ok(())
    }
}
