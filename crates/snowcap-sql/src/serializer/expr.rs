use super::{value, Comma, Delimited, Formatter, Ident, Params, ToSql};

use snowcap_core::{
    schema::ColumnType,
    stmt::{Expr, ExprAliased, Select},
    Result,
};

/// An expression whose bound values are encoded through `encoder`.
///
/// Comparisons against a column bind the other operand through that
/// column's type, so `users.created_at > ?` sends a timestamp-typed param.
pub(super) struct Encoded<'a> {
    pub(super) expr: &'a Expr,
    pub(super) encoder: Option<&'a ColumnType>,
}

/// An expression in the selection list, where aliases are declared.
pub(super) struct Field<'a>(pub(super) &'a Expr);

impl ToSql for &Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        Encoded {
            expr: self,
            encoder: None,
        }
        .to_sql(f)
    }
}

impl ToSql for Encoded<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self.expr {
            Expr::Value(v) => value::bind(f, v, self.encoder),
            Expr::Placeholder(name) => value::placeholder(f, name, self.encoder),
            Expr::Aliased(ExprAliased {
                expr,
                is_selection_field: false,
                ..
            }) => Encoded {
                expr: &**expr,
                encoder: self.encoder,
            }
            .to_sql(f),
            expr => render(expr, f),
        }
    }
}

impl ToSql for Field<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self.0 {
            Expr::Aliased(ExprAliased {
                expr,
                alias,
                is_selection_field: false,
            }) => {
                fmt!(f, &**expr " as " Ident(alias));
                Ok(())
            }
            expr => expr.to_sql(f),
        }
    }
}

fn render<P: Params>(expr: &Expr, f: &mut Formatter<'_, P>) -> Result<()> {
    match expr {
        Expr::Aliased(aliased) => {
            if aliased.is_selection_field {
                fmt!(f, Ident(&aliased.alias));
            } else {
                fmt!(f, &*aliased.expr);
            }
        }
        Expr::And(expr) => match &expr.operands[..] {
            [] => fmt!(f, "true"),
            [operand] => fmt!(f, operand),
            operands => fmt!(f, "(" Delimited(operands, " and ") ")"),
        },
        Expr::Or(expr) => match &expr.operands[..] {
            [] => fmt!(f, "false"),
            [operand] => fmt!(f, operand),
            operands => fmt!(f, "(" Delimited(operands, " or ") ")"),
        },
        Expr::Between(expr) => {
            let encoder = column_type(&expr.expr);
            let not = if expr.negate { " not" } else { "" };
            fmt!(
                f,
                &*expr.expr not " between "
                Encoded { expr: &expr.low, encoder } " and "
                Encoded { expr: &expr.high, encoder }
            );
        }
        Expr::BinaryOp(expr) => {
            let lhs = Encoded {
                expr: &expr.lhs,
                encoder: column_type(&expr.rhs),
            };
            let rhs = Encoded {
                expr: &expr.rhs,
                encoder: column_type(&expr.lhs),
            };
            fmt!(f, lhs " " expr.op.as_str() " " rhs);
        }
        Expr::Column(column) => fmt!(f, column),
        Expr::Exists(expr) => {
            let not = if expr.negate { "not " } else { "" };
            let subquery: &Select = &expr.subquery;
            fmt!(f, not "exists (" subquery ")");
        }
        Expr::InList(expr) => {
            if expr.list.is_empty() {
                fmt!(f, if expr.negate { "true" } else { "false" });
            } else {
                let encoder = column_type(&expr.expr);
                let not = if expr.negate { " not" } else { "" };
                let items = expr.list.iter().map(|expr| Encoded { expr, encoder });
                fmt!(f, &*expr.expr not " in (" Comma(items) ")");
            }
        }
        Expr::InSubquery(expr) => {
            let not = if expr.negate { " not" } else { "" };
            let subquery: &Select = &expr.subquery;
            fmt!(f, &*expr.expr not " in (" subquery ")");
        }
        Expr::IsNull(expr) => {
            let not = if expr.negate { "not " } else { "" };
            fmt!(f, &*expr.expr " is " not "null");
        }
        Expr::Like(expr) => {
            let not = if expr.negate { " not" } else { "" };
            let op = if expr.case_insensitive { " ilike " } else { " like " };
            let pattern: &Expr = &expr.pattern;
            fmt!(f, &*expr.expr not op pattern);
        }
        Expr::Not(expr) => {
            let operand: &Expr = &expr.expr;
            fmt!(f, "not " operand);
        }
        Expr::Placeholder(name) => value::placeholder(f, name, None)?,
        Expr::Raw(fragment) => fmt!(f, fragment),
        Expr::Stmt(expr) => {
            let select: &Select = &expr.select;
            fmt!(f, "(" select ")");
        }
        Expr::Value(v) => value::bind(f, v, None)?,
    }

    Ok(())
}

/// The column type values compared against `expr` are encoded through.
fn column_type(expr: &Expr) -> Option<&ColumnType> {
    match expr {
        Expr::Column(column) => Some(&column.column().ty),
        Expr::Aliased(aliased) => column_type(&aliased.expr),
        _ => None,
    }
}
