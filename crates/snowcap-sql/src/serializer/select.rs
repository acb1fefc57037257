use super::{expr::Field, value, Comma, Formatter, Params, ToSql};

use snowcap_core::{
    stmt::{Direction, Expr, Join, Limit, OrderByExpr, Select, SetOperation},
    Error, Result,
};

struct OrderBy<'a>(&'a [OrderByExpr]);

struct LimitClause<'a>(&'static str, &'a Limit);

impl ToSql for &Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if !self.set_ops.is_empty() {
            return with_set_operations(f, self, &self.set_ops);
        }

        fmt!(f, self.with.as_ref());
        f.scoped(false, |f| body(f, self))
    }
}

/// Renders `left` followed by the set-operation chain `ops`, folded so each
/// operator applies to everything before it.
pub(super) fn with_set_operations<P: Params>(
    f: &mut Formatter<'_, P>,
    left: &Select,
    ops: &[SetOperation],
) -> Result<()> {
    if ops.is_empty() {
        return Err(Error::invalid_statement(
            "set operation requires at least one right-hand query",
        ));
    }

    fmt!(f, left.with.as_ref());
    f.scoped(false, |f| fold(f, left, ops))
}

fn fold<P: Params>(f: &mut Formatter<'_, P>, left: &Select, ops: &[SetOperation]) -> Result<()> {
    let Some((last, rest)) = ops.split_last() else {
        return body(f, left);
    };

    fmt!(f, "(");
    fold(f, left, rest)?;

    let all = if last.all { "all " } else { "" };
    let right: &Select = &last.right;
    fmt!(f, ") " last.op.as_str() " " all "(" right ")");

    f.scoped(true, |f| {
        fmt!(f, OrderBy(&last.order_by));
        Ok(())
    })?;

    limit_offset(f, last.limit.as_ref(), last.offset.as_ref())
}

/// Everything after the WITH clause, ignoring set operators.
fn body<P: Params>(f: &mut Formatter<'_, P>, select: &Select) -> Result<()> {
    let fields = select.selected_fields();

    if fields.is_empty() {
        return Err(Error::invalid_statement(format!(
            "select from `{}` projects no fields",
            select.source.name()
        )));
    }

    for field in &fields {
        let Expr::Column(column) = &field.expr else {
            continue;
        };

        let table = column.table_name();
        let joined = select.source.name() == table
            || select.joins.iter().any(|join| join.name() == table);

        if !joined {
            return Err(Error::missing_join(
                field.path_display(),
                table,
                column.column().sql_name(f.serializer.casing),
            ));
        }
    }

    let distinct = if select.distinct { " distinct" } else { "" };
    fmt!(f, "select" distinct " ");

    f.scoped(select.joins.is_empty(), |f| {
        fmt!(f, Comma(fields.iter().map(|field| Field(&field.expr))));
        Ok(())
    })?;

    let source = &select.source;
    fmt!(f, " from " source);

    for join in &select.joins {
        fmt!(f, " " join);
    }

    if let Some(filter) = &select.filter {
        fmt!(f, " where " filter);
    }

    if !select.group_by.is_empty() {
        fmt!(f, " group by " Comma(select.group_by.iter()));
    }

    if let Some(having) = &select.having {
        fmt!(f, " having " having);
    }

    fmt!(f, OrderBy(&select.order_by));

    limit_offset(f, select.limit.as_ref(), select.offset.as_ref())
}

fn limit_offset<P: Params>(
    f: &mut Formatter<'_, P>,
    limit: Option<&Limit>,
    offset: Option<&Limit>,
) -> Result<()> {
    if let Some(limit) = limit {
        fmt!(f, LimitClause(" limit ", limit));
    }

    if let Some(offset) = offset.filter(|offset| !offset.is_zero()) {
        fmt!(f, LimitClause(" offset ", offset));
    }

    Ok(())
}

impl ToSql for &Join {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let lateral = if self.lateral { " lateral" } else { "" };
        let source = &self.source;
        fmt!(f, self.ty.as_str() " join" lateral " " source);

        if let Some(on) = &self.on {
            fmt!(f, " on " on);
        }

        Ok(())
    }
}

impl ToSql for OrderBy<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if !self.0.is_empty() {
            fmt!(f, " order by " Comma(self.0));
        }

        Ok(())
    }
}

impl ToSql for &OrderByExpr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        fmt!(f, &self.expr);

        match self.direction {
            Some(Direction::Asc) => fmt!(f, " asc"),
            Some(Direction::Desc) => fmt!(f, " desc"),
            None => {}
        }

        Ok(())
    }
}

impl ToSql for LimitClause<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        fmt!(f, self.0);

        match self.1 {
            Limit::Count(count) => {
                let count = i64::try_from(*count).map_err(|_| {
                    Error::invalid_statement(format!("{} out of range: {count}", self.0.trim()))
                })?;
                value::bind(f, &count.into(), None)
            }
            Limit::Placeholder(name) => value::placeholder(f, name, None),
        }
    }
}
