use super::*;

use indexmap::IndexMap;

/// A SELECT query.
#[derive(Debug, Clone)]
pub struct Select {
    pub with: Option<With>,

    pub distinct: bool,

    /// Explicit projection. When unset, every column of the source is
    /// selected, nested per source when the query has joins.
    pub fields: Option<Selection>,

    pub source: TableSource,

    pub joins: Vec<Join>,

    pub filter: Option<Expr>,

    pub group_by: Vec<Expr>,

    pub having: Option<Expr>,

    pub order_by: Vec<OrderByExpr>,

    pub limit: Option<Limit>,

    pub offset: Option<Limit>,

    pub set_ops: Vec<SetOperation>,
}

impl Select {
    pub fn new(source: impl Into<TableSource>) -> Select {
        Select {
            with: None,
            distinct: false,
            fields: None,
            source: source.into(),
            joins: vec![],
            filter: None,
            group_by: vec![],
            having: None,
            order_by: vec![],
            limit: None,
            offset: None,
            set_ops: vec![],
        }
    }

    pub fn fields(mut self, fields: Selection) -> Select {
        self.fields = Some(fields);
        self
    }

    pub fn distinct(mut self) -> Select {
        self.distinct = true;
        self
    }

    pub fn with(mut self, cte: Subquery) -> Select {
        self.with.get_or_insert_with(With::default).ctes.push(cte);
        self
    }

    /// Adds a predicate, AND-ed with any existing one.
    pub fn filter(mut self, expr: impl Into<Expr>) -> Select {
        self.filter = Some(match self.filter.take() {
            Some(filter) => Expr::and(filter, expr),
            None => expr.into(),
        });
        self
    }

    pub fn join(mut self, join: Join) -> Select {
        self.joins.push(join);
        self
    }

    pub fn left_join(self, source: impl Into<TableSource>, on: impl Into<Expr>) -> Select {
        self.join(Join::new(JoinType::Left, source, Some(on.into())))
    }

    pub fn right_join(self, source: impl Into<TableSource>, on: impl Into<Expr>) -> Select {
        self.join(Join::new(JoinType::Right, source, Some(on.into())))
    }

    pub fn inner_join(self, source: impl Into<TableSource>, on: impl Into<Expr>) -> Select {
        self.join(Join::new(JoinType::Inner, source, Some(on.into())))
    }

    pub fn full_join(self, source: impl Into<TableSource>, on: impl Into<Expr>) -> Select {
        self.join(Join::new(JoinType::Full, source, Some(on.into())))
    }

    pub fn cross_join(self, source: impl Into<TableSource>) -> Select {
        self.join(Join::new(JoinType::Cross, source, None))
    }

    pub fn group_by(mut self, expr: impl Into<Expr>) -> Select {
        self.group_by.push(expr.into());
        self
    }

    pub fn having(mut self, expr: impl Into<Expr>) -> Select {
        self.having = Some(match self.having.take() {
            Some(having) => Expr::and(having, expr),
            None => expr.into(),
        });
        self
    }

    /// Once a set operator is attached, ORDER BY, LIMIT and OFFSET apply to
    /// the last set operation instead of the left query.
    pub fn order_by(mut self, order_by: impl Into<OrderByExpr>) -> Select {
        let order_by = order_by.into();
        match self.set_ops.last_mut() {
            Some(set_op) => set_op.order_by.push(order_by),
            None => self.order_by.push(order_by),
        }
        self
    }

    pub fn limit(self, limit: u64) -> Select {
        self.set_limit(Limit::Count(limit))
    }

    pub fn limit_placeholder(self, name: impl Into<String>) -> Select {
        self.set_limit(Limit::Placeholder(name.into()))
    }

    fn set_limit(mut self, limit: Limit) -> Select {
        match self.set_ops.last_mut() {
            Some(set_op) => set_op.limit = Some(limit),
            None => self.limit = Some(limit),
        }
        self
    }

    pub fn offset(self, offset: u64) -> Select {
        self.set_offset(Limit::Count(offset))
    }

    pub fn offset_placeholder(self, name: impl Into<String>) -> Select {
        self.set_offset(Limit::Placeholder(name.into()))
    }

    fn set_offset(mut self, offset: Limit) -> Select {
        match self.set_ops.last_mut() {
            Some(set_op) => set_op.offset = Some(offset),
            None => self.offset = Some(offset),
        }
        self
    }

    pub fn union(self, right: Select) -> Select {
        self.set_op(SetOperator::Union, false, right)
    }

    pub fn union_all(self, right: Select) -> Select {
        self.set_op(SetOperator::Union, true, right)
    }

    pub fn intersect(self, right: Select) -> Select {
        self.set_op(SetOperator::Intersect, false, right)
    }

    pub fn intersect_all(self, right: Select) -> Select {
        self.set_op(SetOperator::Intersect, true, right)
    }

    pub fn except(self, right: Select) -> Select {
        self.set_op(SetOperator::Except, false, right)
    }

    pub fn except_all(self, right: Select) -> Select {
        self.set_op(SetOperator::Except, true, right)
    }

    pub fn set_op(mut self, op: SetOperator, all: bool, right: Select) -> Select {
        self.set_ops.push(SetOperation::new(op, all, right));
        self
    }

    /// Exposes the query as a derived table named `alias`.
    pub fn alias(self, alias: impl Into<String>) -> Subquery {
        Subquery::new(alias.into(), self, false)
    }

    /// Exposes the query as a CTE named `name`.
    pub fn cte(self, name: impl Into<String>) -> Subquery {
        Subquery::new(name.into(), self, true)
    }

    /// The projection, explicit or derived from the sources.
    pub fn selection(&self) -> Selection {
        if let Some(fields) = &self.fields {
            return fields.clone();
        }

        if self.joins.is_empty() {
            return source_selection(&self.source);
        }

        let mut selection =
            Selection::new().nested(self.source.name(), source_selection(&self.source));
        for join in &self.joins {
            selection = selection.nested(join.name(), source_selection(&join.source));
        }
        selection
    }

    pub fn selected_fields(&self) -> Vec<SelectedField> {
        self.selection().flatten()
    }

    /// For every source name, whether its columns are guaranteed non-null
    /// given the join types.
    pub fn joins_not_nullable(&self) -> IndexMap<String, bool> {
        let mut map = IndexMap::new();
        map.insert(self.source.name().to_string(), true);

        for join in &self.joins {
            let name = join.name().to_string();
            match join.ty {
                JoinType::Left => {
                    map.insert(name, false);
                }
                JoinType::Right => {
                    map.values_mut().for_each(|not_null| *not_null = false);
                    map.insert(name, true);
                }
                JoinType::Inner | JoinType::Cross => {
                    map.insert(name, true);
                }
                JoinType::Full => {
                    map.values_mut().for_each(|not_null| *not_null = false);
                    map.insert(name, false);
                }
            }
        }

        map
    }
}

fn source_selection(source: &TableSource) -> Selection {
    match source {
        TableSource::Table(table) => Selection::from_table(table),
        TableSource::Subquery(subquery) => subquery.selection(),
    }
}
