use pretty_assertions::assert_eq;
use snowcap_core::schema::{Column, Table};
use snowcap_sql::{
    stmt::{Expr, OrderByExpr, Param, Select, Selection, SetOperation, SetOperator, Statement},
    Query, Serializer,
};

use std::sync::Arc;

fn table(name: &str) -> Arc<Table> {
    Table::builder(name)
        .column(Column::integer("id"))
        .column(Column::varchar("name"))
        .build()
        .unwrap()
}

fn ids(table: &Arc<Table>) -> Select {
    Select::new(table).fields(Selection::new().field("id", table.col("id")))
}

fn compile(stmt: impl Into<Statement>) -> Query {
    Serializer::new().compile(&stmt.into()).unwrap()
}

#[test]
fn union_wraps_both_sides() {
    let users = table("users");
    let admins = table("admins");

    let query = compile(ids(&users).union(ids(&admins)));
    assert_eq!(
        query.sql,
        r#"(select "id" from "users") union (select "id" from "admins")"#
    );
}

#[test]
fn trailing_clauses_apply_to_the_set_operation() {
    let users = table("users");
    let admins = table("admins");

    let query = compile(
        ids(&users)
            .filter(Expr::eq(users.col("name"), "a"))
            .union_all(ids(&admins))
            .order_by(OrderByExpr::asc(users.col("id")))
            .limit(5)
            .offset(10),
    );

    assert_eq!(
        query.sql,
        concat!(
            r#"(select "id" from "users" where "users"."name" = ?) union all "#,
            r#"(select "id" from "admins") order by "id" asc limit ? offset ?"#
        )
    );
    assert_eq!(
        query.params,
        vec![Param::value("a"), Param::value(5), Param::value(10)]
    );
}

#[test]
fn chains_fold_left() {
    let a = table("a");
    let b = table("b");
    let c = table("c");

    let query = compile(ids(&a).union(ids(&b)).except_all(ids(&c)));
    assert_eq!(
        query.sql,
        r#"((select "id" from "a") union (select "id" from "b")) except all (select "id" from "c")"#
    );
}

#[test]
fn with_clause_precedes_the_chain() {
    let users = table("users");
    let admins = table("admins");
    let named = ids(&users).cte("named");

    let query = compile(
        Select::new(&named)
            .with(named.clone())
            .intersect(ids(&admins)),
    );
    assert_eq!(
        query.sql,
        concat!(
            r#"with "named" as (select "id" from "users") "#,
            r#"(select "id" from "named") intersect (select "id" from "admins")"#
        )
    );
}

#[test]
fn build_set_operations_appends_to_existing_chain() {
    let a = table("a");
    let b = table("b");
    let c = table("c");
    let serializer = Serializer::new();

    let query = serializer
        .build_set_operations(
            &ids(&a),
            &[SetOperation::new(SetOperator::Intersect, false, ids(&b))],
        )
        .unwrap();
    assert_eq!(
        query.sql,
        r#"(select "id" from "a") intersect (select "id" from "b")"#
    );

    let query = serializer
        .build_set_operations(
            &ids(&a).union(ids(&b)),
            &[SetOperation::new(SetOperator::Except, false, ids(&c))],
        )
        .unwrap();
    assert_eq!(
        query.sql,
        r#"((select "id" from "a") union (select "id" from "b")) except (select "id" from "c")"#
    );
}

#[test]
fn empty_chain_is_rejected() {
    let a = table("a");
    let err = Serializer::new()
        .build_set_operations(&ids(&a), &[])
        .unwrap_err();
    assert!(err.is_invalid_statement());
}
