use pretty_assertions::assert_eq;
use snowcap_core::schema::{Casing, Column, ColumnType, Table};
use snowcap_sql::{
    stmt::{Expr, Fragment, OrderByExpr, Param, Select, Selection, Statement, Value, ValueRecord},
    Query, Serializer, TypeHint,
};

use std::sync::Arc;

fn users() -> Arc<Table> {
    Table::builder("users")
        .column(Column::integer("id").primary_key().autoincrement())
        .column(Column::varchar("name").not_null())
        .column(Column::timestamp("createdAt").name("created_at"))
        .build()
        .unwrap()
}

fn posts() -> Arc<Table> {
    Table::builder("posts")
        .schema("app")
        .column(Column::integer("id").primary_key())
        .column(Column::integer("authorId").name("author_id"))
        .column(Column::varchar("title"))
        .build()
        .unwrap()
}

fn compile(stmt: impl Into<Statement>) -> Query {
    Serializer::new().compile(&stmt.into()).unwrap()
}

#[test]
fn single_table_selects_unqualified_columns() {
    let users = users();
    let query = compile(Select::new(&users));

    assert_eq!(
        query.sql,
        r#"select "id", "name", "created_at" from "users""#
    );
    assert!(query.params.is_empty());
}

#[test]
fn filter_binds_through_column_type() {
    let users = users();
    let query = compile(Select::new(&users).filter(Expr::eq(users.col("id"), 1)));

    assert_eq!(
        query.sql,
        r#"select "id", "name", "created_at" from "users" where "users"."id" = ?"#
    );
    assert_eq!(query.params, vec![Param::value(1)]);
    assert_eq!(query.typings, vec![TypeHint::None]);
}

#[test]
fn timestamp_params_carry_typing() {
    let users = users();
    let query = compile(
        Select::new(&users)
            .fields(Selection::new().field("id", users.col("id")))
            .filter(Expr::between(
                users.col("createdAt"),
                "2024-01-01 00:00:00",
                "2024-12-31 23:59:59",
            )),
    );

    assert_eq!(
        query.sql,
        r#"select "id" from "users" where "users"."created_at" between ? and ?"#
    );
    assert_eq!(query.typings, vec![TypeHint::Timestamp, TypeHint::Timestamp]);
}

#[test]
fn joins_qualify_fields_and_nest_selection() {
    let users = users();
    let posts = posts();

    let select = Select::new(&users).left_join(
        &posts,
        Expr::eq(posts.col("authorId"), users.col("id")),
    );

    let paths: Vec<_> = select
        .selected_fields()
        .iter()
        .map(|field| field.path_display())
        .collect();
    assert_eq!(
        paths,
        [
            "users->id",
            "users->name",
            "users->createdAt",
            "posts->id",
            "posts->authorId",
            "posts->title"
        ]
    );

    let query = compile(select);
    assert_eq!(
        query.sql,
        concat!(
            r#"select "users"."id", "users"."name", "users"."created_at", "#,
            r#""app"."posts"."id", "app"."posts"."author_id", "app"."posts"."title" "#,
            r#"from "users" left join "app"."posts" on "app"."posts"."author_id" = "users"."id""#
        )
    );
}

#[test]
fn joins_not_nullable_follows_join_types() {
    let users = users();
    let posts = posts();
    let comments = Table::builder("comments")
        .column(Column::integer("postId"))
        .build()
        .unwrap();

    let select = Select::new(&users)
        .left_join(&posts, Expr::eq(posts.col("authorId"), users.col("id")))
        .right_join(&comments, Expr::eq(comments.col("postId"), posts.col("id")));

    let map = select.joins_not_nullable();
    assert_eq!(map["users"], false);
    assert_eq!(map["posts"], false);
    assert_eq!(map["comments"], true);

    let select = Select::new(&users).inner_join(&posts, true);
    let map = select.joins_not_nullable();
    assert_eq!(map["users"], true);
    assert_eq!(map["posts"], true);
}

#[test]
fn field_from_unjoined_table_is_rejected() {
    let users = users();
    let posts = posts();

    let select = Select::new(&users).fields(
        Selection::new()
            .field("id", users.col("id"))
            .nested("post", Selection::new().field("title", posts.col("title"))),
    );

    let err = Serializer::new()
        .compile(&Statement::from(select))
        .unwrap_err();
    assert!(err.is_missing_join());
    assert_eq!(
        err.to_string(),
        r#"Your "post->title" field references a column "posts"."title", but the table "posts" is not part of the query! Did you forget to join it?"#
    );
}

#[test]
fn aliased_table() {
    let users = users();
    let u = users.alias("u");

    let query = compile(
        Select::new(&u)
            .fields(Selection::new().field("name", u.col("name")))
            .filter(Expr::eq(u.col("id"), 7)),
    );

    assert_eq!(
        query.sql,
        r#"select "name" from "users" "u" where "u"."id" = ?"#
    );
}

#[test]
fn in_list_forms() {
    let users = users();
    let base = || Select::new(&users).fields(Selection::new().field("id", users.col("id")));

    let query = compile(base().filter(Expr::in_list(users.col("id"), [1, 2, 3])));
    assert_eq!(
        query.sql,
        r#"select "id" from "users" where "users"."id" in (?, ?, ?)"#
    );
    assert_eq!(query.params.len(), 3);

    let query = compile(base().filter(Expr::in_list(users.col("id"), Vec::<i64>::new())));
    assert_eq!(query.sql, r#"select "id" from "users" where false"#);

    let query = compile(base().filter(Expr::not_in_list(users.col("id"), Vec::<i64>::new())));
    assert_eq!(query.sql, r#"select "id" from "users" where true"#);
}

#[test]
fn boolean_connectives() {
    let users = users();
    let query = compile(
        Select::new(&users)
            .fields(Selection::new().field("id", users.col("id")))
            .filter(Expr::or(
                Expr::and(
                    Expr::eq(users.col("name"), "a"),
                    Expr::is_not_null(users.col("createdAt")),
                ),
                Expr::not(Expr::ilike(users.col("name"), "%b%")),
            )),
    );

    assert_eq!(
        query.sql,
        concat!(
            r#"select "id" from "users" where (("users"."name" = ? and "users"."created_at" is not null) "#,
            r#"or not "users"."name" ilike ?)"#
        )
    );
    assert_eq!(query.params, vec![Param::value("a"), Param::value("%b%")]);
}

#[test]
fn order_limit_offset() {
    let users = users();
    let select = || {
        Select::new(&users)
            .fields(Selection::new().field("id", users.col("id")))
            .order_by(OrderByExpr::desc(users.col("id")))
            .limit(10)
    };

    let query = compile(select().offset(0));
    assert_eq!(
        query.sql,
        r#"select "id" from "users" order by "users"."id" desc limit ?"#
    );
    assert_eq!(query.params, vec![Param::value(10)]);

    let query = compile(select().offset(20));
    assert_eq!(
        query.sql,
        r#"select "id" from "users" order by "users"."id" desc limit ? offset ?"#
    );
    assert_eq!(query.params, vec![Param::value(10), Param::value(20)]);
}

#[test]
fn placeholders_keep_their_encoder() {
    let users = users();
    let query = compile(
        Select::new(&users)
            .fields(Selection::new().field("id", users.col("id")))
            .filter(Expr::eq(users.col("id"), Expr::placeholder("id")))
            .limit_placeholder("n"),
    );

    assert_eq!(
        query.sql,
        r#"select "id" from "users" where "users"."id" = ? limit ?"#
    );
    assert_eq!(
        query.params,
        vec![
            Param::placeholder("id").with_encoder(Some(ColumnType::Integer)),
            Param::placeholder("n"),
        ]
    );
}

#[test]
fn raw_fields_are_aliased_in_selection() {
    let users = users();
    let query = compile(
        Select::new(&users)
            .fields(
                Selection::new()
                    .field("name", users.col("name"))
                    .field("total", Fragment::raw("count(*)").alias("total")),
            )
            .group_by(users.col("name"))
            .having(Expr::gt(Fragment::raw("count(*)"), 1)),
    );

    assert_eq!(
        query.sql,
        r#"select "name", count(*) as "total" from "users" group by "users"."name" having count(*) > ?"#
    );
}

#[test]
fn fragment_chunks() {
    let users = users();
    let fragment = Fragment::raw("coalesce(")
        .append_expr(users.col("name"))
        .append_raw(", ")
        .append_str("it's")
        .append_raw(") || ")
        .append_param("!")
        .append_raw(" from ")
        .append_table(&users);

    let query = compile(fragment);
    assert_eq!(
        query.sql,
        r#"coalesce("users"."name", 'it''s') || ? from "users""#
    );
    assert_eq!(query.params, vec![Param::value("!")]);
}

#[test]
fn derived_table() {
    let users = users();
    let sq = Select::new(&users)
        .fields(
            Selection::new()
                .field("id", users.col("id"))
                .field("one", Fragment::raw("1").alias("one")),
        )
        .alias("sq");

    let query = compile(Select::new(&sq).filter(Expr::eq(sq.field("id"), 3)));
    assert_eq!(
        query.sql,
        r#"select "id", "one" from (select "id", 1 as "one" from "users") "sq" where "sq"."id" = ?"#
    );
}

#[test]
fn common_table_expression() {
    let users = users();
    let named = Select::new(&users)
        .fields(Selection::new().field("id", users.col("id")))
        .filter(Expr::eq(users.col("name"), "a"))
        .cte("named");

    let query = compile(Select::new(&named).with(named.clone()));
    assert_eq!(
        query.sql,
        r#"with "named" as (select "id" from "users" where "users"."name" = ?) select "id" from "named""#
    );
    assert_eq!(query.params, vec![Param::value("a")]);
}

#[test]
fn exists_subquery() {
    let users = users();
    let posts = posts();
    let query = compile(
        Select::new(&users)
            .fields(Selection::new().field("id", users.col("id")))
            .filter(Expr::exists(
                Select::new(&posts)
                    .fields(Selection::new().field("id", posts.col("id")))
                    .filter(Expr::eq(posts.col("authorId"), users.col("id"))),
            )),
    );

    assert_eq!(
        query.sql,
        concat!(
            r#"select "id" from "users" where exists (select "id" from "app"."posts" "#,
            r#"where "app"."posts"."author_id" = "users"."id")"#
        )
    );
}

#[test]
fn casing_applies_to_derived_names() {
    let table = Table::builder("people")
        .column(Column::varchar("firstName"))
        .column(Column::varchar("lastName").name("SURNAME"))
        .build()
        .unwrap();

    let query = Serializer::with_casing(Some(Casing::SnakeCase))
        .compile(&Select::new(&table).into())
        .unwrap();
    assert_eq!(query.sql, r#"select "first_name", "SURNAME" from "people""#);
}

#[test]
fn record_values_cannot_be_bound() {
    let users = users();
    let record: ValueRecord = [("a", Value::I64(1))].into_iter().collect();
    let select = Select::new(&users).filter(Expr::eq(users.col("id"), Expr::value(record)));

    let err = Serializer::new()
        .compile(&select.into())
        .unwrap_err();
    assert!(err.is_invalid_statement());
}

#[test]
fn derived_table_keeps_nested_fields() {
    let users = users();
    let posts = posts();
    let sq = Select::new(&users)
        .fields(
            Selection::new()
                .field("userName", users.col("name"))
                .nested("post", Selection::new().field("title", posts.col("title"))),
        )
        .left_join(&posts, Expr::eq(posts.col("authorId"), users.col("id")))
        .alias("sq");

    let title = sq.try_field_at(&["post", "title"]).unwrap();
    let select = Select::new(&sq).filter(Expr::eq(title, "hello"));

    let paths: Vec<_> = select
        .selected_fields()
        .iter()
        .map(|field| field.path_display())
        .collect();
    assert_eq!(paths, ["userName", "post->title"]);

    let query = compile(select);
    assert_eq!(
        query.sql,
        concat!(
            r#"select "name", "title" from (select "users"."name", "app"."posts"."title" "#,
            r#"from "users" left join "app"."posts" on "app"."posts"."author_id" = "users"."id") "sq" "#,
            r#"where "sq"."title" = ?"#
        )
    );
    assert_eq!(query.params, vec![Param::value("hello")]);
}

#[test]
fn derived_table_with_clashing_column_names() {
    let users = users();
    let posts = posts();
    let sq = Select::new(&users)
        .left_join(&posts, Expr::eq(posts.col("authorId"), users.col("id")))
        .alias("sq");

    let err = Serializer::new()
        .compile(&Select::new(&sq).into())
        .unwrap_err();
    assert!(err.is_invalid_statement());
    assert_eq!(
        err.to_string(),
        "invalid statement: subquery `sq` exposes more than one column named `id`; alias the fields"
    );
}

#[test]
fn subquery_raw_fields_need_an_alias() {
    let users = users();
    let counted = || {
        Select::new(&users).fields(
            Selection::new()
                .field("id", users.col("id"))
                .field("n", Fragment::raw("count(*)")),
        )
    };

    let sq = counted().alias("sq2");
    let err = Serializer::new()
        .compile(&Select::new(&sq).into())
        .unwrap_err();
    assert!(err.is_invalid_statement());
    assert_eq!(
        err.to_string(),
        "invalid statement: field `n` of subquery `sq2` is an expression without an alias; use `.alias(..)`"
    );

    let cte = counted().cte("counted");
    let err = Serializer::new()
        .compile(&Select::new(&cte).with(cte.clone()).into())
        .unwrap_err();
    assert!(err.is_invalid_statement());

    let sq = Select::new(&users)
        .fields(Selection::new().field("n", Fragment::raw("count(*)").alias("n")))
        .alias("sq3");
    let query = compile(Select::new(&sq));
    assert_eq!(
        query.sql,
        r#"select "n" from (select count(*) as "n" from "users") "sq3""#
    );
}

#[test]
fn empty_projection_is_rejected() {
    let users = users();
    let err = Serializer::new()
        .compile(&Select::new(&users).fields(Selection::new()).into())
        .unwrap_err();
    assert!(err.is_invalid_statement());
    assert_eq!(
        err.to_string(),
        "invalid statement: select from `users` projects no fields"
    );
}
