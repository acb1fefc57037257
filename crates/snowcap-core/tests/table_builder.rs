use pretty_assertions::assert_eq;
use snowcap_core::schema::{Casing, Column, ForeignKeyDef, ReferentialAction, Table};

fn users() -> std::sync::Arc<Table> {
    Table::builder("users")
        .column(Column::integer("id").primary_key().autoincrement())
        .column(Column::varchar("email").length(255).not_null().unique())
        .column(Column::varchar("displayName"))
        .build()
        .unwrap()
}

#[test]
fn column_defaults() {
    let users = users();
    let email = users.column("email").unwrap();
    assert_eq!(email.name, "email");
    assert!(email.key_as_name);
    assert!(!email.nullable);
    assert_eq!(email.unique_name.as_deref(), Some("users_email_unique"));

    let pk = users.primary_key.as_ref().unwrap();
    assert_eq!(pk.name, "users_id_pk");
    assert_eq!(pk.columns, vec!["id".to_string()]);
    assert!(users.column("id").unwrap().is_insert_disabled());
}

#[test]
fn composite_constraint_names() {
    let users = users();
    let posts = Table::builder("posts")
        .schema("app")
        .column(Column::integer("authorId").name("author_id").not_null())
        .column(Column::integer("seq").not_null())
        .column(Column::varchar("slug"))
        .primary_key(["authorId", "seq"])
        .unique(["authorId", "slug"])
        .foreign_key(
            ForeignKeyDef::new(["authorId"], &users, ["id"]).on_delete(ReferentialAction::Cascade),
        )
        .index("posts_slug_idx", ["slug"])
        .build()
        .unwrap();

    assert_eq!(posts.primary_key.as_ref().unwrap().name, "posts_author_id_seq_pk");
    assert_eq!(posts.uniques[0].name, "posts_author_id_slug_unique");
    assert_eq!(posts.foreign_keys[0].name, "posts_author_id_users_id_fk");
    assert_eq!(
        posts.foreign_keys[0].on_delete,
        Some(ReferentialAction::Cascade)
    );
    assert_eq!(posts.indices[0].name, "posts_slug_idx");
    assert!(posts.column("seq").unwrap().primary_key);
}

#[test]
fn inline_reference() {
    let users = users();
    let pets = Table::builder("pets")
        .column(Column::integer("id").primary_key())
        .column(Column::integer("ownerId").references(&users, "id"))
        .build()
        .unwrap();

    let fk = &pets.foreign_keys[0];
    assert_eq!(fk.name, "pets_ownerId_users_id_fk");
    assert_eq!(fk.columns, vec!["ownerId".to_string()]);
    assert_eq!(fk.foreign_table.name, "users");
}

#[test]
fn explicit_names_win() {
    let t = Table::builder("t")
        .column(Column::integer("a").unique_named("a_uq"))
        .column(Column::integer("b"))
        .primary_key_named("t_key", ["b"])
        .unique_named("ab_uq", ["a", "b"])
        .build()
        .unwrap();

    assert_eq!(t.column("a").unwrap().unique_name.as_deref(), Some("a_uq"));
    assert_eq!(t.primary_key.as_ref().unwrap().name, "t_key");
    assert_eq!(t.uniques[0].name, "ab_uq");
}

#[test]
fn invalid_schemas() {
    let err = Table::builder("t")
        .column(Column::integer("a"))
        .column(Column::integer("a"))
        .build()
        .unwrap_err();
    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: duplicate column `a` on table `t`"
    );

    let err = Table::builder("t")
        .column(Column::integer("a"))
        .unique(["b"])
        .build()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid schema: unique constraint on table `t` references unknown column `b`"
    );

    let users = users();
    let err = Table::builder("t")
        .column(Column::integer("a"))
        .column(Column::integer("b"))
        .foreign_key(ForeignKeyDef::new(["a", "b"], &users, ["id"]))
        .build()
        .unwrap_err();
    assert!(err.is_invalid_schema());
}

#[test]
fn alias_keeps_original_name() {
    let users = users();
    let u = users.alias("u");
    assert_eq!(u.name, "u");
    assert_eq!(u.original_name, "users");
    assert!(u.is_aliased());
    assert!(!users.is_aliased());
    assert_eq!(u.col("email").table_name(), "u");
}

#[test]
fn casing_only_applies_to_derived_names() {
    let users = users();
    let display = users.column("displayName").unwrap();
    assert_eq!(display.sql_name(Some(Casing::SnakeCase)), "display_name");
    assert_eq!(display.sql_name(None), "displayName");

    let explicit = Column::integer("authorId").name("authorID");
    assert_eq!(explicit.sql_name(Some(Casing::SnakeCase)), "authorID");
}
