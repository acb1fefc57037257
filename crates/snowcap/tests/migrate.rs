mod support;
use support::RecordingConnection;

use pretty_assertions::assert_eq;
use snowcap::{driver::Rows, stmt::Value, Db, MigrationConfig, MigrationMeta};

const CREATE_SCHEMA: &str = r#"create schema if not exists "drizzle""#;
const CREATE_TABLE: &str = r#"create table if not exists "drizzle"."__drizzle_migrations" (id integer autoincrement primary key, hash text not null, created_at bigint)"#;
const SELECT_LATEST: &str = r#"select id, hash, created_at from "drizzle"."__drizzle_migrations" order by created_at desc limit 1"#;
const RECORD: &str = r#"insert into "drizzle"."__drizzle_migrations" ("hash", "created_at") values (?, ?)"#;

fn migration(folder_millis: i64, hash: &str, sql: &[&str]) -> MigrationMeta {
    MigrationMeta {
        sql: sql.iter().map(|s| s.to_string()).collect(),
        folder_millis,
        hash: hash.to_string(),
        breakpoints: true,
    }
}

fn setup(latest: Option<Value>) -> (Db, RecordingConnection) {
    let connection = RecordingConnection::new();
    connection.respond(Rows::empty());
    connection.respond(Rows::empty());
    connection.respond(match latest {
        Some(created_at) => Rows::new(
            vec!["ID".into(), "HASH".into(), "CREATED_AT".into()],
            vec![vec![Value::I64(1), Value::from("h0"), created_at]],
        ),
        None => Rows::empty(),
    });

    let db = Db::builder().build(connection.clone());
    (db, connection)
}

#[tokio::test]
async fn applies_all_migrations_on_fresh_database() {
    let (db, connection) = setup(None);
    let migrations = [
        migration(100, "h1", &["create table a (id integer)", "  "]),
        migration(200, "h2", &["create table b (id integer)"]),
    ];

    db.migrate(&migrations, &MigrationConfig::default())
        .await
        .unwrap();

    assert_eq!(
        connection.sql(),
        [
            CREATE_SCHEMA,
            CREATE_TABLE,
            SELECT_LATEST,
            "create table a (id integer)",
            RECORD,
            "create table b (id integer)",
            RECORD,
        ]
    );

    let recorded: Vec<_> = connection
        .statements()
        .into_iter()
        .filter(|statement| statement.sql_text == RECORD)
        .map(|statement| statement.binds)
        .collect();
    assert_eq!(
        recorded,
        [
            vec![Value::from("h1"), Value::I64(100)],
            vec![Value::from("h2"), Value::I64(200)],
        ]
    );
}

#[tokio::test]
async fn skips_already_applied_migrations() {
    let (db, connection) = setup(Some(Value::from("200")));
    let migrations = [
        migration(100, "h1", &["create table a (id integer)"]),
        migration(200, "h2", &["create table b (id integer)"]),
        migration(300, "h3", &["alter table b add column c integer"]),
    ];

    db.migrate(&migrations, &MigrationConfig::default())
        .await
        .unwrap();

    assert_eq!(
        connection.sql(),
        [
            CREATE_SCHEMA,
            CREATE_TABLE,
            SELECT_LATEST,
            "alter table b add column c integer",
            RECORD,
        ]
    );
}

#[tokio::test]
async fn custom_table_location() {
    let (db, connection) = setup(Some(Value::I64(500)));
    let config = MigrationConfig {
        migrations_table: Some("applied".to_string()),
        migrations_schema: Some("ops".to_string()),
    };

    db.migrate(&[migration(400, "old", &["select 1"])], &config)
        .await
        .unwrap();

    assert_eq!(
        connection.sql(),
        [
            r#"create schema if not exists "ops""#,
            r#"create table if not exists "ops"."applied" (id integer autoincrement primary key, hash text not null, created_at bigint)"#,
            r#"select id, hash, created_at from "ops"."applied" order by created_at desc limit 1"#,
        ]
    );
}

#[tokio::test]
async fn failing_migration_stops_the_run() {
    let (db, connection) = setup(None);
    connection.fail_on("create table b (id integer)");
    let migrations = [
        migration(100, "h1", &["create table b (id integer)"]),
        migration(200, "h2", &["create table c (id integer)"]),
    ];

    let err = db
        .migrate(&migrations, &MigrationConfig::default())
        .await
        .unwrap_err();

    assert!(err.is_driver());
    assert_eq!(
        connection.sql(),
        [
            CREATE_SCHEMA,
            CREATE_TABLE,
            SELECT_LATEST,
            "create table b (id integer)"
        ]
    );
}

#[test]
fn migration_meta_deserializes() {
    let meta: MigrationMeta = serde_json::from_str(
        r#"{"sql":["create table t (id integer)"],"folder_millis":1700000000000,"hash":"abc","breakpoints":false}"#,
    )
    .unwrap();
    assert_eq!(meta.folder_millis, 1700000000000);
    assert_eq!(meta.sql.len(), 1);
}
