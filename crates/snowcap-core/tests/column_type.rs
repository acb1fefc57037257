use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use snowcap_core::{
    schema::{Column, ColumnType, DateMode},
    stmt::Value,
};

#[test]
fn sql_type_grammar() {
    assert_eq!(Column::varchar("name").length(255).ty.sql_type(), "varchar(255)");
    assert_eq!(Column::varchar("name").ty.sql_type(), "varchar");
    assert_eq!(Column::char("code").length(2).ty.sql_type(), "char(2)");
    assert_eq!(
        Column::number("price").precision(10).scale(2).ty.sql_type(),
        "number(10, 2)"
    );
    assert_eq!(Column::number("qty").precision(10).ty.sql_type(), "number(10)");
    assert_eq!(Column::number("qty").ty.sql_type(), "number");
    assert_eq!(Column::integer("id").ty.sql_type(), "integer");
    assert_eq!(Column::boolean("active").ty.sql_type(), "boolean");
    assert_eq!(Column::date("born").ty.sql_type(), "date");
}

#[test]
fn timestamp_sql_types() {
    assert_eq!(Column::timestamp("at").ty.sql_type(), "timestamp_ntz");
    assert_eq!(
        Column::timestamp("at").precision(6).ty.sql_type(),
        "timestamp_ntz(6)"
    );
    assert_eq!(
        Column::timestamp("at").with_timezone().ty.sql_type(),
        "timestamp_tz"
    );
    assert_eq!(
        Column::timestamp("at").with_timezone().precision(3).ty.sql_type(),
        "timestamp_tz(3)"
    );
}

#[test]
fn mode_string_configures_temporal_kinds() {
    assert_eq!(
        Column::date("born").mode_string().ty,
        ColumnType::Date {
            mode: DateMode::String
        }
    );
    assert!(matches!(
        Column::timestamp("at").mode_string().ty,
        ColumnType::Timestamp {
            mode: DateMode::String,
            ..
        }
    ));
}

#[test]
#[should_panic(expected = "length does not apply")]
fn length_on_integer_panics() {
    let _ = Column::integer("id").length(3);
}

#[test]
fn null_passes_through_codecs() {
    let ty = Column::integer("id").ty;
    assert_eq!(ty.decode(Value::Null).unwrap(), Value::Null);
    assert_eq!(ty.encode(Value::Null).unwrap(), Value::Null);
}

#[test]
fn decode_number_as_decimal_string() {
    let ty = Column::number("price").precision(10).scale(2).ty;
    assert_eq!(
        ty.decode(Value::String("12.50".into())).unwrap(),
        Value::String("12.50".into())
    );
    assert_eq!(ty.decode(Value::I64(7)).unwrap(), Value::String("7".into()));
}

#[test]
fn decode_integer() {
    let ty = ColumnType::Integer;
    assert_eq!(ty.decode(Value::String("42".into())).unwrap(), Value::I64(42));
    assert_eq!(ty.decode(Value::F64(3.0)).unwrap(), Value::I64(3));
    assert!(ty.decode(Value::F64(1e30)).unwrap_err().is_type_conversion());
    assert!(ty.encode(Value::F64(-1e30)).unwrap_err().is_type_conversion());
    assert!(ty.encode(Value::F64(2.5)).unwrap_err().is_type_conversion());
    let err = ty.decode(Value::String("forty".into())).unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "cannot convert String to I64");
}

#[test]
fn decode_boolean() {
    let ty = ColumnType::Boolean;
    assert_eq!(ty.decode(Value::I64(1)).unwrap(), Value::Bool(true));
    assert_eq!(ty.decode(Value::I64(0)).unwrap(), Value::Bool(false));
    assert_eq!(
        ty.decode(Value::String("TRUE".into())).unwrap(),
        Value::Bool(true)
    );
    assert!(ty.decode(Value::I64(2)).unwrap_err().is_type_conversion());
}

#[test]
fn decode_timestamps() {
    let ty = Column::timestamp("at").ty;
    let expected = NaiveDateTime::parse_from_str("2024-03-01 10:20:30.5", "%Y-%m-%d %H:%M:%S%.f")
        .unwrap();
    assert_eq!(
        ty.decode(Value::String("2024-03-01 10:20:30.500".into()))
            .unwrap(),
        Value::Timestamp(expected)
    );

    let ty = Column::timestamp("at").with_timezone().ty;
    let Value::TimestampTz(decoded) = ty
        .decode(Value::String("2024-03-01T10:20:30+02:00".into()))
        .unwrap()
    else {
        panic!("expected TimestampTz")
    };
    assert_eq!(decoded.offset().local_minus_utc(), 7200);

    let ty = Column::timestamp("at").mode_string().ty;
    assert_eq!(
        ty.decode(Value::Timestamp(expected)).unwrap(),
        Value::String("2024-03-01 10:20:30.500".into())
    );
}

#[test]
fn decode_dates() {
    let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();

    let ty = Column::date("born").ty;
    assert_eq!(
        ty.decode(Value::String("2023-12-31".into())).unwrap(),
        Value::Date(date)
    );
    assert!(ty
        .decode(Value::String("31/12/2023".into()))
        .unwrap_err()
        .is_type_conversion());

    let ty = Column::date("born").mode_string().ty;
    assert_eq!(
        ty.decode(Value::Date(date)).unwrap(),
        Value::String("2023-12-31".into())
    );
}

#[test]
fn encode_checks_kind() {
    assert_eq!(
        Column::varchar("name").ty.encode(Value::I64(5)).unwrap(),
        Value::String("5".into())
    );
    assert!(ColumnType::Boolean
        .encode(Value::String("yes".into()))
        .unwrap_err()
        .is_type_conversion());
    assert_eq!(
        ColumnType::Integer
            .encode(Value::List(vec![Value::I64(1), Value::F64(2.0)]))
            .unwrap(),
        Value::List(vec![Value::I64(1), Value::I64(2)])
    );
}
