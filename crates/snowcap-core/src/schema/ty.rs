use crate::{stmt::Value, Error, Result};

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Warehouse scalar type of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
    /// Variable-length text, `varchar(n)`.
    Varchar { length: Option<u32> },

    /// Fixed-length text, `char(n)`.
    Char { length: Option<u32> },

    /// Exact numeric, `number(p, s)`. Decoded as a decimal string.
    Number {
        precision: Option<u32>,
        scale: Option<u32>,
    },

    Integer,

    Boolean,

    /// `timestamp_ntz` or `timestamp_tz`, with optional fractional precision.
    Timestamp {
        precision: Option<u8>,
        with_timezone: bool,
        mode: DateMode,
    },

    Date { mode: DateMode },
}

/// How temporal values are represented on the application side.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DateMode {
    /// Decoded into `Value::Date`, `Value::Timestamp` or `Value::TimestampTz`.
    #[default]
    Date,

    /// Decoded into strings.
    String,
}

const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
const TIMESTAMP_TZ_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f %z", "%Y-%m-%d %H:%M:%S%.f%:z"];

impl ColumnType {
    /// The type as it appears in DDL.
    pub fn sql_type(&self) -> String {
        match self {
            ColumnType::Varchar { length } => with_length("varchar", *length),
            ColumnType::Char { length } => with_length("char", *length),
            ColumnType::Number {
                precision: Some(precision),
                scale: Some(scale),
            } => format!("number({precision}, {scale})"),
            ColumnType::Number {
                precision: Some(precision),
                scale: None,
            } => format!("number({precision})"),
            ColumnType::Number { precision: None, .. } => "number".to_string(),
            ColumnType::Integer => "integer".to_string(),
            ColumnType::Boolean => "boolean".to_string(),
            ColumnType::Timestamp {
                precision,
                with_timezone,
                ..
            } => {
                let base = if *with_timezone {
                    "timestamp_tz"
                } else {
                    "timestamp_ntz"
                };
                match precision {
                    Some(precision) => format!("{base}({precision})"),
                    None => base.to_string(),
                }
            }
            ColumnType::Date { .. } => "date".to_string(),
        }
    }

    pub fn is_temporal(&self) -> bool {
        matches!(self, ColumnType::Timestamp { .. } | ColumnType::Date { .. })
    }

    /// Converts an application value into the value handed to the
    /// connection.
    pub fn encode(&self, value: Value) -> Result<Value> {
        match (self, value) {
            (_, Value::Null) => Ok(Value::Null),
            (_, Value::List(items)) => Ok(Value::List(
                items
                    .into_iter()
                    .map(|item| self.encode(item))
                    .collect::<Result<_>>()?,
            )),
            (ColumnType::Varchar { .. } | ColumnType::Char { .. }, value) => match value {
                Value::String(_) => Ok(value),
                Value::Bool(v) => Ok(Value::String(v.to_string())),
                Value::I64(v) => Ok(Value::String(v.to_string())),
                Value::F64(v) => Ok(Value::String(v.to_string())),
                value => Err(Error::type_conversion(value, "String")),
            },
            (ColumnType::Number { .. }, value) => match value {
                Value::I64(_) | Value::F64(_) | Value::String(_) => Ok(value),
                value => Err(Error::type_conversion(value, "Number")),
            },
            (ColumnType::Integer, value) => match value.as_exact_i64() {
                Some(v) => Ok(Value::I64(v)),
                None => Err(Error::type_conversion(value, "I64")),
            },
            (ColumnType::Boolean, value) => match value {
                Value::Bool(_) => Ok(value),
                value => Err(Error::type_conversion(value, "Bool")),
            },
            (ColumnType::Timestamp { .. } | ColumnType::Date { .. }, value) => match value {
                Value::String(_)
                | Value::Date(_)
                | Value::Timestamp(_)
                | Value::TimestampTz(_) => Ok(value),
                value => Err(Error::type_conversion(value, "Timestamp")),
            },
        }
    }

    /// Converts a value returned by the connection into the application
    /// representation.
    pub fn decode(&self, value: Value) -> Result<Value> {
        match (self, value) {
            (_, Value::Null) => Ok(Value::Null),
            (ColumnType::Varchar { .. } | ColumnType::Char { .. }, value) => decode_text(value),
            (ColumnType::Number { .. }, value) => match value {
                Value::String(_) => Ok(value),
                Value::I64(v) => Ok(Value::String(v.to_string())),
                Value::F64(v) => Ok(Value::String(v.to_string())),
                value => Err(Error::type_conversion(value, "Number")),
            },
            (ColumnType::Integer, value) => decode_integer(value),
            (ColumnType::Boolean, value) => decode_boolean(value),
            (
                ColumnType::Timestamp {
                    with_timezone,
                    mode,
                    ..
                },
                value,
            ) => match mode {
                DateMode::Date => decode_timestamp(value, *with_timezone),
                DateMode::String => match value {
                    Value::String(_) => Ok(value),
                    Value::Timestamp(v) => {
                        Ok(Value::String(v.format("%Y-%m-%d %H:%M:%S%.f").to_string()))
                    }
                    Value::TimestampTz(v) => Ok(Value::String(v.to_rfc3339())),
                    value => Err(Error::type_conversion(value, "String")),
                },
            },
            (ColumnType::Date { mode }, value) => match mode {
                DateMode::Date => match value {
                    Value::Date(_) => Ok(value),
                    Value::Timestamp(v) => Ok(Value::Date(v.date())),
                    Value::TimestampTz(v) => Ok(Value::Date(v.date_naive())),
                    Value::String(ref s) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                        Ok(date) => Ok(Value::Date(date)),
                        Err(_) => Err(Error::type_conversion(value, "Date")),
                    },
                    value => Err(Error::type_conversion(value, "Date")),
                },
                DateMode::String => match value {
                    Value::String(_) => Ok(value),
                    Value::Date(v) => Ok(Value::String(v.format("%Y-%m-%d").to_string())),
                    Value::Timestamp(v) => {
                        Ok(Value::String(v.date().format("%Y-%m-%d").to_string()))
                    }
                    value => Err(Error::type_conversion(value, "String")),
                },
            },
        }
    }
}

fn with_length(base: &str, length: Option<u32>) -> String {
    match length {
        Some(length) => format!("{base}({length})"),
        None => base.to_string(),
    }
}

fn decode_text(value: Value) -> Result<Value> {
    match value {
        Value::String(_) => Ok(value),
        Value::Bool(v) => Ok(Value::String(v.to_string())),
        Value::I64(v) => Ok(Value::String(v.to_string())),
        Value::F64(v) => Ok(Value::String(v.to_string())),
        value => Err(Error::type_conversion(value, "String")),
    }
}

fn decode_integer(value: Value) -> Result<Value> {
    match value {
        Value::I64(_) => Ok(value),
        Value::F64(_) => match value.as_exact_i64() {
            Some(v) => Ok(Value::I64(v)),
            None => Err(Error::type_conversion(value, "I64")),
        },
        Value::String(ref s) => match s.trim().parse::<i64>() {
            Ok(v) => Ok(Value::I64(v)),
            Err(_) => Err(Error::type_conversion(value, "I64")),
        },
        value => Err(Error::type_conversion(value, "I64")),
    }
}

fn decode_boolean(value: Value) -> Result<Value> {
    match value {
        Value::Bool(_) => Ok(value),
        Value::I64(0) => Ok(Value::Bool(false)),
        Value::I64(1) => Ok(Value::Bool(true)),
        Value::String(ref s) if s.eq_ignore_ascii_case("true") => Ok(Value::Bool(true)),
        Value::String(ref s) if s.eq_ignore_ascii_case("false") => Ok(Value::Bool(false)),
        value => Err(Error::type_conversion(value, "Bool")),
    }
}

fn decode_timestamp(value: Value, with_timezone: bool) -> Result<Value> {
    match value {
        Value::Timestamp(_) | Value::TimestampTz(_) => Ok(value),
        Value::String(ref s) if with_timezone => {
            if let Ok(v) = DateTime::parse_from_rfc3339(s) {
                return Ok(Value::TimestampTz(v));
            }
            for format in TIMESTAMP_TZ_FORMATS {
                if let Ok(v) = DateTime::parse_from_str(s, format) {
                    return Ok(Value::TimestampTz(v));
                }
            }
            Err(Error::type_conversion(value, "TimestampTz"))
        }
        Value::String(ref s) => {
            for format in TIMESTAMP_FORMATS {
                if let Ok(v) = NaiveDateTime::parse_from_str(s, format) {
                    return Ok(Value::Timestamp(v));
                }
            }
            Err(Error::type_conversion(value, "Timestamp"))
        }
        value => Err(Error::type_conversion(value, "Timestamp")),
    }
}
