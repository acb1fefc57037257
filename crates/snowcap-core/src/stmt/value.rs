use super::ValueRecord;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Calendar date
    Date(NaiveDate),

    /// Double precision float
    F64(f64),

    /// Signed 64-bit integer
    I64(i64),

    /// A list of values, bound as a parenthesized parameter list
    List(Vec<Value>),

    /// Null value
    #[default]
    Null,

    /// Ordered named fields, produced when decoding result rows
    Record(ValueRecord),

    /// String value
    String(String),

    /// Timestamp without time zone (`timestamp_ntz`)
    Timestamp(NaiveDateTime),

    /// Timestamp with an offset (`timestamp_tz`)
    TimestampTz(DateTime<FixedOffset>),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Name of the variant, used in conversion error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::Date(_) => "Date",
            Self::F64(_) => "F64",
            Self::I64(_) => "I64",
            Self::List(_) => "List",
            Self::Null => "Null",
            Self::Record(_) => "Record",
            Self::String(_) => "String",
            Self::Timestamp(_) => "Timestamp",
            Self::TimestampTz(_) => "TimestampTz",
        }
    }

    /// Whether the value can be handed to the connection as a bind.
    /// Records cannot; lists can when every item can.
    pub fn is_bindable(&self) -> bool {
        match self {
            Self::Record(_) => false,
            Self::List(items) => items.iter().all(|item| !item.is_list() && item.is_bindable()),
            _ => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(&**v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I64(v) => Some(v),
            _ => None,
        }
    }

    /// The value as an integer, accepting floats with no fractional part
    /// that fit in `i64`.
    pub fn as_exact_i64(&self) -> Option<i64> {
        match *self {
            Self::I64(v) => Some(v),
            Self::F64(v)
                if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 =>
            {
                Some(v as i64)
            }
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&ValueRecord> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_record(&self) -> &ValueRecord {
        match self {
            Self::Record(record) => record,
            _ => panic!("expected record; value={self:#?}"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Date(v) => serializer.collect_str(&v.format("%Y-%m-%d")),
            Self::F64(v) => serializer.serialize_f64(*v),
            Self::I64(v) => serializer.serialize_i64(*v),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Null => serializer.serialize_unit(),
            Self::Record(record) => {
                let mut map = serializer.serialize_map(Some(record.len()))?;
                for (name, value) in record {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
            Self::String(v) => serializer.serialize_str(v),
            Self::Timestamp(v) => serializer.collect_str(&v.format("%Y-%m-%d %H:%M:%S%.f")),
            Self::TimestampTz(v) => serializer.serialize_str(&v.to_rfc3339()),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<ValueRecord> for Value {
    fn from(value: ValueRecord) -> Self {
        Self::Record(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_rendering() {
        let params = vec![
            Value::from(1),
            Value::from("a'b"),
            Value::Null,
            Value::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()),
            Value::from(vec![1, 2]),
        ];
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"[1,"a'b",null,"2024-02-29",[1,2]]"#
        );
    }

    #[test]
    fn exact_integers() {
        assert_eq!(Value::I64(-4).as_exact_i64(), Some(-4));
        assert_eq!(Value::F64(12.0).as_exact_i64(), Some(12));
        assert_eq!(Value::F64(-9.0e18).as_exact_i64(), Some(-9_000_000_000_000_000_000));
        assert_eq!(Value::F64(1.5).as_exact_i64(), None);
        assert_eq!(Value::F64(1e30).as_exact_i64(), None);
        assert_eq!(Value::F64(-1e30).as_exact_i64(), None);
        assert_eq!(Value::F64(9.3e18).as_exact_i64(), None);
        assert_eq!(Value::F64(f64::NAN).as_exact_i64(), None);
        assert_eq!(Value::F64(f64::INFINITY).as_exact_i64(), None);
        assert_eq!(Value::from("1").as_exact_i64(), None);
    }

    #[test]
    fn bindable() {
        assert!(Value::from(vec!["a", "b"]).is_bindable());
        assert!(!Value::Record(ValueRecord::new()).is_bindable());
        assert!(!Value::List(vec![Value::List(vec![])]).is_bindable());
    }
}
