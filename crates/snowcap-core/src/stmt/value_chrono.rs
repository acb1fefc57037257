use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

use crate::stmt::Value;

macro_rules! impl_chrono_conversions {
    ($chrono:ty, $name:ident, $lit:literal) => {
        impl From<$chrono> for Value {
            fn from(value: $chrono) -> Self {
                Self::$name(value)
            }
        }

        impl TryFrom<Value> for $chrono {
            type Error = crate::Error;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                match value {
                    Value::$name(value) => Ok(value),
                    value => Err(crate::Error::type_conversion(value, $lit)),
                }
            }
        }
    };
}

impl_chrono_conversions!(NaiveDate, Date, "NaiveDate");
impl_chrono_conversions!(NaiveDateTime, Timestamp, "NaiveDateTime");
impl_chrono_conversions!(DateTime<FixedOffset>, TimestampTz, "DateTime<FixedOffset>");
