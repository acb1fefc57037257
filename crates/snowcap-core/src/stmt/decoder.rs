use super::Value;
use crate::{schema::ColumnType, Result};

use std::{fmt, sync::Arc};

/// Converts raw values returned by the connection into application values.
#[derive(Clone)]
pub enum Decoder {
    /// Decode through a column type's rules.
    Column(ColumnType),

    /// Decode with a caller-supplied function.
    Custom(Arc<dyn Fn(Value) -> Result<Value> + Send + Sync>),
}

impl Decoder {
    pub fn custom(f: impl Fn(Value) -> Result<Value> + Send + Sync + 'static) -> Decoder {
        Decoder::Custom(Arc::new(f))
    }

    pub fn decode(&self, value: Value) -> Result<Value> {
        match self {
            Decoder::Column(ty) => ty.decode(value),
            Decoder::Custom(f) => f(value),
        }
    }
}

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decoder::Column(ty) => f.debug_tuple("Column").field(ty).finish(),
            Decoder::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
