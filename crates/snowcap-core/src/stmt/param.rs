use super::Value;
use crate::schema::ColumnType;

/// A bound parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub value: ParamValue,

    /// Column type the value is encoded through before binding.
    pub encoder: Option<ColumnType>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Value(Value),

    /// Filled by name when a prepared query executes.
    Placeholder(String),
}

impl Param {
    pub fn value(value: impl Into<Value>) -> Param {
        Param {
            value: ParamValue::Value(value.into()),
            encoder: None,
        }
    }

    pub fn placeholder(name: impl Into<String>) -> Param {
        Param {
            value: ParamValue::Placeholder(name.into()),
            encoder: None,
        }
    }

    pub fn with_encoder(mut self, encoder: Option<ColumnType>) -> Param {
        self.encoder = encoder;
        self
    }

    pub fn as_value(&self) -> Option<&Value> {
        match &self.value {
            ParamValue::Value(value) => Some(value),
            ParamValue::Placeholder(_) => None,
        }
    }

    pub fn as_placeholder(&self) -> Option<&str> {
        match &self.value {
            ParamValue::Placeholder(name) => Some(name),
            ParamValue::Value(_) => None,
        }
    }
}
