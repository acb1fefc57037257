use super::{Comma, Formatter, Params, ToSql};

use snowcap_core::{
    schema::ColumnType,
    stmt::{Param, Value},
    Error, Result,
};

/// A value bound through an optional encoder.
struct Bind<'a>(&'a Value, Option<&'a ColumnType>);

/// A value inlined as a SQL literal, used for DDL defaults.
pub(super) struct Literal<'a>(pub(super) &'a Value);

impl ToSql for Bind<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        bind(f, self.0, self.1)
    }
}

/// Pushes `value` as a parameter and writes its marker. Lists expand to one
/// parameter per item.
pub(super) fn bind<P: Params>(
    f: &mut Formatter<'_, P>,
    value: &Value,
    encoder: Option<&ColumnType>,
) -> Result<()> {
    match value {
        Value::Record(_) => Err(Error::invalid_statement(
            "record values cannot be bound as parameters",
        )),
        Value::List(items) => {
            fmt!(f, "(" Comma(items.iter().map(|item| Bind(item, encoder))) ")");
            Ok(())
        }
        value => {
            let encoded = match encoder {
                Some(ty) => ty.encode(value.clone())?,
                None => value.clone(),
            };
            let hint = f.serializer.prepare_typing(encoder);
            let placeholder = f.params.push(Param::value(encoded), hint);
            fmt!(f, placeholder);
            Ok(())
        }
    }
}

/// Pushes a named placeholder, filled when the prepared query executes.
pub(super) fn placeholder<P: Params>(
    f: &mut Formatter<'_, P>,
    name: &str,
    encoder: Option<&ColumnType>,
) -> Result<()> {
    let hint = f.serializer.prepare_typing(encoder);
    let param = Param::placeholder(name).with_encoder(encoder.cloned());
    let placeholder = f.params.push(param, hint);
    fmt!(f, placeholder);
    Ok(())
}

impl ToSql for Literal<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let literal = match self.0 {
            Value::Null => "null".to_string(),
            Value::Bool(true) => "true".to_string(),
            Value::Bool(false) => "false".to_string(),
            Value::I64(v) => v.to_string(),
            Value::F64(v) => v.to_string(),
            Value::String(v) => f.serializer.escape_string(v),
            Value::Date(v) => f.serializer.escape_string(&v.format("%Y-%m-%d").to_string()),
            Value::Timestamp(v) => f
                .serializer
                .escape_string(&v.format("%Y-%m-%d %H:%M:%S%.f").to_string()),
            Value::TimestampTz(v) => f.serializer.escape_string(&v.to_rfc3339()),
            value => {
                return Err(Error::invalid_statement(format!(
                    "{} cannot be used as a column default",
                    value.kind_name()
                )))
            }
        };

        f.dst.push_str(&literal);
        Ok(())
    }
}
