use super::{value, Formatter, Ident, Params, TableRef, ToSql};

use snowcap_core::{
    stmt::{Chunk, Fragment, ParamValue},
    Result,
};

impl ToSql for &Fragment {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        for chunk in &self.chunks {
            match chunk {
                Chunk::Raw(sql) => fmt!(f, sql),
                Chunk::Ident(name) => fmt!(f, Ident(name)),
                Chunk::Str(s) => {
                    let escaped = f.serializer.escape_string(s);
                    f.dst.push_str(&escaped);
                }
                Chunk::Param(param) => match &param.value {
                    ParamValue::Value(v) => value::bind(f, v, param.encoder.as_ref())?,
                    ParamValue::Placeholder(name) => {
                        value::placeholder(f, name, param.encoder.as_ref())?
                    }
                },
                Chunk::Expr(expr) => fmt!(f, &**expr),
                Chunk::Table(table) => fmt!(f, TableRef(table)),
                Chunk::Fragment(fragment) => fmt!(f, fragment),
            }
        }

        Ok(())
    }
}
