use super::{Formatter, Params, ToSql};

use snowcap_core::Result;

/// A quoted identifier.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        let escaped = f.serializer.escape_name(self.0.as_ref());
        f.dst.push_str(&escaped);
        Ok(())
    }
}
