use super::{Comma, Formatter, Ident, Params, ToSql};

use snowcap_core::{
    stmt::{Select, Subquery, With},
    Result,
};

struct Cte<'a>(&'a Subquery);

/// Renders `with "a" as (..), "b" as (..) ` including the trailing space.
/// An empty clause renders nothing.
impl ToSql for &With {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if !self.is_empty() {
            fmt!(f, "with " Comma(self.ctes.iter().map(Cte)) " ");
        }

        Ok(())
    }
}

impl ToSql for Cte<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        self.0.check()?;
        let select: &Select = &self.0.select;
        fmt!(f, Ident(&self.0.alias) " as (" select ")");
        Ok(())
    }
}
