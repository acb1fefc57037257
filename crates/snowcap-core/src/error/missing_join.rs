use super::Error;

/// A selected column belongs to a table that is neither the queried table
/// nor one of its joins.
#[derive(Debug)]
pub(super) struct MissingJoin {
    path: Box<str>,
    table: Box<str>,
    column: Box<str>,
}

impl std::error::Error for MissingJoin {}

impl core::fmt::Display for MissingJoin {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "Your \"{}\" field references a column \"{}\".\"{}\", but the table \"{}\" is not part of the query! Did you forget to join it?",
            self.path, self.table, self.column, self.table
        )
    }
}

impl Error {
    /// Creates a missing join error. `path` is the selection path of the
    /// offending field joined with `->`.
    pub fn missing_join(
        path: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::MissingJoin(MissingJoin {
            path: path.into().into(),
            table: table.into().into(),
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing join error.
    pub fn is_missing_join(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingJoin(_))
    }
}
