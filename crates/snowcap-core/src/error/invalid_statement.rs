use super::Error;

/// Error when a statement cannot be compiled.
///
/// This occurs when:
/// - a set operation is built without any operator
/// - an insert has no rows, or an update has nothing to set
/// - a statement names a column its table does not have
/// - a value that cannot be bound (a record) is used as a parameter
/// - a select projects nothing, or exposes a field its outer query cannot
///   reference
#[derive(Debug)]
pub(super) struct InvalidStatement {
    message: Box<str>,
}

impl std::error::Error for InvalidStatement {}

impl core::fmt::Display for InvalidStatement {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid statement: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid statement error.
    pub fn invalid_statement(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidStatement(InvalidStatement {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid statement error.
    pub fn is_invalid_statement(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidStatement(_))
    }
}
