use super::Error;

#[derive(Debug)]
pub(super) struct MissingPlaceholder {
    name: Box<str>,
}

impl std::error::Error for MissingPlaceholder {}

impl core::fmt::Display for MissingPlaceholder {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no value for placeholder `{}`", self.name)
    }
}

impl Error {
    /// Creates an error for a named placeholder that was not supplied at
    /// execution time.
    pub fn missing_placeholder(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingPlaceholder(MissingPlaceholder {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing placeholder error.
    pub fn is_missing_placeholder(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingPlaceholder(_))
    }
}
