use super::Error;

/// Error raised by the underlying warehouse connection.
#[derive(Debug)]
pub(super) struct DriverError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a connection error. The original error is kept
    /// verbatim and reachable through `source()`.
    pub fn driver(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::driver_boxed(Box::new(err))
    }

    /// Same as [`Error::driver`], for errors that are already boxed.
    pub fn driver_boxed(err: Box<dyn std::error::Error + Send + Sync>) -> Error {
        Error::from(super::ErrorKind::Driver(DriverError { inner: err }))
    }

    /// Returns `true` if this error came from the connection.
    pub fn is_driver(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Driver(_))
    }
}
