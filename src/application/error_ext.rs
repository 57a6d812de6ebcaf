//! Error conversion helpers for terminal I/O
//!
//! Provides an extension trait for attaching the failed action to an I/O error.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add action context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// terminal.write_line("...")
    ///     .with_context("write menu")?;
    /// ```
    fn with_context(self, action: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_context(self, action: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: action.to_string(),
            source: Box::new(e),
        })
    }
}
