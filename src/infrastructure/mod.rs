//! Infrastructure layer: terminal I/O and DI container
//!
//! This layer implements the terminal boundary trait and wires up services.

pub mod di;
pub mod error;
pub mod traits;

pub use error::{InfraError, InfraResult};
