//! Application layer: the menu loop and its handlers
//!
//! This layer orchestrates domain logic and depends on the terminal boundary trait.

pub mod error;
pub mod error_ext;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
