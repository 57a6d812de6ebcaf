//! Domain layer: menu options, lookup tables and registration values
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod event;
pub mod menu;
pub mod number;
pub mod score;

pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use event::EventTypeTable;
pub use menu::MenuOption;
pub use number::parse_int;
pub use score::{title_case, PointsTable};
