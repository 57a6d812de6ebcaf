//! Service container for dependency injection
//!
//! Wires the handlers up with the lookup tables built from settings.

use tracing::debug;

use crate::application::services::{MenuLoop, ScoringService};
use crate::config::{InvalidNumberPolicy, Settings};
use crate::infrastructure::traits::Terminal;
use crate::infrastructure::InfraResult;

/// Container holding all application services.
///
/// Tables are built once here and never change afterwards.
pub struct ServiceContainer {
    /// Menu handlers
    pub scoring: ScoringService,
}

impl ServiceContainer {
    /// Create a container from loaded settings.
    ///
    /// Settings are consumed: only the tables built from them are kept.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        Self::with_policy(settings, None)
    }

    /// Create a container, optionally overriding the invalid-number policy.
    pub fn with_policy(
        settings: Settings,
        policy: Option<InvalidNumberPolicy>,
    ) -> InfraResult<Self> {
        let on_invalid_number = policy.unwrap_or(settings.input.on_invalid_number);
        let scoring = ScoringService::new(
            settings.event_type_table()?,
            settings.points_table(),
            on_invalid_number,
        );
        debug!("container: on_invalid_number={:?}", on_invalid_number);

        Ok(Self { scoring })
    }

    /// Menu loop over this container's handlers.
    pub fn menu<'a>(&'a self, terminal: &'a mut dyn Terminal) -> MenuLoop<'a, ScoringService> {
        MenuLoop::new(&self.scoring, terminal)
    }
}
