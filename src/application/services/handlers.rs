//! Scoring handlers
//!
//! One method per menu option. Each reads its prompts, prints one
//! confirmation and returns; nothing outlives the call.

use tracing::debug;

use crate::application::services::prompt::{read_number, read_text, write_line};
use crate::application::ApplicationResult;
use crate::config::InvalidNumberPolicy;
use crate::domain::{
    EventRegistration, EventTypeTable, IndividualRegistration, PointsTable, ScoreReport,
    TeamRegistration,
};
use crate::infrastructure::traits::Terminal;

pub const TEAM_NAME_PROMPT: &str = "Enter Team Name: ";
pub const NAME_PROMPT: &str = "Enter Name: ";
pub const EVENT_NAME_PROMPT: &str = "Enter Event Name: ";
pub const EVENT_TYPE_PROMPT: &str = "Is this a team event (1) or an individual event (2)?: ";
pub const SCORE_PROMPT: &str = "Enter your score: ";
pub const OUTCOME_PROMPT: &str = "Did you (Win/Draw/Lose) your last game?: ";

/// Handlers with their lookup tables fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct ScoringService {
    event_types: EventTypeTable,
    points: PointsTable,
    on_invalid_number: InvalidNumberPolicy,
}

impl ScoringService {
    pub fn new(
        event_types: EventTypeTable,
        points: PointsTable,
        on_invalid_number: InvalidNumberPolicy,
    ) -> Self {
        Self {
            event_types,
            points,
            on_invalid_number,
        }
    }

    pub fn on_invalid_number(&self) -> InvalidNumberPolicy {
        self.on_invalid_number
    }

    /// Print a blank line then the handler's header.
    fn header(terminal: &mut dyn Terminal, title: &str) -> ApplicationResult<()> {
        write_line(terminal, "")?;
        write_line(terminal, title)
    }

    /// Confirmation line followed by a blank line.
    fn confirm(terminal: &mut dyn Terminal, message: &str) -> ApplicationResult<()> {
        write_line(terminal, message)?;
        write_line(terminal, "")
    }

    pub fn add_team(&self, terminal: &mut dyn Terminal) -> ApplicationResult<()> {
        Self::header(terminal, "Adding Team...")?;
        let team = TeamRegistration::new(read_text(terminal, TEAM_NAME_PROMPT)?);
        debug!("add_team: {:?}", team.name);
        Self::confirm(terminal, &team.to_string())
    }

    pub fn add_individual(&self, terminal: &mut dyn Terminal) -> ApplicationResult<()> {
        Self::header(terminal, "Adding Individual...")?;
        let name = read_text(terminal, NAME_PROMPT)?;
        let team = read_text(terminal, TEAM_NAME_PROMPT)?;
        let individual = IndividualRegistration::new(name, team);
        debug!(
            "add_individual: {:?} (team {:?})",
            individual.name, individual.team
        );
        Self::confirm(terminal, &individual.to_string())
    }

    pub fn add_event(&self, terminal: &mut dyn Terminal) -> ApplicationResult<()> {
        Self::header(terminal, "Adding Event...")?;
        let name = read_text(terminal, EVENT_NAME_PROMPT)?;
        let selector = read_number(terminal, EVENT_TYPE_PROMPT, self.on_invalid_number)?;
        if !self.event_types.is_known(selector) {
            debug!("add_event: unknown selector {}", selector);
        }
        let event = EventRegistration::new(name, self.event_types.label_for(selector));
        Self::confirm(terminal, &event.to_string())
    }

    pub fn view_score(&self, terminal: &mut dyn Terminal) -> ApplicationResult<()> {
        Self::header(terminal, "Viewing Score...")?;
        let base = read_number(terminal, SCORE_PROMPT, self.on_invalid_number)?;
        let outcome = read_text(terminal, OUTCOME_PROMPT)?;
        let report = ScoreReport {
            final_score: self.points.final_score(base, &outcome)?,
        };
        debug!("view_score: base={} outcome={:?} -> {}", base, outcome, report.final_score);
        Self::confirm(terminal, &report.to_string())
    }

    /// Placeholder: prints its header and nothing else.
    pub fn enter_single_event(&self, terminal: &mut dyn Terminal) -> ApplicationResult<()> {
        Self::header(terminal, "Enter Single Event...")
    }
}
