//! Transient registration values
//!
//! Each value lives for one handler call: it is built from prompt answers,
//! rendered as a confirmation line, and dropped. Nothing here is stored.

use std::fmt;

/// A team name entered at the "Add Team" prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRegistration {
    pub name: String,
}

impl TeamRegistration {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for TeamRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team {} has been registered!", self.name)
    }
}

/// An individual and the team name typed for them.
///
/// The team name is not checked against anything and is not echoed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndividualRegistration {
    pub name: String,
    pub team: String,
}

impl IndividualRegistration {
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
        }
    }
}

impl fmt::Display for IndividualRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has been registered successfully!", self.name)
    }
}

/// An event name with its already-resolved type label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRegistration {
    pub name: String,
    pub label: String,
}

impl EventRegistration {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
        }
    }
}

impl fmt::Display for EventRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Your {} , {} has been added successfully!",
            self.label, self.name
        )
    }
}

/// Final score shown by "View Score".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreReport {
    pub final_score: i64,
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Your final score is {}", self.final_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_team_name_when_rendered_then_confirmation_embeds_name() {
        assert_eq!(
            TeamRegistration::new("Falcons").to_string(),
            "Team Falcons has been registered!"
        );
    }

    #[test]
    fn given_empty_team_name_when_rendered_then_still_confirms() {
        assert_eq!(
            TeamRegistration::new("").to_string(),
            "Team  has been registered!"
        );
    }

    #[test]
    fn given_individual_when_rendered_then_team_not_echoed() {
        let line = IndividualRegistration::new("Ada", "Falcons").to_string();
        assert_eq!(line, "Ada has been registered successfully!");
        assert!(!line.contains("Falcons"));
    }

    #[test]
    fn given_event_when_rendered_then_label_precedes_name() {
        assert_eq!(
            EventRegistration::new("Relay", "Team Event").to_string(),
            "Your Team Event , Relay has been added successfully!"
        );
    }

    #[test]
    fn given_score_when_rendered_then_shows_value() {
        assert_eq!(
            ScoreReport { final_score: 10 }.to_string(),
            "Your final score is 10"
        );
    }
}
