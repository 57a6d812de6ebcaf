//! Menu options and their input tokens

use std::fmt;

/// One selectable entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOption {
    Exit,
    AddTeam,
    AddIndividual,
    AddEvent,
    ViewScore,
    EnterSingleEvent,
}

impl MenuOption {
    /// Options in the order they are rendered (exit last).
    pub const DISPLAY_ORDER: [MenuOption; 6] = [
        MenuOption::AddTeam,
        MenuOption::AddIndividual,
        MenuOption::AddEvent,
        MenuOption::ViewScore,
        MenuOption::EnterSingleEvent,
        MenuOption::Exit,
    ];

    /// Match a raw input line against the option tokens.
    ///
    /// Surrounding whitespace is ignored; anything other than "0".."5" is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "0" => Some(MenuOption::Exit),
            "1" => Some(MenuOption::AddTeam),
            "2" => Some(MenuOption::AddIndividual),
            "3" => Some(MenuOption::AddEvent),
            "4" => Some(MenuOption::ViewScore),
            "5" => Some(MenuOption::EnterSingleEvent),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            MenuOption::Exit => "0",
            MenuOption::AddTeam => "1",
            MenuOption::AddIndividual => "2",
            MenuOption::AddEvent => "3",
            MenuOption::ViewScore => "4",
            MenuOption::EnterSingleEvent => "5",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Exit => "Exit",
            MenuOption::AddTeam => "Add Team",
            MenuOption::AddIndividual => "Add Individual",
            MenuOption::AddEvent => "Add Event",
            MenuOption::ViewScore => "View Score",
            MenuOption::EnterSingleEvent => "Enter Single Event",
        }
    }
}

/// Renders as a menu line, e.g. `[1.] Add Team`.
impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}.] {}", self.token(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_every_option_when_parsing_its_token_then_roundtrips() {
        for option in MenuOption::DISPLAY_ORDER {
            assert_eq!(MenuOption::parse(option.token()), Some(option));
        }
    }

    #[test]
    fn given_padded_token_when_parsing_then_matches() {
        assert_eq!(MenuOption::parse("  3 \t"), Some(MenuOption::AddEvent));
    }

    #[test]
    fn given_unknown_token_when_parsing_then_none() {
        assert_eq!(MenuOption::parse("6"), None);
        assert_eq!(MenuOption::parse(""), None);
        assert_eq!(MenuOption::parse("01"), None);
        assert_eq!(MenuOption::parse("exit"), None);
    }

    #[test]
    fn given_exit_when_displayed_then_renders_menu_line() {
        assert_eq!(MenuOption::Exit.to_string(), "[0.] Exit");
        assert_eq!(
            MenuOption::EnterSingleEvent.to_string(),
            "[5.] Enter Single Event"
        );
    }
}
