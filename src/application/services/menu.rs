//! Main menu loop
//!
//! Renders the menu, reads one choice and dispatches to a handler until the
//! exit token is entered. The loop keeps no state between iterations.

use colored::Colorize;
use tracing::{debug, info};

use crate::application::services::handlers::ScoringService;
use crate::application::services::prompt::{read_text, write_line};
use crate::application::ApplicationResult;
use crate::domain::MenuOption;
use crate::infrastructure::traits::Terminal;

pub const TITLE: &str = "Welcome To The Tournament Scoring System!";
pub const RULE: &str = "==========================================";
pub const CHOICE_PROMPT: &str = "Please choose a menu option (0-5): ";
pub const FAREWELL: &str = "Exiting Program. Goodbye!";
pub const INVALID_OPTION: &str = "Invalid option. Please choose a number from 0 to 5.";

/// Handlers the loop dispatches to, one per non-exit option.
pub trait MenuHandlers {
    fn add_team(&self, terminal: &mut dyn Terminal) -> ApplicationResult<()>;
    fn add_individual(&self, terminal: &mut dyn Terminal) -> ApplicationResult<()>;
    fn add_event(&self, terminal: &mut dyn Terminal) -> ApplicationResult<()>;
    fn view_score(&self, terminal: &mut dyn Terminal) -> ApplicationResult<()>;
    fn enter_single_event(&self, terminal: &mut dyn Terminal) -> ApplicationResult<()>;
}

impl MenuHandlers for ScoringService {
    fn add_team(&self, terminal: &mut dyn Terminal) -> ApplicationResult<()> {
        ScoringService::add_team(self, terminal)
    }

    fn add_individual(&self, terminal: &mut dyn Terminal) -> ApplicationResult<()> {
        ScoringService::add_individual(self, terminal)
    }

    fn add_event(&self, terminal: &mut dyn Terminal) -> ApplicationResult<()> {
        ScoringService::add_event(self, terminal)
    }

    fn view_score(&self, terminal: &mut dyn Terminal) -> ApplicationResult<()> {
        ScoringService::view_score(self, terminal)
    }

    fn enter_single_event(&self, terminal: &mut dyn Terminal) -> ApplicationResult<()> {
        ScoringService::enter_single_event(self, terminal)
    }
}

/// Menu loop bound to a set of handlers and a terminal.
pub struct MenuLoop<'a, H: MenuHandlers + ?Sized> {
    handlers: &'a H,
    terminal: &'a mut dyn Terminal,
}

impl<'a, H: MenuHandlers + ?Sized> MenuLoop<'a, H> {
    pub fn new(handlers: &'a H, terminal: &'a mut dyn Terminal) -> Self {
        Self { handlers, terminal }
    }

    /// Run until the exit token is entered.
    ///
    /// Errors from a handler (bad number under the abort policy, closed
    /// input, I/O failure) end the loop and are returned as-is.
    pub fn run(&mut self) -> ApplicationResult<()> {
        loop {
            self.render_menu()?;
            let choice = read_text(self.terminal, CHOICE_PROMPT)?;
            debug!("menu: choice={:?}", choice);

            match MenuOption::parse(&choice) {
                Some(MenuOption::Exit) => {
                    write_line(self.terminal, FAREWELL)?;
                    info!("menu: exit requested");
                    return Ok(());
                }
                Some(option) => self.dispatch(option)?,
                None => {
                    write_line(self.terminal, &INVALID_OPTION.yellow().to_string())?;
                    write_line(self.terminal, "")?;
                }
            }
        }
    }

    fn dispatch(&mut self, option: MenuOption) -> ApplicationResult<()> {
        debug!("menu: dispatch {:?}", option);
        match option {
            MenuOption::AddTeam => self.handlers.add_team(self.terminal),
            MenuOption::AddIndividual => self.handlers.add_individual(self.terminal),
            MenuOption::AddEvent => self.handlers.add_event(self.terminal),
            MenuOption::ViewScore => self.handlers.view_score(self.terminal),
            MenuOption::EnterSingleEvent => self.handlers.enter_single_event(self.terminal),
            MenuOption::Exit => Ok(()),
        }
    }

    fn render_menu(&mut self) -> ApplicationResult<()> {
        write_line(self.terminal, "")?;
        write_line(self.terminal, &TITLE.cyan().bold().to_string())?;
        write_line(self.terminal, "")?;
        write_line(self.terminal, RULE)?;
        write_line(self.terminal, "")?;
        for option in MenuOption::DISPLAY_ORDER {
            write_line(self.terminal, &option.to_string())?;
        }
        write_line(self.terminal, "")?;
        write_line(self.terminal, RULE)?;
        write_line(self.terminal, "")
    }
}
