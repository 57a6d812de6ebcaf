//! Application services
//!
//! The menu loop and the scoring handlers. Both depend on the `Terminal`
//! boundary trait but are themselves concrete structs.

mod handlers;
mod menu;
mod prompt;

pub use handlers::{
    ScoringService, EVENT_NAME_PROMPT, EVENT_TYPE_PROMPT, NAME_PROMPT, OUTCOME_PROMPT,
    SCORE_PROMPT, TEAM_NAME_PROMPT,
};
pub use menu::{
    MenuHandlers, MenuLoop, CHOICE_PROMPT, FAREWELL, INVALID_OPTION, RULE, TITLE,
};
pub use prompt::{read_number, read_text, INVALID_NUMBER_WARNING};
