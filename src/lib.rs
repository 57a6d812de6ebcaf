//! tscore: menu-driven console front end for a tournament scoring tool.
//!
//! The menu offers team, individual and event registration plus a score
//! view. Every answer is echoed back once and dropped; nothing is stored.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
