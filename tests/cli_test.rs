//! Tests for argument parsing and the run path with a scripted terminal
//!
//! The run path gets an empty environment source so TSCORE_* variables of the
//! calling shell do not leak in.

use std::collections::HashMap;
use std::fs;

use clap::Parser;
use config::Environment;
use tempfile::TempDir;

use tscore::cli::commands::run_menu_with_env;
use tscore::cli::{Cli, CliError, Commands, ConfigCommands};
use tscore::exitcode;
use tscore::util::testing::{self, captured_output, scripted_terminal};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn empty_env() -> Environment {
    Environment::with_prefix("TSCORE").source(Some(HashMap::new()))
}

#[test]
fn given_no_arguments_when_parsing_then_defaults_to_menu() {
    let cli = Cli::try_parse_from(["tscore"]).unwrap();

    assert!(cli.command.is_none());
    assert_eq!(cli.debug, 0);
    assert!(!cli.reprompt);
}

#[test]
fn given_flags_when_parsing_then_collected() {
    let cli = Cli::try_parse_from(["tscore", "-ddd", "--reprompt", "run"]).unwrap();

    assert_eq!(cli.debug, 3);
    assert!(cli.reprompt);
    assert!(matches!(cli.command, Some(Commands::Run)));
}

#[test]
fn given_config_init_force_when_parsing_then_subcommand_matches() {
    let cli = Cli::try_parse_from(["tscore", "config", "init", "--force"]).unwrap();

    assert!(matches!(
        cli.command,
        Some(Commands::Config {
            command: ConfigCommands::Init { force: true }
        })
    ));
}

#[test]
fn given_unknown_subcommand_when_parsing_then_error() {
    assert!(Cli::try_parse_from(["tscore", "score"]).is_err());
}

#[test]
fn given_bad_number_when_running_then_data_error_exit_code() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("tscore.toml");
    fs::write(&config, "[input]\non_invalid_number = \"abort\"\n").unwrap();
    let cli = Cli::try_parse_from(["tscore", "-c", config.to_str().unwrap()]).unwrap();
    let mut terminal = scripted_terminal(&["4", "lots", "Win", "0"]);

    let err = run_menu_with_env(&cli, &mut terminal, empty_env()).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::DATAERR);
    assert!(!captured_output(terminal).contains("Goodbye"));
}

#[test]
fn given_reprompt_flag_when_running_then_bad_number_recovered() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("tscore.toml");
    fs::write(&config, "[input]\non_invalid_number = \"abort\"\n").unwrap();
    let cli = Cli::try_parse_from(["tscore", "--reprompt", "-c", config.to_str().unwrap()])
        .unwrap();
    let mut terminal = scripted_terminal(&["4", "lots", "12", "Win", "0"]);

    run_menu_with_env(&cli, &mut terminal, empty_env()).unwrap();

    let output = captured_output(terminal);
    assert!(output.contains("Your final score is 12"));
    assert!(output.ends_with("Exiting Program. Goodbye!\n"));
}

#[test]
fn given_missing_config_file_when_running_then_config_exit_code() {
    let cli = Cli::try_parse_from(["tscore", "-c", "/nonexistent/tscore.toml"]).unwrap();
    let mut terminal = scripted_terminal(&["0"]);

    let err = run_menu_with_env(&cli, &mut terminal, empty_env()).unwrap_err();

    assert!(matches!(err, CliError::Infra(_)));
    assert_eq!(err.exit_code(), exitcode::CONFIG);
    assert_eq!(captured_output(terminal), "");
}

#[test]
fn given_closed_stdin_when_running_then_no_input_exit_code() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("tscore.toml");
    fs::write(&config, "").unwrap();
    let cli = Cli::try_parse_from(["tscore", "-c", config.to_str().unwrap()]).unwrap();
    let mut terminal = scripted_terminal(&[]);

    let err = run_menu_with_env(&cli, &mut terminal, empty_env()).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::NOINPUT);
}

#[test]
fn given_env_policy_when_running_then_it_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("tscore.toml");
    fs::write(&config, "[input]\non_invalid_number = \"abort\"\n").unwrap();
    let cli = Cli::try_parse_from(["tscore", "-c", config.to_str().unwrap()]).unwrap();
    let env = Environment::with_prefix("TSCORE").source(Some(HashMap::from([(
        "TSCORE_INPUT__ON_INVALID_NUMBER".to_string(),
        "reprompt".to_string(),
    )])));
    let mut terminal = scripted_terminal(&["4", "lots", "12", "Win", "0"]);

    run_menu_with_env(&cli, &mut terminal, env).unwrap();

    assert!(captured_output(terminal).contains("Your final score is 12"));
}

#[test]
fn given_duplicate_selectors_in_config_when_running_then_config_exit_code() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("tscore.toml");
    fs::write(
        &config,
        "[scoring]\nevent_types = [\n  { selector = 1, label = \"A\" },\n  { selector = 1, label = \"B\" },\n]\n",
    )
    .unwrap();
    let cli = Cli::try_parse_from(["tscore", "-c", config.to_str().unwrap()]).unwrap();
    let mut terminal = scripted_terminal(&["0"]);

    let err = run_menu_with_env(&cli, &mut terminal, empty_env()).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::CONFIG);
}
