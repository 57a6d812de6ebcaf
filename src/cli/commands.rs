//! Command dispatch

use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use config::Environment;
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{expand_path, global_config_path, InvalidNumberPolicy, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::{LineTerminal, Terminal};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None | Some(Commands::Run) => {
            let mut terminal = LineTerminal::stdio();
            run_menu(cli, &mut terminal)
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => config_show(cli),
            ConfigCommands::Init { force } => config_init(*force),
            ConfigCommands::Path => config_path(cli),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

/// Load settings for this invocation and run the menu on `terminal`.
pub fn run_menu(cli: &Cli, terminal: &mut dyn Terminal) -> CliResult<()> {
    run_menu_with_env(cli, terminal, Environment::with_prefix("TSCORE"))
}

/// [`run_menu`] with the `TSCORE_*` overrides read from `env`.
#[instrument(skip_all)]
pub fn run_menu_with_env(
    cli: &Cli,
    terminal: &mut dyn Terminal,
    env: Environment,
) -> CliResult<()> {
    let settings = Settings::load_with_env(cli.config.as_deref(), env)?;
    let policy = cli.reprompt.then_some(InvalidNumberPolicy::Reprompt);
    let container = ServiceContainer::with_policy(settings, policy)?;
    debug!("run_menu: starting");
    container.menu(terminal).run()?;
    Ok(())
}

#[instrument(skip_all)]
fn config_show(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    output::info(&settings.to_toml()?);
    Ok(())
}

#[instrument]
fn config_init(force: bool) -> CliResult<()> {
    let path = global_config_path()
        .ok_or_else(|| CliError::Usage("cannot determine config directory".into()))?;
    write_template(&path, force)?;
    output::success(&format!("Created {}", path.display()));
    Ok(())
}

/// Write the config template to `path` via a temp file in the same directory.
pub fn write_template(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::Usage(format!(
            "config already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }
    let cant_create = |source: io::Error| CliError::CantCreate {
        path: path.display().to_string(),
        source,
    };

    let dir = path
        .parent()
        .ok_or_else(|| CliError::Usage(format!("invalid config path: {}", path.display())))?;
    std::fs::create_dir_all(dir).map_err(cant_create)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(cant_create)?;
    tmp.write_all(Settings::template().as_bytes())
        .map_err(cant_create)?;
    tmp.persist(path).map_err(|e| cant_create(e.error))?;
    debug!("write_template: {}", path.display());
    Ok(())
}

fn config_path(cli: &Cli) -> CliResult<()> {
    output::header("Config paths");
    match global_config_path() {
        Some(path) => {
            let state = if path.exists() { "exists" } else { "not found" };
            output::detail(&format!("global:   {} ({})", path.display(), state));
        }
        None => output::warning("cannot determine global config directory"),
    }
    if let Some(explicit) = &cli.config {
        let path = expand_path(explicit);
        let state = if path.is_file() { "exists" } else { "not found" };
        output::detail(&format!("explicit: {} ({})", path.display(), state));
    }
    Ok(())
}
