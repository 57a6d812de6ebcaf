use std::env;
use std::io::Cursor;
use std::sync::Once;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::infrastructure::traits::LineTerminal;

static TEST_SETUP: Once = Once::new();

/// One-time setup for tests: plain (uncolored) output and trace logging.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        // captured output is compared verbatim
        colored::control::set_override(false);
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    let noisy_modules = ["config"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = match env::var("RUST_LOG") {
        Ok(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        Err(_) => EnvFilter::new("trace"),
    };

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Terminal fed from in-memory lines, capturing everything written.
pub type ScriptedTerminal = LineTerminal<Cursor<Vec<u8>>, Vec<u8>>;

/// Terminal that answers prompts with `lines`, one per prompt, then hits end of input.
pub fn scripted_terminal(lines: &[&str]) -> ScriptedTerminal {
    let mut input = String::new();
    for line in lines {
        input.push_str(line);
        input.push('\n');
    }
    LineTerminal::new(Cursor::new(input.into_bytes()), Vec::new())
}

/// Everything written to a scripted terminal, prompts included.
pub fn captured_output(terminal: ScriptedTerminal) -> String {
    String::from_utf8_lossy(&terminal.into_writer()).into_owned()
}
