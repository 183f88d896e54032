use std::io::IsTerminal;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const DEBUG_LOG_FILENAME: &str = ".fleet-probe-debug.log";

/// Install the global subscriber. `RUST_LOG` overrides the default level.
///
/// In debug mode logs go to `.fleet-probe-debug.log` in CWD and the returned
/// guard must be held for the duration of the program. Otherwise warnings go
/// to stderr so they never mix with the report on stdout.
pub fn init(debug: bool) -> Option<WorkerGuard> {
    if debug {
        let file_appender = tracing_appender::rolling::never(".", DEBUG_LOG_FILENAME);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::fmt()
            .with_writer(non_blocking)
            .with_env_filter(env_filter("debug"))
            .with_ansi(false)
            .init();

        Some(guard)
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter("warn"))
            .with_ansi(std::io::stderr().is_terminal())
            .init();

        None
    }
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}
