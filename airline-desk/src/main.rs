use std::io;
use std::process::ExitCode;

use airline_desk::cli;
use airline_desk::config::SystemConfig;
use airline_desk::system::ReservationSystem;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr so they don't interleave with the menu
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "airline_desk=info".into()),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = match SystemConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let mut system = match ReservationSystem::new(config) {
        Ok(system) => system,
        Err(e) => {
            error!(error = %e, "Invalid flight catalog");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    if let Err(e) = cli::run(&mut system, stdin.lock(), io::stdout()) {
        error!(error = %e, "Session ended with an error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
