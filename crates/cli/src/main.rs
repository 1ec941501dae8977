//! meterbook entry point.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use cli::config::Config;
use domain::Dispatcher;

fn main() -> ExitCode {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    cli::init_tracing(&config);

    // 2. Create the stores behind the dispatcher
    let dispatcher = Dispatcher::in_memory();
    tracing::info!(output = ?config.output, "starting meterbook");

    // 3. Run the prompt until exit or end of input
    let result = if io::stdin().is_terminal() {
        cli::repl::run_interactive(&dispatcher, &config, &mut io::stdout(), &mut io::stderr())
    } else {
        cli::repl::run(
            &dispatcher,
            &config,
            io::stdin().lock(),
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
        )
    };

    match result {
        Ok(()) => {
            tracing::info!("meterbook exited");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "session aborted");
            eprintln!("fatal: {err}");
            ExitCode::FAILURE
        }
    }
}
