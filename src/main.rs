use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::error;

use scale_echo::logging::init_logging;
use scale_echo::{
    EchoServer, RuntimeConfig, ServerArgs, ServerError, load_config, spawn_shutdown_handler,
};

fn main() -> ExitCode {
    let args = ServerArgs::parse();

    // Keep the file writer alive until exit so buffered lines are flushed
    let _log_guard = match init_logging(args.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            // No subscriber yet
            eprintln!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    // Fatal errors are reported here and only here
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &ServerArgs) -> Result<()> {
    let config = load_config(args)?;

    let rt = RuntimeConfig::from_args(config.threads).build_runtime()?;
    rt.block_on(async move {
        let server = EchoServer::new(config);
        spawn_shutdown_handler(server.shutdown_token());
        finish(server.run().await)
    })
}

/// Shutdown failures are logged but do not fail the process
fn finish(result: Result<(), ServerError>) -> Result<()> {
    match result {
        Err(e) if e.is_shutdown_failure() => {
            error!("{}", e);
            Ok(())
        }
        other => Ok(other?),
    }
}
