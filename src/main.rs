use blogdeck::adapters::{FileSessionStore, ReqwestHttpClient};
use blogdeck::api::BlogApi;
use blogdeck::app::{run_app, App};
use blogdeck::cli::{run_command, Cli, CliCommand, CommandContext, CommandError};
use blogdeck::cli_output::print_notice;
use blogdeck::config::ClientConfig;
use blogdeck::flows::Notice;
use blogdeck::logging::{init_logging, LogTarget};
use blogdeck::terminal::{setup_panic_hook, TerminalManager};
use blogdeck::traits::SessionError;

use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use std::io;
use std::sync::Arc;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = cli.apply_to(ClientConfig::from_env());
    let command = cli.command();

    let data_dir = config
        .data_dir()
        .ok_or(SessionError::NoHomeDirectory)
        .wrap_err("set BLOGDECK_HOME or pass --home")?;

    let log_target = match command {
        CliCommand::Browse => {
            LogTarget::File(config.log_path().ok_or(SessionError::NoHomeDirectory)?)
        }
        _ => LogTarget::Stderr,
    };
    init_logging(&config.log_filter, log_target)?;
    tracing::debug!(base_url = %config.base_url, "Starting blogdeck");

    let http = match config.timeout {
        Some(timeout) => ReqwestHttpClient::with_timeout(timeout)
            .map_err(|e| eyre!("failed to build HTTP client: {}", e))?,
        None => ReqwestHttpClient::new(),
    };
    let store = FileSessionStore::in_dir(&data_dir);
    tracing::debug!(path = %store.session_path().display(), "Using session file");
    let api = BlogApi::new(config.base_url.clone(), Arc::new(http), Arc::new(store));

    let runtime = tokio::runtime::Runtime::new()?;

    if let CliCommand::Browse = command {
        return browse(&runtime, api);
    }

    let ctx = CommandContext::new(api);
    let mut stdout = io::stdout();
    match runtime.block_on(run_command(command, &ctx, &mut stdout)) {
        Ok(()) => Ok(()),
        Err(CommandError::Flow(err)) => {
            tracing::debug!(cause = %err.source_error(), "Command failed");
            print_notice(&mut io::stderr(), &Notice::from(err))?;
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

/// Run the full-screen browser until the user quits.
fn browse(runtime: &tokio::runtime::Runtime, api: BlogApi) -> Result<()> {
    // Restore the terminal before the panic message is printed
    setup_panic_hook();

    let mut manager = TerminalManager::new()?;
    let mut app = App::new(api);

    let result = runtime.block_on(async {
        app.initialize();
        run_app(manager.terminal(), &mut app).await
    });

    manager.restore()?;
    result
}
