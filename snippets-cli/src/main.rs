use clap::Parser;
use log::{debug, error, info};
use snippets_cli::cli::Cli;
use snippets_cli::config::Config;
use snippets_cli::dispatch;
use snippets_cli::error::CliError;
use snippets_cli::logging;
use snippets_db::SnippetDb;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("snippets: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = Config::load()?;
    logging::init(&config)?;

    let Some(command) = cli.command else {
        debug!("No command given");
        return Ok(());
    };

    info!("Connecting to {}", config.db_path.display());
    let mut db = SnippetDb::open(&config.db_path, config.open_mode())?;
    debug!("Database connection established");

    let stdout = std::io::stdout();
    dispatch::run(&mut db, &command, &mut stdout.lock())
}
