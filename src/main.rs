//! hrops - CLI companion for the RH Systems HR platform

use clap::{CommandFactory, Parser};

mod cli;
mod client;
mod config;
mod error;
mod output;
mod session;

use cli::{Cli, Commands, Globals};
use config::Config;
use error::{Error, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .init();
    } else {
        env_logger::init();
    }

    let globals = cli.globals();
    let at_entry_route = matches!(cli.command, Commands::Login { .. });

    if let Err(err) = run(cli, &globals).await {
        eprintln!("Error: {}", err);
        teardown_if_fatal(&err, &globals, at_entry_route);
        std::process::exit(1);
    }
}

/// Tear down the stored session after a session-fatal remote failure.
///
/// 401 always forces a re-login; connectivity failures do too, except
/// while already on the sign-in flow.
fn teardown_if_fatal(err: &Error, globals: &Globals, at_entry_route: bool) {
    let Error::Api(api) = err else { return };

    if at_entry_route && api.is_connectivity() {
        return;
    }

    let config_path = globals.config.as_deref();
    if let Ok(mut config) = Config::load_at(config_path) {
        if session::teardown_after_failure(err, &mut config, config_path).is_some() {
            eprintln!("Signed out. Run `hrops login` to start a new session.");
        }
    }
}

async fn run(cli: Cli, globals: &Globals) -> Result<()> {
    match cli.command {
        Commands::Login { email, password } => cli::login::run(globals, email, password).await,
        Commands::Logout => cli::logout::run(globals),
        Commands::Status => cli::status::run(globals),
        Commands::Version => {
            println!("hrops version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Dashboard => cli::dashboard::run(globals).await,
        Commands::Profile => cli::profile::run(globals).await,
        Commands::Employee(command) => cli::employee::run(globals, command).await,
        Commands::Position(command) => cli::position::run(globals, command).await,
        Commands::Leave(command) => cli::leave::run(globals, command).await,
        Commands::Schedule(command) => cli::schedule::run(globals, command).await,
        Commands::Clock(command) => cli::clock::run(globals, command).await,
        Commands::Payroll(command) => cli::payroll::run(globals, command).await,
        Commands::Evaluation(command) => cli::evaluation::run(globals, command).await,
        Commands::Completion { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "hrops", &mut std::io::stdout());
            Ok(())
        }
    }
}
