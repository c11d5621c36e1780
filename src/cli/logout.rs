//! Logout command implementation

use colored::Colorize;

use crate::cli::Globals;
use crate::client::HrClient;
use crate::config::Config;
use crate::error::Result;
use crate::session::SessionService;

/// Run the logout command. Always succeeds; no remote call is made.
pub fn run(globals: &Globals) -> Result<()> {
    let config_path = globals.config.as_deref();
    let mut config = Config::load_at(config_path)?;

    let client = HrClient::new(config.endpoints.clone())?;
    let mut session = SessionService::new(&client, config_path);
    session.logout(&mut config)?;

    println!("{} Signed out.", "✓".green());
    println!("Run {} to start a new session.", "hrops login".cyan());

    Ok(())
}
