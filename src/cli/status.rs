//! Status command implementation

use colored::Colorize;

use crate::cli::Globals;
use crate::client::models::TokenClaims;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration and session state.
///
/// Read-only: reports on the persisted state without touching it, so it
/// is safe to run at any time, signed in or not.
pub fn run(globals: &Globals) -> Result<()> {
    println!("{}\n", "hrops Configuration Status".bold());

    let config_path = globals.config.as_deref();
    let path = Config::resolve_path(config_path)?;
    let config = Config::load_at(config_path)?;

    println!("Config file: {}", path.display().to_string().cyan());
    println!("Auth service: {}", config.endpoints.auth.cyan());
    println!(
        "Services: employee {} | payroll {} | performance {} | schedule {}",
        config.endpoints.employee.dimmed(),
        config.endpoints.payroll.dimmed(),
        config.endpoints.performance.dimmed(),
        config.endpoints.schedule.dimmed(),
    );
    println!();

    match (&config.token, &config.user) {
        (Some(token), user) => match TokenClaims::decode(token) {
            Ok(claims) if !claims.is_expired() => {
                match user {
                    Some(user) => println!(
                        "{} Signed in as {} ({})",
                        "✓".green(),
                        user.name.bold(),
                        user.role
                    ),
                    None => println!(
                        "{} Token present; profile resolves on the next command",
                        "○".dimmed()
                    ),
                }

                if let Ok(expires_at) = claims.expires_at() {
                    let remaining = expires_at.signed_duration_since(chrono::Utc::now());
                    let hours = remaining.num_hours();
                    let mins = remaining.num_minutes() % 60;
                    println!("{} Token valid (expires in {}h {}m)", "✓".green(), hours, mins);
                }
            }
            Ok(_) => {
                println!(
                    "{} Stored token has expired (the next command clears it)",
                    "⚠".yellow()
                );
            }
            Err(_) => {
                println!(
                    "{} Stored token is malformed (the next command clears it)",
                    "✗".red()
                );
            }
        },
        (None, _) => {
            println!("{} Not signed in", "✗".red());
            println!("  → Run '{}' to sign in", "hrops login".cyan());
        }
    }

    if let Some(started) = config.clock_in {
        println!();
        println!(
            "{} Clock-in open since {}",
            "○".dimmed(),
            started.to_rfc3339().cyan()
        );
    }

    println!();

    Ok(())
}
