//! Login command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::Globals;
use crate::client::HrClient;
use crate::config::{Config, Endpoints};
use crate::error::{Result, SessionError};
use crate::session::{Route, SessionService};

/// Run the login command
pub async fn run(
    globals: &Globals,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let config_path = globals.config.as_deref();
    let mut config = Config::load_at(config_path)?;

    if let Some(base) = globals.gateway.as_deref() {
        config.endpoints = Endpoints::gateway(base);
    }

    println!("{}", "Sign in to RH Systems".bold());

    let email: String = match email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Email")
            .interact_text()?,
    };

    let password: String = match password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?,
    };

    let client = HrClient::new(config.endpoints.clone())?;
    let mut session = SessionService::new(&client, config_path);

    println!("\n{}", "Signing in...".cyan());
    let landing = session.login(&mut config, &email, &password).await?;

    let user = session.user().ok_or(SessionError::NotSignedIn)?;
    println!(
        "{} Welcome back, {}! ({})",
        "✓".green(),
        user.name.bold(),
        user.role
    );

    match landing {
        Route::AdminDashboard => {
            println!("\n{}", "Try running:".bold());
            println!("  {} - Platform summary", "hrops dashboard".cyan());
            println!("  {} - List employees", "hrops employee list".cyan());
        }
        Route::EmployeeProfile => {
            println!("\n{}", "Try running:".bold());
            println!("  {} - Your employee record", "hrops profile".cyan());
            println!("  {} - Start the clock", "hrops clock in".cyan());
        }
        Route::Login => {}
    }

    Ok(())
}
