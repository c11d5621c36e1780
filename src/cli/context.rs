//! Command execution context
//!
//! Builds the shared state every protected command needs: loaded config,
//! client with the stored token attached, resolved session, and the guard
//! decision for the command's allowed roles.

use std::sync::Arc;

use crate::cli::{Globals, OutputFormat};
use crate::client::HrClient;
use crate::config::{Config, Endpoints};
use crate::error::{Error, Result, SessionError};
use crate::session::{Access, Role, Route, SessionService, SessionState, User, evaluate};

/// Context for one protected command invocation
pub struct CommandContext {
    /// Loaded configuration (session already resolved into it)
    pub config: Config,
    /// Config path override, for later saves
    pub config_path: Option<String>,
    /// Client with the bearer token attached when one is stored
    pub client: Arc<HrClient>,
    /// The signed-in user the guard admitted
    pub user: User,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Build the context and run the guard for `allowed` roles.
    ///
    /// Initializes the session from persisted state first; the guard then
    /// decides with a settled state, so `Wait` never escapes this
    /// function. A redirect decision becomes the corresponding error: not
    /// signed in, or a bounce to the caller's own landing route.
    pub async fn new(globals: &Globals, allowed: &[Role]) -> Result<Self> {
        let format: OutputFormat = globals.format;
        let config_path = globals.config.as_deref();
        let mut config = Config::load_at(config_path)?;

        if let Some(base) = globals.gateway.as_deref() {
            config.endpoints = Endpoints::gateway(base);
        }

        let client = HrClient::new(config.endpoints.clone())?;

        // Attach the stored token before any lookup the session may need
        if let Some(token) = &config.token {
            client.set_token(token.clone()).await;
        }

        let mut session = SessionService::new(&client, config_path);
        session.initialize(&mut config).await?;

        // Re-sync the client with whatever the session settled on;
        // initialization may have discarded the stored token
        match session.state() {
            SessionState::Authenticated(established) => {
                client.set_token(established.token.clone()).await;
            }
            _ => client.clear_token().await,
        }

        match evaluate(session.state(), allowed) {
            Access::Render => {}
            Access::Wait => {
                return Err(Error::Other("session did not finish resolving".to_string()));
            }
            Access::Redirect(Route::Login) => return Err(SessionError::NotSignedIn.into()),
            Access::Redirect(route) => {
                return Err(SessionError::WrongRole {
                    required: describe_roles(allowed),
                    landing: route.path(),
                }
                .into());
            }
        }

        let user = session
            .user()
            .cloned()
            .ok_or(SessionError::NotSignedIn)?;

        Ok(Self {
            config,
            config_path: config_path.map(str::to_string),
            client: Arc::new(client),
            user,
            format,
        })
    }

    /// Persist config changes made by the command (e.g. clock markers)
    pub fn save_config(&self) -> Result<()> {
        self.config.save_at(self.config_path.as_deref())
    }
}

fn describe_roles(allowed: &[Role]) -> &'static str {
    match allowed {
        [Role::Admin] => "admin",
        [Role::Employee] => "employee",
        _ => "signed-in",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_sets_describe_themselves() {
        assert_eq!(describe_roles(&[Role::Admin]), "admin");
        assert_eq!(describe_roles(&[Role::Employee]), "employee");
        assert_eq!(describe_roles(&[Role::Admin, Role::Employee]), "signed-in");
    }
}
