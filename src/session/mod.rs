//! Session lifecycle management
//!
//! The session is the pairing of a bearer token with the user profile it
//! resolves to; the two are held and persisted together or not at all.
//! [`SessionService`] owns the lifecycle operations (initialize, login,
//! logout) over an injected API client and the config store.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod guard;

pub use guard::{Access, Route, evaluate};

use crate::client::models::{Employee, TokenClaims};
use crate::client::{AuthApi, EmployeeApi};
use crate::config::Config;
use crate::error::{Error, Result, SessionError};

/// Position that marks an account as admin.
///
/// The platform carries no explicit role field; the seed data pins the
/// administrator position to ID 1 and every client derives from that.
const ADMIN_POSITION_ID: i64 = 1;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    /// Derive the role from an employee's assigned position
    pub fn from_position(position_id: i64) -> Self {
        if position_id == ADMIN_POSITION_ID {
            Role::Admin
        } else {
            Role::Employee
        }
    }

    /// The route this role lands on after sign-in
    pub fn landing(&self) -> Route {
        match self {
            Role::Admin => Route::AdminDashboard,
            Role::Employee => Route::EmployeeProfile,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl User {
    /// Build the session user from an employee profile
    pub fn from_profile(profile: &Employee) -> Self {
        Self {
            id: profile.id.unwrap_or(0),
            email: profile.email.clone(),
            name: profile.full_name(),
            role: Role::from_position(profile.position_id),
        }
    }
}

/// An established session: token and user, always together
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Where the session lifecycle currently stands
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    /// Startup; the persisted state has not been examined yet
    #[default]
    Loading,
    /// No session
    Anonymous,
    /// Signed in
    Authenticated(Session),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(session) => Some(&session.user),
            _ => None,
        }
    }
}

/// Session lifecycle manager.
///
/// Explicit and injectable: callers hand it the API client and the config
/// to operate on rather than reaching for ambient state. Every operation
/// that changes the persisted pair saves the config before returning.
pub struct SessionService<'a, C> {
    client: &'a C,
    config_path: Option<String>,
    state: SessionState,
}

impl<'a, C> SessionService<'a, C>
where
    C: AuthApi + EmployeeApi,
{
    pub fn new(client: &'a C, config_path: Option<&str>) -> Self {
        Self {
            client,
            config_path: config_path.map(str::to_string),
            state: SessionState::Loading,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Establish the session from persisted state, once, at startup.
    ///
    /// An expired or undecodable token clears the persisted pair. A valid
    /// token adopts the stored profile when one exists and otherwise
    /// resolves it through the employee service; a failed lookup clears
    /// the pair and reports.
    pub async fn initialize(&mut self, config: &mut Config) -> Result<()> {
        let Some(token) = config.token.clone() else {
            self.state = SessionState::Anonymous;
            return Ok(());
        };

        let claims = match TokenClaims::decode(&token) {
            Ok(claims) => claims,
            Err(_) => {
                debug!("stored token is malformed; clearing session");
                config.clear_session();
                self.persist(config)?;
                self.state = SessionState::Anonymous;
                return Ok(());
            }
        };

        if claims.is_expired() {
            debug!("stored token expired; clearing session");
            config.clear_session();
            self.persist(config)?;
            self.state = SessionState::Anonymous;
            return Ok(());
        }

        if let Some(user) = config.user.clone() {
            self.state = SessionState::Authenticated(Session { token, user });
            return Ok(());
        }

        // Token without profile: resolve through the employee service
        match self.client.get_employee_by_email(&claims.sub).await {
            Ok(profile) => {
                let user = User::from_profile(&profile);
                config.set_session(token.clone(), user.clone());
                self.persist(config)?;
                self.state = SessionState::Authenticated(Session { token, user });
                Ok(())
            }
            Err(err) => {
                debug!("profile lookup failed during startup: {}", err);
                config.clear_session();
                self.persist(config)?;
                self.state = SessionState::Anonymous;
                Err(SessionError::ProfileUnavailable.into())
            }
        }
    }

    /// Sign in and land on the role's home route.
    ///
    /// Partial login state is never retained: when authentication
    /// succeeds but the profile cannot be resolved, the token is
    /// discarded and the session stays empty.
    pub async fn login(&mut self, config: &mut Config, email: &str, password: &str) -> Result<Route> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(SessionError::MissingCredentials.into());
        }

        let jwt = match self.client.login(email, password).await {
            Ok(jwt) => jwt,
            // Connectivity failures keep their distinct messages;
            // everything else reads as a rejected sign-in.
            Err(Error::Api(api)) if api.is_connectivity() => return Err(api.into()),
            Err(Error::Api(_)) => return Err(SessionError::Rejected.into()),
            Err(other) => return Err(other),
        };

        let claims = TokenClaims::decode(&jwt.token)?;

        match self.client.get_employee_by_email(&claims.sub).await {
            Ok(profile) => {
                let user = User::from_profile(&profile);
                config.set_session(jwt.token.clone(), user.clone());
                self.persist(config)?;
                debug!("signed in as {} ({})", user.email, user.role);
                let landing = user.role.landing();
                self.state = SessionState::Authenticated(Session {
                    token: jwt.token,
                    user,
                });
                Ok(landing)
            }
            Err(err) => {
                debug!("profile lookup failed after sign-in: {}", err);
                config.clear_session();
                self.persist(config)?;
                self.state = SessionState::Anonymous;
                Err(SessionError::ProfileUnavailable.into())
            }
        }
    }

    /// Sign out: clear the persisted pair and return to the public entry
    /// route. Needs no remote call.
    pub fn logout(&mut self, config: &mut Config) -> Result<Route> {
        config.clear_session();
        self.persist(config)?;
        self.state = SessionState::Anonymous;
        Ok(Route::Login)
    }

    fn persist(&self, config: &Config) -> Result<()> {
        config.save_at(self.config_path.as_deref())
    }
}

/// Tear down the persisted session after a session-fatal remote failure.
///
/// 401 and connectivity failures force a re-login; the pair is cleared at
/// most once per occurrence (a session that is already gone stays gone).
/// Returns the route the user is sent to, if any.
pub fn teardown_after_failure(
    err: &Error,
    config: &mut Config,
    config_path: Option<&str>,
) -> Option<Route> {
    match err {
        Error::Api(api) if api.is_session_fatal() && config.has_session() => {
            debug!("tearing down session after fatal remote failure");
            config.clear_session();
            if let Err(save_err) = config.save_at(config_path) {
                debug!("could not persist session teardown: {}", save_err);
            }
            Some(Route::Login)
        }
        _ => None,
    }
}
