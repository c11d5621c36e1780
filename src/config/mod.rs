//! Configuration management for hrops
//!
//! The config file is the CLI's durable store: service endpoints for the
//! active deployment profile, the persisted session pair (raw token plus
//! the serialized user profile), and the clock-in marker for time
//! tracking. The token and profile are always written and cleared
//! together.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::session::User;

/// Base URLs for the five collaborator services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub auth: String,
    pub employee: String,
    pub payroll: String,
    pub performance: String,
    pub schedule: String,
}

impl Endpoints {
    /// Local development profile: one port per service, auth co-hosted
    /// with the employee service.
    pub fn local() -> Self {
        Self {
            auth: "http://localhost:8005".to_string(),
            employee: "http://localhost:8005".to_string(),
            payroll: "http://localhost:8006".to_string(),
            performance: "http://localhost:8007".to_string(),
            schedule: "http://localhost:8008".to_string(),
        }
    }

    /// Gateway profile: every service behind one base URL, routed by path.
    pub fn gateway(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            auth: format!("{}/api/auth", base),
            employee: format!("{}/api/employee", base),
            payroll: format!("{}/api/payroll", base),
            performance: format!("{}/evaluations", base),
            schedule: format!("{}/api/schedule", base),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::local()
    }
}

/// Application configuration and durable session state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Service base URLs
    #[serde(default)]
    pub endpoints: Endpoints,

    /// Raw bearer token from the last sign-in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Cached user profile resolved at sign-in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// Instant of the currently open clock-in, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock_in: Option<DateTime<Utc>>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".hrops").join("config.yaml"))
    }

    /// Resolve the config path from an optional override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, falling back to defaults when no file exists.
    ///
    /// A missing file is not an error: a fresh install has default local
    /// endpoints and no session.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to the resolved path
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        let path = Self::resolve_path(path)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Token lives in this file; keep it private to the owner
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Store the session pair. Token and profile move together.
    pub fn set_session(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Clear the session pair. Token and profile move together.
    pub fn clear_session(&mut self) {
        self.token = None;
        self.user = None;
    }

    /// True when a session pair (or a bare token) is persisted
    pub fn has_session(&self) -> bool {
        self.token.is_some()
    }
}
