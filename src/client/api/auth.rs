//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::JwtToken;
use crate::error::Result;

/// Sign-in against the auth service
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a bearer token with decoded expiry
    async fn login(&self, email: &str, password: &str) -> Result<JwtToken>;
}
