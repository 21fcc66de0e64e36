//! Chef authentication
//!
//! Exact match of a (email, password, access code) triple against the
//! configured demo credentials. This is a demo affordance, not a security
//! boundary: no hashing, no rotation, no storage.

use shared::{AppError, AppResult};

/// The chef credential triple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChefCredentials {
    pub email: String,
    pub password: String,
    pub access_code: String,
}

impl Default for ChefCredentials {
    /// Demo credentials, shown in clear text on the welcome screen
    fn default() -> Self {
        Self {
            email: "chef@christoffel.com".to_string(),
            password: "chef123".to_string(),
            access_code: "2024".to_string(),
        }
    }
}

/// Verifies chef logins against the configured credential triple
#[derive(Debug, Clone)]
pub struct ChefAuth {
    credentials: ChefCredentials,
}

impl ChefAuth {
    pub fn new(credentials: ChefCredentials) -> Self {
        Self { credentials }
    }

    /// The configured triple, for the demo hint panels
    pub fn credentials(&self) -> &ChefCredentials {
        &self.credentials
    }

    /// Verify a login attempt
    ///
    /// Succeeds only when all three fields match exactly; any single
    /// mismatch fails with [`shared::ErrorCode::InvalidCredentials`].
    pub fn verify(&self, email: &str, password: &str, access_code: &str) -> AppResult<()> {
        if email == self.credentials.email
            && password == self.credentials.password
            && access_code == self.credentials.access_code
        {
            tracing::info!("chef authenticated");
            Ok(())
        } else {
            tracing::warn!("chef authentication failed");
            Err(AppError::invalid_credentials())
        }
    }
}
