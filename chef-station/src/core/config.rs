use crate::auth::ChefCredentials;

/// Application configuration
///
/// # Environment variables
///
/// All settings can be overridden through environment variables:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | CHEF_EMAIL | chef@christoffel.com | Chef login email |
/// | CHEF_PASSWORD | chef123 | Chef login password |
/// | CHEF_ACCESS_CODE | 2024 | Chef access code |
/// | TICK_RATE_MS | 100 | UI event poll interval (milliseconds) |
/// | LOG_DIR | (unset) | Directory for daily-rolling log files |
///
/// The credential triple is a demo affordance, not a security boundary;
/// it is shown in clear text on the welcome and login screens.
#[derive(Debug, Clone)]
pub struct Config {
    /// Chef login credentials
    pub credentials: ChefCredentials,
    /// UI event poll interval in milliseconds
    pub tick_rate_ms: u64,
    /// Optional directory for file logging
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to the demo defaults.
    pub fn from_env() -> Self {
        Self {
            credentials: ChefCredentials {
                email: std::env::var("CHEF_EMAIL")
                    .unwrap_or_else(|_| "chef@christoffel.com".into()),
                password: std::env::var("CHEF_PASSWORD").unwrap_or_else(|_| "chef123".into()),
                access_code: std::env::var("CHEF_ACCESS_CODE").unwrap_or_else(|_| "2024".into()),
            },
            tick_rate_ms: std::env::var("TICK_RATE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Build a config with explicit credentials
    ///
    /// Mostly useful in tests.
    pub fn with_credentials(
        email: impl Into<String>,
        password: impl Into<String>,
        access_code: impl Into<String>,
    ) -> Self {
        let mut config = Self::from_env();
        config.credentials = ChefCredentials {
            email: email.into(),
            password: password.into(),
            access_code: access_code.into(),
        };
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
