use std::env;

use auth::WorkFactor;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub session: SessionConfig,
    #[serde(default)]
    pub password: PasswordConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Session token and cookie policy.
#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub secret: String,
    /// Token lifetime; absent means tokens carry no `exp` claim
    #[serde(default)]
    pub expiration_hours: Option<i64>,
    #[serde(default = "default_cookie_secure")]
    pub cookie_secure: bool,
    #[serde(default)]
    pub cookie_same_site: CookieSameSite,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CookieSameSite {
    #[default]
    None,
    Lax,
    Strict,
}

/// Argon2 work factor for new password digests.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct PasswordConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        let work_factor = WorkFactor::default();
        Self {
            memory_kib: work_factor.memory_kib,
            iterations: work_factor.iterations,
            parallelism: work_factor.parallelism,
        }
    }
}

impl From<PasswordConfig> for WorkFactor {
    fn from(config: PasswordConfig) -> Self {
        WorkFactor {
            memory_kib: config.memory_kib,
            iterations: config.iterations,
            parallelism: config.parallelism,
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_cookie_secure() -> bool {
    true
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, SESSION__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: SESSION__EXPIRATION_HOURS=12 overrides session.expiration_hours
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn parse(toml: &str) -> Config {
        ConfigBuilder::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("valid configuration")
    }

    #[test]
    fn test_defaults_applied() {
        let config = parse(
            r#"
            [database]
            url = "postgresql://localhost/adoption"

            [server]
            http_port = 4000

            [session]
            secret = "secret"
            "#,
        );

        assert_eq!(config.database.max_connections, 5);
        assert!(config.server.allowed_origins.is_empty());
        assert_eq!(config.session.expiration_hours, None);
        assert!(config.session.cookie_secure);
        assert_eq!(config.session.cookie_same_site, CookieSameSite::None);
        assert_eq!(WorkFactor::from(config.password), WorkFactor::default());
    }

    #[test]
    fn test_explicit_session_policy() {
        let config = parse(
            r#"
            [database]
            url = "postgresql://localhost/adoption"

            [server]
            http_port = 4000
            allowed_origins = ["http://localhost:3000"]

            [session]
            secret = "secret"
            expiration_hours = 12
            cookie_secure = false
            cookie_same_site = "strict"

            [password]
            memory_kib = 4096
            iterations = 3
            parallelism = 2
            "#,
        );

        assert_eq!(config.server.allowed_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.session.expiration_hours, Some(12));
        assert!(!config.session.cookie_secure);
        assert_eq!(config.session.cookie_same_site, CookieSameSite::Strict);
        assert_eq!(config.password.iterations, 3);
    }
}
