//! Process configuration.
//!
//! Built once at startup and handed to each component; business logic never
//! reads the environment directly. Supports loading from environment
//! variables with the GRIEVANCE_ prefix.

use serde::{Deserialize, Serialize};
use std::env;

/// Mail relay configuration for admin notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    /// SMTP relay hostname
    pub smtp_host: String,
    /// Relay account username; also used as the sender address
    pub username: String,
    /// Relay account password
    pub password: String,
    /// Address that receives new-complaint notifications
    pub recipient: String,
    /// Send timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            smtp_host: "smtp.gmail.com".to_string(),
            username: String::new(),
            password: String::new(),
            recipient: String::new(),
            timeout_secs: 30,
        }
    }
}

impl MailerConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - GRIEVANCE_SMTP_HOST: SMTP relay hostname
    /// - GRIEVANCE_SMTP_USER: relay username / sender address
    /// - GRIEVANCE_SMTP_PASS: relay password
    /// - GRIEVANCE_NOTIFY_TO: notification recipient address
    /// - GRIEVANCE_SMTP_TIMEOUT: send timeout in seconds
    pub fn from_env() -> Self {
        Self {
            smtp_host: env::var("GRIEVANCE_SMTP_HOST")
                .unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            username: env::var("GRIEVANCE_SMTP_USER").unwrap_or_default(),
            password: env::var("GRIEVANCE_SMTP_PASS").unwrap_or_default(),
            recipient: env::var("GRIEVANCE_NOTIFY_TO").unwrap_or_default(),
            timeout_secs: env::var("GRIEVANCE_SMTP_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Host to bind the HTTP listener to
    pub host: String,
    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory for the sled complaint store
    pub data_dir: String,
    /// Shared admin secret checked by the login endpoint
    pub admin_password: String,
    /// Whether to attach the permissive CORS layer
    #[serde(default = "default_true")]
    pub enable_cors: bool,
    /// Mail relay settings
    pub mailer: MailerConfig,
}

fn default_port() -> u16 {
    4000
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            data_dir: "./grievance_data".to_string(),
            admin_password: String::new(),
            enable_cors: true,
            mailer: MailerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - GRIEVANCE_HOST: bind host
    /// - GRIEVANCE_PORT: listen port (default 4000)
    /// - GRIEVANCE_DATA_DIR: sled data directory
    /// - GRIEVANCE_ADMIN_PASSWORD: shared admin secret
    /// - GRIEVANCE_ENABLE_CORS: attach CORS layer (true/false)
    ///
    /// Also reads mailer settings from their respective env vars.
    pub fn from_env() -> Self {
        Self {
            host: env::var("GRIEVANCE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("GRIEVANCE_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(4000),
            data_dir: env::var("GRIEVANCE_DATA_DIR")
                .unwrap_or_else(|_| "./grievance_data".to_string()),
            admin_password: env::var("GRIEVANCE_ADMIN_PASSWORD").unwrap_or_default(),
            enable_cors: env::var("GRIEVANCE_ENABLE_CORS")
                .map(|s| s.to_lowercase() == "true" || s == "1")
                .unwrap_or(true),
            mailer: MailerConfig::from_env(),
        }
    }

    /// Create a development configuration
    pub fn development() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
            data_dir: "./grievance_dev_data".to_string(),
            admin_password: "admin".to_string(),
            enable_cors: true,
            mailer: MailerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.port, 4000);
        assert!(config.enable_cors);
        assert!(config.admin_password.is_empty());
    }

    #[test]
    fn test_mailer_config_defaults() {
        let config = MailerConfig::default();
        assert_eq!(config.smtp_host, "smtp.gmail.com");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_development_config() {
        let config = AppConfig::development();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.admin_password, "admin");
    }
}
