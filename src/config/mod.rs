use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_required_field, validate_url, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "komga-gap-report")]
#[command(about = "Reports missing volumes/chapters in a Komga library based on filenames")]
pub struct CliConfig {
    #[arg(long, env = "KOMGA_URL", default_value = "http://127.0.0.1:8081")]
    pub server_url: String,

    #[arg(long, env = "KOMGA_USER")]
    pub username: Option<String>,

    #[arg(long, env = "KOMGA_PASS", hide_env_values = true)]
    pub password: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Resolve into the value handed to the catalog client. Called once at
    /// process start; nothing downstream reads the environment.
    pub fn into_settings(self) -> Result<KomgaSettings> {
        let username = validate_required_field("username (KOMGA_USER)", &self.username)?.clone();
        let password = validate_required_field("password (KOMGA_PASS)", &self.password)?.clone();
        Ok(KomgaSettings {
            server_url: self.server_url,
            username,
            password,
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("server_url", &self.server_url)?;
        let username = validate_required_field("username (KOMGA_USER)", &self.username)?;
        validate_non_empty_string("username", username)?;
        let password = validate_required_field("password (KOMGA_PASS)", &self.password)?;
        validate_non_empty_string("password", password)?;
        Ok(())
    }
}

/// Resolved connection settings, passed by value into the catalog client.
#[derive(Debug, Clone)]
pub struct KomgaSettings {
    pub server_url: String,
    pub username: String,
    pub password: String,
}

impl ConfigProvider for KomgaSettings {
    fn server_url(&self) -> &str {
        &self.server_url
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn password(&self) -> &str {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str, user: Option<&str>, pass: Option<&str>) -> CliConfig {
        CliConfig {
            server_url: url.to_string(),
            username: user.map(str::to_string),
            password: pass.map(str::to_string),
            verbose: false,
        }
    }

    #[test]
    fn test_complete_config_validates() {
        let cfg = config("http://127.0.0.1:8081", Some("admin"), Some("secret"));
        assert!(cfg.validate().is_ok());

        let settings = cfg.into_settings().unwrap();
        assert_eq!(settings.server_url(), "http://127.0.0.1:8081");
        assert_eq!(settings.username(), "admin");
        assert_eq!(settings.password(), "secret");
    }

    #[test]
    fn test_missing_credentials_rejected() {
        assert!(config("http://127.0.0.1:8081", None, Some("secret"))
            .validate()
            .is_err());
        assert!(config("http://127.0.0.1:8081", Some("admin"), None)
            .validate()
            .is_err());
        assert!(config("http://127.0.0.1:8081", None, None)
            .into_settings()
            .is_err());
    }

    #[test]
    fn test_blank_credentials_rejected() {
        assert!(config("http://127.0.0.1:8081", Some(""), Some("secret"))
            .validate()
            .is_err());
        assert!(config("http://127.0.0.1:8081", Some("admin"), Some("  "))
            .validate()
            .is_err());
    }

    #[test]
    fn test_bad_url_rejected() {
        assert!(config("not a url", Some("admin"), Some("secret"))
            .validate()
            .is_err());
        assert!(config("ftp://host", Some("admin"), Some("secret"))
            .validate()
            .is_err());
    }
}
