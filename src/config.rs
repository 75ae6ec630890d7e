use std::collections::HashMap;

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use corpsite_notification::EmailConfig;
use serde::Deserialize;

/// Flat variable names still honoured on top of the `CORPSITE__` ones.
const LEGACY_ENV: &[(&str, &str)] = &[
    ("DATABASE_URL", "database.url"),
    ("EMAIL_HOST", "email.smtp_host"),
    ("EMAIL_PORT", "email.smtp_port"),
    ("EMAIL_USER", "email.smtp_username"),
    ("EMAIL_PASSWORD", "email.smtp_password"),
    ("EMAIL_FROM", "email.from_address"),
    ("CONTACT_PHONE", "email.contact_phone"),
    ("CONTACT_PHONE_2", "email.contact_phone_2"),
    ("UPLOAD_DIR", "upload.dir"),
    ("MAX_FILE_SIZE", "upload.max_file_size"),
    ("APP_NAME", "app.name"),
    ("APP_VERSION", "app.version"),
    ("DEBUG", "app.debug"),
];

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_app_version")]
    pub version: String,
    #[serde(default)]
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
            debug: false,
        }
    }
}

fn default_app_name() -> String {
    "Corpsite".to_owned()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_owned()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_owned(),
        "http://localhost:5173".to_owned(),
    ]
}

fn default_static_dir() -> String {
    "static".to_owned()
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    #[serde(default = "default_upload_dir")]
    pub dir: String,
    /// Largest accepted request body, in bytes.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: default_upload_dir(),
            max_file_size: default_max_file_size(),
        }
    }
}

fn default_upload_dir() -> String {
    "static/uploads".to_owned()
}

fn default_max_file_size() -> usize {
    10 * 1024 * 1024
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Flat variables (DATABASE_URL, EMAIL_HOST, ...)
    /// 2. Prefixed variables (CORPSITE__DATABASE__URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, std::env::vars().collect())
    }

    pub fn load_with_env(
        config_path: Option<String>,
        vars: HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("database.url", "sqlite:corpsite.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| vars.get("CONFIG_PATH").cloned())
            .unwrap_or_else(|| "config/default.toml".to_owned());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("CORPSITE")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("server.allowed_origins")
                .try_parsing(true)
                .source(Some(vars.clone())),
        );

        for (name, key) in LEGACY_ENV {
            if let Some(value) = vars.get(*name) {
                builder = builder.set_override(*key, value.as_str())?;
            }
        }

        if let Some(origins) = vars.get("ALLOWED_ORIGINS") {
            let origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_owned)
                .collect::<Vec<_>>();

            builder = builder.set_override("server.allowed_origins", origins)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_owned());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_owned());
        }
        if self.email.timeout_secs == 0 {
            return Err("Email timeout_secs must be greater than 0".to_owned());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use temp_dir::TempDir;

    use super::*;

    const MISSING_FILE: &str = "does-not-exist/corpsite.toml";

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn load(pairs: &[(&str, &str)]) -> Config {
        Config::load_with_env(Some(MISSING_FILE.to_owned()), env(pairs)).unwrap()
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let config = load(&[]);

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.static_dir, "static");
        assert_eq!(config.database.url, "sqlite:corpsite.db");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.email.timeout_secs, 10);
        assert!(!config.email.auto_reply);
        assert_eq!(config.upload.max_file_size, 10 * 1024 * 1024);
        assert_eq!(config.observability.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_prefixed_env_overrides_defaults() {
        let config = load(&[
            ("CORPSITE__SERVER__PORT", "9000"),
            ("CORPSITE__EMAIL__SMTP_HOST", "smtp.corpsite.localhost"),
            ("CORPSITE__EMAIL__AUTO_REPLY", "true"),
            (
                "CORPSITE__SERVER__ALLOWED_ORIGINS",
                "https://a.localhost,https://b.localhost",
            ),
        ]);

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.email.smtp_host, "smtp.corpsite.localhost");
        assert!(config.email.auto_reply);
        assert_eq!(
            config.server.allowed_origins,
            vec!["https://a.localhost", "https://b.localhost"]
        );
    }

    #[test]
    fn test_flat_env_wins_over_prefixed() {
        let config = load(&[
            ("CORPSITE__DATABASE__URL", "sqlite:prefixed.db"),
            ("DATABASE_URL", "sqlite:legacy.db"),
            ("EMAIL_PORT", "2525"),
            ("EMAIL_USER", "mailer@corpsite.localhost"),
            ("CONTACT_PHONE_2", "+91 98 0000 0000"),
            ("MAX_FILE_SIZE", "2048"),
            ("DEBUG", "true"),
            ("ALLOWED_ORIGINS", "https://corpsite.localhost, http://localhost:5173"),
        ]);

        assert_eq!(config.database.url, "sqlite:legacy.db");
        assert_eq!(config.email.smtp_port, 2525);
        assert_eq!(config.email.smtp_username, "mailer@corpsite.localhost");
        assert_eq!(config.email.contact_phone_2, "+91 98 0000 0000");
        assert_eq!(config.upload.max_file_size, 2048);
        assert!(config.app.debug);
        assert_eq!(
            config.server.allowed_origins,
            vec!["https://corpsite.localhost", "http://localhost:5173"]
        );
    }

    #[test]
    fn test_file_layer_sits_between_defaults_and_env() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("corpsite.toml");
        std::fs::write(
            &path,
            r#"
[server]
host = "0.0.0.0"
port = 7000

[email]
company_name = "Quintessence"
"#,
        )
        .unwrap();

        let config = Config::load_with_env(
            None,
            env(&[
                ("CONFIG_PATH", path.to_str().unwrap()),
                ("CORPSITE__SERVER__PORT", "7001"),
            ]),
        )
        .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 7001);
        assert_eq!(config.email.company_name, "Quintessence");
        assert_eq!(config.email.smtp_port, 587);
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = load(&[]);
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_connections() {
        let mut config = load(&[]);
        config.database.max_connections = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let mut config = load(&[]);
        config.email.timeout_secs = 0;

        assert!(config.validate().is_err());
    }
}
