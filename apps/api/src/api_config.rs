use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use essensys_core::{Actor, AppError};
use essensys_domain::ReferenceEntryDefaults;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub frontend_url: String,
    pub api_host: String,
    pub api_port: u16,
    pub reference_path: Option<PathBuf>,
    pub audit_actor: Actor,
    pub entry_default_overrides: ReferenceEntryDefaults,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = match optional_non_empty_env("API_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|error| AppError::Validation(format!("invalid API_PORT: {error}")))?,
            None => 3001,
        };

        let reference_path = optional_non_empty_env("CATALOG_REFERENCE_PATH").map(PathBuf::from);

        let audit_actor = match env::var("CATALOG_AUDIT_ACTOR") {
            Ok(value) => Actor::new(value).map_err(|_| {
                AppError::Validation("CATALOG_AUDIT_ACTOR must not be blank".to_owned())
            })?,
            Err(_) => Actor::default(),
        };

        let entry_default_overrides = ReferenceEntryDefaults {
            web: optional_flag_env("CATALOG_ENTRY_DEFAULT_WEB")?,
            local: optional_flag_env("CATALOG_ENTRY_DEFAULT_LOCAL")?,
        };

        Ok(Self {
            frontend_url,
            api_host,
            api_port,
            reference_path,
            audit_actor,
            entry_default_overrides,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn optional_non_empty_env(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn optional_flag_env(name: &str) -> Result<Option<bool>, AppError> {
    optional_non_empty_env(name)
        .map(|value| parse_flag(name, value.as_str()))
        .transpose()
}

fn parse_flag(name: &str, value: &str) -> Result<bool, AppError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(AppError::Validation(format!(
            "{name} must be a boolean, got '{value}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiConfig, parse_flag};
    use essensys_core::{Actor, AppError};
    use essensys_domain::ReferenceEntryDefaults;

    #[test]
    fn flags_accept_common_spellings() {
        assert_eq!(parse_flag("FLAG", "TRUE").ok(), Some(true));
        assert_eq!(parse_flag("FLAG", "1").ok(), Some(true));
        assert_eq!(parse_flag("FLAG", "no").ok(), Some(false));
        assert!(matches!(
            parse_flag("FLAG", "maybe"),
            Err(AppError::Validation(message)) if message.contains("FLAG")
        ));
    }

    #[test]
    fn socket_address_rejects_hostnames() {
        let config = ApiConfig {
            frontend_url: "http://localhost:3000".to_owned(),
            api_host: "localhost".to_owned(),
            api_port: 3001,
            reference_path: None,
            audit_actor: Actor::default(),
            entry_default_overrides: ReferenceEntryDefaults::default(),
        };

        assert!(matches!(
            config.socket_address(),
            Err(AppError::Internal(_))
        ));

        let config = ApiConfig {
            api_host: "0.0.0.0".to_owned(),
            ..config
        };
        assert_eq!(
            config.socket_address().map(|address| address.port()).ok(),
            Some(3001)
        );
    }
}
