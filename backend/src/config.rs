//! Runtime configuration read from the process environment.
//!
//! `main` loads an optional `.env` file first (via `dotenvy`), so every key
//! below can live there during local development.
//!
//! | Variable                | Default            | Meaning                                   |
//! |-------------------------|--------------------|-------------------------------------------|
//! | `REGISTER_HOST`         | `127.0.0.1`        | Bind address                              |
//! | `REGISTER_PORT`         | `8080`             | Bind port                                 |
//! | `REGISTER_DATABASE`     | `register.sqlite`  | SQLite file backing the data store        |
//! | `SDS_BACKEND_URL`       | unset              | Base URL of the SDS parsing service       |
//! | `REGISTER_DEFAULT_USER` | unset              | Principal used when no `x-user-id` header |
//! | `REGISTER_OPEN_BROWSER` | `true`             | Open the app in a browser on startup      |
//!
//! A missing `SDS_BACKEND_URL` is not a startup error. Only the update proxy
//! needs it, and it reports the problem per request.
//!
//! The bundled browser client sends no `x-user-id` header. Without a fronting
//! auth layer that sets it, `REGISTER_DEFAULT_USER` must be set or every API
//! call answers 401.

use common::error::RegisterError;

pub const HOST_VAR: &str = "REGISTER_HOST";
pub const PORT_VAR: &str = "REGISTER_PORT";
pub const DATABASE_VAR: &str = "REGISTER_DATABASE";
pub const SDS_BACKEND_URL_VAR: &str = "SDS_BACKEND_URL";
pub const DEFAULT_USER_VAR: &str = "REGISTER_DEFAULT_USER";
pub const OPEN_BROWSER_VAR: &str = "REGISTER_OPEN_BROWSER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_path: String,
    /// Base URL of the parsing service, without a trailing slash.
    pub sds_backend_url: Option<String>,
    pub default_user: Option<String>,
    pub open_browser: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_path: "register.sqlite".to_string(),
            sds_backend_url: None,
            default_user: None,
            open_browser: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, RegisterError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source. Blank values
    /// count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, RegisterError> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let port = match get(PORT_VAR) {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                RegisterError::Configuration(format!("{PORT_VAR} must be a port number, got {raw:?}"))
            })?,
            None => defaults.port,
        };
        let open_browser = match get(OPEN_BROWSER_VAR) {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                RegisterError::Configuration(format!("{OPEN_BROWSER_VAR} must be true or false, got {raw:?}"))
            })?,
            None => defaults.open_browser,
        };

        Ok(Self {
            host: get(HOST_VAR).unwrap_or(defaults.host),
            port,
            database_path: get(DATABASE_VAR).unwrap_or(defaults.database_path),
            sds_backend_url: get(SDS_BACKEND_URL_VAR)
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            default_user: get(DEFAULT_USER_VAR),
            open_browser,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Settings that start fine but leave part of the app unusable.
    pub fn startup_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.sds_backend_url.is_none() {
            warnings.push(format!(
                "{SDS_BACKEND_URL_VAR} is not set; SDS re-parse requests will be rejected"
            ));
        }
        if self.default_user.is_none() {
            warnings.push(format!(
                "{DEFAULT_USER_VAR} is not set; requests without an x-user-id header get 401"
            ));
        }
        warnings
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, RegisterError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        assert_eq!(config(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn backend_url_loses_trailing_slashes() {
        let cfg = config(&[(SDS_BACKEND_URL_VAR, "https://parser.example/api//")]).unwrap();
        assert_eq!(cfg.sds_backend_url.as_deref(), Some("https://parser.example/api"));
    }

    #[test]
    fn blank_backend_url_counts_as_missing() {
        let cfg = config(&[(SDS_BACKEND_URL_VAR, "   ")]).unwrap();
        assert_eq!(cfg.sds_backend_url, None);
    }

    #[test]
    fn invalid_port_is_a_configuration_error() {
        let err = config(&[(PORT_VAR, "eighty")]).unwrap_err();
        assert!(matches!(err, RegisterError::Configuration(_)));
    }

    #[test]
    fn default_config_warns_about_backend_and_user() {
        let warnings = AppConfig::default().startup_warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with(SDS_BACKEND_URL_VAR));
        assert!(warnings[1].starts_with(DEFAULT_USER_VAR));

        let cfg = config(&[
            (SDS_BACKEND_URL_VAR, "http://parser.local"),
            (DEFAULT_USER_VAR, "lab-manager"),
        ])
        .unwrap();
        assert!(cfg.startup_warnings().is_empty());
    }

    #[test]
    fn overrides_are_read() {
        let cfg = config(&[
            (HOST_VAR, "0.0.0.0"),
            (PORT_VAR, "9000"),
            (DEFAULT_USER_VAR, "lab-manager"),
            (OPEN_BROWSER_VAR, "off"),
        ])
        .unwrap();
        assert_eq!(cfg.url(), "http://0.0.0.0:9000");
        assert_eq!(cfg.default_user.as_deref(), Some("lab-manager"));
        assert!(!cfg.open_browser);
    }
}
