//! Runtime configuration pushed by the shell at startup.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::locale::Locale;

pub const DEFAULT_API_BASE_URL: &str = "https://api.example.com/api";
pub const DEFAULT_MESSAGING_DOMAIN: &str = "wa.me";
pub const DEFAULT_COUNTRY_CALLING_CODE: &str = "216";
pub const DEFAULT_NATIONAL_NUMBER_LENGTH: usize = 8;
pub const DEFAULT_MAPS_BASE_URL: &str = "https://maps.google.com/";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    InvalidUrl { field: &'static str, reason: String },
    #[error("invalid messaging domain: {0:?}")]
    InvalidMessagingDomain(String),
    #[error("invalid country calling code: {0:?}")]
    InvalidCountryCode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub messaging_domain: String,
    /// Calling code without the leading `+`.
    pub country_calling_code: String,
    /// Subscriber number length in the home country; 0 disables the check
    /// for numbers that already carry the calling code.
    pub national_number_length: usize,
    pub maps_base_url: String,
    pub locale: Locale,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            messaging_domain: DEFAULT_MESSAGING_DOMAIN.to_owned(),
            country_calling_code: DEFAULT_COUNTRY_CALLING_CODE.to_owned(),
            national_number_length: DEFAULT_NATIONAL_NUMBER_LENGTH,
            maps_base_url: DEFAULT_MAPS_BASE_URL.to_owned(),
            locale: Locale::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        http_url("apiBaseUrl", &self.api_base_url)?;
        http_url("mapsBaseUrl", &self.maps_base_url)?;

        let domain = self.messaging_domain.as_str();
        let is_bare_host = !domain.is_empty()
            && domain
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
        if !is_bare_host {
            return Err(ConfigError::InvalidMessagingDomain(domain.to_owned()));
        }

        let code = self.country_calling_code.as_str();
        if !(1..=3).contains(&code.len()) || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidCountryCode(code.to_owned()));
        }

        Ok(())
    }
}

fn http_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        field,
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl {
            field,
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl {
            field,
            reason: "missing host".to_owned(),
        });
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.messaging_domain, "wa.me");
        assert_eq!(config.country_calling_code, "216");
        assert_eq!(config.locale, Locale::Fr);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "apiBaseUrl": "http://localhost:3000/api", "locale": "en" }"#)
                .unwrap();
        assert_eq!(config.api_base_url, "http://localhost:3000/api");
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.messaging_domain, DEFAULT_MESSAGING_DOMAIN);
        assert_eq!(config.national_number_length, DEFAULT_NATIONAL_NUMBER_LENGTH);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_non_http_api_url() {
        let config = AppConfig {
            api_base_url: "ftp://files.example.com".into(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl { field: "apiBaseUrl", .. })
        ));

        let config = AppConfig {
            maps_base_url: "not a url".into(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl { field: "mapsBaseUrl", .. })
        ));
    }

    #[test]
    fn rejects_messaging_domain_with_path() {
        let config = AppConfig {
            messaging_domain: "wa.me/extra".into(),
            ..AppConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidMessagingDomain("wa.me/extra".into()))
        );
    }

    #[test]
    fn rejects_bad_country_code() {
        for code in ["", "+216", "21a", "1234"] {
            let config = AppConfig {
                country_calling_code: code.into(),
                ..AppConfig::default()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::InvalidCountryCode(code.into())),
                "{code}"
            );
        }
    }
}
