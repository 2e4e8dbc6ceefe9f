//! Client Configuration
//!
//! Everything the payment client needs is injected through [`PaymentConfig`];
//! there is no process-wide client state.

use std::fmt;

use url::Url;

use crate::error::{PaymentError, Result};

/// Production Mercado Pago API
pub const DEFAULT_BASE_URL: &str = "https://api.mercadopago.com";

/// Payment client configuration
#[derive(Clone)]
pub struct PaymentConfig {
    /// API root; always ends with `/`
    pub base_url: Url,

    /// Static bearer credential. May be empty: the API decides.
    pub access_token: String,

    /// Webhook target sent with every new payment
    pub notification_url: Option<Url>,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self::new("")
    }
}

impl PaymentConfig {
    /// Configuration against the production API
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            access_token: access_token.into(),
            notification_url: None,
        }
    }

    /// Point the client at another API root (sandbox, proxy, test server)
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = normalize_base(base_url);
        self
    }

    pub fn with_notification_url(mut self, notification_url: Url) -> Self {
        self.notification_url = Some(notification_url);
        self
    }

    /// Read configuration captured from the build environment
    ///
    /// - `MERCADOPAGO_ACCESS_TOKEN`
    /// - `MERCADOPAGO_BASE_URL` (default: [`DEFAULT_BASE_URL`])
    /// - `MERCADOPAGO_NOTIFICATION_URL` (optional)
    ///
    /// The browser bundle has no process environment, so these are baked in at compile time.
    pub fn from_build_env() -> Result<Self> {
        Self::from_vars(
            option_env!("MERCADOPAGO_ACCESS_TOKEN"),
            option_env!("MERCADOPAGO_BASE_URL"),
            option_env!("MERCADOPAGO_NOTIFICATION_URL"),
        )
    }

    fn from_vars(
        access_token: Option<&str>,
        base_url: Option<&str>,
        notification_url: Option<&str>,
    ) -> Result<Self> {
        let mut config = Self::new(access_token.unwrap_or_default());

        if let Some(base) = non_empty(base_url) {
            config = config.with_base_url(parse_url("MERCADOPAGO_BASE_URL", base)?);
        }
        if let Some(notify) = non_empty(notification_url) {
            config = config.with_notification_url(parse_url("MERCADOPAGO_NOTIFICATION_URL", notify)?);
        }

        Ok(config)
    }

    /// Whether a credential is present at all
    pub fn has_access_token(&self) -> bool {
        !self.access_token.is_empty()
    }
}

impl fmt::Debug for PaymentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentConfig")
            .field("base_url", &self.base_url.as_str())
            .field("access_token", &if self.has_access_token() { "<redacted>" } else { "<empty>" })
            .field("notification_url", &self.notification_url.as_ref().map(Url::as_str))
            .finish()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_url(var: &str, value: &str) -> Result<Url> {
    Url::parse(value).map_err(|e| PaymentError::Config(format!("{var}: {e}")))
}

// `Url::join` replaces the last path segment unless the base ends with `/`.
fn normalize_base(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PaymentConfig::default();
        assert_eq!(config.base_url.as_str(), "https://api.mercadopago.com/");
        assert!(!config.has_access_token());
        assert!(config.notification_url.is_none());
    }

    #[test]
    fn test_from_vars() {
        let config = PaymentConfig::from_vars(
            Some("APP_USR-123"),
            Some("http://localhost:8080/mp"),
            Some("https://hooks.example.com/pix"),
        )
        .unwrap();

        assert_eq!(config.access_token, "APP_USR-123");
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/mp/");
        assert_eq!(
            config.notification_url.unwrap().as_str(),
            "https://hooks.example.com/pix"
        );
    }

    #[test]
    fn test_blank_vars_fall_back_to_defaults() {
        let config = PaymentConfig::from_vars(None, Some("  "), Some("")).unwrap();
        assert_eq!(config.base_url.as_str(), "https://api.mercadopago.com/");
        assert!(config.notification_url.is_none());
    }

    #[test]
    fn test_invalid_url_is_config_error() {
        let err = PaymentConfig::from_vars(None, Some("not a url"), None).unwrap_err();
        assert!(matches!(err, PaymentError::Config(ref msg) if msg.starts_with("MERCADOPAGO_BASE_URL")));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = PaymentConfig::new("APP_USR-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }
}
