//! Server configuration from environment variables.
//!
//! | variable | default |
//! |---|---|
//! | `CONTENT_DIR` | `content` |
//! | `STATIC_DIR` | `static` |
//! | `PORT` | `3000` |
//! | `SITE_NAME` | `دليل الخدمات` |
//! | `SITE_URL` | `http://localhost:3000` |
//! | `CONTACT_PHONE` | `+966592425757` |
//! | `CONTACT_EMAIL` | `info@example.sa` |
//! | `WHATSAPP_NUMBER` | `+966592425757` |

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PHONE: &str = "+966592425757";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}' ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Site-wide details shown in the navbar, footer and contact page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub name: String,
    pub base_url: String,
    pub phone: String,
    pub email: String,
    pub whatsapp: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "دليل الخدمات".to_string(),
            base_url: format!("http://localhost:{}", DEFAULT_PORT),
            phone: DEFAULT_PHONE.to_string(),
            email: "info@example.sa".to_string(),
            whatsapp: DEFAULT_PHONE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub port: u16,
    pub site: SiteConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            port: DEFAULT_PORT,
            site: SiteConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; unset or blank variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(dir) = get("CONTENT_DIR") {
            config.content_dir = PathBuf::from(dir);
        }
        if let Some(dir) = get("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(port) = get("PORT") {
            config.port = port.parse().map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                var: "PORT",
                value: port.clone(),
                reason: e.to_string(),
            })?;
            config.site.base_url = format!("http://localhost:{}", config.port);
        }
        if let Some(name) = get("SITE_NAME") {
            config.site.name = name;
        }
        if let Some(url) = get("SITE_URL") {
            config.site.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(phone) = get("CONTACT_PHONE") {
            config.site.phone = phone;
        }
        if let Some(email) = get("CONTACT_EMAIL") {
            if !email.contains('@') {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_EMAIL",
                    value: email,
                    reason: "missing '@'".to_string(),
                });
            }
            config.site.email = email;
        }
        if let Some(number) = get("WHATSAPP_NUMBER") {
            if !number.chars().any(|c| c.is_ascii_digit()) {
                return Err(ConfigError::InvalidValue {
                    var: "WHATSAPP_NUMBER",
                    value: number,
                    reason: "no digits".to_string(),
                });
            }
            config.site.whatsapp = number;
        }

        Ok(config)
    }
}
