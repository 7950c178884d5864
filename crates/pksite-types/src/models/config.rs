//! Site configuration
//!
//! Mirrors `config.toml`:
//!
//! ```toml
//! [brand]
//! logo_src = "/assets/logo.png"
//! logo_alt = "CA Firm Logo"
//!
//! [contact]
//! email = "info@yourcafirm.com"
//! phone = "+91-9876543210"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//! assets_dir = "assets"
//! bundle_dir = "crates/pksite-web/pkg"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete site configuration. Every section is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: BrandConfig,
    pub contact: ContactConfig,
    pub server: ServerConfig,
}

/// Logo shown at the left of the header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    /// Image URL, usually under `/assets`
    pub logo_src: String,
    pub logo_alt: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            logo_src: "/assets/logo.png".to_string(),
            logo_alt: "CA Firm Logo".to_string(),
        }
    }
}

/// Contact details shown next to the logo on wide screens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "info@yourcafirm.com".to_string(),
            phone: "+91-9876543210".to_string(),
        }
    }
}

impl ContactConfig {
    /// `mailto:` link for the email address
    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link with spaces and dashes removed
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/assets`
    pub assets_dir: PathBuf,
    /// Compiled WASM bundle (`wasm-bindgen --target web` output) served
    /// under `/pkg`. Without it the page stays static.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            assets_dir: PathBuf::from("assets"),
            bundle_dir: None,
        }
    }
}
