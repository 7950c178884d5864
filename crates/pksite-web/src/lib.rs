//! pksite-web - Web frontend for pksite using Leptos + Axum
//!
//! The Leptos components compile to WASM (`csr` feature). With `ssr`
//! (default) the crate also provides the Axum server that serves the
//! pre-rendered header, the JSON API and static files.

#![recursion_limit = "1024"]

pub mod app;
pub mod components;
pub mod store;

#[cfg(feature = "ssr")]
pub mod router;
#[cfg(feature = "ssr")]
pub mod shell;

pub use app::App;
pub use store::{use_header, HeaderProvider, HeaderStore};

#[cfg(feature = "ssr")]
pub use router::create_router;

/// Id of the element holding the server-rendered header
pub const PRERENDER_ELEMENT_ID: &str = "pk-prerender";

/// Id of the `<script type="application/json">` holding brand and contact data
pub const CONFIG_ELEMENT_ID: &str = "pk-config";

/// Parse the config the server embeds in the page. A malformed payload is
/// logged and yields `None`, so the caller falls back to the defaults.
pub fn parse_embedded_config(json: &str) -> Option<pksite_types::SiteConfig> {
    match serde_json::from_str(json) {
        Ok(config) => Some(config),
        Err(e) => {
            leptos::logging::warn!("ignoring embedded config in #{}: {}", CONFIG_ELEMENT_ID, e);
            None
        }
    }
}

#[cfg(feature = "ssr")]
mod server {
    use anyhow::{Context, Result};
    use pksite_types::SiteConfig;
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tracing::info;

    /// Run the web server
    pub async fn run(config: Arc<SiteConfig>, addr: SocketAddr) -> Result<()> {
        let router = crate::create_router(config);

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!("Web server listening on http://{}", addr);
        println!("Web server listening on http://{}", addr);

        axum::serve(listener, router).await?;

        Ok(())
    }
}

#[cfg(feature = "ssr")]
pub use server::run;
