//! WASM entry point for the Leptos CSR header

use leptos::mount::mount_to_body;
use leptos::prelude::*;
use pksite_types::SiteConfig;
use pksite_web::App;

/// Brand and contact details the server embeds as JSON
fn embedded_config() -> Option<SiteConfig> {
    let element = document().get_element_by_id(pksite_web::CONFIG_ELEMENT_ID)?;
    let json = element.text_content()?;
    pksite_web::parse_embedded_config(&json)
}

fn main() {
    console_error_panic_hook::set_once();

    let config = embedded_config().unwrap_or_default();

    // The interactive header replaces the static first-paint markup
    if let Some(prerendered) = document().get_element_by_id(pksite_web::PRERENDER_ELEMENT_ID) {
        prerendered.remove();
    }

    mount_to_body(move || view! { <App config /> });
}
