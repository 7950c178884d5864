//! Root Leptos component

use leptos::prelude::*;
use pksite_types::SiteConfig;

use crate::components::Header;
use crate::store::HeaderProvider;

/// Header with its own state store. `config` defaults to the built-in
/// brand and contact details.
#[component]
pub fn App(#[prop(optional)] config: Option<SiteConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();

    view! {
        <HeaderProvider>
            <Header config />
        </HeaderProvider>
    }
}
