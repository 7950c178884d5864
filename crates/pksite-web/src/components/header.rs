//! Header component

use leptos::prelude::*;
use pksite_types::SiteConfig;

use super::{ContactDetails, DesktopNav, HamburgerButton, MobileMenu};

/// Site header: logo, contact details, desktop navigation, and the
/// hamburger-driven mobile panel. Expects a `HeaderStore` in context.
#[component]
pub fn Header(config: SiteConfig) -> impl IntoView {
    let SiteConfig { brand, contact, .. } = config;

    view! {
        <header class="pk-header">
            <div class="pk-container">
                <div class="pk-topbar">
                    <div class="pk-brand">
                        <img class="pk-logo" src=brand.logo_src alt=brand.logo_alt />
                        <ContactDetails contact />
                    </div>
                    <DesktopNav />
                    <HamburgerButton />
                </div>
                <MobileMenu />
            </div>
        </header>
    }
}
