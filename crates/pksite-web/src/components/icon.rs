//! Inline SVG icon component

use leptos::prelude::*;
use pksite_core::icons::Icon;

/// Renders one of the shared icons as inline SVG
#[component]
pub fn SvgIcon(icon: Icon, #[prop(default = 16)] size: u32) -> impl IntoView {
    view! { <span class="pk-icon-wrap" inner_html=icon.svg(size)></span> }
}
