//! Desktop navigation bar with hover dropdowns

use leptos::prelude::*;
use pksite_core::html::motion_style;
use pksite_core::menu::{self, PLACEHOLDER_HREF};
use pksite_core::motion as presets;
use pksite_core::{icons, HeaderAction, MenuGroup, NavLabel};
use pksite_types::Motion;

use super::{Presence, SvgIcon};
use crate::store::use_header;

/// Plain top-level link
#[component]
pub fn NavLink(label: NavLabel, motion: Motion) -> impl IntoView {
    view! {
        <a class="pk-link pk-hover" href=PLACEHOLDER_HREF style=motion_style(&motion)>
            {label.as_str()}
        </a>
    }
}

/// Links of one group, staggered in list order
#[component]
pub fn PanelLinks(group: &'static MenuGroup) -> impl IntoView {
    let panel = presets::DROPDOWN_PANEL;

    group
        .items
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let style = motion_style(&presets::DROPDOWN_ITEM.at_delay(panel.child_delay(i)));
            view! {
                <a class="pk-link" href=PLACEHOLDER_HREF style=style>
                    {label.as_str()}
                </a>
            }
        })
        .collect_view()
}

/// Trigger plus panel. The whole wrapper is the hover region, so moving the
/// pointer from the trigger into the panel keeps it open.
#[component]
pub fn Dropdown(group: &'static MenuGroup, motion: Motion) -> impl IntoView {
    let store = use_header();
    let id = group.id;
    let visible = Signal::derive(move || store.dropdown_visible(id));

    view! {
        <div
            class="pk-dropdown"
            data-group=id.id()
            style=motion_style(&motion)
            on:mouseenter=move |_| store.dispatch(HeaderAction::PointerEnter(id))
            on:mouseleave=move |_| store.dispatch(HeaderAction::PointerLeave(id))
        >
            <button
                type="button"
                class="pk-trigger pk-hover"
                aria-haspopup="true"
                aria-expanded=move || visible.get().to_string()
            >
                {group.title.as_str()}
                <SvgIcon icon=icons::CHEVRON_DOWN />
            </button>
            <Presence when=visible motion=presets::DROPDOWN_PANEL panel_class="pk-dropdown-panel">
                <PanelLinks group />
            </Presence>
        </div>
    }
}

/// Desktop navigation: primary links then the three dropdowns
#[component]
pub fn DesktopNav() -> impl IntoView {
    let container = presets::NAV_CONTAINER;
    let offset = menu::PRIMARY_LINKS.len();

    let links = menu::PRIMARY_LINKS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let motion = presets::desktop_item().at_delay(container.child_delay(i));
            view! { <NavLink label=*label motion /> }
        })
        .collect_view();

    let dropdowns = menu::groups()
        .into_iter()
        .enumerate()
        .map(|(i, group)| {
            let motion = presets::desktop_item().at_delay(container.child_delay(offset + i));
            view! { <Dropdown group motion /> }
        })
        .collect_view();

    view! {
        <nav class="pk-desktop-nav" aria-label="Main">
            {links}
            {dropdowns}
        </nav>
    }
}
