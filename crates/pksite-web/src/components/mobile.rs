//! Hamburger button, mobile panel and its accordion sections

use leptos::prelude::*;
use pksite_core::html::motion_style;
use pksite_core::menu::{self, PLACEHOLDER_HREF};
use pksite_core::motion as presets;
use pksite_core::{icons, AccordionGroup, HeaderAction};
use pksite_types::Motion;

use super::{PanelLinks, Presence, SvgIcon};
use crate::store::use_header;

/// Toggles the mobile panel; the glyph follows the menu state
#[component]
pub fn HamburgerButton() -> impl IntoView {
    let store = use_header();

    view! {
        <button
            type="button"
            class="pk-hamburger"
            aria-label=move || store.glyph().aria_label()
            aria-expanded=move || store.menu_open().to_string()
            on:click=move |_| store.dispatch(HeaderAction::ToggleMenu)
        >
            {move || view! { <SvgIcon icon=icons::glyph(store.glyph()) size=24 /> }}
        </button>
    }
}

/// Expandable group inside the mobile panel. Other sections are untouched
/// when this one toggles.
#[component]
pub fn AccordionSection(accordion: AccordionGroup, motion: Motion) -> impl IntoView {
    let store = use_header();
    let group = menu::accordion_group(accordion);
    let expanded = Signal::derive(move || store.accordion_visible(accordion));

    view! {
        <div class="pk-accordion" data-group=accordion.id() style=motion_style(&motion)>
            <button
                type="button"
                class="pk-accordion-header"
                aria-expanded=move || expanded.get().to_string()
                on:click=move |_| store.dispatch(HeaderAction::ToggleAccordion(accordion))
            >
                <span>{group.title.as_str()}</span>
                <SvgIcon icon=icons::CHEVRON_DOWN />
            </button>
            <Presence when=expanded motion=presets::DROPDOWN_PANEL panel_class="pk-accordion-panel">
                <PanelLinks group />
            </Presence>
        </div>
    }
}

/// Primary links, accordion sections and the trailing link, staggered
fn mobile_entries() -> impl IntoView {
    let container = presets::MOBILE_PANEL;
    let mut index = 0..;
    let mut next = move || container.child_delay(index.next().unwrap_or_default());

    let links = menu::PRIMARY_LINKS
        .iter()
        .map(|label| {
            let style = motion_style(&presets::mobile_link().at_delay(next()));
            view! {
                <a class="pk-link pk-hover" href=PLACEHOLDER_HREF style=style>
                    {label.as_str()}
                </a>
            }
        })
        .collect_view();

    let sections = AccordionGroup::all()
        .iter()
        .map(|accordion| {
            let motion = presets::NAV_ITEM.at_delay(next());
            view! { <AccordionSection accordion=*accordion motion /> }
        })
        .collect_view();

    let trailing_style = motion_style(&presets::NAV_ITEM.at_delay(next()));

    view! {
        {links}
        {sections}
        <a class="pk-link" href=PLACEHOLDER_HREF style=trailing_style>
            {menu::MOBILE_TRAILING_LINK.as_str()}
        </a>
    }
}

/// Overlay panel for narrow viewports
#[component]
pub fn MobileMenu() -> impl IntoView {
    let store = use_header();
    let open = Signal::derive(move || store.menu_open());

    view! {
        <Presence when=open motion=presets::MOBILE_PANEL panel_class="pk-mobile-panel">
            {mobile_entries()}
        </Presence>
    }
}
