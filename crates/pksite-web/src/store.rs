//! Header state shared by all header components

use leptos::prelude::*;
use pksite_core::{AccordionGroup, GroupId, HeaderAction, HeaderState, MenuGlyph};

/// Reactive wrapper around the `HeaderState` reducer
#[derive(Clone, Copy)]
pub struct HeaderStore {
    state: RwSignal<HeaderState>,
}

impl HeaderStore {
    pub fn new() -> Self {
        Self::with_state(HeaderState::new())
    }

    pub fn with_state(state: HeaderState) -> Self {
        Self {
            state: RwSignal::new(state),
        }
    }

    /// Apply one user input. Presence animations read the new state on the
    /// next reactive tick; nothing here waits for them.
    pub fn dispatch(&self, action: HeaderAction) {
        self.state.update(|state| *state = state.apply(action));
    }

    /// Snapshot of the current state
    pub fn state(&self) -> HeaderState {
        self.state.get()
    }

    pub fn menu_open(&self) -> bool {
        self.state.with(|s| s.mobile_menu_open)
    }

    pub fn glyph(&self) -> MenuGlyph {
        self.state.with(|s| s.glyph())
    }

    pub fn dropdown_visible(&self, group: GroupId) -> bool {
        self.state.with(|s| s.dropdown_visible(group))
    }

    pub fn accordion_visible(&self, group: AccordionGroup) -> bool {
        self.state.with(|s| s.accordion_visible(group))
    }
}

impl Default for HeaderStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Provides a fresh `HeaderStore` to its children
#[component]
pub fn HeaderProvider(children: Children) -> impl IntoView {
    provide_context(HeaderStore::new());
    children()
}

/// Hook to access the header store
pub fn use_header() -> HeaderStore {
    expect_context::<HeaderStore>()
}
