//! Mount/unmount wrapper with enter and exit animations

use leptos::prelude::*;
use pksite_core::html::{exit_animation, motion_style};
use pksite_types::Motion;
use std::time::Duration;

/// Counts changes of a visibility signal. A scheduled unmount holds the
/// ticket it was issued and only runs while that ticket is still current.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Generation(u64);

impl Generation {
    /// Record a change and return its ticket
    pub(crate) fn bump(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub(crate) fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// Renders `children` while `when` is true.
///
/// Entering plays `motion.enter` via CSS. Leaving plays `motion.exit` and
/// unmounts once it has finished; if `when` turns true again first, the
/// pending unmount is dropped. The caller's state never waits on this.
#[component]
pub fn Presence(
    #[prop(into)] when: Signal<bool>,
    motion: Motion,
    /// Class of the wrapping element
    #[prop(into)]
    panel_class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let mounted = RwSignal::new(when.get_untracked());
    let exiting = RwSignal::new(false);
    let generation = StoredValue::new(Generation::default());

    // The timeout path needs a browser window; `Generation` carries the
    // logic that decides whether a pending unmount still applies.
    Effect::new(move |_| {
        let visible = when.get();
        let mut next = generation.get_value();
        let current = next.bump();
        generation.set_value(next);

        if visible {
            exiting.set(false);
            mounted.set(true);
        } else if mounted.get_untracked() {
            match motion.exit {
                Some(exit) => {
                    exiting.set(true);
                    set_timeout(
                        move || {
                            if generation.get_value().is_current(current) {
                                mounted.set(false);
                                exiting.set(false);
                            }
                        },
                        Duration::from_millis(u64::from(exit.total_ms())),
                    );
                }
                None => mounted.set(false),
            }
        }
    });

    let style = move || {
        if exiting.get() {
            motion.exit.map(|t| exit_animation(&t)).unwrap_or_default()
        } else {
            motion_style(&motion)
        }
    };

    view! {
        <Show when=move || mounted.get()>
            <div class=panel_class.clone() style=style>
                {children()}
            </div>
        </Show>
    }
}
