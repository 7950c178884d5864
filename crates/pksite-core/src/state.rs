//! Header visibility state and its transitions
//!
//! `HeaderState` is a plain value. Every transition is total and touches
//! exactly one slot, so the UI layer can keep it in a single signal and the
//! tests can drive it without a DOM.

use crate::error::CoreError;
use crate::menu::parse_group;
use pksite_types::{AccordionGroup, GroupId, MenuGlyph};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Expanded flags of the mobile accordion sections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccordionState {
    pub services: bool,
    pub knowledge: bool,
}

impl AccordionState {
    pub fn is_open(&self, group: AccordionGroup) -> bool {
        match group {
            AccordionGroup::Services => self.services,
            AccordionGroup::Knowledge => self.knowledge,
        }
    }

    fn slot(&mut self, group: AccordionGroup) -> &mut bool {
        match group {
            AccordionGroup::Services => &mut self.services,
            AccordionGroup::Knowledge => &mut self.knowledge,
        }
    }
}

/// Everything the header needs to decide which panels are present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeaderState {
    /// Mobile overlay panel
    pub mobile_menu_open: bool,
    /// Desktop dropdown under the pointer, if any
    pub hovered: Option<GroupId>,
    pub accordion: AccordionState,
}

impl HeaderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the mobile menu. Accordion and hover slots are left alone.
    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Pointer entered a dropdown trigger; replaces any other hovered group
    pub fn set_hovered(&mut self, group: GroupId) {
        self.hovered = Some(group);
    }

    pub fn clear_hovered(&mut self) {
        self.hovered = None;
    }

    /// Invert one accordion section, never the other
    pub fn toggle_accordion(&mut self, group: AccordionGroup) {
        let slot = self.accordion.slot(group);
        *slot = !*slot;
    }

    /// Reducer entry point
    pub fn apply(mut self, action: HeaderAction) -> Self {
        match action {
            HeaderAction::ToggleMenu => self.toggle_menu(),
            HeaderAction::PointerEnter(group) => self.set_hovered(group),
            // Leaving any trigger clears the hover, even if another group
            // was entered in between.
            HeaderAction::PointerLeave(_) => self.clear_hovered(),
            HeaderAction::ToggleAccordion(group) => self.toggle_accordion(group),
        }
        trace!(?action, state = ?self, "header action applied");
        self
    }

    /// Apply a sequence of actions in order
    pub fn apply_all<I>(self, actions: I) -> Self
    where
        I: IntoIterator<Item = HeaderAction>,
    {
        actions.into_iter().fold(self, HeaderState::apply)
    }

    /// Whether the desktop panel of `group` is present
    pub fn dropdown_visible(&self, group: GroupId) -> bool {
        self.hovered == Some(group)
    }

    /// Whether an accordion body is present. Accordion bodies live inside the
    /// mobile panel, so a closed menu hides them regardless of their flag.
    pub fn accordion_visible(&self, group: AccordionGroup) -> bool {
        self.mobile_menu_open && self.accordion.is_open(group)
    }

    pub fn glyph(&self) -> MenuGlyph {
        MenuGlyph::for_menu(self.mobile_menu_open)
    }
}

/// One discrete user input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "group", rename_all = "snake_case")]
pub enum HeaderAction {
    /// Hamburger button activated
    ToggleMenu,
    /// Pointer entered a desktop dropdown trigger region
    PointerEnter(GroupId),
    /// Pointer left a desktop dropdown trigger region
    PointerLeave(GroupId),
    /// Mobile accordion header tapped
    ToggleAccordion(AccordionGroup),
}

/// Textual form: `menu`, `enter:<group>`, `leave:<group>`, `accordion:<group>`
impl FromStr for HeaderAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let unknown = || CoreError::UnknownAction {
            value: s.to_string(),
        };

        let (verb, arg) = match s.split_once(':') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (s, None),
        };

        let group = |arg: Option<&str>| arg.ok_or_else(unknown).and_then(parse_group);

        match (verb.to_lowercase().as_str(), arg) {
            ("menu", None) => Ok(HeaderAction::ToggleMenu),
            ("enter", arg) => Ok(HeaderAction::PointerEnter(group(arg)?)),
            ("leave", arg) => Ok(HeaderAction::PointerLeave(group(arg)?)),
            ("accordion", arg) => {
                let g = group(arg)?;
                g.accordion()
                    .map(HeaderAction::ToggleAccordion)
                    .ok_or_else(|| CoreError::UnknownGroup {
                        value: g.id().to_string(),
                    })
            }
            _ => Err(unknown()),
        }
    }
}

impl fmt::Display for HeaderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderAction::ToggleMenu => write!(f, "menu"),
            HeaderAction::PointerEnter(g) => write!(f, "enter:{}", g),
            HeaderAction::PointerLeave(g) => write!(f, "leave:{}", g),
            HeaderAction::ToggleAccordion(g) => write!(f, "accordion:{}", g),
        }
    }
}
