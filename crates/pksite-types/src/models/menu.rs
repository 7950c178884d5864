use serde::{Deserialize, Serialize};
use std::fmt;

/// Display text of a navigation entry.
///
/// Labels are compile-time constants. `NavLabel::new` is a `const fn` that
/// panics on an empty string, so an empty label in a `const` table fails the
/// build instead of rendering a blank link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NavLabel(&'static str);

impl NavLabel {
    pub const fn new(text: &'static str) -> Self {
        assert!(!text.is_empty(), "navigation labels must not be empty");
        Self(text)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for NavLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for NavLabel {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Identifier of a dropdown group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupId {
    Services,
    Knowledge,
    #[serde(rename = "quicklinks")]
    QuickLinks,
}

impl GroupId {
    /// All groups in desktop display order
    pub fn all() -> &'static [GroupId] {
        &[GroupId::Services, GroupId::Knowledge, GroupId::QuickLinks]
    }

    /// Stable identifier used in URLs, CLI arguments and DOM ids
    pub fn id(&self) -> &'static str {
        match self {
            GroupId::Services => "services",
            GroupId::Knowledge => "knowledge",
            GroupId::QuickLinks => "quicklinks",
        }
    }

    /// Parse from identifier (case-insensitive)
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_lowercase().as_str() {
            "services" => Some(GroupId::Services),
            "knowledge" => Some(GroupId::Knowledge),
            "quicklinks" => Some(GroupId::QuickLinks),
            _ => None,
        }
    }

    /// Mobile accordion for this group, if the group has one
    pub fn accordion(&self) -> Option<AccordionGroup> {
        match self {
            GroupId::Services => Some(AccordionGroup::Services),
            GroupId::Knowledge => Some(AccordionGroup::Knowledge),
            GroupId::QuickLinks => None,
        }
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Groups that have an expandable section in the mobile panel.
///
/// Quick Links is desktop-only, so it is not representable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccordionGroup {
    Services,
    Knowledge,
}

impl AccordionGroup {
    /// All accordion groups in mobile display order
    pub fn all() -> &'static [AccordionGroup] {
        &[AccordionGroup::Services, AccordionGroup::Knowledge]
    }

    /// Dropdown group holding this accordion's links
    pub fn group(&self) -> GroupId {
        match self {
            AccordionGroup::Services => GroupId::Services,
            AccordionGroup::Knowledge => GroupId::Knowledge,
        }
    }

    pub fn id(&self) -> &'static str {
        self.group().id()
    }

    pub fn from_id(id: &str) -> Option<Self> {
        GroupId::from_id(id).and_then(|g| g.accordion())
    }
}

impl fmt::Display for AccordionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Ordered list of links shown under one dropdown trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuGroup {
    pub id: GroupId,
    /// Trigger text ("Services", "Knowledge Bank", ...)
    pub title: NavLabel,
    /// Links in display order
    pub items: &'static [NavLabel],
}

impl MenuGroup {
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.items.iter().map(|l| l.as_str())
    }
}

/// Glyph shown on the hamburger button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuGlyph {
    /// Three bars: the menu is closed and can be opened
    Open,
    /// Cross: the menu is open and can be closed
    Close,
}

impl MenuGlyph {
    pub fn for_menu(open: bool) -> Self {
        if open {
            MenuGlyph::Close
        } else {
            MenuGlyph::Open
        }
    }

    pub fn aria_label(&self) -> &'static str {
        match self {
            MenuGlyph::Open => "Open menu",
            MenuGlyph::Close => "Close menu",
        }
    }
}
