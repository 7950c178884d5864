//! Static navigation data
//!
//! Order in every list is display order.

use crate::error::CoreError;
use pksite_types::{AccordionGroup, GroupId, MenuGroup, NavLabel};

/// Links shown first in both the desktop bar and the mobile panel
pub const PRIMARY_LINKS: &[NavLabel] = &[
    NavLabel::new("Home"),
    NavLabel::new("About Us"),
    NavLabel::new("Our Team"),
];

pub const SERVICES: MenuGroup = MenuGroup {
    id: GroupId::Services,
    title: NavLabel::new("Services"),
    items: &[
        NavLabel::new("Tax Consulting"),
        NavLabel::new("Audit & Assurance"),
        NavLabel::new("Company Formation"),
    ],
};

pub const KNOWLEDGE: MenuGroup = MenuGroup {
    id: GroupId::Knowledge,
    title: NavLabel::new("Knowledge Bank"),
    items: &[NavLabel::new("Articles"), NavLabel::new("Case Studies")],
};

pub const QUICK_LINKS: MenuGroup = MenuGroup {
    id: GroupId::QuickLinks,
    title: NavLabel::new("Quick Links"),
    items: &[NavLabel::new("Careers"), NavLabel::new("Contact Us")],
};

/// Standalone link at the bottom of the mobile panel, outside any group
pub const MOBILE_TRAILING_LINK: NavLabel = NavLabel::new("Useful Links");

/// Placeholder target for every link; real destinations come from the host site
pub const PLACEHOLDER_HREF: &str = "#";

/// Dropdown groups in desktop display order
pub fn groups() -> [&'static MenuGroup; 3] {
    [&SERVICES, &KNOWLEDGE, &QUICK_LINKS]
}

/// Menu data for a dropdown group
pub fn group(id: GroupId) -> &'static MenuGroup {
    match id {
        GroupId::Services => &SERVICES,
        GroupId::Knowledge => &KNOWLEDGE,
        GroupId::QuickLinks => &QUICK_LINKS,
    }
}

/// Menu data behind a mobile accordion section
pub fn accordion_group(accordion: AccordionGroup) -> &'static MenuGroup {
    group(accordion.group())
}

/// Parse a group identifier from user input
pub fn parse_group(value: &str) -> Result<GroupId, CoreError> {
    GroupId::from_id(value).ok_or_else(|| CoreError::UnknownGroup {
        value: value.to_string(),
    })
}

/// Parse an accordion identifier; `quicklinks` has no accordion
pub fn parse_accordion(value: &str) -> Result<AccordionGroup, CoreError> {
    AccordionGroup::from_id(value).ok_or_else(|| CoreError::UnknownGroup {
        value: value.to_string(),
    })
}
