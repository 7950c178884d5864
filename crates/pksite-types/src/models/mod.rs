//! Data models shared between the reducer, the renderer and the UI

pub mod config;
pub mod menu;
pub mod motion;

pub use config::{BrandConfig, ContactConfig, ServerConfig, SiteConfig};
pub use menu::{AccordionGroup, GroupId, MenuGlyph, MenuGroup, NavLabel};
pub use motion::{Easing, Motion, Pose, Transition};
