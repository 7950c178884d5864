//! pksite-core - Core library for pksite
//!
//! Provides the static menu data, the header state reducer, the pure render
//! function and its HTML writer, and site configuration loading.

pub mod config;
pub mod error;
pub mod html;
pub mod icons;
pub mod menu;
pub mod motion;
pub mod render;
pub mod state;

pub use config::{ConfigSource, LoadedConfig};
pub use error::CoreError;
pub use render::{render, NodeKind, RenderNode};
pub use state::{AccordionState, HeaderAction, HeaderState};

// Shared data types live in pksite-types
pub use pksite_types as types;
pub use pksite_types::{AccordionGroup, GroupId, MenuGlyph, MenuGroup, NavLabel, SiteConfig};
