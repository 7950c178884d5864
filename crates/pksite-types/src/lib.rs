//! pksite-types - Shared data types for pksite
//!
//! This crate contains pure data structures without heavy dependencies.
//! No tokio, no async runtime - just serde-serializable types.
//!
//! Used by:
//! - pksite-core (menu data, reducer, render tree)
//! - pksite-web (Leptos components compiled to WASM)

pub mod models;

pub use models::{
    AccordionGroup, BrandConfig, ContactConfig, Easing, GroupId, MenuGlyph, MenuGroup, Motion,
    NavLabel, Pose, ServerConfig, SiteConfig, Transition,
};
