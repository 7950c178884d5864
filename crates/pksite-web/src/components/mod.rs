//! Leptos UI components

mod contact;
mod dropdown;
mod header;
mod icon;
mod mobile;
mod presence;

pub use contact::ContactDetails;
pub use dropdown::{DesktopNav, Dropdown, NavLink, PanelLinks};
pub use header::Header;
pub use icon::SvgIcon;
pub use mobile::{AccordionSection, HamburgerButton, MobileMenu};
pub use presence::Presence;
