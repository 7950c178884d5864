//! Static HTML for a render tree
//!
//! Used for first paint on the server and by `pksite render`. Motion is
//! written as an inline CSS animation plus `data-*` attributes; the
//! keyframes live in the web crate's stylesheet.

use crate::icons;
use crate::render::{NodeKind, RenderNode};
use pksite_types::{Motion, Transition};
use std::fmt::Write;

const ICON_SIZE: u32 = 16;
const GLYPH_SIZE: u32 = 24;

/// Keyframes name for an enter transition
pub fn enter_keyframes(t: &Transition) -> &'static str {
    if t.slides() {
        "pk-slide-in"
    } else {
        "pk-fade-in"
    }
}

/// CSS `animation` shorthand for an enter transition, `None` for instant ones
pub fn enter_animation(t: &Transition) -> Option<String> {
    if t.duration_ms == 0 {
        return None;
    }
    Some(format!(
        "animation: {} {}ms {} {}ms backwards",
        enter_keyframes(t),
        t.duration_ms,
        t.easing.css(),
        t.delay_ms
    ))
}

/// CSS `animation` shorthand for an exit transition
pub fn exit_animation(t: &Transition) -> String {
    format!(
        "animation: pk-fade-out {}ms {} {}ms forwards",
        t.duration_ms,
        t.easing.css(),
        t.delay_ms
    )
}

/// Inline style for a node's motion (enter animation and hover scale)
pub fn motion_style(motion: &Motion) -> String {
    let mut parts = Vec::new();
    if let Some(animation) = enter_animation(&motion.enter) {
        parts.push(animation);
    }
    if let Some(scale) = motion.hover_scale {
        parts.push(format!("--pk-hover-scale: {}", scale));
    }
    parts.join("; ")
}

/// Escape text for HTML element content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Serialize a tree to HTML
pub fn to_html(node: &RenderNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn motion_attrs(out: &mut String, node: &RenderNode) {
    let Some(motion) = &node.motion else {
        return;
    };
    let style = motion_style(motion);
    if !style.is_empty() {
        let _ = write!(out, r#" style="{}""#, escape(&style));
    }
    if let Some(exit) = &motion.exit {
        let _ = write!(out, r#" data-exit-ms="{}""#, exit.total_ms());
    }
    if let Some(stagger) = motion.stagger_ms {
        let _ = write!(out, r#" data-stagger-ms="{}""#, stagger);
    }
}

fn text(node: &RenderNode) -> String {
    node.text.as_deref().map(escape).unwrap_or_default()
}

fn children(out: &mut String, node: &RenderNode) {
    for child in &node.children {
        write_node(out, child);
    }
}

fn open(out: &mut String, tag: &str, class: &str, extra: &str, node: &RenderNode) {
    let _ = write!(out, r#"<{} class="{}"{}"#, tag, class, extra);
    motion_attrs(out, node);
    out.push('>');
}

fn write_node(out: &mut String, node: &RenderNode) {
    match &node.kind {
        NodeKind::Header => {
            open(out, "header", "pk-header", "", node);
            out.push_str(r#"<div class="pk-container">"#);
            children(out, node);
            out.push_str("</div></header>");
        }
        NodeKind::TopBar => {
            open(out, "div", "pk-topbar", "", node);
            children(out, node);
            out.push_str("</div>");
        }
        NodeKind::Brand => {
            open(out, "div", "pk-brand", "", node);
            children(out, node);
            out.push_str("</div>");
        }
        NodeKind::Logo { src, alt } => {
            let extra = format!(r#" src="{}" alt="{}""#, escape(src), escape(alt));
            open(out, "img", "pk-logo", &extra, node);
        }
        NodeKind::Contact => {
            open(out, "div", "pk-contact", "", node);
            children(out, node);
            out.push_str("</div>");
        }
        NodeKind::ContactLine { icon, href } => {
            let extra = format!(r#" href="{}""#, escape(href));
            open(out, "a", "pk-contact-line", &extra, node);
            out.push_str(&icons::contact(*icon).svg(ICON_SIZE));
            let _ = write!(out, "<span>{}</span></a>", text(node));
        }
        NodeKind::DesktopNav => {
            open(out, "nav", "pk-desktop-nav", r#" aria-label="Main""#, node);
            children(out, node);
            out.push_str("</nav>");
        }
        NodeKind::Link { href } => {
            let class = if node.motion.and_then(|m| m.hover_scale).is_some() {
                "pk-link pk-hover"
            } else {
                "pk-link"
            };
            let extra = format!(r#" href="{}""#, escape(href));
            open(out, "a", class, &extra, node);
            let _ = write!(out, "{}</a>", text(node));
        }
        NodeKind::DropdownTrigger { group } => {
            let extra = format!(r#" data-group="{}""#, group);
            open(out, "div", "pk-dropdown", &extra, node);
            let expanded = !node.children.is_empty();
            let _ = write!(
                out,
                r#"<button type="button" class="pk-trigger pk-hover" aria-haspopup="true" aria-expanded="{}">{}{}</button>"#,
                expanded,
                text(node),
                icons::CHEVRON_DOWN.svg(ICON_SIZE)
            );
            children(out, node);
            out.push_str("</div>");
        }
        NodeKind::DropdownPanel { group } => {
            let extra = format!(r#" data-group="{}" role="menu""#, group);
            open(out, "div", "pk-dropdown-panel", &extra, node);
            children(out, node);
            out.push_str("</div>");
        }
        NodeKind::Hamburger { glyph } => {
            let extra = format!(
                r#" type="button" aria-label="{}" aria-expanded="{}""#,
                glyph.aria_label(),
                matches!(glyph, pksite_types::MenuGlyph::Close)
            );
            open(out, "button", "pk-hamburger", &extra, node);
            out.push_str(&icons::glyph(*glyph).svg(GLYPH_SIZE));
            out.push_str("</button>");
        }
        NodeKind::MobilePanel => {
            open(out, "div", "pk-mobile-panel", "", node);
            children(out, node);
            out.push_str("</div>");
        }
        NodeKind::AccordionSection { group } => {
            let extra = format!(r#" data-group="{}""#, group);
            open(out, "div", "pk-accordion", &extra, node);
            children(out, node);
            out.push_str("</div>");
        }
        NodeKind::AccordionHeader { expanded, .. } => {
            let extra = format!(r#" type="button" aria-expanded="{}""#, expanded);
            open(out, "button", "pk-accordion-header", &extra, node);
            let _ = write!(
                out,
                "<span>{}</span>{}</button>",
                text(node),
                icons::CHEVRON_DOWN.svg(ICON_SIZE)
            );
        }
        NodeKind::AccordionPanel { group } => {
            let extra = format!(r#" data-group="{}""#, group);
            open(out, "div", "pk-accordion-panel", &extra, node);
            children(out, node);
            out.push_str("</div>");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;
    use crate::state::{HeaderAction, HeaderState};
    use pksite_types::{AccordionGroup, GroupId, SiteConfig};

    fn html(state: HeaderState) -> String {
        to_html(&render(&state, &SiteConfig::default()))
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape("Home"), "Home");
    }

    #[test]
    fn test_initial_markup() {
        let out = html(HeaderState::new());
        assert!(out.starts_with(r#"<header class="pk-header">"#));
        assert!(out.ends_with("</header>"));
        assert!(out.contains(r#"alt="CA Firm Logo""#));
        assert!(out.contains(r#"href="mailto:info@yourcafirm.com""#));
        assert!(out.contains(r#"aria-label="Open menu""#));
        assert!(!out.contains("pk-mobile-panel"));
        assert!(!out.contains("pk-dropdown-panel"));
    }

    #[test]
    fn test_ampersand_is_escaped() {
        let out = html(HeaderState::new().apply(HeaderAction::PointerEnter(GroupId::Services)));
        assert!(out.contains("Audit &amp; Assurance"));
        assert!(!out.contains("Audit & Assurance"));
        assert!(out.contains(r#"data-group="services" role="menu""#));
        assert!(out.contains(r#"data-exit-ms="200""#));
    }

    #[test]
    fn test_stagger_written_as_delays() {
        let out = html(HeaderState::new().apply(HeaderAction::PointerEnter(GroupId::Knowledge)));
        assert!(out.contains("animation: pk-slide-in 200ms ease-out 0ms backwards"));
        assert!(out.contains("animation: pk-slide-in 200ms ease-out 100ms backwards"));
    }

    #[test]
    fn test_mobile_markup() {
        let state = HeaderState::new().apply_all([
            HeaderAction::ToggleMenu,
            HeaderAction::ToggleAccordion(AccordionGroup::Knowledge),
        ]);
        let out = html(state);
        assert!(out.contains("pk-mobile-panel"));
        assert!(out.contains(r#"aria-label="Close menu""#));
        assert!(out.contains("Useful Links"));
        assert!(out.contains(r#"<div class="pk-accordion-panel" data-group="knowledge""#));
        assert!(!out.contains(r#"<div class="pk-accordion-panel" data-group="services""#));
    }

    #[test]
    fn test_instant_transition_has_no_animation() {
        let t = Transition::new(pksite_types::Pose::VISIBLE, pksite_types::Pose::VISIBLE, 0);
        assert_eq!(enter_animation(&t), None);
    }

    #[test]
    fn test_exit_animation_uses_preset_easing() {
        assert_eq!(
            exit_animation(&crate::motion::FADE_OUT),
            "animation: pk-fade-out 200ms ease-in-out 0ms forwards"
        );
    }
}
