//! Inline SVG icons (Lucide-style, 24x24 viewBox, stroked)
//!
//! Shared by the static HTML writer and the Leptos components so both draw
//! identical markup.

use crate::render::ContactIcon;
use pksite_types::MenuGlyph;

/// SVG child elements of one icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub name: &'static str,
    pub body: &'static str,
}

pub const MAIL: Icon = Icon {
    name: "mail",
    body: r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
};

pub const PHONE: Icon = Icon {
    name: "phone",
    body: r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#,
};

pub const MENU: Icon = Icon {
    name: "menu",
    body: r#"<line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="18" y2="18"/>"#,
};

pub const CLOSE: Icon = Icon {
    name: "x",
    body: r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
};

pub const CHEVRON_DOWN: Icon = Icon {
    name: "chevron-down",
    body: r#"<path d="m6 9 6 6 6-6"/>"#,
};

impl Icon {
    /// Complete `<svg>` element at `size` pixels
    pub fn svg(&self, size: u32) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="pk-icon pk-icon-{}" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{}</svg>"#,
            self.name, self.body
        )
    }
}

pub fn contact(icon: ContactIcon) -> Icon {
    match icon {
        ContactIcon::Mail => MAIL,
        ContactIcon::Phone => PHONE,
    }
}

pub fn glyph(glyph: MenuGlyph) -> Icon {
    match glyph {
        MenuGlyph::Open => MENU,
        MenuGlyph::Close => CLOSE,
    }
}
