//! Output helpers for the `render` and `menu` commands

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use pksite_core::{html, menu, render, HeaderAction, HeaderState, RenderNode};
use pksite_types::SiteConfig;

/// State reached by replaying `actions` from the initial state
pub fn replay(actions: &[HeaderAction]) -> HeaderState {
    HeaderState::new().apply_all(actions.iter().copied())
}

/// Render tree for the given actions, as HTML or pretty JSON
pub fn render_output(config: &SiteConfig, actions: &[HeaderAction], json: bool) -> Result<String> {
    let state = replay(actions);
    let tree: RenderNode = render(&state, config);

    if json {
        let value = serde_json::json!({
            "state": state,
            "tree": tree,
        });
        serde_json::to_string_pretty(&value).context("Failed to serialize render tree")
    } else {
        Ok(html::to_html(&tree))
    }
}

/// Menu groups as a table: one row per link, in display order
pub fn format_menu_table(no_color: bool) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let headers = ["Section", "Id", "Position", "Label"];
    if no_color {
        table.set_header(headers.to_vec());
    } else {
        table.set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    }

    for (i, label) in menu::PRIMARY_LINKS.iter().enumerate() {
        table.add_row(vec![
            "Primary".to_string(),
            "-".to_string(),
            (i + 1).to_string(),
            label.to_string(),
        ]);
    }

    for group in menu::groups() {
        for (i, label) in group.items.iter().enumerate() {
            table.add_row(vec![
                group.title.to_string(),
                group.id.to_string(),
                (i + 1).to_string(),
                label.to_string(),
            ]);
        }
    }

    table.add_row(vec![
        "Mobile only".to_string(),
        "-".to_string(),
        "1".to_string(),
        menu::MOBILE_TRAILING_LINK.to_string(),
    ]);

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pksite_core::{AccordionGroup, GroupId};

    #[test]
    fn test_replay_applies_in_order() {
        let state = replay(&[
            HeaderAction::PointerEnter(GroupId::Services),
            HeaderAction::PointerEnter(GroupId::Knowledge),
            HeaderAction::ToggleMenu,
            HeaderAction::ToggleAccordion(AccordionGroup::Services),
        ]);
        assert_eq!(state.hovered, Some(GroupId::Knowledge));
        assert!(state.mobile_menu_open);
        assert!(state.accordion.services);
        assert!(!state.accordion.knowledge);
    }

    #[test]
    fn test_render_output_html() {
        let out =
            render_output(&SiteConfig::default(), &[HeaderAction::ToggleMenu], false).unwrap();
        assert!(out.starts_with("<header"));
        assert!(out.contains("Useful Links"));
    }

    #[test]
    fn test_render_output_json() {
        let out = render_output(
            &SiteConfig::default(),
            &[HeaderAction::PointerEnter(GroupId::QuickLinks)],
            true,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["state"]["hovered"], "quicklinks");
        assert_eq!(value["tree"]["type"], "header");
    }

    #[test]
    fn test_menu_table_lists_every_label() {
        let table = format_menu_table(true);
        for label in ["Home", "Tax Consulting", "Case Studies", "Contact Us", "Useful Links"] {
            assert!(table.contains(label), "missing {}", label);
        }
        assert!(table.contains("quicklinks"));
    }
}
