//! Pure render function: `HeaderState` + config -> tree of nodes
//!
//! A node that is not visible is not in the tree. Animated nodes carry a
//! `Motion` whose enter delay already includes the parent's stagger.

use crate::menu::{self, PLACEHOLDER_HREF};
use crate::motion;
use crate::state::HeaderState;
use pksite_types::{AccordionGroup, GroupId, MenuGlyph, MenuGroup, Motion, NavLabel, SiteConfig};
use serde::Serialize;

/// Icon drawn before a contact line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactIcon {
    Mail,
    Phone,
}

/// What a node is. Text and children live on `RenderNode`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    Header,
    TopBar,
    Brand,
    Logo { src: String, alt: String },
    Contact,
    ContactLine { icon: ContactIcon, href: String },
    DesktopNav,
    Link { href: &'static str },
    DropdownTrigger { group: GroupId },
    DropdownPanel { group: GroupId },
    Hamburger { glyph: MenuGlyph },
    MobilePanel,
    AccordionSection { group: AccordionGroup },
    AccordionHeader { group: AccordionGroup, expanded: bool },
    AccordionPanel { group: AccordionGroup },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion: Option<Motion>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            text: None,
            motion: None,
            children: Vec::new(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn motion(mut self, motion: Motion) -> Self {
        self.motion = Some(motion);
        self
    }

    pub fn child(mut self, child: RenderNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = RenderNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first, document order
    pub fn iter(&self) -> impl Iterator<Item = &RenderNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    pub fn find(&self, kind: &NodeKind) -> Option<&RenderNode> {
        self.iter().find(|n| &n.kind == kind)
    }

    pub fn contains(&self, kind: &NodeKind) -> bool {
        self.find(kind).is_some()
    }

    /// Text of every link in document order
    pub fn labels(&self) -> Vec<&str> {
        self.iter()
            .filter(|n| matches!(n.kind, NodeKind::Link { .. }))
            .filter_map(|n| n.text.as_deref())
            .collect()
    }

    /// Links of the desktop dropdown panel for `group`, if it is present
    pub fn dropdown_labels(&self, group: GroupId) -> Option<Vec<&str>> {
        self.find(&NodeKind::DropdownPanel { group })
            .map(RenderNode::labels)
    }

    /// Links of the mobile accordion body for `group`, if it is present
    pub fn accordion_labels(&self, group: AccordionGroup) -> Option<Vec<&str>> {
        self.find(&NodeKind::AccordionPanel { group })
            .map(RenderNode::labels)
    }

    pub fn has_mobile_panel(&self) -> bool {
        self.contains(&NodeKind::MobilePanel)
    }

    /// Desktop dropdown panels currently present
    pub fn visible_dropdowns(&self) -> Vec<GroupId> {
        self.iter()
            .filter_map(|n| match n.kind {
                NodeKind::DropdownPanel { group } => Some(group),
                _ => None,
            })
            .collect()
    }

    pub fn glyph(&self) -> Option<MenuGlyph> {
        self.iter().find_map(|n| match n.kind {
            NodeKind::Hamburger { glyph } => Some(glyph),
            _ => None,
        })
    }
}

/// Build the header tree for `state`
pub fn render(state: &HeaderState, config: &SiteConfig) -> RenderNode {
    let top_bar = RenderNode::new(NodeKind::TopBar)
        .child(brand(config))
        .child(desktop_nav(state))
        .child(RenderNode::new(NodeKind::Hamburger {
            glyph: state.glyph(),
        }));

    let mut header = RenderNode::new(NodeKind::Header).child(top_bar);
    if state.mobile_menu_open {
        header = header.child(mobile_panel(state));
    }
    header
}

fn brand(config: &SiteConfig) -> RenderNode {
    let contact = &config.contact;
    RenderNode::new(NodeKind::Brand)
        .child(RenderNode::new(NodeKind::Logo {
            src: config.brand.logo_src.clone(),
            alt: config.brand.logo_alt.clone(),
        }))
        .child(
            RenderNode::new(NodeKind::Contact)
                .child(
                    RenderNode::new(NodeKind::ContactLine {
                        icon: ContactIcon::Mail,
                        href: contact.email_href(),
                    })
                    .text(contact.email.as_str()),
                )
                .child(
                    RenderNode::new(NodeKind::ContactLine {
                        icon: ContactIcon::Phone,
                        href: contact.phone_href(),
                    })
                    .text(contact.phone.as_str()),
                ),
        )
}

fn link(label: NavLabel, motion: Motion) -> RenderNode {
    RenderNode::new(NodeKind::Link {
        href: PLACEHOLDER_HREF,
    })
    .text(label.as_str())
    .motion(motion)
}

/// Links of a group, staggered under `panel`
fn panel_links(group: &MenuGroup, panel: &Motion) -> Vec<RenderNode> {
    group
        .items
        .iter()
        .enumerate()
        .map(|(i, label)| link(*label, motion::DROPDOWN_ITEM.at_delay(panel.child_delay(i))))
        .collect()
}

fn desktop_nav(state: &HeaderState) -> RenderNode {
    let container = motion::NAV_CONTAINER;
    let primary = menu::PRIMARY_LINKS
        .iter()
        .map(|label| (*label, None::<&MenuGroup>));
    let groups = menu::groups().into_iter().map(|g| (g.title, Some(g)));

    let entries = primary.chain(groups).enumerate().map(|(i, (label, group))| {
        let item = motion::desktop_item().at_delay(container.child_delay(i));
        match group {
            None => link(label, item),
            Some(group) => dropdown_trigger(state, group, item),
        }
    });

    RenderNode::new(NodeKind::DesktopNav)
        .motion(container)
        .children(entries)
}

fn dropdown_trigger(state: &HeaderState, group: &MenuGroup, item: Motion) -> RenderNode {
    let mut trigger = RenderNode::new(NodeKind::DropdownTrigger { group: group.id })
        .text(group.title.as_str())
        .motion(item);

    if state.dropdown_visible(group.id) {
        let panel = motion::DROPDOWN_PANEL;
        trigger = trigger.child(
            RenderNode::new(NodeKind::DropdownPanel { group: group.id })
                .motion(panel)
                .children(panel_links(group, &panel)),
        );
    }
    trigger
}

fn mobile_panel(state: &HeaderState) -> RenderNode {
    let container = motion::MOBILE_PANEL;
    let mut index = 0..;
    let mut next_delay = || container.child_delay(index.next().unwrap_or_default());

    let mut entries: Vec<RenderNode> = menu::PRIMARY_LINKS
        .iter()
        .map(|label| link(*label, motion::mobile_link().at_delay(next_delay())))
        .collect();

    for accordion in AccordionGroup::all() {
        entries.push(accordion_section(
            state,
            *accordion,
            motion::NAV_ITEM.at_delay(next_delay()),
        ));
    }

    entries.push(link(
        menu::MOBILE_TRAILING_LINK,
        motion::NAV_ITEM.at_delay(next_delay()),
    ));

    RenderNode::new(NodeKind::MobilePanel)
        .motion(container)
        .children(entries)
}

fn accordion_section(state: &HeaderState, accordion: AccordionGroup, item: Motion) -> RenderNode {
    let group = menu::accordion_group(accordion);
    let expanded = state.accordion_visible(accordion);

    let mut section = RenderNode::new(NodeKind::AccordionSection { group: accordion })
        .motion(item)
        .child(
            RenderNode::new(NodeKind::AccordionHeader {
                group: accordion,
                expanded,
            })
            .text(group.title.as_str()),
        );

    if expanded {
        let panel = motion::DROPDOWN_PANEL;
        section = section.child(
            RenderNode::new(NodeKind::AccordionPanel { group: accordion })
                .motion(panel)
                .children(panel_links(group, &panel)),
        );
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::HeaderAction;

    fn tree(state: HeaderState) -> RenderNode {
        render(&state, &SiteConfig::default())
    }

    #[test]
    fn test_initial_render() {
        let root = tree(HeaderState::new());

        assert!(!root.has_mobile_panel());
        assert!(root.visible_dropdowns().is_empty());
        assert_eq!(root.glyph(), Some(MenuGlyph::Open));
        assert_eq!(
            root.labels(),
            vec!["Home", "About Us", "Our Team"],
            "only the desktop primary links are rendered"
        );
    }

    #[test]
    fn test_brand_uses_config() {
        let root = tree(HeaderState::new());
        let logo = root
            .iter()
            .find_map(|n| match &n.kind {
                NodeKind::Logo { alt, .. } => Some(alt.as_str()),
                _ => None,
            })
            .unwrap();
        assert_eq!(logo, "CA Firm Logo");

        let contact: Vec<_> = root
            .iter()
            .filter(|n| matches!(n.kind, NodeKind::ContactLine { .. }))
            .filter_map(|n| n.text.as_deref())
            .collect();
        assert_eq!(contact, vec!["info@yourcafirm.com", "+91-9876543210"]);
    }

    #[test]
    fn test_each_hovered_group_renders_only_its_panel() {
        for group in GroupId::all() {
            let root = tree(HeaderState::new().apply(HeaderAction::PointerEnter(*group)));
            assert_eq!(root.visible_dropdowns(), vec![*group]);

            let expected: Vec<_> = menu::group(*group).labels().collect();
            assert_eq!(root.dropdown_labels(*group), Some(expected));
        }
    }

    #[test]
    fn test_hover_services_then_knowledge() {
        let services = HeaderState::new().apply(HeaderAction::PointerEnter(GroupId::Services));
        assert_eq!(
            tree(services).dropdown_labels(GroupId::Services),
            Some(vec!["Tax Consulting", "Audit & Assurance", "Company Formation"])
        );

        let knowledge = services.apply(HeaderAction::PointerEnter(GroupId::Knowledge));
        let root = tree(knowledge);
        assert_eq!(knowledge.hovered, Some(GroupId::Knowledge));
        assert_eq!(root.dropdown_labels(GroupId::Services), None);
        assert_eq!(
            root.dropdown_labels(GroupId::Knowledge),
            Some(vec!["Articles", "Case Studies"])
        );
    }

    #[test]
    fn test_leave_removes_panel() {
        let state = HeaderState::new()
            .apply(HeaderAction::PointerEnter(GroupId::QuickLinks))
            .apply(HeaderAction::PointerLeave(GroupId::QuickLinks));
        assert!(tree(state).visible_dropdowns().is_empty());
    }

    #[test]
    fn test_mobile_menu_and_accordion_scenario() {
        let open = HeaderState::new().apply(HeaderAction::ToggleMenu);
        let root = tree(open);
        assert!(root.has_mobile_panel());
        assert_eq!(root.glyph(), Some(MenuGlyph::Close));

        let panel = root.find(&NodeKind::MobilePanel).unwrap();
        assert_eq!(panel.labels(), vec!["Home", "About Us", "Our Team", "Useful Links"]);

        let expanded = open.apply(HeaderAction::ToggleAccordion(AccordionGroup::Services));
        let root = tree(expanded);
        assert!(root.has_mobile_panel());
        assert_eq!(
            root.accordion_labels(AccordionGroup::Services),
            Some(vec!["Tax Consulting", "Audit & Assurance", "Company Formation"])
        );
        assert_eq!(root.accordion_labels(AccordionGroup::Knowledge), None);

        let collapsed = expanded.apply(HeaderAction::ToggleAccordion(AccordionGroup::Services));
        let root = tree(collapsed);
        assert!(root.has_mobile_panel());
        assert_eq!(root.accordion_labels(AccordionGroup::Services), None);
    }

    #[test]
    fn test_both_accordions_can_be_expanded() {
        let state = HeaderState::new().apply_all([
            HeaderAction::ToggleMenu,
            HeaderAction::ToggleAccordion(AccordionGroup::Services),
            HeaderAction::ToggleAccordion(AccordionGroup::Knowledge),
        ]);
        let root = tree(state);
        assert!(root.accordion_labels(AccordionGroup::Services).is_some());
        assert_eq!(
            root.accordion_labels(AccordionGroup::Knowledge),
            Some(vec!["Articles", "Case Studies"])
        );
    }

    #[test]
    fn test_accordion_header_reports_expanded() {
        let state = HeaderState::new().apply_all([
            HeaderAction::ToggleMenu,
            HeaderAction::ToggleAccordion(AccordionGroup::Knowledge),
        ]);
        let root = tree(state);
        assert!(root.contains(&NodeKind::AccordionHeader {
            group: AccordionGroup::Knowledge,
            expanded: true,
        }));
        assert!(root.contains(&NodeKind::AccordionHeader {
            group: AccordionGroup::Services,
            expanded: false,
        }));
    }

    #[test]
    fn test_dropdown_items_are_staggered_in_order() {
        let root = tree(HeaderState::new().apply(HeaderAction::PointerEnter(GroupId::Services)));
        let panel = root
            .find(&NodeKind::DropdownPanel {
                group: GroupId::Services,
            })
            .unwrap();

        let delays: Vec<u32> = panel
            .children
            .iter()
            .map(|n| n.motion.unwrap().enter.delay_ms)
            .collect();
        assert_eq!(delays, vec![0, 100, 200]);
        assert!(panel.motion.unwrap().exit.is_some());
    }

    #[test]
    fn test_desktop_entries_are_staggered() {
        let root = tree(HeaderState::new());
        let nav = root.find(&NodeKind::DesktopNav).unwrap();
        let delays: Vec<u32> = nav
            .children
            .iter()
            .map(|n| n.motion.unwrap().enter.delay_ms)
            .collect();
        assert_eq!(delays, vec![0, 100, 200, 300, 400, 500]);
    }

    #[test]
    fn test_json_shape() {
        let root = tree(HeaderState::new().apply(HeaderAction::PointerEnter(GroupId::Knowledge)));
        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(json["type"], "header");

        let nav = &json["children"][0]["children"][1];
        assert_eq!(nav["type"], "desktop_nav");
        let trigger = &nav["children"][4];
        assert_eq!(trigger["type"], "dropdown_trigger");
        assert_eq!(trigger["group"], "knowledge");
        assert_eq!(trigger["children"][0]["type"], "dropdown_panel");
    }
}
