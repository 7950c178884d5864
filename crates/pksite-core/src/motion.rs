//! Motion presets for header elements
//!
//! Timings: top-level entries slide down over 300ms, dropdown entries over
//! 200ms, both staggered by 100ms. Dropdown containers fade out in 200ms.

use pksite_types::{Easing, Motion, Pose, Transition};

pub const STAGGER_MS: u32 = 100;
pub const DESKTOP_HOVER_SCALE: f32 = 1.05;
pub const MOBILE_HOVER_SCALE: f32 = 1.03;

/// Fade out used by every dismissible container
pub const FADE_OUT: Transition =
    Transition::new(Pose::VISIBLE, Pose::HIDDEN, 200).with_easing(Easing::EaseInOut);

/// Container whose children enter one after another (desktop bar, mobile panel)
pub const NAV_CONTAINER: Motion =
    Motion::enter(Transition::new(Pose::VISIBLE, Pose::VISIBLE, 0)).with_stagger(STAGGER_MS);

/// Top-level entry: fade in while sliding down 10px
pub const NAV_ITEM: Motion = Motion::enter(Transition::new(Pose::RAISED, Pose::VISIBLE, 300));

/// Dropdown panel and accordion body: fade in, stagger children, fade out
pub const DROPDOWN_PANEL: Motion = Motion::enter(Transition::new(Pose::HIDDEN, Pose::VISIBLE, 200))
    .with_exit(FADE_OUT)
    .with_stagger(STAGGER_MS);

/// Link inside a dropdown panel
pub const DROPDOWN_ITEM: Motion =
    Motion::enter(Transition::new(Pose::RAISED, Pose::VISIBLE, 200));

/// Mobile panel: staggers its entries and fades out when closed
pub const MOBILE_PANEL: Motion = NAV_CONTAINER.with_exit(FADE_OUT);

/// Desktop link or trigger
pub fn desktop_item() -> Motion {
    NAV_ITEM.with_hover_scale(DESKTOP_HOVER_SCALE)
}

/// Mobile primary link
pub fn mobile_link() -> Motion {
    NAV_ITEM.with_hover_scale(MOBILE_HOVER_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropdown_panel_has_exit() {
        let exit = DROPDOWN_PANEL.exit.unwrap();
        assert_eq!(exit.duration_ms, 200);
        assert_eq!(exit.to.opacity, 0.0);
    }

    #[test]
    fn test_exits_ease_in_out_entries_ease_out() {
        for exit in [DROPDOWN_PANEL.exit, MOBILE_PANEL.exit] {
            assert_eq!(exit.map(|t| t.easing), Some(Easing::EaseInOut));
        }
        assert_eq!(NAV_ITEM.enter.easing, Easing::EaseOut);
        assert_eq!(DROPDOWN_ITEM.enter.easing, Easing::EaseOut);
    }

    #[test]
    fn test_nav_item_slides() {
        assert!(NAV_ITEM.enter.slides());
        assert_eq!(NAV_ITEM.enter.duration_ms, 300);
        assert!(!DROPDOWN_PANEL.enter.slides());
    }

    #[test]
    fn test_hover_scales() {
        assert_eq!(desktop_item().hover_scale, Some(1.05));
        assert_eq!(mobile_link().hover_scale, Some(1.03));
        assert_eq!(DROPDOWN_ITEM.hover_scale, None);
    }
}
