//! Declarative animation descriptors
//!
//! These carry no behaviour. A presentation layer (CSS keyframes in the web
//! crate, `data-*` attributes in the static HTML writer) interprets them.

use serde::{Deserialize, Serialize};

/// Easing curve, named after the CSS keyword it maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// Visual pose at one end of a transition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub opacity: f32,
    /// Vertical offset in pixels
    pub y: f32,
}

impl Pose {
    pub const VISIBLE: Pose = Pose { opacity: 1.0, y: 0.0 };
    pub const HIDDEN: Pose = Pose { opacity: 0.0, y: 0.0 };
    /// Hidden and lifted 10px, used by sliding entries
    pub const RAISED: Pose = Pose {
        opacity: 0.0,
        y: -10.0,
    };
}

/// One timed change between two poses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub from: Pose,
    pub to: Pose,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(from: Pose, to: Pose, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms,
            delay_ms: 0,
            easing: Easing::EaseOut,
        }
    }

    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Same transition starting `delay_ms` later
    pub fn delayed(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Delay plus duration
    pub fn total_ms(&self) -> u32 {
        self.delay_ms + self.duration_ms
    }

    /// Whether the transition moves vertically (slide) or only fades
    pub fn slides(&self) -> bool {
        self.from.y != self.to.y
    }
}

/// Animation metadata attached to a render node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    /// Played when the node enters the tree
    pub enter: Transition,
    /// Played when the node leaves the tree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit: Option<Transition>,
    /// Delay added per child, in list order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger_ms: Option<u32>,
    /// Scale applied while the pointer is over the node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_scale: Option<f32>,
}

impl Motion {
    pub const fn enter(enter: Transition) -> Self {
        Self {
            enter,
            exit: None,
            stagger_ms: None,
            hover_scale: None,
        }
    }

    pub const fn with_exit(mut self, exit: Transition) -> Self {
        self.exit = Some(exit);
        self
    }

    pub const fn with_stagger(mut self, stagger_ms: u32) -> Self {
        self.stagger_ms = Some(stagger_ms);
        self
    }

    pub const fn with_hover_scale(mut self, scale: f32) -> Self {
        self.hover_scale = Some(scale);
        self
    }

    /// Enter delay of the child at `index` under a parent with this motion
    pub fn child_delay(&self, index: usize) -> u32 {
        let step = self.stagger_ms.unwrap_or(0);
        self.enter.delay_ms + step * index as u32
    }

    /// Copy of this motion with its enter transition shifted to `delay_ms`
    pub fn at_delay(mut self, delay_ms: u32) -> Self {
        self.enter = self.enter.delayed(delay_ms);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_delay_staggers_in_order() {
        let parent = Motion::enter(Transition::new(Pose::HIDDEN, Pose::VISIBLE, 200))
            .with_stagger(100)
            .at_delay(50);

        assert_eq!(parent.child_delay(0), 50);
        assert_eq!(parent.child_delay(1), 150);
        assert_eq!(parent.child_delay(2), 250);
    }

    #[test]
    fn test_child_delay_without_stagger() {
        let parent = Motion::enter(Transition::new(Pose::HIDDEN, Pose::VISIBLE, 200));
        assert_eq!(parent.child_delay(3), 0);
    }

    #[test]
    fn test_transition_total_and_slide() {
        let t = Transition::new(Pose::RAISED, Pose::VISIBLE, 300).delayed(100);
        assert_eq!(t.total_ms(), 400);
        assert!(t.slides());
        assert!(!Transition::new(Pose::VISIBLE, Pose::HIDDEN, 200).slides());
    }

    #[test]
    fn test_motion_json_skips_empty_fields() {
        let motion = Motion::enter(Transition::new(Pose::HIDDEN, Pose::VISIBLE, 200));
        let json = serde_json::to_value(motion).unwrap();
        assert!(json.get("exit").is_none());
        assert!(json.get("hover_scale").is_none());
        assert_eq!(json["enter"]["easing"], "ease-out");
    }

    #[test]
    fn test_with_easing() {
        let t = Transition::new(Pose::VISIBLE, Pose::HIDDEN, 200).with_easing(Easing::EaseInOut);
        assert_eq!(t.easing.css(), "ease-in-out");
        assert_eq!(serde_json::to_value(t).unwrap()["easing"], "ease-in-out");
    }
}
