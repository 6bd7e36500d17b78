//! Reveal-on-scroll for elements tagged for animation.
//!
//! Three modes, picked once at mount time from what the platform offers:
//! reduced motion shows everything at once, an intersection observer
//! animates elements as they cross into the (bottom-shrunk) viewport, and
//! without one the element top is checked against the viewport on every
//! scroll. Whatever the mode, an element animates at most once.

pub const ANIMATE_CLASS: &str = "animate";

/// Marks elements waiting for the intersection observer.
pub const SCROLL_ANIMATE_CLASS: &str = "scroll-animate";

pub const INTERSECTION_THRESHOLD: f64 = 0.1;

/// The observer's root margin pulls the viewport bottom up by this much.
pub const ROOT_MARGIN_BOTTOM: f64 = 50.0;

/// Without an observer, an element reveals once its top is this far above
/// the viewport bottom.
pub const MANUAL_REVEAL_OFFSET: f64 = 150.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionSupport {
    pub reduced_motion: bool,
    pub intersection_observer: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    Static,
    Intersection,
    ScrollPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Waiting,
    Animated,
    Shown,
}

/// Element geometry relative to the viewport top.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl ElementBox {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Share of the element inside the viewport after the root margin is applied.
pub fn intersection_ratio(element: &ElementBox, viewport_height: f64) -> f64 {
    let root_bottom = viewport_height - ROOT_MARGIN_BOTTOM;
    if element.height <= 0.0 {
        return if element.top >= 0.0 && element.top < root_bottom {
            1.0
        } else {
            0.0
        };
    }
    let visible = (element.top + element.height).min(root_bottom) - element.top.max(0.0);
    (visible / element.height).clamp(0.0, 1.0)
}

#[derive(Debug)]
pub struct ScrollReveal {
    mode: RevealMode,
    elements: Vec<(String, RevealState)>,
}

impl ScrollReveal {
    pub fn mount<I, S>(ids: I, support: MotionSupport) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mode = if support.reduced_motion {
            RevealMode::Static
        } else if support.intersection_observer {
            RevealMode::Intersection
        } else {
            RevealMode::ScrollPosition
        };
        let initial = if mode == RevealMode::Static {
            RevealState::Shown
        } else {
            RevealState::Waiting
        };
        let elements = ids.into_iter().map(|id| (id.into(), initial)).collect();
        Self { mode, elements }
    }

    pub fn mode(&self) -> RevealMode {
        self.mode
    }

    pub fn state(&self, id: &str) -> Option<RevealState> {
        self.elements
            .iter()
            .find(|(element, _)| element == id)
            .map(|(_, state)| *state)
    }

    /// Elements still waiting to animate.
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.elements
            .iter()
            .filter(|(_, state)| *state == RevealState::Waiting)
            .map(|(id, _)| id.as_str())
    }

    /// Checks the given geometry and returns the ids that animate now.
    pub fn on_viewport_change(&mut self, viewport_height: f64, boxes: &[ElementBox]) -> Vec<String> {
        let mode = self.mode;
        let reached = |element: &ElementBox| match mode {
            RevealMode::Static => false,
            RevealMode::Intersection => {
                intersection_ratio(element, viewport_height) >= INTERSECTION_THRESHOLD
            }
            RevealMode::ScrollPosition => element.top < viewport_height - MANUAL_REVEAL_OFFSET,
        };

        let mut revealed = Vec::new();
        for element in boxes.iter().filter(|element| reached(element)) {
            if let Some((id, state)) = self
                .elements
                .iter_mut()
                .find(|(id, state)| *id == element.id && *state == RevealState::Waiting)
            {
                *state = RevealState::Animated;
                revealed.push(id.clone());
            }
        }
        revealed
    }
}
