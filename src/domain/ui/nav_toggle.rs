use std::time::Duration;

pub const ACTIVE_CLASS: &str = "active";

/// A click this soon after a touch is the follow-up the browser synthesizes
/// for the same tap.
const GHOST_CLICK_WINDOW: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Click,
    Touch,
}

/// Mobile menu button. Toggling flips `active` on both the button and the menu.
#[derive(Debug, Default)]
pub struct NavToggle {
    active: bool,
    last_touch: Option<Duration>,
}

impl NavToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the new state, or `None` when the event belongs to a touch that
    /// already toggled.
    pub fn activate(&mut self, kind: Activation, at: Duration) -> Option<bool> {
        match kind {
            Activation::Touch => self.last_touch = Some(at),
            Activation::Click => {
                if let Some(touched) = self.last_touch.take() {
                    if at.saturating_sub(touched) <= GHOST_CLICK_WINDOW {
                        return None;
                    }
                }
            }
        }
        self.active = !self.active;
        Some(self.active)
    }

    /// A link inside the menu was followed. Returns whether the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }
}
