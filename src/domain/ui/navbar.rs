/// Scroll offset past which the navbar turns translucent
pub const SCROLLED_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub backdrop_filter: &'static str,
}

pub const RESTING_STYLE: NavbarStyle = NavbarStyle {
    background: "#ffffff",
    backdrop_filter: "none",
};

pub const SCROLLED_STYLE: NavbarStyle = NavbarStyle {
    background: "rgba(255, 255, 255, 0.95)",
    backdrop_filter: "blur(10px)",
};

#[derive(Debug, Default)]
pub struct NavbarScroll {
    scrolled: bool,
}

impl NavbarScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the style to apply when it changed.
    pub fn on_scroll(&mut self, offset: f64) -> Option<NavbarStyle> {
        let scrolled = offset > SCROLLED_THRESHOLD;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(if scrolled { SCROLLED_STYLE } else { RESTING_STYLE })
    }
}
