//! Page-level wiring for the UI affordances.
//!
//! `PageController::mount` looks at which elements the page actually has and
//! sets up only the affordances whose elements are all present; the rest are
//! skipped without error. Afterwards every browser event goes through
//! `dispatch`, which returns the DOM changes to apply.

use super::back_to_top::{self, BackToTop, ScrollToTop};
use super::modal::{CV_URL, CloseTrigger, CvModal, ModalView};
use super::nav_toggle::{self, Activation, NavToggle};
use super::navbar::{NavbarScroll, NavbarStyle};
use super::scroll_reveal::{self, ElementBox, MotionSupport, RevealMode, ScrollReveal};
use super::typing::TypingEffect;
use futures_util::Stream;
use std::collections::HashSet;
use std::time::Duration;

pub mod ids {
    pub const NAV_TOGGLE: &str = "nav-toggle";
    pub const NAV_MENU: &str = "nav-menu";
    pub const NAVBAR: &str = "navbar";
    pub const BACK_TO_TOP: &str = "back-to-top";
    pub const CV_MODAL: &str = "cv-modal";
    pub const CV_IFRAME: &str = "cv-iframe";
    pub const CV_DOWNLOAD: &str = "cv-download";
    pub const CV_CLOSE: &str = "cv-close";
    pub const TYPING_TEXT: &str = "typing-text";
}

/// The elements present in the page markup.
#[derive(Debug, Default, Clone)]
pub struct PageElements {
    present: HashSet<String>,
    animated: Vec<String>,
    typing_text: Option<String>,
}

impl PageElements {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, id: &str) -> Self {
        self.present.insert(id.to_string());
        self
    }

    /// An element tagged for scroll reveal.
    #[must_use]
    pub fn with_animated(mut self, id: &str) -> Self {
        self.present.insert(id.to_string());
        self.animated.push(id.to_string());
        self
    }

    #[must_use]
    pub fn with_typing_text(mut self, text: &str) -> Self {
        self.present.insert(ids::TYPING_TEXT.to_string());
        self.typing_text = Some(text.to_string());
        self
    }

    fn has(&self, id: &str) -> bool {
        self.present.contains(id)
    }

    fn has_all(&self, wanted: &[&str]) -> bool {
        wanted.iter().all(|id| self.has(id))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub offset: f64,
    pub height: f64,
    pub boxes: Vec<ElementBox>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Load(Viewport),
    Scroll(Viewport),
    /// Animation frame callback, timestamped from page load.
    Frame(Duration),
    NavToggle(Activation, Duration),
    MenuLinkClick,
    /// In-page link such as `#projects`.
    AnchorClick(String),
    BackToTopClick,
    CvDownloadClick,
    CvCloseClick,
    WindowClick { on_backdrop: bool },
    KeyDown(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DomEffect {
    SetClass {
        id: String,
        class: &'static str,
        on: bool,
    },
    ScrollTo(f64),
    ScrollIntoView(String),
    Modal(ModalView),
    Navbar(NavbarStyle),
}

fn set_class(id: &str, class: &'static str, on: bool) -> DomEffect {
    DomEffect::SetClass {
        id: id.to_string(),
        class,
        on,
    }
}

#[derive(Debug)]
pub struct PageController {
    present: HashSet<String>,
    nav: Option<NavToggle>,
    navbar: Option<NavbarScroll>,
    back_to_top: Option<BackToTop>,
    scrolling: Option<ScrollToTop>,
    modal: Option<CvModal>,
    modal_close_wired: bool,
    reveal: ScrollReveal,
    typing: Option<TypingEffect>,
    scroll_offset: f64,
}

impl PageController {
    pub fn mount(elements: &PageElements, support: MotionSupport) -> Self {
        let nav = elements
            .has_all(&[ids::NAV_TOGGLE, ids::NAV_MENU])
            .then(NavToggle::new);
        let modal = elements
            .has_all(&[ids::CV_MODAL, ids::CV_IFRAME, ids::CV_DOWNLOAD])
            .then(|| CvModal::new(CV_URL));
        let typing = elements.typing_text.as_deref().map(TypingEffect::new);

        if nav.is_none() {
            tracing::debug!("Navigation toggle elements missing, skipping");
        }
        if modal.is_none() {
            tracing::debug!("CV modal elements missing, skipping");
        }

        Self {
            present: elements.present.clone(),
            nav,
            navbar: elements.has(ids::NAVBAR).then(NavbarScroll::new),
            back_to_top: elements.has(ids::BACK_TO_TOP).then(BackToTop::new),
            scrolling: None,
            modal_close_wired: modal.is_some() && elements.has(ids::CV_CLOSE),
            modal,
            reveal: ScrollReveal::mount(elements.animated.iter().cloned(), support),
            typing,
            scroll_offset: 0.0,
        }
    }

    pub fn nav(&self) -> Option<&NavToggle> {
        self.nav.as_ref()
    }

    pub fn modal(&self) -> Option<&CvModal> {
        self.modal.as_ref()
    }

    pub fn reveal(&self) -> &ScrollReveal {
        &self.reveal
    }

    /// The typing effect for this page load, handed out once.
    pub fn start_typing(&mut self) -> Option<impl Stream<Item = String> + Send + 'static> {
        self.typing.as_mut()?.start()
    }

    pub fn dispatch(&mut self, event: PageEvent) -> Vec<DomEffect> {
        match event {
            PageEvent::Load(viewport) => {
                let mut effects = Vec::new();
                if self.reveal.mode() == RevealMode::Intersection {
                    effects.extend(
                        self.reveal
                            .pending()
                            .map(|id| set_class(id, scroll_reveal::SCROLL_ANIMATE_CLASS, true)),
                    );
                }
                effects.extend(self.on_viewport(&viewport));
                effects
            }
            PageEvent::Scroll(viewport) => self.on_viewport(&viewport),
            PageEvent::Frame(now) => self.on_frame(now),
            PageEvent::NavToggle(kind, at) => {
                let Some(active) = self.nav.as_mut().and_then(|nav| nav.activate(kind, at)) else {
                    return Vec::new();
                };
                vec![
                    set_class(ids::NAV_TOGGLE, nav_toggle::ACTIVE_CLASS, active),
                    set_class(ids::NAV_MENU, nav_toggle::ACTIVE_CLASS, active),
                ]
            }
            PageEvent::MenuLinkClick => {
                if !self.nav.as_mut().is_some_and(NavToggle::close) {
                    return Vec::new();
                }
                vec![
                    set_class(ids::NAV_TOGGLE, nav_toggle::ACTIVE_CLASS, false),
                    set_class(ids::NAV_MENU, nav_toggle::ACTIVE_CLASS, false),
                ]
            }
            PageEvent::AnchorClick(href) => match href.strip_prefix('#') {
                Some(target) if self.present.contains(target) => {
                    vec![DomEffect::ScrollIntoView(target.to_string())]
                }
                _ => Vec::new(),
            },
            PageEvent::BackToTopClick => {
                if self.back_to_top.is_some() {
                    self.scrolling = Some(ScrollToTop::new(self.scroll_offset));
                }
                Vec::new()
            }
            PageEvent::CvDownloadClick => self
                .modal
                .as_mut()
                .map(|modal| vec![DomEffect::Modal(modal.open())])
                .unwrap_or_default(),
            PageEvent::CvCloseClick if self.modal_close_wired => {
                self.close_modal(CloseTrigger::CloseButton)
            }
            PageEvent::CvCloseClick => Vec::new(),
            PageEvent::WindowClick { on_backdrop: true } => self.close_modal(CloseTrigger::Backdrop),
            PageEvent::WindowClick { on_backdrop: false } => Vec::new(),
            PageEvent::KeyDown(key) => self
                .modal
                .as_mut()
                .and_then(|modal| modal.on_key(&key))
                .map(|view| vec![DomEffect::Modal(view)])
                .unwrap_or_default(),
        }
    }

    fn close_modal(&mut self, trigger: CloseTrigger) -> Vec<DomEffect> {
        self.modal
            .as_mut()
            .and_then(|modal| modal.close(trigger))
            .map(|view| vec![DomEffect::Modal(view)])
            .unwrap_or_default()
    }

    fn on_viewport(&mut self, viewport: &Viewport) -> Vec<DomEffect> {
        self.scroll_offset = viewport.offset;
        let mut effects = Vec::new();

        if let Some(style) = self
            .navbar
            .as_mut()
            .and_then(|navbar| navbar.on_scroll(viewport.offset))
        {
            effects.push(DomEffect::Navbar(style));
        }
        if let Some(visible) = self
            .back_to_top
            .as_mut()
            .and_then(|button| button.on_scroll(viewport.offset))
        {
            effects.push(set_class(
                ids::BACK_TO_TOP,
                back_to_top::VISIBLE_CLASS,
                visible,
            ));
        }
        effects.extend(
            self.reveal
                .on_viewport_change(viewport.height, &viewport.boxes)
                .iter()
                .map(|id| set_class(id, scroll_reveal::ANIMATE_CLASS, true)),
        );
        effects
    }

    fn on_frame(&mut self, now: Duration) -> Vec<DomEffect> {
        let Some(scrolling) = self.scrolling.as_mut() else {
            return Vec::new();
        };
        let frame = scrolling.frame(now);
        if frame.finished {
            self.scrolling = None;
        }
        vec![DomEffect::ScrollTo(frame.position)]
    }
}
