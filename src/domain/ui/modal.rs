/// CV served from the site's own CDN
pub const CV_URL: &str = "https://fidelis.fozdigitalz.com/cv.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    Escape,
}

/// What the overlay, the embedded viewer and the page body should look like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub display: &'static str,
    pub embed_src: String,
    pub body_overflow: &'static str,
}

#[derive(Debug)]
pub struct CvModal {
    document_url: String,
    open: bool,
}

impl CvModal {
    pub fn new(document_url: impl Into<String>) -> Self {
        Self {
            document_url: document_url.into(),
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn view(&self) -> ModalView {
        if self.open {
            ModalView {
                display: "block",
                embed_src: self.document_url.clone(),
                body_overflow: "hidden",
            }
        } else {
            ModalView {
                display: "none",
                embed_src: String::new(),
                body_overflow: "auto",
            }
        }
    }

    pub fn open(&mut self) -> ModalView {
        self.open = true;
        self.view()
    }

    /// Returns `None` when the modal was already closed.
    pub fn close(&mut self, trigger: CloseTrigger) -> Option<ModalView> {
        if !self.open {
            return None;
        }
        tracing::debug!(?trigger, "Closing CV modal");
        self.open = false;
        Some(self.view())
    }

    pub fn on_key(&mut self, key: &str) -> Option<ModalView> {
        if key == "Escape" {
            self.close(CloseTrigger::Escape)
        } else {
            None
        }
    }
}
