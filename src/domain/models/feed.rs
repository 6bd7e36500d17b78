use crate::domain::cards::format::html_escape;
use serde::Serialize;

/// One rendered display fragment. `key` identifies the record it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub key: String,
    pub html: String,
}

/// A literal message shown in place of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub class: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "items", rename_all = "camelCase")]
pub enum PanelContent {
    Pending,
    Cards(Vec<Card>),
    Notice(Notice),
}

/// The page region a feed loader owns: a loading indicator and a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedPanel {
    #[serde(rename = "containerId")]
    pub container_id: &'static str,
    #[serde(rename = "loadingVisible")]
    pub loading_visible: bool,
    pub content: PanelContent,
}

impl FeedPanel {
    pub fn new(container_id: &'static str) -> Self {
        Self {
            container_id,
            loading_visible: true,
            content: PanelContent::Pending,
        }
    }

    pub fn hide_loading(&mut self) {
        self.loading_visible = false;
    }

    pub fn append(&mut self, card: Card) {
        match &mut self.content {
            PanelContent::Cards(cards) => cards.push(card),
            _ => self.content = PanelContent::Cards(vec![card]),
        }
    }

    /// Replaces whatever the container holds with a single notice.
    pub fn replace_with(&mut self, notice: Notice) {
        self.content = PanelContent::Notice(notice);
    }

    pub fn cards(&self) -> &[Card] {
        match &self.content {
            PanelContent::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        match &self.content {
            PanelContent::Notice(notice) => Some(notice),
            _ => None,
        }
    }

    pub fn loading_id(&self) -> String {
        format!("{}-loading", self.container_id)
    }

    pub fn to_html(&self) -> String {
        let mut buf = String::new();
        // Scoped to the container so both panels can share one page.
        let loading_id = self.loading_id();
        if self.loading_visible {
            buf.push_str(&format!(
                "<div id=\"{loading_id}\" class=\"loading\">Loading...</div>\n"
            ));
        } else {
            buf.push_str(&format!(
                "<div id=\"{loading_id}\" class=\"loading\" style=\"display: none\"></div>\n"
            ));
        }
        buf.push_str(&format!("<div id=\"{}\">", self.container_id));
        match &self.content {
            PanelContent::Pending => {}
            PanelContent::Cards(cards) => {
                for card in cards {
                    buf.push_str(&card.html);
                }
            }
            PanelContent::Notice(notice) => {
                buf.push_str(&format!(
                    "<p class=\"{}\">{}</p>",
                    notice.class,
                    html_escape(notice.text)
                ));
            }
        }
        buf.push_str("</div>\n");
        buf
    }
}
