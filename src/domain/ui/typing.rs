use async_stream::stream;
use futures_util::Stream;
use std::time::Duration;

/// Pause after page load before typing begins
pub const START_DELAY: Duration = Duration::from_millis(1000);

/// Time between revealed characters
pub const CHAR_INTERVAL: Duration = Duration::from_millis(30);

/// Progressive reveal of a text element's content, one character per tick.
#[derive(Debug)]
pub struct TypingEffect {
    text: String,
    delay: Duration,
    interval: Duration,
    started: bool,
}

impl TypingEffect {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_timing(text, START_DELAY, CHAR_INTERVAL)
    }

    pub fn with_timing(text: impl Into<String>, delay: Duration, interval: Duration) -> Self {
        Self {
            text: text.into(),
            delay,
            interval,
            started: false,
        }
    }

    /// Successive contents of the element: the first character, the first
    /// two, and so on up to the full text.
    pub fn frames(&self) -> impl Iterator<Item = String> + '_ {
        self.text
            .char_indices()
            .map(|(at, c)| self.text[..at + c.len_utf8()].to_string())
    }

    /// Starts the effect. Only the first call yields a stream.
    pub fn start(&mut self) -> Option<impl Stream<Item = String> + Send + 'static> {
        if std::mem::replace(&mut self.started, true) {
            tracing::debug!("Typing effect already started");
            return None;
        }

        let frames: Vec<String> = self.frames().collect();
        let delay = self.delay;
        let interval = self.interval;
        Some(stream! {
            tokio::time::sleep(delay).await;
            for (i, frame) in frames.into_iter().enumerate() {
                if i > 0 {
                    tokio::time::sleep(interval).await;
                }
                yield frame;
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use std::time::Instant;

    #[test]
    fn test_frames_are_prefixes() {
        let typing = TypingEffect::new("DevOps");
        let frames: Vec<String> = typing.frames().collect();
        assert_eq!(frames, vec!["D", "De", "Dev", "DevO", "DevOp", "DevOps"]);
    }

    #[test]
    fn test_frames_respect_multibyte_characters() {
        let typing = TypingEffect::new("héllo ☁");
        let frames: Vec<String> = typing.frames().collect();
        assert_eq!(frames.len(), 7);
        assert_eq!(frames[1], "hé");
        assert_eq!(frames.last().map(String::as_str), Some("héllo ☁"));
    }

    #[test]
    fn test_empty_text_has_no_frames() {
        assert_eq!(TypingEffect::new("").frames().count(), 0);
    }

    #[tokio::test]
    async fn test_stream_types_after_delay() {
        let mut typing =
            TypingEffect::with_timing("abc", Duration::from_millis(20), Duration::from_millis(5));
        let began = Instant::now();
        let stream = typing.start().unwrap();
        let frames: Vec<String> = stream.collect().await;

        assert_eq!(frames, vec!["a", "ab", "abc"]);
        assert!(began.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_starts_only_once() {
        let mut typing = TypingEffect::with_timing("x", Duration::ZERO, Duration::ZERO);
        assert!(typing.start().is_some());
        assert!(typing.start().is_none());
    }
}
