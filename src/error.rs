use thiserror::Error;

/// Everything that can go wrong between issuing a feed request and holding a
/// rendered card. Loaders collapse all of these into a single error notice.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid {field} on record {record}: {reason}")]
    InvalidField {
        record: String,
        field: &'static str,
        reason: String,
    },

    #[error("failed to render {record}: {reason}")]
    Render { record: String, reason: String },
}

impl FeedError {
    pub fn render(record: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Render {
            record: record.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_the_cause() {
        let err = FeedError::render("portfolio", "link scheme javascript is not allowed");
        assert_eq!(
            err.to_string(),
            "failed to render portfolio: link scheme javascript is not allowed"
        );

        let err = FeedError::InvalidField {
            record: "portfolio".to_string(),
            field: "created_at",
            reason: "premature end of input".to_string(),
        };
        assert!(err.to_string().contains("created_at"));
    }

    #[test]
    fn test_malformed_from_serde() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: FeedError = source.into();
        assert!(matches!(err, FeedError::Malformed(_)));
    }
}
