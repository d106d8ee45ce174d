// src/error.rs
use thiserror::Error;

/// Failures reported by the background music engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    /// The browser refused to start playback (usually the autoplay policy).
    #[error("playback blocked: {0}")]
    Blocked(String),
    /// The audio element could not be created at all.
    #[error("audio unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("image index {index} out of range (gallery has {len} images)")]
    OutOfRange { index: usize, len: usize },
    #[error("image {0} has not failed, nothing to retry")]
    NotRetryable(usize),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse invitation content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid invitation content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipboardError {
    #[error("clipboard API is not available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GalleryError::OutOfRange { index: 9, len: 5 };
        assert_eq!(
            err.to_string(),
            "image index 9 out of range (gallery has 5 images)"
        );

        let err = PlaybackError::Blocked("NotAllowedError".to_string());
        assert_eq!(err.to_string(), "playback blocked: NotAllowedError");
    }

    #[test]
    fn test_config_error_from_json() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ConfigError = parse.into();
        assert!(err.to_string().starts_with("failed to parse invitation content"));
    }
}
