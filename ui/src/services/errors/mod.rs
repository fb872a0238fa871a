use std::fmt;

use thiserror::Error;

use crate::{console_error, console_warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum LazyVideoError {
    #[error("Invalid source: {src} does not start with a supported embed prefix")]
    InvalidSource { src: String },

    #[error("Failed to extract video id from {src}")]
    VideoIdExtraction { src: String },

    #[error("Invalid value {value} supplied to `aspectRatio` property")]
    InvalidAspectRatio { value: String },

    #[error("Invalid preview image size: {value}")]
    InvalidPreviewImageSize { value: String },

    #[error("Invalid thumbnail: {reason}")]
    InvalidThumbnail { reason: String },

    #[error("YT.Player can not be instantiated without iframe element")]
    MissingIframe,

    #[error("window.YT.Player is not defined. Make sure you either included the IFrame Player API or passed `injectPlayerScript` prop")]
    PlayerApiUnavailable,

    #[error("A player instance was already initialized for this video")]
    PlayerAlreadyInitialized,

    #[error("Failed to inject player script {src}: {reason}")]
    ScriptInjection { src: String, reason: String },

    #[error("Player construction failed: {reason}")]
    PlayerConstruction { reason: String },

    #[error("Configuration error: {field} - {message}")]
    InvalidConfig { field: String, message: String },
}

pub type LazyVideoResult<T> = Result<T, LazyVideoError>;

impl LazyVideoError {
    /// How loudly the error is reported. Only a failed id extraction merely
    /// degrades rendering; bad options and player failures are errors.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LazyVideoError::VideoIdExtraction { .. } => ErrorSeverity::Low,
            LazyVideoError::InvalidSource { .. }
            | LazyVideoError::InvalidAspectRatio { .. }
            | LazyVideoError::InvalidPreviewImageSize { .. }
            | LazyVideoError::InvalidThumbnail { .. }
            | LazyVideoError::InvalidConfig { .. } => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    /// Log the error at the level of its severity.
    pub fn report(&self) {
        self.severity().log(self);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}

impl ErrorSeverity {
    /// `Low` goes to the warning channel, everything else to the error channel.
    pub fn log(self, message: &dyn fmt::Display) {
        match self {
            ErrorSeverity::Low => console_warn!("{}", message),
            ErrorSeverity::Medium | ErrorSeverity::High => console_error!("{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity() {
        assert_eq!(
            LazyVideoError::VideoIdExtraction { src: "x".into() }.severity(),
            ErrorSeverity::Low
        );
        assert_eq!(
            LazyVideoError::InvalidAspectRatio { value: "foo".into() }.severity(),
            ErrorSeverity::Medium
        );
        assert_eq!(LazyVideoError::MissingIframe.severity(), ErrorSeverity::High);
        assert_eq!(LazyVideoError::PlayerApiUnavailable.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_error_messages() {
        let err = LazyVideoError::VideoIdExtraction {
            src: "https://example.com".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to extract video id from https://example.com");

        let err = LazyVideoError::InvalidSource { src: "INVALID_URL".to_string() };
        assert_eq!(
            err.to_string(),
            "Invalid source: INVALID_URL does not start with a supported embed prefix"
        );
    }
}
