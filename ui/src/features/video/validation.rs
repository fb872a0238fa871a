//! Declarative validation of a [`LazyVideoConfig`].
//!
//! Each option has one rule; the pass runs once when the configuration is
//! accepted and reports every failure with the field it belongs to.

use std::fmt;

use super::aspect_ratio::is_aspect_ratio;
use super::config::LazyVideoConfig;
use super::provider::is_supported_source;
use super::thumbnail::PreviewImageSize;
use crate::services::errors::LazyVideoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    Src,
    AspectRatio,
    PreviewImageSize,
    Thumbnail,
    Enablejsapi,
    PlayerOptions,
    InjectPlayerScript,
}

impl ConfigField {
    /// Option name as the consumer spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigField::Src => "src",
            ConfigField::AspectRatio => "aspectRatio",
            ConfigField::PreviewImageSize => "previewImageSize",
            ConfigField::Thumbnail => "thumbnail",
            ConfigField::Enablejsapi => "enablejsapi",
            ConfigField::PlayerOptions => "playerOptions",
            ConfigField::InjectPlayerScript => "injectPlayerScript",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    Required,
    UnsupportedPrefix,
    Malformed { expected: &'static str },
    NotInSet { allowed: Vec<&'static str> },
    /// The option has no effect without another option.
    Requires(ConfigField),
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::Required => write!(f, "value is required"),
            ValidationFailure::UnsupportedPrefix => write!(f, "URL is not a supported embed URL"),
            ValidationFailure::Malformed { expected } => write!(f, "expected {expected}"),
            ValidationFailure::NotInSet { allowed } => write!(f, "expected one of {}", allowed.join(", ")),
            ValidationFailure::Requires(other) => write!(f, "has no effect without `{}`", other.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub field: ConfigField,
    pub failure: ValidationFailure,
    /// The failure as a crate error, carrying the offending value.
    pub error: LazyVideoError,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid prop `{}`: {}", self.field.as_str(), self.failure)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_issue(&self, field: ConfigField) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }

    pub fn issue(&self, field: ConfigField) -> Option<&ValidationIssue> {
        self.issues.iter().find(|issue| issue.field == field)
    }

    pub fn errors(&self) -> impl Iterator<Item = &LazyVideoError> {
        self.issues.iter().map(|issue| &issue.error)
    }

    /// Report every issue on the console at its error's severity.
    pub fn log(&self) {
        for issue in &self.issues {
            issue.error.severity().log(issue);
        }
    }
}

fn issue_error(config: &LazyVideoConfig, field: ConfigField, failure: &ValidationFailure) -> LazyVideoError {
    match field {
        ConfigField::Src => LazyVideoError::InvalidSource {
            src: config.src.clone(),
        },
        ConfigField::AspectRatio => LazyVideoError::InvalidAspectRatio {
            value: config.aspect_ratio.clone(),
        },
        ConfigField::PreviewImageSize => LazyVideoError::InvalidPreviewImageSize {
            value: config.preview_image_size.clone().unwrap_or_default(),
        },
        ConfigField::Thumbnail => LazyVideoError::InvalidThumbnail {
            reason: failure.to_string(),
        },
        _ => LazyVideoError::InvalidConfig {
            field: field.as_str().to_string(),
            message: failure.to_string(),
        },
    }
}

type Rule = fn(&LazyVideoConfig) -> Option<ValidationFailure>;

const RULES: &[(ConfigField, Rule)] = &[
    (ConfigField::Src, check_src),
    (ConfigField::AspectRatio, check_aspect_ratio),
    (ConfigField::PreviewImageSize, check_preview_image_size),
    (ConfigField::Thumbnail, check_thumbnail),
    (ConfigField::PlayerOptions, check_player_options),
    (ConfigField::InjectPlayerScript, check_inject_player_script),
];

pub fn validate_config(config: &LazyVideoConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    for (field, rule) in RULES {
        if let Some(failure) = rule(config) {
            let error = issue_error(config, *field, &failure);
            report.issues.push(ValidationIssue {
                field: *field,
                failure,
                error,
            });
        }
    }
    report
}

fn check_src(config: &LazyVideoConfig) -> Option<ValidationFailure> {
    if config.src.trim().is_empty() {
        Some(ValidationFailure::Required)
    } else if !is_supported_source(&config.src) {
        Some(ValidationFailure::UnsupportedPrefix)
    } else {
        None
    }
}

fn check_aspect_ratio(config: &LazyVideoConfig) -> Option<ValidationFailure> {
    (!is_aspect_ratio(&config.aspect_ratio)).then_some(ValidationFailure::Malformed { expected: "W:H" })
}

fn check_preview_image_size(config: &LazyVideoConfig) -> Option<ValidationFailure> {
    let value = config.preview_image_size.as_deref()?;
    value.parse::<PreviewImageSize>().err().map(|_| ValidationFailure::NotInSet {
        allowed: PreviewImageSize::ALL.iter().map(PreviewImageSize::as_str).collect(),
    })
}

fn check_thumbnail(config: &LazyVideoConfig) -> Option<ValidationFailure> {
    let thumbnail = config.thumbnail.as_ref()?;
    thumbnail
        .jpg
        .trim()
        .is_empty()
        .then_some(ValidationFailure::Malformed { expected: "a non-empty `jpg` URL" })
}

fn check_player_options(config: &LazyVideoConfig) -> Option<ValidationFailure> {
    (!config.player_options.is_object()).then_some(ValidationFailure::Malformed { expected: "an object" })
}

fn check_inject_player_script(config: &LazyVideoConfig) -> Option<ValidationFailure> {
    (config.inject_player_script && !config.enablejsapi)
        .then_some(ValidationFailure::Requires(ConfigField::Enablejsapi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::video::thumbnail::ThumbnailOverride;

    const SRC: &str = "https://www.youtube.com/embed/4JS70KB9GS0";

    #[test]
    fn test_default_config_is_valid() {
        assert!(LazyVideoConfig::new(SRC).validate().is_valid());
        assert!(LazyVideoConfig::new("https://www.loom.com/embed/abc123").validate().is_valid());
    }

    #[test]
    fn test_invalid_src() {
        let report = LazyVideoConfig::new("INVALID_URL").validate();
        assert_eq!(
            report.issue(ConfigField::Src).map(|i| &i.failure),
            Some(&ValidationFailure::UnsupportedPrefix)
        );

        let report = LazyVideoConfig::new("").validate();
        assert_eq!(
            report.issue(ConfigField::Src).map(|i| &i.failure),
            Some(&ValidationFailure::Required)
        );
    }

    #[test]
    fn test_each_failure_names_its_field() {
        let config = LazyVideoConfig {
            aspect_ratio: "foo".to_string(),
            preview_image_size: Some("huge".to_string()),
            thumbnail: Some(ThumbnailOverride::new("")),
            player_options: serde_json::json!([1, 2]),
            ..LazyVideoConfig::new(SRC)
        };
        let report = config.validate();
        assert_eq!(report.issues.len(), 4);
        assert!(report.has_issue(ConfigField::AspectRatio));
        assert!(report.has_issue(ConfigField::PreviewImageSize));
        assert!(report.has_issue(ConfigField::Thumbnail));
        assert!(report.has_issue(ConfigField::PlayerOptions));
        assert!(!report.has_issue(ConfigField::Src));
    }

    #[test]
    fn test_inject_without_jsapi_is_reported() {
        let config = LazyVideoConfig {
            inject_player_script: true,
            ..LazyVideoConfig::new(SRC)
        };
        let report = config.validate();
        assert!(report.has_issue(ConfigField::InjectPlayerScript));

        let config = LazyVideoConfig {
            inject_player_script: true,
            enablejsapi: true,
            ..LazyVideoConfig::new(SRC)
        };
        assert!(config.validate().is_valid());
    }

    #[test]
    fn test_issues_carry_typed_errors() {
        let report = LazyVideoConfig::new("INVALID_URL").validate();
        assert_eq!(
            report.errors().collect::<Vec<_>>(),
            vec![&LazyVideoError::InvalidSource {
                src: "INVALID_URL".to_string()
            }]
        );

        let config = LazyVideoConfig {
            thumbnail: Some(ThumbnailOverride::new(" ")),
            inject_player_script: true,
            ..LazyVideoConfig::new(SRC)
        };
        let report = config.validate();
        assert!(matches!(
            report.issue(ConfigField::Thumbnail).map(|i| &i.error),
            Some(LazyVideoError::InvalidThumbnail { .. })
        ));
        assert_eq!(
            report.issue(ConfigField::InjectPlayerScript).map(|i| &i.error),
            Some(&LazyVideoError::InvalidConfig {
                field: "injectPlayerScript".to_string(),
                message: "has no effect without `enablejsapi`".to_string(),
            })
        );
    }

    #[test]
    fn test_issue_message() {
        let report = LazyVideoConfig::new("INVALID_URL").validate();
        assert_eq!(
            report.issues[0].to_string(),
            "Invalid prop `src`: URL is not a supported embed URL"
        );
    }
}
