//! Data-only configuration of a lazy video.
//!
//! `LazyVideoConfig` mirrors the component's options without any of its
//! callbacks, so it can be deserialized, validated and compared on its own.

use serde::{Deserialize, Serialize};

use super::constants::*;
use super::embed::{embed_src, EmbedParameters};
use super::provider::VideoProvider;
use super::thumbnail::{PreviewImageSize, ThumbnailOverride};
use super::validation::{validate_config, ValidationReport};
use crate::services::errors::{LazyVideoError, LazyVideoResult};

/// Attributes applied to the iframe, merged over the defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IframeAttributes {
    pub id: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub allow: Option<String>,
    pub allowfullscreen: Option<bool>,
    pub frameborder: Option<u32>,
    pub referrerpolicy: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    /// Any other attribute (`loading`, `sandbox`, `data-*`, ...), in insertion order.
    #[serde(flatten)]
    pub extra: EmbedParameters,
}

/// Iframe attributes after defaults were applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIframeAttributes {
    pub id: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub allow: String,
    pub allowfullscreen: bool,
    pub frameborder: u32,
    pub referrerpolicy: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub extra: EmbedParameters,
}

impl IframeAttributes {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl std::fmt::Display) -> Self {
        self.extra.insert(name, value);
        self
    }

    pub fn merged_over_defaults(&self) -> ResolvedIframeAttributes {
        ResolvedIframeAttributes {
            id: self.id.clone(),
            title: self.title.clone(),
            name: self.name.clone(),
            allow: self.allow.clone().unwrap_or_else(|| DEFAULT_IFRAME_ALLOW.to_string()),
            allowfullscreen: self.allowfullscreen.unwrap_or(true),
            frameborder: self.frameborder.unwrap_or(0),
            referrerpolicy: self.referrerpolicy.clone(),
            width: self.width.clone(),
            height: self.height.clone(),
            extra: self.extra.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LazyVideoConfig {
    pub src: String,
    pub alt: String,
    pub button_label: String,
    pub aspect_ratio: String,
    /// `None` picks the provider's default tier.
    pub preview_image_size: Option<String>,
    pub thumbnail: Option<ThumbnailOverride>,
    pub iframe_attributes: IframeAttributes,
    pub webp: bool,
    pub autoplay: bool,
    pub enablejsapi: bool,
    pub player_options: serde_json::Value,
    pub inject_player_script: bool,
    pub parameters: EmbedParameters,
}

impl Default for LazyVideoConfig {
    fn default() -> Self {
        Self {
            src: String::new(),
            alt: DEFAULT_ALT_ATTRIBUTE.to_string(),
            button_label: DEFAULT_BUTTON_LABEL.to_string(),
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
            preview_image_size: None,
            thumbnail: None,
            iframe_attributes: IframeAttributes::default(),
            webp: true,
            autoplay: false,
            enablejsapi: false,
            player_options: serde_json::Value::Object(Default::default()),
            inject_player_script: false,
            parameters: EmbedParameters::new(),
        }
    }
}

impl LazyVideoConfig {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> LazyVideoResult<Self> {
        serde_json::from_str(json).map_err(|e| LazyVideoError::InvalidConfig {
            field: "<root>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> ValidationReport {
        validate_config(self)
    }

    pub fn provider(&self) -> Option<VideoProvider> {
        VideoProvider::detect(&self.src)
    }

    /// The requested preview tier, or the provider default when it is unset
    /// or unknown (unknown values are reported by validation).
    pub fn preview_image_size(&self) -> PreviewImageSize {
        let fallback = self
            .provider()
            .unwrap_or(VideoProvider::YouTube)
            .default_preview_image_size();
        self.preview_image_size
            .as_deref()
            .and_then(|value| value.parse().ok())
            .unwrap_or(fallback)
    }

    pub fn embed_src(&self) -> String {
        embed_src(&self.src, self.enablejsapi, &self.parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_widget_defaults() {
        let config = LazyVideoConfig::new("https://www.youtube.com/embed/4JS70KB9GS0");
        assert_eq!(config.alt, "Video thumbnail");
        assert_eq!(config.button_label, "Play video");
        assert_eq!(config.aspect_ratio, "16:9");
        assert!(config.webp);
        assert!(!config.autoplay);
        assert!(!config.enablejsapi);
        assert!(!config.inject_player_script);
        assert_eq!(config.preview_image_size(), PreviewImageSize::MaxResDefault);
    }

    #[test]
    fn test_from_json_uses_option_names() {
        let config = LazyVideoConfig::from_json(
            r#"{
                "src": "https://www.youtube.com/embed/4JS70KB9GS0?loop=1",
                "aspectRatio": "4:3",
                "previewImageSize": "hqdefault",
                "enablejsapi": true,
                "parameters": { "start": 32 },
                "thumbnail": { "jpg": "j", "webp": "w" },
                "iframeAttributes": { "id": "foo" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.aspect_ratio, "4:3");
        assert_eq!(config.preview_image_size(), PreviewImageSize::HqDefault);
        assert_eq!(config.thumbnail, Some(ThumbnailOverride::new("j").with_webp("w")));
        assert_eq!(config.iframe_attributes.id.as_deref(), Some("foo"));
        assert_eq!(
            config.embed_src(),
            "https://www.youtube.com/embed/4JS70KB9GS0?loop=1&autoplay=1&enablejsapi=1&start=32"
        );
        // untouched options keep their defaults
        assert!(config.webp);
        assert_eq!(config.alt, "Video thumbnail");
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = LazyVideoConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, LazyVideoError::InvalidConfig { .. }));
    }

    #[test]
    fn test_unknown_iframe_attributes_are_kept() {
        let attributes: IframeAttributes =
            serde_json::from_str(r#"{"id": "foo", "loading": "lazy", "data-index": 3}"#).unwrap();
        assert_eq!(attributes.id.as_deref(), Some("foo"));
        assert_eq!(attributes.extra.get("loading"), Some("lazy"));
        assert_eq!(attributes.extra.get("data-index"), Some("3"));
        assert_eq!(attributes.extra.get("id"), None);
    }

    #[test]
    fn test_iframe_attributes_merge() {
        let merged = IframeAttributes::default().merged_over_defaults();
        assert!(merged.allowfullscreen);
        assert_eq!(merged.frameborder, 0);
        assert_eq!(merged.allow, DEFAULT_IFRAME_ALLOW);

        let custom = IframeAttributes {
            allow: Some("autoplay".to_string()),
            allowfullscreen: Some(false),
            ..Default::default()
        }
        .with_id("foo")
        .merged_over_defaults();
        assert_eq!(custom.allow, "autoplay");
        assert!(!custom.allowfullscreen);
        assert_eq!(custom.id.as_deref(), Some("foo"));
    }
}
