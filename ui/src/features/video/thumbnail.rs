//! Thumbnail URL resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::provider::VideoSource;
use crate::services::errors::LazyVideoError;

/// Preview image tiers published by YouTube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreviewImageSize {
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "mqdefault")]
    MqDefault,
    #[serde(rename = "sddefault")]
    SdDefault,
    #[serde(rename = "hqdefault")]
    HqDefault,
    #[serde(rename = "maxresdefault")]
    MaxResDefault,
}

impl PreviewImageSize {
    pub const ALL: [PreviewImageSize; 5] = [
        PreviewImageSize::Default,
        PreviewImageSize::MqDefault,
        PreviewImageSize::SdDefault,
        PreviewImageSize::HqDefault,
        PreviewImageSize::MaxResDefault,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PreviewImageSize::Default => "default",
            PreviewImageSize::MqDefault => "mqdefault",
            PreviewImageSize::SdDefault => "sddefault",
            PreviewImageSize::HqDefault => "hqdefault",
            PreviewImageSize::MaxResDefault => "maxresdefault",
        }
    }
}

impl fmt::Display for PreviewImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreviewImageSize {
    type Err = LazyVideoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == value)
            .ok_or_else(|| LazyVideoError::InvalidPreviewImageSize {
                value: value.to_string(),
            })
    }
}

/// Explicit thumbnail URLs supplied by the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailOverride {
    pub jpg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webp: Option<String>,
}

impl ThumbnailOverride {
    pub fn new(jpg: impl Into<String>) -> Self {
        Self {
            jpg: jpg.into(),
            webp: None,
        }
    }

    pub fn with_webp(mut self, webp: impl Into<String>) -> Self {
        self.webp = Some(webp.into());
        self
    }
}

/// The `<img src>` and optional `<source srcset>` of the preview picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailSources {
    pub raster: String,
    pub modern: Option<String>,
}

fn fill_template(template: &str, id: &str, size: PreviewImageSize) -> String {
    template.replace("{id}", id).replace("{size}", size.as_str())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl ThumbnailSources {
    /// Override values win when non-empty; everything else comes from the
    /// provider's templates. No modern source is produced when `webp` is off.
    pub fn resolve(
        source: &VideoSource,
        size: PreviewImageSize,
        thumbnail: Option<&ThumbnailOverride>,
        webp: bool,
    ) -> Self {
        let provider = source.provider;

        let raster = non_empty(thumbnail.map(|t| t.jpg.as_str()))
            .map(str::to_string)
            .unwrap_or_else(|| fill_template(provider.raster_thumbnail_template(), &source.id, size));

        let modern = if webp {
            non_empty(thumbnail.and_then(|t| t.webp.as_deref()))
                .map(str::to_string)
                .or_else(|| {
                    provider
                        .modern_thumbnail_template()
                        .map(|template| fill_template(template, &source.id, size))
                })
        } else {
            None
        };

        Self { raster, modern }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::video::provider::VideoProvider;
    use crate::features::video::warnings::Warnings;

    fn source(src: &str) -> VideoSource {
        VideoSource::resolve(src, &mut Warnings::new())
    }

    #[test]
    fn test_default_youtube_thumbnails() {
        let sources = ThumbnailSources::resolve(
            &source("https://www.youtube.com/embed/4JS70KB9GS0"),
            PreviewImageSize::MaxResDefault,
            None,
            true,
        );
        assert_eq!(sources.raster, "https://i.ytimg.com/vi/4JS70KB9GS0/maxresdefault.jpg");
        assert_eq!(
            sources.modern.as_deref(),
            Some("https://i.ytimg.com/vi_webp/4JS70KB9GS0/maxresdefault.webp")
        );
    }

    #[test]
    fn test_size_tier_is_used() {
        let sources = ThumbnailSources::resolve(
            &source("https://www.youtube-nocookie.com/embed/4JS70KB9GS0"),
            PreviewImageSize::HqDefault,
            None,
            false,
        );
        assert!(sources.raster.contains("hqdefault"));
        assert_eq!(sources.modern, None);
    }

    #[test]
    fn test_override_wins_regardless_of_id() {
        let thumbnail = ThumbnailOverride::new("j").with_webp("w");
        for src in ["https://www.youtube.com/embed/4JS70KB9GS0", "https://www.youtube.com/embed/"] {
            let sources =
                ThumbnailSources::resolve(&source(src), PreviewImageSize::Default, Some(&thumbnail), true);
            assert_eq!(sources.raster, "j");
            assert_eq!(sources.modern.as_deref(), Some("w"));
        }
    }

    #[test]
    fn test_partial_override_falls_back() {
        let thumbnail = ThumbnailOverride::new("https://placehold.co/1280x720");
        let sources = ThumbnailSources::resolve(
            &source("https://www.youtube.com/embed/4JS70KB9GS0"),
            PreviewImageSize::MaxResDefault,
            Some(&thumbnail),
            true,
        );
        assert_eq!(sources.raster, "https://placehold.co/1280x720");
        assert_eq!(
            sources.modern.as_deref(),
            Some("https://i.ytimg.com/vi_webp/4JS70KB9GS0/maxresdefault.webp")
        );
    }

    #[test]
    fn test_loom_thumbnail() {
        let loom = source("https://www.loom.com/embed/abc123?hide_owner=true");
        assert_eq!(loom.provider, VideoProvider::Loom);
        let sources = ThumbnailSources::resolve(&loom, PreviewImageSize::MaxResDefault, None, true);
        assert_eq!(sources.raster, "https://cdn.loom.com/sessions/thumbnails/abc123-00001.jpg");
        assert_eq!(sources.modern, None);
    }

    #[test]
    fn test_preview_size_parsing() {
        assert_eq!("sddefault".parse::<PreviewImageSize>().unwrap(), PreviewImageSize::SdDefault);
        assert!("huge".parse::<PreviewImageSize>().is_err());
        assert_eq!(PreviewImageSize::MqDefault.to_string(), "mqdefault");
    }
}
