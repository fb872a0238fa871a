//! Video providers and video id extraction.
//!
//! Every supported host is one variant of [`VideoProvider`]. A variant owns
//! its embed prefix, the pattern its ids are extracted with and its
//! thumbnail templates, so rendering never branches on the host itself.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::constants::*;
use super::thumbnail::PreviewImageSize;
use super::warnings::Warnings;
use crate::services::errors::{LazyVideoError, LazyVideoResult};

static YOUTUBE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(YOUTUBE_ID_PATTERN).expect("YouTube id pattern is valid"));

static LOOM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(LOOM_ID_PATTERN).expect("Loom id pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VideoProvider {
    YouTube,
    YouTubeNoCookie,
    Loom,
}

impl VideoProvider {
    pub const ALL: [VideoProvider; 3] = [
        VideoProvider::YouTube,
        VideoProvider::YouTubeNoCookie,
        VideoProvider::Loom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VideoProvider::YouTube => "YouTube",
            VideoProvider::YouTubeNoCookie => "YouTube (no-cookie)",
            VideoProvider::Loom => "Loom",
        }
    }

    pub fn embed_prefix(&self) -> &'static str {
        match self {
            VideoProvider::YouTube => YOUTUBE_EMBED_PREFIX,
            VideoProvider::YouTubeNoCookie => YOUTUBE_NOCOOKIE_EMBED_PREFIX,
            VideoProvider::Loom => LOOM_EMBED_PREFIX,
        }
    }

    /// Detect the provider of an embed URL by its prefix.
    pub fn detect(src: &str) -> Option<VideoProvider> {
        Self::ALL
            .into_iter()
            .find(|provider| src.starts_with(provider.embed_prefix()))
    }

    fn id_regex(&self) -> &'static Regex {
        match self {
            VideoProvider::YouTube | VideoProvider::YouTubeNoCookie => &YOUTUBE_REGEX,
            VideoProvider::Loom => &LOOM_REGEX,
        }
    }

    /// Raster thumbnail URL template; `{id}` and `{size}` are substituted.
    pub fn raster_thumbnail_template(&self) -> &'static str {
        match self {
            VideoProvider::YouTube | VideoProvider::YouTubeNoCookie => {
                "https://i.ytimg.com/vi/{id}/{size}.jpg"
            }
            VideoProvider::Loom => "https://cdn.loom.com/sessions/thumbnails/{id}-00001.jpg",
        }
    }

    /// WebP thumbnail URL template, when the host publishes one.
    pub fn modern_thumbnail_template(&self) -> Option<&'static str> {
        match self {
            VideoProvider::YouTube | VideoProvider::YouTubeNoCookie => {
                Some("https://i.ytimg.com/vi_webp/{id}/{size}.webp")
            }
            VideoProvider::Loom => None,
        }
    }

    pub fn default_preview_image_size(&self) -> PreviewImageSize {
        PreviewImageSize::MaxResDefault
    }

    /// Whether the IFrame Player API bootstrap applies to this host.
    pub fn supports_player_api(&self) -> bool {
        matches!(self, VideoProvider::YouTube | VideoProvider::YouTubeNoCookie)
    }

    pub fn extract_id(&self, src: &str) -> Option<String> {
        self.id_regex()
            .captures(src)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

/// Whether `src` starts with a supported embed prefix.
pub fn is_supported_source(src: &str) -> bool {
    VideoProvider::detect(src).is_some()
}

/// Detect the provider and extract the video id in one go.
pub fn extract_video_id(src: &str) -> LazyVideoResult<(VideoProvider, String)> {
    let provider = VideoProvider::detect(src).ok_or_else(|| LazyVideoError::VideoIdExtraction {
        src: src.to_string(),
    })?;
    let id = provider
        .extract_id(src)
        .ok_or_else(|| LazyVideoError::VideoIdExtraction {
            src: src.to_string(),
        })?;
    Ok((provider, id))
}

/// A source URL resolved into the provider and video id used for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSource {
    pub src: String,
    pub provider: VideoProvider,
    /// Empty when extraction failed.
    pub id: String,
}

impl VideoSource {
    /// Resolve `src`, degrading to an empty id (plus one warning) instead of
    /// failing. Unknown hosts render with YouTube templates.
    pub fn resolve(src: &str, warnings: &mut Warnings) -> Self {
        match extract_video_id(src) {
            Ok((provider, id)) => Self {
                src: src.to_string(),
                provider,
                id,
            },
            Err(err) => {
                warnings.push(err.to_string());
                Self {
                    src: src.to_string(),
                    provider: VideoProvider::detect(src).unwrap_or(VideoProvider::YouTube),
                    id: String::new(),
                }
            }
        }
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}
