//! Render data derived from `src` and `aspectRatio`.

use super::aspect_ratio::get_padding_bottom;
use super::provider::VideoSource;
use super::warnings::Warnings;

#[derive(Debug, Clone, PartialEq)]
pub struct VideoLayout {
    pub source: VideoSource,
    /// CSS `padding-bottom` of the ratio box.
    pub padding_bottom: String,
}

impl VideoLayout {
    pub fn resolve(src: &str, aspect_ratio: &str, warnings: &mut Warnings) -> Self {
        Self {
            source: VideoSource::resolve(src, warnings),
            padding_bottom: get_padding_bottom(aspect_ratio, warnings),
        }
    }
}

/// Keeps the last resolved layout so re-renders with unchanged inputs
/// neither recompute it nor repeat its warnings.
#[derive(Debug, Default)]
pub struct LayoutCache {
    entry: Option<(String, String, VideoLayout)>,
}

impl LayoutCache {
    /// Return the cached layout, resolving again only when `src` or
    /// `aspect_ratio` differ from the last call. Warnings are pushed only
    /// when a new layout is resolved.
    pub fn get_or_resolve(&mut self, src: &str, aspect_ratio: &str, warnings: &mut Warnings) -> VideoLayout {
        match &self.entry {
            Some((cached_src, cached_ratio, layout)) if cached_src == src && cached_ratio == aspect_ratio => {
                layout.clone()
            }
            _ => {
                let layout = VideoLayout::resolve(src, aspect_ratio, warnings);
                self.entry = Some((src.to_string(), aspect_ratio.to_string(), layout.clone()));
                layout
            }
        }
    }
}
