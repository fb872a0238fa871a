//! A lazily activated video embed for Dioxus.
//!
//! `LazyVideo` renders a thumbnail and a play button for a YouTube or Loom
//! embed URL and mounts the real iframe only after the first click. With
//! `enablejsapi` it can also bootstrap the YouTube IFrame Player API once the
//! iframe has loaded.

pub mod components;
pub mod features;
pub mod services;
pub mod utils;

pub use components::video::{
    use_player_slot, IframeLoaded, LazyVideo, LazyVideoProps, LazyVideoStyles, PlayerInitialized, PlayerSlot,
    ThumbnailEvent, ThumbnailListeners,
};
pub use features::video::{
    AspectRatio, EmbedParameters, IframeAttributes, LazyVideoConfig, PreviewImageSize, ThumbnailOverride,
    VideoProvider,
};
pub use services::errors::{LazyVideoError, LazyVideoResult};
pub use services::player::{PlayerApi, PlayerHandle, SharedPlayerApi, YouTubeIframeApi};
