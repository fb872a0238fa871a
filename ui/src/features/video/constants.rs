//! Fixed values shared by the video resolver, layout and bootstrap.

pub const DEFAULT_ALT_ATTRIBUTE: &str = "Video thumbnail";

pub const DEFAULT_BUTTON_LABEL: &str = "Play video";

pub const DEFAULT_ASPECT_RATIO: &str = "16:9";

pub const DEFAULT_IFRAME_ALLOW: &str =
    "accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture";

pub const YOUTUBE_EMBED_PREFIX: &str = "https://www.youtube.com/embed/";
pub const YOUTUBE_NOCOOKIE_EMBED_PREFIX: &str = "https://www.youtube-nocookie.com/embed/";
pub const LOOM_EMBED_PREFIX: &str = "https://www.loom.com/embed/";

pub const YOUTUBE_ID_PATTERN: &str = r"^https://www\.youtube(?:-nocookie)?\.com/embed/(.+?)(?:\?.*)?$";
pub const LOOM_ID_PATTERN: &str = r"^https://www\.loom\.com/embed/(.+?)(?:\?.*)?$";

/// IFrame Player API script injected when `inject_player_script` is set.
pub const PLAYER_SCRIPT_SRC: &str = "https://www.youtube.com/player_api";

/// Interval between checks for `window.YT.Player` after the script loads.
pub const PLAYER_CHECK_MS: u32 = 32;

pub const PLAY_BUTTON_SHAPE_PATH: &str = "M66.5 7.7c-.8-2.9-2.5-5.4-5.4-6.2C55.8.1 34 0 34 0S12.2.1 6.9 1.6c-3 .7-4.6 3.2-5.4 6.1a89.6 89.6 0 0 0 0 32.5c.8 3 2.5 5.5 5.4 6.3C12.2 47.9 34 48 34 48s21.8-.1 27.1-1.6c3-.7 4.6-3.2 5.4-6.1C68 35 68 24 68 24s0-11-1.5-16.3z";
pub const PLAY_BUTTON_ICON_PATH: &str = "M45 24L27 14v20";
