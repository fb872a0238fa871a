//! User Interface Components
//!
//! - **video**: the lazy video widget and the pieces it renders (thumbnail,
//!   play button, iframe) plus the stylesheet link
//!
//! All components are plain Dioxus components and render on the web and
//! through `dioxus-ssr` alike; only the player bootstrap needs a browser.

pub mod video;

pub use video::*;
