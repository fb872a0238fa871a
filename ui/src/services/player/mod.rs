//! External player API integration.
//!
//! The player constructor is reached through the [`PlayerApi`] trait rather
//! than straight from `window`, so the bootstrap can be driven by a test
//! double and components receive the API through Dioxus context.

mod bootstrap;
mod script_loader;
mod youtube_iframe_api;

use std::rc::Rc;

use async_trait::async_trait;
use web_sys::HtmlIFrameElement;

use crate::features::video::constants::PLAYER_SCRIPT_SRC;
use crate::services::errors::LazyVideoResult;

pub use bootstrap::*;
pub use script_loader::inject_script;
pub use youtube_iframe_api::{PlayerHandle, YouTubeIframeApi};

/// Options handed to the player constructor as-is.
pub type PlayerOptions = serde_json::Value;

#[async_trait(?Send)]
pub trait PlayerApi {
    /// Element the player is bound to.
    type Frame;
    type Player: Clone;

    /// Whether the player constructor can be reached right now.
    fn is_available(&self) -> bool;

    fn create_player(&self, frame: &Self::Frame, options: &PlayerOptions) -> LazyVideoResult<Self::Player>;

    fn script_src(&self) -> &str {
        PLAYER_SCRIPT_SRC
    }

    /// Inject the API script and resolve once the browser reports it loaded.
    async fn load_script(&self) -> LazyVideoResult<()>;
}

pub type BrowserPlayerApi = dyn PlayerApi<Frame = HtmlIFrameElement, Player = PlayerHandle>;

/// Player API shared through Dioxus context.
#[derive(Clone)]
pub struct SharedPlayerApi(pub Rc<BrowserPlayerApi>);

impl SharedPlayerApi {
    pub fn new(api: impl PlayerApi<Frame = HtmlIFrameElement, Player = PlayerHandle> + 'static) -> Self {
        Self(Rc::new(api))
    }

    pub fn youtube() -> Self {
        Self::new(YouTubeIframeApi)
    }

    pub fn api(&self) -> &BrowserPlayerApi {
        self.0.as_ref()
    }
}

impl Default for SharedPlayerApi {
    fn default() -> Self {
        Self::youtube()
    }
}
