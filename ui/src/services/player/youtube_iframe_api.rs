//! `window.YT.Player` binding for the browser.

use async_trait::async_trait;
use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlIFrameElement;

use super::script_loader::inject_script;
use super::{PlayerApi, PlayerOptions};
use crate::services::errors::{LazyVideoError, LazyVideoResult};

/// A constructed `YT.Player` instance.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerHandle(JsValue);

impl PlayerHandle {
    pub fn new(value: JsValue) -> Self {
        Self(value)
    }

    pub fn as_js(&self) -> &JsValue {
        &self.0
    }

    /// Call a zero-argument player method such as `playVideo` or `stopVideo`.
    pub fn invoke(&self, method: &str) -> LazyVideoResult<JsValue> {
        let function = Reflect::get(&self.0, &JsValue::from_str(method))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or_else(|| LazyVideoError::PlayerConstruction {
                reason: format!("player has no method `{method}`"),
            })?;
        function
            .call0(&self.0)
            .map_err(|e| LazyVideoError::PlayerConstruction {
                reason: format!("`{method}` failed: {e:?}"),
            })
    }
}

/// The YouTube IFrame Player API, looked up on `window` at call time.
#[derive(Debug, Clone, Copy, Default)]
pub struct YouTubeIframeApi;

impl YouTubeIframeApi {
    fn player_constructor() -> Option<Function> {
        let window = web_sys::window()?;
        let yt = Reflect::get(&window, &JsValue::from_str("YT")).ok()?;
        if yt.is_undefined() || yt.is_null() {
            return None;
        }
        Reflect::get(&yt, &JsValue::from_str("Player"))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }
}

#[async_trait(?Send)]
impl PlayerApi for YouTubeIframeApi {
    type Frame = HtmlIFrameElement;
    type Player = PlayerHandle;

    fn is_available(&self) -> bool {
        Self::player_constructor().is_some()
    }

    fn create_player(&self, frame: &HtmlIFrameElement, options: &PlayerOptions) -> LazyVideoResult<PlayerHandle> {
        let constructor = Self::player_constructor().ok_or(LazyVideoError::PlayerApiUnavailable)?;
        let options = options
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| LazyVideoError::PlayerConstruction {
                reason: format!("player options could not be converted: {e}"),
            })?;

        let args = Array::of2(frame.as_ref(), &options);
        Reflect::construct(&constructor, &args)
            .map(PlayerHandle::new)
            .map_err(|e| LazyVideoError::PlayerConstruction {
                reason: format!("{e:?}"),
            })
    }

    async fn load_script(&self) -> LazyVideoResult<()> {
        inject_script(self.script_src()).await
    }
}
