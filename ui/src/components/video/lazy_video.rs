use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use web_sys::HtmlIFrameElement;

use super::listeners::ThumbnailListeners;
use super::play_button::{PlayButton, PlayButtonIcon};
use super::player_slot::{use_player_slot, PlayerSlot};
use super::thumbnail::VideoThumbnail;
use super::video_frame::VideoFrame;
use crate::features::video::constants::*;
use crate::features::video::*;
use crate::services::errors::LazyVideoError;
use crate::services::player::{bootstrap_player, BootstrapOptions, PlayerHandle, PlayerOptions, SharedPlayerApi};
use crate::utils::{find_iframe, next_frame_dom_id};
use crate::{console_debug, console_warn};

/// Payload of `on_iframe_load`.
#[derive(Debug, Clone, PartialEq)]
pub struct IframeLoaded {
    pub iframe: Option<HtmlIFrameElement>,
}

/// Payload of `on_player_init`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerInitialized {
    pub player: PlayerHandle,
}

fn default_player_options() -> PlayerOptions {
    PlayerOptions::Object(Default::default())
}

#[derive(Props, PartialEq, Clone)]
pub struct LazyVideoProps {
    /// Embed URL of a YouTube, YouTube no-cookie or Loom video.
    #[props(into)]
    pub src: String,
    #[props(into, default = DEFAULT_ALT_ATTRIBUTE.to_string())]
    pub alt: String,
    #[props(into, default = DEFAULT_BUTTON_LABEL.to_string())]
    pub button_label: String,
    /// `W:H`, e.g. `4:3`.
    #[props(into, default = DEFAULT_ASPECT_RATIO.to_string())]
    pub aspect_ratio: String,
    pub preview_image_size: Option<PreviewImageSize>,
    pub thumbnail: Option<ThumbnailOverride>,
    #[props(default)]
    pub iframe_attributes: IframeAttributes,
    #[props(default = true)]
    pub webp: bool,
    /// Start with the iframe instead of the thumbnail.
    #[props(default)]
    pub autoplay: bool,
    #[props(default)]
    pub thumbnail_listeners: ThumbnailListeners,
    #[props(default)]
    pub enablejsapi: bool,
    #[props(default = default_player_options())]
    pub player_options: PlayerOptions,
    #[props(default)]
    pub inject_player_script: bool,
    #[props(default)]
    pub parameters: EmbedParameters,
    /// Replaces the whole play button.
    pub button: Option<Element>,
    /// Replaces the icon inside the default play button.
    pub icon: Option<Element>,
    pub on_iframe_load: Option<EventHandler<IframeLoaded>>,
    pub on_player_init: Option<EventHandler<PlayerInitialized>>,
    pub on_error: Option<EventHandler<LazyVideoError>>,
    /// Exposes the player instance to the consumer.
    pub player: Option<PlayerSlot>,
}

impl LazyVideoProps {
    pub fn to_config(&self) -> LazyVideoConfig {
        LazyVideoConfig {
            src: self.src.clone(),
            alt: self.alt.clone(),
            button_label: self.button_label.clone(),
            aspect_ratio: self.aspect_ratio.clone(),
            preview_image_size: self.preview_image_size.map(|size| size.as_str().to_string()),
            thumbnail: self.thumbnail.clone(),
            iframe_attributes: self.iframe_attributes.clone(),
            webp: self.webp,
            autoplay: self.autoplay,
            enablejsapi: self.enablejsapi,
            player_options: self.player_options.clone(),
            inject_player_script: self.inject_player_script,
            parameters: self.parameters.clone(),
        }
    }
}

/// A video that renders as a thumbnail with a play button and only mounts
/// the embed iframe once clicked.
#[component]
pub fn LazyVideo(props: LazyVideoProps) -> Element {
    let config = props.to_config();

    use_hook(|| config.validate().log());

    let mut activation = use_signal(|| ActivationState::initial(props.autoplay));
    let own_slot = use_player_slot();
    let player_slot = props.player.unwrap_or(own_slot);
    let player_api = try_use_context::<SharedPlayerApi>().unwrap_or_default();
    let frame_dom_id = use_hook(|| {
        props
            .iframe_attributes
            .id
            .clone()
            .unwrap_or_else(next_frame_dom_id)
    });

    let layout_cache = use_hook(|| Rc::new(RefCell::new(LayoutCache::default())));
    let mut warnings = Warnings::new();
    let VideoLayout { source, padding_bottom } = layout_cache
        .borrow_mut()
        .get_or_resolve(&config.src, &config.aspect_ratio, &mut warnings);
    warnings.flush();

    let on_iframe_load = props.on_iframe_load;
    let on_player_init = props.on_player_init;
    let on_error = props.on_error;

    let on_frame_load = {
        let frame_dom_id = frame_dom_id.clone();
        let config = config.clone();
        let provider = source.provider;

        move |_: ()| {
            let plan = plan_iframe_load(
                *activation.peek(),
                provider,
                config.enablejsapi,
                player_slot.is_claimed(),
            );
            if plan == IframeLoadPlan::Ignore {
                return;
            }

            let iframe = find_iframe(&frame_dom_id);
            if let Some(handler) = on_iframe_load {
                handler.call(IframeLoaded { iframe: iframe.clone() });
            }

            match plan {
                IframeLoadPlan::NotifyAndBootstrap => {}
                IframeLoadPlan::NotifyWithoutPlayerApi => {
                    console_warn!("{} has no player API, `enablejsapi` is ignored", provider.name());
                    return;
                }
                IframeLoadPlan::Notify | IframeLoadPlan::Ignore => return,
            }

            let mut player_slot = player_slot;
            if !player_slot.begin() {
                return;
            }

            let api = player_api.clone();
            let player_options = config.player_options.clone();
            let options = BootstrapOptions {
                inject_player_script: config.inject_player_script,
                ..Default::default()
            };

            // Owned by this component's scope: unmounting cancels the poll.
            spawn(async move {
                let result = bootstrap_player(api.api(), iframe.as_ref(), &player_options, options)
                    .await
                    .and_then(|player| player_slot.install(player.clone()).map(|_| player));

                match result {
                    Ok(player) => {
                        console_debug!("Player initialized");
                        if let Some(handler) = on_player_init {
                            handler.call(PlayerInitialized { player });
                        }
                    }
                    Err(err) => {
                        player_slot.abort();
                        if let Some(handler) = on_error {
                            handler.call(err);
                        }
                    }
                }
            });
        }
    };

    let is_active = activation().is_active();

    let body = if is_active {
        rsx! {
            VideoFrame {
                src: config.embed_src(),
                dom_id: frame_dom_id.clone(),
                attributes: config.iframe_attributes.merged_over_defaults(),
                onload: on_frame_load,
            }
        }
    } else {
        let sources = ThumbnailSources::resolve(
            &source,
            config.preview_image_size(),
            config.thumbnail.as_ref(),
            config.webp,
        );
        let button = props.button.clone().unwrap_or_else(|| {
            let icon = props.icon.clone().unwrap_or_else(|| rsx! { PlayButtonIcon {} });
            rsx! {
                PlayButton { label: props.button_label.clone(), {icon} }
            }
        });

        rsx! {
            VideoThumbnail {
                sources: sources,
                alt: props.alt.clone(),
                listeners: props.thumbnail_listeners.clone(),
            }
            {button}
        }
    };

    rsx! {
        div {
            class: "y-video",
            onclick: move |_| {
                let mut next = *activation.peek();
                if next.reduce(VideoAction::Click) == VideoEffect::MountIframe {
                    activation.set(next);
                }
            },
            div {
                class: "y-video__inner",
                style: "padding-bottom: {padding_bottom}",
                {body}
            }
        }
    }
}
