use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use lazy_video::{
    EmbedParameters, IframeAttributes, IframeLoaded, LazyVideo, LazyVideoError, LazyVideoStyles,
    PlayerInitialized, PreviewImageSize, ThumbnailEvent, ThumbnailListeners, ThumbnailOverride,
};
use serde_json::json;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const SRC: &str = "https://www.youtube.com/embed/4JS70KB9GS0";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        LazyVideoStyles {}

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

#[component]
fn Home() -> Element {
    let listeners = ThumbnailListeners::new().on(
        ThumbnailEvent::Load,
        EventHandler::new(|event: ThumbnailEvent| tracing::info!("thumbnail {}", event.as_str())),
    );

    let on_iframe_load = move |loaded: IframeLoaded| {
        let id = loaded.iframe.map(|iframe| iframe.id());
        tracing::info!("iframe loaded: {:?}", id);
    };

    // Stop the video three seconds after the player is bound.
    let on_player_init = move |init: PlayerInitialized| {
        spawn(async move {
            TimeoutFuture::new(3_000).await;
            if let Err(err) = init.player.invoke("stopVideo") {
                tracing::error!("{}", err);
            }
        });
    };

    rsx! {
        ul {
            class: "demo",
            li {
                style: "width: 512px",
                LazyVideo { src: SRC, alt: "foo", button_label: "baz", thumbnail_listeners: listeners }
            }
            li {
                LazyVideo {
                    src: SRC,
                    aspect_ratio: "1:1",
                    parameters: EmbedParameters::new().with("start", 32),
                }
            }
            li {
                LazyVideo { src: SRC, thumbnail: ThumbnailOverride::new("https://placehold.co/1280x720") }
            }
            li {
                LazyVideo {
                    src: SRC,
                    preview_image_size: PreviewImageSize::Default,
                    webp: false,
                    autoplay: true,
                    iframe_attributes: IframeAttributes::default().with_id("foo"),
                    enablejsapi: true,
                    inject_player_script: true,
                    player_options: json!({ "playerVars": { "rel": 0 } }),
                    on_iframe_load: on_iframe_load,
                    on_player_init: on_player_init,
                    on_error: |err: LazyVideoError| tracing::error!("{}", err),
                }
            }
            li {
                LazyVideo { src: "https://www.loom.com/embed/2b4c5c8d1e3f4a6b8c9d0e1f2a3b4c5d" }
            }
        }
    }
}
