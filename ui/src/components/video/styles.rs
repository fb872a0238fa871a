use dioxus::prelude::*;

const LAZY_VIDEO_CSS: Asset = asset!("/assets/lazy_video.css");

/// Links the widget stylesheet. Render once per page.
#[component]
pub fn LazyVideoStyles() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: LAZY_VIDEO_CSS }
    }
}
