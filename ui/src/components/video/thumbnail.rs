use dioxus::prelude::*;

use super::listeners::{ThumbnailEvent, ThumbnailListeners};
use crate::features::video::ThumbnailSources;

#[derive(Props, PartialEq, Clone)]
pub struct VideoThumbnailProps {
    pub sources: ThumbnailSources,
    pub alt: String,
    #[props(default)]
    pub listeners: ThumbnailListeners,
}

fn forward<T: 'static>(listeners: &ThumbnailListeners, event: ThumbnailEvent) -> impl FnMut(Event<T>) + 'static {
    let listeners = listeners.clone();
    move |_| listeners.dispatch(event)
}

/// Preview picture shared by every provider: an optional WebP source plus
/// the raster image.
#[component]
pub fn VideoThumbnail(props: VideoThumbnailProps) -> Element {
    let listeners = &props.listeners;

    rsx! {
        picture {
            {props.sources.modern.as_ref().map(|modern| rsx! {
                source {
                    "srcset": "{modern}",
                    r#type: "image/webp",
                }
            })}
            img {
                class: "y-video__media y-video__media--type--img",
                src: "{props.sources.raster}",
                alt: "{props.alt}",
                onload: forward::<ImageData>(listeners, ThumbnailEvent::Load),
                onerror: forward::<ImageData>(listeners, ThumbnailEvent::Error),
                onclick: forward::<MouseData>(listeners, ThumbnailEvent::Click),
                oncontextmenu: forward::<MouseData>(listeners, ThumbnailEvent::ContextMenu),
                onmousedown: forward::<MouseData>(listeners, ThumbnailEvent::MouseDown),
                onmouseup: forward::<MouseData>(listeners, ThumbnailEvent::MouseUp),
                onmouseenter: forward::<MouseData>(listeners, ThumbnailEvent::MouseEnter),
                onmouseleave: forward::<MouseData>(listeners, ThumbnailEvent::MouseLeave),
                onfocus: forward::<FocusData>(listeners, ThumbnailEvent::Focus),
                onblur: forward::<FocusData>(listeners, ThumbnailEvent::Blur),
            }
        }
    }
}
