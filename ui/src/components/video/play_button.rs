use dioxus::prelude::*;

use crate::features::video::constants::{PLAY_BUTTON_ICON_PATH, PLAY_BUTTON_SHAPE_PATH};

#[derive(Props, PartialEq, Clone)]
pub struct PlayButtonProps {
    pub label: String,
    pub children: Element,
}

#[component]
pub fn PlayButton(props: PlayButtonProps) -> Element {
    rsx! {
        button {
            class: "y-video__button",
            r#type: "button",
            "aria-label": "{props.label}",
            {props.children}
        }
    }
}

#[component]
pub fn PlayButtonIcon() -> Element {
    rsx! {
        svg {
            view_box: "0 0 68 48",
            width: "100%",
            height: "100%",
            path {
                class: "y-video__button-shape",
                d: PLAY_BUTTON_SHAPE_PATH,
            }
            path {
                class: "y-video__button-icon",
                d: PLAY_BUTTON_ICON_PATH,
            }
        }
    }
}
