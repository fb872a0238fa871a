use dioxus::prelude::*;

use crate::features::video::ResolvedIframeAttributes;
use crate::utils::intern_attribute_name;

#[derive(Props, PartialEq, Clone)]
pub struct VideoFrameProps {
    pub src: String,
    pub dom_id: String,
    pub attributes: ResolvedIframeAttributes,
    pub onload: EventHandler<()>,
}

#[component]
pub fn VideoFrame(props: VideoFrameProps) -> Element {
    let attributes = &props.attributes;
    let onload = props.onload;
    let extra: Vec<Attribute> = attributes
        .extra
        .iter()
        .map(|(name, value)| Attribute::new(intern_attribute_name(name), value.to_string(), None, false))
        .collect();

    rsx! {
        iframe {
            id: "{props.dom_id}",
            class: "y-video__media",
            src: "{props.src}",
            title: attributes.title.clone(),
            name: attributes.name.clone(),
            allow: "{attributes.allow}",
            allowfullscreen: attributes.allowfullscreen,
            "frameborder": "{attributes.frameborder}",
            "referrerpolicy": attributes.referrerpolicy.clone(),
            "width": attributes.width.clone(),
            "height": attributes.height.clone(),
            onload: move |_| onload.call(()),
            ..extra,
        }
    }
}
