use dioxus::prelude::*;

/// DOM events of the thumbnail image a consumer can listen to.
///
/// The set is closed: load and error of the image, the pointer events
/// (click, contextmenu, mousedown, mouseup, mouseenter, mouseleave) and
/// focus changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThumbnailEvent {
    Load,
    Error,
    Click,
    ContextMenu,
    MouseDown,
    MouseUp,
    MouseEnter,
    MouseLeave,
    Focus,
    Blur,
}

impl ThumbnailEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThumbnailEvent::Load => "load",
            ThumbnailEvent::Error => "error",
            ThumbnailEvent::Click => "click",
            ThumbnailEvent::ContextMenu => "contextmenu",
            ThumbnailEvent::MouseDown => "mousedown",
            ThumbnailEvent::MouseUp => "mouseup",
            ThumbnailEvent::MouseEnter => "mouseenter",
            ThumbnailEvent::MouseLeave => "mouseleave",
            ThumbnailEvent::Focus => "focus",
            ThumbnailEvent::Blur => "blur",
        }
    }
}

/// Handlers attached to the thumbnail `<img>`; an event may have several.
#[derive(Clone, Default, PartialEq)]
pub struct ThumbnailListeners {
    handlers: Vec<(ThumbnailEvent, EventHandler<ThumbnailEvent>)>,
}

impl ThumbnailListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, event: ThumbnailEvent, handler: EventHandler<ThumbnailEvent>) -> Self {
        self.handlers.push((event, handler));
        self
    }

    pub fn listens_to(&self, event: ThumbnailEvent) -> bool {
        self.handlers.iter().any(|(e, _)| *e == event)
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Call every handler registered for `event`, in registration order.
    pub fn dispatch(&self, event: ThumbnailEvent) {
        for (registered, handler) in &self.handlers {
            if *registered == event {
                handler.call(event);
            }
        }
    }
}
