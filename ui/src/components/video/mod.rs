pub mod lazy_video;
pub mod listeners;
pub mod play_button;
pub mod player_slot;
pub mod styles;
pub mod thumbnail;
pub mod video_frame;

pub use lazy_video::*;
pub use listeners::*;
pub use play_button::*;
pub use player_slot::*;
pub use styles::*;
pub use thumbnail::*;
pub use video_frame::*;
