use dioxus::prelude::*;

use crate::features::video::PlayerCell;
use crate::services::errors::LazyVideoResult;
use crate::services::player::PlayerHandle;

/// Where a `LazyVideo` stores its player, readable by the consumer.
#[derive(Clone, Copy, PartialEq)]
pub struct PlayerSlot {
    cell: Signal<PlayerCell<PlayerHandle>>,
}

impl PlayerSlot {
    /// The current player instance, or `None` until one was initialized.
    pub fn get_player_instance(&self) -> Option<PlayerHandle> {
        self.cell.read().get()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.peek().is_initialized()
    }

    /// A player exists or one is being bootstrapped.
    pub fn is_claimed(&self) -> bool {
        self.cell.peek().is_claimed()
    }

    pub(crate) fn begin(&mut self) -> bool {
        self.cell.with_mut(|cell| cell.begin())
    }

    pub(crate) fn abort(&mut self) {
        self.cell.with_mut(|cell| cell.abort());
    }

    pub(crate) fn install(&mut self, player: PlayerHandle) -> LazyVideoResult<()> {
        self.cell.with_mut(|cell| cell.install(player))
    }
}

pub fn use_player_slot() -> PlayerSlot {
    PlayerSlot {
        cell: use_signal(PlayerCell::default),
    }
}
