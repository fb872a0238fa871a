//! Activation state of a lazy video and the player it may own.

use super::provider::VideoProvider;
use crate::services::errors::{LazyVideoError, LazyVideoResult};

/// Which render branch is shown. `Inactive` (thumbnail) can only move to
/// `Active` (iframe); nothing moves it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivationState {
    #[default]
    Inactive,
    Active,
}

impl ActivationState {
    pub fn initial(autoplay: bool) -> Self {
        if autoplay {
            ActivationState::Active
        } else {
            ActivationState::Inactive
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ActivationState::Active)
    }

    /// Move to `Active`. Returns `true` only when the state changed.
    pub fn activate(&mut self) -> bool {
        match self {
            ActivationState::Inactive => {
                *self = ActivationState::Active;
                true
            }
            ActivationState::Active => false,
        }
    }
}

/// Events that drive a lazy video instance.
#[derive(Debug, Clone, PartialEq)]
pub enum VideoAction {
    /// The outer container was clicked.
    Click,
    /// The iframe finished loading.
    IframeLoaded,
}

/// What the component has to do after an action was reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoEffect {
    None,
    /// The iframe branch must be rendered.
    MountIframe,
    /// Notify the consumer and, when enabled, bootstrap the player.
    IframeReady,
}

impl ActivationState {
    pub fn reduce(&mut self, action: VideoAction) -> VideoEffect {
        match action {
            VideoAction::Click => {
                if self.activate() {
                    VideoEffect::MountIframe
                } else {
                    VideoEffect::None
                }
            }
            // A load can only come from a mounted iframe.
            VideoAction::IframeLoaded if self.is_active() => VideoEffect::IframeReady,
            VideoAction::IframeLoaded => VideoEffect::None,
        }
    }
}

/// What to do when the iframe reports `load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IframeLoadPlan {
    /// The load did not come from an activated iframe.
    Ignore,
    /// Tell the consumer, nothing else.
    Notify,
    /// Tell the consumer and warn that the provider has no player API.
    NotifyWithoutPlayerApi,
    /// Tell the consumer and bootstrap the player.
    NotifyAndBootstrap,
}

/// Decide how an iframe `load` is handled. `player_claimed` is true when the
/// player cell already holds a player or one is being created.
pub fn plan_iframe_load(
    state: ActivationState,
    provider: VideoProvider,
    enablejsapi: bool,
    player_claimed: bool,
) -> IframeLoadPlan {
    let mut state = state;
    if state.reduce(VideoAction::IframeLoaded) != VideoEffect::IframeReady {
        return IframeLoadPlan::Ignore;
    }
    if !enablejsapi || player_claimed {
        IframeLoadPlan::Notify
    } else if !provider.supports_player_api() {
        IframeLoadPlan::NotifyWithoutPlayerApi
    } else {
        IframeLoadPlan::NotifyAndBootstrap
    }
}

/// Holds at most one player instance for the lifetime of a component.
///
/// A bootstrap claims the cell with [`PlayerCell::begin`] before it starts,
/// so a second iframe `load` while the first bootstrap is still polling does
/// not start another one.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCell<P> {
    player: Option<P>,
    pending: bool,
}

impl<P> Default for PlayerCell<P> {
    fn default() -> Self {
        Self {
            player: None,
            pending: false,
        }
    }
}

impl<P: Clone> PlayerCell<P> {
    pub fn get(&self) -> Option<P> {
        self.player.clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.player.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Initialized, or a bootstrap is in flight.
    pub fn is_claimed(&self) -> bool {
        self.pending || self.player.is_some()
    }

    /// Claim the cell for a bootstrap. Returns `false` when it is already claimed.
    pub fn begin(&mut self) -> bool {
        if self.is_claimed() {
            return false;
        }
        self.pending = true;
        true
    }

    /// Release a claim after a failed bootstrap.
    pub fn abort(&mut self) {
        self.pending = false;
    }

    pub fn install(&mut self, player: P) -> LazyVideoResult<()> {
        if self.player.is_some() {
            return Err(LazyVideoError::PlayerAlreadyInitialized);
        }
        self.player = Some(player);
        self.pending = false;
        Ok(())
    }
}
