//! Player bootstrap: runs after the iframe loaded and `enablejsapi` is set.

use super::{PlayerApi, PlayerOptions};
use crate::features::video::constants::PLAYER_CHECK_MS;
use crate::services::errors::{LazyVideoError, LazyVideoResult};
use crate::{console_debug, console_info};

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
#[cfg(not(target_arch = "wasm32"))]
use tokio::time::{sleep, Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapOptions {
    pub inject_player_script: bool,
    pub poll_interval_ms: u32,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            inject_player_script: false,
            poll_interval_ms: PLAYER_CHECK_MS,
        }
    }
}

/// First step the bootstrap takes, decided from the API's availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapPlan {
    Instantiate,
    InjectScriptThenPoll,
}

pub fn plan_bootstrap(api_available: bool, inject_player_script: bool) -> LazyVideoResult<BootstrapPlan> {
    match (api_available, inject_player_script) {
        (true, _) => Ok(BootstrapPlan::Instantiate),
        (false, true) => Ok(BootstrapPlan::InjectScriptThenPoll),
        (false, false) => Err(LazyVideoError::PlayerApiUnavailable),
    }
}

async fn pause(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    TimeoutFuture::new(ms).await;

    #[cfg(not(target_arch = "wasm32"))]
    sleep(Duration::from_millis(ms as u64)).await;
}

/// Check for the player constructor every `interval_ms` until it appears.
///
/// There is no attempt cap. Dropping the future stops the polling, which is
/// how a component's scope cancels it on unmount.
pub async fn wait_for_player_api<A: PlayerApi + ?Sized>(api: &A, interval_ms: u32) -> u32 {
    let mut checks = 0;
    loop {
        checks += 1;
        if api.is_available() {
            console_debug!("Player API available after {} checks", checks);
            return checks;
        }
        pause(interval_ms).await;
    }
}

/// Bind a player to `frame`. A missing frame is a wiring mistake and fails.
pub fn instantiate_player<A: PlayerApi + ?Sized>(
    api: &A,
    frame: Option<&A::Frame>,
    options: &PlayerOptions,
) -> LazyVideoResult<A::Player> {
    let frame = frame.ok_or(LazyVideoError::MissingIframe)?;
    api.create_player(frame, options)
}

/// Instantiate the player now, or load the API script first and wait for it.
/// Failures are logged at their severity before they are returned.
pub async fn bootstrap_player<A: PlayerApi + ?Sized>(
    api: &A,
    frame: Option<&A::Frame>,
    player_options: &PlayerOptions,
    options: BootstrapOptions,
) -> LazyVideoResult<A::Player> {
    run_bootstrap(api, frame, player_options, options)
        .await
        .inspect_err(LazyVideoError::report)
}

async fn run_bootstrap<A: PlayerApi + ?Sized>(
    api: &A,
    frame: Option<&A::Frame>,
    player_options: &PlayerOptions,
    options: BootstrapOptions,
) -> LazyVideoResult<A::Player> {
    let plan = plan_bootstrap(api.is_available(), options.inject_player_script)?;

    if plan == BootstrapPlan::InjectScriptThenPoll {
        console_info!("Player API missing, injecting {}", api.script_src());
        api.load_script().await?;
        wait_for_player_api(api, options.poll_interval_ms).await;
    }

    instantiate_player(api, frame, player_options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::cell::Cell;

    /// Becomes available `checks_after_load` checks after its script loaded.
    struct MockApi {
        available: Cell<bool>,
        script_loaded: Cell<bool>,
        checks_after_load: Cell<u32>,
        scripts_injected: Cell<u32>,
        players_created: Cell<u32>,
    }

    impl MockApi {
        fn new(available: bool, checks_after_load: u32) -> Self {
            Self {
                available: Cell::new(available),
                script_loaded: Cell::new(false),
                checks_after_load: Cell::new(checks_after_load),
                scripts_injected: Cell::new(0),
                players_created: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl PlayerApi for MockApi {
        type Frame = &'static str;
        type Player = String;

        fn is_available(&self) -> bool {
            if self.script_loaded.get() && !self.available.get() {
                let remaining = self.checks_after_load.get();
                if remaining == 0 {
                    self.available.set(true);
                } else {
                    self.checks_after_load.set(remaining - 1);
                }
            }
            self.available.get()
        }

        fn create_player(&self, frame: &&'static str, options: &PlayerOptions) -> LazyVideoResult<String> {
            self.players_created.set(self.players_created.get() + 1);
            Ok(format!("player:{frame}:{options}"))
        }

        async fn load_script(&self) -> LazyVideoResult<()> {
            self.scripts_injected.set(self.scripts_injected.get() + 1);
            self.script_loaded.set(true);
            Ok(())
        }
    }

    fn fast(inject: bool) -> BootstrapOptions {
        BootstrapOptions {
            inject_player_script: inject,
            poll_interval_ms: 1,
        }
    }

    #[test]
    fn test_plan_bootstrap() {
        assert_eq!(plan_bootstrap(true, false), Ok(BootstrapPlan::Instantiate));
        assert_eq!(plan_bootstrap(true, true), Ok(BootstrapPlan::Instantiate));
        assert_eq!(plan_bootstrap(false, true), Ok(BootstrapPlan::InjectScriptThenPoll));
        assert_eq!(plan_bootstrap(false, false), Err(LazyVideoError::PlayerApiUnavailable));
    }

    #[test]
    fn test_default_poll_interval() {
        assert_eq!(BootstrapOptions::default().poll_interval_ms, 32);
    }

    #[tokio::test]
    async fn test_available_api_instantiates_immediately() {
        let api = MockApi::new(true, 0);
        let player = bootstrap_player(&api, Some(&"frame"), &json!({"height": 390}), fast(false))
            .await
            .unwrap();

        assert_eq!(player, r#"player:frame:{"height":390}"#);
        assert_eq!(api.scripts_injected.get(), 0);
        assert_eq!(api.players_created.get(), 1);
    }

    #[tokio::test]
    async fn test_missing_api_is_injected_and_polled() {
        let api = MockApi::new(false, 3);
        let player = bootstrap_player(&api, Some(&"frame"), &json!({}), fast(true)).await.unwrap();

        assert_eq!(player, "player:frame:{}");
        assert_eq!(api.scripts_injected.get(), 1);
        assert_eq!(api.players_created.get(), 1);
    }

    #[tokio::test]
    async fn test_missing_api_without_injection_fails() {
        let api = MockApi::new(false, 0);
        let result = bootstrap_player(&api, Some(&"frame"), &json!({}), fast(false)).await;

        assert_eq!(result, Err(LazyVideoError::PlayerApiUnavailable));
        assert_eq!(api.scripts_injected.get(), 0);
        assert_eq!(api.players_created.get(), 0);
    }

    #[tokio::test]
    async fn test_missing_iframe_fails_loudly() {
        let api = MockApi::new(true, 0);
        let result = bootstrap_player(&api, None, &json!({}), fast(false)).await;

        assert_eq!(result, Err(LazyVideoError::MissingIframe));
        assert_eq!(api.players_created.get(), 0);
    }

    #[tokio::test]
    async fn test_wait_counts_checks() {
        let api = MockApi::new(false, 2);
        api.load_script().await.unwrap();
        // two misses, then the third check succeeds
        assert_eq!(wait_for_player_api(&api, 1).await, 3);
    }

    #[tokio::test]
    async fn test_dropping_the_wait_stops_polling() {
        let api = MockApi::new(false, u32::MAX);
        api.load_script().await.unwrap();

        let outcome = tokio::time::timeout(Duration::from_millis(20), wait_for_player_api(&api, 1)).await;
        assert!(outcome.is_err());

        let remaining = api.checks_after_load.get();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(api.checks_after_load.get(), remaining);
    }
}
