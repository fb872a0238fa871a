//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: logging macros for browser console output (tracing off-browser)
//! - **dom**: small `web_sys` helpers used by the player bootstrap

pub mod console_macros;
pub mod dom;

pub use dom::*;

/// Prefix attached to every console line emitted by this crate.
pub const LOG_TAG: &str = "[lazy-video]:";
