//! Services used by the video components
//!
//! - **errors**: error types shared across the crate
//! - **player**: external player API binding and its bootstrap

pub mod errors;
pub mod player;
