//! Presentation logic of the lazy video widget.
//!
//! Everything here is pure and runs without a browser: resolving a source
//! URL, the ratio box, thumbnail URLs, activation and option validation.

pub mod activation;
pub mod aspect_ratio;
pub mod config;
pub mod constants;
pub mod embed;
pub mod layout;
pub mod provider;
pub mod thumbnail;
pub mod validation;
pub mod warnings;

pub use activation::*;
pub use aspect_ratio::*;
pub use config::*;
pub use embed::*;
pub use layout::*;
pub use provider::*;
pub use thumbnail::*;
pub use validation::*;
pub use warnings::*;
