//! Core engine types: RNG and configuration.
//!
//! Everything else takes these as explicit arguments; the engine keeps no
//! global state.

pub mod config;
pub mod rng;

pub use config::GameConfig;
pub use rng::{RiddleRng, RiddleRngState};
