//! Platform abstraction layer
//!
//! Turns host events into simulation input. Rendering, audio and resize
//! handling stay with the host.

pub mod input;

pub use input::{InputState, Key};
