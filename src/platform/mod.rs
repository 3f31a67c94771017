//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events
//! - Storage (LocalStorage on web)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod storage;

pub use input::{Command, InputQueue, command_for_key};
