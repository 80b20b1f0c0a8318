//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod scene_system;

pub use scene_system::{FrameUpdate, SceneSystem};
