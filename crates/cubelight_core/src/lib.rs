//! Core types for cubelight
//!
//! This crate provides the scene facade and the collaborators it is usually
//! wired to:
//!
//! - [`Scene`] - Facade over four injected capabilities, filling in defaults
//! - [`SceneCapabilities`] - The add/clear light and add/clear cube callables
//! - [`CubeOptions`] / [`LightOptions`] - Partial parameter sets with defaults
//! - [`SceneStore`] - Owns cubes and lights, keyed by generational keys
//! - [`CommandQueue`] - Deferred capabilities, drained into a store once per frame
//! - [`FrameData`] - GPU-ready instance and light data packed from a store
//! - [`SceneScript`] - Loadable/saveable list of cubes and lights

mod options;
mod capabilities;
mod facade;
mod store;
mod commands;
mod frame;
mod script;

pub use options::{
    CubeOptions, CubeParams, LightOptions, LightParams,
    DEFAULT_CUBE_COLOR, DEFAULT_CUBE_POSITION, DEFAULT_CUBE_SCALE,
    DEFAULT_LIGHT_COLOR, DEFAULT_LIGHT_POSITION,
};
pub use capabilities::{
    store_capabilities, AddCubeFn, AddLightFn, ClearFn, SceneCapabilities,
};
pub use facade::Scene;
pub use store::{
    Cube, CubeKey, DirtyFlags, Light, LightKey, ObjectKind, SceneStore, StoreError, StoreLimits,
};
pub use commands::{Command, CommandQueue};
pub use frame::{FrameData, InstanceRaw, LightRaw, MAX_UNIFORM_LIGHTS};
pub use script::{ScriptLoadError, ScriptSaveError, ScriptSummary, SceneScript};

// Re-export commonly used types from cubelight_math for convenience
pub use cubelight_math::{Mat4, Vec3};
