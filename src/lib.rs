//! cubelight - cube and light scene facade
//!
//! Library half of the `cubelight` binary: configuration, the built-in demo
//! scene and the system that wires a [`Scene`](cubelight_core::Scene) facade to
//! a scene store.

pub mod config;
pub mod scene;
pub mod systems;
