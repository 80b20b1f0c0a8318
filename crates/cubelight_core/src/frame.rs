//! Per-frame GPU data
//!
//! Packs a [`SceneStore`] into the instance buffer and light uniform layout
//! the cube shader reads. Both structs follow std140-style padding: every
//! `vec3` is followed by a 4-byte pad.

use bytemuck::{Pod, Zeroable};

use crate::store::SceneStore;

/// Number of light slots in the scene uniform
pub const MAX_UNIFORM_LIGHTS: usize = 2;

/// One cube instance as uploaded to the GPU
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 3],
    pub _pad: f32,
}

/// One light slot in the scene uniform
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct LightRaw {
    pub position: [f32; 3],
    pub _pad_p: f32,
    pub color: [f32; 3],
    pub _pad_c: f32,
}

/// GPU-ready snapshot of a store
#[derive(Clone, Debug, PartialEq)]
pub struct FrameData {
    pub instances: Vec<InstanceRaw>,
    /// Unused slots are black lights at the origin
    pub lights: [LightRaw; MAX_UNIFORM_LIGHTS],
    /// Lights in the store that did not fit into a slot
    pub dropped_lights: usize,
}

impl FrameData {
    /// Pack every cube and the first [`MAX_UNIFORM_LIGHTS`] lights
    pub fn pack(store: &SceneStore) -> Self {
        let instances = store
            .cubes()
            .map(|(_, cube)| InstanceRaw {
                model: cube.model,
                color: cube.color.to_array(),
                _pad: 0.0,
            })
            .collect();

        let mut lights = [LightRaw::zeroed(); MAX_UNIFORM_LIGHTS];
        for (slot, (_, light)) in lights.iter_mut().zip(store.lights()) {
            *slot = LightRaw {
                position: light.position.to_array(),
                _pad_p: 0.0,
                color: light.color.to_array(),
                _pad_c: 0.0,
            };
        }

        let dropped_lights = store.light_count().saturating_sub(MAX_UNIFORM_LIGHTS);
        if dropped_lights > 0 {
            log::warn!(
                "Scene has {} lights but only {} are rendered",
                store.light_count(),
                MAX_UNIFORM_LIGHTS
            );
        }

        Self { instances, lights, dropped_lights }
    }

    /// Instance buffer contents
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Light uniform contents
    pub fn light_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lights)
    }
}
