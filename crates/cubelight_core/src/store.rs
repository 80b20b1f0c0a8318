//! Scene store
//!
//! The [`SceneStore`] owns every cube and light in the scene. It is the usual
//! collaborator behind a facade's capabilities, and the renderer reads from
//! it once per frame.

use bitflags::bitflags;
use cubelight_math::{mat4, Mat4, Vec3};
use slotmap::{new_key_type, SlotMap};

use crate::options::{CubeParams, LightParams};

new_key_type! {
    /// Generational key to a cube in the store
    pub struct CubeKey;
    /// Generational key to a light in the store
    pub struct LightKey;
}

bitflags! {
    /// Flags indicating which object lists have changed since the last frame
    ///
    /// The renderer rebuilds only the GPU data whose flag is set.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        /// No changes
        const NONE = 0;
        /// Cubes were added or removed
        const CUBES = 1 << 0;
        /// Lights were added or removed
        const LIGHTS = 1 << 1;
        /// Everything needs a rebuild
        const ALL = Self::CUBES.bits() | Self::LIGHTS.bits();
    }
}

/// A cube instance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cube {
    pub position: Vec3,
    pub color: Vec3,
    pub scale: f32,
    /// Model matrix (translation * uniform scale)
    pub model: Mat4,
}

impl Cube {
    /// Build a cube from resolved parameters
    pub fn from_params(p: &CubeParams) -> Self {
        let position = Vec3::new(p.x, p.y, p.z);
        Self {
            position,
            color: Vec3::new(p.r, p.g, p.b),
            scale: p.scale,
            model: mat4::from_translation_scale(position, p.scale),
        }
    }
}

/// A point light
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Vec3,
}

impl Light {
    /// Build a light from resolved parameters
    pub fn from_params(p: &LightParams) -> Self {
        Self {
            position: Vec3::new(p.x, p.y, p.z),
            color: Vec3::new(p.r, p.g, p.b),
        }
    }
}

/// Capacity limits for a store
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreLimits {
    pub max_cubes: usize,
    pub max_lights: usize,
}

impl Default for StoreLimits {
    fn default() -> Self {
        Self {
            max_cubes: 4096,
            max_lights: 16,
        }
    }
}

/// Which kind of object an error refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Cube,
    Light,
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectKind::Cube => write!(f, "cube"),
            ObjectKind::Light => write!(f, "light"),
        }
    }
}

/// Error from a store operation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The key does not refer to a live object (removed or cleared)
    InvalidKey(ObjectKind),
    /// Adding would exceed the configured limit
    CapacityExceeded { kind: ObjectKind, limit: usize },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::InvalidKey(kind) => write!(f, "Invalid {} key", kind),
            StoreError::CapacityExceeded { kind, limit } => {
                write!(f, "Cannot add {}: limit of {} reached", kind, limit)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Container for all cubes and lights
///
/// Iteration follows insertion order, which is the order lights are packed
/// into GPU slots.
pub struct SceneStore {
    cubes: SlotMap<CubeKey, Cube>,
    cube_order: Vec<CubeKey>,
    lights: SlotMap<LightKey, Light>,
    light_order: Vec<LightKey>,
    limits: StoreLimits,
    dirty: DirtyFlags,
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneStore {
    /// Create an empty store with default limits
    pub fn new() -> Self {
        Self::with_limits(StoreLimits::default())
    }

    /// Create an empty store with the given limits
    pub fn with_limits(limits: StoreLimits) -> Self {
        Self {
            cubes: SlotMap::with_key(),
            cube_order: Vec::new(),
            lights: SlotMap::with_key(),
            light_order: Vec::new(),
            limits,
            dirty: DirtyFlags::NONE,
        }
    }

    /// The configured limits
    pub fn limits(&self) -> StoreLimits {
        self.limits
    }

    /// Add a cube, returning its key
    pub fn add_cube(&mut self, params: CubeParams) -> Result<CubeKey, StoreError> {
        if self.cubes.len() >= self.limits.max_cubes {
            return Err(StoreError::CapacityExceeded {
                kind: ObjectKind::Cube,
                limit: self.limits.max_cubes,
            });
        }
        let key = self.cubes.insert(Cube::from_params(&params));
        self.cube_order.push(key);
        self.dirty |= DirtyFlags::CUBES;
        log::debug!("Added cube at ({}, {}, {}) scale {}", params.x, params.y, params.z, params.scale);
        Ok(key)
    }

    /// Add a light, returning its key
    pub fn add_light(&mut self, params: LightParams) -> Result<LightKey, StoreError> {
        if self.lights.len() >= self.limits.max_lights {
            return Err(StoreError::CapacityExceeded {
                kind: ObjectKind::Light,
                limit: self.limits.max_lights,
            });
        }
        let key = self.lights.insert(Light::from_params(&params));
        self.light_order.push(key);
        self.dirty |= DirtyFlags::LIGHTS;
        log::debug!("Added light at ({}, {}, {})", params.x, params.y, params.z);
        Ok(key)
    }

    /// Remove a cube by key
    pub fn remove_cube(&mut self, key: CubeKey) -> Result<Cube, StoreError> {
        let cube = self
            .cubes
            .remove(key)
            .ok_or(StoreError::InvalidKey(ObjectKind::Cube))?;
        self.cube_order.retain(|k| *k != key);
        self.dirty |= DirtyFlags::CUBES;
        Ok(cube)
    }

    /// Remove a light by key
    pub fn remove_light(&mut self, key: LightKey) -> Result<Light, StoreError> {
        let light = self
            .lights
            .remove(key)
            .ok_or(StoreError::InvalidKey(ObjectKind::Light))?;
        self.light_order.retain(|k| *k != key);
        self.dirty |= DirtyFlags::LIGHTS;
        Ok(light)
    }

    /// Get a cube by key
    pub fn cube(&self, key: CubeKey) -> Option<&Cube> {
        self.cubes.get(key)
    }

    /// Get a light by key
    pub fn light(&self, key: LightKey) -> Option<&Light> {
        self.lights.get(key)
    }

    /// Remove every cube
    pub fn clear_cubes(&mut self) {
        if !self.cubes.is_empty() {
            log::debug!("Clearing {} cubes", self.cubes.len());
            self.cubes.clear();
            self.cube_order.clear();
            self.dirty |= DirtyFlags::CUBES;
        }
    }

    /// Remove every light
    pub fn clear_lights(&mut self) {
        if !self.lights.is_empty() {
            log::debug!("Clearing {} lights", self.lights.len());
            self.lights.clear();
            self.light_order.clear();
            self.dirty |= DirtyFlags::LIGHTS;
        }
    }

    /// Remove everything
    pub fn clear(&mut self) {
        self.clear_cubes();
        self.clear_lights();
    }

    /// Number of cubes
    #[inline]
    pub fn cube_count(&self) -> usize {
        self.cubes.len()
    }

    /// Number of lights
    #[inline]
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// True if there are no cubes and no lights
    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty() && self.lights.is_empty()
    }

    /// Iterate over cubes in insertion order
    pub fn cubes(&self) -> impl Iterator<Item = (CubeKey, &Cube)> {
        self.cube_order.iter().map(move |&k| (k, &self.cubes[k]))
    }

    /// Iterate over lights in insertion order
    pub fn lights(&self) -> impl Iterator<Item = (LightKey, &Light)> {
        self.light_order.iter().map(move |&k| (k, &self.lights[k]))
    }

    /// Current dirty flags
    pub fn dirty(&self) -> DirtyFlags {
        self.dirty
    }

    /// Return the dirty flags and reset them
    pub fn take_dirty(&mut self) -> DirtyFlags {
        std::mem::take(&mut self.dirty)
    }
}
