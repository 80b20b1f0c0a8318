//! Scene system
//!
//! Owns the scene store and binds a facade to it, either directly or through
//! a command queue that is drained once per frame.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use cubelight_core::{
    store_capabilities, CommandQueue, DirtyFlags, FrameData, Scene, SceneStore, StoreError,
    StoreLimits,
};

use crate::config::AppConfig;

/// Result of a frame update
pub struct FrameUpdate {
    /// Which object lists changed since the previous frame
    pub dirty: DirtyFlags,
    /// Packed GPU data for this frame
    pub data: FrameData,
}

/// Manages the scene store and its facade
pub struct SceneSystem {
    store: Rc<RefCell<SceneStore>>,
    /// Present in deferred mode only
    queue: Option<CommandQueue>,
    scene: Scene<StoreError>,
}

impl SceneSystem {
    /// Create a scene system with the given store limits
    ///
    /// In deferred mode facade calls are queued and can only fail on
    /// [`update`](Self::update); otherwise they hit the store immediately.
    pub fn new(limits: StoreLimits, deferred: bool) -> Self {
        let store = Rc::new(RefCell::new(SceneStore::with_limits(limits)));

        let (queue, capabilities) = if deferred {
            let queue = CommandQueue::new();
            let capabilities = queue.capabilities();
            (Some(queue), capabilities)
        } else {
            (None, store_capabilities(Rc::clone(&store)))
        };

        Self {
            store,
            queue,
            scene: Scene::from_capabilities(capabilities),
        }
    }

    /// Create a scene system from application configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.store.to_limits(), config.scene.deferred)
    }

    /// The facade bound to this system's store
    pub fn scene(&self) -> &Scene<StoreError> {
        &self.scene
    }

    /// Whether facade calls are queued
    pub fn is_deferred(&self) -> bool {
        self.queue.is_some()
    }

    /// Number of queued calls waiting for the next update
    pub fn pending(&self) -> usize {
        self.queue.as_ref().map_or(0, CommandQueue::len)
    }

    /// Read access to the store
    pub fn store(&self) -> Ref<'_, SceneStore> {
        self.store.borrow()
    }

    /// Apply queued calls to the store, returning how many were applied
    pub fn flush(&self) -> Result<usize, StoreError> {
        match &self.queue {
            Some(queue) => queue.drain_into(&mut self.store.borrow_mut()),
            None => Ok(0),
        }
    }

    /// Run one frame: flush queued calls, then pack GPU data
    ///
    /// A failed flush skips packing; calls applied before the failure stay
    /// in the store and show up in the next frame.
    pub fn update(&self) -> Result<FrameUpdate, StoreError> {
        self.flush()?;
        let mut store = self.store.borrow_mut();
        let dirty = store.take_dirty();
        let data = FrameData::pack(&store);
        Ok(FrameUpdate { dirty, data })
    }
}
