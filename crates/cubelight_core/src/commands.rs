//! Deferred scene commands
//!
//! Capabilities handed to a facade are often called from code that must not
//! touch the store directly (script callbacks, UI handlers). A
//! [`CommandQueue`] records the calls instead, and the frame loop drains them
//! into the store before packing GPU data.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::capabilities::SceneCapabilities;
use crate::options::{CubeParams, LightParams};
use crate::store::{SceneStore, StoreError};

/// A recorded capability call
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    AddCube(CubeParams),
    AddLight(LightParams),
    ClearCubes,
    ClearLights,
}

impl Command {
    /// Apply this command to a store
    pub fn apply(self, store: &mut SceneStore) -> Result<(), StoreError> {
        match self {
            Command::AddCube(params) => store.add_cube(params).map(|_| ()),
            Command::AddLight(params) => store.add_light(params).map(|_| ()),
            Command::ClearCubes => {
                store.clear_cubes();
                Ok(())
            }
            Command::ClearLights => {
                store.clear_lights();
                Ok(())
            }
        }
    }
}

/// Shared FIFO of pending commands
///
/// Clones share the same queue.
#[derive(Clone, Debug, Default)]
pub struct CommandQueue {
    pending: Rc<RefCell<VecDeque<Command>>>,
}

impl CommandQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command
    pub fn push(&self, command: Command) {
        self.pending.borrow_mut().push_back(command);
    }

    /// Number of pending commands
    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    /// True if nothing is pending
    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    /// Snapshot of the pending commands, oldest first
    pub fn pending(&self) -> Vec<Command> {
        self.pending.borrow().iter().copied().collect()
    }

    /// Discard every pending command
    pub fn clear(&self) {
        self.pending.borrow_mut().clear();
    }

    /// Apply pending commands to `store` in order, returning how many applied
    ///
    /// Stops at the first failing command. That command is discarded; the
    /// ones after it stay queued for the next drain.
    pub fn drain_into(&self, store: &mut SceneStore) -> Result<usize, StoreError> {
        let mut applied = 0;
        loop {
            // Queue borrow must be released before the command runs
            let next = self.pending.borrow_mut().pop_front();
            let Some(command) = next else { break };
            if let Err(e) = command.apply(store) {
                log::warn!("Dropped {:?} after {} applied: {}", command, applied, e);
                return Err(e);
            }
            applied += 1;
        }
        if applied > 0 {
            log::debug!("Drained {} scene commands", applied);
        }
        Ok(applied)
    }

    /// Capabilities that record calls into this queue
    ///
    /// Recording never fails, so `E` is free to match whatever error type the
    /// facade's other users expect.
    pub fn capabilities<E: 'static>(&self) -> SceneCapabilities<E> {
        let (al, cl, ac, cc) = (self.clone(), self.clone(), self.clone(), self.clone());
        SceneCapabilities::new(
            move |x, y, z, r, g, b| {
                al.push(Command::AddLight(LightParams { x, y, z, r, g, b }));
                Ok(())
            },
            move || {
                cl.push(Command::ClearLights);
                Ok(())
            },
            move |x, y, z, r, g, b, scale| {
                ac.push(Command::AddCube(CubeParams { x, y, z, r, g, b, scale }));
                Ok(())
            },
            move || {
                cc.push(Command::ClearCubes);
                Ok(())
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ObjectKind, StoreLimits};
    use crate::Scene;
    use std::convert::Infallible;

    #[test]
    fn test_capabilities_record_in_order() {
        let queue = CommandQueue::new();
        let scene = Scene::<Infallible>::from_capabilities(queue.capabilities());

        scene.clear_cubes().unwrap();
        scene.add_light_default(None).unwrap();
        scene.add_cube_default(None).unwrap();

        assert_eq!(
            queue.pending(),
            vec![
                Command::ClearCubes,
                Command::AddLight(LightParams::default()),
                Command::AddCube(CubeParams::default()),
            ]
        );
    }

    #[test]
    fn test_drain_applies_and_empties() {
        let queue = CommandQueue::new();
        queue.push(Command::AddCube(CubeParams::default()));
        queue.push(Command::AddLight(LightParams::default()));
        queue.push(Command::AddCube(CubeParams::default()));
        queue.push(Command::ClearLights);

        let mut store = SceneStore::new();
        assert_eq!(queue.drain_into(&mut store), Ok(4));
        assert!(queue.is_empty());
        assert_eq!(store.cube_count(), 2);
        assert_eq!(store.light_count(), 0);

        // Draining an empty queue is a no-op
        assert_eq!(queue.drain_into(&mut store), Ok(0));
    }

    #[test]
    fn test_drain_stops_at_first_error() {
        let queue = CommandQueue::new();
        for _ in 0..3 {
            queue.push(Command::AddLight(LightParams::default()));
        }
        queue.push(Command::AddCube(CubeParams::default()));

        let mut store = SceneStore::with_limits(StoreLimits { max_cubes: 8, max_lights: 2 });
        let err = queue.drain_into(&mut store).unwrap_err();
        assert_eq!(err, StoreError::CapacityExceeded { kind: ObjectKind::Light, limit: 2 });
        assert_eq!(store.light_count(), 2);

        // The failing command is gone, the rest remain
        assert_eq!(queue.pending(), vec![Command::AddCube(CubeParams::default())]);
        assert_eq!(queue.drain_into(&mut store), Ok(1));
        assert_eq!(store.cube_count(), 1);
    }

    #[test]
    fn test_clones_share_queue() {
        let queue = CommandQueue::new();
        let other = queue.clone();
        other.push(Command::ClearCubes);
        assert_eq!(queue.len(), 1);
        queue.clear();
        assert!(other.is_empty());
    }
}
