//! Scene capabilities
//!
//! The four callables a [`Scene`](crate::Scene) forwards to. They are owned by
//! whoever renders or stores the scene; the facade only holds shared
//! references to them.

use std::cell::RefCell;
use std::rc::Rc;

use crate::options::{CubeParams, LightParams};
use crate::store::{SceneStore, StoreError};

/// add-light(x, y, z, r, g, b)
pub type AddLightFn<E> = dyn Fn(f32, f32, f32, f32, f32, f32) -> Result<(), E>;
/// add-cube(x, y, z, r, g, b, scale)
pub type AddCubeFn<E> = dyn Fn(f32, f32, f32, f32, f32, f32, f32) -> Result<(), E>;
/// clear-lights() / clear-cubes()
pub type ClearFn<E> = dyn Fn() -> Result<(), E>;

/// The capability set bound into a scene facade
///
/// Fields are in the fixed construction order: add-light, clear-lights,
/// add-cube, clear-cubes.
pub struct SceneCapabilities<E> {
    pub add_light: Rc<AddLightFn<E>>,
    pub clear_lights: Rc<ClearFn<E>>,
    pub add_cube: Rc<AddCubeFn<E>>,
    pub clear_cubes: Rc<ClearFn<E>>,
}

impl<E> SceneCapabilities<E> {
    /// Bundle four callables into a capability set
    pub fn new<AL, CL, AC, CC>(add_light: AL, clear_lights: CL, add_cube: AC, clear_cubes: CC) -> Self
    where
        AL: Fn(f32, f32, f32, f32, f32, f32) -> Result<(), E> + 'static,
        CL: Fn() -> Result<(), E> + 'static,
        AC: Fn(f32, f32, f32, f32, f32, f32, f32) -> Result<(), E> + 'static,
        CC: Fn() -> Result<(), E> + 'static,
    {
        Self {
            add_light: Rc::new(add_light),
            clear_lights: Rc::new(clear_lights),
            add_cube: Rc::new(add_cube),
            clear_cubes: Rc::new(clear_cubes),
        }
    }
}

// Manual impl: cloning shares the callables and places no bound on `E`.
impl<E> Clone for SceneCapabilities<E> {
    fn clone(&self) -> Self {
        Self {
            add_light: Rc::clone(&self.add_light),
            clear_lights: Rc::clone(&self.clear_lights),
            add_cube: Rc::clone(&self.add_cube),
            clear_cubes: Rc::clone(&self.clear_cubes),
        }
    }
}

/// Capabilities that apply every call to `store` immediately
///
/// Store failures (capacity limits) surface as the capability's error.
pub fn store_capabilities(store: Rc<RefCell<SceneStore>>) -> SceneCapabilities<StoreError> {
    let add_light_store = Rc::clone(&store);
    let clear_lights_store = Rc::clone(&store);
    let add_cube_store = Rc::clone(&store);
    let clear_cubes_store = store;

    SceneCapabilities::new(
        move |x, y, z, r, g, b| {
            add_light_store
                .borrow_mut()
                .add_light(LightParams { x, y, z, r, g, b })
                .map(|_| ())
        },
        move || {
            clear_lights_store.borrow_mut().clear_lights();
            Ok(())
        },
        move |x, y, z, r, g, b, scale| {
            add_cube_store
                .borrow_mut()
                .add_cube(CubeParams { x, y, z, r, g, b, scale })
                .map(|_| ())
        },
        move || {
            clear_cubes_store.borrow_mut().clear_cubes();
            Ok(())
        },
    )
}
