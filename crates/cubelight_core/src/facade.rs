//! Scene facade
//!
//! A [`Scene`] wraps four externally supplied capabilities and adds one thing:
//! default-value resolution for cubes and lights. It holds no other state, and
//! every error a capability returns is handed back to the caller untouched.

use std::rc::Rc;

use crate::capabilities::{AddCubeFn, AddLightFn, ClearFn, SceneCapabilities};
use crate::options::{CubeOptions, LightOptions};

/// Facade over add/clear light and add/clear cube capabilities
///
/// # Example
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use cubelight_core::{CubeOptions, Scene};
///
/// let calls = Rc::new(RefCell::new(Vec::new()));
/// let log = Rc::clone(&calls);
/// let scene = Scene::<()>::new(
///     |_, _, _, _, _, _| Ok(()),
///     || Ok(()),
///     move |x, y, z, r, g, b, s| { log.borrow_mut().push([x, y, z, r, g, b, s]); Ok(()) },
///     || Ok(()),
/// );
///
/// scene.add_cube_default(CubeOptions { x: Some(5.0), scale: Some(2.0), ..Default::default() }).unwrap();
/// assert_eq!(calls.borrow()[0], [5.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
/// ```
pub struct Scene<E> {
    capabilities: SceneCapabilities<E>,
}

impl<E> Scene<E> {
    /// Create a facade from four callables, in the order
    /// add-light, clear-lights, add-cube, clear-cubes
    pub fn new<AL, CL, AC, CC>(add_light: AL, clear_lights: CL, add_cube: AC, clear_cubes: CC) -> Self
    where
        AL: Fn(f32, f32, f32, f32, f32, f32) -> Result<(), E> + 'static,
        CL: Fn() -> Result<(), E> + 'static,
        AC: Fn(f32, f32, f32, f32, f32, f32, f32) -> Result<(), E> + 'static,
        CC: Fn() -> Result<(), E> + 'static,
    {
        Self::from_capabilities(SceneCapabilities::new(add_light, clear_lights, add_cube, clear_cubes))
    }

    /// Create a facade over an existing capability set
    pub fn from_capabilities(capabilities: SceneCapabilities<E>) -> Self {
        Self { capabilities }
    }

    /// The bound capability set
    pub fn capabilities(&self) -> &SceneCapabilities<E> {
        &self.capabilities
    }

    /// Add a cube, filling every absent option with its default
    ///
    /// `None` behaves exactly like empty options and forwards
    /// `(0, 0, 0, 1, 1, 1, 1)`.
    pub fn add_cube_default(&self, options: impl Into<Option<CubeOptions>>) -> Result<(), E> {
        let p = options.into().unwrap_or_default().resolve();
        (self.capabilities.add_cube)(p.x, p.y, p.z, p.r, p.g, p.b, p.scale)
    }

    /// Add a light, filling every absent option with its default
    ///
    /// `None` behaves exactly like empty options and forwards
    /// `(1.5, 1.0, 2.0, 1.0, 1.0, 1.0)`.
    pub fn add_light_default(&self, options: impl Into<Option<LightOptions>>) -> Result<(), E> {
        let p = options.into().unwrap_or_default().resolve();
        (self.capabilities.add_light)(p.x, p.y, p.z, p.r, p.g, p.b)
    }

    /// Forward directly to add-light
    pub fn add_light(&self, x: f32, y: f32, z: f32, r: f32, g: f32, b: f32) -> Result<(), E> {
        (self.capabilities.add_light)(x, y, z, r, g, b)
    }

    /// Forward directly to clear-lights
    pub fn clear_lights(&self) -> Result<(), E> {
        (self.capabilities.clear_lights)()
    }

    /// Forward directly to add-cube
    #[allow(clippy::too_many_arguments)]
    pub fn add_cube(&self, x: f32, y: f32, z: f32, r: f32, g: f32, b: f32, scale: f32) -> Result<(), E> {
        (self.capabilities.add_cube)(x, y, z, r, g, b, scale)
    }

    /// Forward directly to clear-cubes
    pub fn clear_cubes(&self) -> Result<(), E> {
        (self.capabilities.clear_cubes)()
    }

    /// Shared handle to the add-light capability
    pub fn add_light_fn(&self) -> Rc<AddLightFn<E>> {
        Rc::clone(&self.capabilities.add_light)
    }

    /// Shared handle to the add-cube capability
    pub fn add_cube_fn(&self) -> Rc<AddCubeFn<E>> {
        Rc::clone(&self.capabilities.add_cube)
    }

    /// Shared handle to the clear-lights capability
    pub fn clear_lights_fn(&self) -> Rc<ClearFn<E>> {
        Rc::clone(&self.capabilities.clear_lights)
    }

    /// Shared handle to the clear-cubes capability
    pub fn clear_cubes_fn(&self) -> Rc<ClearFn<E>> {
        Rc::clone(&self.capabilities.clear_cubes)
    }
}

impl<E> From<SceneCapabilities<E>> for Scene<E> {
    fn from(capabilities: SceneCapabilities<E>) -> Self {
        Self::from_capabilities(capabilities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        AddLight([f32; 6]),
        ClearLights,
        AddCube([f32; 7]),
        ClearCubes,
    }

    fn recording_scene() -> (Scene<()>, Rc<RefCell<Vec<Call>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let (a, b, c, d) = (calls.clone(), calls.clone(), calls.clone(), calls.clone());
        let scene = Scene::new(
            move |x, y, z, r, g, bl| {
                a.borrow_mut().push(Call::AddLight([x, y, z, r, g, bl]));
                Ok(())
            },
            move || {
                b.borrow_mut().push(Call::ClearLights);
                Ok(())
            },
            move |x, y, z, r, g, bl, s| {
                c.borrow_mut().push(Call::AddCube([x, y, z, r, g, bl, s]));
                Ok(())
            },
            move || {
                d.borrow_mut().push(Call::ClearCubes);
                Ok(())
            },
        );
        (scene, calls)
    }

    #[test]
    fn test_cube_default_without_options() {
        let (scene, calls) = recording_scene();
        scene.add_cube_default(None).unwrap();
        assert_eq!(calls.borrow()[..], [Call::AddCube([0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0])]);
    }

    #[test]
    fn test_cube_default_none_equals_empty() {
        let (scene, calls) = recording_scene();
        scene.add_cube_default(None).unwrap();
        scene.add_cube_default(CubeOptions::default()).unwrap();
        let calls = calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }

    #[test]
    fn test_cube_default_partial() {
        let (scene, calls) = recording_scene();
        scene
            .add_cube_default(CubeOptions { x: Some(5.0), scale: Some(2.0), ..Default::default() })
            .unwrap();
        assert_eq!(calls.borrow()[..], [Call::AddCube([5.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0])]);
    }

    #[test]
    fn test_light_default_without_options() {
        let (scene, calls) = recording_scene();
        scene.add_light_default(None).unwrap();
        assert_eq!(calls.borrow()[..], [Call::AddLight([1.5, 1.0, 2.0, 1.0, 1.0, 1.0])]);
    }

    #[test]
    fn test_light_default_partial() {
        let (scene, calls) = recording_scene();
        scene
            .add_light_default(LightOptions { b: Some(0.2), ..Default::default() })
            .unwrap();
        assert_eq!(calls.borrow()[..], [Call::AddLight([1.5, 1.0, 2.0, 1.0, 1.0, 0.2])]);
    }

    #[test]
    fn test_raw_forwarding() {
        let (scene, calls) = recording_scene();
        scene.add_light(0.0, 0.0, 0.0, 0.0, 0.0, 0.0).unwrap();
        scene.add_cube(1.0, 2.0, 3.0, 0.1, 0.2, 0.3, 4.0).unwrap();
        scene.clear_lights().unwrap();
        scene.clear_cubes().unwrap();
        assert_eq!(
            calls.borrow()[..],
            [
                Call::AddLight([0.0; 6]),
                Call::AddCube([1.0, 2.0, 3.0, 0.1, 0.2, 0.3, 4.0]),
                Call::ClearLights,
                Call::ClearCubes,
            ]
        );
    }

    #[test]
    fn test_capability_handles_bypass_defaults() {
        let (scene, calls) = recording_scene();
        let add_cube = scene.add_cube_fn();
        add_cube(9.0, 9.0, 9.0, 0.0, 0.0, 0.0, 3.0).unwrap();
        (scene.clear_cubes_fn())().unwrap();
        (scene.add_light_fn())(1.0, 1.0, 1.0, 1.0, 1.0, 1.0).unwrap();
        (scene.clear_lights_fn())().unwrap();
        assert_eq!(calls.borrow().len(), 4);
        assert_eq!(calls.borrow()[0], Call::AddCube([9.0, 9.0, 9.0, 0.0, 0.0, 0.0, 3.0]));
    }

    #[test]
    fn test_calls_are_independent() {
        let (scene, calls) = recording_scene();
        scene.add_cube_default(CubeOptions::new().with_scale(3.0)).unwrap();
        scene.add_cube_default(None).unwrap();
        assert_eq!(calls.borrow()[1], Call::AddCube([0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]));
    }

    #[test]
    fn test_errors_propagate_unchanged() {
        #[derive(Debug, PartialEq)]
        struct Boom(u32);

        let scene = Scene::new(
            |_, _, _, _, _, _| Err(Boom(1)),
            || Err(Boom(2)),
            |_, _, _, _, _, _, _| Err(Boom(3)),
            || Err(Boom(4)),
        );

        assert_eq!(scene.add_light_default(None), Err(Boom(1)));
        assert_eq!(scene.clear_lights(), Err(Boom(2)));
        assert_eq!(scene.add_cube_default(None), Err(Boom(3)));
        assert_eq!(scene.clear_cubes(), Err(Boom(4)));
    }
}
