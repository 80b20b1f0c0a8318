//! Cube and light options
//!
//! Options are partial parameter sets: every field may be absent, and each
//! absent field independently takes its documented default when resolved.

use serde::{Serialize, Deserialize};

/// Default cube position (x, y, z)
pub const DEFAULT_CUBE_POSITION: [f32; 3] = [0.0, 0.0, 0.0];
/// Default cube color (r, g, b)
pub const DEFAULT_CUBE_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
/// Default cube scale
pub const DEFAULT_CUBE_SCALE: f32 = 1.0;

/// Default light position (x, y, z)
pub const DEFAULT_LIGHT_POSITION: [f32; 3] = [1.5, 1.0, 2.0];
/// Default light color (r, g, b)
pub const DEFAULT_LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Partial cube parameters
///
/// Color channels are nominally in [0, 1] but are not validated.
///
/// # Example
/// ```
/// use cubelight_core::CubeOptions;
/// let params = CubeOptions { x: Some(5.0), scale: Some(2.0), ..Default::default() }.resolve();
/// assert_eq!(params.to_array(), [5.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CubeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub g: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
}

impl CubeOptions {
    /// Empty options (every field takes its default)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position
    pub fn with_position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self.z = Some(z);
        self
    }

    /// Set the color
    pub fn with_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.r = Some(r);
        self.g = Some(g);
        self.b = Some(b);
        self
    }

    /// Set the uniform scale
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Fill in every absent field with its default
    pub fn resolve(&self) -> CubeParams {
        let [dx, dy, dz] = DEFAULT_CUBE_POSITION;
        let [dr, dg, db] = DEFAULT_CUBE_COLOR;
        CubeParams {
            x: self.x.unwrap_or(dx),
            y: self.y.unwrap_or(dy),
            z: self.z.unwrap_or(dz),
            r: self.r.unwrap_or(dr),
            g: self.g.unwrap_or(dg),
            b: self.b.unwrap_or(db),
            scale: self.scale.unwrap_or(DEFAULT_CUBE_SCALE),
        }
    }
}

/// Partial light parameters
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LightOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub g: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<f32>,
}

impl LightOptions {
    /// Empty options (every field takes its default)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position
    pub fn with_position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self.z = Some(z);
        self
    }

    /// Set the color
    pub fn with_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.r = Some(r);
        self.g = Some(g);
        self.b = Some(b);
        self
    }

    /// Fill in every absent field with its default
    pub fn resolve(&self) -> LightParams {
        let [dx, dy, dz] = DEFAULT_LIGHT_POSITION;
        let [dr, dg, db] = DEFAULT_LIGHT_COLOR;
        LightParams {
            x: self.x.unwrap_or(dx),
            y: self.y.unwrap_or(dy),
            z: self.z.unwrap_or(dz),
            r: self.r.unwrap_or(dr),
            g: self.g.unwrap_or(dg),
            b: self.b.unwrap_or(db),
        }
    }
}

/// Fully resolved cube parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeParams {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub scale: f32,
}

impl CubeParams {
    /// Parameters in capability argument order: (x, y, z, r, g, b, scale)
    pub fn to_array(&self) -> [f32; 7] {
        [self.x, self.y, self.z, self.r, self.g, self.b, self.scale]
    }
}

impl Default for CubeParams {
    fn default() -> Self {
        CubeOptions::default().resolve()
    }
}

/// Fully resolved light parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightParams {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl LightParams {
    /// Parameters in capability argument order: (x, y, z, r, g, b)
    pub fn to_array(&self) -> [f32; 6] {
        [self.x, self.y, self.z, self.r, self.g, self.b]
    }
}

impl Default for LightParams {
    fn default() -> Self {
        LightOptions::default().resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cube_options() {
        assert_eq!(
            CubeOptions::new().resolve().to_array(),
            [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn test_empty_light_options() {
        assert_eq!(
            LightOptions::new().resolve().to_array(),
            [1.5, 1.0, 2.0, 1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn test_cube_fields_are_independent() {
        // Setting one field never changes the resolved value of another
        let defaults = CubeOptions::new().resolve().to_array();
        for i in 0..7 {
            let mut opts = CubeOptions::new();
            let slot = match i {
                0 => &mut opts.x,
                1 => &mut opts.y,
                2 => &mut opts.z,
                3 => &mut opts.r,
                4 => &mut opts.g,
                5 => &mut opts.b,
                _ => &mut opts.scale,
            };
            *slot = Some(-7.5);

            let resolved = opts.resolve().to_array();
            for (j, value) in resolved.iter().enumerate() {
                if i == j {
                    assert_eq!(*value, -7.5);
                } else {
                    assert_eq!(*value, defaults[j]);
                }
            }
        }
    }

    #[test]
    fn test_light_fields_are_independent() {
        let defaults = LightOptions::new().resolve().to_array();
        for i in 0..6 {
            let mut opts = LightOptions::new();
            let slot = match i {
                0 => &mut opts.x,
                1 => &mut opts.y,
                2 => &mut opts.z,
                3 => &mut opts.r,
                4 => &mut opts.g,
                _ => &mut opts.b,
            };
            *slot = Some(0.25);

            let resolved = opts.resolve().to_array();
            for (j, value) in resolved.iter().enumerate() {
                if i == j {
                    assert_eq!(*value, 0.25);
                } else {
                    assert_eq!(*value, defaults[j]);
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        let params = CubeOptions::new().with_color(2.0, -1.0, 0.5).with_scale(0.0).resolve();
        assert_eq!(params.r, 2.0);
        assert_eq!(params.g, -1.0);
        assert_eq!(params.b, 0.5);
        assert_eq!(params.scale, 0.0);
    }

    #[test]
    fn test_builders() {
        let light = LightOptions::new().with_position(0.0, 5.0, 0.0).resolve();
        assert_eq!(light.to_array(), [0.0, 5.0, 0.0, 1.0, 1.0, 1.0]);

        let cube = CubeOptions::new().with_position(1.0, 2.0, 3.0).resolve();
        assert_eq!(cube.to_array(), [1.0, 2.0, 3.0, 1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_params_default_matches_empty_options() {
        assert_eq!(CubeParams::default(), CubeOptions::new().resolve());
        assert_eq!(LightParams::default(), LightOptions::new().resolve());
    }
}
