//! Built-in demo scene
//!
//! Used when no scene script is configured.

use cubelight_core::{CubeOptions, LightOptions, SceneScript};

/// Number of cubes in the demo row, not counting the center cube
pub const DEMO_ROW_LEN: usize = 4;

/// Cubes along the x axis, centered on the origin, shrinking outward
///
/// Only position and scale are set; colors fall back to their defaults.
pub fn cube_row(count: usize, spacing: f32) -> Vec<CubeOptions> {
    let half = (count as f32 - 1.0) / 2.0;
    (0..count)
        .map(|i| {
            let offset = i as f32 - half;
            CubeOptions {
                x: Some(offset * spacing),
                scale: Some(1.0 / (1.0 + offset.abs())),
                ..Default::default()
            }
        })
        .collect()
}

/// The demo scene: a default light, a warm fill light, a default cube and a row of cubes behind it
pub fn demo_script() -> SceneScript {
    let mut script = SceneScript::new("Demo")
        .with_clear_first(true)
        .with_light(LightOptions::default())
        .with_light(LightOptions::new().with_position(-2.0, 3.0, -1.0).with_color(1.0, 0.8, 0.6))
        .with_cube(CubeOptions::default());

    script.cubes.extend(cube_row(DEMO_ROW_LEN, 2.0).into_iter().map(|mut c| {
        c.z = Some(-3.0);
        c
    }));
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_row_is_centered() {
        let row = cube_row(4, 2.0);
        let xs: Vec<f32> = row.iter().map(|c| c.x.unwrap()).collect();
        assert_eq!(xs, vec![-3.0, -1.0, 1.0, 3.0]);
        assert!(row.iter().all(|c| c.r.is_none() && c.y.is_none()));
    }

    #[test]
    fn test_cube_row_single() {
        let row = cube_row(1, 5.0);
        assert_eq!(row[0].x, Some(0.0));
        assert_eq!(row[0].scale, Some(1.0));
    }

    #[test]
    fn test_demo_script_contents() {
        let script = demo_script();
        assert!(script.clear_first);
        assert_eq!(script.lights.len(), 2);
        assert_eq!(script.lights[0], LightOptions::default());
        assert_eq!(script.cubes.len(), 1 + DEMO_ROW_LEN);
        assert_eq!(script.cubes[0], CubeOptions::default());
        assert!(script.cubes[1..].iter().all(|c| c.z == Some(-3.0)));
    }
}
