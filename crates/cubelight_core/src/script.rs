//! Scene scripts
//!
//! A [`SceneScript`] is a RON file listing lights and cubes as partial
//! options. Applying a script runs every entry through a facade's
//! default-resolving methods, so omitted fields behave exactly as they do in
//! code.
//!
//! ```ron
//! #![enable(implicit_some)]
//! SceneScript(
//!     name: "Two cubes",
//!     clear_first: true,
//!     lights: [(b: 0.2)],
//!     cubes: [(), (x: 5.0, scale: 2.0)],
//! )
//! ```

use serde::{Serialize, Deserialize};
use std::fs;
use std::io;
use std::path::Path;

use ron::extensions::Extensions;

use crate::facade::Scene;
use crate::options::{CubeOptions, LightOptions};

/// A serializable list of lights and cubes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneScript {
    /// Script name (for display/debugging)
    #[serde(default)]
    pub name: String,
    /// Clear existing lights and cubes before adding
    #[serde(default)]
    pub clear_first: bool,
    #[serde(default)]
    pub lights: Vec<LightOptions>,
    #[serde(default)]
    pub cubes: Vec<CubeOptions>,
}

/// What applying a script did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    pub cleared: bool,
    pub lights: usize,
    pub cubes: usize,
}

fn ron_options() -> ron::Options {
    ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
}

impl SceneScript {
    /// Create a new empty script
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parse a script from RON text
    ///
    /// Option fields may be written bare (`x: 5.0`) or as `Some(5.0)`.
    pub fn from_ron_str(s: &str) -> Result<Self, ScriptLoadError> {
        Ok(ron_options().from_str(s)?)
    }

    /// Load a script from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScriptLoadError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Serialize to pretty RON text
    pub fn to_ron_string(&self) -> Result<String, ScriptSaveError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .extensions(Extensions::IMPLICIT_SOME);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Save a script to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ScriptSaveError> {
        fs::write(path, self.to_ron_string()?)?;
        Ok(())
    }

    /// Add a light entry
    pub fn with_light(mut self, light: LightOptions) -> Self {
        self.lights.push(light);
        self
    }

    /// Add a cube entry
    pub fn with_cube(mut self, cube: CubeOptions) -> Self {
        self.cubes.push(cube);
        self
    }

    /// Clear the scene before adding
    pub fn with_clear_first(mut self, clear_first: bool) -> Self {
        self.clear_first = clear_first;
        self
    }

    /// Run the script against a facade: optional clears, then lights, then cubes
    ///
    /// Stops at the first capability error and returns it as-is. Calls made
    /// before the failure are not undone.
    pub fn apply<E>(&self, scene: &Scene<E>) -> Result<ScriptSummary, E> {
        let mut summary = ScriptSummary::default();

        if self.clear_first {
            scene.clear_lights()?;
            scene.clear_cubes()?;
            summary.cleared = true;
        }

        for light in &self.lights {
            scene.add_light_default(*light)?;
            summary.lights += 1;
        }

        for cube in &self.cubes {
            scene.add_cube_default(*cube)?;
            summary.cubes += 1;
        }

        Ok(summary)
    }
}

/// Error loading a script
#[derive(Debug)]
pub enum ScriptLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
}

impl From<io::Error> for ScriptLoadError {
    fn from(e: io::Error) -> Self {
        ScriptLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ScriptLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        ScriptLoadError::Parse(e)
    }
}

impl std::fmt::Display for ScriptLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptLoadError::Io(e) => write!(f, "IO error: {}", e),
            ScriptLoadError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ScriptLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptLoadError::Io(e) => Some(e),
            ScriptLoadError::Parse(e) => Some(e),
        }
    }
}

/// Error saving a script
#[derive(Debug)]
pub enum ScriptSaveError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for ScriptSaveError {
    fn from(e: io::Error) -> Self {
        ScriptSaveError::Io(e)
    }
}

impl From<ron::Error> for ScriptSaveError {
    fn from(e: ron::Error) -> Self {
        ScriptSaveError::Serialize(e)
    }
}

impl std::fmt::Display for ScriptSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptSaveError::Io(e) => write!(f, "IO error: {}", e),
            ScriptSaveError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for ScriptSaveError {}
