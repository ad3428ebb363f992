//! Material and die preset loader.
//!
//! Loads surface properties and die presets from YAML files, allowing easy
//! configuration of different tables and dice without recompiling.
//!
//! ## Directory Structure
//!
//! ```text
//! materials/
//! ├── surfaces/
//! │   ├── felt.yaml
//! │   └── wood.yaml
//! └── dice/
//!     ├── d4.yaml
//!     └── d6.yaml
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{DieProperties, SurfaceProperties};

/// Error type for material loading operations.
#[derive(Debug)]
pub enum MaterialError {
    IoError(std::io::Error),
    ParseError(serde_yaml::Error),
    NotFound(String),
}

impl std::fmt::Display for MaterialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialError::IoError(e) => write!(f, "IO error: {}", e),
            MaterialError::ParseError(e) => write!(f, "YAML parse error: {}", e),
            MaterialError::NotFound(name) => write!(f, "Material not found: {}", name),
        }
    }
}

impl std::error::Error for MaterialError {}

impl From<std::io::Error> for MaterialError {
    fn from(err: std::io::Error) -> Self {
        MaterialError::IoError(err)
    }
}

impl From<serde_yaml::Error> for MaterialError {
    fn from(err: serde_yaml::Error) -> Self {
        MaterialError::ParseError(err)
    }
}

/// Material loader with configurable base directory.
pub struct MaterialLoader {
    base_path: PathBuf,
}

impl MaterialLoader {
    /// Create a new loader with the given base path.
    ///
    /// The base path should contain `surfaces/` and `dice/` subdirectories.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Load a surface by name (without .yaml extension).
    ///
    /// # Example
    /// ```ignore
    /// let loader = MaterialLoader::new("materials");
    /// let felt = loader.load_surface("felt")?;
    /// ```
    pub fn load_surface(&self, name: &str) -> Result<SurfaceProperties, MaterialError> {
        let path = self
            .base_path
            .join("surfaces")
            .join(format!("{}.yaml", name));
        if !path.exists() {
            return Err(MaterialError::NotFound(name.to_string()));
        }
        let contents = fs::read_to_string(&path)?;
        let props: SurfaceProperties = serde_yaml::from_str(&contents)?;
        Ok(props)
    }

    /// Load a die preset by name.
    pub fn load_die(&self, name: &str) -> Result<DieProperties, MaterialError> {
        let path = self.base_path.join("dice").join(format!("{}.yaml", name));
        if !path.exists() {
            return Err(MaterialError::NotFound(name.to_string()));
        }
        let contents = fs::read_to_string(&path)?;
        let props: DieProperties = serde_yaml::from_str(&contents)?;
        Ok(props)
    }

    /// List all available surfaces.
    pub fn list_surfaces(&self) -> Result<Vec<String>, MaterialError> {
        self.list_materials("surfaces")
    }

    /// List all available die presets.
    pub fn list_dice(&self) -> Result<Vec<String>, MaterialError> {
        self.list_materials("dice")
    }

    fn list_materials(&self, subdir: &str) -> Result<Vec<String>, MaterialError> {
        let path = self.base_path.join(subdir);
        if !path.exists() {
            return Ok(vec![]);
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&path)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if name.ends_with(".yaml") {
                names.push(name.trim_end_matches(".yaml").to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

// =============================================================================
// Tests
// =============================================================================
