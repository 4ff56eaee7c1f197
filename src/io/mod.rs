//! Mesh file I/O.
//!
//! # Supported Formats
//!
//! | Format | Extension | Load | Save | Notes |
//! |--------|-----------|------|------|-------|
//! | OFF | `.off` | ✓ | ✓ | ASCII, polygons fan-triangulated |
//!
//! # Usage
//!
//! ```no_run
//! use meshring::io::{load, save};
//!
//! // Load with automatic format detection
//! let store = load("bunny.off").unwrap();
//!
//! save(&store, "copy.off").unwrap();
//! ```

pub mod off;

use std::path::Path;

use crate::error::{MeshError, Result};
use crate::mesh::MeshStore;

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Object File Format.
    Off,
}

impl Format {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "off" => Some(Format::Off),
            _ => None,
        }
    }

    /// Detect format from file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }
}

fn detect(path: &Path) -> Result<Format> {
    Format::from_path(path).ok_or_else(|| MeshError::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })
}

/// Load a mesh from a file, choosing the format from its extension.
pub fn load<P: AsRef<Path>>(path: P) -> Result<MeshStore> {
    let path = path.as_ref();
    match detect(path)? {
        Format::Off => off::load(path),
    }
}

/// Save a mesh to a file, choosing the format from its extension.
pub fn save<P: AsRef<Path>>(store: &MeshStore, path: P) -> Result<()> {
    let path = path.as_ref();
    match detect(path)? {
        Format::Off => off::save(store, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_path("mesh.off"), Some(Format::Off));
        assert_eq!(Format::from_path("MESH.OFF"), Some(Format::Off));
        assert_eq!(Format::from_path("mesh.obj"), None);
        assert_eq!(Format::from_path("mesh"), None);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = load("model.stl");
        assert!(matches!(
            result,
            Err(MeshError::UnsupportedFormat { ref extension }) if extension == "stl"
        ));

        let result = save(&MeshStore::default(), "model");
        assert!(matches!(
            result,
            Err(MeshError::UnsupportedFormat { ref extension }) if extension == "(none)"
        ));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("meshring-io-{}.off", std::process::id()));
        let store = off::read("OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2\n".as_bytes()).unwrap();

        save(&store, &path).unwrap();
        let loaded = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, store);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load("/nonexistent/meshring/missing.off");
        assert!(matches!(result, Err(MeshError::Io(_))));
    }
}
