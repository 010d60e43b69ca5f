//! Display surface abstraction.
//!
//! The pipeline does not own a page or a terminal — it renders into
//! whatever display context the host provides. A context resolves a stable
//! surface identifier to a surface handle and replaces that surface's
//! content wholesale. Keeping this behind a trait means the pipeline is
//! testable without any real output medium.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;

/// Where rendered markup ends up.
pub trait DisplayContext {
    /// Handle to one surface within this context.
    type Surface;

    /// Looks up a surface by its stable identifier.
    ///
    /// `None` means the surface does not exist in this context; callers are
    /// expected to log and skip rendering rather than fail.
    fn find_surface(&self, id: &str) -> Option<Self::Surface>;

    /// Replaces the surface's displayed content with `markup`.
    fn set_content(&mut self, surface: &Self::Surface, markup: &str) -> Result<()>;
}

/// Directory-backed display used by the binary.
///
/// Each surface is an HTML include file named `<id>.html` under the root
/// directory. The file must already exist to count as a surface — the
/// analog of a page that ships an empty placeholder element — and
/// `set_content` overwrites it.
pub struct DirectoryDisplay {
    root: PathBuf,
}

impl DirectoryDisplay {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DisplayContext for DirectoryDisplay {
    type Surface = PathBuf;

    fn find_surface(&self, id: &str) -> Option<PathBuf> {
        // Surface ids are simple names, never paths
        if id.is_empty() || id.contains(['/', '\\']) || id.contains("..") {
            return None;
        }

        let path = self.root.join(format!("{id}.html"));
        path.is_file().then_some(path)
    }

    fn set_content(&mut self, surface: &PathBuf, markup: &str) -> Result<()> {
        std::fs::write(surface, markup)
            .with_context(|| format!("Failed to write surface file '{}'", surface.display()))
    }
}

/// In-memory display for tests and embedding.
///
/// Surfaces are entries in a map; content is whatever was last written.
#[derive(Debug, Default)]
pub struct MemoryDisplay {
    surfaces: HashMap<String, String>,
}

impl MemoryDisplay {
    /// Creates a display containing one empty surface with the given id.
    pub fn with_surface(id: &str) -> Self {
        let mut surfaces = HashMap::new();
        surfaces.insert(id.to_string(), String::new());
        Self { surfaces }
    }

    /// Current content of a surface, if it exists.
    pub fn content(&self, id: &str) -> Option<&str> {
        self.surfaces.get(id).map(String::as_str)
    }
}

impl DisplayContext for MemoryDisplay {
    type Surface = String;

    fn find_surface(&self, id: &str) -> Option<String> {
        self.surfaces.contains_key(id).then(|| id.to_string())
    }

    fn set_content(&mut self, surface: &String, markup: &str) -> Result<()> {
        self.surfaces.insert(surface.clone(), markup.to_string());
        Ok(())
    }
}
