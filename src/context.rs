use serde_json::json;
use std::path::PathBuf;

/// Immutable per-run value derived once from validated input.
///
/// The year is an explicit constructor input rather than an ambient read,
/// so callers (and tests) control exactly what lands in the generated
/// documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    pub name: String,
    pub root_path: PathBuf,
    pub year: i32,
}

impl ProjectContext {
    pub fn new(
        name: impl Into<String>,
        root_path: impl Into<PathBuf>,
        year: i32,
    ) -> Self {
        Self { name: name.into(), root_path: root_path.into(), year }
    }

    /// The directory the scaffold is created in: `root_path/name`.
    pub fn project_dir(&self) -> PathBuf {
        self.root_path.join(&self.name)
    }

    /// The fixed placeholder set every template is rendered against.
    pub fn render_context(&self) -> serde_json::Value {
        json!({
            "project_name": self.name,
            "year": self.year,
        })
    }
}
