//! The built-in catalog of scaffold templates.
//!
//! Every file the scaffold produces is listed here, in a fixed order.
//! Relative paths are themselves templates: segments such as
//! `src/{{ project_name }}` are rendered against the same context as the
//! file contents.

use indexmap::IndexMap;

/// Directory-only entries, in creation order. The planner emits these before
/// any file entry so parents exist first. `docs` stays empty.
pub const SCAFFOLD_DIRS: &[&str] = &["src/{{ project_name }}", "tests", "docs"];

const PACKAGE_INIT: &str = include_str!("../templates/__init__.py.j2");
const ENTRY_POINT: &str = include_str!("../templates/main.py.j2");
const ENTRY_POINT_TEST: &str = include_str!("../templates/test_main.py.j2");
const MANIFEST: &str = include_str!("../templates/pyproject.toml.j2");
const README: &str = include_str!("../templates/README.md.j2");
const GITIGNORE: &str = include_str!("../templates/gitignore.j2");

/// The test-package marker is an empty file, not a rendered template.
const TESTS_MARKER: &str = "";

/// Returns the ordered catalog of `(relative path template, content template)`.
///
/// Keyed by path template: the map preserves insertion order and guarantees
/// no target path appears twice.
pub fn file_templates() -> IndexMap<&'static str, &'static str> {
    IndexMap::from([
        ("src/{{ project_name }}/__init__.py", PACKAGE_INIT),
        ("src/{{ project_name }}/main.py", ENTRY_POINT),
        ("tests/__init__.py", TESTS_MARKER),
        ("tests/test_main.py", ENTRY_POINT_TEST),
        ("pyproject.toml", MANIFEST),
        ("README.md", README),
        (".gitignore", GITIGNORE),
    ])
}
