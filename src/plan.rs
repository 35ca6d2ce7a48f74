use std::path::{Path, PathBuf};

use crate::{
    catalog::{file_templates, SCAFFOLD_DIRS},
    context::ProjectContext,
    error::Result,
    renderer::TemplateRenderer,
};

/// A single file-system operation the engine will perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanEntry {
    CreateDirectory { target: PathBuf },
    CreateFile { target: PathBuf, content: String },
}

impl PlanEntry {
    /// Returns the target path for this entry.
    pub fn target(&self) -> &Path {
        match self {
            PlanEntry::CreateDirectory { target } => target,
            PlanEntry::CreateFile { target, .. } => target,
        }
    }

    /// Gets a message describing the entry, used for progress logging.
    pub fn get_message(&self) -> String {
        match self {
            PlanEntry::CreateDirectory { target } => {
                format!("Creating directory '{}'", target.display())
            }
            PlanEntry::CreateFile { target, .. } => {
                format!("Writing to '{}'", target.display())
            }
        }
    }
}

/// The ordered, in-memory description of everything a run will create.
///
/// Built entirely before any file-system effect. Directory entries precede
/// every file entry that depends on them; the project root itself is created
/// by the engine before the plan is applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScaffoldPlan {
    entries: Vec<PlanEntry>,
}

impl ScaffoldPlan {
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Computes the full set of directories and files to create for a given
/// context, without touching the file system.
pub struct PathPlanner<'a> {
    engine: &'a dyn TemplateRenderer,
}

impl<'a> PathPlanner<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer) -> Self {
        Self { engine }
    }

    /// Renders the catalog against `ctx` into an ordered plan.
    ///
    /// Deterministic: equal contexts yield byte-identical plans.
    pub fn plan(&self, ctx: &ProjectContext) -> Result<ScaffoldPlan> {
        let render_context = ctx.render_context();
        let project_dir = ctx.project_dir();
        let mut entries = Vec::new();

        for &dir in SCAFFOLD_DIRS {
            let rendered = self.engine.render(dir, &render_context, Some(dir))?;
            entries.push(PlanEntry::CreateDirectory {
                target: project_dir.join(rendered),
            });
        }

        for (path_template, content_template) in file_templates() {
            let rendered_path =
                self.engine.render(path_template, &render_context, Some(path_template))?;
            let content = self.engine.render(
                content_template,
                &render_context,
                Some(path_template),
            )?;
            entries.push(PlanEntry::CreateFile {
                target: project_dir.join(rendered_path),
                content,
            });
        }

        log::debug!("Planned {} entries for '{}'", entries.len(), ctx.name);
        Ok(ScaffoldPlan { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::MiniJinjaRenderer;

    fn context() -> ProjectContext {
        ProjectContext::new("demo", "/work", 2024)
    }

    fn build_plan(ctx: &ProjectContext) -> ScaffoldPlan {
        let renderer = MiniJinjaRenderer::new();
        PathPlanner::new(&renderer).plan(ctx).unwrap()
    }

    #[test]
    fn plans_are_deterministic() {
        let ctx = context();
        assert_eq!(build_plan(&ctx), build_plan(&ctx));
    }

    #[test]
    fn plan_covers_the_whole_catalog() {
        let plan = build_plan(&context());
        let dirs = plan
            .entries()
            .iter()
            .filter(|e| matches!(e, PlanEntry::CreateDirectory { .. }))
            .count();
        let files = plan
            .entries()
            .iter()
            .filter(|e| matches!(e, PlanEntry::CreateFile { .. }))
            .count();
        assert_eq!(dirs, 3);
        assert_eq!(files, 7);
    }

    #[test]
    fn directories_precede_the_files_that_need_them() {
        let ctx = context();
        let plan = build_plan(&ctx);
        let project_dir = ctx.project_dir();

        let mut seen_dirs: Vec<PathBuf> = Vec::new();
        for entry in plan.entries() {
            match entry {
                PlanEntry::CreateDirectory { target } => seen_dirs.push(target.clone()),
                PlanEntry::CreateFile { target, .. } => {
                    let parent = target.parent().unwrap();
                    assert!(
                        parent == project_dir || seen_dirs.iter().any(|d| d == parent),
                        "no directory entry precedes '{}'",
                        target.display()
                    );
                }
            }
        }
    }

    #[test]
    fn no_target_appears_twice() {
        let plan = build_plan(&context());
        let mut targets: Vec<&Path> =
            plan.entries().iter().map(|e| e.target()).collect();
        let total = targets.len();
        targets.sort();
        targets.dedup();
        assert_eq!(targets.len(), total);
    }

    #[test]
    fn path_segments_render_the_project_name() {
        let ctx = context();
        let plan = build_plan(&ctx);
        let expected = ctx.project_dir().join("src").join("demo").join("__init__.py");
        assert!(plan.entries().iter().any(|e| e.target() == expected));
    }

    #[test]
    fn manifest_entry_maps_the_console_script() {
        let ctx = ProjectContext::new("widget", "/work", 2024);
        let plan = build_plan(&ctx);
        let manifest = plan
            .entries()
            .iter()
            .find_map(|e| match e {
                PlanEntry::CreateFile { target, content }
                    if target.ends_with("pyproject.toml") =>
                {
                    Some(content.clone())
                }
                _ => None,
            })
            .expect("plan contains a manifest entry");
        assert!(manifest.contains("widget = \"widget.main:main\""));
        assert!(!manifest.contains("demo"));
    }

    #[test]
    fn readme_entry_embeds_the_context_year() {
        let ctx = ProjectContext::new("demo", "/work", 1999);
        let plan = build_plan(&ctx);
        let readme = plan
            .entries()
            .iter()
            .find_map(|e| match e {
                PlanEntry::CreateFile { target, content }
                    if target.ends_with("README.md") =>
                {
                    Some(content.clone())
                }
                _ => None,
            })
            .expect("plan contains a README entry");
        assert!(readme.contains("Copyright (c) 1999"));
        assert!(readme.contains("# demo"));
    }
}
