use std::path::{Path, PathBuf};

use crate::{
    context::ProjectContext,
    error::{Error, Result},
    ioutils,
    plan::{PathPlanner, PlanEntry},
    renderer::TemplateRenderer,
    validation::validate_project_name,
};

/// Orchestrates validation, conflict detection and plan execution.
pub struct ScaffoldEngine<'a> {
    engine: &'a dyn TemplateRenderer,
}

impl<'a> ScaffoldEngine<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer) -> Self {
        Self { engine }
    }

    /// Creates the scaffold for `name` under `root_path`.
    ///
    /// Preconditions are checked before any mutation: the name must be a
    /// legal identifier, and `root_path/name` must not already exist — the
    /// engine never merges into or overwrites an existing project. The plan
    /// is then built entirely in memory and applied in sequence.
    ///
    /// The first failing write halts the run. There is no rollback: a
    /// partial tree stays in place and is the caller's responsibility to
    /// clean up.
    ///
    /// # Arguments
    /// * `root_path` - Parent directory the project is created under
    /// * `name` - Project name, also the root directory segment
    /// * `year` - Year stamped into the generated documentation
    ///
    /// # Returns
    /// * `Result<PathBuf>` - The created project directory
    pub fn execute(&self, root_path: &Path, name: &str, year: i32) -> Result<PathBuf> {
        validate_project_name(name)?;

        let ctx = ProjectContext::new(name, root_path, year);
        let project_dir = ctx.project_dir();
        if project_dir.exists() {
            return Err(Error::TargetExists {
                target_dir: project_dir.display().to_string(),
            });
        }

        let plan = PathPlanner::new(self.engine).plan(&ctx)?;

        // The project root is guaranteed present before any plan entry runs,
        // so root-level files have their parent satisfied.
        ioutils::create_dir_all(&project_dir)?;

        for entry in plan.entries() {
            log::info!("{}", entry.get_message());
            match entry {
                PlanEntry::CreateDirectory { target } => {
                    ioutils::create_dir_all(target)?
                }
                PlanEntry::CreateFile { target, content } => {
                    ioutils::write_file(content, target)?
                }
            }
        }

        Ok(project_dir)
    }
}
