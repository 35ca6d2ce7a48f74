use crate::{
    cli::Args, engine::ScaffoldEngine, error::Result, renderer::MiniJinjaRenderer,
};
use chrono::{Datelike, Utc};

/// Main CLI runner that orchestrates a single scaffolding run.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete scaffolding workflow.
    pub fn run(self) -> Result<()> {
        let engine = MiniJinjaRenderer::new();
        // The current year is captured here, once per run; the engine itself
        // never reads ambient time.
        let year = Utc::now().year();

        let scaffolder = ScaffoldEngine::new(&engine);
        let project_dir =
            scaffolder.execute(&self.args.path, &self.args.project_name, year)?;

        println!(
            "Project '{}' created successfully in {}.",
            self.args.project_name,
            project_dir.display()
        );
        println!();
        println!("To get started:");
        println!("  cd {}", self.args.project_name);
        println!("  uv venv");
        println!("  source .venv/bin/activate  # Windows: .venv\\Scripts\\activate");
        println!("  uv sync");
        println!("  {}", self.args.project_name);
        Ok(())
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
