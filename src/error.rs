use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The proposed name cannot be used as a package identifier or
    /// directory segment.
    #[error("Invalid project name '{name}': names must start with a letter or underscore and contain only letters, digits and underscores.")]
    InvalidName { name: String },

    #[error("Cannot proceed: target directory '{target_dir}' already exists.")]
    TargetExists { target_dir: String },

    /// A file-system mutation failed. Execution halts at the first failure;
    /// anything already created stays in place.
    #[error("Failed to write '{path}'. Original error: {source}")]
    WriteFailure { path: PathBuf, source: std::io::Error },

    #[error("Failed to render. Original error: {0}")]
    Render(#[from] minijinja::Error),
}

/// Convenience type alias for Results with the scaffolding Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
