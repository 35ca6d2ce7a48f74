/// Handles argument parsing and CLI orchestration.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// The built-in catalog of scaffold templates.
pub mod catalog;

/// The immutable per-run context templates are rendered against.
pub mod context;

/// Applies scaffold plans to the file system.
pub mod engine;

/// In-memory planning of the directories and files to create.
pub mod plan;

/// Template rendering functionality.
pub mod renderer;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Project name validation.
pub mod validation;

/// Constants used throughout the application.
pub mod constants;
