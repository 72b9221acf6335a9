//! shale: a small command-line interpreter.
//!
//! A line is parsed into a tree of sequences, pipelines and calls, evaluated
//! with quoting, command substitution and wildcard expansion, and executed
//! against a registry of built-in programs. Every stage's output is a list
//! of lines; pipes hand that list to the next stage in full.
//!
//! # Architecture
//!
//! - **[`parse`]**: Lexer and recursive-descent parser producing the syntax tree.
//! - **[`eval`]**: Tree evaluation, glob expansion, redirections and the pipeline executor.
//! - **[`apps`]**: The [`apps::Application`] trait, built-in programs, wrappers and registry.
//! - **[`config`]**: Configuration loading: embedded defaults + user overlay merge.
//! - **[`logging`]**: File logger setup.
//! - **[`error`]**: The error categories every layer reports.

/// Built-in programs, wrappers and the registry.
pub mod apps;
/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Error categories.
pub mod error;
/// Evaluation engine: evaluator, executor, session state.
pub mod eval;
/// File-based logging.
pub mod logging;
/// Lexer, parser and syntax tree types.
pub mod parse;

pub use error::{Result, ShellError};
pub use eval::{Shell, render};

/// Evaluate one line with the default configuration in the process working
/// directory.
///
/// This is the main entry point for simple usage. Use [`Shell`] to keep a
/// working directory across lines or to apply user configuration.
pub fn evaluate(line: &str) -> Result<Vec<String>> {
    let config = config::Config::default_config();
    Shell::from_config(&config)?.evaluate(line)
}
