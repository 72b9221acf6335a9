use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Result, ShellError};

/// State that outlives a single evaluation: the working directory and the
/// exit request.
///
/// One `Session` belongs to one [`crate::Shell`]; nested substitutions see
/// and mutate the same session. Only `cd` changes the working directory.
#[derive(Debug, Clone)]
pub struct Session {
    cwd: PathBuf,
    exit_requested: bool,
}

impl Session {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            exit_requested: false,
        }
    }

    /// Start from the process working directory.
    pub fn from_process() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Resolve a user-supplied path against the working directory.
    /// Absolute paths are returned unchanged.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.cwd.join(path)
    }

    /// Change the working directory, relative to the current one.
    pub fn change_dir(&mut self, path: &str) -> Result<()> {
        let target = self.resolve(path);
        if !target.is_dir() {
            return Err(ShellError::Directory(format!(
                "Directory does not exist - {path}"
            )));
        }
        self.cwd = target.canonicalize()?;
        log::debug!("working directory is now {}", self.cwd.display());
        Ok(())
    }

    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

/// Where a program reads its input from.
///
/// Acquired by the pipeline executor right before the program runs and
/// dropped right after it returns.
#[derive(Debug)]
pub enum Input {
    /// Materialized output of the previous pipe stage.
    Piped(Vec<String>),
    /// Opened input-redirect file.
    File(BufReader<File>),
    /// The process standard input.
    Ambient,
}

impl Input {
    /// Drain the source into lines.
    ///
    /// An empty source is an error: programs only read input when they
    /// were given nothing else to work on.
    pub fn read_lines(&mut self) -> Result<Vec<String>> {
        let lines = match self {
            Input::Piped(lines) => std::mem::take(lines),
            Input::File(reader) => collect_lines(reader)?,
            Input::Ambient => collect_lines(std::io::stdin().lock())?,
        };
        if lines.is_empty() {
            return Err(ShellError::Argument("No standard input detected".into()));
        }
        Ok(lines)
    }
}

fn collect_lines(reader: impl BufRead) -> Result<Vec<String>> {
    Ok(reader.lines().collect::<std::io::Result<Vec<_>>>()?)
}

/// What a program sees while it runs.
pub struct AppContext<'a> {
    pub input: &'a mut Input,
    pub session: &'a mut Session,
}

impl AppContext<'_> {
    /// Lines from the input source; see [`Input::read_lines`].
    pub fn read_lines(&mut self) -> Result<Vec<String>> {
        self.input.read_lines()
    }

    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.session.resolve(path)
    }

    pub fn cwd(&self) -> &Path {
        self.session.cwd()
    }
}
