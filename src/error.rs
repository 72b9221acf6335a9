//! Error taxonomy shared by the parser, the evaluator and the built-in programs.

use thiserror::Error;

/// Every failure the interpreter can surface.
///
/// Errors propagate unchanged to the caller of [`crate::Shell::evaluate`];
/// the only local recovery point is [`crate::apps::wrappers::UnsafeWrapper`].
#[derive(Debug, Error)]
pub enum ShellError {
    /// The command line does not conform to the grammar.
    #[error("{message} (at offset {offset})")]
    Syntax { message: String, offset: usize },

    /// Wrong arity, unresolved glob, missing input.
    #[error("{0}")]
    Argument(String),

    /// Unknown or malformed option.
    #[error("{0}")]
    Flag(String),

    /// Missing or invalid file.
    #[error("{0}")]
    File(String),

    /// Missing or invalid directory.
    #[error("{0}")]
    Directory(String),

    /// Redirection cardinality, pipe/redirect conflict, unusable target.
    #[error("{0}")]
    Redirect(String),

    /// No program registered under the requested name.
    #[error("{0}")]
    Application(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ShellError {
    pub(crate) fn syntax(message: impl Into<String>, offset: usize) -> Self {
        ShellError::Syntax {
            message: message.into(),
            offset,
        }
    }

    /// Category name, as shown to the user.
    pub fn kind(&self) -> &'static str {
        match self {
            ShellError::Syntax { .. } => "SyntaxError",
            ShellError::Argument(_) => "ArgumentError",
            ShellError::Flag(_) => "FlagError",
            ShellError::File(_) => "FileError",
            ShellError::Directory(_) => "DirectoryError",
            ShellError::Redirect(_) => "RedirectError",
            ShellError::Application(_) => "ApplicationError",
            ShellError::Io(_) => "IoError",
        }
    }
}

pub type Result<T, E = ShellError> = std::result::Result<T, E>;
