//! Built-in programs and the registry that dispatches to them.
//!
//! Every program implements [`Application`]. The registry owns them behind
//! `Arc<dyn Application>` so wrappers ([`wrappers::HelpWrapper`],
//! [`wrappers::UnsafeWrapper`]) can share the program they decorate.

/// Filesystem programs: ls, mkdir, touch, remove, rmdir, mv, cp, find.
pub mod fs;
/// Name → program lookup, built from configuration.
pub mod registry;
/// Programs acting on the session itself: cd, pwd, exit, help.
pub mod session;
/// Text programs: echo, cat, head, tail, grep, sort, uniq, cut, wc, sed.
pub mod text;
/// Help and unsafe decorators.
pub mod wrappers;

pub use registry::ApplicationRegistry;

use std::io::ErrorKind;
use std::sync::Arc;

use crate::error::{Result, ShellError};
use crate::eval::AppContext;

/// Capability contract for a program.
///
/// `execute` receives the arguments after the program name and appends
/// its output lines (without terminators) to `out`. Well-formed input must
/// not fail; invalid input fails with an Argument, Flag, File or Directory
/// error.
pub trait Application: Send + Sync {
    /// Name the program is registered under.
    fn name(&self) -> &str;

    /// Usage documentation, shown by the help wrapper.
    fn usage(&self) -> &str;

    fn execute(&self, args: &[String], ctx: &mut AppContext<'_>, out: &mut Vec<String>)
    -> Result<()>;
}

/// Every built-in program, unwrapped.
pub fn builtins() -> Vec<Arc<dyn Application>> {
    vec![
        Arc::new(session::Cd),
        Arc::new(session::Pwd),
        Arc::new(session::Exit),
        Arc::new(text::echo::Echo),
        Arc::new(text::cat::Cat),
        Arc::new(text::head::Head),
        Arc::new(text::tail::Tail),
        Arc::new(text::grep::Grep),
        Arc::new(text::sort::Sort),
        Arc::new(text::uniq::Uniq),
        Arc::new(text::cut::Cut),
        Arc::new(text::wc::Wc),
        Arc::new(text::sed::Sed),
        Arc::new(fs::ls::Ls),
        Arc::new(fs::mkdir::Mkdir),
        Arc::new(fs::touch::Touch),
        Arc::new(fs::remove::Remove),
        Arc::new(fs::rmdir::Rmdir),
        Arc::new(fs::mv::Mv),
        Arc::new(fs::cp::Cp),
        Arc::new(fs::find::Find),
    ]
}

/// Read a file named on the command line into lines.
pub(crate) fn read_file_lines(ctx: &AppContext<'_>, path: &str) -> Result<Vec<String>> {
    match std::fs::read_to_string(ctx.resolve(path)) {
        Ok(content) => Ok(content.lines().map(str::to_string).collect()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(ShellError::File(format!("File does not exist - {path}")))
        }
        Err(e) => Err(ShellError::File(format!("Cannot read {path} - {e}"))),
    }
}

/// Lines from `file` when given, otherwise from the input source.
pub(crate) fn file_or_input(ctx: &mut AppContext<'_>, file: Option<&str>) -> Result<Vec<String>> {
    match file {
        Some(path) => read_file_lines(ctx, path),
        None => ctx.read_lines(),
    }
}
