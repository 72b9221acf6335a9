use std::path::{Path, PathBuf};

use crate::apps::Application;
use crate::error::{Result, ShellError};
use crate::eval::AppContext;

pub struct Mv;

/// Where `source` ends up when moved or copied to `destination`: inside it
/// when it is a directory, otherwise at it.
pub(crate) fn landing_path(source: &Path, destination: &Path) -> Result<PathBuf> {
    if !destination.is_dir() {
        return Ok(destination.to_path_buf());
    }
    let name = source.file_name().ok_or_else(|| {
        ShellError::File(format!("Cannot take a file name from {}", source.display()))
    })?;
    Ok(destination.join(name))
}

impl Application for Mv {
    fn name(&self) -> &str {
        "mv"
    }

    fn usage(&self) -> &str {
        "Moves a file or directory.\n\
         Usage: mv [-f] <source> <dest>\n    \
         - f: overwrite an existing destination file.\n    \
         - dest: moved inside when it is a directory."
    }

    fn execute(&self, args: &[String], ctx: &mut AppContext<'_>, _: &mut Vec<String>) -> Result<()> {
        let (force, source, destination) = match args {
            [source, destination] => (false, source, destination),
            [flag, source, destination] if flag == "-f" => (true, source, destination),
            [_, _, _] => return Err(ShellError::Flag("Wrong flags [mv -f? <src> <dest>]".into())),
            _ => {
                return Err(ShellError::Argument(
                    "Wrong number of command line arguments [mv -f? <src> <dest>]".into(),
                ));
            }
        };

        let from = ctx.resolve(source);
        if !from.exists() {
            return Err(ShellError::File(format!("Source file '{source}' does not exist")));
        }
        let to = landing_path(&from, &ctx.resolve(destination))?;
        if to.exists() && !force {
            return Err(ShellError::File(format!(
                "Destination file '{destination}' already exists. Use -f to force overwrite"
            )));
        }
        log::debug!("mv: {} -> {}", from.display(), to.display());
        std::fs::rename(&from, &to)?;
        Ok(())
    }
}
