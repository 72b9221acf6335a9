use crate::apps::Application;
use crate::error::{Result, ShellError};
use crate::eval::AppContext;

pub struct Remove;

impl Application for Remove {
    fn name(&self) -> &str {
        "remove"
    }

    fn usage(&self) -> &str {
        "Deletes a file. Directories are removed with rmdir.\nUsage: remove <file>"
    }

    fn execute(&self, args: &[String], ctx: &mut AppContext<'_>, _: &mut Vec<String>) -> Result<()> {
        let [file] = args else {
            return Err(ShellError::Argument(
                "Wrong number of command line arguments [remove <file>]".into(),
            ));
        };
        let path = ctx.resolve(file);
        if path.is_dir() {
            return Err(ShellError::Directory(format!("Cannot remove a directory - {file}")));
        }
        if !path.exists() {
            return Err(ShellError::File(format!("File does not exist - {file}")));
        }
        std::fs::remove_file(&path)?;
        Ok(())
    }
}
