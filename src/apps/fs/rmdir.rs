use crate::apps::Application;
use crate::error::{Result, ShellError};
use crate::eval::AppContext;

pub struct Rmdir;

impl Application for Rmdir {
    fn name(&self) -> &str {
        "rmdir"
    }

    fn usage(&self) -> &str {
        "Removes a directory.\n\
         Usage: rmdir [-r | -rf] <dir>\n    \
         - r, rf: remove the directory together with its contents."
    }

    fn execute(&self, args: &[String], ctx: &mut AppContext<'_>, _: &mut Vec<String>) -> Result<()> {
        let (recursive, dir) = match args {
            [dir] => (false, dir),
            [flag, dir] if flag == "-r" || flag == "-rf" => (true, dir),
            [_, _] => return Err(ShellError::Flag("Wrong flags [rmdir -r? <dir>]".into())),
            _ => {
                return Err(ShellError::Argument(
                    "Wrong number of command line arguments [rmdir -r? <dir>]".into(),
                ));
            }
        };
        let path = ctx.resolve(dir);
        if !path.is_dir() {
            return Err(ShellError::Directory(format!("Directory does not exist - {dir}")));
        }
        if recursive {
            std::fs::remove_dir_all(&path)?;
            return Ok(());
        }
        if std::fs::read_dir(&path)?.next().is_some() {
            return Err(ShellError::Directory(format!("Directory is not empty - {dir}")));
        }
        std::fs::remove_dir(&path)?;
        Ok(())
    }
}
