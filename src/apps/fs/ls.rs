use super::visible_entries;
use crate::apps::Application;
use crate::error::{Result, ShellError};
use crate::eval::AppContext;

pub struct Ls;

impl Application for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn usage(&self) -> &str {
        "Lists the non-hidden entries of a directory, one per line.\n\
         Usage: ls [<dir>]\n    \
         - dir: the working directory when omitted."
    }

    fn execute(&self, args: &[String], ctx: &mut AppContext<'_>, out: &mut Vec<String>) -> Result<()> {
        let dir = match args {
            [] => ctx.cwd().to_path_buf(),
            [dir] => ctx.resolve(dir),
            _ => {
                return Err(ShellError::Argument(
                    "Wrong number of command line arguments [ls <dir>?]".into(),
                ));
            }
        };
        if !dir.is_dir() {
            let shown = args.first().map_or_else(|| dir.display().to_string(), String::clone);
            return Err(ShellError::Directory(format!("Directory does not exist - {shown}")));
        }
        out.extend(visible_entries(&dir)?);
        Ok(())
    }
}
