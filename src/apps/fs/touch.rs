use crate::apps::Application;
use crate::error::{Result, ShellError};
use crate::eval::AppContext;

pub struct Touch;

impl Application for Touch {
    fn name(&self) -> &str {
        "touch"
    }

    fn usage(&self) -> &str {
        "Creates an empty file.\nUsage: touch <file>"
    }

    fn execute(&self, args: &[String], ctx: &mut AppContext<'_>, _: &mut Vec<String>) -> Result<()> {
        let [file] = args else {
            return Err(ShellError::Argument(
                "Wrong number of command line arguments [touch <file>]".into(),
            ));
        };
        let path = ctx.resolve(file);
        if path.exists() {
            return Err(ShellError::File(format!("File already exists - {file}")));
        }
        std::fs::File::create(&path)?;
        Ok(())
    }
}
