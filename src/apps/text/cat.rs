use crate::apps::{Application, read_file_lines};
use crate::error::Result;
use crate::eval::AppContext;

pub struct Cat;

impl Application for Cat {
    fn name(&self) -> &str {
        "cat"
    }

    fn usage(&self) -> &str {
        "Concatenates files, or copies the input when none are given.\n\
         Usage: cat [<file>]..."
    }

    fn execute(&self, args: &[String], ctx: &mut AppContext<'_>, out: &mut Vec<String>) -> Result<()> {
        if args.is_empty() {
            out.extend(ctx.read_lines()?);
            return Ok(());
        }
        for path in args {
            out.extend(read_file_lines(ctx, path)?);
        }
        Ok(())
    }
}
