use super::count_and_file;
use crate::apps::{Application, file_or_input};
use crate::error::Result;
use crate::eval::AppContext;

pub struct Head;

impl Application for Head {
    fn name(&self) -> &str {
        "head"
    }

    fn usage(&self) -> &str {
        "Prints the first lines of a file or of the input.\n\
         Usage: head [-n <count>] [<file>]\n    \
         - count: number of lines, 10 when omitted."
    }

    fn execute(&self, args: &[String], ctx: &mut AppContext<'_>, out: &mut Vec<String>) -> Result<()> {
        let (count, file) = count_and_file("head", args)?;
        let lines = file_or_input(ctx, file)?;
        out.extend(lines.into_iter().take(count));
        Ok(())
    }
}
