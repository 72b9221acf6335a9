use super::switch_and_file;
use crate::apps::{Application, file_or_input};
use crate::error::Result;
use crate::eval::AppContext;

pub struct Sort;

impl Application for Sort {
    fn name(&self) -> &str {
        "sort"
    }

    fn usage(&self) -> &str {
        "Sorts the lines of a file or of the input.\n\
         Usage: sort [-r] [<file>]\n    \
         - r: reverse order."
    }

    fn execute(&self, args: &[String], ctx: &mut AppContext<'_>, out: &mut Vec<String>) -> Result<()> {
        let (reverse, file) = switch_and_file("sort", "-r", args)?;
        let mut lines = file_or_input(ctx, file)?;
        lines.sort();
        if reverse {
            lines.reverse();
        }
        out.extend(lines);
        Ok(())
    }
}
