use crate::apps::Application;
use crate::error::Result;
use crate::eval::AppContext;

pub struct Echo;

impl Application for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn usage(&self) -> &str {
        "Prints its arguments separated by single spaces.\nUsage: echo [<arg>]..."
    }

    fn execute(&self, args: &[String], _: &mut AppContext<'_>, out: &mut Vec<String>) -> Result<()> {
        out.push(args.join(" "));
        Ok(())
    }
}
