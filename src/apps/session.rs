//! Programs that act on the session rather than on files or text.

use super::Application;
use crate::error::{Result, ShellError};
use crate::eval::AppContext;

pub struct Cd;

impl Application for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn usage(&self) -> &str {
        "Changes the current working directory.\n\
         Usage: cd <dir>\n    \
         - dir: path to the target directory, relative or absolute."
    }

    fn execute(&self, args: &[String], ctx: &mut AppContext<'_>, _: &mut Vec<String>) -> Result<()> {
        let [dir] = args else {
            return Err(ShellError::Argument(
                "Wrong number of command line arguments [cd <dir>]".into(),
            ));
        };
        ctx.session.change_dir(dir)
    }
}

pub struct Pwd;

impl Application for Pwd {
    fn name(&self) -> &str {
        "pwd"
    }

    fn usage(&self) -> &str {
        "Outputs the current working directory.\nUsage: pwd"
    }

    fn execute(&self, _: &[String], ctx: &mut AppContext<'_>, out: &mut Vec<String>) -> Result<()> {
        out.push(ctx.cwd().display().to_string());
        Ok(())
    }
}

/// Asks the session to end once the current line finishes.
pub struct Exit;

impl Application for Exit {
    fn name(&self) -> &str {
        "exit"
    }

    fn usage(&self) -> &str {
        "Exits the shell.\nUsage: exit"
    }

    fn execute(&self, _: &[String], ctx: &mut AppContext<'_>, _: &mut Vec<String>) -> Result<()> {
        ctx.session.request_exit();
        Ok(())
    }
}

/// General usage plus the list of available programs.
pub struct Help {
    names: Vec<String>,
}

impl Help {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }
}

const HELP_TEXT: &str = "\
Usage:
    <command> [<args>]      : Run one of the available commands.
    <command> > <file>      : Redirect output to a file.
    <command> >> <file>     : Append output to a file.
    <command> < <file>      : Use a file as input.
    <command> | <command>   : Pipe output from one command to another.
    <command> ; <command>   : Run multiple commands sequentially.
    `<command>`             : Substitute the output of a command.";

impl Application for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn usage(&self) -> &str {
        "Shows general usage and the available commands.\nUsage: help"
    }

    fn execute(&self, args: &[String], _: &mut AppContext<'_>, out: &mut Vec<String>) -> Result<()> {
        if !args.is_empty() {
            return Err(ShellError::Argument(
                "Wrong number of command line arguments [help]".into(),
            ));
        }
        out.extend(HELP_TEXT.lines().map(str::to_string));
        out.push("The following commands are available:".into());
        out.push(format!("    {}", self.names.join(", ")));
        out.push("Use <command> --help or <command> -h for more information about a command.".into());
        Ok(())
    }
}
