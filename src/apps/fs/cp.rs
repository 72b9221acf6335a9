use std::path::Path;

use super::mv::landing_path;
use crate::apps::Application;
use crate::error::{Result, ShellError};
use crate::eval::AppContext;

pub struct Cp;

#[derive(Debug, Default)]
struct Options {
    force: bool,
    recursive: bool,
}

/// Leading options, then the two operands.
fn parse_args(args: &[String]) -> Result<(Options, &str, &str)> {
    if !(2..=3).contains(&args.len()) {
        return Err(ShellError::Argument(
            "Wrong number of command line arguments [cp -f? -r? <src> <dest>]".into(),
        ));
    }
    let mut options = Options::default();
    let mut rest = args;
    while let Some((first, tail)) = rest.split_first()
        && first.starts_with('-')
    {
        match first.as_str() {
            "-f" => options.force = true,
            "-r" | "-R" => options.recursive = true,
            other => return Err(ShellError::Flag(format!("Invalid option: {other}"))),
        }
        rest = tail;
    }
    match rest {
        [source, destination] => Ok((options, source.as_str(), destination.as_str())),
        _ => Err(ShellError::Argument(
            "Wrong number of command line arguments [cp -f? -r? <src> <dest>]".into(),
        )),
    }
}

/// The source listing is taken before `to` exists, so copying a directory
/// into itself stops after one level.
fn copy_tree(from: &Path, to: &Path) -> Result<()> {
    let entries = std::fs::read_dir(from)?.collect::<std::io::Result<Vec<_>>>()?;
    std::fs::create_dir_all(to)?;
    for entry in entries {
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

impl Application for Cp {
    fn name(&self) -> &str {
        "cp"
    }

    fn usage(&self) -> &str {
        "Copies a file, or a directory with -r.\n\
         Usage: cp [-f] [-r] <source> <dest>\n    \
         - f: overwrite an existing destination.\n    \
         - r, R: copy a directory and its contents."
    }

    fn execute(&self, args: &[String], ctx: &mut AppContext<'_>, _: &mut Vec<String>) -> Result<()> {
        let (options, source, destination) = parse_args(args)?;
        let from = ctx.resolve(source);
        let dest = ctx.resolve(destination);

        let to = if from.is_file() {
            if options.recursive {
                return Err(ShellError::File("Cannot copy a file recursively".into()));
            }
            dest.clone()
        } else if from.is_dir() {
            if dest.is_file() {
                return Err(ShellError::Directory("Cannot copy a directory into a file".into()));
            }
            if !options.recursive {
                return Err(ShellError::Directory(format!(
                    "Cannot copy a directory without -r - {source}"
                )));
            }
            landing_path(&from, &dest)?
        } else {
            return Err(ShellError::File(format!("Source '{source}' does not exist")));
        };

        if to.exists() && !options.force {
            return Err(ShellError::File(format!(
                "Destination '{}' already exists. Use -f to force overwrite",
                to.display()
            )));
        }

        log::debug!("cp: {} -> {}", from.display(), to.display());
        if from.is_dir() {
            copy_tree(&from, &to)
        } else {
            std::fs::copy(&from, &to)?;
            Ok(())
        }
    }
}
