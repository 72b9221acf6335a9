use std::path::Path;

use glob::Pattern;

use super::visible_entries;
use crate::apps::Application;
use crate::error::{Result, ShellError};
use crate::eval::AppContext;

pub struct Find;

fn join_display(prefix: &str, name: &str) -> String {
    if prefix.ends_with('/') {
        format!("{prefix}{name}")
    } else {
        format!("{prefix}/{name}")
    }
}

/// Walk `dir` depth-first. Once a directory matches, everything below it
/// is reported as well.
fn walk(
    dir: &Path,
    shown: &str,
    pattern: &Pattern,
    matched_above: bool,
    out: &mut Vec<String>,
) -> Result<()> {
    for name in visible_entries(dir)? {
        let path = dir.join(&name);
        let display = join_display(shown, &name);
        let matched = matched_above || pattern.matches(&name);
        if matched {
            out.push(display.clone());
        }
        if path.is_dir() {
            walk(&path, &display, pattern, matched, out)?;
        }
    }
    Ok(())
}

impl Application for Find {
    fn name(&self) -> &str {
        "find"
    }

    fn usage(&self) -> &str {
        "Finds paths whose name matches a pattern.\n\
         Usage: find [<dir>] -name <pattern>\n    \
         - dir: where to search, the working directory when omitted.\n    \
         - pattern: shell-style pattern matched against entry names."
    }

    fn execute(&self, args: &[String], ctx: &mut AppContext<'_>, out: &mut Vec<String>) -> Result<()> {
        if args.is_empty() || args.len() > 3 {
            return Err(ShellError::Argument(
                "Wrong number of command line arguments [find <dir>? -name <pattern>]".into(),
            ));
        }
        let (root, shown, raw) = match args {
            [flag, pattern] if flag == "-name" => (ctx.cwd().to_path_buf(), ".", pattern),
            [dir, flag, pattern] if flag == "-name" => {
                let root = ctx.resolve(dir);
                if !root.is_dir() {
                    return Err(ShellError::Directory(format!("Invalid Directory Name - {dir}")));
                }
                (root, dir.as_str(), pattern)
            }
            _ => {
                return Err(ShellError::Flag(
                    "Wrong flags [find <dir>? -name <pattern>]".into(),
                ));
            }
        };
        let pattern = Pattern::new(raw)
            .map_err(|e| ShellError::Argument(format!("Invalid pattern {raw} - {e}")))?;
        walk(&root, shown, &pattern, false, out)
    }
}
