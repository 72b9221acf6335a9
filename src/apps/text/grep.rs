use regex::Regex;

use crate::apps::{Application, read_file_lines};
use crate::error::{Result, ShellError};
use crate::eval::AppContext;

/// Prints the lines whose start matches a regular expression.
pub struct Grep;

/// Compile `pattern` so that it only matches at the start of a line.
fn anchored(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{pattern})")).map_err(|e| {
        log::debug!("grep: rejected pattern {pattern:?}: {e}");
        ShellError::Argument(format!("Invalid regular expression pattern {pattern}"))
    })
}

impl Application for Grep {
    fn name(&self) -> &str {
        "grep"
    }

    fn usage(&self) -> &str {
        "Prints the lines that match a pattern at their start.\n\
         Usage: grep <pattern> [<file>]...\n    \
         - pattern: regular expression.\n    \
         - file: files to search; the input is searched when none are given.\n      \
         With several files every line is prefixed by its file name."
    }

    fn execute(&self, args: &[String], ctx: &mut AppContext<'_>, out: &mut Vec<String>) -> Result<()> {
        let Some((pattern, files)) = args.split_first() else {
            return Err(ShellError::Argument(
                "Wrong number of command line arguments [grep <pattern> <file>?]".into(),
            ));
        };
        let re = anchored(pattern)?;

        if files.is_empty() {
            out.extend(ctx.read_lines()?.into_iter().filter(|l| re.is_match(l)));
            return Ok(());
        }

        let prefixed = files.len() > 1;
        for file in files {
            for line in read_file_lines(ctx, file)? {
                if !re.is_match(&line) {
                    continue;
                }
                out.push(if prefixed { format!("{file}:{line}") } else { line });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::testing::run;

    const LETTERS: &str = "AAA\nBBB\nAAA\nCCC\nDEFGHIJ\n";

    fn grep(words: &[&str]) -> Result<Vec<String>> {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("t.txt"), LETTERS).unwrap();
        let mut full = vec![words[0], "t.txt"];
        full.extend(&words[1..]);
        run(&Grep, dir.path(), &full, None)
    }

    #[test]
    fn literal_match() {
        assert_eq!(grep(&["AAA"]).unwrap(), vec!["AAA", "AAA"]);
    }

    #[test]
    fn character_classes() {
        assert_eq!(grep(&["[A-C]"]).unwrap(), vec!["AAA", "BBB", "AAA", "CCC"]);
        assert_eq!(grep(&["[^AI]"]).unwrap(), vec!["BBB", "CCC", "DEFGHIJ"]);
    }

    #[test]
    fn matches_only_at_line_start() {
        assert_eq!(grep(&["[D-E]"]).unwrap(), vec!["DEFGHIJ"]);
        assert_eq!(grep(&["[D-E]+"]).unwrap(), vec!["DEFGHIJ"]);
        assert!(grep(&["GHI"]).unwrap().is_empty());
    }

    #[test]
    fn empty_match_accepts_everything() {
        assert_eq!(grep(&["[D-E]*"]).unwrap().len(), 5);
    }

    #[test]
    fn several_files_are_prefixed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "AAA\nxyz\n").unwrap();
        std::fs::write(dir.path().join("b.txt"), "AAA\n").unwrap();
        let out = run(&Grep, dir.path(), &["AAA", "a.txt", "b.txt"], None).unwrap();
        assert_eq!(out, vec!["a.txt:AAA", "b.txt:AAA"]);
    }

    #[test]
    fn reads_input() {
        let dir = tempfile::tempdir().unwrap();
        let out = run(&Grep, dir.path(), &["b"], Some(&["abc", "bcd"])).unwrap();
        assert_eq!(out, vec!["bcd"]);
    }

    #[test]
    fn errors() {
        assert!(matches!(grep(&["[*"]).unwrap_err(), ShellError::Argument(_)));
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            run(&Grep, dir.path(), &[], None).unwrap_err(),
            ShellError::Argument(_)
        ));
        assert!(matches!(
            run(&Grep, dir.path(), &["A", "missing"], None).unwrap_err(),
            ShellError::File(_)
        ));
    }
}
