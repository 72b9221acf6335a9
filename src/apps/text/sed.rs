use regex::Regex;

use crate::apps::{Application, file_or_input};
use crate::error::{Result, ShellError};
use crate::eval::AppContext;

/// A parsed `s/<re>/<rep>/[g]` expression.
#[derive(Debug)]
struct Substitution {
    pattern: Regex,
    replacement: String,
    global: bool,
}

impl Substitution {
    /// Either `/` or `|` separates the parts.
    fn parse(expr: &str) -> Result<Self> {
        let invalid = || ShellError::Argument(format!("Invalid regular expression pattern {expr}"));
        let parts: Vec<&str> = expr.split(['/', '|']).collect();
        let ["s", pattern, replacement, flags] = parts.as_slice() else {
            return Err(invalid());
        };
        let global = match *flags {
            "" => false,
            "g" => true,
            _ => return Err(invalid()),
        };
        let pattern = Regex::new(pattern).map_err(|_| invalid())?;
        Ok(Self {
            pattern,
            replacement: expand_backrefs(replacement),
            global,
        })
    }

    fn apply(&self, line: &str) -> String {
        let limit = if self.global { 0 } else { 1 };
        self.pattern
            .replacen(line, limit, self.replacement.as_str())
            .into_owned()
    }
}

/// Rewrite `\1`-style group references into the `${1}` form the regex
/// crate expands, escaping any literal `$`.
fn expand_backrefs(replacement: &str) -> String {
    let mut out = String::with_capacity(replacement.len());
    let mut chars = replacement.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '$' => out.push_str("$$"),
            '\\' => match chars.peek() {
                Some(d) if d.is_ascii_digit() => {
                    out.push_str("${");
                    while let Some(d) = chars.next_if(char::is_ascii_digit) {
                        out.push(d);
                    }
                    out.push('}');
                }
                Some('\\') => {
                    chars.next();
                    out.push('\\');
                }
                _ => out.push('\\'),
            },
            _ => out.push(c),
        }
    }
    out
}

pub struct Sed;

impl Application for Sed {
    fn name(&self) -> &str {
        "sed"
    }

    fn usage(&self) -> &str {
        "Replaces regular expression matches in every line.\n\
         Usage: sed s/<pattern>/<replacement>/[g] [<file>]\n    \
         - g: replace every match instead of the first one.\n    \
         - file: the input is used when omitted."
    }

    fn execute(&self, args: &[String], ctx: &mut AppContext<'_>, out: &mut Vec<String>) -> Result<()> {
        let (expr, file) = match args {
            [expr] => (expr, None),
            [expr, file] => (expr, Some(file.as_str())),
            _ => {
                return Err(ShellError::Argument(
                    "Wrong number of command line arguments [sed <expression> <file>?]".into(),
                ));
            }
        };
        let substitution = Substitution::parse(expr)?;
        let lines = file_or_input(ctx, file)?;
        out.extend(lines.iter().map(|line| substitution.apply(line)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::testing::run;

    fn sed(expr: &str, lines: &[&str]) -> Result<Vec<String>> {
        let dir = tempfile::tempdir().unwrap();
        run(&Sed, dir.path(), &[expr], Some(lines))
    }

    #[test]
    fn first_match_only() {
        assert_eq!(sed("s/a/b/", &["aaa"]).unwrap(), vec!["baa"]);
    }

    #[test]
    fn global() {
        assert_eq!(sed("s/a/b/g", &["aaa", "cac"]).unwrap(), vec!["bbb", "cbc"]);
    }

    #[test]
    fn pipe_delimiter() {
        assert_eq!(sed("s|o+|0|g", &["foo boo"]).unwrap(), vec!["f0 b0"]);
    }

    #[test]
    fn group_references() {
        assert_eq!(
            sed(r"s/(\w+) (\w+)/\2 \1/", &["hello world"]).unwrap(),
            vec!["world hello"]
        );
        assert_eq!(sed("s/x/$1/", &["x"]).unwrap(), vec!["$1"]);
    }

    #[test]
    fn reads_file_without_touching_it() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("f.txt"), "abc\n").unwrap();
        let out = run(&Sed, dir.path(), &["s/b/X/", "f.txt"], None).unwrap();
        assert_eq!(out, vec!["aXc"]);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("f.txt")).unwrap(),
            "abc\n"
        );
    }

    #[test]
    fn errors() {
        for expr in ["s/a/b", "y/a/b/", "s/(/b/", "s/a/b/q"] {
            assert!(
                matches!(sed(expr, &["a"]).unwrap_err(), ShellError::Argument(_)),
                "{expr}"
            );
        }
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            run(&Sed, dir.path(), &[], None).unwrap_err(),
            ShellError::Argument(_)
        ));
    }
}
