use super::switch_and_file;
use crate::apps::{Application, file_or_input};
use crate::error::Result;
use crate::eval::AppContext;

pub struct Uniq;

impl Application for Uniq {
    fn name(&self) -> &str {
        "uniq"
    }

    fn usage(&self) -> &str {
        "Drops adjacent duplicate lines.\n\
         Usage: uniq [-i] [<file>]\n    \
         - i: compare case-insensitively."
    }

    fn execute(&self, args: &[String], ctx: &mut AppContext<'_>, out: &mut Vec<String>) -> Result<()> {
        let (ignore_case, file) = switch_and_file("uniq", "-i", args)?;
        let key = |line: &str| {
            if ignore_case {
                line.to_lowercase()
            } else {
                line.to_string()
            }
        };

        let mut previous: Option<String> = None;
        for line in file_or_input(ctx, file)? {
            let current = key(&line);
            if previous.as_deref() == Some(current.as_str()) {
                continue;
            }
            previous = Some(current);
            out.push(line);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::testing::run;

    #[test]
    fn drops_adjacent_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let out = run(&Uniq, dir.path(), &[], Some(&["a", "a", "b", "a"])).unwrap();
        assert_eq!(out, vec!["a", "b", "a"]);
    }

    #[test]
    fn ignore_case_keeps_first_spelling() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("u.txt"), "AAA\naaa\nAaA\nbbb\n").unwrap();
        let out = run(&Uniq, dir.path(), &["-i", "u.txt"], None).unwrap();
        assert_eq!(out, vec!["AAA", "bbb"]);
        let out = run(&Uniq, dir.path(), &["u.txt"], None).unwrap();
        assert_eq!(out.len(), 4);
    }
}
