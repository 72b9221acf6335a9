use super::count_and_file;
use crate::apps::{Application, file_or_input};
use crate::error::Result;
use crate::eval::AppContext;

pub struct Tail;

impl Application for Tail {
    fn name(&self) -> &str {
        "tail"
    }

    fn usage(&self) -> &str {
        "Prints the last lines of a file or of the input.\n\
         Usage: tail [-n <count>] [<file>]\n    \
         - count: number of lines, 10 when omitted."
    }

    fn execute(&self, args: &[String], ctx: &mut AppContext<'_>, out: &mut Vec<String>) -> Result<()> {
        let (count, file) = count_and_file("tail", args)?;
        let lines = file_or_input(ctx, file)?;
        let skip = lines.len().saturating_sub(count);
        out.extend(lines.into_iter().skip(skip));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::testing::run;
    use crate::error::ShellError;

    #[test]
    fn last_lines() {
        let dir = tempfile::tempdir().unwrap();
        let content: String = (1..=20).map(|i| format!("{i}\n")).collect();
        std::fs::write(dir.path().join("n.txt"), content).unwrap();
        let out = run(&Tail, dir.path(), &["n.txt"], None).unwrap();
        assert_eq!(out.first().map(String::as_str), Some("11"));
        let out = run(&Tail, dir.path(), &["-n", "2", "n.txt"], None).unwrap();
        assert_eq!(out, vec!["19", "20"]);
    }

    #[test]
    fn zero_lines() {
        let dir = tempfile::tempdir().unwrap();
        let out = run(&Tail, dir.path(), &["-n", "0"], Some(&["a"])).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn wrong_flag() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&Tail, dir.path(), &["-c", "2"], Some(&["a"])).unwrap_err();
        assert!(matches!(err, ShellError::Flag(_)));
    }
}
