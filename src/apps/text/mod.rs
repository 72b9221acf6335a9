//! Line-oriented text programs.

pub mod cat;
pub mod cut;
pub mod echo;
pub mod grep;
pub mod head;
pub mod sed;
pub mod sort;
pub mod tail;
pub mod uniq;
pub mod wc;

use crate::error::{Result, ShellError};

const DEFAULT_COUNT: usize = 10;

/// Parse `[-n <count>] [file]` as taken by `head` and `tail`.
pub(crate) fn count_and_file<'a>(
    program: &str,
    args: &'a [String],
) -> Result<(usize, Option<&'a str>)> {
    match args {
        [] => Ok((DEFAULT_COUNT, None)),
        [file] => Ok((DEFAULT_COUNT, Some(file.as_str()))),
        [flag, count] if flag == "-n" => Ok((parse_count(count)?, None)),
        [flag, count, file] if flag == "-n" => Ok((parse_count(count)?, Some(file.as_str()))),
        [_, _] | [_, _, _] => Err(ShellError::Flag(format!(
            "Wrong flags [{program} -n <count>? <file>?]"
        ))),
        _ => Err(ShellError::Argument(format!(
            "Wrong number of command line arguments [{program} -n <count>? <file>?]"
        ))),
    }
}

fn parse_count(raw: &str) -> Result<usize> {
    raw.parse()
        .map_err(|_| ShellError::Argument(format!("Invalid line count - {raw}")))
}

/// Split `[<flag>] [file]` for programs with a single optional switch.
pub(crate) fn switch_and_file<'a>(
    program: &str,
    switch: &str,
    args: &'a [String],
) -> Result<(bool, Option<&'a str>)> {
    match args {
        [] => Ok((false, None)),
        [only] if only == switch => Ok((true, None)),
        [file] => Ok((false, Some(file.as_str()))),
        [flag, file] if flag == switch => Ok((true, Some(file.as_str()))),
        [_, _] => Err(ShellError::Flag(format!(
            "Wrong flags [{program} {switch}? <file>?]"
        ))),
        _ => Err(ShellError::Argument(format!(
            "Wrong number of command line arguments [{program} {switch}? <file>?]"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::testing::args;

    #[test]
    fn count_forms() {
        assert_eq!(count_and_file("head", &args(&[])).unwrap(), (10, None));
        assert_eq!(
            count_and_file("head", &args(&["f"])).unwrap(),
            (10, Some("f"))
        );
        assert_eq!(
            count_and_file("head", &args(&["-n", "3"])).unwrap(),
            (3, None)
        );
        assert_eq!(
            count_and_file("head", &args(&["-n", "0", "f"])).unwrap(),
            (0, Some("f"))
        );
    }

    #[test]
    fn count_errors() {
        assert!(matches!(
            count_and_file("head", &args(&["-x", "3"])),
            Err(ShellError::Flag(_))
        ));
        assert!(matches!(
            count_and_file("head", &args(&["-n", "3", "a", "b"])),
            Err(ShellError::Argument(_))
        ));
        assert!(matches!(
            count_and_file("head", &args(&["-n", "three"])),
            Err(ShellError::Argument(_))
        ));
    }

    #[test]
    fn switch_forms() {
        assert_eq!(
            switch_and_file("sort", "-r", &args(&["-r"])).unwrap(),
            (true, None)
        );
        assert_eq!(
            switch_and_file("sort", "-r", &args(&["f"])).unwrap(),
            (false, Some("f"))
        );
        assert!(matches!(
            switch_and_file("sort", "-r", &args(&["-x", "f"])),
            Err(ShellError::Flag(_))
        ));
        assert!(matches!(
            switch_and_file("sort", "-r", &args(&["-r", "f", "g"])),
            Err(ShellError::Argument(_))
        ));
    }
}
