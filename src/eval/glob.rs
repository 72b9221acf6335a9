//! Wildcard expansion against the filesystem.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::error::{Result, ShellError};

/// The marker that turns an argument entry into a glob pattern.
pub const WILDCARD: char = '*';

const OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Escape text so it matches itself literally inside a pattern.
pub fn escape(text: &str) -> String {
    Pattern::escape(text)
}

/// Expand `pattern` relative to `cwd`.
///
/// Relative patterns yield relative paths; absolute patterns yield absolute
/// paths. An empty result is not an error here.
pub fn expand(pattern: &str, cwd: &Path) -> Result<Vec<String>> {
    let absolute = Path::new(pattern).is_absolute();
    let full = if absolute {
        pattern.to_string()
    } else {
        let base = escape(&cwd.to_string_lossy());
        format!("{}/{}", base.trim_end_matches('/'), pattern)
    };

    let paths = glob::glob_with(&full, OPTIONS)
        .map_err(|e| ShellError::Argument(format!("Invalid pattern {pattern} - {}", e.msg)))?;

    let mut matches = Vec::new();
    for entry in paths {
        let path: PathBuf = match entry {
            Ok(p) => p,
            Err(e) => {
                log::warn!("glob: skipping unreadable path: {e}");
                continue;
            }
        };
        let shown = if absolute {
            path
        } else {
            path.strip_prefix(cwd).map(Path::to_path_buf).unwrap_or(path)
        };
        matches.push(shown.to_string_lossy().into_owned());
    }
    log::trace!("glob {pattern:?} -> {matches:?}");
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("c.md"), "c").unwrap();
        fs::write(dir.path().join(".hidden.txt"), "h").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/d.txt"), "d").unwrap();
        dir
    }

    #[test]
    fn expands_relative_to_cwd() {
        let dir = fixture();
        assert_eq!(expand("*.txt", dir.path()).unwrap(), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn hidden_files_need_a_literal_dot() {
        let dir = fixture();
        let all = expand("*", dir.path()).unwrap();
        assert!(!all.iter().any(|p| p.starts_with('.')));
        assert_eq!(expand(".*.txt", dir.path()).unwrap(), vec![".hidden.txt"]);
    }

    #[test]
    fn expands_into_subdirectories() {
        let dir = fixture();
        assert_eq!(expand("sub/*", dir.path()).unwrap(), vec!["sub/d.txt"]);
    }

    #[test]
    fn absolute_pattern_stays_absolute() {
        let dir = fixture();
        let pattern = format!("{}/*.md", dir.path().display());
        let found = expand(&pattern, Path::new("/")).unwrap();
        assert_eq!(found, vec![format!("{}/c.md", dir.path().display())]);
    }

    #[test]
    fn no_match_is_empty() {
        let dir = fixture();
        assert!(expand("*.rs", dir.path()).unwrap().is_empty());
    }

    #[test]
    fn escaped_text_matches_literally() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("[x].txt"), "").unwrap();
        fs::write(dir.path().join("x.txt"), "").unwrap();
        let pattern = format!("{}*", escape("[x]"));
        assert_eq!(expand(&pattern, dir.path()).unwrap(), vec!["[x].txt"]);
    }

    #[test]
    fn invalid_pattern() {
        let dir = fixture();
        assert!(matches!(
            expand("***", dir.path()).unwrap_err(),
            ShellError::Argument(_)
        ));
    }
}
