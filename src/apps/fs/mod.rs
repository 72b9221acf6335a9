//! Programs that inspect or change the filesystem.
//!
//! Every path argument is resolved against the session working directory.

pub mod cp;
pub mod find;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod remove;
pub mod rmdir;
pub mod touch;

use std::path::Path;

use crate::error::Result;

/// Names in `dir` that do not start with a dot, sorted.
pub(crate) fn visible_entries(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if !name.starts_with('.') {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}
