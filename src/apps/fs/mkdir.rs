use crate::apps::Application;
use crate::error::{Result, ShellError};
use crate::eval::AppContext;

pub struct Mkdir;

impl Application for Mkdir {
    fn name(&self) -> &str {
        "mkdir"
    }

    fn usage(&self) -> &str {
        "Creates a directory.\nUsage: mkdir <dir>"
    }

    fn execute(&self, args: &[String], ctx: &mut AppContext<'_>, _: &mut Vec<String>) -> Result<()> {
        let [dir] = args else {
            return Err(ShellError::Argument(
                "Wrong number of command line arguments [mkdir <dir>]".into(),
            ));
        };
        let path = ctx.resolve(dir);
        if path.exists() {
            return Err(ShellError::Directory(format!("Directory already exists - {dir}")));
        }
        std::fs::create_dir(&path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::testing::run;

    #[test]
    fn creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        run(&Mkdir, dir.path(), &["new"], None).unwrap();
        assert!(dir.path().join("new").is_dir());
    }

    #[test]
    fn existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("old")).unwrap();
        assert!(matches!(
            run(&Mkdir, dir.path(), &["old"], None).unwrap_err(),
            ShellError::Directory(_)
        ));
    }

    #[test]
    fn arity() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            run(&Mkdir, dir.path(), &[], None).unwrap_err(),
            ShellError::Argument(_)
        ));
    }
}
