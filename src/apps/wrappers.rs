use std::sync::Arc;

use super::Application;
use crate::error::Result;
use crate::eval::AppContext;

/// Answers `-h` / `--help` as the first argument with the wrapped program's
/// usage text instead of running it.
pub struct HelpWrapper {
    inner: Arc<dyn Application>,
}

impl HelpWrapper {
    pub fn new(inner: Arc<dyn Application>) -> Self {
        Self { inner }
    }
}

impl Application for HelpWrapper {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn usage(&self) -> &str {
        self.inner.usage()
    }

    fn execute(
        &self,
        args: &[String],
        ctx: &mut AppContext<'_>,
        out: &mut Vec<String>,
    ) -> Result<()> {
        match args.first().map(String::as_str) {
            Some("-h" | "--help") => {
                out.extend(self.inner.usage().lines().map(str::to_string));
                Ok(())
            }
            _ => self.inner.execute(args, ctx, out),
        }
    }
}

/// Catches every failure of the wrapped program and reports it as an output
/// line. The only place where an error does not propagate.
pub struct UnsafeWrapper {
    inner: Arc<dyn Application>,
}

impl UnsafeWrapper {
    pub fn new(inner: Arc<dyn Application>) -> Self {
        Self { inner }
    }
}

impl Application for UnsafeWrapper {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn usage(&self) -> &str {
        self.inner.usage()
    }

    fn execute(
        &self,
        args: &[String],
        ctx: &mut AppContext<'_>,
        out: &mut Vec<String>,
    ) -> Result<()> {
        if let Err(e) = self.inner.execute(args, ctx, out) {
            log::warn!("{}: swallowed {}: {e}", self.inner.name(), e.kind());
            out.push(format!("An exception occurred: {e}"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::testing::run;
    use crate::apps::text::cat::Cat;
    use crate::apps::text::echo::Echo;
    use crate::error::ShellError;

    #[test]
    fn help_flag_prints_usage() {
        let dir = tempfile::tempdir().unwrap();
        let app = HelpWrapper::new(Arc::new(Echo));
        let out = run(&app, dir.path(), &["--help"], None).unwrap();
        assert_eq!(out.join("\n"), Echo.usage());
        let out = run(&app, dir.path(), &["-h"], None).unwrap();
        assert!(!out.is_empty());
    }

    #[test]
    fn help_flag_only_in_first_position() {
        let dir = tempfile::tempdir().unwrap();
        let app = HelpWrapper::new(Arc::new(Echo));
        let out = run(&app, dir.path(), &["a", "-h"], None).unwrap();
        assert_eq!(out, vec!["a -h"]);
    }

    #[test]
    fn unsafe_reports_failure_as_output() {
        let dir = tempfile::tempdir().unwrap();
        let app = UnsafeWrapper::new(Arc::new(Cat));
        let out = run(&app, dir.path(), &["missing.txt"], None).unwrap();
        assert_eq!(
            out,
            vec!["An exception occurred: File does not exist - missing.txt"]
        );
    }

    #[test]
    fn unsafe_passes_success_through() {
        let dir = tempfile::tempdir().unwrap();
        let app = UnsafeWrapper::new(Arc::new(Echo));
        assert_eq!(run(&app, dir.path(), &["ok"], None).unwrap(), vec!["ok"]);
    }

    #[test]
    fn unsafe_keeps_partial_output() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "first\n").unwrap();
        let app = UnsafeWrapper::new(Arc::new(Cat));
        let out = run(&app, dir.path(), &["a.txt", "b.txt"], None).unwrap();
        assert_eq!(out[0], "first");
        assert!(out[1].starts_with("An exception occurred:"));
    }

    #[test]
    fn unwrapped_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&Cat, dir.path(), &["missing.txt"], None).unwrap_err();
        assert!(matches!(err, ShellError::File(_)));
    }
}
