pub mod context;
pub mod glob;
pub mod invocation;
pub mod pipeline;

pub use context::{AppContext, Input, Session};
pub use invocation::{OutputRedirect, ResolvedInvocation, WriteMode};

use crate::apps::ApplicationRegistry;
use crate::config::Config;
use crate::error::{Result, ShellError};
use crate::parse::{
    self, Argument, Atom, Call, CommandSeq, DoubleQuotedPart, Fragment, Pipeline, Quoted,
    RedirectKind, Redirection,
};

/// One argv entry under construction.
///
/// `pattern` mirrors `text` with quoted pieces escaped, so that only bare
/// wildcard markers take part in glob matching.
#[derive(Debug, Default)]
struct Entry {
    text: String,
    pattern: String,
    wildcard: bool,
}

impl Entry {
    /// Only `*` stays special in unquoted text; `?` and `[` match themselves.
    fn push_literal(&mut self, text: &str) {
        self.text.push_str(text);
        let pieces: Vec<String> = text.split(glob::WILDCARD).map(glob::escape).collect();
        self.pattern.push_str(&pieces.join("*"));
        self.wildcard |= text.contains(glob::WILDCARD);
    }

    fn push_quoted(&mut self, text: &str) {
        self.text.push_str(text);
        self.pattern.push_str(&glob::escape(text));
    }
}

/// Tree-walking evaluator.
///
/// Holds no per-evaluation state: every call to [`evaluate_text`](Self::evaluate_text),
/// including the recursive ones made for command substitution, parses its
/// own tree and builds its own argv and output buffers. Only the
/// [`Session`] is shared.
pub struct Evaluator<'a> {
    registry: &'a ApplicationRegistry,
    session: &'a mut Session,
}

impl<'a> Evaluator<'a> {
    pub fn new(registry: &'a ApplicationRegistry, session: &'a mut Session) -> Self {
        Self { registry, session }
    }

    /// Parse and evaluate a full line, returning its output lines.
    pub fn evaluate_text(&mut self, text: &str) -> Result<Vec<String>> {
        let tree = parse::parse(text)?;
        log::debug!("parsed {} pipeline(s) from {text:?}", tree.pipelines.len());
        self.command_seq(&tree)
    }

    fn command_seq(&mut self, seq: &CommandSeq) -> Result<Vec<String>> {
        let mut out = Vec::new();
        for pipeline in &seq.pipelines {
            out.extend(self.pipeline(pipeline)?);
        }
        Ok(out)
    }

    fn pipeline(&mut self, pipeline: &Pipeline) -> Result<Vec<String>> {
        match pipeline {
            Pipeline::Call(call) => self.call(call, None),
            Pipeline::Pipe(left, right) => {
                // Left side runs to completion before the right side starts.
                let staged = self.pipeline(left)?;
                self.call(right, Some(staged))
            }
        }
    }

    fn call(&mut self, call: &Call, piped_input: Option<Vec<String>>) -> Result<Vec<String>> {
        let mut argv = Vec::new();
        let mut input = None;
        let mut output = None;

        for atom in &call.atoms {
            match atom {
                Atom::Argument(arg) => argv.extend(self.argument(arg)?),
                Atom::Redirection(redir) => self.redirection(redir, &mut input, &mut output)?,
            }
        }

        let invocation = ResolvedInvocation::new(argv, input, output, piped_input)?;
        pipeline::execute(invocation, self.registry, self.session)
    }

    fn redirection(
        &mut self,
        redir: &Redirection,
        input: &mut Option<String>,
        output: &mut Option<OutputRedirect>,
    ) -> Result<()> {
        let path = self.redirect_target(&redir.target)?;
        let mode = match redir.kind {
            RedirectKind::Input => {
                if input.is_some() {
                    return Err(ShellError::Redirect("Too many input redirections".into()));
                }
                *input = Some(path);
                return Ok(());
            }
            RedirectKind::Output => WriteMode::Overwrite,
            RedirectKind::Append => WriteMode::Append,
        };
        if output.is_some() {
            return Err(ShellError::Redirect("Too many output redirections".into()));
        }
        *output = Some(OutputRedirect { path, mode });
        Ok(())
    }

    fn redirect_target(&mut self, target: &Argument) -> Result<String> {
        let mut entries = self.argument(target)?;
        match (entries.pop(), entries.is_empty()) {
            (Some(path), true) if !path.is_empty() => Ok(path),
            _ => Err(ShellError::Redirect("Ambiguous redirection target".into())),
        }
    }

    /// Assemble an argument's fragments into one or more argv entries.
    fn argument(&mut self, arg: &Argument) -> Result<Vec<String>> {
        let mut finished = Vec::new();
        let mut current = Entry::default();

        for fragment in &arg.fragments {
            match fragment {
                Fragment::Literal(text) => current.push_literal(text),
                Fragment::Quoted(quoted) => {
                    let mut tokens = self.quoted(quoted)?.into_iter();
                    if let Some(first) = tokens.next() {
                        current.push_quoted(&first);
                    }
                    for token in tokens {
                        finished.push(std::mem::take(&mut current));
                        current.push_quoted(&token);
                    }
                }
            }
        }
        finished.push(current);

        let mut argv = Vec::with_capacity(finished.len());
        for entry in finished {
            if !entry.wildcard {
                argv.push(entry.text);
                continue;
            }
            let matches = glob::expand(&entry.pattern, self.session.cwd())?;
            if matches.is_empty() {
                return Err(ShellError::Argument(format!(
                    "No matches found - {}",
                    entry.text
                )));
            }
            argv.extend(matches);
        }
        Ok(argv)
    }

    fn quoted(&mut self, quoted: &Quoted) -> Result<Vec<String>> {
        match quoted {
            Quoted::Single(text) => Ok(vec![text.clone()]),
            Quoted::Double(parts) => {
                let mut token = String::new();
                for part in parts {
                    match part {
                        DoubleQuotedPart::Literal(text) => token.push_str(text),
                        DoubleQuotedPart::BackQuoted(inner) => {
                            token.push_str(&self.substitute(inner)?);
                        }
                    }
                }
                Ok(vec![token])
            }
            Quoted::Back(inner) => Ok(self
                .substitute(inner)?
                .split_whitespace()
                .map(str::to_string)
                .collect()),
        }
    }

    /// Command substitution: evaluate `text` as a nested line and flatten
    /// its output onto one line.
    fn substitute(&mut self, text: &str) -> Result<String> {
        log::trace!("substitute {text:?}");
        let lines = self.evaluate_text(text)?;
        Ok(lines.join(" ").trim_end().to_string())
    }
}

/// A registry plus the session it runs in.
pub struct Shell {
    registry: ApplicationRegistry,
    session: Session,
}

impl Shell {
    pub fn new(registry: ApplicationRegistry, session: Session) -> Self {
        Self { registry, session }
    }

    /// Registry from `config`, session in the process working directory.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            ApplicationRegistry::from_config(config),
            Session::from_process()?,
        ))
    }

    /// Evaluate one line. Output of stages that completed before a failure
    /// is lost along with the error; side effects on files are not undone.
    pub fn evaluate(&mut self, line: &str) -> Result<Vec<String>> {
        Evaluator::new(&self.registry, &mut self.session).evaluate_text(line)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn registry(&self) -> &ApplicationRegistry {
        &self.registry
    }
}

/// Render output lines the way they are printed: one `\n` per line.
pub fn render(lines: &[String]) -> String {
    let mut text = String::new();
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn shell_in(dir: &std::path::Path) -> Shell {
        Shell::new(
            ApplicationRegistry::from_config(&Config::default_config()),
            Session::new(dir),
        )
    }

    fn argv_of(shell: &mut Shell, arg_text: &str) -> Vec<String> {
        let tree = parse::parse(&format!("echo {arg_text}")).unwrap();
        let Pipeline::Call(call) = &tree.pipelines[0] else {
            panic!("expected a call");
        };
        let arg = call.arguments().nth(1).unwrap().clone();
        let mut eval = Evaluator::new(&shell.registry, &mut shell.session);
        eval.argument(&arg).unwrap()
    }

    #[test]
    fn single_quote_identity() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell_in(dir.path());
        for text in ["plain", "with  spaces", "`echo foo`", "a\"b", "*", "  "] {
            assert_eq!(argv_of(&mut shell, &format!("'{text}'")), vec![text]);
        }
    }

    #[test]
    fn bare_substitution_splits_and_joins_neighbours() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell_in(dir.path());
        assert_eq!(
            argv_of(&mut shell, "pre`echo a  b   c`post"),
            vec!["prea", "b", "cpost"]
        );
    }

    #[test]
    fn bare_substitution_with_no_output_keeps_one_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell_in(dir.path());
        assert_eq!(argv_of(&mut shell, "``"), vec![""]);
        assert_eq!(argv_of(&mut shell, "x``y"), vec!["xy"]);
    }

    #[test]
    fn double_quotes_never_split() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell_in(dir.path());
        assert_eq!(
            argv_of(&mut shell, "\"`echo a ; echo b`  c\""),
            vec!["a b  c"]
        );
    }

    #[test]
    fn quoted_wildcard_is_literal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("x.txt"), "").unwrap();
        let mut shell = shell_in(dir.path());
        assert_eq!(argv_of(&mut shell, "'*'"), vec!["*"]);
        assert_eq!(argv_of(&mut shell, "\"*.txt\""), vec!["*.txt"]);
    }

    #[test]
    fn wildcard_with_quoted_suffix() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::write(dir.path().join("b.md"), "").unwrap();
        let mut shell = shell_in(dir.path());
        assert_eq!(argv_of(&mut shell, "*'.txt'"), vec!["a.txt"]);
    }

    #[test]
    fn only_star_is_a_wildcard() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("[ab]c"), "").unwrap();
        fs::write(dir.path().join("ac"), "").unwrap();
        let mut shell = shell_in(dir.path());
        assert_eq!(argv_of(&mut shell, "[ab]*"), vec!["[ab]c"]);
        assert_eq!(argv_of(&mut shell, "?c"), vec!["?c"]);
    }

    #[test]
    fn wildcard_entries_expand_independently() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        let mut shell = shell_in(dir.path());
        // Substitution yields two entries, each carrying its own marker.
        assert_eq!(
            argv_of(&mut shell, "`echo a b`*"),
            vec!["a", "b.txt"]
        );
        assert_eq!(argv_of(&mut shell, "*`echo .txt`"), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn unmatched_wildcard_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell_in(dir.path());
        let tree = parse::parse("echo *.nothing").unwrap();
        let mut eval = Evaluator::new(&shell.registry, &mut shell.session);
        let err = eval.command_seq(&tree).unwrap_err();
        assert!(matches!(err, ShellError::Argument(_)));
    }

    #[test]
    fn two_output_redirections() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell_in(dir.path());
        let err = shell.evaluate("echo a > x.txt > y.txt").unwrap_err();
        assert!(matches!(err, ShellError::Redirect(_)));
        let err = shell.evaluate("echo a > x.txt >> y.txt").unwrap_err();
        assert!(matches!(err, ShellError::Redirect(_)));
    }

    #[test]
    fn two_input_redirections() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a\n").unwrap();
        let mut shell = shell_in(dir.path());
        let err = shell.evaluate("cat < a.txt < a.txt").unwrap_err();
        assert!(matches!(err, ShellError::Redirect(_)));
    }

    #[test]
    fn pipe_and_input_redirection() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a\n").unwrap();
        let mut shell = shell_in(dir.path());
        let err = shell.evaluate("echo x | cat < a.txt").unwrap_err();
        assert!(matches!(err, ShellError::Redirect(_)));
    }

    #[test]
    fn ambiguous_redirection_target() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell_in(dir.path());
        let err = shell.evaluate("echo a > `echo x y`").unwrap_err();
        assert!(matches!(err, ShellError::Redirect(_)));
    }

    #[test]
    fn quoted_redirection_target() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell_in(dir.path());
        shell.evaluate("echo a > 'my file.txt'").unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("my file.txt")).unwrap(),
            "a\n"
        );
    }

    #[test]
    fn render_terminates_every_line() {
        assert_eq!(render(&["a".into(), "".into()]), "a\n\n");
        assert_eq!(render(&[]), "");
    }
}
