use crate::error::{Result, ShellError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// `>`: truncate and replace.
    Overwrite,
    /// `>>`: write after existing contents.
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRedirect {
    pub path: String,
    pub mode: WriteMode,
}

/// A fully resolved call, ready for the pipeline executor.
///
/// Built once by the evaluator and consumed once by
/// [`execute`](super::pipeline::execute).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInvocation {
    pub program: String,
    /// Full argument vector; `argv[0]` is the program name.
    pub argv: Vec<String>,
    pub input_redirect: Option<String>,
    pub output_redirect: Option<OutputRedirect>,
    pub piped_input: Option<Vec<String>>,
}

impl ResolvedInvocation {
    /// Build an invocation, rejecting piped input combined with an input file.
    pub fn new(
        argv: Vec<String>,
        input_redirect: Option<String>,
        output_redirect: Option<OutputRedirect>,
        piped_input: Option<Vec<String>>,
    ) -> Result<Self> {
        if input_redirect.is_some() && piped_input.is_some() {
            return Err(ShellError::Redirect(
                "Cannot redirect input and pipe at the same time".into(),
            ));
        }
        let program = argv.first().cloned().unwrap_or_default();
        Ok(Self {
            program,
            argv,
            input_redirect,
            output_redirect,
            piped_input,
        })
    }

    /// Arguments handed to the program (everything after the name).
    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or_default()
    }

    /// The argument vector quoted back into shell syntax, for logging.
    pub fn display(&self) -> String {
        shlex::try_join(self.argv.iter().map(String::as_str))
            .unwrap_or_else(|_| self.argv.join(" "))
    }
}
