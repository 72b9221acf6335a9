//! Syntax tree produced by the grammar, consumed by the eval layer.

/// One piece of a double-quoted span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoubleQuotedPart {
    Literal(String),
    /// Interior of a back-quoted sub-span.
    BackQuoted(String),
}

/// A full line: pipelines separated by `;`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandSeq {
    pub pipelines: Vec<Pipeline>,
}

/// A single call or a left-associative chain of calls joined by `|`.
///
/// `a | b | c` is `Pipe(Pipe(Call(a), b), c)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pipeline {
    Call(Call),
    Pipe(Box<Pipeline>, Call),
}

impl Pipeline {
    /// Number of calls in the chain.
    pub fn stages(&self) -> usize {
        match self {
            Pipeline::Call(_) => 1,
            Pipeline::Pipe(left, _) => left.stages() + 1,
        }
    }
}

/// One program invocation: arguments and redirections in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub atoms: Vec<Atom>,
}

impl Call {
    pub fn arguments(&self) -> impl Iterator<Item = &Argument> {
        self.atoms.iter().filter_map(|atom| match atom {
            Atom::Argument(arg) => Some(arg),
            Atom::Redirection(_) => None,
        })
    }

    pub fn redirections(&self) -> impl Iterator<Item = &Redirection> {
        self.atoms.iter().filter_map(|atom| match atom {
            Atom::Redirection(redir) => Some(redir),
            Atom::Argument(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    Argument(Argument),
    Redirection(Redirection),
}

/// Adjacent fragments with no whitespace between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub fragments: Vec<Fragment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Bare text, taken verbatim; may carry the `*` wildcard marker.
    Literal(String),
    Quoted(Quoted),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quoted {
    Single(String),
    Double(Vec<DoubleQuotedPart>),
    /// Bare command substitution.
    Back(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectKind {
    /// `<`
    Input,
    /// `>`
    Output,
    /// `>>`
    Append,
}

impl RedirectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RedirectKind::Input => "<",
            RedirectKind::Output => ">",
            RedirectKind::Append => ">>",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirection {
    pub kind: RedirectKind,
    pub target: Argument,
}
