pub mod shell;
pub mod types;

pub use shell::parse;
pub use types::{
    Argument, Atom, Call, CommandSeq, DoubleQuotedPart, Fragment, Pipeline, Quoted, RedirectKind,
    Redirection,
};
