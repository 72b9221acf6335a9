use super::types::{
    Argument, Atom, Call, CommandSeq, DoubleQuotedPart, Fragment, Pipeline, Quoted, RedirectKind,
    Redirection,
};
use crate::error::{Result, ShellError};

peg::parser! {
    grammar command_line() for str {
        rule ws() = quiet!{[c if c.is_whitespace()]*}

        pub(crate) rule line() -> CommandSeq =
            ws() pipelines:(pipeline() ** ";") ws() ![_] { CommandSeq { pipelines } }

        // Pipes fold to the left: `a | b | c` is `(a | b) | c`.
        rule pipeline() -> Pipeline =
            first:call() rest:("|" c:call() { c })* {
                rest.into_iter()
                    .fold(Pipeline::Call(first), |left, right| Pipeline::Pipe(Box::new(left), right))
            }

        rule call() -> Call =
            ws() atoms:(atom() ++ ws()) ws() {?
                if atoms.iter().any(|a| matches!(a, Atom::Argument(_))) {
                    Ok(Call { atoms })
                } else {
                    Err("a command")
                }
            }

        rule atom() -> Atom =
            r:redirection() { Atom::Redirection(r) }
            / a:argument() { Atom::Argument(a) }

        rule redirection() -> Redirection =
            kind:redirect_op() ws() target:argument() { Redirection { kind, target } }

        rule redirect_op() -> RedirectKind =
            ">>" { RedirectKind::Append }
            / ">" { RedirectKind::Output }
            / "<" { RedirectKind::Input }

        rule argument() -> Argument = fragments:fragment()+ { Argument { fragments } }

        rule fragment() -> Fragment =
            q:quoted() { Fragment::Quoted(q) }
            / s:$(unquoted_char()+) { Fragment::Literal(s.to_string()) }

        rule unquoted_char() =
            [c if !c.is_whitespace() && !matches!(c, '\'' | '"' | '`' | ';' | '|' | '<' | '>')]

        rule quoted() -> Quoted =
            "'" s:$([^'\'']*) "'" { Quoted::Single(s.to_string()) }
            / "`" s:$([^'`']*) "`" { Quoted::Back(s.to_string()) }
            / "\"" parts:double_quoted_part()* "\"" { Quoted::Double(parts) }

        rule double_quoted_part() -> DoubleQuotedPart =
            "`" s:$([^'`']*) "`" { DoubleQuotedPart::BackQuoted(s.to_string()) }
            / s:$([^'"' | '`']+) { DoubleQuotedPart::Literal(s.to_string()) }
    }
}

/// Parses one input line into its sequence of pipelines.
///
/// ```text
/// commandSeq  := ε | pipe (';' pipe)*
/// pipe        := call ('|' call)*
/// call        := atom+            (at least one argument)
/// atom        := argument | redirection
/// argument    := fragment+        (no whitespace between fragments)
/// redirection := ('<' | '>' | '>>') WS? argument
/// ```
///
/// A failure reports the farthest offset the grammar reached, which is the
/// end of the line for unterminated quotes.
pub fn parse(line: &str) -> Result<CommandSeq> {
    command_line::line(line)
        .map_err(|e| ShellError::syntax(format!("expected {}", e.expected), e.location.offset))
}
