//! Runs one resolved invocation: input acquisition, dispatch, output routing.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Write};

use super::context::{AppContext, Input, Session};
use super::invocation::{OutputRedirect, ResolvedInvocation, WriteMode};
use crate::apps::ApplicationRegistry;
use crate::error::{Result, ShellError};

fn open_input(invocation: &ResolvedInvocation, session: &Session) -> Result<Input> {
    if let Some(lines) = &invocation.piped_input {
        return Ok(Input::Piped(lines.clone()));
    }
    let Some(path) = &invocation.input_redirect else {
        return Ok(Input::Ambient);
    };
    match File::open(session.resolve(path)) {
        Ok(file) => Ok(Input::File(BufReader::new(file))),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ShellError::Redirect(format!(
            "Input file not found - {path}"
        ))),
        Err(e) => Err(ShellError::Redirect(format!(
            "Cannot read input file {path} - {e}"
        ))),
    }
}

fn open_output(redirect: &OutputRedirect, session: &Session) -> Result<File> {
    let mut options = OpenOptions::new();
    match redirect.mode {
        WriteMode::Overwrite => options.write(true).create(true).truncate(true),
        WriteMode::Append => options.append(true).create(true),
    };
    options
        .open(session.resolve(&redirect.path))
        .map_err(|e| {
            ShellError::Redirect(format!("Cannot open output file {} - {e}", redirect.path))
        })
}

/// Execute one invocation.
///
/// Returns the lines to hand to the parent frame; empty when the output was
/// redirected to a file. The output file is opened only after the program
/// succeeds, so a failing program leaves it untouched and a program may read
/// the file it writes to.
pub fn execute(
    invocation: ResolvedInvocation,
    registry: &ApplicationRegistry,
    session: &mut Session,
) -> Result<Vec<String>> {
    let app = registry.lookup(&invocation.program)?;
    log::debug!("exec: {}", invocation.display());

    let mut input = open_input(&invocation, session)?;
    let mut out = Vec::new();
    let mut ctx = AppContext {
        input: &mut input,
        session,
    };
    app.execute(invocation.args(), &mut ctx, &mut out)?;

    let Some(redirect) = &invocation.output_redirect else {
        return Ok(out);
    };
    log::debug!(
        "redirect {} line(s) to {} ({:?})",
        out.len(),
        redirect.path,
        redirect.mode
    );
    let mut writer = BufWriter::new(open_output(redirect, session)?);
    for line in &out {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(Vec::new())
}
