use crate::apps::{Application, file_or_input};
use crate::error::{Result, ShellError};
use crate::eval::AppContext;

/// An inclusive 1-based byte range; `end` of `None` runs to the line end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ByteRange {
    start: usize,
    end: Option<usize>,
}

impl ByteRange {
    fn contains(&self, position: usize) -> bool {
        position >= self.start && self.end.is_none_or(|end| position <= end)
    }
}

fn invalid(spec: &str) -> ShellError {
    ShellError::Argument(format!("Invalid byte range - {spec}"))
}

fn parse_position(raw: &str, spec: &str) -> Result<usize> {
    match raw.parse::<usize>() {
        Ok(0) | Err(_) => Err(invalid(spec)),
        Ok(n) => Ok(n),
    }
}

/// Parse a comma-separated list of `N`, `N-M`, `N-` and `-M`, sorted and
/// with overlapping ranges merged.
fn parse_ranges(spec: &str) -> Result<Vec<ByteRange>> {
    let mut ranges = Vec::new();
    for part in spec.split(',') {
        let range = match part.split_once('-') {
            None => {
                let n = parse_position(part, spec)?;
                ByteRange { start: n, end: Some(n) }
            }
            Some(("", "")) => return Err(invalid(spec)),
            Some(("", end)) => ByteRange {
                start: 1,
                end: Some(parse_position(end, spec)?),
            },
            Some((start, "")) => ByteRange {
                start: parse_position(start, spec)?,
                end: None,
            },
            Some((start, end)) => {
                let (start, end) = (parse_position(start, spec)?, parse_position(end, spec)?);
                if end < start {
                    return Err(invalid(spec));
                }
                ByteRange { start, end: Some(end) }
            }
        };
        ranges.push(range);
    }

    ranges.sort_by_key(|r| r.start);
    let mut merged: Vec<ByteRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        if let Some(last) = merged.last_mut()
            && last.end.is_none_or(|end| range.start <= end + 1)
        {
            last.end = match (last.end, range.end) {
                (Some(a), Some(b)) => Some(a.max(b)),
                _ => None,
            };
            continue;
        }
        merged.push(range);
    }
    Ok(merged)
}

fn cut_line(line: &str, ranges: &[ByteRange]) -> String {
    line.trim()
        .chars()
        .enumerate()
        .filter(|(i, _)| ranges.iter().any(|r| r.contains(i + 1)))
        .map(|(_, c)| c)
        .collect()
}

pub struct Cut;

impl Application for Cut {
    fn name(&self) -> &str {
        "cut"
    }

    fn usage(&self) -> &str {
        "Cuts sections out of every line.\n\
         Usage: cut -b <ranges> [<file>]\n    \
         - ranges: comma-separated N, N-M, N- or -M, counted from 1."
    }

    fn execute(&self, args: &[String], ctx: &mut AppContext<'_>, out: &mut Vec<String>) -> Result<()> {
        if args.is_empty() || args.len() > 3 {
            return Err(ShellError::Argument(
                "Wrong number of command line arguments [cut -b <byte_range> <file>?]".into(),
            ));
        }
        if args[0] != "-b" {
            return Err(ShellError::Flag(
                "Wrong flag [cut -b <byte_range> <file>?]".into(),
            ));
        }
        let Some(spec) = args.get(1) else {
            return Err(ShellError::Argument("Missing byte range [cut -b <byte_range>]".into()));
        };
        let ranges = parse_ranges(spec)?;
        let lines = file_or_input(ctx, args.get(2).map(String::as_str))?;
        out.extend(lines.iter().map(|line| cut_line(line, &ranges)));
        Ok(())
    }
}
