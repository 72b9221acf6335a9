use crate::apps::{Application, read_file_lines};
use crate::error::{Result, ShellError};
use crate::eval::AppContext;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Counts {
    lines: usize,
    words: usize,
    chars: usize,
}

impl Counts {
    /// Characters include the line terminator of every line.
    fn add(&mut self, lines: &[String]) {
        self.lines += lines.len();
        self.words += lines.iter().map(|l| l.split_whitespace().count()).sum::<usize>();
        self.chars += lines.iter().map(|l| l.chars().count() + 1).sum::<usize>();
    }
}

pub struct Wc;

impl Application for Wc {
    fn name(&self) -> &str {
        "wc"
    }

    fn usage(&self) -> &str {
        "Counts lines, words and characters.\n\
         Usage: wc [-l] [-w] [-m] [<file>]...\n    \
         - l: lines.\n    \
         - w: words.\n    \
         - m: characters.\n\
         Flags may be combined (-lw). Without flags all three counts are printed."
    }

    fn execute(&self, args: &[String], ctx: &mut AppContext<'_>, out: &mut Vec<String>) -> Result<()> {
        let (flag_args, files): (Vec<&String>, Vec<&String>) =
            args.iter().partition(|a| a.starts_with('-'));
        let flags: Vec<char> = flag_args.iter().flat_map(|a| a.chars().skip(1)).collect();
        if let Some(bad) = flags.iter().find(|f| !matches!(f, 'l' | 'w' | 'm')) {
            return Err(ShellError::Flag(format!("Invalid flag: {bad}")));
        }

        let mut counts = Counts::default();
        if files.is_empty() {
            counts.add(&ctx.read_lines()?);
        } else {
            for file in files {
                counts.add(&read_file_lines(ctx, file)?);
            }
        }

        if flags.is_empty() {
            out.extend([counts.lines, counts.words, counts.chars].map(|n| n.to_string()));
        }
        for flag in flags {
            let n = match flag {
                'l' => counts.lines,
                'w' => counts.words,
                _ => counts.chars,
            };
            out.push(n.to_string());
        }
        Ok(())
    }
}
