//! shale command-line entry point.
//!
//! ```text
//! shale                 read lines from stdin, evaluating each one
//! shale -c <line>       evaluate a single line
//! shale --dump-config   print the merged configuration as JSON
//! ```

use std::io::{BufRead, IsTerminal, Write};
use std::process::ExitCode;

use shale::config::Config;
use shale::{Shell, ShellError, render};

fn report(e: &ShellError) {
    println!("The following error has occurred: [{}] {e}", e.kind());
}

/// Evaluate a line and print its output. Returns whether it succeeded.
///
/// The process working directory follows the session's after every line.
fn run_line(shell: &mut Shell, line: &str) -> bool {
    let result = shell.evaluate(line);
    if let Err(e) = std::env::set_current_dir(shell.session().cwd()) {
        log::warn!("cannot follow cwd {}: {e}", shell.session().cwd().display());
    }
    match result {
        Ok(out) => {
            print!("{}", render(&out));
            true
        }
        Err(e) => {
            log::info!("line failed: {line:?}: {e}");
            report(&e);
            false
        }
    }
}

fn interactive(shell: &mut Shell) -> ExitCode {
    let prompt = std::io::stdin().is_terminal();
    let mut stdin = std::io::stdin().lock();
    let mut line = String::new();
    loop {
        if prompt {
            print!("{}> ", shell.session().cwd().display());
            let _ = std::io::stdout().flush();
        }
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {}
            Err(e) => {
                eprintln!("failed to read stdin: {e}");
                return ExitCode::FAILURE;
            }
        }
        run_line(shell, line.trim_end_matches(['\n', '\r']));
        if shell.session().exit_requested() {
            return ExitCode::SUCCESS;
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::load();

    if let [flag] = args.as_slice()
        && flag == "--dump-config"
    {
        match serde_json::to_string_pretty(&config) {
            Ok(json) => {
                println!("{json}");
                return ExitCode::SUCCESS;
            }
            Err(e) => {
                eprintln!("failed to serialize config: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    shale::logging::init(&config.logging);

    let mut shell = match Shell::from_config(&config) {
        Ok(shell) => shell,
        Err(e) => {
            report(&e);
            return ExitCode::FAILURE;
        }
    };

    match args.as_slice() {
        [] => interactive(&mut shell),
        [flag, line] if flag == "-c" => {
            if run_line(&mut shell, line) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        [flag, _] => {
            eprintln!("Unexpected command line argument {flag}");
            ExitCode::FAILURE
        }
        _ => {
            eprintln!("usage: shale [-c <line> | --dump-config]");
            ExitCode::FAILURE
        }
    }
}
