use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use skiff::{Interpreter, interpret};

/// skiff is a small, dynamically typed scripting language with a
/// tree-walking interpreter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a script file. Starts the interactive prompt when omitted.
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    match args.script {
        Some(path) => run_file(&path),
        None => run_prompt(),
    }
}

/// Batch mode: run the file for its side effects, exit non-zero on the
/// first unrecovered error.
fn run_file(path: &Path) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  path.display());
        process::exit(1);
    });

    if let Err(e) = interpret(&source) {
        eprintln!("{e}");
        process::exit(1);
    }
}

/// Interactive mode: one session for the whole dialogue, echoing each
/// line's results and reporting diagnostics without giving up.
fn run_prompt() {
    let mut session = Interpreter::new();
    let stdin = io::stdin();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        match session.run(&line) {
            Ok(results) => {
                for result in results {
                    println!("{result}");
                }
            },
            Err(e) => eprintln!("{e}"),
        }
    }
}
