use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use quill::{
    eval_source, get_result,
    interpreter::object::{Environment, Object},
};

/// quill is a small, dynamically typed scripting language with first-class
/// functions and closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells quill to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the last
    /// printable value of a quill script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// The script to run, or with --file a path to one. Leave it out to
    /// start the interactive prompt.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        repl();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    if let Err(e) = get_result(&script, args.pipe_mode) {
        eprintln!("{e}");
    }
}

/// Reads input line by line and prints each result's display form, keeping
/// bindings across lines in one shared environment. Inputs with no printable
/// value, such as a `let` statement, echo nothing.
fn repl() {
    let env = Environment::new();
    let stdin = io::stdin();

    prompt();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        match eval_source(&line, &env) {
            Ok(Object::Null) => {},
            Ok(result) => println!("{result}"),
            Err(failure) => print!("{failure}"),
        }
        prompt();
    }
}

fn prompt() {
    print!(">> ");
    let _ = io::stdout().flush();
}
