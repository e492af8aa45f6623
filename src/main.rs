use std::{fs, io, path::PathBuf};

use clap::Parser;
use log::info;
use quotient::{
    frontend::{batch, interactive},
    interpreter::evaluator::core::Context,
};

/// quotient is an exact fraction calculator with 26 registers.
///
/// With no expressions it starts an interactive prompt. Otherwise every
/// expression is evaluated in order and printed next to its result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads expressions from a file, one per line, before any given as
    /// arguments.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Starts the interactive prompt after the batch input, keeping its
    /// registers.
    #[arg(short, long)]
    interactive: bool,

    /// Expressions and `STORE <register>` commands, such as "1/2 + 1/3".
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expressions: Vec<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let mut context = Context::new();

    let mut lines = Vec::new();
    if let Some(path) = &args.file {
        let contents = fs::read_to_string(path).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            std::process::exit(1);
        });
        lines.extend(contents.lines().filter(|line| !line.is_empty()).map(str::to_string));
    }
    lines.extend(args.expressions);

    let batch_mode = !lines.is_empty();
    if batch_mode {
        info!("evaluating {} line(s) in batch mode", lines.len());
        if let Err(e) = batch::run(&mut context, &lines, io::stdout().lock()) {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }

    if args.interactive || !batch_mode {
        info!("starting interactive session");
        if let Err(e) = interactive::run(&mut context, io::stdin().lock(), io::stdout().lock()) {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
