use std::io::{self, Write};

use crate::interpreter::{
    command::{Command, Outcome},
    evaluator::core::Context,
};

/// Evaluates every line in order and prints one result line for each.
///
/// Lines are used as given, without trimming. Registers and the accumulator
/// carry over from one line to the next.
///
/// # Errors
/// Returns any error raised while writing `output`.
///
/// # Example
/// ```
/// use quotient::{frontend::batch, interpreter::evaluator::core::Context};
///
/// let mut context = Context::new();
/// let mut output = Vec::new();
/// batch::run(&mut context, ["4 / 2", "STORE b", "b +"], &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(),
///            "4 / 2 -> 2\nSTORE b -> STORED\nb +: FAILED [Invalid expression]\n");
/// ```
pub fn run<I, S, W>(context: &mut Context, lines: I, mut output: W) -> io::Result<()>
    where I: IntoIterator<Item = S>,
          S: AsRef<str>,
          W: Write
{
    for line in lines {
        let line = line.as_ref();

        match context.execute(Command::parse(line)) {
            Ok(Outcome::Stored(_)) => writeln!(output, "{line} -> STORED")?,
            Ok(Outcome::Value(value)) => writeln!(output, "{line} -> {value}")?,
            Err(err) => writeln!(output, "{line}: FAILED [{}]", err.summary())?,
        }
    }

    output.flush()
}
