use std::io::{self, BufRead, Write};

use log::debug;

use crate::interpreter::{
    command::{Command, Outcome, is_quit},
    evaluator::core::Context,
};

/// Printed before every line is read.
pub const PROMPT: &str = "> ";
/// Printed when a `STORE` command names an invalid register.
pub const STORE_ERROR: &str = "*** ERROR [STORE command received invalid register] ***";

/// Runs the read-eval-print loop until `QUIT` or end of input.
///
/// Lines are trimmed before they are interpreted; bytes that are not valid
/// UTF-8 are replaced rather than ending the session. Evaluation failures are
/// printed and the loop continues; only I/O errors end it early.
///
/// # Errors
/// Returns any error raised while reading `input` or writing `output`.
///
/// # Example
/// ```
/// use quotient::{frontend::interactive, interpreter::evaluator::core::Context};
///
/// let mut context = Context::new();
/// let mut output = Vec::new();
/// interactive::run(&mut context, "1/2 + 1/3\nSTORE a\nquit\n".as_bytes(), &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "> 5/6\n> STORED\n> ");
/// ```
pub fn run<R: BufRead, W: Write>(context: &mut Context, mut input: R, mut output: W) -> io::Result<()> {
    let mut buffer = Vec::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            debug!("end of input");
            break;
        }

        // Invalid UTF-8 becomes U+FFFD and fails as an ordinary bad line.
        let decoded = String::from_utf8_lossy(&buffer);
        let line = decoded.trim();
        if is_quit(line) {
            break;
        }

        respond(context, line, &mut output)?;
    }

    output.flush()
}

/// Executes one trimmed line and prints its response.
fn respond<W: Write>(context: &mut Context, line: &str, output: &mut W) -> io::Result<()> {
    let command = Command::parse(line);

    match context.execute(command) {
        Ok(Outcome::Stored(_)) => writeln!(output, "STORED"),
        Ok(Outcome::Value(value)) => writeln!(output, "{value}"),
        Err(_) if command.is_store() => writeln!(output, "{STORE_ERROR}"),
        Err(err) => writeln!(output, "*** ERROR [{}] ***", err.summary()),
    }
}
