/// One-shot evaluation of a list of lines.
///
/// Every argument is one line. Results are echoed next to the line that
/// produced them.
pub mod batch;
/// The read-eval-print loop.
///
/// Reads lines after a `> ` prompt until `QUIT` or end of input.
pub mod interactive;
