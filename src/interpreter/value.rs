/// Exact fractions backed by arbitrary-precision integers.
///
/// Defines `Rational`, the only runtime value type of the calculator. It
/// handles construction and normalization, parsing from text, display, and
/// the four arithmetic operations.
pub mod rational;
