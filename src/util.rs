/// Integer text helpers.
///
/// This module validates and parses the digit strings that make up fraction
/// literals. It is stricter than the parsers of the big-integer library: only
/// an optional leading minus sign followed by ASCII digits is accepted, so
/// that the fraction grammar is the same everywhere in the crate.
pub mod num;
