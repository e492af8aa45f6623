use logos::Logos;

/// Represents a lexical token of an input line.
///
/// Lines are split into words on single spaces first (see [`split_words`]);
/// each word must then lex to exactly one token (see [`classify`]).
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token<'a> {
    /// Fraction literal tokens, such as `42`, `-3` or `7/2`.
    #[regex(r"-?[0-9]+(/[0-9]+)?", |lex| lex.slice())]
    Literal(&'a str),
    /// Register reference tokens, `a` through `z`.
    #[regex(r"[a-z]", |lex| lex.slice().chars().next())]
    Register(char),
    /// Register references written in uppercase. Never valid.
    #[regex(r"[A-Z]", |lex| lex.slice().chars().next())]
    UppercaseRegister(char),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
}

/// Splits a line into words on the single space character.
///
/// Empty words between consecutive spaces are kept, so they surface as
/// unrecognized tokens; empty words at the end of the line are dropped.
///
/// # Example
/// ```
/// use quotient::interpreter::lexer::split_words;
///
/// assert_eq!(split_words("1 + 2 "), vec!["1", "+", "2"]);
/// assert_eq!(split_words("1  + 2"), vec!["1", "", "+", "2"]);
/// assert!(split_words("").is_empty());
/// ```
#[must_use]
pub fn split_words(line: &str) -> Vec<&str> {
    let mut words: Vec<&str> = line.split(' ').collect();
    while words.last().is_some_and(|word| word.is_empty()) {
        words.pop();
    }
    words
}

/// Lexes a single word into a token.
///
/// # Returns
/// - `Some(Token)`: If the whole word is exactly one token.
/// - `None`: If the word is empty, contains unknown characters, or spans
///   several tokens (such as `1/` or `ab`).
///
/// # Example
/// ```
/// use quotient::interpreter::lexer::{Token, classify};
///
/// assert_eq!(classify("-7/2"), Some(Token::Literal("-7/2")));
/// assert_eq!(classify("q"), Some(Token::Register('q')));
/// assert_eq!(classify("-"), Some(Token::Minus));
/// assert_eq!(classify("3/-6"), None);
/// assert_eq!(classify("xy"), None);
/// ```
#[must_use]
pub fn classify(word: &str) -> Option<Token<'_>> {
    let mut lexer = Token::lexer(word);
    let token = lexer.next()?.ok()?;

    lexer.next().is_none().then_some(token)
}
