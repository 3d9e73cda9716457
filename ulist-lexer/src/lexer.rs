use logos::{Logos, SpannedIter};

pub use logos::Span;

/// A token in the rendered form of a list, `[a, b, c]`.
#[derive(Logos, Clone, Debug, PartialEq)]
#[logos(skip r"[\u{20}\u{9}\u{d}\u{a}]+")]
pub enum Token<'a> {
    Error,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token(",")]
    Comma,
    // anything up to the next delimiter, whitespace or control character is
    // an item; it's up to the consumer to make sense of its content
    #[regex(r"[^\[\],\u{0}-\u{20}\u{7f}]+")]
    Item(&'a str),
}

impl<'a> Token<'a> {
    /// The text of an item token, if this is one.
    pub fn item(&self) -> Option<&'a str> {
        match self {
            Token::Item(s) => Some(s),
            _ => None,
        }
    }

    /// A short human readable description, for use in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Token::Error => "unrecognized input",
            Token::LeftBracket => "'['",
            Token::RightBracket => "']'",
            Token::Comma => "','",
            Token::Item(_) => "item",
        }
    }
}

/// Spanned tokens for an input. Lexing errors turn into `Token::Error`.
pub struct Tokens<'a> {
    base: SpannedIter<'a, Token<'a>>,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            base: Token::lexer(input).spanned(),
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (Token<'a>, Span);

    fn next(&mut self) -> Option<Self::Item> {
        let (token, span) = self.base.next()?;
        match token {
            Ok(token) => Some((token, span)),
            Err(()) => Some((Token::Error, span)),
        }
    }
}

/// Tokenize the rendered form of a list.
pub fn lexer(input: &str) -> Tokens<'_> {
    Tokens::new(input)
}
