use std::iter::Peekable;
use std::str::FromStr;

use tracing::debug;
use ulist_lexer::{lexer, Span, Token, Tokens};

use crate::error::{Error, Result};
use crate::list::UList;

// parser for the default rendering of a list: `[a, b, c]`. Items are parsed
// using `FromStr`, so only items that render without brackets, commas or
// whitespace survive a round trip.
struct Parser<'a> {
    tokens: Peekable<Tokens<'a>>,
    end: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            tokens: lexer(input).peekable(),
            end: input.len(),
        }
    }

    fn next_token(&mut self) -> Result<(Token<'a>, Span)> {
        self.tokens.next().ok_or_else(|| Error::Parse {
            span: self.end..self.end,
            message: "unexpected end of input".to_string(),
        })
    }

    fn list<T: FromStr>(&mut self) -> Result<UList<T>> {
        match self.next_token()? {
            (Token::LeftBracket, _) => {}
            (token, span) => return Err(unexpected(&token, span, "'['")),
        }
        let mut items = Vec::new();
        if matches!(self.tokens.peek(), Some((Token::RightBracket, _))) {
            self.tokens.next();
        } else {
            loop {
                items.push(self.item()?);
                match self.next_token()? {
                    (Token::Comma, _) => continue,
                    (Token::RightBracket, _) => break,
                    (token, span) => return Err(unexpected(&token, span, "',' or ']'")),
                }
            }
        }
        if let Some((token, span)) = self.tokens.next() {
            return Err(unexpected(&token, span, "end of input"));
        }
        Ok(items.into())
    }

    fn item<T: FromStr>(&mut self) -> Result<T> {
        let (token, span) = self.next_token()?;
        match token.item() {
            Some(s) => s.parse::<T>().map_err(|_| Error::ParseItem {
                span,
                value: s.to_string(),
            }),
            None => Err(unexpected(&token, span, "item")),
        }
    }
}

fn unexpected(token: &Token, span: Span, expected: &str) -> Error {
    Error::Parse {
        span,
        message: format!("expected {}, found {}", expected, token.describe()),
    }
}

impl<T: FromStr> UList<T> {
    /// Parse the default rendering of a list, as produced by `to_string()`.
    pub fn parse(input: &str) -> Result<UList<T>> {
        let result = Parser::new(input).list();
        if let Err(e) = &result {
            debug!(error = %e, "cannot parse list");
        }
        result
    }
}

impl<T: FromStr> FromStr for UList<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
