mod lexer;

pub use lexer::{lexer, Span, Token, Tokens};
