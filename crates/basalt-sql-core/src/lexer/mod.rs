//! SQL Lexer/Tokenizer
//!
//! This module provides a hand-written lexer for SQL that produces a stream
//! of tokens, and the `TokenSource` trait the parser consumes them through.

mod position;
mod token;
mod tokenizer;

pub use position::SourcePosition;
pub use token::{Keyword, Token, TokenKind, TokenSource};
pub use tokenizer::Lexer;
