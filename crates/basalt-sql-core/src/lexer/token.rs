//! Token types for the SQL lexer.

use super::SourcePosition;

/// SQL keywords recognized by the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    // Data Definition Language (DDL)
    Create,
    Drop,
    Table,
    Temp,
    Temporary,
    If,
    Exists,

    // Logical operators
    And,
    Or,
    Not,
    In,
    Between,
    Is,
    Null,

    // Pattern matching
    Like,
    Glob,
    Match,
    Regexp,
    Escape,

    // Null tests
    Isnull,
    Notnull,

    // Expression clauses
    Cast,
    As,
    Case,
    When,
    Then,
    Else,
    End,
    Collate,

    // Reserved for unimplemented statement kinds
    Select,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "CREATE" => Some(Self::Create),
            "DROP" => Some(Self::Drop),
            "TABLE" => Some(Self::Table),
            "TEMP" => Some(Self::Temp),
            "TEMPORARY" => Some(Self::Temporary),
            "IF" => Some(Self::If),
            "EXISTS" => Some(Self::Exists),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            "IN" => Some(Self::In),
            "BETWEEN" => Some(Self::Between),
            "IS" => Some(Self::Is),
            "NULL" => Some(Self::Null),
            "LIKE" => Some(Self::Like),
            "GLOB" => Some(Self::Glob),
            "MATCH" => Some(Self::Match),
            "REGEXP" => Some(Self::Regexp),
            "ESCAPE" => Some(Self::Escape),
            "ISNULL" => Some(Self::Isnull),
            "NOTNULL" => Some(Self::Notnull),
            "CAST" => Some(Self::Cast),
            "AS" => Some(Self::As),
            "CASE" => Some(Self::Case),
            "WHEN" => Some(Self::When),
            "THEN" => Some(Self::Then),
            "ELSE" => Some(Self::Else),
            "END" => Some(Self::End),
            "COLLATE" => Some(Self::Collate),
            "SELECT" => Some(Self::Select),
            _ => None,
        }
    }

    /// Returns the keyword as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Drop => "DROP",
            Self::Table => "TABLE",
            Self::Temp => "TEMP",
            Self::Temporary => "TEMPORARY",
            Self::If => "IF",
            Self::Exists => "EXISTS",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::In => "IN",
            Self::Between => "BETWEEN",
            Self::Is => "IS",
            Self::Null => "NULL",
            Self::Like => "LIKE",
            Self::Glob => "GLOB",
            Self::Match => "MATCH",
            Self::Regexp => "REGEXP",
            Self::Escape => "ESCAPE",
            Self::Isnull => "ISNULL",
            Self::Notnull => "NOTNULL",
            Self::Cast => "CAST",
            Self::As => "AS",
            Self::Case => "CASE",
            Self::When => "WHEN",
            Self::Then => "THEN",
            Self::Else => "ELSE",
            Self::End => "END",
            Self::Collate => "COLLATE",
            Self::Select => "SELECT",
        }
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Numeric literal (e.g., 42 or 3.14)
    Numeric(f64),
    /// String literal (e.g., 'hello')
    String(String),
    /// Blob literal (e.g., X'1234'); the payload is the hex text
    Blob(String),

    // Identifiers and keywords
    /// Identifier (e.g., column_name)
    Identifier(String),
    /// SQL keyword
    Keyword(Keyword),

    // Operators
    /// ||
    Concat,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// +
    Plus,
    /// -
    Minus,
    /// <<
    LeftShift,
    /// >>
    RightShift,
    /// &
    BitAnd,
    /// |
    BitOr,
    /// ~
    BitNot,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,
    /// = or ==
    Eq,
    /// != or <>
    NotEq,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// .
    Dot,
    /// ;
    Semicolon,

    // Special
    /// End of input
    Eof,
    /// Invalid/unknown token
    Error(String),
}

impl TokenKind {
    /// Returns the human-readable name used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Numeric(_) => "NumericLiteral",
            Self::String(_) => "StringLiteral",
            Self::Blob(_) => "BlobLiteral",
            Self::Identifier(_) => "Identifier",
            Self::Keyword(keyword) => keyword.as_str(),
            Self::Concat => "||",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitNot => "~",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Semicolon => ";",
            Self::Eof => "Eof",
            Self::Error(_) => "Error",
        }
    }
}

/// A token with its position in the source code.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source code.
    pub position: SourcePosition,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, position: SourcePosition) -> Self {
        Self { kind, position }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(keyword) => Some(*keyword),
            _ => None,
        }
    }
}

/// A producer of tokens for the parser.
///
/// The parser buffers exactly one lookahead token and pulls the next one
/// on every consume. Implementations must be infinite: once the underlying
/// input is exhausted, `next_token` returns `Eof` tokens forever.
pub trait TokenSource {
    /// Returns the next token. Never blocks.
    fn next_token(&mut self) -> Token;
}
