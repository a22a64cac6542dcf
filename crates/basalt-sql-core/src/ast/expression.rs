//! Expression AST types.

use super::types::TypeName;

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Numeric literal.
    Numeric(f64),
    /// String literal.
    String(String),
    /// Blob literal (hex text).
    Blob(String),
    /// NULL literal.
    Null,
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Negation (-)
    Neg,
    /// Identity (+)
    Pos,
    /// Bitwise NOT (~)
    BitNot,
    /// Logical NOT
    Not,
}

impl UnaryOperator {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Pos => "+",
            Self::BitNot => "~",
            Self::Not => "NOT",
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // String
    Concat,

    // Arithmetic
    Mul,
    Div,
    Mod,
    Add,
    Sub,

    // Bitwise
    LeftShift,
    RightShift,
    BitAnd,
    BitOr,

    // Comparison
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,

    // Logical
    And,
    Or,
}

impl BinaryOperator {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Concat => "||",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Add => "+",
            Self::Sub => "-",
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// Pattern-matching operators (`expr LIKE pattern` and friends).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOperator {
    /// LIKE
    Like,
    /// GLOB
    Glob,
    /// MATCH
    Match,
    /// REGEXP
    Regexp,
}

impl MatchOperator {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "LIKE",
            Self::Glob => "GLOB",
            Self::Match => "MATCH",
            Self::Regexp => "REGEXP",
        }
    }
}

/// An SQL expression.
///
/// Each node exclusively owns its sub-expressions. The `Error` variant is a
/// recovery marker: it carries no payload, and its presence means a
/// diagnostic was recorded for this subtree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A literal value.
    Literal(Literal),

    /// A column reference, optionally qualified with table and schema names.
    Column {
        /// Schema name (optional).
        schema: Option<String>,
        /// Table name (optional).
        table: Option<String>,
        /// Column name.
        name: String,
    },

    /// A unary expression.
    Unary {
        /// Operator.
        op: UnaryOperator,
        /// Operand.
        operand: Box<Expression>,
    },

    /// A binary expression.
    Binary {
        /// Operator.
        op: BinaryOperator,
        /// Left operand.
        lhs: Box<Expression>,
        /// Right operand.
        rhs: Box<Expression>,
    },

    /// A parenthesised, comma-separated expression list.
    Chained(Vec<Expression>),

    /// CAST(expr AS type-name).
    Cast {
        /// Expression to cast.
        expr: Box<Expression>,
        /// Target type.
        type_name: TypeName,
    },

    /// CASE [subject] WHEN ... THEN ... [ELSE ...] END.
    Case {
        /// The subject expression (absent in the searched form).
        subject: Option<Box<Expression>>,
        /// WHEN/THEN clauses, in source order.
        when_then: Vec<(Expression, Expression)>,
        /// ELSE clause.
        else_clause: Option<Box<Expression>>,
    },

    /// expr COLLATE collation-name.
    Collate {
        /// The collated expression.
        expr: Box<Expression>,
        /// Collation name.
        collation: String,
    },

    /// lhs IS [NOT] rhs.
    Is {
        /// Left operand.
        lhs: Box<Expression>,
        /// Right operand.
        rhs: Box<Expression>,
        /// Whether this is IS NOT.
        inverted: bool,
    },

    /// lhs [NOT] LIKE/GLOB/MATCH/REGEXP rhs [ESCAPE escape].
    Match {
        /// Operator.
        op: MatchOperator,
        /// Left operand.
        lhs: Box<Expression>,
        /// Pattern operand.
        rhs: Box<Expression>,
        /// ESCAPE expression (LIKE only in standard SQL, accepted for all).
        escape: Option<Box<Expression>>,
        /// Whether the match is inverted (NOT LIKE, ...).
        inverted: bool,
    },

    /// expr ISNULL / NOTNULL / NOT NULL.
    NullTest {
        /// The tested expression.
        expr: Box<Expression>,
        /// Whether the test is for NOT NULL.
        inverted: bool,
    },

    /// expr [NOT] BETWEEN lower AND upper.
    Between {
        /// The tested expression.
        expr: Box<Expression>,
        /// Lower bound.
        lower: Box<Expression>,
        /// Upper bound.
        upper: Box<Expression>,
        /// Whether this is NOT BETWEEN.
        inverted: bool,
    },

    /// expr [NOT] IN (expr, ...). The chain may be empty: `x IN ()` is valid.
    InChained {
        /// The tested expression.
        expr: Box<Expression>,
        /// The value list.
        chain: Vec<Expression>,
        /// Whether this is NOT IN.
        inverted: bool,
    },

    /// expr [NOT] IN [schema.]table.
    InTable {
        /// The tested expression.
        expr: Box<Expression>,
        /// Schema name (optional).
        schema: Option<String>,
        /// Table name.
        table: String,
        /// Whether this is NOT IN.
        inverted: bool,
    },

    /// Recovery marker for a subtree that failed to parse.
    Error,
}

impl Expression {
    /// Returns true if this node is the `Error` recovery marker.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Returns true if this expression or any of its sub-expressions is an
    /// `Error` recovery node.
    #[must_use]
    pub fn contains_error(&self) -> bool {
        match self {
            Self::Literal(_) | Self::Column { .. } => false,
            Self::Unary { operand, .. } => operand.contains_error(),
            Self::Binary { lhs, rhs, .. } => lhs.contains_error() || rhs.contains_error(),
            Self::Chained(expressions) => expressions.iter().any(Self::contains_error),
            Self::Cast { expr, .. } | Self::Collate { expr, .. } | Self::NullTest { expr, .. } => {
                expr.contains_error()
            }
            Self::Case {
                subject,
                when_then,
                else_clause,
            } => {
                subject.as_deref().is_some_and(Self::contains_error)
                    || when_then
                        .iter()
                        .any(|(when, then)| when.contains_error() || then.contains_error())
                    || else_clause.as_deref().is_some_and(Self::contains_error)
            }
            Self::Is { lhs, rhs, .. } => lhs.contains_error() || rhs.contains_error(),
            Self::Match {
                lhs, rhs, escape, ..
            } => {
                lhs.contains_error()
                    || rhs.contains_error()
                    || escape.as_deref().is_some_and(Self::contains_error)
            }
            Self::Between {
                expr, lower, upper, ..
            } => expr.contains_error() || lower.contains_error() || upper.contains_error(),
            Self::InChained { expr, chain, .. } => {
                expr.contains_error() || chain.iter().any(Self::contains_error)
            }
            Self::InTable { expr, .. } => expr.contains_error(),
            Self::Error => true,
        }
    }
}
