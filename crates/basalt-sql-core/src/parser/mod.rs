//! SQL Parser
//!
//! A hand-written recursive descent parser with two-phase primary/secondary
//! expression dispatch and syntax-error recovery.

mod error;
#[allow(clippy::module_inception)]
mod parser;

pub use error::SyntaxError;
pub use parser::Parser;
