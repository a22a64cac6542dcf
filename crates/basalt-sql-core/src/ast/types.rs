//! Column and type-name AST definitions.

use core::fmt;

/// A signed numeric literal, used for type-name size parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignedNumber {
    /// The (possibly negated) value.
    pub value: f64,
}

impl SignedNumber {
    /// Creates a new signed number.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { value }
    }
}

/// A type name with up to two size parameters, e.g. `TEXT(10)` or
/// `DECIMAL(10, -2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeName {
    /// The type's name, stored verbatim.
    pub name: String,
    /// Size parameters (0, 1, or 2 entries).
    pub signed_numbers: Vec<SignedNumber>,
}

impl TypeName {
    /// Creates a new type name.
    #[must_use]
    pub fn new(name: impl Into<String>, signed_numbers: Vec<SignedNumber>) -> Self {
        Self {
            name: name.into(),
            signed_numbers,
        }
    }

    /// The type an untyped column defaults to (BLOB affinity).
    #[must_use]
    pub fn blob() -> Self {
        Self::new("BLOB", Vec::new())
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let [first, rest @ ..] = self.signed_numbers.as_slice() {
            write!(f, "({}", first.value)?;
            for n in rest {
                write!(f, ", {}", n.value)?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// A column definition inside CREATE TABLE.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    /// Column name, stored verbatim.
    pub name: String,
    /// The column's type.
    pub type_name: TypeName,
}

impl ColumnDefinition {
    /// Creates a new column definition.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: TypeName) -> Self {
        Self {
            name: name.into(),
            type_name,
        }
    }
}
