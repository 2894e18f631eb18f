use std::fmt::{self, Display};

use crate::lexer::tokens::Token;

use super::ast::{write_list, Expr, NodeKind};

// LITERALS

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub identifier: Token,
}

impl Identifier {
    pub fn name(&self) -> &str {
        &self.identifier.value
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier: {}", self.identifier.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NullLiteral;

impl Display for NullLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NullLiteral")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegerLiteral {
    pub value: i64,
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntegerLiteral: {}", self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleLiteral {
    pub value: f64,
}

impl Display for DoubleLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DoubleLiteral: {}", self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BooleanLiteral {
    pub value: bool,
}

impl Display for BooleanLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BooleanLiteral: {}", self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharLiteral {
    pub value: char,
}

impl Display for CharLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CharLiteral: '{}'", self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StringLiteral: \"{}\"", self.value)
    }
}

/// A `#RRGGBB`-style color, stored upper-cased with its `#`.
#[derive(Debug, Clone, PartialEq)]
pub struct HexCodeLiteral {
    pub value: String,
}

impl Display for HexCodeLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexCodeLiteral: {}", self.value)
    }
}

/// Object entry. A missing value (`{ key }`) means "the binding named `key`".
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: Token,
    pub value: Option<Expr>,
}

impl Property {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Property
    }
}

impl Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Property: {}", self.key.value)?;
        if let Some(value) = &self.value {
            write!(f, " = {}", value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectLiteral {
    pub properties: Vec<Property>,
}

impl Display for ObjectLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectLiteral: {{ ")?;
        write_list(f, &self.properties)?;
        write!(f, " }}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteral {
    pub elements: Vec<Expr>,
}

impl Display for ArrayLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        write_list(f, &self.elements)?;
        write!(f, "]")
    }
}
