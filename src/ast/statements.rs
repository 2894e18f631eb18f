use std::fmt::{self, Display};

use crate::lexer::tokens::Token;

use super::{
    ast::{write_body, write_list, Expr, Stmt},
    literals::HexCodeLiteral,
};

/// `fn name(params) { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub name: Token,
    pub parameters: Vec<Token>,
    pub body: Vec<Stmt>,
}

impl Display for FunctionDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.parameters.iter().map(|p| p.value.as_str()).collect();
        writeln!(f, "FunctionDeclaration: {}({})", self.name.value, names.join(", "))?;
        for stmt in &self.body {
            writeln!(f, "  {}", stmt)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "ReturnStmt: {}", value),
            None => write!(f, "ReturnStmt: null"),
        }
    }
}

/// `var a = 1, b, c = 3;`
///
/// The `var`/`const` keyword is kept so constness can be enforced later;
/// a `const` without initializer is accepted here.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclaration {
    pub keyword: Token,
    pub declarations: Vec<(Token, Option<Expr>)>,
}

impl VarDeclaration {
    pub fn is_constant(&self) -> bool {
        self.keyword.value == "const"
    }
}

impl Display for VarDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VarDeclaration: {} ", self.keyword.value)?;
        for (i, (identifier, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", identifier.value)?;
            if let Some(value) = value {
                write!(f, " = {}", value)?;
            }
        }
        Ok(())
    }
}

/// One `if`, any number of `elif`s in source order, optional `else`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalStatement {
    pub if_clause: (Expr, Vec<Stmt>),
    pub elif_clauses: Vec<(Expr, Vec<Stmt>)>,
    pub else_body: Option<Vec<Stmt>>,
}

impl Display for ConditionalStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ConditionalStatement: if ({}) {{", self.if_clause.0)?;
        write_body(f, &self.if_clause.1)?;
        writeln!(f, "  }}")?;
        for (condition, body) in &self.elif_clauses {
            writeln!(f, "  elif ({}) {{", condition)?;
            write_body(f, body)?;
            writeln!(f, "  }}")?;
        }
        if let Some(else_body) = &self.else_body {
            writeln!(f, "  else {{")?;
            write_body(f, else_body)?;
            write!(f, "  }}")?;
        }
        Ok(())
    }
}

/// Condition is checked before each run of the body.
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Vec<Stmt>,
}

impl Display for WhileStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "WhileStatement: while ({}) {{", self.condition)?;
        write_body(f, &self.body)?;
        write!(f, "  }}")
    }
}

/// Body runs once before the condition is first checked.
#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStmt {
    pub condition: Expr,
    pub body: Vec<Stmt>,
}

impl Display for DoWhileStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DoWhileStmt: do {{")?;
        write_body(f, &self.body)?;
        write!(f, "  }} while ({})", self.condition)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub iterator: Box<Stmt>,
    pub condition: Expr,
    pub increment: Expr,
    pub body: Vec<Stmt>,
}

impl Display for ForStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "ForStmt: for ({}; {}; {}) {{",
            self.iterator, self.condition, self.increment
        )?;
        write_body(f, &self.body)?;
        write!(f, "  }}")
    }
}

/// Iterates the keys (or indices) of `iterable`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForInStmt {
    pub iterator: Box<Stmt>,
    pub iterable: Expr,
    pub body: Vec<Stmt>,
}

impl Display for ForInStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ForInStmt: for ({} in {}) {{", self.iterator, self.iterable)?;
        write_body(f, &self.body)?;
        write!(f, "  }}")
    }
}

/// Iterates the values of `iterable`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForOfStmt {
    pub iterator: Box<Stmt>,
    pub iterable: Expr,
    pub body: Vec<Stmt>,
}

impl Display for ForOfStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ForOfStmt: for ({} of {}) {{", self.iterator, self.iterable)?;
        write_body(f, &self.body)?;
        write!(f, "  }}")
    }
}

/// `log`, `logw`, `loge` or `logc`; only `logc` carries a color.
#[derive(Debug, Clone, PartialEq)]
pub struct LogStmt {
    pub log_type: Token,
    pub messages: Vec<Expr>,
    pub color: Option<HexCodeLiteral>,
}

impl Display for LogStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.log_type.plain_text)?;
        write_list(f, &self.messages)?;
        if let Some(color) = &self.color {
            write!(f, ", {}", color)?;
        }
        write!(f, ")")
    }
}
