use std::fmt::{self, Display};

use crate::lexer::tokens::Token;

use super::ast::{write_body, write_list, Expr, Stmt};

/// Assignment Expression
/// `assignee = value`, right-associative.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub assignee: Box<Expr>,
    pub value: Box<Expr>,
}

impl Display for AssignmentExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssignmentExpr: {} = {}", self.assignee, self.value)
    }
}

/// Compound Assignment Expression
/// `assignee op= value` for `+= -= *= /= %=`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundAssignmentExpr {
    pub assignee: Box<Expr>,
    pub value: Box<Expr>,
    pub operator: Token,
}

impl Display for CompoundAssignmentExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CompoundAssignmentExpr: {} {} {}",
            self.assignee, self.operator.value, self.value
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TernaryExpr {
    pub condition: Box<Expr>,
    pub true_expr: Box<Expr>,
    pub false_expr: Box<Expr>,
}

impl Display for TernaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TernaryExpr: {} ? {} : {}",
            self.condition, self.true_expr, self.false_expr
        )
    }
}

/// Binary Expression
/// Arithmetic, power, relational, equality and logical operators.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub operator: Token,
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BinaryExpr: ({} {} {})",
            self.left, self.operator.value, self.right
        )
    }
}

/// Unary Expression
/// `++x`, `--x`, `!x`, `-x` (prefix) or `x++`, `x--` (postfix).
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: Token,
    pub operand: Box<Expr>,
    pub is_prefix: bool,
}

impl Display for UnaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_prefix {
            write!(f, "{}{}", self.operator.value, self.operand)
        } else {
            write!(f, "{}{}", self.operand, self.operator.value)
        }
    }
}

/// Call Expression
///
/// `caller` is set for method-style calls (`a.b()`, `a |> len`); plain calls
/// like `f()` or `f()()` leave it empty and keep the callee in `method`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub caller: Option<Box<Expr>>,
    pub method: Box<Expr>,
    pub args: Vec<Expr>,
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CallExpr: ")?;
        if let Some(caller) = &self.caller {
            write!(f, "{}.", caller)?;
        }
        write!(f, "{}(", self.method)?;
        write_list(f, &self.args)?;
        write!(f, ")")
    }
}

/// Member Expression
/// `object.property` or, when `computed`, `object[property]`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub object: Box<Expr>,
    pub property: Box<Expr>,
    pub computed: bool,
}

impl Display for MemberExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.computed {
            write!(f, "MemberExpr: {}[{}]", self.object, self.property)
        } else {
            write!(f, "MemberExpr: {}.{}", self.object, self.property)
        }
    }
}

/// Anonymous function literal, `(a, b) => { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallbackFunctionExpr {
    pub parameters: Vec<Token>,
    pub body: Vec<Stmt>,
}

impl Display for CallbackFunctionExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.parameters.iter().map(|p| p.value.as_str()).collect();
        writeln!(f, "CallbackFunctionExpr: ({}) => {{", names.join(", "))?;
        write_body(f, &self.body)?;
        write!(f, "  }}")
    }
}

// SHORT NOTATION

/// `|> map(+1)`: apply `operation` with `value` through the builtin.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortOperationLiteral {
    pub short_type: Token,
    pub operation: Token,
    pub value: Box<Expr>,
}

impl Display for ShortOperationLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ShortOperationLiteral: {}({}{})",
            self.short_type.plain_text, self.operation.value, self.value
        )
    }
}

/// `|> filter((x) => x > 1)`: the builtin applied with one argument.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortSingleExpressionLiteral {
    pub short_type: Token,
    pub value: Box<Expr>,
}

impl Display for ShortSingleExpressionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ShortSingleExpressionLiteral: {}({})",
            self.short_type.plain_text, self.value
        )
    }
}

/// `|> slice(1, 3)`: the builtin applied with two arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortDoubleExpressionLiteral {
    pub short_type: Token,
    pub first: Box<Expr>,
    pub second: Box<Expr>,
}

impl Display for ShortDoubleExpressionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ShortDoubleExpressionLiteral: {}({}, {})",
            self.short_type.plain_text, self.first, self.second
        )
    }
}
