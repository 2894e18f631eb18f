use std::fmt::{self, Display};

use super::{expressions::*, literals::*, statements::*};

/// Node Kinds
///
/// The closed discriminant over every node the parser can build. Consumers
/// match on it before narrowing to a concrete node.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum NodeKind {
    // Statements
    Program,
    FunctionDeclaration,
    ReturnStmt,
    VarDeclaration,
    ConditionalStatement,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    LogStmt,
    // Expressions
    AssignmentExpr,
    CompoundAssignmentExpr,
    TernaryExpr,
    BinaryExpr,
    UnaryExpr,
    CallExpr,
    MemberExpr,
    CallbackFunctionExpr,
    // Literals
    Property,
    ObjectLiteral,
    ArrayLiteral,
    Identifier,
    NullLiteral,
    IntegerLiteral,
    DoubleLiteral,
    BooleanLiteral,
    CharLiteral,
    StringLiteral,
    HexCodeLiteral,
    // Short notation
    ShortOperationLiteral,
    ShortSingleExpressionLiteral,
    ShortDoubleExpressionLiteral,
}

/// Root of every parse: the ordered top-level statements of one source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Program
    }

    /// One rendered line per top-level statement, for hosts that want the
    /// tree as a list of strings.
    pub fn to_lines(&self) -> Vec<String> {
        self.body.iter().map(|stmt| stmt.to_string()).collect()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Program:")?;
        for stmt in &self.body {
            writeln!(f, "  {}", stmt)?;
        }
        Ok(())
    }
}

/// Statements
///
/// Expressions are statements too; they are wrapped in `Stmt::Expr`.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    FunctionDeclaration(FunctionDeclaration),
    VarDeclaration(VarDeclaration),
    Conditional(ConditionalStatement),
    While(WhileStmt),
    DoWhile(DoWhileStmt),
    For(ForStmt),
    ForIn(ForInStmt),
    ForOf(ForOfStmt),
    Return(ReturnStmt),
    Log(LogStmt),
    Expr(Expr),
}

impl Stmt {
    pub fn kind(&self) -> NodeKind {
        match self {
            Stmt::FunctionDeclaration(_) => NodeKind::FunctionDeclaration,
            Stmt::VarDeclaration(_) => NodeKind::VarDeclaration,
            Stmt::Conditional(_) => NodeKind::ConditionalStatement,
            Stmt::While(_) => NodeKind::WhileStatement,
            Stmt::DoWhile(_) => NodeKind::DoWhileStatement,
            Stmt::For(_) => NodeKind::ForStatement,
            Stmt::ForIn(_) => NodeKind::ForInStatement,
            Stmt::ForOf(_) => NodeKind::ForOfStatement,
            Stmt::Return(_) => NodeKind::ReturnStmt,
            Stmt::Log(_) => NodeKind::LogStmt,
            Stmt::Expr(expr) => expr.kind(),
        }
    }

    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            Stmt::Expr(expr) => Some(expr),
            _ => None,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::FunctionDeclaration(s) => write!(f, "{}", s),
            Stmt::VarDeclaration(s) => write!(f, "{}", s),
            Stmt::Conditional(s) => write!(f, "{}", s),
            Stmt::While(s) => write!(f, "{}", s),
            Stmt::DoWhile(s) => write!(f, "{}", s),
            Stmt::For(s) => write!(f, "{}", s),
            Stmt::ForIn(s) => write!(f, "{}", s),
            Stmt::ForOf(s) => write!(f, "{}", s),
            Stmt::Return(s) => write!(f, "{}", s),
            Stmt::Log(s) => write!(f, "{}", s),
            Stmt::Expr(e) => write!(f, "{}", e),
        }
    }
}

/// Expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Assignment(AssignmentExpr),
    CompoundAssignment(CompoundAssignmentExpr),
    Ternary(TernaryExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Call(CallExpr),
    Member(MemberExpr),
    Callback(CallbackFunctionExpr),
    ShortOperation(ShortOperationLiteral),
    ShortSingleExpression(ShortSingleExpressionLiteral),
    ShortDoubleExpression(ShortDoubleExpressionLiteral),
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Double(DoubleLiteral),
    Boolean(BooleanLiteral),
    Char(CharLiteral),
    String(StringLiteral),
    HexCode(HexCodeLiteral),
    Null(NullLiteral),
    Object(ObjectLiteral),
    Array(ArrayLiteral),
}

impl Expr {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Assignment(_) => NodeKind::AssignmentExpr,
            Expr::CompoundAssignment(_) => NodeKind::CompoundAssignmentExpr,
            Expr::Ternary(_) => NodeKind::TernaryExpr,
            Expr::Binary(_) => NodeKind::BinaryExpr,
            Expr::Unary(_) => NodeKind::UnaryExpr,
            Expr::Call(_) => NodeKind::CallExpr,
            Expr::Member(_) => NodeKind::MemberExpr,
            Expr::Callback(_) => NodeKind::CallbackFunctionExpr,
            Expr::ShortOperation(_) => NodeKind::ShortOperationLiteral,
            Expr::ShortSingleExpression(_) => NodeKind::ShortSingleExpressionLiteral,
            Expr::ShortDoubleExpression(_) => NodeKind::ShortDoubleExpressionLiteral,
            Expr::Identifier(_) => NodeKind::Identifier,
            Expr::Integer(_) => NodeKind::IntegerLiteral,
            Expr::Double(_) => NodeKind::DoubleLiteral,
            Expr::Boolean(_) => NodeKind::BooleanLiteral,
            Expr::Char(_) => NodeKind::CharLiteral,
            Expr::String(_) => NodeKind::StringLiteral,
            Expr::HexCode(_) => NodeKind::HexCodeLiteral,
            Expr::Null(_) => NodeKind::NullLiteral,
            Expr::Object(_) => NodeKind::ObjectLiteral,
            Expr::Array(_) => NodeKind::ArrayLiteral,
        }
    }

    /// Whether the expression can stand on the left of `=` or `op=`.
    pub fn is_assignable(&self) -> bool {
        matches!(self, Expr::Identifier(_) | Expr::Member(_))
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Assignment(e) => write!(f, "{}", e),
            Expr::CompoundAssignment(e) => write!(f, "{}", e),
            Expr::Ternary(e) => write!(f, "{}", e),
            Expr::Binary(e) => write!(f, "{}", e),
            Expr::Unary(e) => write!(f, "{}", e),
            Expr::Call(e) => write!(f, "{}", e),
            Expr::Member(e) => write!(f, "{}", e),
            Expr::Callback(e) => write!(f, "{}", e),
            Expr::ShortOperation(e) => write!(f, "{}", e),
            Expr::ShortSingleExpression(e) => write!(f, "{}", e),
            Expr::ShortDoubleExpression(e) => write!(f, "{}", e),
            Expr::Identifier(e) => write!(f, "{}", e),
            Expr::Integer(e) => write!(f, "{}", e),
            Expr::Double(e) => write!(f, "{}", e),
            Expr::Boolean(e) => write!(f, "{}", e),
            Expr::Char(e) => write!(f, "{}", e),
            Expr::String(e) => write!(f, "{}", e),
            Expr::HexCode(e) => write!(f, "{}", e),
            Expr::Null(e) => write!(f, "{}", e),
            Expr::Object(e) => write!(f, "{}", e),
            Expr::Array(e) => write!(f, "{}", e),
        }
    }
}

/// Writes a statement block, one indented statement per line.
pub(crate) fn write_body(f: &mut fmt::Formatter<'_>, body: &[Stmt]) -> fmt::Result {
    for stmt in body {
        writeln!(f, "    {}", stmt)?;
    }
    Ok(())
}

/// Writes `items` separated by `, `.
pub(crate) fn write_list<T: Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
