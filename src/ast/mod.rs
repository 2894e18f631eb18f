/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: `Program`, the `Stmt`/`Expr` sum types and `NodeKind`
/// - statements: Definitions for the statement nodes
/// - expressions: Definitions for operator, call and short-notation nodes
/// - literals: Definitions for literal and primary nodes
pub mod ast;
pub mod expressions;
pub mod literals;
pub mod statements;
