use std::collections::HashMap;

use crate::{
    ast::ast::Stmt,
    errors::errors::Error,
    lexer::tokens::{KeywordToken, LogToken, LogicalToken, OperatorToken, SyntaxToken, TokenKind},
};

use super::{parser::Parser, stmt::*};

/// Binary precedence levels, loosest first. Assignment and the ternary
/// sit above `Logical` and have their own functions in `expr.rs`.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Logical,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Power,
    /// Postfix calls and members; no binary operator binds this tight.
    Call,
}

impl BindingPower {
    /// The level that right operands of this level are parsed at.
    pub fn tighter(self) -> BindingPower {
        match self {
            BindingPower::Logical => BindingPower::Equality,
            BindingPower::Equality => BindingPower::Relational,
            BindingPower::Relational => BindingPower::Additive,
            BindingPower::Additive => BindingPower::Multiplicative,
            BindingPower::Multiplicative => BindingPower::Power,
            BindingPower::Power | BindingPower::Call => BindingPower::Call,
        }
    }
}

/// A statement parser. `None` means the construct produces no node.
pub type StmtHandler = fn(&mut Parser) -> Result<Option<Stmt>, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical
    parser.binary(TokenKind::Logical(LogicalToken::And), BindingPower::Logical);
    parser.binary(TokenKind::Logical(LogicalToken::Or), BindingPower::Logical);

    // Equality and relational
    parser.binary(TokenKind::Logical(LogicalToken::Equal), BindingPower::Equality);
    parser.binary(TokenKind::Logical(LogicalToken::NotEqual), BindingPower::Equality);
    parser.binary(TokenKind::Logical(LogicalToken::Less), BindingPower::Relational);
    parser.binary(TokenKind::Logical(LogicalToken::LessEqual), BindingPower::Relational);
    parser.binary(TokenKind::Logical(LogicalToken::Greater), BindingPower::Relational);
    parser.binary(TokenKind::Logical(LogicalToken::GreaterEqual), BindingPower::Relational);

    // Additive, multiplicative and power
    parser.binary(TokenKind::Operator(OperatorToken::Addition), BindingPower::Additive);
    parser.binary(TokenKind::Operator(OperatorToken::Subtraction), BindingPower::Additive);
    parser.binary(TokenKind::Operator(OperatorToken::Multiplication), BindingPower::Multiplicative);
    parser.binary(TokenKind::Operator(OperatorToken::Division), BindingPower::Multiplicative);
    parser.binary(TokenKind::Operator(OperatorToken::Modulo), BindingPower::Multiplicative);
    parser.binary(TokenKind::Operator(OperatorToken::Potentiation), BindingPower::Power);

    // Statements
    parser.stmt(TokenKind::Keyword(KeywordToken::Var), parse_var_decl_stmt);
    parser.stmt(TokenKind::Keyword(KeywordToken::Const), parse_var_decl_stmt);
    parser.stmt(TokenKind::Keyword(KeywordToken::Fn), parse_fn_decl_stmt);
    parser.stmt(TokenKind::Keyword(KeywordToken::If), parse_conditional_stmt);
    parser.stmt(TokenKind::Keyword(KeywordToken::While), parse_while_stmt);
    parser.stmt(TokenKind::Keyword(KeywordToken::Do), parse_do_while_stmt);
    parser.stmt(TokenKind::Keyword(KeywordToken::For), parse_for_stmt);
    parser.stmt(TokenKind::Keyword(KeywordToken::Return), parse_return_stmt);
    parser.stmt(TokenKind::Log(LogToken::Log), parse_log_stmt);
    parser.stmt(TokenKind::Log(LogToken::Logw), parse_log_stmt);
    parser.stmt(TokenKind::Log(LogToken::Loge), parse_log_stmt);
    parser.stmt(TokenKind::Log(LogToken::Logc), parse_log_stmt);
    parser.stmt(TokenKind::Syntax(SyntaxToken::InlineComment), parse_comment_stmt);
    parser.stmt(TokenKind::Syntax(SyntaxToken::Semicolon), parse_empty_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
