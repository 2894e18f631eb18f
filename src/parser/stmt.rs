use crate::{
    ast::{
        ast::{Expr, Stmt},
        statements::{
            ConditionalStatement, DoWhileStmt, ForInStmt, ForOfStmt, ForStmt, FunctionDeclaration,
            LogStmt, ReturnStmt, VarDeclaration, WhileStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{BasicToken, KeywordToken, LogToken, OperatorToken, SyntaxToken, TokenKind},
    parser::{
        expr::{parse_arguments, parse_binary_expr, parse_expr, parse_parameters},
        lookups::BindingPower,
    },
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();
    if let Some(handler) = handler {
        return handler(parser);
    }

    let expr = parse_expr(parser)?;
    parser.skip_semicolon();

    Ok(Some(Stmt::Expr(expr)))
}

/// `{ stmt* }`
pub fn parse_block(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    parser.nested(parse_block_body)
}

fn parse_block_body(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    parser.assert_token("{", "expected `{` to open block")?;

    let mut body = Vec::new();
    while !parser.matches(TokenKind::Syntax(SyntaxToken::CloseCurly)) && !parser.is_eof() {
        if let Some(stmt) = parse_stmt(parser)? {
            body.push(stmt);
        }
    }

    parser.assert_token("}", "expected `}` to close block")?;

    Ok(body)
}

pub fn parse_comment_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    parser.advance()?;
    Ok(None)
}

/// A stray `;`.
pub fn parse_empty_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    parser.skip_semicolon();
    Ok(None)
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    let declaration = parse_var_declaration(parser)?;
    parser.skip_semicolon();

    Ok(Some(Stmt::VarDeclaration(declaration)))
}

/// `var|const name [= expr] (, name [= expr])*` without the trailing `;`,
/// shared with the `for` header.
fn parse_var_declaration(parser: &mut Parser) -> Result<VarDeclaration, Error> {
    let keyword = parser.advance()?.clone();

    let mut declarations = Vec::new();
    loop {
        let identifier = parser.expect(
            TokenKind::Basic(BasicToken::Identifier),
            "expected identifier in variable declaration",
        )?;

        let value = if parser.matches(TokenKind::Operator(OperatorToken::Assign)) {
            parser.advance()?;
            Some(parse_expr(parser)?)
        } else {
            None
        };
        declarations.push((identifier, value));

        if !parser.matches(TokenKind::Syntax(SyntaxToken::Comma)) {
            break;
        }
        parser.advance()?;
    }

    Ok(VarDeclaration {
        keyword,
        declarations,
    })
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    parser.advance()?;

    let name = parser.expect(
        TokenKind::Basic(BasicToken::Identifier),
        "expected function name after `fn`",
    )?;

    parser.assert_token("(", "expected `(` after function name")?;
    let arguments = parse_arguments(parser)?;
    let parameters = parse_parameters(arguments, &name)?;

    let body = parse_block(parser)?;

    Ok(Some(Stmt::FunctionDeclaration(FunctionDeclaration {
        name,
        parameters,
        body,
    })))
}

/// `( expr ) { body }`, the tail shared by `if` and `elif`.
fn parse_clause(parser: &mut Parser, keyword: &str) -> Result<(Expr, Vec<Stmt>), Error> {
    parser.assert_token("(", &format!("expected `(` after `{}`", keyword))?;
    let condition = parse_expr(parser)?;
    parser.assert_token(")", &format!("expected `)` after `{}` condition", keyword))?;

    let body = parse_block(parser)?;

    Ok((condition, body))
}

pub fn parse_conditional_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    parser.advance()?;
    let if_clause = parse_clause(parser, "if")?;

    let mut elif_clauses = Vec::new();
    while parser.matches(TokenKind::Keyword(KeywordToken::Elif)) {
        parser.advance()?;
        elif_clauses.push(parse_clause(parser, "elif")?);
    }

    let else_body = if parser.matches(TokenKind::Keyword(KeywordToken::Else)) {
        parser.advance()?;
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(Some(Stmt::Conditional(ConditionalStatement {
        if_clause,
        elif_clauses,
        else_body,
    })))
}

fn parse_loop_condition(parser: &mut Parser, keyword: &str) -> Result<Expr, Error> {
    parser.assert_token("(", &format!("expected `(` after `{}`", keyword))?;
    let condition = parse_binary_expr(parser, BindingPower::Logical)?;
    parser.assert_token(")", &format!("expected `)` after `{}` condition", keyword))?;

    Ok(condition)
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    parser.advance()?;
    let condition = parse_loop_condition(parser, "while")?;
    let body = parse_block(parser)?;

    Ok(Some(Stmt::While(WhileStmt { condition, body })))
}

pub fn parse_do_while_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    parser.advance()?;
    let body = parse_block(parser)?;

    parser.assert_token("while", "expected `while` after `do` block")?;
    let condition = parse_loop_condition(parser, "while")?;
    parser.skip_semicolon();

    Ok(Some(Stmt::DoWhile(DoWhileStmt { condition, body })))
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    parser.advance()?;
    parser.assert_token("(", "expected `(` after `for`")?;

    let token = parser.peek();
    if !token.is_one_of_many(&[
        TokenKind::Keyword(KeywordToken::Var),
        TokenKind::Keyword(KeywordToken::Const),
    ]) {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.plain_text.clone(),
                message: String::from("expected `var` or `const` to declare the loop iterator"),
            },
            token.span.start.clone(),
        ));
    }
    let iterator = Box::new(Stmt::VarDeclaration(parse_var_declaration(parser)?));

    match parser.current_token_kind() {
        TokenKind::Keyword(KeywordToken::In) => {
            parser.advance()?;
            let iterable = parse_expr(parser)?;
            parser.assert_token(")", "expected `)` after `for ... in` iterable")?;
            let body = parse_block(parser)?;

            Ok(Some(Stmt::ForIn(ForInStmt {
                iterator,
                iterable,
                body,
            })))
        }
        TokenKind::Keyword(KeywordToken::Of) => {
            parser.advance()?;
            let iterable = parse_expr(parser)?;
            parser.assert_token(")", "expected `)` after `for ... of` iterable")?;
            let body = parse_block(parser)?;

            Ok(Some(Stmt::ForOf(ForOfStmt {
                iterator,
                iterable,
                body,
            })))
        }
        _ => {
            parser.assert_token(";", "expected `;`, `in` or `of` after loop iterator")?;
            let condition = parse_expr(parser)?;
            parser.assert_token(";", "expected `;` after loop condition")?;
            let increment = parse_expr(parser)?;
            parser.assert_token(")", "expected `)` after loop increment")?;
            let body = parse_block(parser)?;

            Ok(Some(Stmt::For(ForStmt {
                iterator,
                condition,
                increment,
                body,
            })))
        }
    }
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    parser.advance()?;

    let value = if parser.peek().is_one_of_many(&[
        TokenKind::Syntax(SyntaxToken::Semicolon),
        TokenKind::Syntax(SyntaxToken::CloseCurly),
        TokenKind::Syntax(SyntaxToken::InlineComment),
        TokenKind::Basic(BasicToken::Eof),
    ]) {
        None
    } else {
        Some(parse_expr(parser)?)
    };
    parser.skip_semicolon();

    Ok(Some(Stmt::Return(ReturnStmt { value })))
}

pub fn parse_log_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    let log_type = parser.advance()?.clone();

    parser.assert_token("(", &format!("expected `(` after `{}`", log_type.plain_text))?;
    let mut messages = parse_arguments(parser)?;
    parser.skip_semicolon();

    if messages.is_empty() {
        return Err(Error::new(
            ErrorImpl::InvalidArgument {
                token: log_type.plain_text.clone(),
                message: String::from("log statements need at least one message"),
            },
            log_type.span.start,
        ));
    }

    let color = if log_type.kind == TokenKind::Log(LogToken::Logc) {
        match messages.pop() {
            Some(Expr::HexCode(color)) if !messages.is_empty() => Some(color),
            Some(Expr::HexCode(color)) => {
                return Err(Error::new(
                    ErrorImpl::InvalidArgument {
                        token: color.value,
                        message: String::from("`logc` needs a message before the color"),
                    },
                    log_type.span.start,
                ))
            }
            other => {
                return Err(Error::new(
                    ErrorImpl::InvalidArgument {
                        token: other.map(|expr| expr.to_string()).unwrap_or_default(),
                        message: String::from("the last argument of `logc` must be a hex color"),
                    },
                    log_type.span.start,
                ))
            }
        }
    } else {
        None
    };

    Ok(Some(Stmt::Log(LogStmt {
        log_type,
        messages,
        color,
    })))
}
