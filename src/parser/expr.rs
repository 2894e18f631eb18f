use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::{
            AssignmentExpr, BinaryExpr, CallExpr, CallbackFunctionExpr, CompoundAssignmentExpr,
            MemberExpr, ShortDoubleExpressionLiteral, ShortOperationLiteral,
            ShortSingleExpressionLiteral, TernaryExpr, UnaryExpr,
        },
        literals::{
            ArrayLiteral, BooleanLiteral, CharLiteral, DoubleLiteral, HexCodeLiteral, Identifier,
            IntegerLiteral, NullLiteral, ObjectLiteral, Property, StringLiteral,
        },
        statements::ReturnStmt,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{
        BasicToken, DataToken, LogicalToken, OperatorToken, SyntaxToken, Token, TokenKind,
    },
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block};

fn invalid_argument(token: String, message: &str, origin: &Token) -> Error {
    Error::new(
        ErrorImpl::InvalidArgument {
            token,
            message: String::from(message),
        },
        origin.span.start.clone(),
    )
}

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(parse_assignment_expr)
}

pub fn parse_assignment_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_ternary_expr(parser)?;

    match parser.current_token_kind() {
        TokenKind::Operator(OperatorToken::Assign) => {
            let operator = parser.advance()?.clone();
            if !left.is_assignable() {
                return Err(invalid_argument(left.to_string(), "invalid assignment target", &operator));
            }
            let value = parse_expr(parser)?;

            Ok(Expr::Assignment(AssignmentExpr {
                assignee: Box::new(left),
                value: Box::new(value),
            }))
        }
        TokenKind::Operator(
            OperatorToken::AdditionAssign
            | OperatorToken::SubtractionAssign
            | OperatorToken::MultiplicationAssign
            | OperatorToken::DivisionAssign
            | OperatorToken::ModuloAssign,
        ) => {
            let operator = parser.advance()?.clone();
            if !left.is_assignable() {
                return Err(invalid_argument(left.to_string(), "invalid assignment target", &operator));
            }
            let value = parse_expr(parser)?;

            Ok(Expr::CompoundAssignment(CompoundAssignmentExpr {
                assignee: Box::new(left),
                value: Box::new(value),
                operator,
            }))
        }
        _ => Ok(left),
    }
}

pub fn parse_ternary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let condition = parse_binary_expr(parser, BindingPower::Logical)?;
    if !parser.matches(TokenKind::Syntax(SyntaxToken::QuestionMark)) {
        return Ok(condition);
    }
    parser.advance()?;

    let true_expr = parse_expr(parser)?;
    parser.assert_token(":", "expected `:` in ternary expression")?;
    let false_expr = parse_expr(parser)?;

    Ok(Expr::Ternary(TernaryExpr {
        condition: Box::new(condition),
        true_expr: Box::new(true_expr),
        false_expr: Box::new(false_expr),
    }))
}

/// Precedence climbing over the binding-power table. Folds every operator
/// registered at `min_bp` or tighter; right operands are parsed one level
/// tighter, so each level associates to the left.
pub fn parse_binary_expr(parser: &mut Parser, min_bp: BindingPower) -> Result<Expr, Error> {
    parser.skip_comment();
    let mut left = parse_call_member_expr(parser)?;

    loop {
        parser.skip_comment();
        let Some(bp) = parser.binding_power(&parser.current_token_kind()) else {
            break;
        };
        if bp < min_bp {
            break;
        }

        let operator = parser.advance()?.clone();
        let right = parse_binary_expr(parser, bp.tighter())?;

        left = Expr::Binary(BinaryExpr {
            left: Box::new(left),
            right: Box::new(right),
            operator,
        });
    }

    Ok(left)
}

/// Primary followed by any chain of `(...)`, `.name`, `[expr]` and
/// `|> builtin`, then an optional postfix `++`/`--`.
pub fn parse_call_member_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_primary_expr(parser)?;

    loop {
        expr = match parser.current_token_kind() {
            TokenKind::Syntax(SyntaxToken::OpenParen) => {
                parser.advance()?;
                let args = parse_arguments(parser)?;

                Expr::Call(CallExpr {
                    caller: None,
                    method: Box::new(expr),
                    args,
                })
            }
            TokenKind::Syntax(SyntaxToken::Dot) => {
                let dot = parser.advance()?.clone();
                let property = parser.peek().clone();
                if property.kind != TokenKind::Basic(BasicToken::Identifier) {
                    return Err(invalid_argument(
                        property.plain_text,
                        "expected identifier after `.`",
                        &dot,
                    ));
                }
                parser.advance()?;
                let property = Box::new(Expr::Identifier(Identifier {
                    identifier: property,
                }));

                if parser.matches(TokenKind::Syntax(SyntaxToken::OpenParen)) {
                    parser.advance()?;
                    let args = parse_arguments(parser)?;

                    Expr::Call(CallExpr {
                        caller: Some(Box::new(expr)),
                        method: property,
                        args,
                    })
                } else {
                    Expr::Member(MemberExpr {
                        object: Box::new(expr),
                        property,
                        computed: false,
                    })
                }
            }
            TokenKind::Syntax(SyntaxToken::OpenBracket) => {
                parser.advance()?;
                let property = parse_expr(parser)?;
                parser.assert_token("]", "expected `]` after computed member")?;

                Expr::Member(MemberExpr {
                    object: Box::new(expr),
                    property: Box::new(property),
                    computed: true,
                })
            }
            TokenKind::Syntax(SyntaxToken::PipeOperator) => parse_pipe_expr(parser, expr)?,
            _ => break,
        };
    }

    if parser.matches(TokenKind::Operator(OperatorToken::Increment))
        || parser.matches(TokenKind::Operator(OperatorToken::Decrement))
    {
        let operator = parser.advance()?.clone();
        expr = Expr::Unary(UnaryExpr {
            operator,
            operand: Box::new(expr),
            is_prefix: false,
        });
    }

    Ok(expr)
}

/// `receiver |> builtin` or `receiver |> builtin(args)`, desugared into a
/// method call on `receiver`.
fn parse_pipe_expr(parser: &mut Parser, receiver: Expr) -> Result<Expr, Error> {
    let pipe = parser.advance()?.clone();

    let short_type = parser.peek().clone();
    let method_name = match short_type.kind {
        TokenKind::ShortNotation(builtin) => builtin.method_name(),
        _ => {
            return Err(invalid_argument(
                short_type.plain_text,
                "expected a short-notation builtin after `|>`",
                &pipe,
            ))
        }
    };
    parser.advance()?;

    let method = Expr::Identifier(Identifier {
        identifier: Token::synthesized(
            TokenKind::Basic(BasicToken::Identifier),
            method_name,
            &short_type,
        ),
    });

    let args = if parser.matches(TokenKind::Syntax(SyntaxToken::OpenParen)) {
        parser.advance()?;
        parse_short_arguments(parser, &short_type)?
            .into_iter()
            .collect()
    } else {
        Vec::new()
    };

    Ok(Expr::Call(CallExpr {
        caller: Some(Box::new(receiver)),
        method: Box::new(method),
        args,
    }))
}

const SHORT_OPERATORS: [TokenKind; 12] = [
    TokenKind::Operator(OperatorToken::Addition),
    TokenKind::Operator(OperatorToken::Subtraction),
    TokenKind::Operator(OperatorToken::Multiplication),
    TokenKind::Operator(OperatorToken::Division),
    TokenKind::Operator(OperatorToken::Modulo),
    TokenKind::Operator(OperatorToken::Potentiation),
    TokenKind::Logical(LogicalToken::Equal),
    TokenKind::Logical(LogicalToken::NotEqual),
    TokenKind::Logical(LogicalToken::Less),
    TokenKind::Logical(LogicalToken::Greater),
    TokenKind::Logical(LogicalToken::LessEqual),
    TokenKind::Logical(LogicalToken::GreaterEqual),
];

/// Arguments of a short-notation call, after its `(`. Produces at most one
/// short literal; the closing `)` is consumed.
fn parse_short_arguments(parser: &mut Parser, short_type: &Token) -> Result<Option<Expr>, Error> {
    let current = parser.peek().clone();
    let closes_next = parser.peek_kind(1) == TokenKind::Syntax(SyntaxToken::CloseParen);

    let literal = if parser.matches(TokenKind::Syntax(SyntaxToken::CloseParen)) {
        None
    } else if closes_next
        && current.is_one_of_many(&[
            TokenKind::Operator(OperatorToken::Increment),
            TokenKind::Operator(OperatorToken::Decrement),
        ])
    {
        // `++` / `--` are shorthand for `+1` / `-1`
        parser.advance()?;
        let operation = if current.kind == TokenKind::Operator(OperatorToken::Increment) {
            Token::synthesized(TokenKind::Operator(OperatorToken::Addition), "+", &current)
        } else {
            Token::synthesized(TokenKind::Operator(OperatorToken::Subtraction), "-", &current)
        };

        Some(Expr::ShortOperation(ShortOperationLiteral {
            short_type: short_type.clone(),
            operation,
            value: Box::new(Expr::Integer(IntegerLiteral { value: 1 })),
        }))
    } else if current.is_one_of_many(&SHORT_OPERATORS) {
        parser.advance()?;
        let value = parse_expr(parser)?;

        Some(Expr::ShortOperation(ShortOperationLiteral {
            short_type: short_type.clone(),
            operation: current,
            value: Box::new(value),
        }))
    } else {
        let mut values = Vec::new();
        loop {
            values.push(parse_expr(parser)?);
            if !parser.matches(TokenKind::Syntax(SyntaxToken::Comma)) {
                break;
            }
            parser.advance()?;
        }

        let mut values = values.into_iter();
        match (values.next(), values.next(), values.next()) {
            (Some(value), None, _) => Some(Expr::ShortSingleExpression(ShortSingleExpressionLiteral {
                short_type: short_type.clone(),
                value: Box::new(value),
            })),
            (Some(first), Some(second), None) => {
                Some(Expr::ShortDoubleExpression(ShortDoubleExpressionLiteral {
                    short_type: short_type.clone(),
                    first: Box::new(first),
                    second: Box::new(second),
                }))
            }
            _ => {
                return Err(invalid_argument(
                    short_type.plain_text.clone(),
                    "short notation takes at most two arguments",
                    short_type,
                ))
            }
        }
    };

    parser.assert_token(")", "expected `)` after short-notation arguments")?;

    Ok(literal)
}

/// Comma separated expressions up to and including the closing `)`. The
/// opening `(` must already be consumed. Trailing commas and comments
/// between items are allowed.
pub fn parse_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let mut args = Vec::new();

    loop {
        parser.skip_comment();
        if parser.matches(TokenKind::Syntax(SyntaxToken::CloseParen)) {
            break;
        }

        args.push(parse_expr(parser)?);

        parser.skip_comment();
        if !parser.matches(TokenKind::Syntax(SyntaxToken::Comma)) {
            break;
        }
        parser.advance()?;
    }

    parser.assert_token(")", "expected `)` to close argument list")?;

    Ok(args)
}

/// Narrows a parsed argument list to parameter names. Anything other than a
/// bare identifier is rejected.
pub fn parse_parameters(arguments: Vec<Expr>, origin: &Token) -> Result<Vec<Token>, Error> {
    arguments
        .into_iter()
        .map(|argument| match argument {
            Expr::Identifier(identifier) => Ok(identifier.identifier),
            other => Err(invalid_argument(
                other.to_string(),
                "parameters must be identifiers",
                origin,
            )),
        })
        .collect()
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.peek().clone();

    match token.kind {
        TokenKind::Data(DataToken::Integer) | TokenKind::Data(DataToken::Double) => {
            parser.advance()?;
            parse_number(&token, false)
        }
        TokenKind::Operator(OperatorToken::Subtraction) => {
            let next = parser.peek_n(1).clone();
            if next.is_one_of_many(&[
                TokenKind::Data(DataToken::Integer),
                TokenKind::Data(DataToken::Double),
            ]) {
                parser.advance()?;
                parser.advance()?;
                parse_number(&next, true)
            } else {
                parse_prefix_expr(parser)
            }
        }
        TokenKind::Operator(OperatorToken::Increment)
        | TokenKind::Operator(OperatorToken::Decrement)
        | TokenKind::Logical(LogicalToken::Not) => parse_prefix_expr(parser),
        TokenKind::Data(DataToken::Boolean) => {
            parser.advance()?;
            Ok(Expr::Boolean(BooleanLiteral {
                value: token.value == "true",
            }))
        }
        TokenKind::Data(DataToken::Null) => {
            parser.advance()?;
            Ok(Expr::Null(NullLiteral))
        }
        TokenKind::Data(DataToken::HexCode) => {
            parser.advance()?;
            Ok(Expr::HexCode(HexCodeLiteral { value: token.value }))
        }
        TokenKind::Syntax(SyntaxToken::DoubleQuote) => parse_string_expr(parser),
        TokenKind::Syntax(SyntaxToken::SingleQuote) => parse_char_expr(parser),
        TokenKind::Basic(BasicToken::Identifier) => {
            parser.advance()?;
            Ok(Expr::Identifier(Identifier { identifier: token }))
        }
        TokenKind::Syntax(SyntaxToken::OpenParen) => {
            if is_callback(parser) {
                parse_callback_expr(parser)
            } else {
                parse_grouping_expr(parser)
            }
        }
        TokenKind::Syntax(SyntaxToken::OpenCurly) => parse_object_expr(parser),
        TokenKind::Syntax(SyntaxToken::OpenBracket) => parse_array_expr(parser),
        TokenKind::Syntax(SyntaxToken::At) => parse_short_data_expr(parser),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.plain_text,
                message: String::from("expected an expression"),
            },
            token.span.start,
        )),
    }
}

fn parse_number(token: &Token, negative: bool) -> Result<Expr, Error> {
    let text = if negative {
        format!("-{}", token.value)
    } else {
        token.value.clone()
    };
    let error = || {
        Error::new(
            ErrorImpl::NumberParseError {
                token: text.clone(),
            },
            token.span.start.clone(),
        )
    };

    if token.kind == TokenKind::Data(DataToken::Double) {
        let value = text.parse::<f64>().map_err(|_| error())?;
        Ok(Expr::Double(DoubleLiteral { value }))
    } else {
        let value = text.parse::<i64>().map_err(|_| error())?;
        Ok(Expr::Integer(IntegerLiteral { value }))
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = parser.advance()?.clone();
    let operand = parser.nested(parse_call_member_expr)?;

    Ok(Expr::Unary(UnaryExpr {
        operator,
        operand: Box::new(operand),
        is_prefix: true,
    }))
}

/// Text between the quote tokens; the lexer always emits a `Text` token,
/// possibly empty.
fn parse_quoted_text(parser: &mut Parser) -> Result<String, Error> {
    if parser.matches(TokenKind::Data(DataToken::Text)) {
        Ok(parser.advance()?.value.clone())
    } else {
        Ok(String::new())
    }
}

fn parse_string_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance()?;
    let value = parse_quoted_text(parser)?;
    parser.assert_token("\"", "expected closing `\"` after string")?;

    Ok(Expr::String(StringLiteral { value }))
}

fn parse_char_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let quote = parser.advance()?.clone();
    let text = parse_quoted_text(parser)?;

    let mut chars = text.chars();
    let value = match (chars.next(), chars.next()) {
        (Some(value), None) => value,
        _ => {
            return Err(invalid_argument(
                text,
                "char literals hold exactly one character",
                &quote,
            ))
        }
    };
    parser.assert_token("'", "expected closing `'` after char")?;

    Ok(Expr::Char(CharLiteral { value }))
}

/// Scans from the current `(` to its matching `)` and reports whether `=>`
/// follows, i.e. whether this is a callback parameter list.
fn is_callback(parser: &Parser) -> bool {
    let mut depth = 0usize;
    let mut n = 0;

    loop {
        match parser.peek_kind(n) {
            TokenKind::Syntax(SyntaxToken::OpenParen) => depth += 1,
            TokenKind::Syntax(SyntaxToken::CloseParen) => {
                depth -= 1;
                if depth == 0 {
                    return parser.peek_kind(n + 1) == TokenKind::Syntax(SyntaxToken::Arrow);
                }
            }
            TokenKind::Basic(BasicToken::Eof) => return false,
            _ => {}
        }
        n += 1;
    }
}

fn parse_callback_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.advance()?.clone();
    let arguments = parse_arguments(parser)?;
    let parameters = parse_parameters(arguments, &open)?;

    parser.assert_token("=>", "expected `=>` after callback parameters")?;

    let body = if parser.matches(TokenKind::Syntax(SyntaxToken::OpenCurly)) {
        parse_block(parser)?
    } else {
        let value = parse_expr(parser)?;
        vec![Stmt::Return(ReturnStmt { value: Some(value) })]
    };

    Ok(Expr::Callback(CallbackFunctionExpr { parameters, body }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance()?;
    let expr = parse_expr(parser)?;
    parser.assert_token(")", "expected `)` to close grouped expression")?;

    Ok(expr)
}

/// `{ key: value, shorthand, ... }`
fn parse_object_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance()?;

    let mut properties = Vec::new();
    loop {
        parser.skip_comment();
        if parser.matches(TokenKind::Syntax(SyntaxToken::CloseCurly)) {
            break;
        }

        let key = parser.expect(
            TokenKind::Basic(BasicToken::Identifier),
            "expected property name in object literal",
        )?;
        let value = if parser.matches(TokenKind::Syntax(SyntaxToken::Colon)) {
            parser.advance()?;
            Some(parse_expr(parser)?)
        } else {
            None
        };
        properties.push(Property { key, value });

        parser.skip_comment();
        if !parser.matches(TokenKind::Syntax(SyntaxToken::Comma)) {
            break;
        }
        parser.advance()?;
    }

    parser.skip_comment();
    parser.assert_token("}", "expected `}` to close object literal")?;

    Ok(Expr::Object(ObjectLiteral { properties }))
}

fn parse_array_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance()?;

    let mut elements = Vec::new();
    loop {
        parser.skip_comment();
        if parser.matches(TokenKind::Syntax(SyntaxToken::CloseBracket)) {
            break;
        }

        elements.push(parse_expr(parser)?);

        parser.skip_comment();
        if !parser.matches(TokenKind::Syntax(SyntaxToken::Comma)) {
            break;
        }
        parser.advance()?;
    }

    parser.skip_comment();
    parser.assert_token("]", "expected `]` to close array literal")?;

    Ok(Expr::Array(ArrayLiteral { elements }))
}

/// `@key: value, ...` builds an object and `@value, ...` an array. Two tokens
/// of lookahead (`identifier :`) decide which.
fn parse_short_data_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance()?;

    let is_object = parser.peek_kind(0) == TokenKind::Basic(BasicToken::Identifier)
        && parser.peek_kind(1) == TokenKind::Syntax(SyntaxToken::Colon);

    if is_object {
        let mut properties = Vec::new();
        loop {
            let key = parser.expect(
                TokenKind::Basic(BasicToken::Identifier),
                "expected property name in short data",
            )?;
            parser.assert_token(":", "expected `:` after short data key")?;
            let value = parse_expr(parser)?;
            properties.push(Property {
                key,
                value: Some(value),
            });

            if !parser.matches(TokenKind::Syntax(SyntaxToken::Comma)) {
                break;
            }
            parser.advance()?;
        }

        Ok(Expr::Object(ObjectLiteral { properties }))
    } else {
        let mut elements = Vec::new();
        loop {
            elements.push(parse_expr(parser)?);

            if !parser.matches(TokenKind::Syntax(SyntaxToken::Comma)) {
                break;
            }
            parser.advance()?;
        }

        Ok(Expr::Array(ArrayLiteral { elements }))
    }
}
