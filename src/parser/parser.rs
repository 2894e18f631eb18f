//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct: a cursor over the token
//! vector plus the lookup tables the grammar functions dispatch through.
//!
//! It maintains lookup tables for:
//! - Statement handlers, keyed by the leading token
//! - Binding powers for binary operator precedence

use std::{collections::HashMap, rc::Rc};

use tracing::{debug, info};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{BasicToken, SyntaxToken, Token, TokenKind},
    Position,
};

use super::{
    lookups::{create_token_lookups, BPLookup, BindingPower, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// How many expressions and blocks may be open at once.
pub const MAX_NESTING_DEPTH: usize = 32;

/// The main parser structure that maintains parsing state.
///
/// The token vector is never mutated; `pos` indexes the first unconsumed
/// token and only moves forward.
pub struct Parser {
    /// The list of tokens to parse, INIT first and EOF last
    tokens: Vec<Token>,
    /// Index of the next unconsumed token
    pos: usize,
    /// Observed by lookahead that runs past the end of `tokens`
    eof: Token,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for binary operator binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Expressions and blocks currently open, see [`Parser::nested`]
    depth: usize,
}

impl Parser {
    /// Creates a new Parser over `tokens` with its lookup tables filled in.
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof = match tokens.last() {
            Some(last) => Token::eof(last.span.end.0, &last.span.end.1),
            None => Token::eof(0, &Rc::new(String::from("<null>"))),
        };

        let mut parser = Parser {
            tokens,
            pos: 0,
            eof,
            stmt_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            depth: 0,
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn peek(&self) -> &Token {
        self.peek_n(0)
    }

    /// Returns the token `n` places past the current one. Past the end of
    /// the stream this is always EOF.
    pub fn peek_n(&self, n: usize) -> &Token {
        self.tokens.get(self.pos + n).unwrap_or(&self.eof)
    }

    pub fn peek_kind(&self, n: usize) -> TokenKind {
        self.peek_n(n).kind
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Advances to the next token and returns the consumed one.
    pub fn advance(&mut self) -> Result<&Token, Error> {
        if self.pos >= self.tokens.len() {
            return Err(Error::new(
                ErrorImpl::UnexpectedEndOfStream,
                self.eof.span.start.clone(),
            ));
        }

        self.pos += 1;
        Ok(&self.tokens[self.pos - 1])
    }

    /// Consumes the next token and checks its literal text.
    ///
    /// Every "expected X" diagnostic in the grammar goes through here, so the
    /// error always carries `message` and the text that was found instead.
    pub fn assert_token(&mut self, expected: &str, message: &str) -> Result<Token, Error> {
        let token = self.advance()?.clone();
        if token.plain_text != expected {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.plain_text,
                    message: String::from(message),
                },
                token.span.start,
            ));
        }

        Ok(token)
    }

    /// Expects a token of the specified kind and consumes it.
    pub fn expect(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        let token = self.peek();
        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.plain_text.clone(),
                    message: String::from(message),
                },
                token.span.start.clone(),
            ));
        }

        Ok(self.advance()?.clone())
    }

    pub fn matches(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    pub fn skip_semicolon(&mut self) {
        if self.matches(TokenKind::Syntax(SyntaxToken::Semicolon)) {
            self.pos += 1;
        }
    }

    pub fn skip_comment(&mut self) {
        while self.matches(TokenKind::Syntax(SyntaxToken::InlineComment)) {
            self.pos += 1;
        }
    }

    pub fn is_eof(&self) -> bool {
        self.matches(TokenKind::Basic(BasicToken::Eof))
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.peek().span.start.clone()
    }

    /// Runs `parse` one nesting level deeper. Every recursive path of the
    /// grammar passes through here; past [`MAX_NESTING_DEPTH`] it fails with
    /// `NestingTooDeep`.
    pub fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;

        result
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns the binding power registered for `kind`, if it is a binary operator.
    pub fn binding_power(&self, kind: &TokenKind) -> Option<BindingPower> {
        self.binding_power_lookup.get(kind).copied()
    }

    /// Registers a binary operator at the given precedence level.
    pub fn binary(&mut self, kind: TokenKind, binding_power: BindingPower) {
        self.binding_power_lookup.insert(kind, binding_power);
    }

    /// Registers a statement handler for a leading token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Parses the whole token stream into a [`Program`].
    ///
    /// Fails before building anything if the stream does not start with the
    /// INIT sentinel. EOF is only ever peeked, never consumed.
    pub fn parse(&mut self, dev_mode: bool) -> Result<Program, Error> {
        let first = self.peek();
        if first.kind != TokenKind::Basic(BasicToken::Init) {
            return Err(Error::new(
                ErrorImpl::MissingSentinel {
                    expected: String::from("INIT"),
                    token: first.plain_text.clone(),
                },
                first.span.start.clone(),
            ));
        }
        self.advance()?;

        let mut program = Program::default();

        loop {
            if self.pos >= self.tokens.len() {
                return Err(Error::new(
                    ErrorImpl::UnexpectedEndOfStream,
                    self.eof.span.start.clone(),
                ));
            }
            if self.is_eof() {
                break;
            }

            if let Some(stmt) = parse_stmt(self)? {
                debug!(kind = ?stmt.kind(), "parsed statement");
                program.body.push(stmt);
            }
        }

        if dev_mode {
            info!("\n{}", program);
        }

        Ok(program)
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing: it builds a [`Parser`] and runs
/// it to completion.
pub fn parse(tokens: Vec<Token>, dev_mode: bool) -> Result<Program, Error> {
    Parser::new(tokens).parse(dev_mode)
}
