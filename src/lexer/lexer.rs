use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{
    BasicToken, DataToken, LogicalToken, OperatorToken, SyntaxToken, Token, TokenKind,
    RESERVED_LOOKUP, SHORT_NOTATION_LOOKUP,
};

/// Receives the lexer and the text its pattern matched at the cursor.
pub type RegexHandler = fn(&mut Lexer, String);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).unwrap(),
            handler,
        }
    }
}

lazy_static! {
    // Every pattern is anchored; the first one matching at the cursor wins,
    // so longer operators come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new(r"^\s+", skip_handler),
        RegexPattern::new(r"^//[^\n]*", comment_handler),
        RegexPattern::new(r#"^"(?:[^"\\]|\\.)*""#, string_handler),
        RegexPattern::new(r"^'(?:[^'\\]|\\.)*'", char_handler),
        RegexPattern::new(r"^#(?:[0-9a-fA-F]{8}|[0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b", hex_handler),
        RegexPattern::new(r"^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new(r"^[0-9]+(?:\.[0-9]+)?", number_handler),
        RegexPattern::new(r"^\*\*", MK_DEFAULT_HANDLER!(TokenKind::Operator(OperatorToken::Potentiation), "**")),
        RegexPattern::new(r"^\+\+", MK_DEFAULT_HANDLER!(TokenKind::Operator(OperatorToken::Increment), "++")),
        RegexPattern::new(r"^--", MK_DEFAULT_HANDLER!(TokenKind::Operator(OperatorToken::Decrement), "--")),
        RegexPattern::new(r"^\+=", MK_DEFAULT_HANDLER!(TokenKind::Operator(OperatorToken::AdditionAssign), "+=")),
        RegexPattern::new(r"^-=", MK_DEFAULT_HANDLER!(TokenKind::Operator(OperatorToken::SubtractionAssign), "-=")),
        RegexPattern::new(r"^\*=", MK_DEFAULT_HANDLER!(TokenKind::Operator(OperatorToken::MultiplicationAssign), "*=")),
        RegexPattern::new(r"^/=", MK_DEFAULT_HANDLER!(TokenKind::Operator(OperatorToken::DivisionAssign), "/=")),
        RegexPattern::new(r"^%=", MK_DEFAULT_HANDLER!(TokenKind::Operator(OperatorToken::ModuloAssign), "%=")),
        RegexPattern::new(r"^==", MK_DEFAULT_HANDLER!(TokenKind::Logical(LogicalToken::Equal), "==")),
        RegexPattern::new(r"^!=", MK_DEFAULT_HANDLER!(TokenKind::Logical(LogicalToken::NotEqual), "!=")),
        RegexPattern::new(r"^<=", MK_DEFAULT_HANDLER!(TokenKind::Logical(LogicalToken::LessEqual), "<=")),
        RegexPattern::new(r"^>=", MK_DEFAULT_HANDLER!(TokenKind::Logical(LogicalToken::GreaterEqual), ">=")),
        RegexPattern::new(r"^&&", MK_DEFAULT_HANDLER!(TokenKind::Logical(LogicalToken::And), "&&")),
        RegexPattern::new(r"^\|\|", MK_DEFAULT_HANDLER!(TokenKind::Logical(LogicalToken::Or), "||")),
        RegexPattern::new(r"^=>", MK_DEFAULT_HANDLER!(TokenKind::Syntax(SyntaxToken::Arrow), "=>")),
        RegexPattern::new(r"^\|>", MK_DEFAULT_HANDLER!(TokenKind::Syntax(SyntaxToken::PipeOperator), "|>")),
        RegexPattern::new(r"^\+", MK_DEFAULT_HANDLER!(TokenKind::Operator(OperatorToken::Addition), "+")),
        RegexPattern::new(r"^-", MK_DEFAULT_HANDLER!(TokenKind::Operator(OperatorToken::Subtraction), "-")),
        RegexPattern::new(r"^\*", MK_DEFAULT_HANDLER!(TokenKind::Operator(OperatorToken::Multiplication), "*")),
        RegexPattern::new(r"^/", MK_DEFAULT_HANDLER!(TokenKind::Operator(OperatorToken::Division), "/")),
        RegexPattern::new(r"^%", MK_DEFAULT_HANDLER!(TokenKind::Operator(OperatorToken::Modulo), "%")),
        RegexPattern::new(r"^=", MK_DEFAULT_HANDLER!(TokenKind::Operator(OperatorToken::Assign), "=")),
        RegexPattern::new(r"^!", MK_DEFAULT_HANDLER!(TokenKind::Logical(LogicalToken::Not), "!")),
        RegexPattern::new(r"^<", MK_DEFAULT_HANDLER!(TokenKind::Logical(LogicalToken::Less), "<")),
        RegexPattern::new(r"^>", MK_DEFAULT_HANDLER!(TokenKind::Logical(LogicalToken::Greater), ">")),
        RegexPattern::new(r"^;", MK_DEFAULT_HANDLER!(TokenKind::Syntax(SyntaxToken::Semicolon), ";")),
        RegexPattern::new(r"^,", MK_DEFAULT_HANDLER!(TokenKind::Syntax(SyntaxToken::Comma), ",")),
        RegexPattern::new(r"^:", MK_DEFAULT_HANDLER!(TokenKind::Syntax(SyntaxToken::Colon), ":")),
        RegexPattern::new(r"^\.", MK_DEFAULT_HANDLER!(TokenKind::Syntax(SyntaxToken::Dot), ".")),
        RegexPattern::new(r"^\?", MK_DEFAULT_HANDLER!(TokenKind::Syntax(SyntaxToken::QuestionMark), "?")),
        RegexPattern::new(r"^\(", MK_DEFAULT_HANDLER!(TokenKind::Syntax(SyntaxToken::OpenParen), "(")),
        RegexPattern::new(r"^\)", MK_DEFAULT_HANDLER!(TokenKind::Syntax(SyntaxToken::CloseParen), ")")),
        RegexPattern::new(r"^\{", MK_DEFAULT_HANDLER!(TokenKind::Syntax(SyntaxToken::OpenCurly), "{")),
        RegexPattern::new(r"^\}", MK_DEFAULT_HANDLER!(TokenKind::Syntax(SyntaxToken::CloseCurly), "}")),
        RegexPattern::new(r"^\[", MK_DEFAULT_HANDLER!(TokenKind::Syntax(SyntaxToken::OpenBracket), "[")),
        RegexPattern::new(r"^\]", MK_DEFAULT_HANDLER!(TokenKind::Syntax(SyntaxToken::CloseBracket), "]")),
        RegexPattern::new(r"^@", MK_DEFAULT_HANDLER!(TokenKind::Syntax(SyntaxToken::At), "@")),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn last_kind(&self) -> Option<TokenKind> {
        self.tokens.last().map(|token| token.kind)
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Span covering the next `len` bytes from the cursor.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos as u32, Rc::clone(&self.file)),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }
}

fn skip_handler(lexer: &mut Lexer, matched: String) {
    lexer.advance_n(matched.len());
}

fn comment_handler(lexer: &mut Lexer, matched: String) {
    let span = lexer.span_of(matched.len());
    let text = matched[2..].trim().to_string();

    lexer.push(MK_TOKEN!(
        TokenKind::Syntax(SyntaxToken::InlineComment),
        matched.clone(),
        text,
        span
    ));
    lexer.advance_n(matched.len());
}

fn number_handler(lexer: &mut Lexer, matched: String) {
    let kind = if matched.contains('.') {
        TokenKind::Data(DataToken::Double)
    } else {
        TokenKind::Data(DataToken::Integer)
    };

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(kind, matched.clone(), matched.clone(), span));
    lexer.advance_n(matched.len());
}

fn hex_handler(lexer: &mut Lexer, matched: String) {
    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(
        TokenKind::Data(DataToken::HexCode),
        matched.clone(),
        matched.to_uppercase(),
        span
    ));
    lexer.advance_n(matched.len());
}

fn string_handler(lexer: &mut Lexer, matched: String) {
    push_quoted(lexer, matched, SyntaxToken::DoubleQuote, "\"");
}

fn char_handler(lexer: &mut Lexer, matched: String) {
    push_quoted(lexer, matched, SyntaxToken::SingleQuote, "'");
}

/// Emits opening quote, text and closing quote as three tokens.
fn push_quoted(lexer: &mut Lexer, matched: String, quote: SyntaxToken, quote_text: &str) {
    let raw = matched[1..matched.len() - 1].to_string();

    let span = lexer.span_of(1);
    lexer.push(MK_TOKEN!(
        TokenKind::Syntax(quote),
        String::from(quote_text),
        String::from(quote_text),
        span
    ));
    lexer.advance_n(1);

    let span = lexer.span_of(raw.len());
    lexer.push(MK_TOKEN!(
        TokenKind::Data(DataToken::Text),
        raw.clone(),
        unescape(&raw),
        span
    ));
    lexer.advance_n(raw.len());

    let span = lexer.span_of(1);
    lexer.push(MK_TOKEN!(
        TokenKind::Syntax(quote),
        String::from(quote_text),
        String::from(quote_text),
        span
    ));
    lexer.advance_n(1);
}

fn unescape(raw: &str) -> String {
    let mut result = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek().copied() {
            Some('n') => {
                result.push('\n');
                chars.next();
            }
            Some('t') => {
                result.push('\t');
                chars.next();
            }
            Some('r') => {
                result.push('\r');
                chars.next();
            }
            Some('\\') => {
                result.push('\\');
                chars.next();
            }
            Some('"') => {
                result.push('"');
                chars.next();
            }
            Some('\'') => {
                result.push('\'');
                chars.next();
            }
            Some('0') => {
                result.push('\0');
                chars.next();
            }
            Some('x') => {
                chars.next();
                let mut hex = String::new();

                for _ in 0..2 {
                    match chars.peek() {
                        Some(ch) if ch.is_ascii_hexdigit() => {
                            hex.push(*ch);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) => result.push(byte as char),
                    Err(_) => {
                        result.push_str("\\x");
                        result.push_str(&hex);
                    }
                }
            }
            _ => result.push(ch), // Keep the backslash
        }
    }

    result
}

fn symbol_handler(lexer: &mut Lexer, matched: String) {
    let after_pipe = lexer.last_kind() == Some(TokenKind::Syntax(SyntaxToken::PipeOperator));

    let kind = if let Some(kind) = RESERVED_LOOKUP.get(matched.as_str()) {
        *kind
    } else if let (true, Some(short)) = (after_pipe, SHORT_NOTATION_LOOKUP.get(matched.as_str())) {
        TokenKind::ShortNotation(*short)
    } else {
        TokenKind::Basic(BasicToken::Identifier)
    };

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(kind, matched.clone(), matched.clone(), span));
    lexer.advance_n(matched.len());
}

/// Turns source text into a token stream bracketed by INIT and EOF.
pub fn tokenize(source: String, file: Option<String>, dev_mode: bool) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let init = Token::init(&lex.file);
    lex.push(init);

    while !lex.at_eof() {
        let matched = PATTERNS
            .iter()
            .find_map(|pattern| {
                pattern
                    .regex
                    .find(lex.remainder())
                    .map(|found| (pattern.handler, found.as_str().to_string()))
            });

        match matched {
            Some((handler, text)) => handler(&mut lex, text),
            None => {
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken {
                        token: lex.at().to_string(),
                    },
                    Position(lex.pos as u32, Rc::clone(&lex.file)),
                ))
            }
        }
    }

    let eof = Token::eof(lex.pos as u32, &lex.file);
    lex.push(eof);

    debug!(count = lex.tokens.len(), file = %lex.file, "tokenized source");
    if dev_mode {
        for token in &lex.tokens {
            info!("{}", token.debug());
        }
    }

    Ok(lex.tokens)
}
