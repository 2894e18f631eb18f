use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, rc::Rc};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("var", TokenKind::Keyword(KeywordToken::Var));
        map.insert("const", TokenKind::Keyword(KeywordToken::Const));
        map.insert("fn", TokenKind::Keyword(KeywordToken::Fn));
        map.insert("return", TokenKind::Keyword(KeywordToken::Return));
        map.insert("if", TokenKind::Keyword(KeywordToken::If));
        map.insert("elif", TokenKind::Keyword(KeywordToken::Elif));
        map.insert("else", TokenKind::Keyword(KeywordToken::Else));
        map.insert("while", TokenKind::Keyword(KeywordToken::While));
        map.insert("do", TokenKind::Keyword(KeywordToken::Do));
        map.insert("for", TokenKind::Keyword(KeywordToken::For));
        map.insert("in", TokenKind::Keyword(KeywordToken::In));
        map.insert("of", TokenKind::Keyword(KeywordToken::Of));
        map.insert("true", TokenKind::Data(DataToken::Boolean));
        map.insert("false", TokenKind::Data(DataToken::Boolean));
        map.insert("null", TokenKind::Data(DataToken::Null));
        map.insert("log", TokenKind::Log(LogToken::Log));
        map.insert("logw", TokenKind::Log(LogToken::Logw));
        map.insert("loge", TokenKind::Log(LogToken::Loge));
        map.insert("logc", TokenKind::Log(LogToken::Logc));
        map
    };

    /// Builtins that may follow the pipe operator. Outside of a pipe these
    /// words lex as plain identifiers.
    pub static ref SHORT_NOTATION_LOOKUP: HashMap<&'static str, ShortNotationToken> = {
        let mut map = HashMap::new();
        map.insert("len", ShortNotationToken::Length);
        map.insert("map", ShortNotationToken::Map);
        map.insert("filter", ShortNotationToken::Filter);
        map.insert("reduce", ShortNotationToken::Reduce);
        map.insert("find", ShortNotationToken::Find);
        map.insert("has", ShortNotationToken::Includes);
        map.insert("slice", ShortNotationToken::Slice);
        map.insert("rev", ShortNotationToken::Reverse);
        map.insert("sort", ShortNotationToken::Sort);
        map.insert("join", ShortNotationToken::Join);
        map.insert("split", ShortNotationToken::Split);
        map.insert("push", ShortNotationToken::Push);
        map.insert("pop", ShortNotationToken::Pop);
        map.insert("keys", ShortNotationToken::Keys);
        map.insert("values", ShortNotationToken::Values);
        map
    };
}

/// Token category, the first level of the two-level tag.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenType {
    Basic,
    Keyword,
    Operator,
    Logical,
    Syntax,
    Data,
    Log,
    ShortNotation,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BasicToken {
    Init,
    Eof,
    Identifier,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KeywordToken {
    Var,
    Const,
    Fn,
    Return,
    If,
    Elif,
    Else,
    While,
    Do,
    For,
    In,
    Of,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum OperatorToken {
    Addition,       // +
    Subtraction,    // -
    Multiplication, // *
    Division,       // /
    Modulo,         // %
    Potentiation,   // **
    Increment,      // ++
    Decrement,      // --
    Assign,         // =
    AdditionAssign,
    SubtractionAssign,
    MultiplicationAssign,
    DivisionAssign,
    ModuloAssign,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LogicalToken {
    And,
    Or,
    Not,
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SyntaxToken {
    Semicolon,
    Comma,
    Colon,
    Dot,
    QuestionMark,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,
    SingleQuote,
    DoubleQuote,
    Arrow,        // =>
    PipeOperator, // |>
    At,
    InlineComment,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DataToken {
    Integer,
    Double,
    Boolean,
    Null,
    Text,
    HexCode,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LogToken {
    Log,
    Logw,
    Loge,
    Logc,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ShortNotationToken {
    Length,
    Map,
    Filter,
    Reduce,
    Find,
    Includes,
    Slice,
    Reverse,
    Sort,
    Join,
    Split,
    Push,
    Pop,
    Keys,
    Values,
}

impl ShortNotationToken {
    /// Name of the collection method a piped builtin stands for.
    pub fn method_name(&self) -> &'static str {
        match self {
            ShortNotationToken::Length => "length",
            ShortNotationToken::Map => "map",
            ShortNotationToken::Filter => "filter",
            ShortNotationToken::Reduce => "reduce",
            ShortNotationToken::Find => "find",
            ShortNotationToken::Includes => "includes",
            ShortNotationToken::Slice => "slice",
            ShortNotationToken::Reverse => "reverse",
            ShortNotationToken::Sort => "sort",
            ShortNotationToken::Join => "join",
            ShortNotationToken::Split => "split",
            ShortNotationToken::Push => "push",
            ShortNotationToken::Pop => "pop",
            ShortNotationToken::Keys => "keys",
            ShortNotationToken::Values => "values",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Basic(BasicToken),
    Keyword(KeywordToken),
    Operator(OperatorToken),
    Logical(LogicalToken),
    Syntax(SyntaxToken),
    Data(DataToken),
    Log(LogToken),
    ShortNotation(ShortNotationToken),
}

impl TokenKind {
    pub fn token_type(&self) -> TokenType {
        match self {
            TokenKind::Basic(_) => TokenType::Basic,
            TokenKind::Keyword(_) => TokenType::Keyword,
            TokenKind::Operator(_) => TokenType::Operator,
            TokenKind::Logical(_) => TokenType::Logical,
            TokenKind::Syntax(_) => TokenType::Syntax,
            TokenKind::Data(_) => TokenType::Data,
            TokenKind::Log(_) => TokenType::Log,
            TokenKind::ShortNotation(_) => TokenType::ShortNotation,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Basic(kind) => write!(f, "Basic::{:?}", kind),
            TokenKind::Keyword(kind) => write!(f, "Keyword::{:?}", kind),
            TokenKind::Operator(kind) => write!(f, "Operator::{:?}", kind),
            TokenKind::Logical(kind) => write!(f, "Logical::{:?}", kind),
            TokenKind::Syntax(kind) => write!(f, "Syntax::{:?}", kind),
            TokenKind::Data(kind) => write!(f, "Data::{:?}", kind),
            TokenKind::Log(kind) => write!(f, "Log::{:?}", kind),
            TokenKind::ShortNotation(kind) => write!(f, "ShortNotation::{:?}", kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Literal source text, compared by `Parser::assert_token`.
    pub plain_text: String,
    /// Semantic text: unescaped string contents, numeric digits, names.
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{\nkind: {},\nplain_text: {},\nvalue: {},\nposition: {}}}",
            self.kind, self.plain_text, self.value, self.span.start.0
        )
    }
}

impl Token {
    pub fn init(file: &Rc<String>) -> Self {
        Token {
            kind: TokenKind::Basic(BasicToken::Init),
            plain_text: String::from("INIT"),
            value: String::from("INIT"),
            span: Span::at(0, file),
        }
    }

    pub fn eof(pos: u32, file: &Rc<String>) -> Self {
        Token {
            kind: TokenKind::Basic(BasicToken::Eof),
            plain_text: String::from("EOF"),
            value: String::from("EOF"),
            span: Span::at(pos, file),
        }
    }

    /// A token the parser fabricates while desugaring, positioned at `origin`.
    pub fn synthesized(kind: TokenKind, text: &str, origin: &Token) -> Self {
        Token {
            kind,
            plain_text: String::from(text),
            value: String::from(text),
            span: origin.span.clone(),
        }
    }

    pub fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::Basic(BasicToken::Identifier),
            TokenKind::Data(DataToken::Integer),
            TokenKind::Data(DataToken::Double),
            TokenKind::Data(DataToken::Text),
            TokenKind::Data(DataToken::HexCode),
        ]) {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
