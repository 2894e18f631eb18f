//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Sentinels and categories
//! - Keywords, identifiers and data literals
//! - Quote-delimited strings and chars with escape sequences
//! - Operators and punctuation
//! - Short-notation builtins after the pipe operator
//! - Comments and error cases

use super::{
    lexer::tokenize,
    tokens::{
        BasicToken, DataToken, KeywordToken, LogToken, LogicalToken, OperatorToken,
        ShortNotationToken, SyntaxToken, Token, TokenKind, TokenType,
    },
};

fn lex(source: &str) -> Vec<Token> {
    tokenize(source.to_string(), Some("test.sqz".to_string()), false).unwrap()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_sentinels() {
    let tokens = lex("");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Basic(BasicToken::Init));
    assert_eq!(tokens[1].kind, TokenKind::Basic(BasicToken::Eof));
}

#[test]
fn test_tokenize_keywords() {
    let tokens = kinds("var const fn return if elif else while do for in of");

    assert_eq!(tokens[1], TokenKind::Keyword(KeywordToken::Var));
    assert_eq!(tokens[2], TokenKind::Keyword(KeywordToken::Const));
    assert_eq!(tokens[3], TokenKind::Keyword(KeywordToken::Fn));
    assert_eq!(tokens[4], TokenKind::Keyword(KeywordToken::Return));
    assert_eq!(tokens[5], TokenKind::Keyword(KeywordToken::If));
    assert_eq!(tokens[6], TokenKind::Keyword(KeywordToken::Elif));
    assert_eq!(tokens[7], TokenKind::Keyword(KeywordToken::Else));
    assert_eq!(tokens[8], TokenKind::Keyword(KeywordToken::While));
    assert_eq!(tokens[9], TokenKind::Keyword(KeywordToken::Do));
    assert_eq!(tokens[10], TokenKind::Keyword(KeywordToken::For));
    assert_eq!(tokens[11], TokenKind::Keyword(KeywordToken::In));
    assert_eq!(tokens[12], TokenKind::Keyword(KeywordToken::Of));
    assert_eq!(tokens[13], TokenKind::Basic(BasicToken::Eof));
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = lex("foo bar_1 _under CamelCase");

    for (token, name) in tokens[1..5].iter().zip(["foo", "bar_1", "_under", "CamelCase"]) {
        assert_eq!(token.kind, TokenKind::Basic(BasicToken::Identifier));
        assert_eq!(token.value, name);
        assert_eq!(token.plain_text, name);
    }
}

#[test]
fn test_tokenize_numbers() {
    let tokens = lex("42 3.14 0");

    assert_eq!(tokens[1].kind, TokenKind::Data(DataToken::Integer));
    assert_eq!(tokens[1].value, "42");
    assert_eq!(tokens[2].kind, TokenKind::Data(DataToken::Double));
    assert_eq!(tokens[2].value, "3.14");
    assert_eq!(tokens[3].kind, TokenKind::Data(DataToken::Integer));
}

#[test]
fn test_minus_is_never_part_of_a_number() {
    let tokens = kinds("-5");

    assert_eq!(tokens[1], TokenKind::Operator(OperatorToken::Subtraction));
    assert_eq!(tokens[2], TokenKind::Data(DataToken::Integer));
}

#[test]
fn test_tokenize_data_words() {
    let tokens = lex("true false null");

    assert_eq!(tokens[1].kind, TokenKind::Data(DataToken::Boolean));
    assert_eq!(tokens[1].value, "true");
    assert_eq!(tokens[2].kind, TokenKind::Data(DataToken::Boolean));
    assert_eq!(tokens[3].kind, TokenKind::Data(DataToken::Null));
}

#[test]
fn test_tokenize_string_as_three_tokens() {
    let tokens = lex(r#""hello world""#);

    assert_eq!(tokens[1].kind, TokenKind::Syntax(SyntaxToken::DoubleQuote));
    assert_eq!(tokens[2].kind, TokenKind::Data(DataToken::Text));
    assert_eq!(tokens[2].value, "hello world");
    assert_eq!(tokens[3].kind, TokenKind::Syntax(SyntaxToken::DoubleQuote));
    assert_eq!(tokens[4].kind, TokenKind::Basic(BasicToken::Eof));
}

#[test]
fn test_tokenize_empty_string_keeps_text_token() {
    let tokens = lex(r#""""#);

    assert_eq!(tokens[2].kind, TokenKind::Data(DataToken::Text));
    assert_eq!(tokens[2].value, "");
}

#[test]
fn test_tokenize_string_escapes() {
    let tokens = lex(r#""a\n\t\"b\x41""#);

    assert_eq!(tokens[2].value, "a\n\t\"bA");
    assert_eq!(tokens[2].plain_text, r#"a\n\t\"b\x41"#);
}

#[test]
fn test_tokenize_char() {
    let tokens = lex("'x'");

    assert_eq!(tokens[1].kind, TokenKind::Syntax(SyntaxToken::SingleQuote));
    assert_eq!(tokens[2].value, "x");
    assert_eq!(tokens[3].kind, TokenKind::Syntax(SyntaxToken::SingleQuote));
}

#[test]
fn test_tokenize_hex_codes() {
    let tokens = lex("#ff00ff #ABC #11223344");

    assert_eq!(tokens[1].kind, TokenKind::Data(DataToken::HexCode));
    assert_eq!(tokens[1].value, "#FF00FF");
    assert_eq!(tokens[1].plain_text, "#ff00ff");
    assert_eq!(tokens[2].kind, TokenKind::Data(DataToken::HexCode));
    assert_eq!(tokens[3].kind, TokenKind::Data(DataToken::HexCode));
}

#[test]
fn test_tokenize_operators() {
    let tokens = kinds("+ - * / % ** ++ -- = += -= *= /= %=");

    assert_eq!(
        &tokens[1..15],
        &[
            TokenKind::Operator(OperatorToken::Addition),
            TokenKind::Operator(OperatorToken::Subtraction),
            TokenKind::Operator(OperatorToken::Multiplication),
            TokenKind::Operator(OperatorToken::Division),
            TokenKind::Operator(OperatorToken::Modulo),
            TokenKind::Operator(OperatorToken::Potentiation),
            TokenKind::Operator(OperatorToken::Increment),
            TokenKind::Operator(OperatorToken::Decrement),
            TokenKind::Operator(OperatorToken::Assign),
            TokenKind::Operator(OperatorToken::AdditionAssign),
            TokenKind::Operator(OperatorToken::SubtractionAssign),
            TokenKind::Operator(OperatorToken::MultiplicationAssign),
            TokenKind::Operator(OperatorToken::DivisionAssign),
            TokenKind::Operator(OperatorToken::ModuloAssign),
        ]
    );
}

#[test]
fn test_tokenize_logical() {
    let tokens = kinds("&& || ! == != < > <= >=");

    assert_eq!(
        &tokens[1..10],
        &[
            TokenKind::Logical(LogicalToken::And),
            TokenKind::Logical(LogicalToken::Or),
            TokenKind::Logical(LogicalToken::Not),
            TokenKind::Logical(LogicalToken::Equal),
            TokenKind::Logical(LogicalToken::NotEqual),
            TokenKind::Logical(LogicalToken::Less),
            TokenKind::Logical(LogicalToken::Greater),
            TokenKind::Logical(LogicalToken::LessEqual),
            TokenKind::Logical(LogicalToken::GreaterEqual),
        ]
    );
}

#[test]
fn test_tokenize_syntax() {
    let tokens = kinds("; , : . ? ( ) { } [ ] => |> @");

    assert_eq!(tokens[1], TokenKind::Syntax(SyntaxToken::Semicolon));
    assert_eq!(tokens[5], TokenKind::Syntax(SyntaxToken::QuestionMark));
    assert_eq!(tokens[12], TokenKind::Syntax(SyntaxToken::Arrow));
    assert_eq!(tokens[13], TokenKind::Syntax(SyntaxToken::PipeOperator));
    assert_eq!(tokens[14], TokenKind::Syntax(SyntaxToken::At));
}

#[test]
fn test_tokenize_log_kinds() {
    let tokens = kinds("log logw loge logc");

    assert_eq!(tokens[1], TokenKind::Log(LogToken::Log));
    assert_eq!(tokens[2], TokenKind::Log(LogToken::Logw));
    assert_eq!(tokens[3], TokenKind::Log(LogToken::Loge));
    assert_eq!(tokens[4], TokenKind::Log(LogToken::Logc));
}

#[test]
fn test_short_notation_only_after_pipe() {
    let tokens = kinds("map |> map");

    assert_eq!(tokens[1], TokenKind::Basic(BasicToken::Identifier));
    assert_eq!(tokens[2], TokenKind::Syntax(SyntaxToken::PipeOperator));
    assert_eq!(tokens[3], TokenKind::ShortNotation(ShortNotationToken::Map));
}

#[test]
fn test_short_notation_method_names() {
    assert_eq!(ShortNotationToken::Length.method_name(), "length");
    assert_eq!(ShortNotationToken::Includes.method_name(), "includes");
    assert_eq!(ShortNotationToken::Reverse.method_name(), "reverse");
    assert_eq!(ShortNotationToken::Filter.method_name(), "filter");
}

#[test]
fn test_token_categories() {
    assert_eq!(TokenKind::Basic(BasicToken::Init).token_type(), TokenType::Basic);
    assert_eq!(TokenKind::Keyword(KeywordToken::Var).token_type(), TokenType::Keyword);
    assert_eq!(TokenKind::Data(DataToken::Text).token_type(), TokenType::Data);
    assert_eq!(
        TokenKind::ShortNotation(ShortNotationToken::Map).token_type(),
        TokenType::ShortNotation
    );
}

#[test]
fn test_tokenize_comments() {
    let tokens = lex("var a // trailing words\nvar b");

    assert_eq!(tokens[3].kind, TokenKind::Syntax(SyntaxToken::InlineComment));
    assert_eq!(tokens[3].value, "trailing words");
    assert_eq!(tokens[4].kind, TokenKind::Keyword(KeywordToken::Var));
}

#[test]
fn test_token_positions() {
    let tokens = lex("var  abc");

    assert_eq!(tokens[1].span.start.0, 0);
    assert_eq!(tokens[2].span.start.0, 5);
    assert_eq!(tokens[2].span.end.0, 8);
    assert_eq!(tokens[3].span.start.0, 8);
}

#[test]
fn test_tokenize_unrecognised() {
    let error = tokenize("var $a".to_string(), None, false).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_tokenize_unterminated_string() {
    assert!(tokenize("\"open".to_string(), None, false).is_err());
}
