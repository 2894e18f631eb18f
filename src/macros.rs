//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-text tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$plain_text` - The literal source text
/// * `$value` - The token's semantic value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Data(DataToken::Integer), "42".to_string(), "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $plain_text:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            plain_text: $plain_text,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for tokens whose text never varies.
///
/// Generates a handler function that pushes a token with the given kind,
/// using the literal as both plain text and value, and advances the lexer
/// by the literal's length.
///
/// # Example
///
/// ```ignore
/// RegexPattern::new(r"^\+", MK_DEFAULT_HANDLER!(TokenKind::Operator(OperatorToken::Addition), "+"))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _matched: String| {
            let span = lexer.span_of($value.len());
            lexer.push(MK_TOKEN!(
                $kind,
                String::from($value),
                String::from($value),
                span
            ));
            lexer.advance_n($value.len());
        }
    };
}
