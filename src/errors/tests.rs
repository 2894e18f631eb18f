//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::{format_error, Position};
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.sqz".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "$".to_string(),
        },
        at(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ";".to_string(),
            message: "expected ')'".to_string(),
        },
        at(42),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_unexpected_token_display() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ";".to_string(),
            message: "expected ')' after arguments".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.to_string(), "expected ')' after arguments, got \";\"");
}

#[test]
fn test_invalid_argument_error() {
    let error = Error::new(
        ErrorImpl::InvalidArgument {
            token: "5".to_string(),
            message: "logc expects a hex code as its last argument".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "InvalidArgument");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_missing_sentinel_error() {
    let error = Error::new(
        ErrorImpl::MissingSentinel {
            expected: "INIT".to_string(),
            token: "var".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "MissingSentinel");
    assert_eq!(error.to_string(), "expected INIT sentinel, found \"var\"");
}

#[test]
fn test_end_of_stream_error() {
    let error = Error::new(ErrorImpl::UnexpectedEndOfStream, at(0));

    assert_eq!(error.get_error_name(), "UnexpectedEndOfStream");
    assert_eq!(error.get_error_impl(), &ErrorImpl::UnexpectedEndOfStream);
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "$".to_string(),
        },
        at(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}

#[test]
fn test_number_parse_tip() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        at(0),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "Invalid number: `99999999999999999999`, is it above the integer limit?"
    );
}

#[test]
fn test_format_error_points_at_column() {
    let source = "var a = 1;\nlog(a;\n";
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ";".to_string(),
            message: "expected ')' after arguments".to_string(),
        },
        at(16),
    );

    let rendered = format_error(&error, source, "test.sqz");
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(
        lines[0],
        "Error: UnexpectedToken (expected ')' after arguments, got `;`)"
    );
    assert_eq!(lines[1], "-> test.sqz");
    assert_eq!(lines[3], "2 | log(a;");
    assert_eq!(lines[4], "  | -----^");
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 32 }, at(7));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "nesting exceeds 32 levels");
    assert_eq!(
        error.get_tip().to_string(),
        "Expressions and blocks can be nested at most 32 levels deep"
    );
}
