use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::InvalidArgument { .. } => "InvalidArgument",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::MissingSentinel { .. } => "MissingSentinel",
            ErrorImpl::UnexpectedEndOfStream => "UnexpectedEndOfStream",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token, message } => {
                ErrorTip::Suggestion(format!("{}, got `{}`", message, token))
            }
            ErrorImpl::InvalidArgument { token, message } => {
                ErrorTip::Suggestion(format!("{} (at `{}`)", message, token))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::MissingSentinel { expected, token } => ErrorTip::Suggestion(format!(
                "Token stream must start with {}, found `{}`",
                expected, token
            )),
            ErrorImpl::UnexpectedEndOfStream => ErrorTip::Suggestion(String::from(
                "The token stream ended without an EOF token, this is a lexer bug",
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expressions and blocks can be nested at most {} levels deep",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    /// A token did not have the literal text the grammar required.
    #[error("{message}, got {token:?}")]
    UnexpectedToken { token: String, message: String },
    /// Tokens were well-formed but the construct they build is not allowed,
    /// e.g. a function parameter that is not a bare identifier.
    #[error("invalid argument ({message}): {token:?}")]
    InvalidArgument { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("expected {expected} sentinel, found {token:?}")]
    MissingSentinel { expected: String, token: String },
    #[error("advanced past the end of the token stream")]
    UnexpectedEndOfStream,
    #[error("nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
}
