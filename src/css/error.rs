use std::fmt;

use thiserror::Error;
use winnow::error::{ContextError, ParseError};

use super::ast::CssContext;

impl fmt::Display for CssContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssContext::Selector => write!(f, "selector"),
            CssContext::Block => write!(f, "declaration block"),
            CssContext::MediaQueryList => write!(f, "media query list"),
        }
    }
}

/// A CSS fragment that is not valid in the requested grammar context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {context} syntax at offset {offset} in '{fragment}': {message}")]
pub struct CssSyntaxError {
    pub context: CssContext,
    pub fragment: String,
    pub offset: usize,
    pub message: String,
}

impl CssSyntaxError {
    pub(crate) fn from_parse_error(
        context: CssContext,
        fragment: &str,
        error: &ParseError<&str, ContextError>,
    ) -> Self {
        let message = error.inner().to_string();
        Self {
            context,
            fragment: fragment.to_owned(),
            offset: error.offset(),
            message: if message.is_empty() {
                "unexpected input".to_owned()
            } else {
                message
            },
        }
    }
}
