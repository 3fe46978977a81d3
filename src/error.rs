use thiserror::Error;

use crate::css::CssSyntaxError;
use crate::CssInjectionError;

/// Unified error type for callers that mix the CSS layer with the rule
/// parsers.
#[derive(Debug, Error)]
pub enum FilterSyntaxError {
    #[error(transparent)]
    Css(#[from] CssSyntaxError),

    #[error(transparent)]
    CssInjection(#[from] CssInjectionError),
}
