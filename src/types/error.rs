use thiserror::Error;

use crate::css::CssSyntaxError;
use crate::types::AdblockSyntax;

/// Errors produced once text has been recognized as a CSS-injection body, or
/// when a body cannot be written in the requested dialect.
#[derive(Debug, Error)]
pub enum CssInjectionError {
    #[error("invalid selector '{}' in CSS injection body", .source.fragment)]
    InvalidSelectorSyntax {
        #[source]
        source: CssSyntaxError,
    },

    #[error("invalid declaration block '{}' in CSS injection body", .source.fragment)]
    InvalidDeclarationBlockSyntax {
        #[source]
        source: CssSyntaxError,
    },

    #[error("invalid media query '{}' in CSS injection body", .source.fragment)]
    InvalidMediaQuerySyntax {
        #[source]
        source: CssSyntaxError,
    },

    #[error("multiple remove property found in the following CSS injection body: {raw}")]
    MultipleRemoveProperties { raw: String },

    #[error(
        "in addition to the remove property, the following CSS injection body also uses other properties: {raw}"
    )]
    RemovePropertyMixedWithOthers { raw: String },

    #[error("not a CSS injection body: {raw}")]
    UnrecognizedBody { raw: String },

    #[error("CSS injection is not supported by {syntax} syntax")]
    UnsupportedSyntax { syntax: AdblockSyntax },

    #[error("{syntax} syntax does not support media queries in CSS injection")]
    MediaQueryNotSupported { syntax: AdblockSyntax },
}
