//! CSS grammar layer: parses selector, declaration block and media query
//! fragments into ASTs, finds extended selector syntax, and writes the ASTs
//! back to text.

mod ast;
mod error;
mod extended;
mod generate;
mod grammar;
mod visitor;

use winnow::Parser;

pub use ast::{
    AttributeMatcher, AttributeOperator, AttributeSelector, AttributeValue, Block, Combinator,
    CssContext, CssNode, Declaration, MediaQuery, MediaQueryList, MediaQueryPart,
    PseudoArgument, PseudoClassSelector, PseudoElementSelector, Selector, SelectorNode,
};
pub use error::CssSyntaxError;
pub use extended::{
    collect_nodes, extract_extended_nodes, is_extended_attribute, is_extended_pseudo_class,
    ExtendedCssNodes, EXTENDED_ATTRIBUTE_PREFIX, EXTENDED_PSEUDO_CLASSES,
};
pub use generate::{
    generate_block, generate_declarations, generate_media_query_list, generate_selector,
    generate_selector_list,
};
pub use grammar::MAX_NESTING_DEPTH;
pub use visitor::{walk_selector, SelectorVisitor};

/// Parses `text` in the given grammar context.
///
/// # Errors
///
/// Returns [`CssSyntaxError`] if `text` is not valid in `context`.
pub fn parse(text: &str, context: CssContext) -> Result<CssNode, CssSyntaxError> {
    match context {
        CssContext::Selector => parse_selector(text).map(CssNode::Selector),
        CssContext::Block => parse_block(text).map(CssNode::Block),
        CssContext::MediaQueryList => parse_media_query_list(text).map(CssNode::MediaQueryList),
    }
}

/// Parses a single complex selector, e.g. `body > div.ad:has(span)`.
///
/// # Errors
///
/// Returns [`CssSyntaxError`] if `text` is not a valid selector.
pub fn parse_selector(text: &str) -> Result<Selector, CssSyntaxError> {
    grammar::selector_only
        .parse(text)
        .map_err(|e| CssSyntaxError::from_parse_error(CssContext::Selector, text, &e))
}

/// Parses a comma-separated selector list.
///
/// # Errors
///
/// Returns [`CssSyntaxError`] if any selector of the list is invalid.
pub fn parse_selector_list(text: &str) -> Result<Vec<Selector>, CssSyntaxError> {
    grammar::selector_list
        .parse(text)
        .map_err(|e| CssSyntaxError::from_parse_error(CssContext::Selector, text, &e))
}

/// Parses a declaration block including its braces, e.g. `{ padding: 0; }`.
///
/// # Errors
///
/// Returns [`CssSyntaxError`] if `text` is not a valid declaration block.
pub fn parse_block(text: &str) -> Result<Block, CssSyntaxError> {
    grammar::block
        .parse(text)
        .map_err(|e| CssSyntaxError::from_parse_error(CssContext::Block, text, &e))
}

/// Parses a media query list, e.g. `screen and (min-width: 1024px)`.
///
/// # Errors
///
/// Returns [`CssSyntaxError`] if `text` is not a valid media query list.
pub fn parse_media_query_list(text: &str) -> Result<MediaQueryList, CssSyntaxError> {
    grammar::media_query_list
        .parse(text)
        .map_err(|e| CssSyntaxError::from_parse_error(CssContext::MediaQueryList, text, &e))
}

/// Builds `[name="value"]`, quoting `value` as a CSS string.
#[must_use]
pub fn make_attribute_selector(name: &str, value: &str) -> AttributeSelector {
    let mut quoted = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    AttributeSelector {
        name: name.to_owned(),
        matcher: Some(AttributeMatcher {
            operator: AttributeOperator::Equal,
            value: AttributeValue::String(quoted),
        }),
        flags: None,
    }
}
