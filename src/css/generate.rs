//! Serialization of CSS nodes back to text.
//!
//! Selectors are written back the way they were parsed: pseudo-class
//! arguments that are not selector lists are emitted verbatim, so
//! `:nth-child(3n+0)` stays `3n+0`. Declaration blocks are canonicalized to
//! `property: value;` with a single space before `!important`.

use std::fmt;

use super::ast::{
    AttributeOperator, AttributeSelector, AttributeValue, Block, Combinator, CssNode,
    Declaration, MediaQuery, MediaQueryList, MediaQueryPart, PseudoArgument,
    PseudoClassSelector, PseudoElementSelector, Selector, SelectorNode,
};

const SELECTOR_LIST_SEPARATOR: &str = ", ";
const MEDIA_QUERY_SEPARATOR: &str = ",";

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combinator::Descendant => write!(f, " "),
            Combinator::Child => write!(f, ">"),
            Combinator::NextSibling => write!(f, "+"),
            Combinator::SubsequentSibling => write!(f, "~"),
        }
    }
}

impl fmt::Display for AttributeOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeOperator::Equal => write!(f, "="),
            AttributeOperator::Includes => write!(f, "~="),
            AttributeOperator::DashMatch => write!(f, "|="),
            AttributeOperator::Prefix => write!(f, "^="),
            AttributeOperator::Suffix => write!(f, "$="),
            AttributeOperator::Substring => write!(f, "*="),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::String(value) => write!(f, "\"{value}\""),
            AttributeValue::Identifier(value) => write!(f, "{value}"),
        }
    }
}

impl fmt::Display for AttributeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.name)?;
        if let Some(matcher) = &self.matcher {
            write!(f, "{}{}", matcher.operator, matcher.value)?;
            if let Some(flags) = &self.flags {
                write!(f, " {flags}")?;
            }
        }
        write!(f, "]")
    }
}

impl fmt::Display for PseudoClassSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.name)?;
        match &self.argument {
            None => Ok(()),
            Some(PseudoArgument::Raw(raw)) => write!(f, "({raw})"),
            Some(PseudoArgument::SelectorList(list)) => {
                write!(f, "(")?;
                write_selector_list(f, list)?;
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for PseudoElementSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "::{}", self.name)?;
        if let Some(argument) = &self.argument {
            write!(f, "({argument})")?;
        }
        Ok(())
    }
}

impl fmt::Display for SelectorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorNode::Type(name) => write!(f, "{name}"),
            SelectorNode::Id(name) => write!(f, "#{name}"),
            SelectorNode::Class(name) => write!(f, ".{name}"),
            SelectorNode::Attribute(node) => write!(f, "{node}"),
            SelectorNode::PseudoClass(node) => write!(f, "{node}"),
            SelectorNode::PseudoElement(node) => write!(f, "{node}"),
            SelectorNode::Combinator(combinator) => write!(f, "{combinator}"),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.children.iter().enumerate() {
            match node {
                SelectorNode::Combinator(Combinator::Descendant) => write!(f, " ")?,
                // Leading combinator of a relative selector: `:has(> .ad)`
                SelectorNode::Combinator(combinator) if i == 0 => write!(f, "{combinator} ")?,
                SelectorNode::Combinator(combinator) => write!(f, " {combinator} ")?,
                other => write!(f, "{other}")?,
            }
        }
        Ok(())
    }
}

fn write_selector_list(f: &mut fmt::Formatter<'_>, list: &[Selector]) -> fmt::Result {
    for (i, selector) in list.iter().enumerate() {
        if i > 0 {
            write!(f, "{SELECTOR_LIST_SEPARATOR}")?;
        }
        write!(f, "{selector}")?;
    }
    Ok(())
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)?;
        if self.important {
            write!(f, " !important")?;
        }
        write!(f, ";")
    }
}

fn write_declarations(f: &mut fmt::Formatter<'_>, block: &Block) -> fmt::Result {
    for (i, declaration) in block.declarations.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{declaration}")?;
    }
    Ok(())
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.declarations.is_empty() {
            return write!(f, "{{}}");
        }
        write!(f, "{{ ")?;
        write_declarations(f, self)?;
        write!(f, " }}")
    }
}

impl fmt::Display for MediaQueryPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaQueryPart::Keyword(keyword) => write!(f, "{keyword}"),
            MediaQueryPart::Feature { name, value: None } => write!(f, "({name})"),
            MediaQueryPart::Feature {
                name,
                value: Some(value),
            } => write!(f, "({name}:{value})"),
            MediaQueryPart::Raw(raw) => write!(f, "({raw})"),
        }
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

impl fmt::Display for MediaQueryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, query) in self.queries.iter().enumerate() {
            if i > 0 {
                write!(f, "{MEDIA_QUERY_SEPARATOR}")?;
            }
            write!(f, "{query}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CssNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssNode::Selector(selector) => write!(f, "{selector}"),
            CssNode::Block(block) => write!(f, "{block}"),
            CssNode::MediaQueryList(list) => write!(f, "{list}"),
        }
    }
}

#[must_use]
pub fn generate_selector(selector: &Selector) -> String {
    selector.to_string()
}

/// Joins selectors with `, `.
#[must_use]
pub fn generate_selector_list(selectors: &[Selector]) -> String {
    selectors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(SELECTOR_LIST_SEPARATOR)
}

/// The block with its braces: `{ padding: 0 !important; }`.
#[must_use]
pub fn generate_block(block: &Block) -> String {
    block.to_string()
}

/// The block body without braces: `padding: 0 !important; margin: 2px;`.
#[must_use]
pub fn generate_declarations(block: &Block) -> String {
    block
        .declarations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn generate_media_query_list(list: &MediaQueryList) -> String {
    list.to_string()
}
