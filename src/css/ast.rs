//! Grammar nodes produced by the CSS parser.
//!
//! Nodes carry no source positions, so two fragments that differ only in
//! insignificant whitespace compare equal.

/// A complex selector: compound parts interleaved with combinators.
///
/// Inside selector-list pseudo-class arguments (`:has(> .ad)`) a selector
/// may start with a combinator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selector {
    pub children: Vec<SelectorNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectorNode {
    /// `div` or `*`
    Type(String),
    /// `#id`
    Id(String),
    /// `.class`
    Class(String),
    Attribute(AttributeSelector),
    PseudoClass(PseudoClassSelector),
    PseudoElement(PseudoElementSelector),
    Combinator(Combinator),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Combinator {
    Descendant,
    Child,
    NextSibling,
    SubsequentSibling,
}

/// `[name]`, `[name="value"]`, `[name^=value i]`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeSelector {
    pub name: String,
    pub matcher: Option<AttributeMatcher>,
    pub flags: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeMatcher {
    pub operator: AttributeOperator,
    pub value: AttributeValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeOperator {
    /// `=`
    Equal,
    /// `~=`
    Includes,
    /// `|=`
    DashMatch,
    /// `^=`
    Prefix,
    /// `$=`
    Suffix,
    /// `*=`
    Substring,
}

/// Attribute values. Strings hold their content as it appears between
/// double quotes, escape sequences included.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeValue {
    String(String),
    Identifier(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PseudoClassSelector {
    pub name: String,
    pub argument: Option<PseudoArgument>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PseudoArgument {
    /// Argument of `:not()`, `:has()` and friends.
    SelectorList(Vec<Selector>),
    /// Any other argument, kept verbatim (`3n+0`, `/^REKLAMA$/`).
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PseudoElementSelector {
    pub name: String,
    pub argument: Option<String>,
}

/// A declaration block, `{ padding: 0 !important; color: red; }`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    pub declarations: Vec<Declaration>,
}

/// `value` is trimmed and never includes the `!important` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }

    #[must_use]
    pub fn important(mut self) -> Self {
        self.important = true;
        self
    }
}

/// `screen and (min-width: 1024px), print`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaQueryList {
    pub queries: Vec<MediaQuery>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaQuery {
    pub parts: Vec<MediaQueryPart>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaQueryPart {
    /// `screen`, `and`, `not`, `only`
    Keyword(String),
    /// `(min-width: 1024px)` or `(color)`
    Feature { name: String, value: Option<String> },
    /// Parenthesized content that is not a plain feature, e.g. a range
    /// `(400px <= width)`, kept trimmed but otherwise verbatim.
    Raw(String),
}

/// Grammar entry points accepted by [`parse`](super::parse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CssContext {
    Selector,
    Block,
    MediaQueryList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CssNode {
    Selector(Selector),
    Block(Block),
    MediaQueryList(MediaQueryList),
}
