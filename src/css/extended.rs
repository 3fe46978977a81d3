//! Extended (non-standard) selector syntax recognized by ad blockers.

use super::ast::{AttributeSelector, PseudoClassSelector, Selector};
use super::visitor::{walk_selector, SelectorVisitor};

/// Attribute names with this prefix are AdGuard's legacy extended selectors,
/// e.g. `[-ext-has=".ad"]`.
pub const EXTENDED_ATTRIBUTE_PREFIX: &str = "-ext-";

/// Extended pseudo-classes across all supported dialects.
pub const EXTENDED_PSEUDO_CLASSES: &[&str] = &[
    // AdGuard
    "contains",
    "has",
    "if-not",
    "is",
    "matches-attr",
    "matches-css",
    "matches-property",
    "nth-ancestor",
    "remove",
    "upward",
    "xpath",
    // uBlock Origin
    "has-text",
    "if",
    "matches-css-after",
    "matches-css-before",
    "matches-path",
    "min-text-length",
    "watch-attr",
    // Adblock Plus
    "-abp-contains",
    "-abp-has",
    "-abp-properties",
];

#[must_use]
pub fn is_extended_attribute(node: &AttributeSelector) -> bool {
    node.name.starts_with(EXTENDED_ATTRIBUTE_PREFIX)
}

#[must_use]
pub fn is_extended_pseudo_class(node: &PseudoClassSelector) -> bool {
    EXTENDED_PSEUDO_CLASSES
        .iter()
        .any(|name| name.eq_ignore_ascii_case(&node.name))
}

/// Extended nodes found in a selector, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtendedCssNodes {
    pub attributes: Vec<AttributeSelector>,
    pub pseudos: Vec<PseudoClassSelector>,
}

impl ExtendedCssNodes {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.pseudos.is_empty()
    }
}

struct ExtendedNodeCollector<A, P> {
    is_extended_attribute: A,
    is_extended_pseudo_class: P,
    nodes: ExtendedCssNodes,
}

impl<A, P> SelectorVisitor for ExtendedNodeCollector<A, P>
where
    A: Fn(&AttributeSelector) -> bool,
    P: Fn(&PseudoClassSelector) -> bool,
{
    fn visit_attribute(&mut self, node: &AttributeSelector) {
        if (self.is_extended_attribute)(node) {
            self.nodes.attributes.push(node.clone());
        }
    }

    fn visit_pseudo_class(&mut self, node: &PseudoClassSelector) {
        if (self.is_extended_pseudo_class)(node) {
            self.nodes.pseudos.push(node.clone());
        }
    }
}

/// Collects the attribute and pseudo-class nodes of `selector` accepted by the
/// given predicates, including nodes nested in selector-list arguments.
pub fn collect_nodes<A, P>(selector: &Selector, attribute: A, pseudo_class: P) -> ExtendedCssNodes
where
    A: Fn(&AttributeSelector) -> bool,
    P: Fn(&PseudoClassSelector) -> bool,
{
    let mut collector = ExtendedNodeCollector {
        is_extended_attribute: attribute,
        is_extended_pseudo_class: pseudo_class,
        nodes: ExtendedCssNodes::default(),
    };
    walk_selector(selector, &mut collector);
    collector.nodes
}

/// Collects the extended attribute selectors and pseudo-classes of
/// `selector` using the built-in registry.
#[must_use]
pub fn extract_extended_nodes(selector: &Selector) -> ExtendedCssNodes {
    collect_nodes(selector, is_extended_attribute, is_extended_pseudo_class)
}
