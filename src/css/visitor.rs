//! Read-only traversal of selector trees.

use super::ast::{
    AttributeSelector, PseudoArgument, PseudoClassSelector, PseudoElementSelector, Selector,
    SelectorNode,
};

/// Callbacks for [`walk_selector`]. Every method defaults to doing nothing, so
/// implementors only override the node kinds they care about.
pub trait SelectorVisitor {
    fn visit_node(&mut self, _node: &SelectorNode) {}

    fn visit_attribute(&mut self, _node: &AttributeSelector) {}

    fn visit_pseudo_class(&mut self, _node: &PseudoClassSelector) {}

    fn visit_pseudo_element(&mut self, _node: &PseudoElementSelector) {}
}

/// Visits every node of `selector` in document order. A pseudo-class is
/// visited before the selectors nested in its argument.
pub fn walk_selector<V: SelectorVisitor + ?Sized>(selector: &Selector, visitor: &mut V) {
    for node in &selector.children {
        visitor.visit_node(node);
        match node {
            SelectorNode::Attribute(attribute) => visitor.visit_attribute(attribute),
            SelectorNode::PseudoClass(pseudo) => {
                visitor.visit_pseudo_class(pseudo);
                if let Some(PseudoArgument::SelectorList(list)) = &pseudo.argument {
                    for nested in list {
                        walk_selector(nested, visitor);
                    }
                }
            }
            SelectorNode::PseudoElement(pseudo) => visitor.visit_pseudo_element(pseudo),
            SelectorNode::Type(_)
            | SelectorNode::Id(_)
            | SelectorNode::Class(_)
            | SelectorNode::Combinator(_) => {}
        }
    }
}
