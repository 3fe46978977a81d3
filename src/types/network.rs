use std::fmt;

use super::modifier::write_modifiers;
use super::{AdblockSyntax, Modifier, Rule, RuleCategory};

pub(crate) const EXCEPTION_MARKER: &str = "@@";
pub(crate) const MODIFIERS_SEPARATOR: char = '$';

/// A basic (blocking) or exception network rule, e.g.
/// `@@||example.com^$script,domain=example.org`.
///
/// `regex` is derived from `pattern` at parse time: it is true when the
/// pattern is wrapped in `/`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkRule {
    pub syntax: AdblockSyntax,
    pub exception: bool,
    pub regex: bool,
    pub pattern: String,
    pub modifiers: Vec<Modifier>,
}

impl Rule for NetworkRule {
    fn category(&self) -> RuleCategory {
        RuleCategory::Network
    }

    fn syntax(&self) -> AdblockSyntax {
        self.syntax
    }
}

impl fmt::Display for NetworkRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exception {
            write!(f, "{EXCEPTION_MARKER}")?;
        }
        write!(f, "{}", self.pattern)?;
        if !self.modifiers.is_empty() {
            write!(f, "{MODIFIERS_SEPARATOR}")?;
            write_modifiers(f, &self.modifiers)?;
        }
        Ok(())
    }
}
