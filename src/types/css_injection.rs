use crate::css::{Block, MediaQueryList, Selector};

use super::{AdblockSyntax, Rule, RuleCategory};

/// What a CSS-injection rule does to the matched elements.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CssBody {
    /// Apply the declarations.
    Declarations(Block),
    /// Remove the elements from the DOM.
    Remove,
}

/// A CSS-injection body, independent of the dialect it was written in.
///
/// `body { padding: 0; }` and `body:style(padding: 0;)` both parse to the
/// same value. `selectors` is never empty for a parsed body.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CssRuleBody {
    pub media_query_list: Option<MediaQueryList>,
    pub selectors: Vec<Selector>,
    pub body: CssBody,
}

impl CssRuleBody {
    #[must_use]
    pub fn is_remove(&self) -> bool {
        matches!(self.body, CssBody::Remove)
    }
}

impl Rule for CssRuleBody {
    fn category(&self) -> RuleCategory {
        RuleCategory::Cosmetic
    }

    /// Only AdGuard can write a media query; any other body is common to both
    /// dialects.
    fn syntax(&self) -> AdblockSyntax {
        if self.media_query_list.is_some() {
            AdblockSyntax::AdGuard
        } else {
            AdblockSyntax::Unknown
        }
    }
}
