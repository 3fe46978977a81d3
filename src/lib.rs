//! Ad-blocking filter-list rules as typed syntax trees.
//!
//! Each rule kind has a `parse` that turns one line of filter-list text into
//! an AST and a `generate` that writes canonical text back:
//!
//! ```
//! use filter_syntax::parse::network;
//!
//! let rule = network::parse("@@||example.com$domain=example.org");
//! assert!(rule.exception);
//! assert_eq!(network::generate(&rule), "@@||example.com$domain=example.org");
//! ```
//!
//! CSS-injection bodies can be translated between AdGuard and uBlock Origin
//! forms:
//!
//! ```
//! use filter_syntax::parse::css_injection;
//! use filter_syntax::AdblockSyntax;
//!
//! let converted = css_injection::convert("body:remove()", AdblockSyntax::AdGuard).unwrap();
//! assert_eq!(converted.as_deref(), Some("body { remove: true; }"));
//! ```

pub mod css;
mod error;
pub mod parse;
mod types;
pub mod utils;

pub use error::FilterSyntaxError;
pub use types::{
    AdblockSyntax, Agent, AgentMember, CommentMarker, CssBody, CssInjectionError, CssRuleBody,
    Modifier, ModifierList, NetworkRule, Rule, RuleCategory,
};
