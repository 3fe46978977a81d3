mod agent;
mod css_injection;
mod error;
mod modifier;
mod network;
mod syntax;

pub(crate) use agent::{AGENT_LIST_CLOSE, AGENT_LIST_OPEN, AGENT_SEPARATOR};
pub(crate) use modifier::{MODIFIER_ASSIGN, MODIFIER_NEGATION, MODIFIER_SEPARATOR};
pub(crate) use network::{EXCEPTION_MARKER, MODIFIERS_SEPARATOR};

pub use agent::{Agent, AgentMember};
pub use css_injection::{CssBody, CssRuleBody};
pub use error::CssInjectionError;
pub use modifier::{Modifier, ModifierList};
pub use network::NetworkRule;
pub use syntax::{AdblockSyntax, CommentMarker, Rule, RuleCategory};
