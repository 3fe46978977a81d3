//! Basic and exception network rules: `@@||example.com^$script,domain=a.com`.

use log::trace;

use crate::types::{NetworkRule, EXCEPTION_MARKER, MODIFIERS_SEPARATOR};
use crate::utils::{find_last_unescaped_character_not_followed_by, is_regex_pattern, REGEX_MARKER};

use super::modifier;

/// Parses a network rule. Every input is a valid network rule at this level.
///
/// The modifier separator is the last unescaped `$` that is not directly
/// followed by `/`, so in `/ad.js$m1=/v1/` and `example.com$m=/^re$/` the
/// `$` inside a regex is left alone. A separator followed by no modifiers
/// is dropped (`||example.com$` has pattern `||example.com`), unless the
/// remaining pattern would itself end up split at an earlier `$` (`a$b$`).
#[must_use]
pub fn parse(raw: &str) -> NetworkRule {
    let mut rule = raw.trim();

    let exception = match rule.strip_prefix(EXCEPTION_MARKER) {
        Some(rest) => {
            rule = rest;
            true
        }
        None => false,
    };

    let (pattern, modifiers) =
        match find_last_unescaped_character_not_followed_by(rule, MODIFIERS_SEPARATOR, REGEX_MARKER)
        {
            Some(separator) => {
                trace!("network rule separator at {separator}");
                let modifiers =
                    modifier::parse(&rule[separator + MODIFIERS_SEPARATOR.len_utf8()..]).modifiers;
                let pattern = &rule[..separator];
                if modifiers.is_empty()
                    && find_last_unescaped_character_not_followed_by(
                        pattern,
                        MODIFIERS_SEPARATOR,
                        REGEX_MARKER,
                    )
                    .is_some()
                {
                    (rule, modifiers)
                } else {
                    (pattern, modifiers)
                }
            }
            None => (rule, Vec::new()),
        };

    NetworkRule {
        exception,
        regex: is_regex_pattern(pattern),
        pattern: pattern.to_owned(),
        modifiers,
        ..NetworkRule::default()
    }
}

#[must_use]
pub fn generate(ast: &NetworkRule) -> String {
    ast.to_string()
}
