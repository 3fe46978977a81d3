//! The comma-separated modifier list after a network rule's `$`.
//!
//! Escape sequences are kept verbatim, so `generate` never has to re-escape:
//! `replace=/a\,b/x/` stays one modifier whose value is `/a\,b/x/`.

use crate::types::{Modifier, ModifierList, MODIFIER_ASSIGN, MODIFIER_NEGATION, MODIFIER_SEPARATOR};
use crate::utils::{find_next_unescaped_character, split_by_unescaped_character};

fn parse_modifier(raw: &str) -> Modifier {
    let (negated, rest) = match raw.strip_prefix(MODIFIER_NEGATION) {
        Some(rest) => (true, rest.trim()),
        None => (false, raw),
    };

    let (name, value) = match find_next_unescaped_character(rest, MODIFIER_ASSIGN) {
        Some(assign) => (
            rest[..assign].trim(),
            Some(rest[assign + MODIFIER_ASSIGN.len_utf8()..].trim().to_owned()),
        ),
        None => (rest, None),
    };

    Modifier {
        name: name.to_owned(),
        value,
        negated,
    }
}

/// Parses `script,~third-party,domain=example.com`. Empty entries are skipped.
#[must_use]
pub fn parse(raw: &str) -> ModifierList {
    split_by_unescaped_character(raw, MODIFIER_SEPARATOR)
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(parse_modifier)
        .collect::<Vec<_>>()
        .into()
}

#[must_use]
pub fn generate(ast: &ModifierList) -> String {
    ast.to_string()
}
