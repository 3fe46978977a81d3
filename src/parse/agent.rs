//! Agent comments: `[Adblock Plus 2.0; uBlock Origin 1.40]`, optionally
//! behind a comment marker (`! [AdGuard]`, `#[AdGuard]`).

use log::trace;

use crate::types::{
    Agent, AgentMember, CommentMarker, AGENT_LIST_CLOSE, AGENT_LIST_OPEN, AGENT_SEPARATOR,
};
use crate::utils::find_first_non_whitespace;

const TOKEN_SEPARATOR: &str = " ";

/// True if `raw` is a bare agent list, i.e. starts with `[` and ends with `]`.
#[must_use]
pub fn is_agent(raw: &str) -> bool {
    raw.starts_with(AGENT_LIST_OPEN) && raw.ends_with(AGENT_LIST_CLOSE)
}

/// Byte index of the opening bracket of an agent list, if `raw` has one.
fn find_list_open(raw: &str) -> Option<usize> {
    if raw.len() <= 1 || !raw.ends_with(AGENT_LIST_CLOSE) {
        return None;
    }
    let mut chars = raw.chars();
    let first = chars.next()?;
    if first == AGENT_LIST_OPEN {
        return Some(0);
    }
    CommentMarker::from_char(first)?;
    let rest = &raw[first.len_utf8()..];
    let shift = first.len_utf8() + find_first_non_whitespace(rest);
    raw[shift..]
        .starts_with(AGENT_LIST_OPEN)
        .then_some(shift)
}

/// Splits one member into name and version.
///
/// The first space-separated token that contains a `.` or a digit starts the
/// version. When that token is the first one, the whole text is the name.
fn parse_member(raw: &str) -> AgentMember {
    let trimmed = raw.trim();
    let tokens: Vec<&str> = trimmed.split(TOKEN_SEPARATOR).collect();
    let version_start = tokens
        .iter()
        .position(|token| token.contains('.') || token.chars().any(|c| c.is_ascii_digit()));

    match version_start {
        Some(i) if i > 0 => AgentMember {
            adblock_name: tokens[..i].join(TOKEN_SEPARATOR),
            version: Some(tokens[i..].join(TOKEN_SEPARATOR)),
        },
        _ => AgentMember::new(trimmed, None),
    }
}

/// Parses an agent comment. Returns `None` if `raw` is not one.
#[must_use]
pub fn parse(raw: &str) -> Option<Agent> {
    let open = find_list_open(raw)?;
    trace!("agent list opens at {open}");

    let content = &raw[open + AGENT_LIST_OPEN.len_utf8()..raw.len() - AGENT_LIST_CLOSE.len_utf8()];
    let members = content
        .split(AGENT_SEPARATOR)
        .map(parse_member)
        .filter(|member| !member.adblock_name.is_empty())
        .collect();

    Some(Agent {
        members,
        ..Agent::default()
    })
}

/// Writes `[name version; name]`.
#[must_use]
pub fn generate(ast: &Agent) -> String {
    ast.to_string()
}
