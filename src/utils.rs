//! Escape-aware string scanning shared by the rule parsers.

pub(crate) const ESCAPE_CHARACTER: char = '\\';
pub(crate) const REGEX_MARKER: char = '/';

/// Byte index of the first non-whitespace character, or `s.len()` if the
/// string is empty or whitespace only.
#[must_use]
pub fn find_first_non_whitespace(s: &str) -> usize {
    s.char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(s.len(), |(i, _)| i)
}

/// Returns true if the character at byte index `index` is preceded by an odd
/// number of escape characters.
#[must_use]
pub fn is_escaped(s: &str, index: usize) -> bool {
    s.as_bytes()[..index]
        .iter()
        .rev()
        .take_while(|&&b| b == ESCAPE_CHARACTER as u8)
        .count()
        % 2
        == 1
}

/// Finds the first `target` that is not escaped.
#[must_use]
pub fn find_next_unescaped_character(s: &str, target: char) -> Option<usize> {
    s.char_indices()
        .find(|&(i, c)| c == target && !is_escaped(s, i))
        .map(|(i, _)| i)
}

/// Scans from the end for the last `target` that is neither escaped nor
/// immediately followed by `guard`.
///
/// This resolves the `$` separator of network rules: in
/// `example.com$m1,m2=/^regex$/` the `$` right before the closing `/` belongs
/// to the regex, so the separator is the first `$`.
#[must_use]
pub fn find_last_unescaped_character_not_followed_by(
    s: &str,
    target: char,
    guard: char,
) -> Option<usize> {
    s.char_indices()
        .rev()
        .filter(|&(_, c)| c == target)
        .find(|&(i, c)| {
            let followed_by_guard = s[i + c.len_utf8()..].starts_with(guard);
            !followed_by_guard && !is_escaped(s, i)
        })
        .map(|(i, _)| i)
}

/// Splits `s` on every `separator` that is not escaped. Escape sequences are
/// left untouched in the returned pieces.
#[must_use]
pub fn split_by_unescaped_character(s: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (i, c) in s.char_indices() {
        if c == separator && !is_escaped(s, i) {
            parts.push(&s[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&s[start..]);
    parts
}

/// A pattern is treated as a regular expression when it is wrapped in `/`.
#[must_use]
pub fn is_regex_pattern(s: &str) -> bool {
    s.len() > 1 && s.starts_with(REGEX_MARKER) && s.ends_with(REGEX_MARKER)
}

/// Finds the first `target` outside of quoted strings, skipping escaped
/// characters.
#[must_use]
pub fn find_unquoted_character(s: &str, target: char) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut chars = s.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            ESCAPE_CHARACTER => {
                chars.next();
            }
            c if quote == Some(c) => quote = None,
            _ if quote.is_some() => {}
            '"' | '\'' => quote = Some(c),
            c if c == target => return Some(i),
            _ => {}
        }
    }
    None
}

/// Given the byte index of an opening `(`, returns the index of the `)` that
/// closes it. Quoted strings and escaped characters are skipped.
#[must_use]
pub fn find_closing_parenthesis(s: &str, open: usize) -> Option<usize> {
    if !s[open..].starts_with('(') {
        return None;
    }
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut chars = s[open..].char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            ESCAPE_CHARACTER => {
                chars.next();
            }
            c if quote == Some(c) => quote = None,
            _ if quote.is_some() => {}
            '"' | '\'' => quote = Some(c),
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}
