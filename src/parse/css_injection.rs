//! CSS-injection rule bodies in their two written forms:
//!
//! - AdGuard: `[@media <query-list> { ]<selectors> { <declarations> }[ }]`,
//!   where `remove: true;` as the only declaration removes the elements.
//! - uBlock Origin: `<selectors>:style(<declarations>)` or
//!   `<selectors>:remove()`.
//!
//! Both parse to the same [`CssRuleBody`], and [`generate`] can write it back
//! in either form.

use log::{debug, trace};

use crate::css::{
    generate_declarations, generate_selector_list, parse_block, parse_media_query_list,
    parse_selector_list, Block, Declaration, Selector,
};
use crate::types::{AdblockSyntax, CssBody, CssInjectionError, CssRuleBody};
use crate::utils::{find_closing_parenthesis, find_unquoted_character, ESCAPE_CHARACTER};

const MEDIA_MARKER: &str = "@media";
const BLOCK_OPEN: char = '{';
const BLOCK_CLOSE: char = '}';
const STYLE_MARKER: &str = ":style(";
const REMOVE_MARKER: &str = ":remove(";
const REMOVE_PROPERTY: &str = "remove";
const REMOVE_VALUE: &str = "true";
const COMMENT_OPEN: &str = "/*";
const COMMENT_CLOSE: &str = "*/";

// -- Shape detection --------------------------------------------------------

struct AdGuardParts<'a> {
    media_query_list: Option<&'a str>,
    selectors: &'a str,
    /// Includes the braces.
    block: &'a str,
}

impl AdGuardParts<'_> {
    fn block_content(&self) -> &str {
        self.block
            .strip_prefix(BLOCK_OPEN)
            .and_then(|rest| rest.strip_suffix(BLOCK_CLOSE))
            .map_or("", str::trim)
    }
}

fn split_adguard(raw: &str) -> Option<AdGuardParts<'_>> {
    let trimmed = raw.trim();
    let (media_query_list, inner) = match trimmed.strip_prefix(MEDIA_MARKER) {
        Some(rest) => {
            let open = find_unquoted_character(rest, BLOCK_OPEN)?;
            let inner = rest[open + BLOCK_OPEN.len_utf8()..].strip_suffix(BLOCK_CLOSE)?;
            (Some(rest[..open].trim()), inner.trim())
        }
        None => (None, trimmed),
    };

    let open = find_unquoted_character(inner, BLOCK_OPEN)?;
    let block = &inner[open..];
    if !block.ends_with(BLOCK_CLOSE) {
        return None;
    }
    Some(AdGuardParts {
        media_query_list,
        selectors: inner[..open].trim(),
        block,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UblockMarker {
    Style,
    Remove,
}

impl UblockMarker {
    fn as_str(self) -> &'static str {
        match self {
            UblockMarker::Style => STYLE_MARKER,
            UblockMarker::Remove => REMOVE_MARKER,
        }
    }
}

struct UblockParts<'a> {
    selectors: &'a str,
    marker: UblockMarker,
    /// Text between the marker's parentheses, trimmed.
    content: &'a str,
}

/// Last `:style(` or `:remove(` outside of brackets, parentheses and strings.
fn find_ublock_marker(s: &str) -> Option<(usize, UblockMarker)> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut found = None;
    let mut chars = s.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            ESCAPE_CHARACTER => {
                chars.next();
            }
            c if quote == Some(c) => quote = None,
            _ if quote.is_some() => {}
            '"' | '\'' => quote = Some(c),
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                let rest = &s[i..];
                if rest.starts_with(STYLE_MARKER) {
                    found = Some((i, UblockMarker::Style));
                } else if rest.starts_with(REMOVE_MARKER) {
                    found = Some((i, UblockMarker::Remove));
                }
            }
            _ => {}
        }
    }
    found
}

fn split_ublock(raw: &str) -> Option<UblockParts<'_>> {
    let trimmed = raw.trim();
    let (start, marker) = find_ublock_marker(trimmed)?;
    let open = start + marker.as_str().len() - 1;
    let close = find_closing_parenthesis(trimmed, open)?;
    if close + 1 != trimmed.len() {
        return None;
    }
    Some(UblockParts {
        selectors: trimmed[..start].trim(),
        marker,
        content: trimmed[open + 1..close].trim(),
    })
}

/// True if `content` holds nothing but whitespace, comments and `;`, so it
/// would parse to a block without declarations.
fn is_blank_declarations(content: &str) -> bool {
    let mut rest = content;
    loop {
        rest = rest.trim_start_matches(|c: char| {
            matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C' | ';')
        });
        let Some(comment) = rest.strip_prefix(COMMENT_OPEN) else {
            return rest.is_empty();
        };
        match comment.find(COMMENT_CLOSE) {
            Some(end) => rest = &comment[end + COMMENT_CLOSE.len()..],
            None => return false,
        }
    }
}

fn adguard_parts(raw: &str) -> Option<AdGuardParts<'_>> {
    split_adguard(raw).filter(|parts| {
        !parts.selectors.is_empty() && !is_blank_declarations(parts.block_content())
    })
}

fn ublock_parts(raw: &str) -> Option<UblockParts<'_>> {
    split_ublock(raw).filter(|parts| {
        !parts.selectors.is_empty()
            && match parts.marker {
                UblockMarker::Style => !is_blank_declarations(parts.content),
                UblockMarker::Remove => parts.content.is_empty(),
            }
    })
}

/// True if `raw` looks like `selectors { declarations }`, optionally wrapped
/// in `@media ... { }`. A block without declarations does not count.
#[must_use]
pub fn is_adguard_css_injection(raw: &str) -> bool {
    adguard_parts(raw).is_some()
}

/// True if `raw` looks like `selectors:style(declarations)` with at least one
/// declaration, or `selectors:remove()`.
#[must_use]
pub fn is_ublock_css_injection(raw: &str) -> bool {
    ublock_parts(raw).is_some()
}

// -- Parsing ----------------------------------------------------------------

fn parse_selectors(raw: &str) -> Result<Vec<Selector>, CssInjectionError> {
    parse_selector_list(raw).map_err(|source| {
        debug!("rejected CSS injection selectors: {source}");
        CssInjectionError::InvalidSelectorSyntax { source }
    })
}

fn parse_declarations(raw: &str) -> Result<Block, CssInjectionError> {
    parse_block(raw).map_err(|source| {
        debug!("rejected CSS injection block: {source}");
        CssInjectionError::InvalidDeclarationBlockSyntax { source }
    })
}

fn is_remove_declaration(declaration: &Declaration) -> bool {
    declaration.property.eq_ignore_ascii_case(REMOVE_PROPERTY) && declaration.value == REMOVE_VALUE
}

/// Turns a block holding a lone `remove: true;` into [`CssBody::Remove`].
fn classify_block(block: Block, raw: &str) -> Result<CssBody, CssInjectionError> {
    let removes = block
        .declarations
        .iter()
        .filter(|declaration| is_remove_declaration(declaration))
        .count();

    match removes {
        0 => Ok(CssBody::Declarations(block)),
        1 if block.declarations.len() == 1 => Ok(CssBody::Remove),
        1 => {
            debug!("remove property mixed with others in {raw:?}");
            Err(CssInjectionError::RemovePropertyMixedWithOthers {
                raw: raw.to_owned(),
            })
        }
        _ => {
            debug!("multiple remove properties in {raw:?}");
            Err(CssInjectionError::MultipleRemoveProperties {
                raw: raw.to_owned(),
            })
        }
    }
}

/// Parses an AdGuard CSS-injection body.
///
/// # Errors
///
/// - [`CssInjectionError::UnrecognizedBody`] if `raw` does not have the
///   AdGuard shape.
/// - [`CssInjectionError::RemovePropertyMixedWithOthers`] and
///   [`CssInjectionError::MultipleRemoveProperties`] for misused
///   `remove: true`.
/// - The `Invalid*Syntax` variants if a selector, the block or the media
///   query list is malformed.
pub fn parse_adguard_css_injection(raw: &str) -> Result<CssRuleBody, CssInjectionError> {
    let parts = adguard_parts(raw).ok_or_else(|| CssInjectionError::UnrecognizedBody {
        raw: raw.to_owned(),
    })?;

    let media_query_list = parts
        .media_query_list
        .map(|text| {
            parse_media_query_list(text).map_err(|source| {
                debug!("rejected CSS injection media query: {source}");
                CssInjectionError::InvalidMediaQuerySyntax { source }
            })
        })
        .transpose()?;
    let selectors = parse_selectors(parts.selectors)?;
    let body = classify_block(parse_declarations(parts.block)?, raw)?;

    Ok(CssRuleBody {
        media_query_list,
        selectors,
        body,
    })
}

/// Parses a uBlock Origin CSS-injection body. Returns `Ok(None)` if `raw`
/// does not have the uBlock Origin shape.
///
/// # Errors
///
/// Returns the `Invalid*Syntax` variants of [`CssInjectionError`] if the
/// selectors or the declarations are malformed.
pub fn parse_ublock_css_injection(raw: &str) -> Result<Option<CssRuleBody>, CssInjectionError> {
    let Some(parts) = ublock_parts(raw) else {
        return Ok(None);
    };

    let selectors = parse_selectors(parts.selectors)?;
    let body = match parts.marker {
        UblockMarker::Remove => CssBody::Remove,
        UblockMarker::Style => CssBody::Declarations(parse_declarations(&format!(
            "{BLOCK_OPEN}{}{BLOCK_CLOSE}",
            parts.content
        ))?),
    };

    Ok(Some(CssRuleBody {
        media_query_list: None,
        selectors,
        body,
    }))
}

/// Parses a CSS-injection body in either form. AdGuard is tried first.
/// Returns `Ok(None)` if `raw` is in neither form.
///
/// # Errors
///
/// Returns [`CssInjectionError`] if `raw` has one of the two shapes but is
/// malformed.
pub fn parse(raw: &str) -> Result<Option<CssRuleBody>, CssInjectionError> {
    if is_adguard_css_injection(raw) {
        trace!("AdGuard CSS injection: {raw:?}");
        return parse_adguard_css_injection(raw).map(Some);
    }
    if is_ublock_css_injection(raw) {
        trace!("uBlock Origin CSS injection: {raw:?}");
        return parse_ublock_css_injection(raw);
    }
    trace!("not a CSS injection body: {raw:?}");
    Ok(None)
}

// -- Generation -------------------------------------------------------------

fn generate_adguard(ast: &CssRuleBody) -> String {
    let body = match &ast.body {
        CssBody::Remove => format!("{REMOVE_PROPERTY}: {REMOVE_VALUE};"),
        CssBody::Declarations(block) => generate_declarations(block),
    };
    let rule = format!(
        "{} {BLOCK_OPEN} {body} {BLOCK_CLOSE}",
        generate_selector_list(&ast.selectors)
    );
    match &ast.media_query_list {
        Some(list) => format!("{MEDIA_MARKER} {list} {BLOCK_OPEN} {rule} {BLOCK_CLOSE}"),
        None => rule,
    }
}

fn generate_ublock(ast: &CssRuleBody) -> Result<String, CssInjectionError> {
    if ast.media_query_list.is_some() {
        return Err(CssInjectionError::MediaQueryNotSupported {
            syntax: AdblockSyntax::UblockOrigin,
        });
    }
    let selectors = generate_selector_list(&ast.selectors);
    Ok(match &ast.body {
        CssBody::Remove => format!("{selectors}{REMOVE_MARKER})"),
        CssBody::Declarations(block) => {
            format!("{selectors}{STYLE_MARKER}{})", generate_declarations(block))
        }
    })
}

/// Writes `ast` in the given dialect.
///
/// # Errors
///
/// - [`CssInjectionError::UnsupportedSyntax`] for dialects without a
///   CSS-injection form.
/// - [`CssInjectionError::MediaQueryNotSupported`] when writing a body with a
///   media query list as uBlock Origin.
pub fn generate(ast: &CssRuleBody, syntax: AdblockSyntax) -> Result<String, CssInjectionError> {
    match syntax {
        AdblockSyntax::AdGuard => Ok(generate_adguard(ast)),
        AdblockSyntax::UblockOrigin => generate_ublock(ast),
        other => Err(CssInjectionError::UnsupportedSyntax { syntax: other }),
    }
}

/// Parses `raw` in either form and writes it as `target`.
///
/// # Errors
///
/// Returns any error of [`parse`] or [`generate`].
pub fn convert(raw: &str, target: AdblockSyntax) -> Result<Option<String>, CssInjectionError> {
    parse(raw)?.map(|ast| generate(&ast, target)).transpose()
}
