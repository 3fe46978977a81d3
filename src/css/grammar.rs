use winnow::combinator::{alt, cut_err, opt, preceded, repeat, separated};
use winnow::error::{ErrMode, ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, one_of, take_until, take_while};

use crate::utils::find_closing_parenthesis;

use super::ast::{
    AttributeMatcher, AttributeOperator, AttributeSelector, AttributeValue, Block, Combinator,
    Declaration, MediaQuery, MediaQueryList, MediaQueryPart, PseudoArgument,
    PseudoClassSelector, PseudoElementSelector, Selector, SelectorNode,
};

/// Pseudo-classes whose argument is itself a (relative) selector list.
const SELECTOR_LIST_PSEUDO_CLASSES: &[&str] = &[
    "not", "is", "where", "matches", "has", "-abp-has", "if", "if-not",
];

/// Deepest allowed nesting of selector-list arguments, `:not(:not(..))`.
pub const MAX_NESTING_DEPTH: usize = 64;

const IMPORTANT_FLAG: &str = "important";
const CUSTOM_PROPERTY_PREFIX: &str = "--";

// -- Whitespace & comments --------------------------------------------------

fn is_css_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

pub(super) fn ws(input: &mut &str) -> ModalResult<()> {
    let _: () = repeat(
        0..,
        alt((
            take_while(1.., is_css_whitespace).void(),
            ("/*", take_until(0.., "*/"), "*/").void(),
        )),
    )
    .parse_next(input)?;
    Ok(())
}

// -- Identifiers & strings --------------------------------------------------

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

fn is_plain_ident(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_name_char)
}

fn ident<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    repeat(
        1..,
        alt((take_while(1.., is_name_char).void(), ('\\', any).void())),
    )
    .map(|()| ())
    .take()
    .parse_next(input)
}

/// Parses a quoted string and returns its content in double-quoted form:
/// `'say "hi"'` becomes `say \"hi\"`.
fn quoted_string(input: &mut &str) -> ModalResult<String> {
    let quote = one_of(['"', '\'']).parse_next(input)?;
    let mut content = String::new();
    loop {
        let c = cut_err(any)
            .context(StrContext::Expected(StrContextValue::CharLiteral(quote)))
            .parse_next(input)?;
        match c {
            '\\' => {
                let escaped = cut_err(any).parse_next(input)?;
                if escaped == '\'' {
                    content.push('\'');
                } else {
                    content.push('\\');
                    content.push(escaped);
                }
            }
            c if c == quote => return Ok(content),
            '"' => content.push_str("\\\""),
            c => content.push(c),
        }
    }
}

/// Takes a parenthesized argument and returns the text between the
/// parentheses, untouched.
fn parenthesized_raw<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    let source: &'i str = *input;
    let Some(close) = find_closing_parenthesis(source, 0) else {
        return Err(ErrMode::from_input(input));
    };
    *input = &source[close + 1..];
    Ok(&source[1..close])
}

// -- Selectors --------------------------------------------------------------

fn combinator(input: &mut &str) -> ModalResult<Combinator> {
    alt((
        '>'.value(Combinator::Child),
        '+'.value(Combinator::NextSibling),
        '~'.value(Combinator::SubsequentSibling),
    ))
    .parse_next(input)
}

fn type_selector(input: &mut &str) -> ModalResult<SelectorNode> {
    alt(("*", ident))
        .map(|name: &str| SelectorNode::Type(name.to_owned()))
        .parse_next(input)
}

fn id_selector(input: &mut &str) -> ModalResult<SelectorNode> {
    preceded('#', cut_err(ident))
        .map(|name: &str| SelectorNode::Id(name.to_owned()))
        .parse_next(input)
}

fn class_selector(input: &mut &str) -> ModalResult<SelectorNode> {
    preceded('.', cut_err(ident))
        .map(|name: &str| SelectorNode::Class(name.to_owned()))
        .parse_next(input)
}

fn attribute_operator(input: &mut &str) -> ModalResult<AttributeOperator> {
    alt((
        "~=".value(AttributeOperator::Includes),
        "|=".value(AttributeOperator::DashMatch),
        "^=".value(AttributeOperator::Prefix),
        "$=".value(AttributeOperator::Suffix),
        "*=".value(AttributeOperator::Substring),
        "=".value(AttributeOperator::Equal),
    ))
    .parse_next(input)
}

fn attribute_matcher(input: &mut &str) -> ModalResult<AttributeMatcher> {
    let operator = attribute_operator.parse_next(input)?;
    ws(input)?;
    let value = cut_err(
        alt((
            quoted_string.map(AttributeValue::String),
            ident.map(|v: &str| AttributeValue::Identifier(v.to_owned())),
        ))
        .context(StrContext::Expected(StrContextValue::Description(
            "attribute value",
        ))),
    )
    .parse_next(input)?;
    Ok(AttributeMatcher { operator, value })
}

fn attribute_body(input: &mut &str) -> ModalResult<AttributeSelector> {
    ws(input)?;
    let attribute_name = ident
        .context(StrContext::Expected(StrContextValue::Description(
            "attribute name",
        )))
        .parse_next(input)?
        .to_owned();
    ws(input)?;
    let matcher = opt(attribute_matcher).parse_next(input)?;
    let flags = if matcher.is_some() {
        ws(input)?;
        opt(ident).parse_next(input)?.map(str::to_owned)
    } else {
        None
    };
    ws(input)?;
    ']'.context(StrContext::Expected(StrContextValue::CharLiteral(']')))
        .parse_next(input)?;
    Ok(AttributeSelector {
        name: attribute_name,
        matcher,
        flags,
    })
}

fn attribute_selector(input: &mut &str) -> ModalResult<SelectorNode> {
    preceded('[', cut_err(attribute_body))
        .map(SelectorNode::Attribute)
        .parse_next(input)
}

fn takes_selector_list(name: &str) -> bool {
    SELECTOR_LIST_PSEUDO_CLASSES
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(name))
}

fn pseudo_element(input: &mut &str) -> ModalResult<SelectorNode> {
    "::".parse_next(input)?;
    let name = cut_err(ident).parse_next(input)?.to_owned();
    let argument = if input.starts_with('(') {
        Some(cut_err(parenthesized_raw).parse_next(input)?.to_owned())
    } else {
        None
    };
    Ok(SelectorNode::PseudoElement(PseudoElementSelector {
        name,
        argument,
    }))
}

fn pseudo_class(input: &mut &str, depth: usize) -> ModalResult<SelectorNode> {
    ':'.parse_next(input)?;
    let name = cut_err(ident)
        .context(StrContext::Expected(StrContextValue::Description(
            "pseudo-class name",
        )))
        .parse_next(input)?
        .to_owned();

    let argument = if !input.starts_with('(') {
        None
    } else if takes_selector_list(&name) {
        if depth >= MAX_NESTING_DEPTH {
            return Err(ErrMode::from_input(input).cut());
        }
        '('.parse_next(input)?;
        let list =
            cut_err(|i: &mut &str| relative_selector_list(i, depth + 1)).parse_next(input)?;
        ws(input)?;
        cut_err(')')
            .context(StrContext::Expected(StrContextValue::CharLiteral(')')))
            .parse_next(input)?;
        Some(PseudoArgument::SelectorList(list))
    } else {
        let raw = cut_err(parenthesized_raw)
            .context(StrContext::Expected(StrContextValue::CharLiteral(')')))
            .parse_next(input)?;
        Some(PseudoArgument::Raw(raw.to_owned()))
    };

    Ok(SelectorNode::PseudoClass(PseudoClassSelector { name, argument }))
}

fn subclass_selector(input: &mut &str, depth: usize) -> ModalResult<SelectorNode> {
    alt((
        id_selector,
        class_selector,
        attribute_selector,
        pseudo_element,
        |i: &mut &str| pseudo_class(i, depth),
    ))
    .parse_next(input)
}

fn compound_selector(input: &mut &str, depth: usize) -> ModalResult<Vec<SelectorNode>> {
    let mut nodes = Vec::new();
    if let Some(node) = opt(type_selector).parse_next(input)? {
        nodes.push(node);
    }
    while let Some(node) = opt(|i: &mut &str| subclass_selector(i, depth)).parse_next(input)?
    {
        nodes.push(node);
    }
    if nodes.is_empty() {
        return Err(ErrMode::from_input(input));
    }
    Ok(nodes)
}

/// `depth` counts the selector-list arguments enclosing this selector.
fn complex_selector(input: &mut &str, relative: bool, depth: usize) -> ModalResult<Selector> {
    ws(input)?;
    let mut children = Vec::new();

    if relative {
        if let Some(leading) = opt(combinator).parse_next(input)? {
            children.push(SelectorNode::Combinator(leading));
            ws(input)?;
        }
    }

    let first = (|i: &mut &str| compound_selector(i, depth))
        .context(StrContext::Expected(StrContextValue::Description(
            "selector",
        )))
        .parse_next(input)?;
    children.extend(first);

    loop {
        let checkpoint = input.checkpoint();
        let before = input.len();
        ws(input)?;
        let had_whitespace = input.len() < before;

        if let Some(explicit) = opt(combinator).parse_next(input)? {
            ws(input)?;
            let next = cut_err(|i: &mut &str| compound_selector(i, depth))
                .context(StrContext::Expected(StrContextValue::Description(
                    "selector after combinator",
                )))
                .parse_next(input)?;
            children.push(SelectorNode::Combinator(explicit));
            children.extend(next);
        } else if had_whitespace {
            match opt(|i: &mut &str| compound_selector(i, depth)).parse_next(input)? {
                Some(next) => {
                    children.push(SelectorNode::Combinator(Combinator::Descendant));
                    children.extend(next);
                }
                None => {
                    input.reset(&checkpoint);
                    break;
                }
            }
        } else {
            input.reset(&checkpoint);
            break;
        }
    }

    Ok(Selector { children })
}

fn selector(input: &mut &str) -> ModalResult<Selector> {
    complex_selector(input, false, 0)
}

fn relative_selector_list(input: &mut &str, depth: usize) -> ModalResult<Vec<Selector>> {
    separated(
        1..,
        |i: &mut &str| complex_selector(i, true, depth),
        (ws, ','),
    )
    .parse_next(input)
}

pub(super) fn selector_only(input: &mut &str) -> ModalResult<Selector> {
    let parsed = selector(input)?;
    ws(input)?;
    Ok(parsed)
}

pub(super) fn selector_list(input: &mut &str) -> ModalResult<Vec<Selector>> {
    let list = separated(1.., selector, (ws, ',')).parse_next(input)?;
    ws(input)?;
    Ok(list)
}

// -- Declaration blocks -----------------------------------------------------

/// Byte index where a declaration value ends: the first `;` or `}` outside of
/// strings and nested brackets, or an unbalanced closing bracket.
fn find_value_end(s: &str) -> usize {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut chars = s.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            c if quote == Some(c) => quote = None,
            _ if quote.is_some() => {}
            '"' | '\'' => quote = Some(c),
            '(' | '[' => depth += 1,
            ')' | ']' => {
                if depth == 0 {
                    return i;
                }
                depth -= 1;
            }
            ';' | '}' if depth == 0 => return i,
            _ => {}
        }
    }
    s.len()
}

fn declaration_value<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    let source: &'i str = *input;
    let end = find_value_end(source);
    *input = &source[end..];
    Ok(&source[..end])
}

/// Splits a trailing `!important` off a raw value.
fn split_important(raw: &str) -> (&str, bool) {
    let value = raw.trim();
    if let Some(bang) = value.rfind('!') {
        if value[bang + 1..].trim_start().eq_ignore_ascii_case(IMPORTANT_FLAG) {
            return (value[..bang].trim_end(), true);
        }
    }
    (value, false)
}

fn declaration(input: &mut &str) -> ModalResult<Declaration> {
    let property = ident
        .context(StrContext::Expected(StrContextValue::Description(
            "property name",
        )))
        .parse_next(input)?
        .to_owned();
    ws(input)?;
    cut_err(':')
        .context(StrContext::Expected(StrContextValue::CharLiteral(':')))
        .parse_next(input)?;
    let raw = declaration_value.parse_next(input)?;
    let (value, important) = split_important(raw);
    if value.is_empty() && !property.starts_with(CUSTOM_PROPERTY_PREFIX) {
        return Err(ErrMode::from_input(input).cut());
    }
    Ok(Declaration {
        property,
        value: value.to_owned(),
        important,
    })
}

pub(super) fn block(input: &mut &str) -> ModalResult<Block> {
    ws(input)?;
    '{'.context(StrContext::Expected(StrContextValue::CharLiteral('{')))
        .parse_next(input)?;

    let mut declarations = Vec::new();
    loop {
        ws(input)?;
        if opt('}').parse_next(input)?.is_some() {
            break;
        }
        if opt(';').parse_next(input)?.is_some() {
            continue;
        }
        declarations.push(
            cut_err(declaration)
                .context(StrContext::Label("declaration"))
                .parse_next(input)?,
        );
        let closed = cut_err(alt((';'.value(false), '}'.value(true))))
            .context(StrContext::Expected(StrContextValue::CharLiteral(';')))
            .parse_next(input)?;
        if closed {
            break;
        }
    }

    ws(input)?;
    Ok(Block { declarations })
}

// -- Media queries ----------------------------------------------------------

fn media_feature_from_raw(raw: &str) -> MediaQueryPart {
    let trimmed = raw.trim();
    match trimmed.split_once(':') {
        Some((name, value)) => {
            let (name, value) = (name.trim(), value.trim());
            if is_plain_ident(name) && !value.is_empty() {
                return MediaQueryPart::Feature {
                    name: name.to_owned(),
                    value: Some(value.to_owned()),
                };
            }
        }
        None if is_plain_ident(trimmed) => {
            return MediaQueryPart::Feature {
                name: trimmed.to_owned(),
                value: None,
            };
        }
        None => {}
    }
    MediaQueryPart::Raw(trimmed.to_owned())
}

fn media_query_part(input: &mut &str) -> ModalResult<MediaQueryPart> {
    alt((
        parenthesized_raw.map(media_feature_from_raw),
        ident.map(|keyword: &str| MediaQueryPart::Keyword(keyword.to_owned())),
    ))
    .parse_next(input)
}

fn media_query(input: &mut &str) -> ModalResult<MediaQuery> {
    ws(input)?;
    let first = media_query_part
        .context(StrContext::Expected(StrContextValue::Description(
            "media query",
        )))
        .parse_next(input)?;
    let mut parts = vec![first];
    loop {
        let checkpoint = input.checkpoint();
        ws(input)?;
        match opt(media_query_part).parse_next(input)? {
            Some(part) => parts.push(part),
            None => {
                input.reset(&checkpoint);
                break;
            }
        }
    }
    Ok(MediaQuery { parts })
}

pub(super) fn media_query_list(input: &mut &str) -> ModalResult<MediaQueryList> {
    let queries = separated(1.., media_query, (ws, ',')).parse_next(input)?;
    ws(input)?;
    Ok(MediaQueryList { queries })
}
