#![allow(dead_code)]

use filter_syntax::css::{
    parse_media_query_list, parse_selector, AttributeMatcher, AttributeOperator,
    AttributeSelector, AttributeValue, Block, Combinator, Declaration, PseudoArgument,
    PseudoClassSelector, PseudoElementSelector, Selector, SelectorNode,
};
use filter_syntax::utils::is_regex_pattern;
use filter_syntax::{Agent, AgentMember, CssBody, CssRuleBody, Modifier, NetworkRule};
use proptest::prelude::*;

// --- Fixed vocabularies ---
// Agent names never contain digits or dots, versions always start with one.

const ADBLOCK_NAMES: &[&str] = &["AdGuard", "uBlock Origin", "Adblock Plus", "Brave"];
const VERSIONS: &[&str] = &["1.0", "2.0.1", "1.40 beta", "3"];

const SELECTORS: &[&str] = &[
    "body",
    "div.ad",
    "#main .banner",
    "div > p",
    "section:has(.something)",
    "div:not(.a, .b)",
    r#"a[href^="http"]"#,
    "p:contains(/^REKLAMA$/)",
    "li:nth-child(3n+0)",
    "div::before",
];

const RAW_PSEUDO_CLASSES: &[&str] = &["nth-child", "contains", "matches-css", "lang"];
const PLAIN_PSEUDO_CLASSES: &[&str] = &["hover", "first-child", "empty"];
const SELECTOR_LIST_PSEUDO_CLASSES: &[&str] = &["not", "is", "has", "-abp-has", "if-not"];
const ATTRIBUTE_FLAGS: &[&str] = &["i", "s"];
const PSEUDO_ELEMENTS: &[&str] = &["before", "after", "first-line"];
const RAW_ARGUMENTS: &[&str] = &["2n+1", "odd", "/^ad$/", "a (b) c", "-n+3"];

const PROPERTIES: &[&str] = &["padding", "margin", "color", "display", "background"];
const VALUES: &[&str] = &["0", "2px", "red", "none", "url(a.png) no-repeat"];
const MEDIA_QUERIES: &[&str] = &[
    "(min-width: 1000px)",
    "(min-width: 1000px) and (max-width: 2000px)",
    "screen, print",
    "only screen and (color)",
];

pub fn arb_agent_member() -> impl Strategy<Value = AgentMember> {
    (
        prop::sample::select(ADBLOCK_NAMES),
        prop::option::of(prop::sample::select(VERSIONS)),
    )
        .prop_map(|(name, version)| AgentMember::new(name, version))
}

pub fn arb_agent() -> impl Strategy<Value = Agent> {
    prop::collection::vec(arb_agent_member(), 0..4).prop_map(|members| Agent {
        members,
        ..Agent::default()
    })
}

pub fn arb_modifier() -> impl Strategy<Value = Modifier> {
    (
        "[a-z][a-z-]{0,10}",
        prop::option::of("[a-z0-9.|~/^]{0,12}"),
        any::<bool>(),
    )
        .prop_map(|(name, value, negated)| Modifier {
            name,
            value,
            negated,
        })
}

/// Patterns never contain `$` and never start with the exception marker.
pub fn arb_pattern() -> impl Strategy<Value = String> {
    prop_oneof![
        "[|]{0,2}[a-z0-9.-]{1,12}[\\^]?",
        "/[a-z0-9.?+*]{1,10}/",
        "[a-z0-9./*]{1,12}",
    ]
}

pub fn arb_network_rule() -> impl Strategy<Value = NetworkRule> {
    (
        any::<bool>(),
        arb_pattern(),
        prop::collection::vec(arb_modifier(), 0..4),
    )
        .prop_map(|(exception, pattern, modifiers)| NetworkRule {
            exception,
            regex: is_regex_pattern(&pattern),
            pattern,
            modifiers,
            ..NetworkRule::default()
        })
}

/// Network rule text: pattern, optional separator and loose modifier text.
pub fn arb_network_text() -> impl Strategy<Value = String> {
    (
        prop::option::of(Just("@@")),
        arb_pattern(),
        prop::option::of("[a-z~=,]{0,15}"),
    )
        .prop_map(|(exception, pattern, modifiers)| {
            let mut raw = exception.unwrap_or_default().to_owned();
            raw.push_str(&pattern);
            if let Some(modifiers) = modifiers {
                raw.push('$');
                raw.push_str(&modifiers);
            }
            raw
        })
}

pub fn arb_declaration() -> impl Strategy<Value = Declaration> {
    (
        prop::sample::select(PROPERTIES),
        prop::sample::select(VALUES),
        any::<bool>(),
    )
        .prop_map(|(property, value, important)| Declaration {
            property: property.to_owned(),
            value: value.to_owned(),
            important,
        })
}

pub fn arb_css_body() -> impl Strategy<Value = CssBody> {
    prop_oneof![
        1 => Just(CssBody::Remove),
        3 => prop::collection::vec(arb_declaration(), 1..4)
            .prop_map(|declarations| CssBody::Declarations(Block { declarations })),
    ]
}

pub fn arb_css_rule_body(with_media: bool) -> impl Strategy<Value = CssRuleBody> {
    let media = if with_media {
        prop::option::of(prop::sample::select(MEDIA_QUERIES)).boxed()
    } else {
        Just(None).boxed()
    };
    (
        media,
        prop::collection::vec(arb_any_selector(), 1..4),
        arb_css_body(),
    )
        .prop_map(|(media, selectors, body)| CssRuleBody {
            media_query_list: media.map(|m| parse_media_query_list(m).unwrap()),
            selectors,
            body,
        })
}

/// AdGuard-form text with irregular spacing and optional trailing semicolon.
pub fn arb_adguard_text() -> impl Strategy<Value = String> {
    (
        prop::option::of(prop::sample::select(MEDIA_QUERIES)),
        prop::collection::vec(prop::sample::select(SELECTORS), 1..3),
        prop::collection::vec(arb_declaration(), 1..4),
        " {0,2}",
        any::<bool>(),
    )
        .prop_map(|(media, selectors, declarations, space, trailing)| {
            let body = declarations
                .iter()
                .map(|d| {
                    let flag = if d.important { "!important" } else { "" };
                    format!("{}:{space}{}{flag}", d.property, d.value)
                })
                .collect::<Vec<_>>()
                .join(";");
            let semicolon = if trailing { ";" } else { "" };
            let rule = format!(
                "{}{space}{{{space}{body}{semicolon}{space}}}",
                selectors.join(",")
            );
            match media {
                Some(media) => format!("@media {media} {{{space}{rule}{space}}}"),
                None => rule,
            }
        })
}

// --- Generated selectors ---

pub fn arb_ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,8}"
}

fn arb_attribute_operator() -> impl Strategy<Value = AttributeOperator> {
    prop::sample::select(vec![
        AttributeOperator::Equal,
        AttributeOperator::Includes,
        AttributeOperator::DashMatch,
        AttributeOperator::Prefix,
        AttributeOperator::Suffix,
        AttributeOperator::Substring,
    ])
}

/// String values avoid quotes and backslashes, which are stored escaped.
fn arb_attribute_value() -> impl Strategy<Value = AttributeValue> {
    prop_oneof![
        "[a-zA-Z0-9 ._/:-]{0,10}".prop_map(AttributeValue::String),
        arb_ident().prop_map(AttributeValue::Identifier),
    ]
}

pub fn arb_attribute() -> impl Strategy<Value = AttributeSelector> {
    (
        arb_ident(),
        prop::option::of((
            (arb_attribute_operator(), arb_attribute_value())
                .prop_map(|(operator, value)| AttributeMatcher { operator, value }),
            prop::option::of(prop::sample::select(ATTRIBUTE_FLAGS)),
        )),
    )
        .prop_map(|(name, matcher)| match matcher {
            Some((matcher, flags)) => AttributeSelector {
                name,
                matcher: Some(matcher),
                flags: flags.map(str::to_owned),
            },
            None => AttributeSelector {
                name,
                matcher: None,
                flags: None,
            },
        })
}

fn arb_raw_argument() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(RAW_ARGUMENTS).prop_map(str::to_owned),
        "[a-z0-9+-]{1,6}",
    ]
}

/// Subclass nodes without selector-list arguments.
fn arb_simple_node() -> impl Strategy<Value = SelectorNode> {
    prop_oneof![
        arb_ident().prop_map(SelectorNode::Id),
        arb_ident().prop_map(SelectorNode::Class),
        arb_attribute().prop_map(SelectorNode::Attribute),
        prop::sample::select(PLAIN_PSEUDO_CLASSES).prop_map(|name| {
            SelectorNode::PseudoClass(PseudoClassSelector {
                name: name.to_owned(),
                argument: None,
            })
        }),
        (prop::sample::select(RAW_PSEUDO_CLASSES), arb_raw_argument()).prop_map(
            |(name, raw)| {
                SelectorNode::PseudoClass(PseudoClassSelector {
                    name: name.to_owned(),
                    argument: Some(PseudoArgument::Raw(raw)),
                })
            }
        ),
        prop::sample::select(PSEUDO_ELEMENTS).prop_map(|name| {
            SelectorNode::PseudoElement(PseudoElementSelector {
                name: name.to_owned(),
                argument: None,
            })
        }),
    ]
}

fn arb_combinator() -> impl Strategy<Value = Combinator> {
    prop::sample::select(vec![
        Combinator::Descendant,
        Combinator::Child,
        Combinator::NextSibling,
        Combinator::SubsequentSibling,
    ])
}

/// An optional type selector followed by subclass nodes, never empty.
fn arb_compound<S>(subclass: S) -> impl Strategy<Value = Vec<SelectorNode>>
where
    S: Strategy<Value = SelectorNode> + Clone,
{
    (
        prop::option::of(prop_oneof![Just("*".to_owned()), arb_ident()]),
        prop::collection::vec(subclass, 0..3),
    )
        .prop_filter("empty compound", |(type_name, rest)| {
            type_name.is_some() || !rest.is_empty()
        })
        .prop_map(|(type_name, rest)| {
            type_name
                .map(SelectorNode::Type)
                .into_iter()
                .chain(rest)
                .collect()
        })
}

/// Compounds joined by combinators. Relative selectors may open with an
/// explicit combinator, as in `:has(> .ad)`.
fn arb_complex<S>(subclass: S, relative: bool) -> impl Strategy<Value = Selector>
where
    S: Strategy<Value = SelectorNode> + Clone,
{
    let leading = if relative {
        prop::option::of(prop::sample::select(vec![
            Combinator::Child,
            Combinator::NextSibling,
            Combinator::SubsequentSibling,
        ]))
        .boxed()
    } else {
        Just(None).boxed()
    };
    (
        leading,
        arb_compound(subclass.clone()),
        prop::collection::vec((arb_combinator(), arb_compound(subclass)), 0..3),
    )
        .prop_map(|(leading, first, rest)| {
            let mut children: Vec<SelectorNode> =
                leading.map(SelectorNode::Combinator).into_iter().collect();
            children.extend(first);
            for (combinator, compound) in rest {
                children.push(SelectorNode::Combinator(combinator));
                children.extend(compound);
            }
            Selector { children }
        })
}

/// Subclass nodes, including selector-list pseudo-classes nested up to four
/// levels deep.
pub fn arb_subclass_node() -> impl Strategy<Value = SelectorNode> {
    arb_simple_node().prop_recursive(4, 24, 3, |inner| {
        (
            prop::sample::select(SELECTOR_LIST_PSEUDO_CLASSES),
            prop::collection::vec(arb_complex(inner, true), 1..3),
        )
            .prop_map(|(name, list)| {
                SelectorNode::PseudoClass(PseudoClassSelector {
                    name: name.to_owned(),
                    argument: Some(PseudoArgument::SelectorList(list)),
                })
            })
    })
}

pub fn arb_selector() -> impl Strategy<Value = Selector> {
    arb_complex(arb_subclass_node().boxed(), false)
}

/// Either a hand-picked selector or a generated one.
pub fn arb_any_selector() -> impl Strategy<Value = Selector> {
    prop_oneof![
        prop::sample::select(SELECTORS).prop_map(|s| parse_selector(s).unwrap()),
        arb_selector(),
    ]
}

/// Block content that holds no declarations: semicolons, whitespace and
/// comments only.
pub fn arb_blank_declarations() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(";".to_owned()),
            " {1,2}",
            "/\\*[a-z ]{0,6}\\*/",
        ],
        1..5,
    )
    .prop_map(|pieces| pieces.concat())
}

/// `div:not(div:not(...))` nested `depth` levels deep.
pub fn nested_not(depth: usize) -> String {
    format!("div{}a{}", ":not(".repeat(depth), ")".repeat(depth))
}
