use filter_syntax::css::{parse_selector, MAX_NESTING_DEPTH};
use filter_syntax::parse::{agent, css_injection, modifier, network};
use filter_syntax::{AdblockSyntax, AgentMember, CssBody, CssInjectionError, Modifier};

#[test]
fn empty_input() {
    assert_eq!(agent::parse(""), None);
    assert_eq!(network::parse("").pattern, "");
    assert!(modifier::parse("").modifiers.is_empty());
    assert_eq!(css_injection::parse("").unwrap(), None);
}

#[test]
fn exception_marker_only() {
    let rule = network::parse("@@");
    assert!(rule.exception);
    assert_eq!(rule.pattern, "");
    assert_eq!(network::generate(&rule), "@@");
}

#[test]
fn separator_without_modifiers() {
    for (raw, pattern) in [
        ("||example.com$", "||example.com"),
        ("||example.com$ , ", "||example.com"),
        ("@@/ads/$", "/ads/"),
        ("a$$", "a$$"),
        ("a$b$,", "a$b$,"),
    ] {
        let rule = network::parse(raw);
        assert!(rule.modifiers.is_empty(), "{raw:?}");
        assert_eq!(rule.pattern, pattern, "{raw:?}");
        assert_eq!(network::parse(&network::generate(&rule)), rule, "{raw:?}");
    }
}

#[test]
fn escaped_separators() {
    let rule = network::parse(r"||example.com/a\$b$script");
    assert_eq!(rule.pattern, r"||example.com/a\$b");
    assert_eq!(rule.modifiers, vec![Modifier::new("script")]);

    let rule = network::parse(r"||example.com\\$script");
    assert_eq!(rule.pattern, r"||example.com\\");
}

#[test]
fn non_ascii_text() {
    let rule = network::parse("||пример.рф^$domain=сайт.рф");
    assert_eq!(rule.pattern, "||пример.рф^");
    assert_eq!(
        rule.modifiers,
        vec![Modifier::new("domain").with_value("сайт.рф")]
    );

    assert_eq!(
        agent::parse("! [Блокировщик 1.0]").unwrap().members,
        vec![AgentMember::new("Блокировщик", Some("1.0"))]
    );

    let body = css_injection::parse("div[title=\"реклама\"] { display: none; }")
        .unwrap()
        .unwrap();
    assert_eq!(body.selectors[0], parse_selector("div[title='реклама']").unwrap());
}

#[test]
fn braces_and_markers_inside_strings() {
    let body = css_injection::parse(r#"a[title="{x}"] { content: "}"; }"#)
        .unwrap()
        .unwrap();
    assert_eq!(
        css_injection::generate(&body, AdblockSyntax::AdGuard).unwrap(),
        r#"a[title="{x}"] { content: "}"; }"#
    );

    assert_eq!(
        css_injection::parse(r#"a[title=":remove()"]"#).unwrap(),
        None
    );
}

#[test]
fn nested_parentheses_in_style() {
    let raw = "div:style(background: url(a.png) !important;)";
    let body = css_injection::parse(raw).unwrap().unwrap();
    assert_eq!(
        css_injection::generate(&body, AdblockSyntax::UblockOrigin).unwrap(),
        raw
    );
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert!(css_injection::is_ublock_css_injection("  body:remove()  "));
    assert!(css_injection::is_adguard_css_injection("\tbody { padding: 0; }\n"));
}

#[test]
fn remove_property_case_and_value() {
    let body = css_injection::parse("body { REMOVE: true; }").unwrap().unwrap();
    assert_eq!(body.body, CssBody::Remove);
    assert!(body.is_remove());

    let body = css_injection::parse("body { remove: false; }").unwrap().unwrap();
    assert!(matches!(body.body, CssBody::Declarations(_)));
}

#[test]
fn remove_checks_count_before_mixing() {
    assert!(matches!(
        css_injection::parse("body { remove: true; padding: 0; remove: true; }"),
        Err(CssInjectionError::MultipleRemoveProperties { .. })
    ));
}

#[test]
fn pseudo_class_arguments_are_not_normalized() {
    let selector = parse_selector("li:nth-child( 2n+1 ):contains(  a  b )").unwrap();
    assert_eq!(
        selector.to_string(),
        "li:nth-child( 2n+1 ):contains(  a  b )"
    );
}

#[test]
fn deeply_nested_selector_lists() {
    let mut raw = String::from("div");
    for _ in 0..32 {
        raw = format!("div:not({raw})");
    }
    let selector = parse_selector(&raw).unwrap();
    assert_eq!(selector.to_string(), raw);
}

fn nested_not(depth: usize) -> String {
    format!("a{}div{}", ":not(".repeat(depth), ")".repeat(depth))
}

#[test]
fn nesting_limit_is_inclusive() {
    let raw = nested_not(MAX_NESTING_DEPTH);
    assert_eq!(parse_selector(&raw).unwrap().to_string(), raw);
    assert!(parse_selector(&nested_not(MAX_NESTING_DEPTH + 1)).is_err());
}

#[test]
fn excessive_nesting_is_an_error() {
    for depth in [192, 10_000] {
        let raw = format!("{} {{ padding: 0; }}", nested_not(depth));
        assert!(matches!(
            css_injection::parse(&raw),
            Err(CssInjectionError::InvalidSelectorSyntax { .. })
        ));
        let raw = format!("{}:style(padding: 0)", nested_not(depth));
        assert!(matches!(
            css_injection::parse(&raw),
            Err(CssInjectionError::InvalidSelectorSyntax { .. })
        ));
    }
}
