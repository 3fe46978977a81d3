use filter_syntax::css::{extract_extended_nodes, generate_selector};
use filter_syntax::parse::{agent, css_injection, network};
use filter_syntax::AdblockSyntax;

fn main() {
    let lines = [
        "! [Adblock Plus 2.0; uBlock Origin 1.40]",
        "@@||example.com^$script,domain=example.org",
        "/ad.js$m1=/v1/",
        "body > div:has(> .ad) { padding: 0!important; }",
        "section:-abp-has(.sponsored):remove()",
        "body > section[ad-source] { remove: true; padding: 0; }",
    ];

    for line in lines {
        println!("{line}");

        if let Some(ast) = agent::parse(line) {
            for member in &ast.members {
                println!("  agent: {member}");
            }
            println!("  => {}", agent::generate(&ast));
            continue;
        }

        match css_injection::parse(line) {
            Ok(Some(ast)) => {
                for selector in &ast.selectors {
                    let extended = extract_extended_nodes(selector);
                    println!(
                        "  selector: {} ({} extended pseudo-classes)",
                        generate_selector(selector),
                        extended.pseudos.len()
                    );
                }
                match css_injection::generate(&ast, AdblockSyntax::AdGuard) {
                    Ok(text) => println!("  => {text}"),
                    Err(e) => println!("  error: {e}"),
                }
            }
            Ok(None) => {
                let ast = network::parse(line);
                println!(
                    "  pattern: {} (exception: {}, regex: {})",
                    ast.pattern, ast.exception, ast.regex
                );
                for modifier in &ast.modifiers {
                    println!("  modifier: {modifier}");
                }
                println!("  => {}", network::generate(&ast));
            }
            Err(e) => println!("  error: {e}"),
        }
    }
}
