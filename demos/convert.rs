use filter_syntax::parse::css_injection;
use filter_syntax::AdblockSyntax;

fn main() {
    let bodies = [
        "body { padding: 0!important; }",
        "body, section:has(.something):style(padding-top: 0 !important; color: red !important;)",
        "div.ad:remove()",
        "@media (min-width: 1000px) { body { remove: true; } }",
        ".not-an-injection",
    ];

    for raw in bodies {
        println!("{raw}");
        for target in [AdblockSyntax::AdGuard, AdblockSyntax::UblockOrigin] {
            match css_injection::convert(raw, target) {
                Ok(Some(text)) => println!("  {target}: {text}"),
                Ok(None) => println!("  {target}: (not a CSS injection body)"),
                Err(e) => println!("  {target}: error: {e}"),
            }
        }
    }
}
