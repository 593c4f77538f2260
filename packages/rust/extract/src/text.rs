//! Flattening of HTML subtrees into Markdown-ready plain text.
//!
//! The HTML5 parser has already decoded entities by the time we see the
//! tree, so `&lt;b&gt;` in the source arrives here as the literal text
//! `<b>` and is never re-parsed as markup.

use scraper::ElementRef;

/// Literal run substituted for a blank-fill input field.
pub const BLANK_RUN: &str = "______";

/// Flatten an element's children to plain text and trim the result.
pub fn flatten(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    flatten_into(el, &mut out);
    // The parser decodes &nbsp; to U+00A0; the output wants plain spaces.
    out.replace('\u{a0}', " ").trim().to_string()
}

fn flatten_into(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(&text.text);
            continue;
        }
        let Some(child_el) = ElementRef::wrap(child) else {
            continue;
        };
        match child_el.value().name() {
            // Dropped with their content. The free-response area is
            // reported structurally, not through the flattened text.
            "script" | "style" | "textarea" => {}
            "br" => out.push('\n'),
            "input" => {
                if child_el.value().classes().any(|c| c == "blank") {
                    out.push_str(BLANK_RUN);
                }
            }
            "b" => {
                out.push_str("**");
                flatten_into(child_el, out);
                out.push_str("**");
            }
            _ => flatten_into(child_el, out),
        }
    }
}
