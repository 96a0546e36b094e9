use crate::dom::document::{Document, ElementId};

const VOID_TAGS: [&str; 4] = ["img", "br", "hr", "input"];

/// Inline style carrying a glyph's variable-font weight.
pub fn weight_style(weight: f64) -> String {
    format!("font-variation-settings: 'wght' {weight}")
}

/// Serialize `root` and its subtree to HTML.
pub fn to_html(doc: &Document, root: ElementId) -> String {
    let mut out = String::new();
    write_element(doc, root, &mut out);
    out
}

fn write_element(doc: &Document, el: ElementId, out: &mut String) {
    let Some(node) = doc.node(el) else {
        return;
    };

    out.push('<');
    out.push_str(&node.tag);
    for (name, value) in &node.attrs {
        push_attr(out, name, value);
    }
    if let Some(class) = &node.class {
        push_attr(out, "class", class);
    }
    if let Some(w) = node.weight {
        push_attr(out, "style", &weight_style(w));
    }
    out.push('>');

    if VOID_TAGS.contains(&node.tag.as_str()) {
        return;
    }

    if let Some(text) = &node.text {
        escape_into(out, text, false);
    }
    for &child in &node.children {
        write_element(doc, child, out);
    }

    out.push_str("</");
    out.push_str(&node.tag);
    out.push('>');
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(out, value, true);
    out.push('"');
}

fn escape_into(out: &mut String, s: &str, attr: bool) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dom/markup.rs"]
mod tests;
