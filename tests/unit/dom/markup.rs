use super::*;

#[test]
fn renders_nested_elements_with_attributes() {
    let mut doc = Document::new();
    let nav = doc.append_new(doc.body(), "nav");
    let img = doc.append_new(nav, "img");
    doc.set_attr(img, "src", "/images/logo.svg");
    doc.set_attr(img, "alt", "logo");
    let p = doc.append_new(nav, "p");
    doc.set_class(p, Some("font-bold"));
    doc.set_text(p, "My Portfolio");

    assert_eq!(
        to_html(&doc, nav),
        "<nav><img src=\"/images/logo.svg\" alt=\"logo\"><p class=\"font-bold\">My Portfolio</p></nav>"
    );
}

#[test]
fn weight_renders_as_inline_style() {
    let mut doc = Document::new();
    let span = doc.append_new(doc.body(), "span");
    doc.set_weight(span, 100.0);
    doc.set_text(span, "H");
    assert_eq!(
        to_html(&doc, span),
        "<span style=\"font-variation-settings: 'wght' 100\">H</span>"
    );
    assert_eq!(weight_style(441.5), "font-variation-settings: 'wght' 441.5");
}

#[test]
fn text_and_attrs_are_escaped() {
    let mut doc = Document::new();
    let p = doc.append_new(doc.body(), "p");
    doc.set_attr(p, "title", "a \"b\" & c");
    doc.set_text(p, "<R&D>");
    assert_eq!(
        to_html(&doc, p),
        "<p title=\"a &quot;b&quot; &amp; c\">&lt;R&amp;D&gt;</p>"
    );
}

#[test]
fn empty_class_is_not_rendered() {
    let mut doc = Document::new();
    let ul = doc.append_new(doc.body(), "ul");
    doc.set_class(ul, Some(""));
    assert_eq!(to_html(&doc, ul), "<ul></ul>");
}
