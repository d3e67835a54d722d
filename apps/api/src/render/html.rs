//! HTML serialization for rendered document trees.

use super::node::{Element, Node};

/// Serializes a node tree to an HTML fragment.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Wraps a rendered fragment in a minimal HTML5 page, for print or direct viewing.
pub fn standalone_page(title: &str, body: &Node) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>{}</title></head><body>{}</body></html>",
        escape(title),
        to_html(body)
    )
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&escape(text)),
        Node::Element(el) => write_element(el, out),
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(el.tag);
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }
    out.push('>');
    for child in &el.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(el.tag);
    out.push('>');
}

/// Escape characters with meaning in HTML text and attribute values.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_attributes_in_order() {
        let node: Node = Element::new("a")
            .attr("href", "https://example.com")
            .attr("target", "_blank")
            .text("View")
            .into();
        assert_eq!(
            to_html(&node),
            "<a href=\"https://example.com\" target=\"_blank\">View</a>"
        );
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let node: Node = Element::new("span")
            .attr("title", "\"quoted\" & 'single'")
            .text("<script>alert(1)</script>")
            .into();
        let html = to_html(&node);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("title=\"&quot;quoted&quot; &amp; &#39;single&#39;\""));
    }

    #[test]
    fn test_empty_element_has_closing_tag() {
        let node: Node = Element::new("i").attr("data-icon", "mail").into();
        assert_eq!(to_html(&node), "<i data-icon=\"mail\"></i>");
    }

    #[test]
    fn test_standalone_page_wraps_fragment() {
        let body: Node = Element::new("div").text("hi").into();
        let page = standalone_page("Jane & Co - Resume", &body);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Jane &amp; Co - Resume</title>"));
        assert!(page.ends_with("<body><div>hi</div></body></html>"));
    }
}
