use std::fmt::{self, Display};

/// Escapes text and attribute values exactly once, at serialization time.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element {
        tag: &'static str,
        attrs: Vec<(&'static str, String)>,
        children: Vec<Node>,
    },
    Text(String),
}

impl Node {
    pub fn elem(tag: &'static str) -> Self {
        Node::Element {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        if let Node::Element { attrs, .. } = &mut self {
            attrs.push((name, value.into()));
        }
        self
    }

    pub fn child(mut self, node: Node) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "br" | "hr" | "link" | "meta")
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(text) => f.write_str(&escape(text)),
            Node::Element {
                tag,
                attrs,
                children,
            } => {
                write!(f, "<{tag}")?;
                for (name, value) in attrs {
                    write!(f, " {name}=\"{}\"", escape(value))?;
                }
                write!(f, ">")?;
                if is_void(tag) {
                    return Ok(());
                }
                for child in children {
                    child.fmt(f)?;
                }
                write!(f, "</{tag}>")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escape_special_characters() {
        assert_eq!(escape(r#"<a href="x">&"#), "&lt;a href=&quot;x&quot;&gt;&amp;");
    }

    #[test]
    fn escape_plain_text_unchanged() {
        assert_eq!(escape("LOAD_CONST"), "LOAD_CONST");
    }

    #[test]
    fn escape_is_applied_once() {
        // already-escaped input is treated as plain text, not re-interpreted
        assert_eq!(escape("&amp;"), "&amp;amp;");
    }

    #[test]
    fn render_element_with_attrs() {
        let node = Node::elem("a")
            .attr("id", "jump_f_4")
            .attr("class", "value")
            .child(Node::text("4"));
        assert_eq!(node.to_string(), r#"<a id="jump_f_4" class="value">4</a>"#);
    }

    #[test]
    fn render_escapes_text_and_attrs() {
        let node = Node::elem("td")
            .attr("title", r#"a "quoted" <desc>"#)
            .child(Node::text("1 < 2"));
        assert_eq!(
            node.to_string(),
            r#"<td title="a &quot;quoted&quot; &lt;desc&gt;">1 &lt; 2</td>"#
        );
    }

    #[test]
    fn render_void_element() {
        let node = Node::elem("link")
            .attr("rel", "stylesheet")
            .attr("href", "style.css");
        assert_eq!(node.to_string(), r#"<link rel="stylesheet" href="style.css">"#);
    }

    #[test]
    fn render_empty_cell() {
        assert_eq!(Node::elem("td").to_string(), "<td></td>");
    }

    #[test]
    fn render_nested_elements() {
        let row = Node::elem("tr")
            .child(Node::elem("td").child(Node::text("0")))
            .child(Node::elem("td").child(Node::text("RETURN_VALUE")));
        assert_eq!(row.to_string(), "<tr><td>0</td><td>RETURN_VALUE</td></tr>");
    }
}
