//! Owned document tree produced by resume templates.
//!
//! Attributes keep insertion order, so two trees built from the same input
//! serialize to identical bytes.

/// A node in the rendered document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    /// Concatenated text of this node and all of its descendants, in document order.
    #[cfg(test)]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    #[cfg(test)]
    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Depth-first search for elements whose attribute `name` equals `value`.
    #[cfg(test)]
    pub fn find_all<'a>(&'a self, name: &str, value: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk(&mut |el| {
            if el.attr_value(name) == Some(value) {
                found.push(el);
            }
        });
        found
    }

    #[cfg(test)]
    fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        if let Node::Element(el) = self {
            visit(el);
            for child in &el.children {
                child.walk(visit);
            }
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends the child only when `Some`; the conditional-rendering building block.
    pub fn child_opt(mut self, child: Option<impl Into<Node>>) -> Self {
        if let Some(child) = child {
            self.children.push(child.into());
        }
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(Node::text(value))
    }

    #[cfg(test)]
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}
