//! Arena-based HTML parse tree.
//!
//! Reports are parsed once into a flat arena of nodes addressed by index;
//! each element owns its child indices and the byte span it occupies in the
//! source string. Spans make extraction (`outer_html`/`inner_html`) and
//! composition (insert before/after, replace) plain slice operations on the
//! original document, so a compose step never re-serializes untouched
//! markup.
//!
//! The parser is tolerant: unknown or mismatched closing tags are skipped,
//! unclosed elements end at end-of-input. Closing tags are matched against
//! the open-element stack, so nested elements with the same tag name resolve
//! to the correct outer span.

use std::collections::HashMap;

pub type NodeId = usize;

#[derive(Debug, Clone)]
pub enum NodeKind {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Byte range of the whole node in the source, opening tag through
    /// closing tag inclusive.
    pub span: (usize, usize),
    /// Byte range of the element content, exclusive of its tags. Equal to
    /// `span` for text nodes.
    pub inner_span: (usize, usize),
}

/// A parsed HTML document: the source string plus its node arena.
#[derive(Debug, Clone)]
pub struct Document {
    source: String,
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    ids: HashMap<String, NodeId>,
}

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

impl Document {
    /// Parse an HTML string into an arena. Never fails; malformed markup
    /// degrades to text nodes or truncated elements.
    pub fn parse(source: &str) -> Self {
        Parser::new(source).run()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Tag name of an element node, `None` for text nodes
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id].kind {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    /// Attribute value, `None` when absent or not an element
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[id].kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(n, _)| n.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    /// Whether an element carries any attribute with the given name prefix
    pub fn has_attr_with_prefix(&self, id: NodeId, prefix: &str) -> bool {
        match &self.nodes[id].kind {
            NodeKind::Element { attrs, .. } => {
                attrs.iter().any(|(n, _)| n.starts_with(prefix))
            }
            NodeKind::Text(_) => false,
        }
    }

    /// Space-separated class list membership test
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.attr(id, "class")
            .map(|c| c.split_whitespace().any(|item| item == class))
            .unwrap_or(false)
    }

    /// Element lookup by `id` attribute
    pub fn element_by_id(&self, id_value: &str) -> Option<NodeId> {
        self.ids.get(id_value).copied()
    }

    /// Full element markup, opening tag through closing tag
    pub fn outer_html(&self, id: NodeId) -> &str {
        let (start, end) = self.nodes[id].span;
        &self.source[start..end]
    }

    /// Element content without its own tags
    pub fn inner_html(&self, id: NodeId) -> &str {
        let (start, end) = self.nodes[id].inner_span;
        &self.source[start..end]
    }

    /// Concatenated, whitespace-normalized descendant text
    pub fn text(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        self.collect_text(id, &mut parts);
        let joined = parts.join(" ");
        joined.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn collect_text(&self, id: NodeId, out: &mut Vec<String>) {
        match &self.nodes[id].kind {
            NodeKind::Text(text) => {
                let decoded = decode_entities(text);
                if !decoded.trim().is_empty() {
                    out.push(decoded.trim().to_string());
                }
            }
            NodeKind::Element { .. } => {
                for &child in &self.nodes[id].children {
                    self.collect_text(child, out);
                }
            }
        }
    }

    /// All element ids in document order
    pub fn elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).filter(|&id| matches!(self.nodes[id].kind, NodeKind::Element { .. }))
    }

    /// Descendant element ids of `root` in document order, excluding `root`
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[root].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if matches!(self.nodes[id].kind, NodeKind::Element { .. }) {
                out.push(id);
            }
            for &child in self.nodes[id].children.iter().rev() {
                stack.push(child);
            }
        }
        out
    }
}

/// Decode the small entity set our own templates emit
pub fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

struct OpenElement {
    node: NodeId,
    tag: String,
}

struct Parser<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    stack: Vec<OpenElement>,
    ids: HashMap<String, NodeId>,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            nodes: Vec::new(),
            roots: Vec::new(),
            stack: Vec::new(),
            ids: HashMap::new(),
        }
    }

    fn run(mut self) -> Document {
        let mut text_start = self.pos;
        while self.pos < self.bytes.len() {
            if self.bytes[self.pos] == b'<' {
                self.flush_text(text_start, self.pos);
                self.consume_markup();
                text_start = self.pos;
            } else {
                self.pos += 1;
            }
        }
        self.flush_text(text_start, self.pos);

        // Unclosed elements end at end-of-input
        let end = self.source.len();
        while let Some(open) = self.stack.pop() {
            self.nodes[open.node].span.1 = end;
            self.nodes[open.node].inner_span.1 = end;
        }

        Document {
            source: self.source.to_string(),
            nodes: self.nodes,
            roots: self.roots,
            ids: self.ids,
        }
    }

    fn flush_text(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let text = &self.source[start..end];
        if text.trim().is_empty() {
            return;
        }
        let node = Node {
            kind: NodeKind::Text(text.to_string()),
            parent: self.stack.last().map(|open| open.node),
            children: Vec::new(),
            span: (start, end),
            inner_span: (start, end),
        };
        let id = self.push_node(node);
        self.attach(id);
    }

    fn push_node(&mut self, node: Node) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        id
    }

    fn attach(&mut self, id: NodeId) {
        match self.stack.last() {
            Some(open) => {
                let parent = open.node;
                self.nodes[parent].children.push(id);
            }
            None => self.roots.push(id),
        }
    }

    fn consume_markup(&mut self) {
        let start = self.pos;
        let rest = &self.source[self.pos..];

        if rest.starts_with("<!--") {
            self.pos = match rest.find("-->") {
                Some(offset) => self.pos + offset + 3,
                None => self.bytes.len(),
            };
            return;
        }
        if rest.starts_with("<!") || rest.starts_with("<?") {
            self.pos = match rest.find('>') {
                Some(offset) => self.pos + offset + 1,
                None => self.bytes.len(),
            };
            return;
        }
        if let Some(stripped) = rest.strip_prefix("</") {
            let (tag_part, consumed) = match stripped.find('>') {
                Some(offset) => (&stripped[..offset], 2 + offset + 1),
                None => (stripped, rest.len()),
            };
            let tag = tag_part.trim().to_ascii_lowercase();
            let close_end = self.pos + consumed;
            self.close_element(&tag, start, close_end);
            self.pos = close_end;
            return;
        }

        // Opening tag
        let tag_end = match rest.find('>') {
            Some(offset) => self.pos + offset + 1,
            None => {
                // Stray '<' in text; treat the rest as text
                self.pos = self.bytes.len();
                return;
            }
        };
        let tag_body = &self.source[start + 1..tag_end - 1];
        let self_closing = tag_body.ends_with('/');
        let tag_body = tag_body.trim_end_matches('/');

        let (tag, attrs) = parse_tag_body(tag_body);
        if tag.is_empty() {
            self.pos = tag_end;
            return;
        }

        let node = Node {
            kind: NodeKind::Element {
                tag: tag.clone(),
                attrs: attrs.clone(),
            },
            parent: self.stack.last().map(|open| open.node),
            children: Vec::new(),
            span: (start, tag_end),
            inner_span: (tag_end, tag_end),
        };
        let id = self.push_node(node);
        self.attach(id);

        if let Some(id_value) = attrs
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("id"))
            .map(|(_, value)| value.clone())
        {
            self.ids.entry(id_value).or_insert(id);
        }

        self.pos = tag_end;

        if self_closing || VOID_ELEMENTS.contains(&tag.as_str()) {
            return;
        }

        if RAW_TEXT_ELEMENTS.contains(&tag.as_str()) {
            self.consume_raw_text(id, &tag);
            return;
        }

        self.stack.push(OpenElement { node: id, tag });
    }

    fn consume_raw_text(&mut self, id: NodeId, tag: &str) {
        let close_pattern = format!("</{}", tag);
        let rest = &self.source[self.pos..];
        let content_end = rest
            .to_ascii_lowercase()
            .find(&close_pattern)
            .map(|offset| self.pos + offset)
            .unwrap_or(self.bytes.len());
        let close_end = self.source[content_end..]
            .find('>')
            .map(|offset| content_end + offset + 1)
            .unwrap_or(self.bytes.len());

        if content_end > self.pos {
            let node = Node {
                kind: NodeKind::Text(self.source[self.pos..content_end].to_string()),
                parent: Some(id),
                children: Vec::new(),
                span: (self.pos, content_end),
                inner_span: (self.pos, content_end),
            };
            let text_id = self.push_node(node);
            self.nodes[id].children.push(text_id);
        }

        self.nodes[id].inner_span = (self.pos, content_end);
        self.nodes[id].span.1 = close_end;
        self.pos = close_end;
    }

    fn close_element(&mut self, tag: &str, close_start: usize, close_end: usize) {
        // Find the nearest matching open element; skip if none (stray close)
        let matching = self.stack.iter().rposition(|open| open.tag == tag);
        let Some(index) = matching else {
            return;
        };

        // Implicitly close anything opened after it
        while self.stack.len() > index + 1 {
            if let Some(open) = self.stack.pop() {
                self.nodes[open.node].span.1 = close_start;
                self.nodes[open.node].inner_span.1 = close_start;
            }
        }
        if let Some(open) = self.stack.pop() {
            self.nodes[open.node].span.1 = close_end;
            self.nodes[open.node].inner_span.1 = close_start;
        }
    }
}

/// Split a tag body into its name and attribute pairs
fn parse_tag_body(body: &str) -> (String, Vec<(String, String)>) {
    let body = body.trim();
    let name_end = body
        .find(|c: char| c.is_whitespace())
        .unwrap_or(body.len());
    let tag = body[..name_end].to_ascii_lowercase();
    let mut attrs = Vec::new();

    let mut rest = body[name_end..].trim_start();
    while !rest.is_empty() {
        let name_end = rest
            .find(|c: char| c.is_whitespace() || c == '=')
            .unwrap_or(rest.len());
        let name = rest[..name_end].trim().to_string();
        if name.is_empty() {
            break;
        }
        rest = rest[name_end..].trim_start();

        if let Some(stripped) = rest.strip_prefix('=') {
            let value_part = stripped.trim_start();
            let (value, remaining) = if let Some(inner) = value_part.strip_prefix('"') {
                match inner.find('"') {
                    Some(end) => (inner[..end].to_string(), &inner[end + 1..]),
                    None => (inner.to_string(), ""),
                }
            } else if let Some(inner) = value_part.strip_prefix('\'') {
                match inner.find('\'') {
                    Some(end) => (inner[..end].to_string(), &inner[end + 1..]),
                    None => (inner.to_string(), ""),
                }
            } else {
                let end = value_part
                    .find(|c: char| c.is_whitespace())
                    .unwrap_or(value_part.len());
                (value_part[..end].to_string(), &value_part[end..])
            };
            attrs.push((name, value));
            rest = remaining.trim_start();
        } else {
            // Bare attribute
            attrs.push((name, String::new()));
        }
    }

    (tag, attrs)
}
