//! Minimal namespace-aware element tree over quick-xml
//!
//! Feed documents are small, so the dialect parsers and generators work on an
//! in-memory tree instead of a streaming state machine. Namespace prefixes are
//! resolved while reading; `xmlns` attributes are not kept and are
//! regenerated on output from the namespaces the tree actually uses.

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use tracing::trace;

use crate::{Result, SyndError};

/// Namespace bound to the reserved `xml` prefix
pub const XML_URI: &str = "http://www.w3.org/XML/1998/namespace";

/// An attribute, keyed by its qualified name as written
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Element or character data
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with its resolved namespace
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Element {
    /// Prefix as written, `None` for the default namespace
    pub prefix: Option<String>,
    /// Local name
    pub name: String,
    /// Resolved namespace URI
    pub namespace: Option<String>,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

/// A parsed document
#[derive(Debug, Clone)]
pub struct Document {
    pub root: Element,
    /// Raw DOCTYPE declaration content, if any
    pub doctype: Option<String>,
    /// Encoding named in the XML declaration
    pub encoding: Option<String>,
}

impl Element {
    /// An element without namespace
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// An element in `namespace`, written with `prefix`
    pub fn with_namespace(prefix: Option<&str>, name: impl Into<String>, namespace: &str) -> Self {
        Self {
            prefix: prefix.map(str::to_string),
            name: name.into(),
            namespace: Some(namespace.to_string()),
            ..Self::default()
        }
    }

    /// Builder form of [`push_text`](Self::push_text)
    pub fn with_text(mut self, text: &str) -> Self {
        self.push_text(text);
        self
    }

    /// Builder form of [`set_attribute`](Self::set_attribute)
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// `prefix:name`, or `name` in the default namespace
    pub fn qualified_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}:{}", prefix, self.name),
            None => self.name.clone(),
        }
    }

    /// Returns `true` if the element has the given namespace and local name
    pub fn is(&self, namespace: Option<&str>, name: &str) -> bool {
        self.name == name && self.namespace.as_deref() == namespace
    }

    /// Attribute value by qualified name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set or replace an attribute
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(attribute) => attribute.value = value,
            None => self.attributes.push(Attribute {
                name: name.to_string(),
                value,
            }),
        }
    }

    /// Child elements, skipping text
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Child elements matching namespace and local name
    pub fn children_named<'a>(
        &'a self,
        namespace: Option<&'a str>,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements().filter(move |e| e.is(namespace, name))
    }

    /// First child element matching namespace and local name
    pub fn child(&self, namespace: Option<&str>, name: &str) -> Option<&Element> {
        self.elements().find(|e| e.is(namespace, name))
    }

    /// Trimmed text of the first matching child
    pub fn child_text(&self, namespace: Option<&str>, name: &str) -> Option<String> {
        self.child(namespace, name).map(|e| e.text().trim().to_string())
    }

    /// Concatenated character data of the element and its descendants
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }

    /// Append a child element
    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Append character data
    pub fn push_text(&mut self, text: &str) {
        self.children.push(Node::Text(text.to_string()));
    }

    /// Serialized children, without the element's own tags
    pub fn inner_xml(&self) -> Result<String> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        let default_namespace = match self.prefix {
            None => self.namespace.as_deref(),
            Some(_) => None,
        };
        for node in &self.children {
            write_node(&mut writer, node, default_namespace, &[])?;
        }
        Ok(String::from_utf8(writer.into_inner().into_inner())?)
    }

    /// Prefixed namespaces used by this element and its descendants
    ///
    /// The first binding seen for a prefix wins.
    pub fn used_namespaces(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.collect_namespaces(&mut out);
        out
    }

    fn collect_namespaces(&self, out: &mut Vec<(String, String)>) {
        if let (Some(prefix), Some(namespace)) = (&self.prefix, &self.namespace) {
            if prefix != "xml" && !out.iter().any(|(p, _)| p == prefix) {
                out.push((prefix.clone(), namespace.clone()));
            }
        }
        for child in self.elements() {
            child.collect_namespaces(out);
        }
    }
}

/// Parse a complete document
///
/// # Examples
///
/// ```
/// use synd_rs::xml;
///
/// let doc = xml::parse_document(
///     r#"<rss xmlns:dc="http://purl.org/dc/elements/1.1/"><dc:creator>Alice</dc:creator></rss>"#,
/// ).unwrap();
///
/// let creator = doc.root.child(Some("http://purl.org/dc/elements/1.1/"), "creator").unwrap();
/// assert_eq!(creator.prefix.as_deref(), Some("dc"));
/// assert_eq!(creator.text(), "Alice");
/// ```
pub fn parse_document(xml: &str) -> Result<Document> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut builder = TreeBuilder::default();
    let mut doctype = None;
    let mut encoding = None;

    loop {
        match reader.read_event()? {
            Event::Decl(decl) => {
                if let Some(Ok(value)) = decl.encoding() {
                    encoding = Some(String::from_utf8_lossy(&value).into_owned());
                }
            }
            Event::DocType(text) => {
                doctype = Some(String::from_utf8_lossy(&text).trim().to_string());
            }
            Event::Start(start) => builder.open(&start)?,
            Event::Empty(start) => {
                builder.open(&start)?;
                builder.close()?;
            }
            Event::End(_) => builder.close()?,
            Event::Text(text) => {
                let value = text
                    .unescape()
                    .map(|t| t.into_owned())
                    .unwrap_or_else(|_| String::from_utf8_lossy(&text).into_owned());
                builder.text(value);
            }
            Event::CData(data) => {
                builder.text(String::from_utf8_lossy(&data.into_inner()).into_owned());
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let root = builder.finish()?;
    trace!("Parsed document with root <{}>", root.qualified_name());

    Ok(Document {
        root,
        doctype,
        encoding,
    })
}

/// Parse a sequence of nodes, such as the value of an xhtml text construct
pub fn parse_fragment(xml: &str) -> Result<Vec<Node>> {
    let document = parse_document(&format!("<fragment>{}</fragment>", xml))?;
    Ok(document.root.children)
}

#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Element>,
    scopes: Vec<Vec<(Option<String>, String)>>,
    root: Option<Element>,
}

impl TreeBuilder {
    fn resolve(&self, prefix: Option<&str>) -> Option<String> {
        if prefix == Some("xml") {
            return Some(XML_URI.to_string());
        }
        self.scopes
            .iter()
            .rev()
            .flat_map(|scope| scope.iter())
            .find(|(p, _)| p.as_deref() == prefix)
            .map(|(_, uri)| uri.clone())
            .filter(|uri| !uri.is_empty())
    }

    fn open(&mut self, start: &BytesStart<'_>) -> Result<()> {
        let qualified = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let (prefix, name) = split_qualified(&qualified);

        let mut scope = Vec::new();
        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute.map_err(|e| SyndError::Xml(e.to_string()))?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute
                .unescape_value()
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| String::from_utf8_lossy(&attribute.value).into_owned());

            if key == "xmlns" {
                scope.push((None, value));
            } else if let Some(declared) = key.strip_prefix("xmlns:") {
                scope.push((Some(declared.to_string()), value));
            } else {
                attributes.push(Attribute { name: key, value });
            }
        }
        self.scopes.push(scope);

        let namespace = self.resolve(prefix);
        self.stack.push(Element {
            prefix: prefix.map(str::to_string),
            name: name.to_string(),
            namespace,
            attributes,
            children: Vec::new(),
        });
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.scopes.pop();
        let element = self
            .stack
            .pop()
            .ok_or_else(|| SyndError::Xml("unbalanced end tag".to_string()))?;

        match self.stack.last_mut() {
            Some(parent) => parent.children.push(Node::Element(element)),
            None if self.root.is_none() => self.root = Some(element),
            None => return Err(SyndError::Xml("multiple root elements".to_string())),
        }
        Ok(())
    }

    fn text(&mut self, text: String) {
        // Character data outside the root element is insignificant
        if let Some(parent) = self.stack.last_mut() {
            match parent.children.last_mut() {
                Some(Node::Text(previous)) => previous.push_str(&text),
                _ => parent.children.push(Node::Text(text)),
            }
        }
    }

    fn finish(self) -> Result<Element> {
        if !self.stack.is_empty() {
            return Err(SyndError::Xml("unexpected end of document".to_string()));
        }
        self.root
            .ok_or_else(|| SyndError::Xml("document has no root element".to_string()))
    }
}

fn split_qualified(qualified: &str) -> (Option<&str>, &str) {
    match qualified.split_once(':') {
        Some((prefix, name)) => (Some(prefix), name),
        None => (None, qualified),
    }
}

/// Serialize a document rooted at `root`
///
/// Namespace declarations for every prefix used in the tree are placed on the
/// root element. `doctype` is written verbatim inside `<!DOCTYPE ...>`.
/// `indent` enables pretty printing with that many spaces.
pub fn write_document(root: &Element, doctype: Option<&str>, indent: Option<usize>) -> Result<String> {
    let body = match indent {
        Some(size) => {
            let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', size);
            write_root(&mut writer, root)?;
            writer.into_inner().into_inner()
        }
        None => {
            let mut writer = Writer::new(Cursor::new(Vec::new()));
            write_root(&mut writer, root)?;
            writer.into_inner().into_inner()
        }
    };

    let mut result = String::new();
    {
        let mut decl = Writer::new(Cursor::new(Vec::new()));
        decl.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(write_error)?;
        result.push_str(&String::from_utf8(decl.into_inner().into_inner())?);
    }
    result.push('\n');
    if let Some(doctype) = doctype {
        result.push_str(&format!("<!DOCTYPE {}>\n", doctype));
    }
    result.push_str(&String::from_utf8(body)?);
    Ok(result)
}

fn write_root(writer: &mut Writer<Cursor<Vec<u8>>>, root: &Element) -> Result<()> {
    let declarations = root.used_namespaces();
    write_element(writer, root, None, &declarations)
}

fn write_node(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    node: &Node,
    default_namespace: Option<&str>,
    declarations: &[(String, String)],
) -> Result<()> {
    match node {
        Node::Element(element) => write_element(writer, element, default_namespace, declarations),
        Node::Text(text) => writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(write_error),
    }
}

fn write_element(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    element: &Element,
    default_namespace: Option<&str>,
    declarations: &[(String, String)],
) -> Result<()> {
    let qualified = element.qualified_name();
    let mut start = BytesStart::new(qualified.as_str());

    let mut scope_default = default_namespace;
    if element.prefix.is_none() && element.namespace.as_deref() != default_namespace {
        start.push_attribute(("xmlns", element.namespace.as_deref().unwrap_or("")));
        scope_default = element.namespace.as_deref();
    }
    for (prefix, uri) in declarations {
        start.push_attribute((format!("xmlns:{}", prefix).as_str(), uri.as_str()));
    }
    for attribute in &element.attributes {
        start.push_attribute((attribute.name.as_str(), attribute.value.as_str()));
    }

    if element.children.is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(write_error);
    }

    writer.write_event(Event::Start(start)).map_err(write_error)?;
    for child in &element.children {
        write_node(writer, child, scope_default, &[])?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(qualified.as_str())))
        .map_err(write_error)
}

fn write_error(e: impl std::fmt::Display) -> SyndError {
    SyndError::Xml(e.to_string())
}
