//! Owned, mutable XML tree used for every OOXML part.
//!
//! `roxmltree` does the parsing; the result is copied into [`XmlElement`]s so
//! the document body can be rewritten in place (sdt unwrapping, run merging,
//! variable substitution) and serialized back for download. Element and
//! attribute names are normalized to canonical prefixes (`w:`, `a:`, `wp:` …)
//! based on their namespace URI, so lookups never depend on the prefixes a
//! particular producer happened to choose.

use crate::error::{Error, Result};

pub(crate) const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub(crate) const REL_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub(crate) const DML_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

const CANONICAL_PREFIXES: &[(&str, &str)] = &[
    ("w", WML_NS),
    ("r", REL_NS),
    ("a", DML_NS),
    (
        "wp",
        "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing",
    ),
    ("pic", "http://schemas.openxmlformats.org/drawingml/2006/picture"),
    ("c", "http://schemas.openxmlformats.org/drawingml/2006/chart"),
    ("m", "http://schemas.openxmlformats.org/officeDocument/2006/math"),
    ("mc", "http://schemas.openxmlformats.org/markup-compatibility/2006"),
    ("wps", "http://schemas.microsoft.com/office/word/2010/wordprocessingShape"),
    ("wpg", "http://schemas.microsoft.com/office/word/2010/wordprocessingGroup"),
    ("w14", "http://schemas.microsoft.com/office/word/2010/wordml"),
    ("w15", "http://schemas.microsoft.com/office/word/2012/wordml"),
    ("v", "urn:schemas-microsoft-com:vml"),
    ("o", "urn:schemas-microsoft-com:office:office"),
    ("dc", "http://purl.org/dc/elements/1.1/"),
    ("dcterms", "http://purl.org/dc/terms/"),
    (
        "cp",
        "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
    ),
    ("xml", XML_NS),
];

fn canonical_prefix(uri: &str) -> Option<&'static str> {
    CANONICAL_PREFIXES
        .iter()
        .find(|(_, ns)| *ns == uri)
        .map(|(prefix, _)| *prefix)
}

fn canonical_uri(prefix: &str) -> Option<&'static str> {
    CANONICAL_PREFIXES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, ns)| *ns)
}

#[derive(Clone, Debug, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn local_name(&self) -> &str {
        self.name
            .rsplit_once(':')
            .map(|(_, local)| local)
            .unwrap_or(&self.name)
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    /// `w:val`, the attribute nearly every WordprocessingML property uses.
    pub fn val(&self) -> Option<&str> {
        self.attr("w:val")
    }

    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|c| match c {
            XmlNode::Element(e) => Some(e),
            XmlNode::Text(_) => None,
        })
    }

    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut XmlElement> {
        self.children.iter_mut().filter_map(|c| match c {
            XmlNode::Element(e) => Some(e),
            XmlNode::Text(_) => None,
        })
    }

    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.elements().find(|e| e.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.elements().filter(move |e| e.name == name)
    }

    pub fn child_val(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(|c| c.val())
    }

    /// First descendant (depth first) with the given name.
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        for e in self.elements() {
            if e.name == name {
                return Some(e);
            }
            if let Some(found) = e.find(name) {
                return Some(found);
            }
        }
        None
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                XmlNode::Text(t) => out.push_str(t),
                XmlNode::Element(e) => e.collect_text(out),
            }
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![XmlNode::Text(text.into())];
    }

    fn collect_prefixes(&self, out: &mut Vec<String>) {
        let names = std::iter::once(self.name.as_str())
            .chain(self.attributes.iter().map(|(k, _)| k.as_str()));
        for name in names {
            if let Some((prefix, _)) = name.split_once(':')
                && prefix != "xmlns"
                && !out.iter().any(|p| p == prefix)
            {
                out.push(prefix.to_string());
            }
        }
        for e in self.elements() {
            e.collect_prefixes(out);
        }
    }
}

fn qualified(node: roxmltree::Node, namespace: Option<&str>, local: &str) -> String {
    let Some(uri) = namespace else {
        return local.to_string();
    };
    if let Some(prefix) = canonical_prefix(uri) {
        return format!("{prefix}:{local}");
    }
    match node.lookup_prefix(uri) {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{local}"),
        _ => local.to_string(),
    }
}

/// Elements whose text is content. Whitespace between any other elements is
/// indentation and gets dropped.
fn keeps_whitespace(local: &str) -> bool {
    matches!(local, "t" | "instrText" | "delText" | "delInstrText")
}

fn convert(node: roxmltree::Node, is_root: bool) -> XmlElement {
    let tag = node.tag_name();
    let mut element = XmlElement::new(qualified(node, tag.namespace(), tag.name()));

    if is_root {
        for ns in node.namespaces() {
            let key = match ns.name() {
                Some("xml") => continue,
                Some(prefix) => format!("xmlns:{prefix}"),
                None => "xmlns".to_string(),
            };
            element.attributes.push((key, ns.uri().to_string()));
        }
    }
    for attr in node.attributes() {
        element.attributes.push((
            qualified(node, attr.namespace(), attr.name()),
            attr.value().to_string(),
        ));
    }
    for child in node.children() {
        if child.is_element() {
            element.children.push(XmlNode::Element(convert(child, false)));
        } else if child.is_text()
            && let Some(text) = child.text()
            && (keeps_whitespace(tag.name()) || !text.trim().is_empty())
        {
            element.children.push(XmlNode::Text(text.to_string()));
        }
    }
    element
}

/// Parse one package part. Malformed XML is the one fatal failure mode.
pub fn parse(part: &str, text: &str) -> Result<XmlElement> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let doc = roxmltree::Document::parse(text).map_err(|source| Error::Xml {
        part: part.to_string(),
        source,
    })?;
    Ok(convert(doc.root_element(), true))
}

/// Serialize with an XML declaration. Canonical prefixes that the original
/// root did not declare are declared on the way out.
pub fn to_string(root: &XmlElement) -> String {
    let mut root = root.clone();
    let mut used = Vec::new();
    root.collect_prefixes(&mut used);
    for prefix in used {
        let key = format!("xmlns:{prefix}");
        if prefix == "xml" || root.attr(&key).is_some() {
            continue;
        }
        if let Some(uri) = canonical_uri(&prefix) {
            root.attributes.push((key, uri.to_string()));
        }
    }

    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n");
    write_element(&root, &mut out);
    out
}

fn write_element(el: &XmlElement, out: &mut String) {
    out.push('<');
    out.push_str(&el.name);
    for (k, v) in &el.attributes {
        out.push(' ');
        out.push_str(k);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(v));
        out.push('"');
    }
    if el.children.is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    for child in &el.children {
        match child {
            XmlNode::Text(t) => out.push_str(&html_escape::encode_text(t)),
            XmlNode::Element(e) => write_element(e, out),
        }
    }
    out.push_str("</");
    out.push_str(&el.name);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_canonicalized() {
        let xml = r#"<x:document xmlns:x="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><x:body><x:p><x:r><x:t x:val="1">Hi</x:t></x:r></x:p></x:body></x:document>"#;
        let root = parse("word/document.xml", xml).unwrap();
        assert_eq!(root.name, "w:document");
        let t = root.find("w:t").unwrap();
        assert_eq!(t.val(), Some("1"));
        assert_eq!(t.text(), "Hi");
    }

    #[test]
    fn malformed_xml_is_fatal() {
        let err = parse("word/styles.xml", "<w:styles><w:style></w:styles>").unwrap_err();
        assert!(matches!(err, Error::Xml { ref part, .. } if part == "word/styles.xml"));
    }

    #[test]
    fn serialization_declares_canonical_prefixes() {
        let xml = r#"<x:document xmlns:x="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><x:body><x:p><x:r><x:t xml:space="preserve"> a &amp; b </x:t></x:r></x:p></x:body></x:document>"#;
        let root = parse("word/document.xml", xml).unwrap();
        let out = to_string(&root);
        assert!(out.contains(&format!("xmlns:w=\"{WML_NS}\"")));
        assert!(out.contains("<w:t xml:space=\"preserve\"> a &amp; b </w:t>"));
        let reparsed = parse("word/document.xml", &out).unwrap();
        assert_eq!(reparsed.find("w:t").unwrap().text(), " a & b ");
    }

    #[test]
    fn serialization_declares_prefixes_added_after_parsing() {
        let xml = format!(r#"<w:document xmlns:w="{WML_NS}"><w:body/></w:document>"#);
        let mut root = parse("word/document.xml", &xml).unwrap();
        let mut link = XmlElement::new("w:hyperlink");
        link.set_attr("r:id", "rId9");
        root.elements_mut().next().unwrap().children.push(XmlNode::Element(link));

        let out = to_string(&root);
        assert!(out.contains(&format!("xmlns:r=\"{REL_NS}\"")), "{out}");
        assert_eq!(out.matches("xmlns:w=").count(), 1);
        let reparsed = parse("word/document.xml", &out).unwrap();
        assert_eq!(reparsed.find("w:hyperlink").unwrap().attr("r:id"), Some("rId9"));
    }
}
