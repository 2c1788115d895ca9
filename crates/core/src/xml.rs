//! Owned XML tree shared by the listing and track parsers.

use std::collections::BTreeMap;

use crate::error::{Result, TimedTextError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    /// Character data before the first child element, entities resolved.
    pub text: Option<String>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn required_attr(&self, name: &'static str) -> Result<&str> {
        self.attr(name)
            .ok_or_else(|| TimedTextError::MissingAttribute {
                element: self.name.clone(),
                attribute: name,
            })
    }
}

/// Parse a response body into its root element.
pub fn parse(bytes: &[u8]) -> Result<XmlElement> {
    let source = std::str::from_utf8(bytes)?;
    let document = roxmltree::Document::parse(source)?;
    Ok(to_element(document.root_element()))
}

fn to_element(node: roxmltree::Node<'_, '_>) -> XmlElement {
    XmlElement {
        name: node.tag_name().name().to_string(),
        attributes: node
            .attributes()
            .map(|attr| (attr.name().to_string(), attr.value().to_string()))
            .collect(),
        text: node.text().map(str::to_string),
        children: node
            .children()
            .filter(|child| child.is_element())
            .map(to_element)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_attributes_text_and_children() {
        let root = parse(
            br#"<?xml version="1.0" encoding="utf-8" ?><transcript><text start="1.5" dur="2">Hello &amp;amp; bye</text><text start="4" dur="1"/></transcript>"#,
        )
        .unwrap();

        assert_eq!(root.name, "transcript");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].attr("start"), Some("1.5"));
        assert_eq!(root.children[0].text.as_deref(), Some("Hello &amp; bye"));
        assert_eq!(root.children[1].text, None);
    }

    #[test]
    fn skips_non_element_children() {
        let root = parse(b"<list>\n  <track lang_code=\"en\"/>\n  <!-- note -->\n</list>").unwrap();
        assert_eq!(root.children.len(), 1);
        assert!(root.children[0].has_attr("lang_code"));
    }

    #[test]
    fn missing_required_attribute_names_element() {
        let root = parse(b"<transcript><text dur=\"1\">x</text></transcript>").unwrap();
        let err = root.children[0].required_attr("start").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed <text> element: missing `start` attribute"
        );
    }

    #[test]
    fn rejects_broken_documents() {
        let err = parse(b"<transcript><text>").unwrap_err();
        assert!(err.is_malformed_input());

        let err = parse(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(err.is_malformed_input());
    }
}
