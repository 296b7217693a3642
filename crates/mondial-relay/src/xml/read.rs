use roxmltree::{Document, Node};

use crate::Result;

/// Owned element tree of a parsed document.
///
/// Names are local names: the carrier namespaces its documents but paths are matched
/// on local names only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
    /// Concatenated direct text content, trimmed
    pub text: String,
}

impl XmlElement {
    /// Parse a document and return its root element
    pub fn parse(xml: &str) -> Result<Self> {
        let doc = Document::parse(xml)?;
        Ok(Self::from_node(doc.root_element()))
    }

    fn from_node(node: Node) -> Self {
        let mut children = Vec::new();
        let mut text = String::new();
        for child in node.children() {
            if child.is_element() {
                children.push(Self::from_node(child));
            } else if child.is_text()
                && let Some(t) = child.text()
            {
                text.push_str(t);
            }
        }

        Self {
            name: node.tag_name().name().to_string(),
            attributes: node
                .attributes()
                .map(|a| (a.name().to_string(), a.value().to_string()))
                .collect(),
            children,
            text: text.trim().to_string(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First child element named `name`
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Follow a path of first-match child names, e.g. `["ShipmentsList", "Shipment"]`
    pub fn find(&self, path: &[&str]) -> Option<&XmlElement> {
        path.iter()
            .try_fold(self, |node, name| node.child(name))
    }

    /// Text of the element at `path`, if present and non-empty
    pub fn text_at(&self, path: &[&str]) -> Option<&str> {
        self.find(path)
            .map(|e| e.text.as_str())
            .filter(|t| !t.is_empty())
    }
}
