//! Document manifests
//!
//! A structured description of what a screen rendered, used by the scanner's
//! presentation checks. Renderers emit one node per visual element with its
//! class list, inline-style flag, and image metadata where present.

use serde::{Deserialize, Serialize};

/// Image metadata on a rendered node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub src: String,
    /// `None` means the alt attribute is absent entirely
    pub alt: Option<String>,
}

/// One rendered element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeManifest {
    /// Name of the component that produced this node, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Utility classes applied to the element
    #[serde(default)]
    pub classes: Vec<String>,
    /// Whether the element carries an inline style attribute
    #[serde(default)]
    pub inline_style: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageInfo>,
}

impl NodeManifest {
    /// Plain node with the given classes
    #[must_use]
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// Everything a screen rendered, flattened
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentManifest {
    pub nodes: Vec<NodeManifest>,
    /// Concatenated visible text of the document
    #[serde(default)]
    pub body_text: String,
}

impl DocumentManifest {
    /// Merge another manifest's nodes and text into this one
    pub fn extend(&mut self, other: DocumentManifest) {
        self.nodes.extend(other.nodes);
        if !other.body_text.is_empty() {
            if !self.body_text.is_empty() {
                self.body_text.push('\n');
            }
            self.body_text.push_str(&other.body_text);
        }
    }
}
