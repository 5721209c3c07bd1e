//! Page metadata and the head tags derived from it.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub og_image: String,
}

/// One `<meta>` element. `name` tags use the `name` attribute, `property`
/// tags (Open Graph) use `property`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "attr", rename_all = "lowercase")]
pub enum MetaTag {
    Name { key: String, content: String },
    Property { key: String, content: String },
}

impl MetaTag {
    fn name(key: &str, content: impl Into<String>) -> Self {
        Self::Name {
            key: key.to_string(),
            content: content.into(),
        }
    }

    fn property(key: &str, content: impl Into<String>) -> Self {
        Self::Property {
            key: key.to_string(),
            content: content.into(),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Name { key, .. } | Self::Property { key, .. } => key,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Self::Name { content, .. } | Self::Property { content, .. } => content,
        }
    }
}

impl Seo {
    /// Head tags for the landing page, in document order.
    pub fn meta_tags(&self) -> Vec<MetaTag> {
        vec![
            MetaTag::name("description", self.description.clone()),
            MetaTag::name("keywords", self.keywords.join(", ")),
            MetaTag::property("og:title", self.title.clone()),
            MetaTag::property("og:description", self.description.clone()),
            MetaTag::property("og:type", "website"),
            MetaTag::name("twitter:card", "summary_large_image"),
            MetaTag::name("twitter:title", self.title.clone()),
            MetaTag::name("twitter:description", self.description.clone()),
        ]
    }
}
