//! Content registry contract and content references.
//!
//! The layout engine never owns content. It asks a [`ContentRegistry`] to
//! resolve an identifier once, when the content is first opened, and caches
//! the resulting [`ContentMeta`] on the [`ContentReference`] it stores in a
//! pane's tab list.
//!
//! Sub-modules:
//! - [`catalog`]: `CatalogRegistry`, an in-memory registry loadable from YAML

mod catalog;

pub use catalog::{CatalogEntry, CatalogRegistry};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a piece of content (file, chat, task, ...)
pub type ContentId = String;

/// Kind tag attached to content.
///
/// The set is open-ended: unknown kinds round-trip through [`ContentKind::Other`]
/// and the layout engine never branches on the kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentKind {
    Code,
    Chat,
    Task,
    Timeline,
    Document,
    OrgChart,
    Other(String),
}

impl ContentKind {
    /// Stable lowercase tag used in catalogs and logs
    pub fn as_str(&self) -> &str {
        match self {
            ContentKind::Code => "code",
            ContentKind::Chat => "chat",
            ContentKind::Task => "task",
            ContentKind::Timeline => "timeline",
            ContentKind::Document => "document",
            ContentKind::OrgChart => "org_chart",
            ContentKind::Other(tag) => tag,
        }
    }
}

impl From<String> for ContentKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "code" => ContentKind::Code,
            "chat" => ContentKind::Chat,
            "task" => ContentKind::Task,
            "timeline" => ContentKind::Timeline,
            "document" => ContentKind::Document,
            "org_chart" => ContentKind::OrgChart,
            _ => ContentKind::Other(tag),
        }
    }
}

impl From<&str> for ContentKind {
    fn from(tag: &str) -> Self {
        ContentKind::from(tag.to_string())
    }
}

impl From<ContentKind> for String {
    fn from(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata the registry returns for a content id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMeta {
    pub title: String,
    pub kind: ContentKind,
}

impl ContentMeta {
    pub fn new(title: impl Into<String>, kind: impl Into<ContentKind>) -> Self {
        Self {
            title: title.into(),
            kind: kind.into(),
        }
    }
}

/// A tab: content id plus the metadata snapshot taken when it was opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentReference {
    pub id: ContentId,
    pub meta: ContentMeta,
}

impl ContentReference {
    pub fn new(id: impl Into<ContentId>, meta: ContentMeta) -> Self {
        Self {
            id: id.into(),
            meta,
        }
    }

    pub fn title(&self) -> &str {
        &self.meta.title
    }

    pub fn kind(&self) -> &ContentKind {
        &self.meta.kind
    }
}

/// Resolves content identifiers to display metadata.
///
/// Implemented by whatever owns the content catalog. Returning `None` makes
/// the engine reject the operation with `LayoutError::UnresolvableContent`.
pub trait ContentRegistry {
    fn resolve(&self, content_id: &str) -> Option<ContentMeta>;
}

impl<R: ContentRegistry + ?Sized> ContentRegistry for &R {
    fn resolve(&self, content_id: &str) -> Option<ContentMeta> {
        (**self).resolve(content_id)
    }
}

impl<R: ContentRegistry + ?Sized> ContentRegistry for Box<R> {
    fn resolve(&self, content_id: &str) -> Option<ContentMeta> {
        (**self).resolve(content_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kinds_round_trip_through_strings() {
        for kind in [
            ContentKind::Code,
            ContentKind::Chat,
            ContentKind::Task,
            ContentKind::Timeline,
            ContentKind::Document,
            ContentKind::OrgChart,
        ] {
            let tag: String = kind.clone().into();
            assert_eq!(ContentKind::from(tag), kind);
        }
    }

    #[test]
    fn test_unknown_kind_is_preserved() {
        let kind: ContentKind = serde_yaml_ng::from_str("whiteboard").expect("parse kind");
        assert_eq!(kind, ContentKind::Other("whiteboard".to_string()));
        assert_eq!(kind.to_string(), "whiteboard");
    }

    #[test]
    fn test_reference_accessors() {
        let reference = ContentReference::new("fileA", ContentMeta::new("main.rs", "code"));
        assert_eq!(reference.title(), "main.rs");
        assert_eq!(reference.kind(), &ContentKind::Code);
    }
}
