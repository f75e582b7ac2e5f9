//! Per-request page metadata embedded in catalogue responses.
//!
//! The original site decorated every page context with a title and the
//! selected category through class-level shared state; here the value is
//! constructed per request, so nothing is shared between handlers.

use serde::Serialize;

/// View-model decoration included in list and detail responses.
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    /// Page title, e.g. `"Homepage"` or `"Category - Drama"`.
    pub title: String,
    /// Slug of the currently selected category, when the page is scoped
    /// to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_selected: Option<String>,
}

impl PageMeta {
    /// Metadata with a title and no category selection.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category_selected: None,
        }
    }

    /// Mark a category as selected.
    pub fn with_category(mut self, slug: impl Into<String>) -> Self {
        self.category_selected = Some(slug.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_is_instance_scoped() {
        // Two metas built from the same constructor must not share state.
        let a = PageMeta::new("Homepage");
        let b = PageMeta::new("About Us").with_category("drama");

        assert_eq!(a.title, "Homepage");
        assert!(a.category_selected.is_none());
        assert_eq!(b.category_selected.as_deref(), Some("drama"));
    }

    #[test]
    fn test_serialization_skips_empty_category() {
        let json = serde_json::to_string(&PageMeta::new("Homepage")).unwrap();
        assert!(!json.contains("category_selected"));
    }
}
