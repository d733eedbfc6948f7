//! Content precedence resolution.
//!
//! A page can carry both the freeform `elements` list and the legacy
//! `areas_content` slot map at once — an upgraded document keeps its stale
//! legacy slots in storage forever. Exactly one representation is
//! authoritative at read time, decided here and nowhere else.

use std::collections::BTreeMap;

use crate::model::{DocElement, DocumentPage};

/// The resolved, authoritative content of a page. Borrows from the page;
/// resolution never copies or rewrites content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageContent<'a> {
    /// Freeform elements, in z-order.
    Elements(&'a [DocElement]),
    /// Legacy template slots, keyed by template-defined area name.
    Legacy(&'a BTreeMap<String, String>),
    /// Nothing to render.
    Blank,
}

impl PageContent<'_> {
    pub fn is_blank(&self) -> bool {
        matches!(self, PageContent::Blank)
    }
}

impl DocumentPage {
    /// Resolve which content representation is authoritative.
    ///
    /// A non-empty `elements` list wins outright: `areas_content` is then
    /// ignored entirely, neither merged nor validated. Only when `elements`
    /// is absent or empty does a non-empty `areas_content` apply. A page
    /// with neither is blank, which is a valid state, not an error.
    ///
    /// Pure and deterministic: the same page always resolves the same way.
    pub fn content(&self) -> PageContent<'_> {
        if let Some(els) = self.elements.as_deref() {
            if !els.is_empty() {
                return PageContent::Elements(els);
            }
        }
        if let Some(areas) = &self.areas_content {
            if !areas.is_empty() {
                return PageContent::Legacy(areas);
            }
        }
        PageContent::Blank
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn legacy_map() -> BTreeMap<String, String> {
        BTreeMap::from([("header".to_string(), "Hello".to_string())])
    }

    #[test]
    fn elements_win_over_legacy() {
        let mut page = DocumentPage::new(Some("t1".into()));
        page.areas_content = Some(legacy_map());
        let id = page.push_element(DocElement::text());

        match page.content() {
            PageContent::Elements(els) => {
                assert_eq!(els.len(), 1);
                assert_eq!(els[0].id, id);
                // "Hello" is not surfaced anywhere in the resolved view
                assert_ne!(els[0].text_content(), Some("Hello"));
            }
            other => panic!("expected elements, got {:?}", other),
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        let mut page = DocumentPage::new(Some("t1".into()));
        page.areas_content = Some(legacy_map());
        page.push_element(DocElement::text());
        assert_eq!(page.content(), page.content());
    }

    #[test]
    fn empty_elements_fall_back_to_legacy() {
        let page: DocumentPage = serde_json::from_value(json!({
            "template_id": "t1",
            "elements": [],
            "areas_content": {"header": "Hello"}
        }))
        .unwrap();

        match page.content() {
            PageContent::Legacy(areas) => {
                assert_eq!(areas.get("header"), Some(&"Hello".to_string()));
            }
            other => panic!("expected legacy, got {:?}", other),
        }
    }

    #[test]
    fn absent_elements_fall_back_to_legacy() {
        let mut page = DocumentPage::new(Some("t1".into()));
        page.areas_content = Some(legacy_map());
        assert!(matches!(page.content(), PageContent::Legacy(_)));
    }

    #[test]
    fn both_empty_is_blank() {
        let mut page = DocumentPage::new(Some("t1".into()));
        assert!(page.content().is_blank());

        page.elements = Some(Vec::new());
        page.areas_content = Some(BTreeMap::new());
        assert!(page.content().is_blank());
    }

    #[test]
    fn image_content_is_not_legacy_text() {
        // An image's content is a file id; resolution must hand it back as
        // an element, never as displayable slot text.
        let mut page = DocumentPage::new(None);
        page.push_element(DocElement::image("file-abc"));
        match page.content() {
            PageContent::Elements(els) => {
                assert_eq!(els[0].file_id(), Some("file-abc"));
                assert_eq!(els[0].text_content(), None);
            }
            other => panic!("expected elements, got {:?}", other),
        }
    }
}
