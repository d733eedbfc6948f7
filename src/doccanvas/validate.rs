//! Lenient decoding and health checks for persisted documents.
//!
//! Persisted pages can contain elements this code cannot decode: a missing
//! `id`, an unknown `type` written by a newer client, hand-edited JSON.
//! Losing a whole document over one bad element is never acceptable, so
//! decoding drops the offender, keeps the rest of the page, and reports an
//! [`Issue`] per drop. `Err` is reserved for I/O-level failures and
//! documents whose envelope itself does not parse.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

use crate::error::Result;
use crate::model::{DocElement, Document, DocumentPage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// One non-fatal finding about persisted content.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub severity: Severity,
    pub page_index: usize,
    pub element_id: Option<String>,
    pub message: String,
}

impl Issue {
    fn warning(page_index: usize, element_id: Option<String>, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            page_index,
            element_id,
            message,
        }
    }

    fn error(page_index: usize, element_id: Option<String>, message: String) -> Self {
        Self {
            severity: Severity::Error,
            page_index,
            element_id,
            message,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.element_id {
            Some(id) => write!(
                f,
                "page {}, element {}: {}",
                self.page_index + 1,
                id,
                self.message
            ),
            None => write!(f, "page {}: {}", self.page_index + 1, self.message),
        }
    }
}

#[derive(Deserialize)]
struct RawDocument {
    id: Uuid,
    title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    pages: Vec<Value>,
}

#[derive(Deserialize)]
struct RawPage {
    #[serde(default)]
    template_id: Option<String>,
    #[serde(default)]
    elements: Option<Vec<Value>>,
    #[serde(default)]
    areas_content: Option<BTreeMap<String, String>>,
}

/// Decode a full document leniently.
///
/// The envelope (id, title, timestamps) must parse; anything wrong inside a
/// page degrades to issues instead of failing the load.
pub fn decode_document(value: Value) -> Result<(Document, Vec<Issue>)> {
    let raw: RawDocument = serde_json::from_value(value)?;
    let mut issues = Vec::new();
    let mut pages = Vec::with_capacity(raw.pages.len());
    for (index, page_value) in raw.pages.into_iter().enumerate() {
        let (page, mut page_issues) = decode_page(page_value, index);
        issues.append(&mut page_issues);
        pages.push(page);
    }
    Ok((
        Document {
            id: raw.id,
            title: raw.title,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
            pages,
        },
        issues,
    ))
}

/// Decode one page, dropping elements that do not parse.
///
/// A page that does not even look like a page becomes a blank page with an
/// error-level issue. If the stored `elements` key was present, it stays
/// present after decoding (possibly as an empty list), so an all-malformed
/// element list still falls back to `areas_content` at resolution time.
pub fn decode_page(value: Value, page_index: usize) -> (DocumentPage, Vec<Issue>) {
    let raw: RawPage = match serde_json::from_value(value) {
        Ok(raw) => raw,
        Err(err) => {
            log::warn!("dropping unreadable page {}: {}", page_index + 1, err);
            return (
                DocumentPage::default(),
                vec![Issue::error(
                    page_index,
                    None,
                    format!("page is not readable and was replaced by a blank page: {err}"),
                )],
            );
        }
    };

    let mut issues = Vec::new();
    let elements = raw.elements.map(|values| {
        let mut kept = Vec::with_capacity(values.len());
        for el_value in values {
            let id_hint = el_value
                .get("id")
                .and_then(Value::as_str)
                .map(str::to_string);
            match serde_json::from_value::<DocElement>(el_value) {
                Ok(el) => kept.push(el),
                Err(err) => {
                    log::warn!(
                        "dropping malformed element on page {}: {}",
                        page_index + 1,
                        err
                    );
                    issues.push(Issue::error(
                        page_index,
                        id_hint,
                        format!("element dropped, not decodable: {err}"),
                    ));
                }
            }
        }
        kept
    });

    (
        DocumentPage {
            template_id: raw.template_id,
            elements,
            areas_content: raw.areas_content,
        },
        issues,
    )
}

/// Report non-fatal conditions on an already-decoded page.
///
/// Nothing found here stops rendering or editing; a doctor run surfaces
/// these so a human can clean them up.
pub fn check_page(page: &DocumentPage, page_index: usize) -> Vec<Issue> {
    let mut issues = Vec::new();
    let Some(els) = page.elements.as_deref() else {
        return issues;
    };

    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
    for el in els {
        *seen.entry(el.id.as_str()).or_insert(0) += 1;
    }
    for (id, count) in seen {
        if count > 1 {
            issues.push(Issue::warning(
                page_index,
                Some(id.to_string()),
                format!("id appears {count} times; the last occurrence wins"),
            ));
        }
    }

    for el in els {
        if el.file_id() == Some("") {
            issues.push(Issue::warning(
                page_index,
                Some(el.id.clone()),
                "image has an empty file reference".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&el.x_pct) || !(0.0..=100.0).contains(&el.y_pct) {
            issues.push(Issue::warning(
                page_index,
                Some(el.id.clone()),
                format!("origin ({}, {}) is off-page", el.x_pct, el.y_pct),
            ));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::PageContent;
    use serde_json::json;

    #[test]
    fn unknown_element_type_is_dropped_not_fatal() {
        let (page, issues) = decode_page(
            json!({
                "elements": [
                    {"id": "good", "type": "text", "content": "hi",
                     "x_pct": 1.0, "y_pct": 2.0, "width_pct": 3.0, "height_pct": 4.0},
                    {"id": "bad", "type": "video", "content": "clip.mp4",
                     "x_pct": 1.0, "y_pct": 2.0, "width_pct": 3.0, "height_pct": 4.0}
                ]
            }),
            0,
        );
        assert_eq!(page.element_count(), 1);
        assert!(page.element("good").is_some());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].element_id.as_deref(), Some("bad"));
    }

    #[test]
    fn element_missing_id_is_dropped() {
        let (page, issues) = decode_page(
            json!({
                "elements": [
                    {"type": "text", "content": "no id",
                     "x_pct": 1.0, "y_pct": 2.0, "width_pct": 3.0, "height_pct": 4.0}
                ]
            }),
            2,
        );
        assert_eq!(page.element_count(), 0);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].page_index, 2);
        assert!(issues[0].element_id.is_none());
    }

    #[test]
    fn all_malformed_elements_fall_back_to_legacy() {
        let (page, issues) = decode_page(
            json!({
                "template_id": "t1",
                "elements": [{"nonsense": true}],
                "areas_content": {"header": "Hello"}
            }),
            0,
        );
        assert_eq!(issues.len(), 1);
        // elements stays present-but-empty, so resolution uses the slots
        assert_eq!(page.elements.as_deref(), Some(&[] as &[_]));
        assert!(matches!(page.content(), PageContent::Legacy(_)));
    }

    #[test]
    fn unreadable_page_becomes_blank_with_issue() {
        let (page, issues) = decode_page(json!("not a page"), 1);
        assert!(page.content().is_blank());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn decode_document_collects_issues_across_pages() {
        let (doc, issues) = decode_document(json!({
            "id": "0b5f9c1e-9d5f-4f6a-8f22-0e3f5f8a2b11",
            "title": "Quote",
            "created_at": "2024-03-01T10:00:00Z",
            "updated_at": "2024-03-01T10:00:00Z",
            "pages": [
                {"elements": [{"id": "x", "type": "blob"}]},
                {"areas_content": {"footer": "Bye"}}
            ]
        }))
        .unwrap();
        assert_eq!(doc.title, "Quote");
        assert_eq!(doc.pages.len(), 2);
        assert_eq!(issues.len(), 1);
        assert!(matches!(doc.pages[1].content(), PageContent::Legacy(_)));
    }

    #[test]
    fn broken_envelope_is_an_error() {
        assert!(decode_document(json!({"title": "no id"})).is_err());
    }

    #[test]
    fn check_page_flags_duplicates_and_empty_refs() {
        let mut page = DocumentPage::new(None);
        let mut a = DocElement::text();
        a.id = "dup".into();
        let mut b = DocElement::text();
        b.id = "dup".into();
        page.push_element(a);
        page.push_element(b);
        page.push_element(DocElement::image(""));

        let issues = check_page(&page, 0);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
        assert!(issues.iter().any(|i| i.element_id.as_deref() == Some("dup")));
        assert!(issues.iter().any(|i| i.message.contains("empty file reference")));
    }

    #[test]
    fn check_page_flags_off_page_origin() {
        let mut page = DocumentPage::new(None);
        let mut el = DocElement::text();
        el.x_pct = -30.0;
        page.push_element(el);
        let issues = check_page(&page, 3);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("off-page"));
    }

    #[test]
    fn clean_page_has_no_issues() {
        let mut page = DocumentPage::new(Some("t1".into()));
        page.push_element(DocElement::text());
        page.push_element(DocElement::image("file-1"));
        assert!(check_page(&page, 0).is_empty());
    }
}
