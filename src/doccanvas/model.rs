//! Core data types: [`DocElement`], [`DocumentPage`], [`Document`].
//!
//! The wire shape of these types is a compatibility contract with every
//! document already persisted by the dashboard and mobile clients. An
//! element serializes as a `type`-tagged object with a single `content`
//! string (the text payload for text elements, the asset file id for image
//! elements) and an optional `fontSize`; a page carries `template_id`,
//! `elements`, and the legacy `areas_content` slot map. Field names must
//! not change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::ident;

pub const DEFAULT_TEXT_CONTENT: &str = "New text";
pub const DEFAULT_FONT_SIZE: u32 = 12;

/// What an element is, and the payload that goes with it.
///
/// Internally tagged so the serialized form is the legacy flat shape:
/// `{"type": "text", "content": "...", "fontSize": 12}`. The `content`
/// field is opaque string storage whose meaning depends on the variant;
/// the enum makes misreading one kind's payload as the other's a type
/// error rather than a runtime bug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    Text {
        content: String,
        #[serde(rename = "fontSize", skip_serializing_if = "Option::is_none")]
        font_size: Option<u32>,
    },
    Image {
        content: String,
    },
}

/// A single placeable unit on a page.
///
/// Geometry is expressed in percent of the page surface, nominally 0..=100.
/// Values outside that range mean "off-page" and are tolerated, never
/// clamped: an editor legitimately holds such values mid-drag.
///
/// `id` is the sole key editors use to update, delete, or reorder an
/// element; it is unique within one page's element list and stable for the
/// element's lifetime. The kind is fixed at creation — changing a text
/// element into an image is modeled as remove + create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocElement {
    pub id: String,
    #[serde(flatten)]
    pub kind: ElementKind,
    pub x_pct: f64,
    pub y_pct: f64,
    pub width_pct: f64,
    pub height_pct: f64,
}

impl DocElement {
    /// New text element with placeholder content, placed fully on-page near
    /// the top left so the editor can show it without scrolling.
    pub fn text() -> Self {
        Self {
            id: ident::new_id(),
            kind: ElementKind::Text {
                content: DEFAULT_TEXT_CONTENT.to_string(),
                font_size: Some(DEFAULT_FONT_SIZE),
            },
            x_pct: 10.0,
            y_pct: 20.0,
            width_pct: 80.0,
            height_pct: 8.0,
        }
    }

    /// New image element referencing `file_id` in the external asset store.
    ///
    /// The reference is not checked here; obtaining a valid file id before
    /// calling is the caller's obligation. An empty id is accepted (the
    /// factory never fails) and surfaced later by `validate::check_page`.
    pub fn image(file_id: impl Into<String>) -> Self {
        Self {
            id: ident::new_id(),
            kind: ElementKind::Image {
                content: file_id.into(),
            },
            x_pct: 10.0,
            y_pct: 30.0,
            width_pct: 40.0,
            height_pct: 25.0,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, ElementKind::Text { .. })
    }

    pub fn is_image(&self) -> bool {
        matches!(self.kind, ElementKind::Image { .. })
    }

    /// The text payload, for text elements only.
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Text { content, .. } => Some(content),
            ElementKind::Image { .. } => None,
        }
    }

    /// The asset file id, for image elements only.
    pub fn file_id(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Image { content } => Some(content),
            ElementKind::Text { .. } => None,
        }
    }

    /// Replace the payload string, whatever it means for this kind.
    pub fn set_content(&mut self, value: impl Into<String>) {
        match &mut self.kind {
            ElementKind::Text { content, .. } => *content = value.into(),
            ElementKind::Image { content } => *content = value.into(),
        }
    }

    pub fn font_size(&self) -> Option<u32> {
        match self.kind {
            ElementKind::Text { font_size, .. } => font_size,
            ElementKind::Image { .. } => None,
        }
    }

    /// Set the font size. Returns false (and changes nothing) on an image
    /// element, where the field has no meaning.
    pub fn set_font_size(&mut self, size: Option<u32>) -> bool {
        match &mut self.kind {
            ElementKind::Text { font_size, .. } => {
                *font_size = size;
                true
            }
            ElementKind::Image { .. } => false,
        }
    }
}

/// One page of a document: a template reference plus content in one of two
/// representations.
///
/// `elements` is the current freeform representation; list order is z-order
/// (later elements render on top). `areas_content` is the legacy fixed-slot
/// map written by pre-freeform clients, kept readable forever. Which one is
/// authoritative is decided by [`DocumentPage::content`], never by which
/// field happens to be non-null.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<DocElement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub areas_content: Option<BTreeMap<String, String>>,
}

impl DocumentPage {
    /// Fresh page with both content representations absent. `None` for the
    /// template means a blank freeform page.
    pub fn new(template_id: Option<String>) -> Self {
        Self {
            template_id,
            elements: None,
            areas_content: None,
        }
    }

    /// Append an element, returning its id.
    pub fn push_element(&mut self, element: DocElement) -> String {
        let id = element.id.clone();
        self.elements.get_or_insert_with(Vec::new).push(element);
        id
    }

    /// Look up an element by id.
    ///
    /// Duplicate ids should not occur but have been seen from buggy client
    /// merges; lookups resolve to the *last* matching element so that the
    /// most recently appended write wins.
    pub fn element(&self, id: &str) -> Option<&DocElement> {
        self.elements
            .as_deref()
            .and_then(|els| els.iter().rev().find(|el| el.id == id))
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut DocElement> {
        self.elements
            .as_deref_mut()
            .and_then(|els| els.iter_mut().rev().find(|el| el.id == id))
    }

    /// Remove an element by id and return it. Removal from the list is the
    /// element's destruction; there is no separate delete call.
    pub fn remove_element(&mut self, id: &str) -> Option<DocElement> {
        let els = self.elements.as_mut()?;
        let pos = els.iter().rposition(|el| el.id == id)?;
        Some(els.remove(pos))
    }

    /// Move an element to `new_index` in the z-order. The index is clamped
    /// to the list length. Returns false if no element has the id.
    pub fn move_element(&mut self, id: &str, new_index: usize) -> bool {
        let Some(els) = self.elements.as_mut() else {
            return false;
        };
        let Some(pos) = els.iter().rposition(|el| el.id == id) else {
            return false;
        };
        let el = els.remove(pos);
        let idx = new_index.min(els.len());
        els.insert(idx, el);
        true
    }

    pub fn element_count(&self) -> usize {
        self.elements.as_deref().map_or(0, |els| els.len())
    }
}

/// The persistence envelope: what the editor actually saves and loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pages: Vec<DocumentPage>,
}

impl Document {
    pub fn new(title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            created_at: now,
            updated_at: now,
            pages: Vec::new(),
        }
    }
}
