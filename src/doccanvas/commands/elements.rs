//! Element-level editor operations: add, update, remove, reorder.
//!
//! All addressing is by element id within a (document, page) pair, and
//! every mutation saves the whole document back — last write wins at the
//! storage boundary.

use crate::commands::{helpers, CmdMessage, CmdResult, ElementUpdate};
use crate::error::{DocError, Result};
use crate::model::DocElement;
use crate::store::DocumentStore;
use chrono::Utc;
use uuid::Uuid;

pub fn add_text<S: DocumentStore>(
    store: &mut S,
    doc_id: &Uuid,
    page_index: usize,
) -> Result<CmdResult> {
    add_element(store, doc_id, page_index, DocElement::text(), "text")
}

pub fn add_image<S: DocumentStore>(
    store: &mut S,
    doc_id: &Uuid,
    page_index: usize,
    file_id: String,
) -> Result<CmdResult> {
    add_element(store, doc_id, page_index, DocElement::image(file_id), "image")
}

fn add_element<S: DocumentStore>(
    store: &mut S,
    doc_id: &Uuid,
    page_index: usize,
    element: DocElement,
    kind: &str,
) -> Result<CmdResult> {
    let mut doc = store.get_document(doc_id)?;
    let id = helpers::page_mut(&mut doc, page_index)?.push_element(element);
    doc.updated_at = Utc::now();
    store.save_document(&doc)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {} element {} to page {}",
        kind,
        id,
        page_index + 1
    )));
    result.affected_documents.push(doc);
    Ok(result)
}

pub fn update<S: DocumentStore>(
    store: &mut S,
    doc_id: &Uuid,
    page_index: usize,
    element_id: &str,
    update: &ElementUpdate,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if update.is_empty() {
        result.add_message(CmdMessage::info("Nothing to change"));
        return Ok(result);
    }

    let mut doc = store.get_document(doc_id)?;
    {
        let page = helpers::page_mut(&mut doc, page_index)?;
        let el = page
            .element_mut(element_id)
            .ok_or_else(|| DocError::ElementNotFound(element_id.to_string()))?;

        if let Some(content) = &update.content {
            el.set_content(content.clone());
        }
        if let Some(x) = update.x_pct {
            el.x_pct = x;
        }
        if let Some(y) = update.y_pct {
            el.y_pct = y;
        }
        if let Some(w) = update.width_pct {
            el.width_pct = w;
        }
        if let Some(h) = update.height_pct {
            el.height_pct = h;
        }
        if let Some(size) = update.font_size {
            if !el.set_font_size(Some(size)) {
                result.add_message(CmdMessage::warning(
                    "Font size has no effect on an image element",
                ));
            }
        }
    }
    doc.updated_at = Utc::now();
    store.save_document(&doc)?;

    result.add_message(CmdMessage::success(format!("Updated element {}", element_id)));
    result.affected_documents.push(doc);
    Ok(result)
}

pub fn remove<S: DocumentStore>(
    store: &mut S,
    doc_id: &Uuid,
    page_index: usize,
    element_id: &str,
) -> Result<CmdResult> {
    let mut doc = store.get_document(doc_id)?;
    helpers::page_mut(&mut doc, page_index)?
        .remove_element(element_id)
        .ok_or_else(|| DocError::ElementNotFound(element_id.to_string()))?;
    doc.updated_at = Utc::now();
    store.save_document(&doc)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed element {} from page {}",
        element_id,
        page_index + 1
    )));
    result.affected_documents.push(doc);
    Ok(result)
}

pub fn reorder<S: DocumentStore>(
    store: &mut S,
    doc_id: &Uuid,
    page_index: usize,
    element_id: &str,
    new_index: usize,
) -> Result<CmdResult> {
    let mut doc = store.get_document(doc_id)?;
    if !helpers::page_mut(&mut doc, page_index)?.move_element(element_id, new_index) {
        return Err(DocError::ElementNotFound(element_id.to_string()));
    }
    doc.updated_at = Utc::now();
    store.save_document(&doc)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Moved element {} to position {}",
        element_id,
        new_index + 1
    )));
    result.affected_documents.push(doc);
    Ok(result)
}
