//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for every
//! client (the bundled CLI, the dashboard backend, tests). It dispatches to
//! `commands/*`, normalizes inputs, and returns structured
//! `Result<CmdResult>` values. No business logic, no I/O formatting, no
//! terminal assumptions live here.
//!
//! `DocApi<S: DocumentStore>` is generic over the storage backend:
//! `DocApi<FileStore>` in production, `DocApi<InMemoryStore>` in tests.

use uuid::Uuid;

use crate::commands::{self, CmdResult, ElementUpdate};
use crate::error::Result;
use crate::store::DocumentStore;

/// The main API facade for document composition operations.
pub struct DocApi<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> DocApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_document(&mut self, title: String) -> Result<CmdResult> {
        commands::create::run(&mut self.store, title)
    }

    pub fn list_documents(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn show_document(&self, id: &Uuid) -> Result<CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn delete_document(&mut self, id: &Uuid) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn add_page(&mut self, doc_id: &Uuid, template_id: Option<String>) -> Result<CmdResult> {
        commands::pages::add(&mut self.store, doc_id, template_id)
    }

    pub fn add_text(&mut self, doc_id: &Uuid, page_index: usize) -> Result<CmdResult> {
        commands::elements::add_text(&mut self.store, doc_id, page_index)
    }

    pub fn add_image(
        &mut self,
        doc_id: &Uuid,
        page_index: usize,
        file_id: String,
    ) -> Result<CmdResult> {
        commands::elements::add_image(&mut self.store, doc_id, page_index, file_id)
    }

    pub fn update_element(
        &mut self,
        doc_id: &Uuid,
        page_index: usize,
        element_id: &str,
        update: &ElementUpdate,
    ) -> Result<CmdResult> {
        commands::elements::update(&mut self.store, doc_id, page_index, element_id, update)
    }

    pub fn remove_element(
        &mut self,
        doc_id: &Uuid,
        page_index: usize,
        element_id: &str,
    ) -> Result<CmdResult> {
        commands::elements::remove(&mut self.store, doc_id, page_index, element_id)
    }

    pub fn move_element(
        &mut self,
        doc_id: &Uuid,
        page_index: usize,
        element_id: &str,
        new_index: usize,
    ) -> Result<CmdResult> {
        commands::elements::reorder(&mut self.store, doc_id, page_index, element_id, new_index)
    }

    pub fn doctor(&self, doc_id: &Uuid) -> Result<CmdResult> {
        commands::doctor::run(&self.store, doc_id)
    }
}
