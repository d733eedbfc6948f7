//! Storage layer.
//!
//! [`DocumentStore`] abstracts where documents live so the command layer
//! never touches the filesystem directly:
//!
//! - [`fs::FileStore`]: one pretty-printed `doc-{uuid}.json` per document
//!   under a root directory. Loads go through the lenient decoder in
//!   [`crate::validate`], so one malformed element never loses a document.
//! - [`memory::InMemoryStore`]: HashMap-backed, for tests.
//!
//! The remote dashboard API sits behind the same boundary in production;
//! last-write-wins on save, with no concurrent-edit detection here.

use std::path::PathBuf;
use uuid::Uuid;

use crate::error::Result;
use crate::model::Document;

pub mod fs;
pub mod memory;

/// Abstract interface for document storage.
pub trait DocumentStore {
    /// Save a document (create or update). Last write wins.
    fn save_document(&mut self, doc: &Document) -> Result<()>;

    /// Get a document by id.
    fn get_document(&self, id: &Uuid) -> Result<Document>;

    /// List all stored documents.
    fn list_documents(&self) -> Result<Vec<Document>>;

    /// Delete a document permanently.
    fn delete_document(&mut self, id: &Uuid) -> Result<()>;

    /// Get the backing file path for a document (file-based stores only).
    fn document_path(&self, id: &Uuid) -> Result<PathBuf>;
}
