use super::DocumentStore;
use crate::error::{DocError, Result};
use crate::model::Document;
use std::collections::HashMap;
use std::path::PathBuf;
use uuid::Uuid;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    documents: HashMap<Uuid, Document>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for InMemoryStore {
    fn save_document(&mut self, doc: &Document) -> Result<()> {
        self.documents.insert(doc.id, doc.clone());
        Ok(())
    }

    fn get_document(&self, id: &Uuid) -> Result<Document> {
        self.documents
            .get(id)
            .cloned()
            .ok_or(DocError::DocumentNotFound(*id))
    }

    fn list_documents(&self) -> Result<Vec<Document>> {
        let mut docs: Vec<Document> = self.documents.values().cloned().collect();
        docs.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(docs)
    }

    fn delete_document(&mut self, id: &Uuid) -> Result<()> {
        if self.documents.remove(id).is_none() {
            return Err(DocError::DocumentNotFound(*id));
        }
        Ok(())
    }

    fn document_path(&self, _id: &Uuid) -> Result<PathBuf> {
        Err(DocError::Store(
            "In-memory store has no backing files".to_string(),
        ))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{DocElement, DocumentPage};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_documents(mut self, count: usize) -> Self {
            for i in 0..count {
                let doc = Document::new(format!("Test Document {}", i + 1));
                self.store.save_document(&doc).unwrap();
            }
            self
        }

        /// A document with one populated freeform page, saved to the store.
        pub fn with_populated_document(mut self) -> (Self, Document) {
            let mut doc = Document::new("Populated".to_string());
            let mut page = DocumentPage::new(Some("t1".to_string()));
            page.push_element(DocElement::text());
            page.push_element(DocElement::image("file-1"));
            doc.pages.push(page);
            self.store.save_document(&doc).unwrap();
            (self, doc)
        }
    }
}
