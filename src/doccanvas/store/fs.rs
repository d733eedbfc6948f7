use super::DocumentStore;
use crate::error::{DocError, Result};
use crate::model::Document;
use crate::validate;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-based document storage: one `doc-{uuid}.json` per document under a
/// root directory.
///
/// Loading is lenient (see [`crate::validate::decode_document`]): malformed
/// elements inside a stored document are dropped with a logged warning
/// rather than failing the read. Issues found while loading are not
/// returned from `get_document`; run the doctor command to see them.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn doc_filename(id: &Uuid) -> String {
        format!("doc-{}.json", id)
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DocError::Io)?;
        }
        Ok(())
    }

    fn read_document(&self, path: &Path) -> Result<Document> {
        let content = fs::read_to_string(path).map_err(DocError::Io)?;
        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(DocError::Serialization)?;
        let (doc, issues) = validate::decode_document(value)?;
        for issue in &issues {
            log::warn!("{}: {}", path.display(), issue);
        }
        Ok(doc)
    }
}

impl DocumentStore for FileStore {
    fn save_document(&mut self, doc: &Document) -> Result<()> {
        self.ensure_root()?;
        let path = self.root.join(Self::doc_filename(&doc.id));
        let content = serde_json::to_string_pretty(doc).map_err(DocError::Serialization)?;
        fs::write(&path, content).map_err(DocError::Io)?;
        log::debug!("saved document {} to {}", doc.id, path.display());
        Ok(())
    }

    fn get_document(&self, id: &Uuid) -> Result<Document> {
        let path = self.root.join(Self::doc_filename(id));
        if !path.exists() {
            return Err(DocError::DocumentNotFound(*id));
        }
        self.read_document(&path)
    }

    fn list_documents(&self) -> Result<Vec<Document>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let mut docs = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(DocError::Io)? {
            let entry = entry.map_err(DocError::Io)?;
            let path = entry.path();
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if !name.starts_with("doc-") || !name.ends_with(".json") {
                continue;
            }
            match self.read_document(&path) {
                Ok(doc) => docs.push(doc),
                Err(err) => {
                    // A single unreadable file must not hide the rest
                    log::warn!("skipping {}: {}", path.display(), err);
                }
            }
        }
        docs.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(docs)
    }

    fn delete_document(&mut self, id: &Uuid) -> Result<()> {
        let path = self.root.join(Self::doc_filename(id));
        if !path.exists() {
            return Err(DocError::DocumentNotFound(*id));
        }
        fs::remove_file(path).map_err(DocError::Io)
    }

    fn document_path(&self, id: &Uuid) -> Result<PathBuf> {
        let path = self.root.join(Self::doc_filename(id));
        if !path.exists() {
            return Err(DocError::DocumentNotFound(*id));
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocElement, DocumentPage};
    use serde_json::json;

    #[test]
    fn save_get_delete_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        let mut doc = Document::new("Proposal".to_string());
        let mut page = DocumentPage::new(Some("t1".into()));
        page.push_element(DocElement::text());
        doc.pages.push(page);

        store.save_document(&doc).unwrap();
        let loaded = store.get_document(&doc.id).unwrap();
        assert_eq!(loaded, doc);

        store.delete_document(&doc.id).unwrap();
        assert!(matches!(
            store.get_document(&doc.id),
            Err(DocError::DocumentNotFound(_))
        ));
    }

    #[test]
    fn list_skips_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.save_document(&Document::new("A".to_string())).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a doc").unwrap();
        fs::write(dir.path().join("doc-broken.json"), "{").unwrap();

        let docs = store.list_documents().unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].title, "A");
    }

    #[test]
    fn malformed_element_survives_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        let doc = Document::new("Damaged".to_string());
        store.save_document(&doc).unwrap();

        // Corrupt the stored file with one good and one undecodable element
        let path = store.document_path(&doc.id).unwrap();
        let mut value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        value["pages"] = json!([{
            "elements": [
                {"id": "ok", "type": "text", "content": "hi",
                 "x_pct": 1.0, "y_pct": 2.0, "width_pct": 3.0, "height_pct": 4.0},
                {"id": "nope", "type": "chart"}
            ]
        }]);
        fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();

        let loaded = store.get_document(&doc.id).unwrap();
        assert_eq!(loaded.pages.len(), 1);
        assert_eq!(loaded.pages[0].element_count(), 1);
        assert!(loaded.pages[0].element("ok").is_some());
    }

    #[test]
    fn document_path_requires_existing_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.document_path(&Uuid::new_v4()).is_err());
    }
}
