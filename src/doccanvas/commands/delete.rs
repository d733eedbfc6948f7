use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DocumentStore;
use uuid::Uuid;

pub fn run<S: DocumentStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    let doc = store.get_document(id)?;
    store.delete_document(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted document {}: {}",
        doc.id, doc.title
    )));
    result.affected_documents.push(doc);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocError;
    use crate::model::Document;
    use crate::store::memory::InMemoryStore;
    use crate::store::DocumentStore;

    #[test]
    fn deletes_existing_document() {
        let mut store = InMemoryStore::new();
        let doc = Document::new("A".into());
        store.save_document(&doc).unwrap();

        run(&mut store, &doc.id).unwrap();
        assert!(store.get_document(&doc.id).is_err());
    }

    #[test]
    fn missing_document_is_an_error() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, &Uuid::new_v4()),
            Err(DocError::DocumentNotFound(_))
        ));
    }
}
