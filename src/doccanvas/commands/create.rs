use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Document;
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(store: &mut S, title: String) -> Result<CmdResult> {
    let doc = Document::new(title);
    store.save_document(&doc)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Created document {}: {}",
        doc.id, doc.title
    )));
    result.affected_documents.push(doc);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::store::DocumentStore;

    #[test]
    fn creates_empty_document() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Proposal".into()).unwrap();

        let doc = &result.affected_documents[0];
        assert_eq!(doc.title, "Proposal");
        assert!(doc.pages.is_empty());
        assert_eq!(store.get_document(&doc.id).unwrap().title, "Proposal");
    }
}
