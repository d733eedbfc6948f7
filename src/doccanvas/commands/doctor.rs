use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DocumentStore;
use crate::validate;
use uuid::Uuid;

/// Check a stored document for non-fatal problems: duplicate element ids,
/// empty image references, off-page origins. Reports, never repairs.
pub fn run<S: DocumentStore>(store: &S, id: &Uuid) -> Result<CmdResult> {
    let doc = store.get_document(id)?;

    let mut result = CmdResult::default();
    for (index, page) in doc.pages.iter().enumerate() {
        result.issues.extend(validate::check_page(page, index));
    }

    if result.issues.is_empty() {
        result.add_message(CmdMessage::success(format!("{}: no issues found", doc.title)));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "{}: {} issue(s) found",
            doc.title,
            result.issues.len()
        )));
    }
    result.listed_documents.push(doc);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocElement, Document, DocumentPage};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::store::DocumentStore;

    #[test]
    fn clean_document_reports_no_issues() {
        let (fixture, doc) = StoreFixture::new().with_populated_document();
        let result = run(&fixture.store, &doc.id).unwrap();
        assert!(result.issues.is_empty());
    }

    #[test]
    fn issues_carry_page_and_element_loci() {
        let mut store = InMemoryStore::new();
        let mut doc = Document::new("Damaged".into());
        doc.pages.push(DocumentPage::new(None));
        let mut page = DocumentPage::new(None);
        page.push_element(DocElement::image(""));
        doc.pages.push(page);
        store.save_document(&doc).unwrap();

        let result = run(&store, &doc.id).unwrap();
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].page_index, 1);
    }
}
