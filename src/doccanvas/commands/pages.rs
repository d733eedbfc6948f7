use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::DocumentPage;
use crate::store::DocumentStore;
use chrono::Utc;
use uuid::Uuid;

pub fn add<S: DocumentStore>(
    store: &mut S,
    doc_id: &Uuid,
    template_id: Option<String>,
) -> Result<CmdResult> {
    let mut doc = store.get_document(doc_id)?;
    doc.pages.push(DocumentPage::new(template_id));
    doc.updated_at = Utc::now();
    store.save_document(&doc)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added page {} to {}",
        doc.pages.len(),
        doc.title
    )));
    result.affected_documents.push(doc);
    Ok(result)
}
