use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DocumentStore;
use uuid::Uuid;

pub fn run<S: DocumentStore>(store: &S, id: &Uuid) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.listed_documents.push(store.get_document(id)?);
    Ok(result)
}
