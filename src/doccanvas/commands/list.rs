use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.listed_documents = store.list_documents()?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_all_documents() {
        let fixture = StoreFixture::new().with_documents(2);
        let result = run(&fixture.store).unwrap();
        assert_eq!(result.listed_documents.len(), 2);
    }
}
