use crate::error::{DocError, Result};
use crate::model::{Document, DocumentPage};

pub fn page(doc: &Document, index: usize) -> Result<&DocumentPage> {
    let pages = doc.pages.len();
    doc.pages
        .get(index)
        .ok_or(DocError::PageOutOfRange { index, pages })
}

pub fn page_mut(doc: &mut Document, index: usize) -> Result<&mut DocumentPage> {
    let pages = doc.pages.len();
    doc.pages
        .get_mut(index)
        .ok_or(DocError::PageOutOfRange { index, pages })
}
