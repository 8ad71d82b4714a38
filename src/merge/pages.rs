//! Page tree manipulation.
//!
//! Pages of every source document end up as direct children of one new
//! `Pages` node. Before a page is moved, the attributes it used to inherit
//! from its old ancestors are copied onto the page itself, otherwise pages
//! that relied on an inherited `MediaBox` or `Resources` would lose them.

use crate::error::{PdfMergeError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId};

/// Page attributes that may be inherited from ancestor page tree nodes.
pub const INHERITABLE_ATTRIBUTES: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guards against cyclic `Parent` chains in damaged files.
const MAX_TREE_DEPTH: usize = 64;

/// Copy inherited attributes from the ancestors of `page_id` onto the page.
///
/// Attributes already present on the page win over inherited ones, and the
/// nearest ancestor wins over those further up.
///
/// # Errors
///
/// Returns an error if `page_id` is not a dictionary in `doc`.
pub fn materialize_inherited_attributes(doc: &mut Document, page_id: ObjectId) -> Result<()> {
    let page = doc
        .get_dictionary(page_id)
        .map_err(|e| PdfMergeError::merge_failed(format!("Failed to get page: {e}")))?;

    let mut missing: Vec<&[u8]> = INHERITABLE_ATTRIBUTES
        .iter()
        .copied()
        .filter(|key| !page.has(key))
        .collect();
    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
    let mut inherited: Vec<(Vec<u8>, Object)> = Vec::new();

    for _ in 0..MAX_TREE_DEPTH {
        let Some(parent_id) = parent else { break };
        if missing.is_empty() {
            break;
        }

        let Ok(node) = doc.get_dictionary(parent_id) else {
            break;
        };

        missing.retain(|key| match node.get(key) {
            Ok(value) => {
                inherited.push((key.to_vec(), value.clone()));
                false
            }
            Err(_) => true,
        });
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }

    if inherited.is_empty() {
        return Ok(());
    }

    let page = doc
        .get_dictionary_mut(page_id)
        .map_err(|e| PdfMergeError::merge_failed(format!("Failed to get page: {e}")))?;
    for (key, value) in inherited {
        page.set(key, value);
    }

    Ok(())
}

/// Build a flat `Pages` node holding `page_ids` in order.
pub fn pages_node(page_ids: &[ObjectId]) -> Dictionary {
    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();

    let mut pages = Dictionary::new();
    pages.set("Type", Object::Name(b"Pages".to_vec()));
    pages.set("Count", Object::Integer(page_ids.len() as i64));
    pages.set("Kids", Object::Array(kids));
    pages
}

/// Point the `Parent` entry of every page at `pages_id`.
///
/// # Errors
///
/// Returns an error if a page object is missing or not a dictionary.
pub fn reparent_pages(doc: &mut Document, page_ids: &[ObjectId], pages_id: ObjectId) -> Result<()> {
    for &page_id in page_ids {
        let page = doc.get_dictionary_mut(page_id).map_err(|e| {
            PdfMergeError::merge_failed(format!("Page {page_id:?} is not a dictionary: {e}"))
        })?;
        page.set("Parent", Object::Reference(pages_id));
    }

    Ok(())
}

/// Get the number of pages in a document.
pub fn page_count(doc: &Document) -> usize {
    doc.get_pages().len()
}
