//! Deferred image source assignment

use crate::config::ImageTable;
use crate::dom::Dom;

/// Assigns image sources from a fixed identifier table once the document
/// is ready. Identifiers missing from the document are skipped.
#[derive(Debug, Clone)]
pub struct LazyImageAssigner {
    table: ImageTable,
}

impl LazyImageAssigner {
    pub fn new(table: ImageTable) -> Self {
        Self { table }
    }

    /// Returns the number of elements that received a source
    pub fn assign<D: Dom>(&self, dom: &mut D) -> usize {
        let mut assigned = 0;
        for (id, src) in &self.table {
            match dom.by_id(id) {
                Some(element) => {
                    dom.set_attr(&element, "src", src);
                    assigned += 1;
                }
                None => tracing::trace!(%id, "image element not in document"),
            }
        }
        tracing::debug!(assigned, total = self.table.len(), "image sources assigned");
        assigned
    }
}
