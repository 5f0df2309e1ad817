//! Header scroll styling

use crate::dom::Dom;
use crate::markup::{HEADER_ID, SCROLLED_CLASS};

/// Marks the header as scrolled once the page leaves the top
#[derive(Debug, Clone)]
pub struct HeaderScrollStyler<N> {
    header: N,
    threshold: f64,
}

impl<N: Clone + PartialEq> HeaderScrollStyler<N> {
    pub fn attach<D: Dom<Node = N>>(dom: &D, threshold: f64) -> Option<Self> {
        let header = dom.by_id(HEADER_ID)?;
        Some(Self { header, threshold })
    }

    pub fn on_scroll<D: Dom<Node = N>>(&self, dom: &mut D, offset_y: f64) {
        if offset_y > self.threshold {
            dom.add_class(&self.header, SCROLLED_CLASS);
        } else {
            dom.remove_class(&self.header, SCROLLED_CLASS);
        }
    }

    pub fn header(&self) -> &N {
        &self.header
    }
}
