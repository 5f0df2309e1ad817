//! Loading indicator

use crate::dom::Dom;
use crate::markup::LOADING_INDICATOR_ID;

/// Hides the loading indicator once every resource has loaded
#[derive(Debug, Clone)]
pub struct LoadIndicatorDismisser<N> {
    indicator: N,
}

impl<N: Clone + PartialEq> LoadIndicatorDismisser<N> {
    pub fn attach<D: Dom<Node = N>>(dom: &D) -> Option<Self> {
        Some(Self {
            indicator: dom.by_id(LOADING_INDICATOR_ID)?,
        })
    }

    pub fn on_load<D: Dom<Node = N>>(&self, dom: &mut D) {
        dom.set_style(&self.indicator, "display", "none");
    }
}
