//! Animated in-page anchor navigation

use crate::dom::{Dom, ScrollBehavior, Selector};
use crate::markup::HEADER_ID;

/// Scrolls same-page anchors into view below the fixed header
#[derive(Debug, Clone)]
pub struct SmoothScrollController<N> {
    anchors: Vec<(N, String)>,
    header: Option<N>,
}

impl<N: Clone + PartialEq> SmoothScrollController<N> {
    pub fn attach<D: Dom<Node = N>>(dom: &D) -> Option<Self> {
        let anchors: Vec<(N, String)> = dom
            .select_all(Selector::HrefPrefix("#"))
            .into_iter()
            .filter_map(|a| dom.attr(&a, "href").map(|href| (a, href)))
            .collect();
        if anchors.is_empty() {
            return None;
        }
        Some(Self {
            anchors,
            header: dom.by_id(HEADER_ID),
        })
    }

    /// Returns whether the click was turned into a smooth scroll, in
    /// which case the default navigation must be suppressed
    pub fn on_click<D: Dom<Node = N>>(&self, dom: &mut D, target: &N) -> bool {
        let Some((_, href)) = self.anchors.iter().find(|(a, _)| dom.contains(a, target)) else {
            return false;
        };
        let Some(destination) = resolve(dom, href) else {
            tracing::debug!(%href, "anchor target not found");
            return false;
        };

        let header_height = self
            .header
            .as_ref()
            .map(|h| dom.offset_height(h))
            .unwrap_or(0.0);
        let top = dom.document_top(&destination) - header_height;
        tracing::debug!(%href, top, "smooth scroll");
        dom.scroll_to(top, ScrollBehavior::Smooth);
        true
    }
}

/// Element an in-page `href` points at; a bare `#` means the page top
fn resolve<D: Dom>(dom: &D, href: &str) -> Option<D::Node> {
    match href.strip_prefix('#') {
        Some("") => Some(dom.root()),
        Some(id) => dom.by_id(id),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviors::fixtures::document;
    use crate::memory::ScrollRequest;

    #[test]
    fn scrolls_to_target_minus_header() {
        let (mut dom, body) = document();
        let header = dom.create(body, "header", &[("id", "header")]);
        dom.set_layout(header, 0.0, 80.0);
        let link = dom.create(header, "a", &[("href", "#access")]);
        let label = dom.create(link, "span", &[]);
        let section = dom.create(body, "section", &[("id", "access")]);
        dom.set_layout(section, 1200.0, 400.0);
        let scroller = SmoothScrollController::attach(&dom).unwrap();

        assert!(scroller.on_click(&mut dom, &label));
        assert_eq!(
            dom.scroll_requests(),
            [ScrollRequest {
                top: 1120.0,
                behavior: ScrollBehavior::Smooth
            }]
        );
    }

    #[test]
    fn bare_hash_scrolls_to_top() {
        let (mut dom, body) = document();
        let link = dom.create(body, "a", &[("href", "#")]);
        let scroller = SmoothScrollController::attach(&dom).unwrap();

        assert!(scroller.on_click(&mut dom, &link));
        assert_eq!(dom.scroll_requests()[0].top, 0.0);
    }

    #[test]
    fn unknown_target_falls_through() {
        let (mut dom, body) = document();
        let link = dom.create(body, "a", &[("href", "#nowhere")]);
        let scroller = SmoothScrollController::attach(&dom).unwrap();

        assert!(!scroller.on_click(&mut dom, &link));
        assert!(dom.scroll_requests().is_empty());
    }

    #[test]
    fn external_links_are_not_anchors() {
        let (mut dom, body) = document();
        dom.create(body, "a", &[("href", "https://example.com/#top")]);
        assert!(SmoothScrollController::attach(&dom).is_none());
    }
}
