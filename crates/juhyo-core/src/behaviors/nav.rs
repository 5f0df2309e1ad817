//! Collapsible navigation menu

use crate::dom::{Dom, Selector};
use crate::markup::{ACTIVE_CLASS, NAV_CLASS, NAV_TRIGGER_ID};

/// Hamburger trigger and the navigation panel it opens
#[derive(Debug, Clone)]
pub struct NavigationMenuController<N> {
    trigger: N,
    panel: N,
    links: Vec<N>,
}

impl<N: Clone + PartialEq> NavigationMenuController<N> {
    pub fn attach<D: Dom<Node = N>>(dom: &D) -> Option<Self> {
        let trigger = dom.by_id(NAV_TRIGGER_ID)?;
        let panel = dom.select(Selector::Class(NAV_CLASS))?;
        let links = dom.select_all(Selector::Descendant {
            ancestor_class: NAV_CLASS,
            tag: "a",
        });
        Some(Self {
            trigger,
            panel,
            links,
        })
    }

    /// Returns whether the click was on the trigger or one of the links
    pub fn on_click<D: Dom<Node = N>>(&self, dom: &mut D, target: &N) -> bool {
        if dom.contains(&self.trigger, target) {
            dom.toggle_class(&self.trigger, ACTIVE_CLASS);
            let open = dom.toggle_class(&self.panel, ACTIVE_CLASS);
            tracing::debug!(open, "navigation menu toggled");
            return true;
        }

        if self.links.iter().any(|link| dom.contains(link, target)) {
            self.close(dom);
            return true;
        }

        false
    }

    pub fn close<D: Dom<Node = N>>(&self, dom: &mut D) {
        dom.remove_class(&self.trigger, ACTIVE_CLASS);
        dom.remove_class(&self.panel, ACTIVE_CLASS);
    }

    pub fn is_open<D: Dom<Node = N>>(&self, dom: &D) -> bool {
        dom.has_class(&self.panel, ACTIVE_CLASS)
    }
}
