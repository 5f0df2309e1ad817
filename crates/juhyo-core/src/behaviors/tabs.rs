//! Tabbed content panels

use crate::dom::{Dom, Selector};
use crate::error::{PageError, PageResult};
use crate::markup::{ACTIVE_CLASS, TAB_ATTR, TAB_BUTTON_CLASS, TAB_PANEL_CLASS};

/// A tab button and the panel it reveals
#[derive(Debug, Clone, PartialEq)]
pub struct TabPair<N> {
    pub id: String,
    pub button: N,
    pub panel: N,
}

/// Exclusive selection among the page's tab panels.
///
/// Every button is resolved to its panel while attaching, so a button
/// pointing at a missing panel fails construction instead of a click.
#[derive(Debug, Clone)]
pub struct TabController<N> {
    pairs: Vec<TabPair<N>>,
    panels: Vec<N>,
}

impl<N: Clone + PartialEq> TabController<N> {
    pub fn attach<D: Dom<Node = N>>(dom: &D) -> PageResult<Option<Self>> {
        let buttons = dom.select_all(Selector::Class(TAB_BUTTON_CLASS));
        if buttons.is_empty() {
            return Ok(None);
        }

        let pairs = buttons
            .into_iter()
            .map(|button| -> PageResult<TabPair<N>> {
                let id = dom.attr(&button, TAB_ATTR).ok_or(PageError::MissingTabId)?;
                let panel = dom
                    .by_id(&id)
                    .ok_or_else(|| PageError::MissingTabPanel { tab: id.clone() })?;
                Ok(TabPair { id, button, panel })
            })
            .collect::<PageResult<Vec<_>>>()?;

        let mut panels = dom.select_all(Selector::Class(TAB_PANEL_CLASS));
        for pair in &pairs {
            if !panels.contains(&pair.panel) {
                panels.push(pair.panel.clone());
            }
        }

        Ok(Some(Self { pairs, panels }))
    }

    pub fn pairs(&self) -> &[TabPair<N>] {
        &self.pairs
    }

    /// Returns whether the click selected a tab
    pub fn on_click<D: Dom<Node = N>>(&self, dom: &mut D, target: &N) -> bool {
        let Some(index) = self
            .pairs
            .iter()
            .position(|pair| dom.contains(&pair.button, target))
        else {
            return false;
        };
        self.select(dom, index);
        true
    }

    /// Make the `index`th pair the only active button and panel
    pub fn select<D: Dom<Node = N>>(&self, dom: &mut D, index: usize) {
        let Some(pair) = self.pairs.get(index) else {
            return;
        };
        for other in &self.pairs {
            dom.remove_class(&other.button, ACTIVE_CLASS);
        }
        for panel in &self.panels {
            dom.remove_class(panel, ACTIVE_CLASS);
        }
        dom.add_class(&pair.button, ACTIVE_CLASS);
        dom.add_class(&pair.panel, ACTIVE_CLASS);
        tracing::debug!(tab = %pair.id, "tab selected");
    }

    /// Identifier of the pair whose panel is currently active
    pub fn active_tab<D: Dom<Node = N>>(&self, dom: &D) -> Option<&str> {
        self.pairs
            .iter()
            .find(|pair| dom.has_class(&pair.panel, ACTIVE_CLASS))
            .map(|pair| pair.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviors::fixtures::document;
    use crate::memory::{MemoryDom, NodeId};

    fn tabs(dom: &mut MemoryDom, body: NodeId, ids: &[&str]) -> (Vec<NodeId>, Vec<NodeId>) {
        let bar = dom.create(body, "div", &[("class", "tabs")]);
        let buttons = ids
            .iter()
            .map(|id| dom.create(bar, "button", &[("class", "tab-button"), ("data-tab", *id)]))
            .collect();
        let panels = ids
            .iter()
            .map(|id| dom.create(body, "section", &[("class", "tab-content"), ("id", *id)]))
            .collect();
        (buttons, panels)
    }

    #[test]
    fn click_activates_matching_pair_only() {
        let (mut dom, body) = document();
        let (buttons, panels) = tabs(&mut dom, body, &["winter", "summer", "night"]);
        dom.add_class(&buttons[0], ACTIVE_CLASS);
        dom.add_class(&panels[0], ACTIVE_CLASS);
        let controller = TabController::attach(&dom).unwrap().unwrap();

        assert!(controller.on_click(&mut dom, &buttons[2]));

        let active_buttons: Vec<_> = buttons
            .iter()
            .filter(|b| dom.has_class(b, ACTIVE_CLASS))
            .collect();
        let active_panels: Vec<_> = panels
            .iter()
            .filter(|p| dom.has_class(p, ACTIVE_CLASS))
            .collect();
        assert_eq!(active_buttons, vec![&buttons[2]]);
        assert_eq!(active_panels, vec![&panels[2]]);
        assert_eq!(controller.active_tab(&dom), Some("night"));
    }

    #[test]
    fn unmatched_panel_fails_attach() {
        let (mut dom, body) = document();
        tabs(&mut dom, body, &["winter"]);
        dom.create(body, "button", &[("class", "tab-button"), ("data-tab", "spring")]);

        let err = TabController::attach(&dom).unwrap_err();
        assert!(matches!(err, PageError::MissingTabPanel { ref tab } if tab == "spring"));
    }

    #[test]
    fn button_without_id_fails_attach() {
        let (mut dom, body) = document();
        dom.create(body, "button", &[("class", "tab-button")]);

        let err = TabController::attach(&dom).unwrap_err();
        assert!(matches!(err, PageError::MissingTabId));
    }

    #[test]
    fn no_buttons_means_no_controller() {
        let (dom, _) = document();
        assert!(TabController::attach(&dom).unwrap().is_none());
    }

    #[test]
    fn click_elsewhere_changes_nothing() {
        let (mut dom, body) = document();
        let (_, panels) = tabs(&mut dom, body, &["a", "b"]);
        dom.add_class(&panels[1], ACTIVE_CLASS);
        let controller = TabController::attach(&dom).unwrap().unwrap();

        assert!(!controller.on_click(&mut dom, &body));
        assert_eq!(controller.active_tab(&dom), Some("b"));
    }
}
