//! Host document seam
//!
//! Components never talk to a browser directly. They hold `Dom::Node`
//! handles obtained once at attach time and mutate them through this
//! trait, which is implemented over `web_sys` in the browser binding and
//! by [`MemoryDom`](crate::memory::MemoryDom) for tests and previews.

use std::fmt;

/// Structural selectors the page needs. Kept as data rather than CSS
/// text so the in-memory document can match them without a CSS engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// `#id`
    Id(&'a str),
    /// `.class`
    Class(&'a str),
    /// `.ancestor tag`
    Descendant { ancestor_class: &'a str, tag: &'a str },
    /// `a[href^="prefix"]`
    HrefPrefix(&'a str),
}

impl Selector<'_> {
    /// CSS text for hosts that have a real selector engine
    pub fn to_css(&self) -> String {
        match self {
            Selector::Id(id) => format!("#{}", id),
            Selector::Class(class) => format!(".{}", class),
            Selector::Descendant {
                ancestor_class,
                tag,
            } => format!(".{} {}", ancestor_class, tag),
            Selector::HrefPrefix(prefix) => format!("a[href^=\"{}\"]", prefix),
        }
    }
}

impl fmt::Display for Selector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// How the viewport moves to a new scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// The host document.
///
/// Mutating methods take `&mut self` even where the host API does not
/// need it, so a component can only write while it is being driven.
pub trait Dom {
    /// Handle to an element of the document
    type Node: Clone + PartialEq + fmt::Debug;

    fn by_id(&self, id: &str) -> Option<Self::Node>;

    /// All matches in document order
    fn select_all(&self, selector: Selector<'_>) -> Vec<Self::Node>;

    fn select(&self, selector: Selector<'_>) -> Option<Self::Node> {
        self.select_all(selector).into_iter().next()
    }

    fn body(&self) -> Self::Node;

    /// The document root (`<html>`)
    fn root(&self) -> Self::Node;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&mut self, node: &Self::Node, class: &str);
    fn remove_class(&mut self, node: &Self::Node, class: &str);

    /// Flip `class` and return whether it is now present
    fn toggle_class(&mut self, node: &Self::Node, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    fn attr(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attr(&mut self, node: &Self::Node, name: &str, value: &str);

    /// Inline style property, `None` when unset
    fn style(&self, node: &Self::Node, property: &str) -> Option<String>;

    /// Set an inline style property; an empty value clears it
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);

    fn text(&self, node: &Self::Node) -> String;
    fn set_text(&mut self, node: &Self::Node, text: &str);

    /// Replace all children of `node` with parsed markup
    fn set_inner_html(&mut self, node: &Self::Node, html: &str);

    /// Create a `tag` element with `attrs` and append it to `parent`.
    /// `None` if the host refused to create the element.
    fn append_element(
        &mut self,
        parent: &Self::Node,
        tag: &str,
        attrs: &[(&str, &str)],
    ) -> Option<Self::Node>;

    /// Detach `node` from the document
    fn remove(&mut self, node: &Self::Node);

    /// Whether `node` is `ancestor` or one of its descendants
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    /// Rendered height including borders
    fn offset_height(&self, node: &Self::Node) -> f64;

    /// Top edge relative to the start of the document
    fn document_top(&self, node: &Self::Node) -> f64;

    /// Append a `<style>` element with `css` to the document head
    fn inject_stylesheet(&mut self, css: &str);

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior);
}
