//! In-memory document
//!
//! A small arena-backed element tree implementing [`Dom`]. It has no
//! layout engine: heights and offsets are whatever the fixture sets with
//! [`MemoryDom::set_layout`], and markup passed to `set_inner_html` is
//! stored verbatim instead of being parsed.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::dom::{Dom, ScrollBehavior, Selector};

/// Handle to a node in a [`MemoryDom`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct NodeData {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    styles: Vec<(String, String)>,
    text: String,
    inner_html: Option<String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    offset_height: f64,
    top: f64,
}

/// A recorded call to [`Dom::scroll_to`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// Arena-backed document with `<html>`, `<head>` and `<body>`
#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: Vec<NodeData>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    scrolls: Vec<ScrollRequest>,
}

impl MemoryDom {
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: vec![NodeData {
                tag: "html".to_string(),
                ..Default::default()
            }],
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
            scrolls: Vec::new(),
        };
        dom.head = dom.create(dom.root, "head", &[]);
        dom.body = dom.create(dom.root, "body", &[]);
        dom
    }

    /// Append a new element under `parent`.
    ///
    /// `id` and `class` attributes are understood; `class` is split on
    /// whitespace.
    pub fn create(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut data = NodeData {
            tag: tag.to_string(),
            parent: Some(parent),
            ..Default::default()
        };
        for (name, value) in attrs {
            if *name == "class" {
                data.classes = value.split_whitespace().map(str::to_string).collect();
            } else {
                data.attrs.insert(name.to_string(), value.to_string());
            }
        }
        self.nodes.push(data);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Fix the layout metrics reported for `node`
    pub fn set_layout(&mut self, node: NodeId, top: f64, offset_height: f64) {
        let data = &mut self.nodes[node.0];
        data.top = top;
        data.offset_height = offset_height;
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    pub fn classes(&self, node: NodeId) -> &[String] {
        &self.nodes[node.0].classes
    }

    /// Raw markup last assigned with `set_inner_html`
    pub fn inner_html(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].inner_html.as_deref()
    }

    /// Contents of every injected `<style>` element, in insertion order
    pub fn stylesheets(&self) -> Vec<&str> {
        self.nodes[self.head.0]
            .children
            .iter()
            .filter(|child| self.nodes[child.0].tag == "style")
            .map(|child| self.nodes[child.0].text.as_str())
            .collect()
    }

    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scrolls
    }

    /// Whether `node` is still reachable from the document root
    pub fn is_attached(&self, node: NodeId) -> bool {
        self.ancestors(node).any(|n| n == self.root)
    }

    /// Serialize `node` and its subtree
    pub fn to_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        let data = &self.nodes[node.0];
        let _ = write!(out, "<{}", data.tag);
        if !data.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", data.classes.join(" "));
        }
        for (name, value) in &data.attrs {
            let _ = write!(out, " {}=\"{}\"", name, value);
        }
        if !data.styles.is_empty() {
            let style: Vec<String> = data
                .styles
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect();
            let _ = write!(out, " style=\"{}\"", style.join("; "));
        }
        out.push('>');
        out.push_str(&data.text);
        if let Some(html) = &data.inner_html {
            out.push_str(html);
        }
        for child in &data.children {
            self.write_html(*child, out);
        }
        let _ = write!(out, "</{}>", data.tag);
    }

    /// `node` followed by each of its ancestors
    fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(node), move |n| self.nodes[n.0].parent)
    }

    fn descendants(&self, node: NodeId, out: &mut Vec<NodeId>) {
        for child in &self.nodes[node.0].children {
            out.push(*child);
            self.descendants(*child, out);
        }
    }

    fn matches(&self, node: NodeId, selector: Selector<'_>) -> bool {
        let data = &self.nodes[node.0];
        match selector {
            Selector::Id(id) => data.attrs.get("id").is_some_and(|v| v == id),
            Selector::Class(class) => data.classes.iter().any(|c| c == class),
            Selector::Descendant {
                ancestor_class,
                tag,
            } => {
                data.tag == tag
                    && self
                        .ancestors(node)
                        .skip(1)
                        .any(|a| self.nodes[a.0].classes.iter().any(|c| c == ancestor_class))
            }
            Selector::HrefPrefix(prefix) => {
                data.tag == "a" && data.attrs.get("href").is_some_and(|h| h.starts_with(prefix))
            }
        }
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        let data = &self.nodes[node.0];
        out.push_str(&data.text);
        for child in &data.children {
            self.collect_text(*child, out);
        }
    }
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn by_id(&self, id: &str) -> Option<NodeId> {
        self.select(Selector::Id(id))
    }

    fn select_all(&self, selector: Selector<'_>) -> Vec<NodeId> {
        let mut all = Vec::new();
        self.descendants(self.root, &mut all);
        all.into_iter()
            .filter(|n| self.matches(*n, selector))
            .collect()
    }

    fn body(&self) -> NodeId {
        self.body
    }

    fn root(&self) -> NodeId {
        self.root
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes[node.0].classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.nodes[node.0].classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        self.nodes[node.0].classes.retain(|c| c != class);
    }

    fn attr(&self, node: &NodeId, name: &str) -> Option<String> {
        let data = &self.nodes[node.0];
        if name == "class" {
            return Some(data.classes.join(" "));
        }
        data.attrs.get(name).cloned()
    }

    fn set_attr(&mut self, node: &NodeId, name: &str, value: &str) {
        let data = &mut self.nodes[node.0];
        if name == "class" {
            data.classes = value.split_whitespace().map(str::to_string).collect();
        } else {
            data.attrs.insert(name.to_string(), value.to_string());
        }
    }

    fn style(&self, node: &NodeId, property: &str) -> Option<String> {
        self.nodes[node.0]
            .styles
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.clone())
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        let styles = &mut self.nodes[node.0].styles;
        if value.is_empty() {
            styles.retain(|(k, _)| k != property);
        } else if let Some(entry) = styles.iter_mut().find(|(k, _)| k == property) {
            entry.1 = value.to_string();
        } else {
            styles.push((property.to_string(), value.to_string()));
        }
    }

    fn text(&self, node: &NodeId) -> String {
        let mut out = String::new();
        self.collect_text(*node, &mut out);
        out
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        for child in std::mem::take(&mut self.nodes[node.0].children) {
            self.nodes[child.0].parent = None;
        }
        let data = &mut self.nodes[node.0];
        data.inner_html = None;
        data.text = text.to_string();
    }

    fn set_inner_html(&mut self, node: &NodeId, html: &str) {
        self.set_text(node, "");
        self.nodes[node.0].inner_html = Some(html.to_string());
    }

    fn append_element(
        &mut self,
        parent: &NodeId,
        tag: &str,
        attrs: &[(&str, &str)],
    ) -> Option<NodeId> {
        Some(self.create(*parent, tag, attrs))
    }

    fn remove(&mut self, node: &NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| c != node);
        }
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        self.ancestors(*node).any(|n| n == *ancestor)
    }

    fn offset_height(&self, node: &NodeId) -> f64 {
        self.nodes[node.0].offset_height
    }

    fn document_top(&self, node: &NodeId) -> f64 {
        self.nodes[node.0].top
    }

    fn inject_stylesheet(&mut self, css: &str) {
        let head = self.head;
        let style = self.create(head, "style", &[]);
        self.nodes[style.0].text = css.to_string();
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        self.scrolls.push(ScrollRequest { top, behavior });
    }
}
