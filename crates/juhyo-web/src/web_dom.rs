//! [`Dom`] over the live browser document

use juhyo_core::{Dom, ScrollBehavior, Selector};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollToOptions, Window};

pub struct WebDom {
    window: Window,
    document: Document,
    root: Element,
    body: Element,
}

impl WebDom {
    /// `None` outside a window context or before `<body>` exists
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let root = document.document_element()?;
        let body: Element = document.body()?.into();
        Some(Self {
            window,
            document,
            root,
            body,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn html(node: &Element) -> Option<&HtmlElement> {
    node.dyn_ref::<HtmlElement>()
}

impl Dom for WebDom {
    type Node = Element;

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn select_all(&self, selector: Selector<'_>) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(&selector.to_css()) else {
            tracing::warn!(%selector, "selector rejected by the document");
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn body(&self) -> Element {
        self.body.clone()
    }

    fn root(&self) -> Element {
        self.root.clone()
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&mut self, node: &Element, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&mut self, node: &Element, class: &str) {
        let _ = node.class_list().remove_1(class);
    }

    fn toggle_class(&mut self, node: &Element, class: &str) -> bool {
        node.class_list().toggle(class).unwrap_or(false)
    }

    fn attr(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attr(&mut self, node: &Element, name: &str, value: &str) {
        let _ = node.set_attribute(name, value);
    }

    fn style(&self, node: &Element, property: &str) -> Option<String> {
        html(node)
            .and_then(|el| el.style().get_property_value(property).ok())
            .filter(|value| !value.is_empty())
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) {
        let Some(el) = html(node) else {
            return;
        };
        let style = el.style();
        if value.is_empty() {
            let _ = style.remove_property(property);
        } else {
            let _ = style.set_property(property, value);
        }
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_inner_html(&mut self, node: &Element, html: &str) {
        node.set_inner_html(html);
    }

    fn append_element(
        &mut self,
        parent: &Element,
        tag: &str,
        attrs: &[(&str, &str)],
    ) -> Option<Element> {
        let element = self.document.create_element(tag).ok()?;
        for (name, value) in attrs {
            element.set_attribute(name, value).ok()?;
        }
        parent.append_child(&element).ok()?;
        Some(element)
    }

    fn remove(&mut self, node: &Element) {
        node.remove();
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &web_sys::Node = node;
        ancestor.contains(Some(node))
    }

    fn offset_height(&self, node: &Element) -> f64 {
        html(node).map_or(0.0, |el| f64::from(el.offset_height()))
    }

    fn document_top(&self, node: &Element) -> f64 {
        node.get_bounding_client_rect().top() + self.window.scroll_y().unwrap_or(0.0)
    }

    fn inject_stylesheet(&mut self, css: &str) {
        let Some(head) = self.document.head() else {
            return;
        };
        if let Ok(style) = self.document.create_element("style") {
            style.set_text_content(Some(css));
            let _ = head.append_child(&style);
        }
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
