//! Gallery image viewer

use crate::dom::{Dom, Selector};
use crate::markup::{
    ACTIVE_CLASS, ESCAPE_KEY, GALLERY_ITEM_CLASS, GALLERY_MODAL_ID, GALLERY_SRC_ATTR,
    MODAL_CLOSE_CLASS, MODAL_IMAGE_ID,
};

/// Viewer state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open { src: String },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }
}

/// Opens the modal on a gallery thumbnail and closes it on the close
/// control, a background click or Escape. Page scrolling is suppressed
/// exactly while the modal is open.
#[derive(Debug, Clone)]
pub struct GalleryModalController<N> {
    items: Vec<N>,
    modal: N,
    image: N,
    close: N,
    body: N,
    state: ModalState,
}

impl<N: Clone + PartialEq> GalleryModalController<N> {
    pub fn attach<D: Dom<Node = N>>(dom: &D) -> Option<Self> {
        let items = dom.select_all(Selector::Class(GALLERY_ITEM_CLASS));
        if items.is_empty() {
            return None;
        }

        Some(Self {
            items,
            modal: dom.by_id(GALLERY_MODAL_ID)?,
            image: dom.by_id(MODAL_IMAGE_ID)?,
            close: dom.select(Selector::Class(MODAL_CLOSE_CLASS))?,
            body: dom.body(),
            state: ModalState::Closed,
        })
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// Returns whether the click opened or closed the modal.
    ///
    /// The image source is read from the clicked item at click time; an
    /// item without one is ignored.
    pub fn on_click<D: Dom<Node = N>>(&mut self, dom: &mut D, target: &N) -> bool {
        if dom.contains(&self.close, target) || *target == self.modal {
            self.close(dom);
            return true;
        }

        let Some(item) = self.items.iter().find(|item| dom.contains(item, target)) else {
            return false;
        };
        match dom.attr(item, GALLERY_SRC_ATTR) {
            Some(src) => {
                self.open(dom, src);
                true
            }
            None => {
                tracing::debug!("gallery item without {} ignored", GALLERY_SRC_ATTR);
                false
            }
        }
    }

    /// Returns whether the key closed the modal
    pub fn on_key<D: Dom<Node = N>>(&mut self, dom: &mut D, key: &str) -> bool {
        if key == ESCAPE_KEY && self.state.is_open() {
            self.close(dom);
            return true;
        }
        false
    }

    pub fn open<D: Dom<Node = N>>(&mut self, dom: &mut D, src: String) {
        dom.set_attr(&self.image, "src", &src);
        dom.add_class(&self.modal, ACTIVE_CLASS);
        dom.set_style(&self.body, "overflow", "hidden");
        tracing::debug!(%src, "gallery modal opened");
        self.state = ModalState::Open { src };
    }

    pub fn close<D: Dom<Node = N>>(&mut self, dom: &mut D) {
        dom.remove_class(&self.modal, ACTIVE_CLASS);
        dom.set_style(&self.body, "overflow", "");
        if self.state.is_open() {
            tracing::debug!("gallery modal closed");
        }
        self.state = ModalState::Closed;
    }
}
