//! Typed browser events and the outcome of dispatching them

/// An event forwarded by the host to [`Page::dispatch`](crate::Page::dispatch)
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent<N> {
    /// The window scrolled; `offset_y` is the new vertical offset
    Scroll { offset_y: f64 },
    /// A click whose innermost target is `target`
    Click { target: N },
    /// A key press, `key` as reported by `KeyboardEvent.key`
    KeyDown { key: String },
    /// Every resource of the page finished loading
    Load,
    /// Visibility of an observed element changed
    Intersection { target: N, is_intersecting: bool },
    /// An animation frame requested through [`Dispatch::request_frame`]
    AnimationFrame { timestamp_ms: f64 },
}

/// What the host has to do after an event was dispatched
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch<N> {
    /// Suppress the browser's default action for the event
    pub prevent_default: bool,
    /// Elements to stop observing for intersection changes
    pub unobserve: Vec<N>,
    /// Schedule one more animation frame
    pub request_frame: bool,
}

impl<N> Default for Dispatch<N> {
    fn default() -> Self {
        Self {
            prevent_default: false,
            unobserve: Vec::new(),
            request_frame: false,
        }
    }
}

impl<N> Dispatch<N> {
    /// Fold another component's outcome into this one
    pub fn merge(&mut self, other: Dispatch<N>) {
        self.prevent_default |= other.prevent_default;
        self.unobserve.extend(other.unobserve);
        self.request_frame |= other.request_frame;
    }

    pub fn is_empty(&self) -> bool {
        !self.prevent_default && self.unobserve.is_empty() && !self.request_frame
    }
}
