//! Hero background parallax

use crate::dom::Dom;
use crate::markup::MAIN_VISUAL_ID;

#[derive(Debug, Clone)]
pub struct ParallaxBackgroundController<N> {
    visual: N,
    factor: f64,
}

impl<N: Clone + PartialEq> ParallaxBackgroundController<N> {
    pub fn attach<D: Dom<Node = N>>(dom: &D, factor: f64) -> Option<Self> {
        Some(Self {
            visual: dom.by_id(MAIN_VISUAL_ID)?,
            factor,
        })
    }

    pub fn on_scroll<D: Dom<Node = N>>(&self, dom: &mut D, offset_y: f64) {
        dom.set_style(
            &self.visual,
            "background-position",
            &background_position(offset_y * self.factor),
        );
    }
}

/// Vertically shifted, horizontally centered background position
pub fn background_position(shift_px: f64) -> String {
    format!("center calc(50% + {}px)", shift_px)
}
