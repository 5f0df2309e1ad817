//! Snow particle layer

use rand::Rng;

use crate::dom::Dom;
use crate::markup::SNOW_CONTAINER_ID;
use crate::snow::SnowField;

/// Fills the snow container with animated particles, once
#[derive(Debug, Clone)]
pub struct ParticleEffectGenerator<N> {
    container: N,
    count: usize,
}

impl<N: Clone + PartialEq> ParticleEffectGenerator<N> {
    pub fn attach<D: Dom<Node = N>>(dom: &D, count: usize) -> Option<Self> {
        Some(Self {
            container: dom.by_id(SNOW_CONTAINER_ID)?,
            count,
        })
    }

    /// Inject the particle styles and append one element per particle
    pub fn generate<D: Dom<Node = N>, R: Rng>(&self, dom: &mut D, rng: &mut R) -> SnowField {
        let field = SnowField::generate(self.count, rng);
        dom.inject_stylesheet(&field.stylesheet());
        for (i, flake) in field.flakes.iter().enumerate() {
            let appended = dom.append_element(
                &self.container,
                "div",
                &[
                    ("class", flake.class_attr().as_str()),
                    ("style", flake.inline_style(i).as_str()),
                ],
            );
            if appended.is_none() {
                tracing::warn!(index = i, "snow particle element could not be created");
                break;
            }
        }
        tracing::debug!(count = field.len(), "snow particles generated");
        field
    }
}
