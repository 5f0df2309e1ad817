//! Click-to-play video embed

use crate::config::VideoConfig;
use crate::dom::Dom;
use crate::markup::{PLAY_BUTTON_ID, VIDEO_CONTAINER_ID, VIDEO_THUMBNAIL_ID};

const ALLOW_FEATURES: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Swaps the static thumbnail for a playing embedded video on first click
#[derive(Debug, Clone)]
pub struct VideoEmbedLoader<N> {
    container: N,
    play_button: N,
    video: VideoConfig,
    player: Option<N>,
}

impl<N: Clone + PartialEq> VideoEmbedLoader<N> {
    /// `None` without the container and play button, or when the
    /// configured target is unusable
    pub fn attach<D: Dom<Node = N>>(dom: &D, video: &VideoConfig) -> Option<Self> {
        if let Err(e) = video.validate() {
            tracing::warn!(error = %e, "video loader disabled");
            return None;
        }
        Some(Self {
            container: dom.by_id(VIDEO_CONTAINER_ID)?,
            play_button: dom.by_id(PLAY_BUTTON_ID)?,
            video: video.clone(),
            player: None,
        })
    }

    /// The inserted player, once loaded
    pub fn player(&self) -> Option<&N> {
        self.player.as_ref()
    }

    /// Returns whether this click inserted the player
    pub fn on_click<D: Dom<Node = N>>(&mut self, dom: &mut D, target: &N) -> bool {
        if self.player.is_some() || !dom.contains(&self.container, target) {
            return false;
        }
        let Some(thumbnail) = dom.by_id(VIDEO_THUMBNAIL_ID) else {
            return false;
        };

        dom.remove(&thumbnail);
        dom.remove(&self.play_button);

        let src = self.video.embed_url();
        let Some(player) = dom.append_element(
            &self.container,
            "iframe",
            &[
                ("width", "100%"),
                ("height", self.video.height.as_str()),
                ("src", src.as_str()),
                ("frameborder", "0"),
                ("allow", ALLOW_FEATURES),
                ("allowfullscreen", ""),
            ],
        ) else {
            tracing::warn!("video player element could not be created");
            return false;
        };
        tracing::debug!(%src, "video player inserted");
        self.player = Some(player);
        true
    }
}
