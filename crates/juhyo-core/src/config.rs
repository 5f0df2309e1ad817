//! Page configuration
//!
//! Everything a deployment can tune. Only the video embed target is
//! mandatory; every other field falls back to the values the site ships
//! with.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PageError, PageResult};

/// Placeholder left in unconfigured page templates
pub const VIDEO_ID_PLACEHOLDER: &str = "YOUR_VIDEO_ID";

const EMBED_BASE_URL: &str = "https://www.youtube.com/embed/";

/// Identifier → image path table for [`LazyImageAssigner`](crate::behaviors::LazyImageAssigner)
pub type ImageTable = BTreeMap<String, String>;

/// Day of month → event label
pub type EventTable = BTreeMap<u32, String>;

/// Embedded video target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Video identifier on the embed host
    pub embed_id: String,
    /// CSS height of the inserted player
    #[serde(default = "default_video_height")]
    pub height: String,
    #[serde(default = "default_true")]
    pub autoplay: bool,
}

impl VideoConfig {
    pub fn new(embed_id: impl Into<String>) -> PageResult<Self> {
        let video = Self {
            embed_id: embed_id.into(),
            height: default_video_height(),
            autoplay: true,
        };
        video.validate()?;
        Ok(video)
    }

    pub fn validate(&self) -> PageResult<()> {
        let id = self.embed_id.trim();
        if id.is_empty() {
            return Err(PageError::Config("video.embed_id is empty".to_string()));
        }
        if id == VIDEO_ID_PLACEHOLDER {
            return Err(PageError::Config(format!(
                "video.embed_id is still the placeholder {}",
                VIDEO_ID_PLACEHOLDER
            )));
        }
        if id.contains(|c: char| matches!(c, '/' | '?' | '#' | '"' | '<' | '>')) {
            return Err(PageError::Config(format!(
                "video.embed_id is not a bare identifier: {}",
                id
            )));
        }
        Ok(())
    }

    /// Player URL for the embedded frame
    pub fn embed_url(&self) -> String {
        let mut url = format!("{}{}", EMBED_BASE_URL, self.embed_id.trim());
        if self.autoplay {
            url.push_str("?autoplay=1");
        }
        url
    }
}

/// The unconfigured placeholder. It fails [`VideoConfig::validate`], so
/// the video loader stays detached until a real id is set.
impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            embed_id: VIDEO_ID_PLACEHOLDER.to_string(),
            height: default_video_height(),
            autoplay: true,
        }
    }
}

/// Labels used by the generated calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarLabels {
    /// Weekday column headers, Sunday first
    pub weekdays: [String; 7],
    /// Month title; `{year}` and `{month}` (1-based) are substituted
    pub title: String,
}

impl CalendarLabels {
    pub fn title_for(&self, year: i32, month0: u32) -> String {
        self.title
            .replace("{year}", &year.to_string())
            .replace("{month}", &(month0 + 1).to_string())
    }
}

impl Default for CalendarLabels {
    fn default() -> Self {
        Self {
            weekdays: ["日", "月", "火", "水", "木", "金", "土"].map(str::to_string),
            title: "{year}年 {month}月".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default = "default_events")]
    pub events: EventTable,
    #[serde(default)]
    pub labels: CalendarLabels,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            events: default_events(),
            labels: CalendarLabels::default(),
        }
    }
}

/// Complete configuration of the page behavior layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Defaults to the placeholder, which [`PageConfig::validate`] rejects
    #[serde(default)]
    pub video: VideoConfig,
    /// Scroll offset past which the header is styled as scrolled
    #[serde(default = "default_header_threshold")]
    pub header_threshold: f64,
    /// Fraction of the scroll offset applied to the hero background
    #[serde(default = "default_parallax_factor")]
    pub parallax_factor: f64,
    #[serde(default = "default_snowflake_count")]
    pub snowflake_count: usize,
    #[serde(default = "default_counter_duration_ms")]
    pub counter_duration_ms: f64,
    /// Visible fraction at which a counter starts
    #[serde(default = "default_counter_threshold")]
    pub counter_threshold: f64,
    #[serde(default = "default_images")]
    pub images: ImageTable,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

impl PageConfig {
    /// Configuration with the shipped defaults and the given video
    pub fn new(video: VideoConfig) -> Self {
        Self {
            video,
            header_threshold: default_header_threshold(),
            parallax_factor: default_parallax_factor(),
            snowflake_count: default_snowflake_count(),
            counter_duration_ms: default_counter_duration_ms(),
            counter_threshold: default_counter_threshold(),
            images: default_images(),
            calendar: CalendarConfig::default(),
        }
    }

    pub fn from_json(json: &str) -> PageResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> PageResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Full check, video included. Used when loading a configuration.
    pub fn validate(&self) -> PageResult<()> {
        self.video.validate()?;
        self.validate_settings()
    }

    /// Check every field except the video target, which only the video
    /// loader depends on
    pub fn validate_settings(&self) -> PageResult<()> {
        if !self.header_threshold.is_finite() {
            return Err(PageError::Config("header_threshold must be finite".to_string()));
        }
        if !self.parallax_factor.is_finite() {
            return Err(PageError::Config("parallax_factor must be finite".to_string()));
        }
        if !(self.counter_duration_ms.is_finite() && self.counter_duration_ms > 0.0) {
            return Err(PageError::Config(
                "counter_duration_ms must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.counter_threshold) {
            return Err(PageError::Config(
                "counter_threshold must be between 0 and 1".to_string(),
            ));
        }
        if let Some(day) = self.calendar.events.keys().find(|d| !(1..=31).contains(*d)) {
            return Err(PageError::Config(format!(
                "calendar event day out of range: {}",
                day
            )));
        }
        Ok(())
    }
}

impl Default for PageConfig {
    /// Shipped defaults with an unconfigured video
    fn default() -> Self {
        Self::new(VideoConfig::default())
    }
}

fn default_video_height() -> String {
    "500px".to_string()
}

fn default_true() -> bool {
    true
}

fn default_header_threshold() -> f64 {
    50.0
}

fn default_parallax_factor() -> f64 {
    0.2
}

fn default_snowflake_count() -> usize {
    100
}

fn default_counter_duration_ms() -> f64 {
    1500.0
}

fn default_counter_threshold() -> f64 {
    0.1
}

/// Event days shown on the shipped calendar
pub fn default_events() -> EventTable {
    [
        (5, "樹氷ライトアップ開始"),
        (12, "スキーこどもの日"),
        (15, "樹氷まつり"),
        (20, "雪上花火大会"),
    ]
    .into_iter()
    .map(|(day, label)| (day, label.to_string()))
    .collect()
}

/// Image sources assigned once the document is ready
pub fn default_images() -> ImageTable {
    [
        ("logo-img", "images/my-logo.png"),
        ("footer-logo-img", "images/my-logo-white.png"),
        ("snow-monsters-img", "images/my-snow-monsters.jpg"),
        ("course-map-img", "images/my-course-map.jpg"),
        ("hot-springs-img", "images/my-onsen.jpg"),
        ("access-map-img", "images/my-access-map.jpg"),
        ("plan1-img", "images/my-plan1.jpg"),
        ("plan2-img", "images/my-plan2.jpg"),
        ("plan3-img", "images/my-plan3.jpg"),
        ("video-thumbnail", "images/my-video-thumbnail.jpg"),
        ("gallery1-img", "images/my-gallery1.jpg"),
        ("gallery2-img", "images/my-gallery2.jpg"),
        ("gallery3-img", "images/my-gallery3.jpg"),
        ("gallery4-img", "images/my-gallery4.jpg"),
        ("gallery5-img", "images/my-gallery5.jpg"),
        ("gallery6-img", "images/my-gallery6.jpg"),
    ]
    .into_iter()
    .map(|(id, src)| (id.to_string(), src.to_string()))
    .collect()
}
