//! Element identifiers, classes and attributes the page markup provides

/// Marker toggled by the menu, tab and modal controllers
pub const ACTIVE_CLASS: &str = "active";

pub const HEADER_ID: &str = "header";
pub const SCROLLED_CLASS: &str = "scrolled";

pub const NAV_TRIGGER_ID: &str = "hamburger";
pub const NAV_CLASS: &str = "global-nav";

pub const TAB_BUTTON_CLASS: &str = "tab-button";
pub const TAB_PANEL_CLASS: &str = "tab-content";
pub const TAB_ATTR: &str = "data-tab";

pub const GALLERY_ITEM_CLASS: &str = "gallery-item";
pub const GALLERY_MODAL_ID: &str = "gallery-modal";
pub const MODAL_IMAGE_ID: &str = "modal-image";
pub const MODAL_CLOSE_CLASS: &str = "close-modal";
pub const GALLERY_SRC_ATTR: &str = "data-src";

pub const SNOW_CONTAINER_ID: &str = "snow-container";

pub const VIDEO_CONTAINER_ID: &str = "video-container";
pub const PLAY_BUTTON_ID: &str = "play-button";
pub const VIDEO_THUMBNAIL_ID: &str = "video-thumbnail";

pub const CALENDAR_ID: &str = "calendar";

pub const MAIN_VISUAL_ID: &str = "main-visual";

pub const LOADING_INDICATOR_ID: &str = "loading-indicator";

pub const COUNTER_CLASS: &str = "data-number";

/// Key value reported for the cancel key
pub const ESCAPE_KEY: &str = "Escape";

/// `<script type="application/json">` element holding the page configuration
pub const PAGE_CONFIG_ID: &str = "page-config";
