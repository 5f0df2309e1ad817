//! Juhyo Core Library
//!
//! Client-side behavior layer for the resort's single-page site.
//!
//! ## Overview
//!
//! The page markup is static. This crate attaches the interactive parts
//! to it: header styling on scroll, the hamburger menu, tab panels, the
//! gallery viewer, falling snow, the click-to-play video, the event
//! calendar, smooth anchor scrolling, background parallax, deferred image
//! sources, the loading indicator and count-up statistics.
//!
//! ## Design
//!
//! - **Host-independent**: components talk to the document only through
//!   the [`Dom`] trait. The browser binding implements it over `web_sys`;
//!   [`MemoryDom`] implements it for tests and previews.
//! - **Attach once**: [`Page::attach`] resolves every element up front.
//!   Components whose markup is missing are left out.
//! - **Typed events**: the host forwards [`PageEvent`]s and applies the
//!   returned [`Dispatch`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use juhyo_core::{Page, PageConfig, PageEvent};
//!
//! let config = PageConfig::from_json(config_json)?;
//! let mut page = Page::attach(&dom, &config)?;
//! page.on_ready(&mut dom, today, &mut rng);
//!
//! let outcome = page.dispatch(&mut dom, &PageEvent::Scroll { offset_y: 120.0 });
//! ```

pub mod behaviors;
pub mod calendar;
pub mod config;
pub mod dom;
pub mod error;
pub mod events;
pub mod markup;
pub mod memory;
pub mod page;
pub mod snow;

// Re-exports
pub use calendar::{CalendarCell, CalendarMonth};
pub use config::{CalendarConfig, CalendarLabels, PageConfig, VideoConfig};
pub use dom::{Dom, ScrollBehavior, Selector};
pub use error::{PageError, PageResult};
pub use events::{Dispatch, PageEvent};
pub use memory::{MemoryDom, NodeId};
pub use page::Page;
pub use snow::{SnowField, Snowflake, SnowflakeSize};
