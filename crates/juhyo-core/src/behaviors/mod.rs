//! Page behaviors
//!
//! Each component is attached once, keeps handles to the nodes it owns
//! and reacts to the events routed to it by [`Page`](crate::Page). A
//! component whose required elements are missing is simply not attached.

mod calendar;
mod counter;
mod gallery;
mod header;
mod images;
mod loading;
mod nav;
mod parallax;
mod smooth_scroll;
mod snow;
mod tabs;
mod video;

pub use calendar::*;
pub use counter::*;
pub use gallery::*;
pub use header::*;
pub use images::*;
pub use loading::*;
pub use nav::*;
pub use parallax::*;
pub use smooth_scroll::*;
pub use snow::*;
pub use tabs::*;
pub use video::*;
