//! The assembled page
//!
//! [`Page`] attaches every behavior once, then routes host events to the
//! components that care about them. Components never see each other; a
//! single event may fan out to several of them.

use chrono::NaiveDate;
use rand::Rng;

use crate::behaviors::{
    CounterAnimator, EventCalendarGenerator, GalleryModalController, HeaderScrollStyler,
    LazyImageAssigner, LoadIndicatorDismisser, NavigationMenuController,
    ParallaxBackgroundController, ParticleEffectGenerator, SmoothScrollController, TabController,
    VideoEmbedLoader,
};
use crate::config::PageConfig;
use crate::dom::Dom;
use crate::error::PageResult;
use crate::events::{Dispatch, PageEvent};

/// Every behavior of the page, each present only if its markup is
pub struct Page<N> {
    header: Option<HeaderScrollStyler<N>>,
    nav: Option<NavigationMenuController<N>>,
    tabs: Option<TabController<N>>,
    gallery: Option<GalleryModalController<N>>,
    snow: Option<ParticleEffectGenerator<N>>,
    video: Option<VideoEmbedLoader<N>>,
    calendar: Option<EventCalendarGenerator<N>>,
    smooth_scroll: Option<SmoothScrollController<N>>,
    parallax: Option<ParallaxBackgroundController<N>>,
    images: LazyImageAssigner,
    loading: Option<LoadIndicatorDismisser<N>>,
    counters: Option<CounterAnimator<N>>,
}

impl<N: Clone + PartialEq> Page<N> {
    /// Look up every component's elements.
    ///
    /// Fails on invalid settings or on tab buttons that do not resolve to
    /// a panel. Any other missing element, and an unusable video target,
    /// only disables the component that needs it.
    pub fn attach<D: Dom<Node = N>>(dom: &D, config: &PageConfig) -> PageResult<Self> {
        config.validate_settings()?;

        let page = Self {
            header: HeaderScrollStyler::attach(dom, config.header_threshold),
            nav: NavigationMenuController::attach(dom),
            tabs: TabController::attach(dom)?,
            gallery: GalleryModalController::attach(dom),
            snow: ParticleEffectGenerator::attach(dom, config.snowflake_count),
            video: VideoEmbedLoader::attach(dom, &config.video),
            calendar: EventCalendarGenerator::attach(dom, &config.calendar),
            smooth_scroll: SmoothScrollController::attach(dom),
            parallax: ParallaxBackgroundController::attach(dom, config.parallax_factor),
            images: LazyImageAssigner::new(config.images.clone()),
            loading: LoadIndicatorDismisser::attach(dom),
            counters: CounterAnimator::attach(
                dom,
                config.counter_duration_ms,
                config.counter_threshold,
            ),
        };
        tracing::info!(components = ?page.attached(), "page behaviors attached");
        Ok(page)
    }

    /// Names of the components whose markup was found
    pub fn attached(&self) -> Vec<&'static str> {
        let present = [
            ("header", self.header.is_some()),
            ("nav", self.nav.is_some()),
            ("tabs", self.tabs.is_some()),
            ("gallery", self.gallery.is_some()),
            ("snow", self.snow.is_some()),
            ("video", self.video.is_some()),
            ("calendar", self.calendar.is_some()),
            ("smooth_scroll", self.smooth_scroll.is_some()),
            ("parallax", self.parallax.is_some()),
            ("images", true),
            ("loading", self.loading.is_some()),
            ("counters", self.counters.is_some()),
        ];
        present
            .into_iter()
            .filter(|(_, attached)| *attached)
            .map(|(name, _)| name)
            .collect()
    }

    /// One-time setup once the document is parsed: image sources, snow
    /// particles and the calendar for `today`
    pub fn on_ready<D: Dom<Node = N>, R: Rng>(&mut self, dom: &mut D, today: NaiveDate, rng: &mut R) {
        self.images.assign(dom);
        if let Some(snow) = &self.snow {
            snow.generate(dom, rng);
        }
        if let Some(calendar) = &self.calendar {
            calendar.render(dom, today);
        }
    }

    /// Route one host event to every interested component
    pub fn dispatch<D: Dom<Node = N>>(&mut self, dom: &mut D, event: &PageEvent<N>) -> Dispatch<N> {
        let mut outcome = Dispatch::default();
        match event {
            PageEvent::Scroll { offset_y } => {
                if let Some(header) = &self.header {
                    header.on_scroll(dom, *offset_y);
                }
                if let Some(parallax) = &self.parallax {
                    parallax.on_scroll(dom, *offset_y);
                }
            }
            PageEvent::Click { target } => {
                if let Some(nav) = &self.nav {
                    nav.on_click(dom, target);
                }
                if let Some(tabs) = &self.tabs {
                    tabs.on_click(dom, target);
                }
                if let Some(gallery) = &mut self.gallery {
                    gallery.on_click(dom, target);
                }
                if let Some(video) = &mut self.video {
                    video.on_click(dom, target);
                }
                if let Some(scroll) = &self.smooth_scroll {
                    outcome.prevent_default |= scroll.on_click(dom, target);
                }
            }
            PageEvent::KeyDown { key } => {
                if let Some(gallery) = &mut self.gallery {
                    gallery.on_key(dom, key);
                }
            }
            PageEvent::Load => {
                if let Some(loading) = &self.loading {
                    loading.on_load(dom);
                }
            }
            PageEvent::Intersection {
                target,
                is_intersecting,
            } => {
                if let Some(counters) = &mut self.counters {
                    outcome.merge(counters.on_intersection(dom, target, *is_intersecting));
                }
            }
            PageEvent::AnimationFrame { timestamp_ms } => {
                if let Some(counters) = &mut self.counters {
                    outcome.request_frame |= counters.on_frame(dom, *timestamp_ms);
                }
            }
        }
        outcome
    }

    /// Elements the host must watch for intersection changes
    pub fn observed(&self) -> Vec<N> {
        self.counters
            .as_ref()
            .map(|c| c.observed())
            .unwrap_or_default()
    }

    /// Visible fraction at which observed elements count as intersecting
    pub fn observe_threshold(&self) -> Option<f64> {
        self.counters.as_ref().map(|c| c.threshold())
    }

    pub fn gallery(&self) -> Option<&GalleryModalController<N>> {
        self.gallery.as_ref()
    }

    pub fn tabs(&self) -> Option<&TabController<N>> {
        self.tabs.as_ref()
    }

    pub fn video(&self) -> Option<&VideoEmbedLoader<N>> {
        self.video.as_ref()
    }
}
