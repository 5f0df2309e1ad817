//! Event wiring between the browser and [`Page`]
//!
//! The runtime is created once the document is parsed and lives as long
//! as the page: listeners and JS callbacks hold it through `Rc` and are
//! never released.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::NaiveDate;
use gloo::events::{EventListener, EventListenerOptions};
use juhyo_core::markup::PAGE_CONFIG_ID;
use juhyo_core::{Dispatch, Dom, Page, PageConfig, PageError, PageEvent, PageResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent,
};

use crate::web_dom::WebDom;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct Runtime {
    dom: RefCell<WebDom>,
    page: RefCell<Page<Element>>,
    observer: RefCell<Option<IntersectionObserver>>,
    observer_callback: RefCell<Option<ObserverCallback>>,
    frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    frame_pending: Cell<bool>,
    listeners: RefCell<Vec<EventListener>>,
}

/// Attach the page now, or on `DOMContentLoaded` if still parsing
pub(crate) fn boot_when_ready() {
    let document = gloo::utils::document();
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| boot()).forget();
    } else {
        boot();
    }
}

fn boot() {
    let Some(dom) = WebDom::new() else {
        tracing::warn!("document has no body, page behaviors not attached");
        return;
    };
    let config = read_config(&dom).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "using default page configuration");
        PageConfig::default()
    });
    match Runtime::start(dom, &config) {
        Ok(runtime) => runtime.wire(),
        Err(e) => tracing::error!(error = %e, "page behaviors not attached"),
    }
}

/// Settings from the config script. The video target is left for the
/// video loader to check, so a missing id only disables that component.
fn read_config(dom: &WebDom) -> PageResult<PageConfig> {
    let element = dom
        .by_id(PAGE_CONFIG_ID)
        .ok_or_else(|| PageError::Config(format!("#{} not found", PAGE_CONFIG_ID)))?;
    let config: PageConfig = serde_json::from_str(&dom.text(&element))?;
    config.validate_settings()?;
    Ok(config)
}

fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

fn seed() -> u64 {
    let random = (js_sys::Math::random() * u64::MAX as f64) as u64;
    random ^ js_sys::Date::now() as u64
}

impl Runtime {
    fn start(mut dom: WebDom, config: &PageConfig) -> PageResult<Rc<Self>> {
        let mut page = Page::attach(&dom, config)?;
        page.on_ready(&mut dom, today(), &mut StdRng::seed_from_u64(seed()));
        Ok(Rc::new(Self {
            dom: RefCell::new(dom),
            page: RefCell::new(page),
            observer: RefCell::new(None),
            observer_callback: RefCell::new(None),
            frame: RefCell::new(None),
            frame_pending: Cell::new(false),
            listeners: RefCell::new(Vec::new()),
        }))
    }

    fn wire(self: &Rc<Self>) {
        let (window, document) = {
            let dom = self.dom.borrow();
            (dom.window().clone(), dom.document().clone())
        };
        let mut listeners = Vec::new();

        let runtime = Rc::clone(self);
        let scrolled = window.clone();
        listeners.push(EventListener::new(&window, "scroll", move |_| {
            let offset_y = scrolled.scroll_y().unwrap_or(0.0);
            runtime.dispatch(PageEvent::Scroll { offset_y }, None);
        }));

        // Delegated: one listener on the document sees every click.
        let runtime = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &document,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                    return;
                };
                runtime.dispatch(PageEvent::Click { target }, Some(event));
            },
        ));

        let runtime = Rc::clone(self);
        listeners.push(EventListener::new(&document, "keydown", move |event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
                runtime.dispatch(PageEvent::KeyDown { key }, None);
            }
        }));

        if document.ready_state() == "complete" {
            self.dispatch(PageEvent::Load, None);
        } else {
            let runtime = Rc::clone(self);
            listeners.push(EventListener::once(&window, "load", move |_| {
                runtime.dispatch(PageEvent::Load, None);
            }));
        }

        self.listeners.borrow_mut().extend(listeners);
        self.observe();
        tracing::debug!("browser events wired");
    }

    fn observe(self: &Rc<Self>) {
        let (targets, threshold) = {
            let page = self.page.borrow();
            (page.observed(), page.observe_threshold())
        };
        let Some(threshold) = threshold else {
            return;
        };

        let runtime = Rc::clone(self);
        let callback = ObserverCallback::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                runtime.dispatch(
                    PageEvent::Intersection {
                        target: entry.target(),
                        is_intersecting: entry.is_intersecting(),
                    },
                    None,
                );
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                for target in &targets {
                    observer.observe(target);
                }
                tracing::debug!(count = targets.len(), threshold, "observing counters");
                *self.observer.borrow_mut() = Some(observer);
                *self.observer_callback.borrow_mut() = Some(callback);
            }
            Err(_) => tracing::warn!("IntersectionObserver unavailable, counters stay static"),
        }
    }

    fn dispatch(self: &Rc<Self>, event: PageEvent<Element>, raw: Option<&Event>) {
        let outcome = {
            let mut dom = self.dom.borrow_mut();
            self.page.borrow_mut().dispatch(&mut *dom, &event)
        };
        self.apply(outcome, raw);
    }

    fn apply(self: &Rc<Self>, outcome: Dispatch<Element>, raw: Option<&Event>) {
        if outcome.prevent_default {
            if let Some(event) = raw {
                event.prevent_default();
            }
        }
        if let Some(observer) = self.observer.borrow().as_ref() {
            for node in &outcome.unobserve {
                observer.unobserve(node);
            }
        }
        if outcome.request_frame {
            self.request_frame();
        }
    }

    /// Schedule one animation frame unless one is already pending
    fn request_frame(self: &Rc<Self>) {
        if self.frame_pending.replace(true) {
            return;
        }
        let window = self.dom.borrow().window().clone();
        let mut slot = self.frame.borrow_mut();
        let callback = slot.get_or_insert_with(|| {
            let runtime = Rc::clone(self);
            Closure::new(move |timestamp_ms: f64| {
                runtime.frame_pending.set(false);
                runtime.dispatch(PageEvent::AnimationFrame { timestamp_ms }, None);
            })
        });
        if window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .is_err()
        {
            self.frame_pending.set(false);
            tracing::warn!("animation frame request refused");
        }
    }
}
