//! Edge case and boundary condition tests
//!
//! Missing markup, malformed markup and events that belong to nobody.

mod common;

use chrono::NaiveDate;
use common::{config, site};
use juhyo_core::{Dom, MemoryDom, Page, PageConfig, PageError, PageEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Missing Elements
// ============================================================================

/// Every event is harmless on a document with none of the page's markup
#[test]
fn test_bare_document_ignores_all_events() {
    let mut dom = MemoryDom::new();
    let body = dom.body();
    let mut page = Page::attach(&dom, &config()).unwrap();

    page.on_ready(
        &mut dom,
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        &mut StdRng::seed_from_u64(0),
    );

    let events = [
        PageEvent::Scroll { offset_y: 500.0 },
        PageEvent::Click { target: body },
        PageEvent::KeyDown {
            key: "Escape".to_string(),
        },
        PageEvent::Load,
        PageEvent::Intersection {
            target: body,
            is_intersecting: true,
        },
        PageEvent::AnimationFrame { timestamp_ms: 0.0 },
    ];
    for event in &events {
        assert!(page.dispatch(&mut dom, event).is_empty(), "{:?}", event);
    }
    assert!(dom.stylesheets().is_empty());
    assert!(dom.scroll_requests().is_empty());
}

#[test]
fn test_gallery_without_close_control_is_inert() {
    let mut s = site();
    s.dom.remove(&s.modal_close);
    let mut page = Page::attach(&s.dom, &config()).unwrap();

    assert!(page.gallery().is_none());
    page.dispatch(
        &mut s.dom,
        &PageEvent::Click {
            target: s.gallery_items[0],
        },
    );
    assert!(!s.dom.has_class(&s.modal, "active"));
}

#[test]
fn test_video_without_play_button_is_inert() {
    let mut s = site();
    s.dom.remove(&s.play);
    let mut page = Page::attach(&s.dom, &config()).unwrap();

    page.dispatch(&mut s.dom, &PageEvent::Click { target: s.thumbnail });
    assert!(s.dom.is_attached(s.thumbnail));
    assert!(page.video().is_none());
}

#[test]
fn test_image_table_ignores_unknown_ids() {
    let mut s = site();
    let stray = s.dom.create(s.header, "img", &[("id", "not-mapped")]);
    let mut config = config();
    config.images.insert("absent-img".to_string(), "images/absent.jpg".to_string());
    let mut page = Page::attach(&s.dom, &config).unwrap();

    page.on_ready(
        &mut s.dom,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        &mut StdRng::seed_from_u64(0),
    );
    assert!(s.dom.attr(&stray, "src").is_none());
}

/// An unconfigured video target only disables the video loader
#[test]
fn test_placeholder_video_keeps_header_styling() {
    let mut dom = MemoryDom::new();
    let body = dom.body();
    let header = dom.create(body, "header", &[("id", "header")]);
    let mut page = Page::attach(&dom, &PageConfig::default()).unwrap();

    assert_eq!(page.attached(), vec!["header", "images"]);
    page.dispatch(&mut dom, &PageEvent::Scroll { offset_y: 120.0 });
    assert!(dom.has_class(&header, "scrolled"));
}

#[test]
fn test_placeholder_video_on_full_site() {
    let mut s = site();
    let mut page = Page::attach(&s.dom, &PageConfig::default()).unwrap();

    assert!(page.video().is_none());
    assert_eq!(page.attached().len(), 11);

    page.dispatch(&mut s.dom, &PageEvent::Click { target: s.play });
    assert!(s.dom.is_attached(s.thumbnail));

    page.dispatch(&mut s.dom, &PageEvent::Click { target: s.hamburger });
    assert!(s.dom.has_class(&s.nav, "active"));
}

// ============================================================================
// Malformed Markup
// ============================================================================

#[test]
fn test_tab_without_panel_fails_attach() {
    let mut s = site();
    let bar = s.dom.create(s.header, "div", &[]);
    s.dom.create(bar, "button", &[("class", "tab-button"), ("data-tab", "spring")]);

    match Page::attach(&s.dom, &config()) {
        Err(PageError::MissingTabPanel { tab }) => assert_eq!(tab, "spring"),
        other => panic!("expected MissingTabPanel, got {:?}", other.err()),
    }
}

#[test]
fn test_anchor_to_missing_section_keeps_default() {
    let mut s = site();
    let link = s.dom.create(s.header, "a", &[("href", "#removed")]);
    let mut page = Page::attach(&s.dom, &config()).unwrap();

    let outcome = page.dispatch(&mut s.dom, &PageEvent::Click { target: link });
    assert!(!outcome.prevent_default);
    assert!(s.dom.scroll_requests().is_empty());
}

// ============================================================================
// Boundary Values
// ============================================================================

#[test]
fn test_zero_snowflakes() {
    let mut s = site();
    let mut config = config();
    config.snowflake_count = 0;
    let mut page = Page::attach(&s.dom, &config).unwrap();

    page.on_ready(
        &mut s.dom,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        &mut StdRng::seed_from_u64(0),
    );
    assert!(s.dom.children(s.snow).is_empty());
}

#[test]
fn test_leap_february_calendar() {
    let mut s = site();
    let mut page = Page::attach(&s.dom, &config()).unwrap();

    page.on_ready(
        &mut s.dom,
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        &mut StdRng::seed_from_u64(0),
    );
    let html = s.dom.inner_html(s.calendar).unwrap();
    assert_eq!(html.matches("<span class=\"day-number\">").count(), 29);
    assert!(html.contains("<span class=\"day-number\">29</span>"));
    // 2024-02-01 is a Thursday
    assert_eq!(html.matches("calendar-day empty").count(), 4);
}

#[test]
fn test_counter_with_zero_target() {
    let mut s = site();
    s.dom.set_text(&s.counters[0], "0");
    let mut page = Page::attach(&s.dom, &config()).unwrap();

    page.dispatch(
        &mut s.dom,
        &PageEvent::Intersection {
            target: s.counters[0],
            is_intersecting: true,
        },
    );
    let outcome = page.dispatch(&mut s.dom, &PageEvent::AnimationFrame { timestamp_ms: 0.0 });
    assert!(outcome.request_frame);
    page.dispatch(&mut s.dom, &PageEvent::AnimationFrame { timestamp_ms: 1500.0 });
    assert_eq!(s.dom.text(&s.counters[0]), "0");
}
