//! End-to-end behavior tests
//!
//! Drive a fully attached `Page` over an in-memory copy of the site
//! skeleton, the way the browser binding does.

mod common;

use chrono::NaiveDate;
use common::{config, site, TAB_IDS};
use juhyo_core::behaviors::ModalState;
use juhyo_core::memory::ScrollRequest;
use juhyo_core::{Dom, Page, PageEvent, ScrollBehavior};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn click<N: Clone>(target: &N) -> PageEvent<N> {
    PageEvent::Click {
        target: target.clone(),
    }
}

// ============================================================================
// Attach / Ready
// ============================================================================

#[test]
fn test_full_page_attaches_every_component() {
    let s = site();
    let page = Page::attach(&s.dom, &config()).unwrap();

    assert_eq!(page.attached().len(), 12);
    assert_eq!(page.observed(), s.counters);
    assert_eq!(page.observe_threshold(), Some(0.1));
}

#[test]
fn test_ready_populates_generated_content() {
    let mut s = site();
    let mut page = Page::attach(&s.dom, &config()).unwrap();

    page.on_ready(&mut s.dom, today(), &mut StdRng::seed_from_u64(5));

    assert_eq!(
        s.dom.attr(&s.logo, "src").as_deref(),
        Some("images/my-logo.png")
    );
    assert_eq!(
        s.dom.attr(&s.thumbnail, "src").as_deref(),
        Some("images/my-video-thumbnail.jpg")
    );
    assert_eq!(s.dom.children(s.snow).len(), 100);
    assert_eq!(s.dom.stylesheets().len(), 1);

    let calendar = s.dom.inner_html(s.calendar).unwrap();
    assert!(calendar.contains("2024年 3月"));
    assert_eq!(calendar.matches("calendar-day empty").count(), 5);
    assert_eq!(calendar.matches("<span class=\"day-number\">").count(), 31);
    assert_eq!(calendar.matches("calendar-day today").count(), 1);
    assert!(calendar.contains("樹氷まつり"));
}

// ============================================================================
// Scroll
// ============================================================================

#[test]
fn test_scroll_fans_out_to_header_and_parallax() {
    let mut s = site();
    let mut page = Page::attach(&s.dom, &config()).unwrap();

    let outcome = page.dispatch(&mut s.dom, &PageEvent::Scroll { offset_y: 250.0 });

    assert!(outcome.is_empty());
    assert!(s.dom.has_class(&s.header, "scrolled"));
    assert_eq!(
        s.dom.style(&s.main_visual, "background-position").as_deref(),
        Some("center calc(50% + 50px)")
    );

    page.dispatch(&mut s.dom, &PageEvent::Scroll { offset_y: 10.0 });
    assert!(!s.dom.has_class(&s.header, "scrolled"));
}

// ============================================================================
// Clicks
// ============================================================================

#[test]
fn test_nav_link_closes_menu_and_scrolls() {
    let mut s = site();
    let mut page = Page::attach(&s.dom, &config()).unwrap();

    page.dispatch(&mut s.dom, &click(&s.hamburger));
    assert!(s.dom.has_class(&s.nav, "active"));

    let outcome = page.dispatch(&mut s.dom, &click(&s.nav_links[2]));

    assert!(outcome.prevent_default);
    assert!(!s.dom.has_class(&s.nav, "active"));
    assert!(!s.dom.has_class(&s.hamburger, "active"));
    assert_eq!(
        s.dom.scroll_requests(),
        [ScrollRequest {
            top: 4000.0 - 72.0,
            behavior: ScrollBehavior::Smooth
        }]
    );
}

#[test]
fn test_tab_click_switches_panel() {
    let mut s = site();
    let mut page = Page::attach(&s.dom, &config()).unwrap();

    page.dispatch(&mut s.dom, &click(&s.tab_buttons[1]));

    assert_eq!(page.tabs().unwrap().active_tab(&s.dom), Some(TAB_IDS[1]));
    for (i, (button, panel)) in s.tab_buttons.iter().zip(&s.tab_panels).enumerate() {
        assert_eq!(s.dom.has_class(button, "active"), i == 1);
        assert_eq!(s.dom.has_class(panel, "active"), i == 1);
    }
}

#[test]
fn test_gallery_round_trip() {
    let mut s = site();
    let mut page = Page::attach(&s.dom, &config()).unwrap();
    let body = s.dom.body();

    page.dispatch(&mut s.dom, &click(&s.gallery_items[1]));
    assert_eq!(
        page.gallery().unwrap().state(),
        &ModalState::Open {
            src: "images/my-gallery2.jpg".to_string()
        }
    );
    assert_eq!(
        s.dom.attr(&s.modal_image, "src").as_deref(),
        Some("images/my-gallery2.jpg")
    );
    assert_eq!(s.dom.style(&body, "overflow").as_deref(), Some("hidden"));

    page.dispatch(
        &mut s.dom,
        &PageEvent::KeyDown {
            key: "Escape".to_string(),
        },
    );
    assert_eq!(page.gallery().unwrap().state(), &ModalState::Closed);
    assert!(s.dom.style(&body, "overflow").is_none());
    assert!(!s.dom.has_class(&s.modal, "active"));

    page.dispatch(&mut s.dom, &click(&s.gallery_items[0]));
    page.dispatch(&mut s.dom, &click(&s.modal_close));
    assert_eq!(page.gallery().unwrap().state(), &ModalState::Closed);
}

#[test]
fn test_video_click_inserts_player_once() {
    let mut s = site();
    let mut page = Page::attach(&s.dom, &config()).unwrap();

    let outcome = page.dispatch(&mut s.dom, &click(&s.play));
    assert!(!outcome.prevent_default);

    let player = *page.video().unwrap().player().unwrap();
    assert!(!s.dom.is_attached(s.thumbnail));
    assert!(!s.dom.is_attached(s.play));
    assert_eq!(
        s.dom.attr(&player, "src").as_deref(),
        Some("https://www.youtube.com/embed/resortTour01?autoplay=1")
    );

    page.dispatch(&mut s.dom, &click(&s.video));
    assert_eq!(s.dom.children(s.video), [player]);
}

// ============================================================================
// Load / Counters
// ============================================================================

#[test]
fn test_load_hides_indicator() {
    let mut s = site();
    let mut page = Page::attach(&s.dom, &config()).unwrap();

    page.dispatch(&mut s.dom, &PageEvent::Load);
    assert_eq!(s.dom.style(&s.loading, "display").as_deref(), Some("none"));
}

#[test]
fn test_counters_animate_concurrently() {
    let mut s = site();
    let mut page = Page::attach(&s.dom, &config()).unwrap();

    for counter in &s.counters[..2] {
        let outcome = page.dispatch(
            &mut s.dom,
            &PageEvent::Intersection {
                target: *counter,
                is_intersecting: true,
            },
        );
        assert_eq!(outcome.unobserve, vec![*counter]);
        assert!(outcome.request_frame);
    }
    assert_eq!(page.observed(), vec![s.counters[2]]);

    let mut ts = 100.0;
    loop {
        let outcome = page.dispatch(&mut s.dom, &PageEvent::AnimationFrame { timestamp_ms: ts });
        if !outcome.request_frame {
            break;
        }
        ts += 16.0;
        assert!(ts < 10_000.0, "animation never finished");
    }

    assert_eq!(s.dom.text(&s.counters[0]), "250");
    assert_eq!(s.dom.text(&s.counters[1]), "1200");
    assert_eq!(s.dom.text(&s.counters[2]), "35");
}
