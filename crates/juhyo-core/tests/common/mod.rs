//! Shared fixture: a skeleton of the resort page

#![allow(dead_code)]

use juhyo_core::{Dom, MemoryDom, NodeId, PageConfig, VideoConfig};

pub struct SitePage {
    pub dom: MemoryDom,
    pub header: NodeId,
    pub hamburger: NodeId,
    pub nav: NodeId,
    pub nav_links: Vec<NodeId>,
    pub tab_buttons: Vec<NodeId>,
    pub tab_panels: Vec<NodeId>,
    pub gallery_items: Vec<NodeId>,
    pub modal: NodeId,
    pub modal_image: NodeId,
    pub modal_close: NodeId,
    pub snow: NodeId,
    pub video: NodeId,
    pub thumbnail: NodeId,
    pub play: NodeId,
    pub calendar: NodeId,
    pub main_visual: NodeId,
    pub logo: NodeId,
    pub loading: NodeId,
    pub counters: Vec<NodeId>,
    pub access: NodeId,
}

pub const TAB_IDS: [&str; 3] = ["winter", "green", "night"];

pub fn config() -> PageConfig {
    PageConfig::new(VideoConfig::new("resortTour01").expect("valid video id"))
}

pub fn site() -> SitePage {
    let mut dom = MemoryDom::new();
    let body = dom.body();

    let loading = dom.create(body, "div", &[("id", "loading-indicator")]);

    let header = dom.create(body, "header", &[("id", "header")]);
    dom.set_layout(header, 0.0, 72.0);
    let logo = dom.create(header, "img", &[("id", "logo-img")]);
    let hamburger = dom.create(header, "button", &[("id", "hamburger")]);
    let nav = dom.create(header, "nav", &[("class", "global-nav")]);
    let list = dom.create(nav, "ul", &[]);
    let nav_links = ["#about", "#gallery", "#access"]
        .iter()
        .map(|href| {
            let li = dom.create(list, "li", &[]);
            dom.create(li, "a", &[("href", *href)])
        })
        .collect();

    let main_visual = dom.create(body, "section", &[("id", "main-visual")]);
    let snow = dom.create(main_visual, "div", &[("id", "snow-container")]);

    let about = dom.create(body, "section", &[("id", "about")]);
    dom.set_layout(about, 900.0, 600.0);
    let counters = ["250", "1200", "35"]
        .iter()
        .map(|value| {
            let n = dom.create(about, "span", &[("class", "data-number")]);
            dom.set_text(&n, value);
            n
        })
        .collect();

    let tabs = dom.create(body, "div", &[("class", "tabs")]);
    let tab_buttons: Vec<NodeId> = TAB_IDS
        .iter()
        .map(|id| dom.create(tabs, "button", &[("class", "tab-button"), ("data-tab", *id)]))
        .collect();
    let tab_panels: Vec<NodeId> = TAB_IDS
        .iter()
        .map(|id| dom.create(body, "div", &[("class", "tab-content"), ("id", *id)]))
        .collect();
    dom.add_class(&tab_buttons[0], "active");
    dom.add_class(&tab_panels[0], "active");

    let gallery = dom.create(body, "section", &[("id", "gallery")]);
    dom.set_layout(gallery, 2400.0, 800.0);
    let gallery_items = (1..=3)
        .map(|i| {
            let src = format!("images/my-gallery{}.jpg", i);
            let img_id = format!("gallery{}-img", i);
            let item = dom.create(
                gallery,
                "div",
                &[("class", "gallery-item"), ("data-src", src.as_str())],
            );
            dom.create(item, "img", &[("id", img_id.as_str())]);
            item
        })
        .collect();
    let modal = dom.create(body, "div", &[("id", "gallery-modal")]);
    let content = dom.create(modal, "div", &[("class", "modal-content")]);
    let modal_close = dom.create(content, "span", &[("class", "close-modal")]);
    let modal_image = dom.create(content, "img", &[("id", "modal-image")]);

    let video = dom.create(body, "div", &[("id", "video-container")]);
    let thumbnail = dom.create(video, "img", &[("id", "video-thumbnail")]);
    let play = dom.create(video, "button", &[("id", "play-button")]);

    let calendar = dom.create(body, "div", &[("id", "calendar")]);

    let access = dom.create(body, "section", &[("id", "access")]);
    dom.set_layout(access, 4000.0, 500.0);

    SitePage {
        dom,
        header,
        hamburger,
        nav,
        nav_links,
        tab_buttons,
        tab_panels,
        gallery_items,
        modal,
        modal_image,
        modal_close,
        snow,
        video,
        thumbnail,
        play,
        calendar,
        main_visual,
        logo,
        loading,
        counters,
        access,
    }
}
