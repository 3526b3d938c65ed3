//! Markup and style contract with the page.
//!
//! Selectors name the elements this crate binds to; class names are the
//! visual states the external stylesheet animates.

use crate::core::{Cascade, RevealMode, RevealSpec};

// Elements
pub const NAV: &str = ".nav";
pub const NAV_MENU_BTN: &str = ".nav-menu-btn";
pub const NAV_LINKS: &str = ".nav-links";
pub const HERO: &str = ".hero";
pub const HERO_CONTENT: &str = ".hero-content";
pub const LOADER_ID: &str = "loader";
pub const GRID_CANVAS_ID: &str = "grid-canvas";
pub const SERVICES_ID: &str = "services";
pub const CARD_OVERLAY_ID: &str = "card-overlay";
pub const EXPAND_CARD: &str = ".expand-card";
pub const CARD_CLOSE: &str = ".card-close";
pub const REVEAL_UP: &str = ".reveal-up";
pub const STAT_NUMBER: &str = ".stat-number";
pub const MAGNETIC_BTN: &str = ".btn";
pub const TILT_CARD: &str = ".tilt-card";
pub const PARALLAX_IMG: &str = ".parallax-img";
pub const SERVICE_CARD: &str = ".service-card";
pub const WORK_ITEM: &str = ".work-item";
pub const BG_SECTION: &str = "[data-bg-color]";
pub const BG_LAYER: &str = ".bg-color-layer";
pub const BG_BLOB: &str = ".bg-blob";
pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";
pub const CURSOR_TARGETS: &str = "a, button, .work-item, .service-card";

/// Cards whose `data-bg` image is painted onto a child layer.
pub const CARD_BACKGROUNDS: [(&str, &str); 2] = [
    (".service-card[data-bg]", ".service-bg"),
    (".work-card[data-bg]", ".work-bg"),
];

// Classes
pub const VISIBLE: &str = "visible";
pub const REVEALED: &str = "revealed";
pub const ACTIVE: &str = "active";
pub const EXPANDING: &str = "expanding";
pub const EXPANDED: &str = "expanded";
pub const MOBILE_OPEN: &str = "mobile-open";
pub const SCROLLED: &str = "scrolled";
pub const LOADING: &str = "loading";
pub const HIDDEN: &str = "hidden";
pub const LOADED: &str = "loaded";
pub const CUSTOM_CURSOR: &str = "custom-cursor";
pub const CURSOR_HOVER: &str = "cursor-hover";

// Attributes and properties
pub const ATTR_BG: &str = "data-bg";
pub const ATTR_BG_COLOR: &str = "data-bg-color";
pub const ATTR_SPEED: &str = "data-speed";
pub const ATTR_SUFFIX: &str = "data-suffix";
pub const ATTR_FX: &str = "data-fx";
pub const ATTR_LOG_LEVEL: &str = "data-log-level";
pub const BLOB_COLOR_PROP: &str = "--blob-color";

// Observer options that are not reveal instances
pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const SERVICES_THRESHOLD: f64 = 0.2;
pub const BG_BAND_MARGIN: &str = "-40% 0px -40% 0px";

pub const SCROLL_REVEAL: RevealSpec = RevealSpec {
    selector: ".scroll-reveal",
    class: VISIBLE,
    threshold: 0.1,
    root_margin: "0px",
    stagger_ms: 100,
    mode: RevealMode::OneShot,
    cascade: Cascade::Own,
};

pub const SERVICE_CARDS: RevealSpec = RevealSpec {
    selector: SERVICE_CARD,
    class: VISIBLE,
    threshold: 0.1,
    root_margin: "0px",
    stagger_ms: 100,
    mode: RevealMode::OneShot,
    cascade: Cascade::Group,
};

pub const SERVICE_IMAGES: RevealSpec = RevealSpec {
    selector: ".service-card[data-bg]",
    class: "image-revealed",
    threshold: 0.3,
    root_margin: "0px",
    stagger_ms: 0,
    mode: RevealMode::Reversible,
    cascade: Cascade::Own,
};

pub const WORK_ITEMS: RevealSpec = RevealSpec {
    selector: WORK_ITEM,
    class: REVEALED,
    threshold: 0.15,
    root_margin: "0px 0px -50px 0px",
    stagger_ms: 150,
    mode: RevealMode::OneShot,
    cascade: Cascade::Own,
};

pub const CLIP_REVEAL: RevealSpec = RevealSpec {
    selector: ".clip-reveal",
    class: REVEALED,
    threshold: 0.2,
    root_margin: "0px",
    stagger_ms: 100,
    mode: RevealMode::OneShot,
    cascade: Cascade::Own,
};

pub const WORK_CARDS: RevealSpec = RevealSpec {
    selector: ".work-card",
    class: VISIBLE,
    threshold: 0.1,
    root_margin: "0px 0px -50px 0px",
    stagger_ms: 120,
    mode: RevealMode::OneShot,
    cascade: Cascade::Group,
};

pub const REVEALS: [RevealSpec; 6] = [
    SCROLL_REVEAL,
    SERVICE_CARDS,
    SERVICE_IMAGES,
    WORK_ITEMS,
    CLIP_REVEAL,
    WORK_CARDS,
];
