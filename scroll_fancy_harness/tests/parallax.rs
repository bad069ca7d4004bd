// Copyright 2026 the Scroll Fancy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parallax engine scenarios.

use scroll_fancy_core::Config;
use scroll_fancy_core::markup::{
    CLASS_HAS_PARALLAX, CLASS_PARALLAX_ENABLED, STYLE_BACKGROUND_POSITION, STYLE_TRANSFORM,
};
use scroll_fancy_core::parallax::ParallaxTrigger;
use scroll_fancy_harness::{ElementId, FakePage, Stage};

const WIDE: f64 = 1280.0;
const NARROW: f64 = 600.0;
const VIEWPORT_H: f64 = 800.0;

fn parallax_only() -> Config {
    Config {
        reveal: false,
        ..Config::DEFAULT
    }
}

fn trigger_of(stage: &Stage, id: ElementId) -> ParallaxTrigger<ElementId> {
    stage
        .parallax()
        .expect("parallax enabled")
        .triggers()
        .iter()
        .find(|t| t.element == id)
        .expect("element has a trigger")
        .clone()
}

#[test]
fn foreground_shift_from_the_reference_numbers() {
    let page = FakePage::new(WIDE, VIEWPORT_H);
    let hero = page.add_element(200.0, 600.0, &[("data-parallax", "0.5")]);
    let mut stage = Stage::start(page, &parallax_only());

    let report = stage.scroll_and_render(400.0);
    assert_eq!(report.shifted, 1, "in view");
    assert_eq!(
        stage.page().style_of(hero, STYLE_TRANSFORM).as_deref(),
        Some("translate(0, 100px)"),
        "(400 - 200) * 0.5"
    );
    assert_eq!(stage.page().style_of(hero, STYLE_BACKGROUND_POSITION), None, "foreground only");
}

#[test]
fn background_shift_from_the_reference_numbers() {
    let page = FakePage::new(WIDE, VIEWPORT_H);
    let hero = page.add_element(200.0, 600.0, &[("data-parallax-bg", "0.5")]);
    let mut stage = Stage::start(page, &parallax_only());

    let _ = stage.scroll_and_render(400.0);
    assert_eq!(
        stage.page().style_of(hero, STYLE_BACKGROUND_POSITION).as_deref(),
        Some("center 100px"),
        "(400 - 200) * 0.5"
    );
    assert_eq!(stage.page().style_of(hero, STYLE_TRANSFORM), None, "background only");
}

#[test]
fn initial_frame_writes_visible_elements() {
    let page = FakePage::new(WIDE, VIEWPORT_H);
    let top = page.add_element(0.0, 500.0, &[("data-parallax", "0.3")]);
    let below = page.add_element(2000.0, 500.0, &[("data-parallax", "0.3")]);
    let stage = Stage::start(page, &parallax_only());

    assert_eq!(
        stage.page().style_of(top, STYLE_TRANSFORM).as_deref(),
        Some("translate(0, 0px)"),
        "in view at scroll 0"
    );
    assert_eq!(stage.page().style_of(below, STYLE_TRANSFORM), None, "out of view");
    assert!(stage.page().root_has_class(CLASS_PARALLAX_ENABLED), "root enabled");
    assert!(stage.page().element_has_class(below, CLASS_HAS_PARALLAX), "marked");
}

#[test]
fn speed_resolution() {
    let page = FakePage::new(WIDE, VIEWPORT_H);
    let fast = page.add_element(0.0, 100.0, &[("data-parallax", "0.9")]);
    let bad = page.add_element(100.0, 100.0, &[("data-parallax", "fast")]);
    let empty = page.add_element(200.0, 100.0, &[("data-parallax-bg", "")]);
    let both = page.add_element(
        300.0,
        100.0,
        &[("data-parallax", "0.2"), ("data-parallax-bg", "0.7")],
    );
    let stage = Stage::start(page, &parallax_only());

    assert_eq!(trigger_of(&stage, fast).speed, 0.9, "parsed");
    assert_eq!(trigger_of(&stage, bad).speed, 0.5, "unparsable falls back");
    assert_eq!(trigger_of(&stage, empty).speed, 0.5, "empty falls back");
    let both = trigger_of(&stage, both);
    assert_eq!(both.speed, 0.2, "foreground attribute wins");
    assert!(both.is_background, "background flag from the bg attribute");
}

#[test]
fn position_hint_is_stored_only() {
    let page = FakePage::new(WIDE, VIEWPORT_H);
    let hinted = page.add_element(
        0.0,
        600.0,
        &[("data-parallax-bg", "0.5"), ("data-parrallax-position", "top")],
    );
    let plain = page.add_element(600.0, 600.0, &[("data-parallax-bg", "0.5")]);
    let mut stage = Stage::start(page, &parallax_only());

    assert_eq!(trigger_of(&stage, hinted).position, "top", "hint read");
    assert_eq!(trigger_of(&stage, plain).position, "center", "default hint");

    let _ = stage.scroll_and_render(100.0);
    assert_eq!(
        stage.page().style_of(hinted, STYLE_BACKGROUND_POSITION).as_deref(),
        Some("center 50px"),
        "hint does not change the written position"
    );
}

#[test]
fn leaving_the_viewport_keeps_the_last_shift() {
    let page = FakePage::new(WIDE, VIEWPORT_H);
    let hero = page.add_element(200.0, 600.0, &[("data-parallax", "0.5")]);
    let mut stage = Stage::start(page, &parallax_only());

    let _ = stage.scroll_and_render(400.0);
    let report = stage.scroll_and_render(2000.0);
    assert_eq!(report.shifted, 0, "scrolled past");
    assert_eq!(
        stage.page().style_of(hero, STYLE_TRANSFORM).as_deref(),
        Some("translate(0, 100px)"),
        "no reset on exit"
    );
}

#[test]
fn negative_shift_above_the_element() {
    let page = FakePage::new(WIDE, VIEWPORT_H);
    let band = page.add_element(1000.0, 400.0, &[("data-parallax", "0.25")]);
    let mut stage = Stage::start(page, &parallax_only());

    let _ = stage.scroll_and_render(600.0);
    assert_eq!(
        stage.page().style_of(band, STYLE_TRANSFORM).as_deref(),
        Some("translate(0, -100px)"),
        "(600 - 1000) * 0.25"
    );
}

#[test]
fn narrowing_clears_and_stops_writes() {
    let page = FakePage::new(WIDE, VIEWPORT_H);
    let fg = page.add_element(200.0, 600.0, &[("data-parallax", "0.5")]);
    let bg = page.add_element(300.0, 600.0, &[("data-parallax-bg", "0.5")]);
    let mut stage = Stage::start(page, &parallax_only());
    let _ = stage.scroll_and_render(400.0);
    assert!(stage.page().style_of(fg, STYLE_TRANSFORM).is_some(), "written while wide");
    assert!(stage.page().style_of(bg, STYLE_BACKGROUND_POSITION).is_some(), "written while wide");

    stage.resize(NARROW, VIEWPORT_H);
    let _ = stage.rediscover();
    let page = stage.page();
    assert!(!page.root_has_class(CLASS_PARALLAX_ENABLED), "root disabled");
    for id in [fg, bg] {
        assert!(!page.element_has_class(id, CLASS_HAS_PARALLAX), "marker removed");
    }
    assert_eq!(page.style_of(fg, STYLE_TRANSFORM), None, "transform cleared");
    assert_eq!(page.style_of(bg, STYLE_BACKGROUND_POSITION), None, "background cleared");

    let writes = stage.page().style_writes();
    for y in [100.0, 300.0, 500.0] {
        assert_eq!(stage.scroll_and_render(y).shifted, 0, "nothing to shift");
    }
    assert_eq!(stage.page().style_writes(), writes, "no positional writes while gated");

    stage.resize(WIDE, VIEWPORT_H);
    let report = stage.rediscover();
    assert_eq!(report.shifted, 2, "writes resume after rediscovery");
}

#[test]
fn narrow_start_leaves_elements_unmarked() {
    let page = FakePage::new(NARROW, VIEWPORT_H);
    let fg = page.add_element(0.0, 600.0, &[("data-parallax", "0.5")]);
    let mut stage = Stage::start(page, &parallax_only());

    assert!(stage.parallax().expect("parallax enabled").triggers().is_empty(), "no triggers");
    assert!(!stage.page().element_has_class(fg, CLASS_HAS_PARALLAX), "not marked");
    assert_eq!(stage.scroll_and_render(300.0).shifted, 0, "no writes");
    assert_eq!(stage.page().style_writes(), 0, "never written");
}

#[test]
fn recalculation_updates_offset_and_height() {
    let page = FakePage::new(WIDE, VIEWPORT_H);
    let hero = page.add_element(200.0, 600.0, &[("data-parallax", "0.5")]);
    let still = page.add_element(1000.0, 300.0, &[("data-parallax", "0.5")]);
    let mut stage = Stage::start(page, &parallax_only());

    stage.page().move_element(hero, 350.0);
    stage.page().resize_element(hero, 900.0);
    stage.page().set_document_height(2500.0);

    assert_eq!(stage.advance(1500), 1, "only the moved trigger");
    let moved = trigger_of(&stage, hero);
    assert_eq!(moved.offset, 350.0, "offset re-measured");
    assert_eq!(moved.height, 900.0, "height re-measured");
    assert_eq!(trigger_of(&stage, still).offset, 1000.0, "unmoved trigger kept");

    let _ = stage.scroll_and_render(550.0);
    assert_eq!(
        stage.page().style_of(hero, STYLE_TRANSFORM).as_deref(),
        Some("translate(0, 100px)"),
        "shift uses the new offset"
    );
}

#[test]
fn recalculation_period_follows_config() {
    let page = FakePage::new(WIDE, VIEWPORT_H);
    let hero = page.add_element(200.0, 600.0, &[("data-parallax", "0.5")]);
    let config = Config {
        recalc_interval_ms: 600.0,
        ..parallax_only()
    };
    let mut stage = Stage::start(page, &config);

    stage.page().move_element(hero, 260.0);
    stage.page().set_document_height(5000.0);
    assert_eq!(stage.advance(600), 1, "due after 600ms");
    assert_eq!(trigger_of(&stage, hero).offset, 260.0, "updated");
}

#[test]
fn resize_reruns_the_frame_pass() {
    let page = FakePage::new(WIDE, VIEWPORT_H);
    let band = page.add_element(1000.0, 400.0, &[("data-parallax", "0.5")]);
    let mut stage = Stage::start(page, &parallax_only());
    assert_eq!(stage.page().style_of(band, STYLE_TRANSFORM), None, "below the fold");

    stage.resize(WIDE, 1200.0);
    assert_eq!(stage.run_frame().shifted, 1, "taller viewport brings it in view");
    assert_eq!(
        stage.page().style_of(band, STYLE_TRANSFORM).as_deref(),
        Some("translate(0, -500px)"),
        "(0 - 1000) * 0.5"
    );
}
