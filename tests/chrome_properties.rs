mod common;

use std::time::Instant;

use common::{signed_in, ms};
use proptest::prelude::*;
use thyne_shell::state::chrome::ChromeThresholds;
use thyne_shell::state::{ChromeVisibility, PrimaryTab, ScrollChromeController, View};

/// Controller that has already processed `offsets` in order.
fn after(offsets: &[u32]) -> ScrollChromeController {
    let mut controller = ScrollChromeController::default();
    for &top in offsets {
        controller.handle_scroll(top);
    }
    controller
}

fn tab() -> impl Strategy<Value = PrimaryTab> {
    prop_oneof![
        Just(PrimaryTab::Commerce),
        Just(PrimaryTab::Community),
        Just(PrimaryTab::Create),
    ]
}

proptest! {
    #[test]
    fn jitter_never_changes_visibility(
        history in prop::collection::vec(0u32..500, 0..20),
        step in -4i64..=4,
    ) {
        let mut controller = after(&history);
        let before = controller.visibility();
        let last = i64::from(controller.last_top());
        let top = u32::try_from((last + step).max(0)).unwrap();

        prop_assert_eq!(controller.handle_scroll(top), before);
        prop_assert_eq!(i64::from(controller.last_top()), last);
    }

    #[test]
    fn upward_scroll_near_top_keeps_visibility(
        history in prop::collection::vec(0u32..500, 0..20),
        top in 0u32..=50,
    ) {
        let mut controller = after(&history);
        prop_assume!(top < controller.last_top());
        let before = controller.visibility();

        prop_assert_eq!(controller.handle_scroll(top), before);
    }

    #[test]
    fn downward_scroll_always_shows_chrome(
        history in prop::collection::vec(0u32..500, 0..20),
        delta in 5u32..300,
    ) {
        let mut controller = after(&history);
        let top = controller.last_top() + delta;

        prop_assert_eq!(controller.handle_scroll(top), ChromeVisibility::VISIBLE);
    }

    #[test]
    fn upward_scroll_past_threshold_hides_chrome(
        start in 60u32..500,
        delta in 5u32..200,
    ) {
        let mut controller = after(&[start]);
        let top = start.saturating_sub(delta);
        prop_assume!(top > 50 && start - top >= 5);

        prop_assert_eq!(controller.handle_scroll(top), ChromeVisibility::HIDDEN);
    }

    #[test]
    fn fullscreen_freezes_chrome(
        history in prop::collection::vec(0u32..500, 0..20),
        events in prop::collection::vec(0u32..500, 1..20),
    ) {
        let mut controller = after(&history);
        let before = controller.visibility();
        let last = controller.last_top();
        controller.set_fullscreen(true);

        for top in events {
            prop_assert_eq!(controller.handle_scroll(top), before);
        }
        prop_assert_eq!(controller.last_top(), last);
    }

    #[test]
    fn tab_selection_resets_chrome_and_scroll(
        scrolls in prop::collection::vec(-80i32..80, 0..30),
        tabs in prop::collection::vec(tab(), 1..6),
    ) {
        let t0 = Instant::now();
        let mut composer = signed_in(t0);

        for (i, tab) in tabs.into_iter().enumerate() {
            for &delta in &scrolls {
                composer.scroll_by(delta);
            }
            let now = t0 + ms(i as u64 * 100);
            prop_assert!(composer.select_primary_tab(tab, now));
            prop_assert_eq!(composer.chrome().visibility(), ChromeVisibility::VISIBLE);
            prop_assert_eq!(composer.region().offset(), 0);
            composer.compose();
        }
    }
}

#[test]
fn test_fullscreen_scenario_keeps_offset() {
    let t0 = Instant::now();
    let mut composer = signed_in(t0);
    composer.scroll_to(100);
    composer.scroll_to(70);
    assert_eq!(composer.chrome().visibility(), ChromeVisibility::HIDDEN);

    composer.set_fullscreen(true);
    assert_eq!(composer.chrome().visibility(), ChromeVisibility::HIDDEN);

    // A delta of -20 while fullscreen is dropped.
    assert_eq!(composer.scroll_by(-20), None);
    assert_eq!(composer.chrome().visibility(), ChromeVisibility::HIDDEN);
    assert_eq!(composer.region().offset(), 70);

    assert_eq!(composer.set_fullscreen(false), ChromeVisibility::VISIBLE);
    assert_eq!(composer.region().offset(), 70);
    assert_eq!(composer.chrome().last_top(), 70);
}

#[test]
fn test_fullscreen_scenario_on_bare_controller() {
    let mut controller = after(&[200, 120]);
    assert_eq!(controller.visibility(), ChromeVisibility::HIDDEN);

    controller.set_fullscreen(true);
    assert_eq!(controller.handle_scroll(100), ChromeVisibility::HIDDEN);
    assert_eq!(controller.last_top(), 120);

    assert_eq!(controller.set_fullscreen(false), ChromeVisibility::VISIBLE);
    assert_eq!(controller.last_top(), 120);
}

#[test]
fn test_tab_reset_wins_until_next_render() {
    let t0 = Instant::now();
    let mut composer = signed_in(t0);
    composer.scroll_to(120);

    composer.select_primary_tab(PrimaryTab::Community, t0);
    assert_eq!(composer.scroll_by(40), None);
    assert_eq!(composer.region().offset(), 0);

    composer.compose();
    assert!(composer.scroll_by(40).is_some());
}

#[test]
fn test_hidden_chrome_is_reported_to_the_shell() {
    let t0 = Instant::now();
    let mut composer = signed_in(t0);
    composer.scroll_to(100);
    composer.scroll_to(60);

    match composer.compose() {
        View::Shell(shell) => {
            assert_eq!(shell.chrome, Some(ChromeVisibility::HIDDEN));
            assert_eq!(shell.scroll_offset, 60);
        }
        other => panic!("expected shell, got {:?}", other),
    }

    composer.set_fullscreen(true);
    match composer.compose() {
        View::Shell(shell) => assert_eq!(shell.chrome, None),
        other => panic!("expected shell, got {:?}", other),
    }
}

#[test]
fn test_custom_thresholds() {
    let mut controller = ScrollChromeController::new(ChromeThresholds {
        jitter: 10,
        collapse_offset: 20,
    });
    controller.handle_scroll(100);

    // Below the wider jitter band.
    assert_eq!(controller.handle_scroll(92), ChromeVisibility::VISIBLE);
    assert_eq!(controller.handle_scroll(30), ChromeVisibility::HIDDEN);
}
