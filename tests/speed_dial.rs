use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use speed_dial::prelude::*;

fn fab() -> FloatingActionButton {
    let mut fab = FloatingActionButton::new();
    fab.set_bounds(Rect::new(0.0, 0.0, 56.0, 56.0));
    fab
}

fn tap(fab: &mut FloatingActionButton, x: f32, y: f32) {
    fab.dispatch(&Event::tap_down(x, y));
    fab.dispatch(&Event::tap_up(x, y));
}

#[test]
fn test_items_keep_insertion_order() {
    let mut fab = fab();
    let ids: Vec<ItemId> = ["One", "Two", "Three"]
        .into_iter()
        .map(|title| fab.add_item(ItemOptions::new().title(title)).id())
        .collect();

    let order: Vec<ItemId> = fab.items().iter().map(|item| item.id()).collect();
    assert_eq!(order, ids);
    let titles: Vec<_> = fab.items().iter().map(|item| item.title()).collect();
    assert_eq!(titles, [Some("One"), Some("Two"), Some("Three")]);
}

#[test]
fn test_item_defaults_are_not_retroactive() {
    let mut fab = fab();
    fab.add_item(ItemOptions::new().title("Before"));

    fab.update_style(|style| {
        style.item_size = 30.0;
        style.item_button_color = Color::BLACK;
    });
    fab.add_item(ItemOptions::new().title("After"));

    let items = fab.items();
    assert_eq!(items[0].size(), 42.0);
    assert_eq!(items[0].button_color(), Color::WHITE);
    assert_eq!(items[1].size(), 30.0);
    assert_eq!(items[1].button_color(), Color::BLACK);
}

#[test]
fn test_every_factory_shape() {
    let mut fab = fab();
    fab.add_item(ItemOptions::new().title("title"));
    fab.add_item(ItemOptions::new().title("title").icon("a.png"));
    fab.add_item(ItemOptions::new().title("title").icon("a.png").on_tap(|_| {}));
    fab.add_item(ItemOptions::new().icon("a.png"));
    fab.add_item(ItemOptions::new().icon("a.png").on_tap(|_| {}));
    fab.push_item(Item::new().with_title("prebuilt"));

    let shapes: Vec<_> = fab
        .items()
        .iter()
        .map(|i| (i.title().is_some(), i.icon().is_some(), i.has_handler()))
        .collect();
    assert_eq!(
        shapes,
        [
            (true, false, false),
            (true, true, false),
            (true, true, true),
            (false, true, false),
            (false, true, true),
            (true, false, false),
        ]
    );
    assert!(fab.items().iter().all(|i| i.current_alpha() == 0.0));
}

#[test]
fn test_toggle_twice_returns_to_closed() {
    let mut fab = fab();
    fab.toggle();
    assert!(fab.is_open());
    fab.toggle();
    assert!(fab.is_closed());
}

#[test]
fn test_open_is_idempotent() {
    let mut fab = fab();
    fab.open();
    fab.open();
    assert!(!fab.is_closed());
}

#[test]
fn test_remove_absent_item_is_noop() {
    let mut fab = fab();
    fab.add_item(ItemOptions::new().title("kept"));
    let stranger = Item::new();

    assert!(!fab.remove_item(stranger.id()));
    assert_eq!(fab.items().len(), 1);
}

#[test]
fn test_remove_item_by_id_and_index() {
    let mut fab = fab();
    let a = fab.add_item(ItemOptions::new().title("a")).id();
    let b = fab.add_item(ItemOptions::new().title("b")).id();
    let c = fab.add_item(ItemOptions::new().title("c")).id();

    assert!(fab.remove_item(b));
    let remaining: Vec<_> = fab.items().iter().map(|i| i.id()).collect();
    assert_eq!(remaining, [a, c]);

    fab.remove_item_at(0);
    assert_eq!(fab.items().len(), 1);
    assert_eq!(fab.items()[0].id(), c);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_remove_item_at_out_of_range_panics() {
    let mut fab = fab();
    fab.add_item(ItemOptions::new());
    fab.remove_item_at(1);
}

#[test]
fn test_try_remove_item_at_reports_error() {
    let mut fab = fab();
    let err = fab.try_remove_item_at(0).unwrap_err();
    assert_eq!(err, FabError::IndexOutOfBounds { index: 0, len: 0 });
}

#[test]
fn test_hidden_items_do_not_take_space() {
    let mut fab = fab();
    fab.add_item(ItemOptions::new().title("A"));
    fab.add_item(ItemOptions::new().title("B")).set_hidden(true);
    fab.add_item(ItemOptions::new().title("C"));

    assert_eq!(fab.item_offsets(), vec![Some(56.0), None, Some(112.0)]);

    fab.open();
    let items = fab.items();
    assert_eq!(items[0].frame().y, -56.0);
    assert_eq!(items[2].frame().y, -112.0);

    // B is not animated: it stays collapsed and invisible
    let mut now = Duration::ZERO;
    while fab.advance_animations(now) {
        now += Duration::from_millis(16);
    }
    assert_eq!(fab.items()[1].current_alpha(), 0.0);
    assert_eq!(fab.items()[0].current_alpha(), 1.0);
    assert_eq!(fab.items()[2].current_alpha(), 1.0);
}

#[test]
fn test_outside_tap_closes_without_handlers() {
    let taps = Rc::new(Cell::new(0));
    let mut fab = fab();
    for title in ["A", "B"] {
        let taps = taps.clone();
        fab.add_item(
            ItemOptions::new()
                .title(title)
                .on_tap(move |_| taps.set(taps.get() + 1)),
        );
    }
    tap(&mut fab, 28.0, 28.0);
    assert!(fab.is_open());

    tap(&mut fab, 200.0, 200.0);

    assert!(fab.is_closed());
    assert_eq!(taps.get(), 0);
}

#[test]
fn test_item_tap_runs_handler_once_and_stays_open() {
    let tapped = Rc::new(RefCell::new(Vec::new()));
    let mut fab = fab();
    for title in ["First", "Second"] {
        let tapped = tapped.clone();
        fab.add_item(ItemOptions::new().title(title).on_tap(move |item| {
            tapped
                .borrow_mut()
                .push(item.title().unwrap_or_default().to_string())
        }));
    }
    tap(&mut fab, 28.0, 28.0);

    // Second item sits at y = -112, x = 7
    tap(&mut fab, 28.0, -100.0);

    assert_eq!(*tapped.borrow(), ["Second"]);
    assert!(fab.is_open());
}

#[test]
fn test_tap_on_button_while_open_closes() {
    let mut fab = fab();
    fab.add_item(ItemOptions::new());
    tap(&mut fab, 28.0, 28.0);
    tap(&mut fab, 28.0, 28.0);
    assert!(fab.is_closed());
}

#[test]
fn test_touch_without_location_is_ignored() {
    let mut fab = fab();
    let lost = Event::TouchDown {
        touches: 1,
        touch: Touch {
            location: None,
            tap_count: 1,
        },
    };
    assert_eq!(fab.dispatch(&lost), EventResponse::Ignored);
    assert!(!fab.is_tinted());
    assert!(fab.is_closed());
}

#[test]
fn test_animations_settle_after_close() {
    let mut fab = fab();
    fab.add_item(ItemOptions::new());
    fab.add_item(ItemOptions::new());

    let mut now = Duration::ZERO;
    fab.open();
    while fab.advance_animations(now) {
        now += Duration::from_millis(16);
    }
    fab.close();
    while fab.advance_animations(now) {
        now += Duration::from_millis(16);
    }

    assert!(!fab.advance_animations(now + Duration::from_secs(1)));
    for item in fab.items() {
        assert_eq!(item.current_scale(), 0.4);
        assert_eq!(item.current_alpha(), 0.0);
    }
    assert_eq!(fab.rotation(), 0.0);
}

#[test]
fn test_first_frame_after_idle_does_not_skip_animations() {
    let mut fab = fab();
    fab.add_item(ItemOptions::new().title("A"));
    fab.add_item(ItemOptions::new().title("B"));

    assert!(!fab.advance_animations(Duration::from_secs(1)));
    fab.open();

    assert!(fab.advance_animations(Duration::from_secs(11)));
    let items = fab.items();
    assert_eq!(items[0].current_alpha(), 0.0);
    assert_eq!(items[1].current_alpha(), 0.0);
    assert_eq!(fab.rotation(), 0.0);
    assert_eq!(fab.overlay_opacity(), 0.0);

    // 50ms later the first item moves but the second is still waiting
    fab.advance_animations(Duration::from_millis(11_050));
    assert!(fab.items()[0].current_alpha() > 0.0);
    assert_eq!(fab.items()[1].current_alpha(), 0.0);
}

#[test]
fn test_close_after_idle_fades_over_time() {
    let mut fab = fab();
    fab.add_item(ItemOptions::new());
    fab.open();
    let mut now = Duration::ZERO;
    while fab.advance_animations(now) {
        now += Duration::from_millis(16);
    }

    fab.close();
    let later = now + Duration::from_secs(30);
    fab.advance_animations(later);
    fab.advance_animations(later + Duration::from_millis(75));

    let alpha = fab.items()[0].current_alpha();
    assert!(alpha > 0.0 && alpha < 1.0, "alpha {}", alpha);
}

#[test]
fn test_items_added_or_unhidden_while_open_ignore_taps() {
    let taps = Rc::new(Cell::new(0));
    let mut fab = fab();
    fab.add_item(ItemOptions::new().title("shown"));
    let unhidden = fab.add_item(ItemOptions::new().title("unhidden")).id();
    if let Some(item) = fab.item_mut(unhidden) {
        item.set_hidden(true);
    }
    tap(&mut fab, 28.0, 28.0);
    assert!(fab.is_open());

    let counter = taps.clone();
    fab.add_item(
        ItemOptions::new()
            .title("late")
            .on_tap(move |_| counter.set(counter.get() + 1)),
    );
    if let Some(item) = fab.item_mut(unhidden) {
        item.set_hidden(false);
    }

    // Both sit unpositioned on top of the main button, which gets the tap
    tap(&mut fab, 20.0, 20.0);
    assert_eq!(taps.get(), 0);
    assert!(fab.is_closed());

    // The next open lays them out and makes them tappable
    tap(&mut fab, 28.0, 28.0);
    assert_eq!(fab.item_offsets(), vec![Some(56.0), Some(112.0), Some(168.0)]);
    tap(&mut fab, 28.0, -160.0);
    assert_eq!(taps.get(), 1);
    assert!(fab.is_open());
}
