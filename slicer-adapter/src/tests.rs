use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use slicer::{KeyModifiers, Orientation, VirtualListOptions};

fn make_items(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item::new(format!("i{i}"), format!("Item {i}")).with_value(i as f64))
        .collect()
}

fn mods(ctrl: bool, shift: bool) -> KeyModifiers {
    KeyModifiers { ctrl, shift }
}

fn controller() -> SlicerController {
    SlicerController::new(
        SlicerSettings::default(),
        VirtualListOptions::new(0, 20).with_viewport_extent(400),
    )
}

#[test]
fn gestures_emit_selection_changed_once_per_id_set_change() {
    let mut c = controller();
    c.set_items(make_items(5), 0);

    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);
    c.set_on_selection_changed(Some(move |_: &[Item]| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    c.item_clicked("i1", 1);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert!(c.is_selected("i1"));

    // Replacing with an equal id set emits nothing.
    c.set_selection_by_ids(["i1"], 2);
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    c.item_clicked("i2", 3);
    assert_eq!(fired.load(Ordering::SeqCst), 2);

    // Unknown ids are a no-op.
    c.item_clicked("missing", 4);
    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

#[test]
fn local_search_filters_view_and_preserves_selection() {
    let mut c = controller();
    c.set_items(
        [("a", "Alpha"), ("b", "Beta"), ("g", "Gamma")]
            .iter()
            .map(|(id, text)| Item::new(*id, *text))
            .collect(),
        0,
    );

    c.item_clicked("b", 1);
    assert!(c.is_selected("b"));

    assert!(c.search("AL", 2).is_none());
    assert_eq!(c.items().len(), 1);
    assert_eq!(c.items()[0].id, "a");

    // The selected item dropped out of the view but stays selected.
    assert!(c.is_selected("b"));

    c.search("", 3);
    assert_eq!(c.items().len(), 3);
}

#[test]
fn case_sensitive_search_respects_settings() {
    let mut c = SlicerController::new(
        SlicerSettings::default().with_case_insensitive(false),
        VirtualListOptions::new(0, 20).with_viewport_extent(400),
    );
    c.set_items(
        [Item::new("a", "Alpha"), Item::new("b", "beta")].to_vec(),
        0,
    );

    c.search("al", 1);
    assert!(c.items().is_empty());

    c.search("Al", 2);
    assert_eq!(c.items().len(), 1);
    assert_eq!(c.items()[0].id, "a");
}

#[test]
fn repeated_search_text_is_a_noop() {
    let mut c = controller();
    c.set_items(make_items(3), 0);

    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);
    c.set_on_search_performed(Some(move |_: &str| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    c.search("x", 1);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    c.search("x", 2);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[test]
fn server_side_search_supersedes_inflight_load() {
    let mut c = SlicerController::new(
        SlicerSettings::default().with_server_side_search(true),
        VirtualListOptions::new(0, 20).with_viewport_extent(400),
    );
    c.set_on_can_load_more(Some(|_is_search| true));

    let first = c.search("a", 0).expect("first search issues a load");
    assert!(first.is_search);
    assert_eq!(first.search, "a");

    let second = c.search("ab", 1).expect("second search issues a load");
    assert!(second.generation > first.generation);
    assert!(c.is_loading());

    // The superseded completion is ignored.
    c.complete_load(first.generation, Ok(make_items(2)), 2);
    assert!(c.items().is_empty());
    assert!(c.is_loading());

    // The current generation applies and replaces the universe.
    c.complete_load(second.generation, Ok(make_items(3)), 3);
    assert_eq!(c.items().len(), 3);
    assert!(!c.is_loading());
}

#[test]
fn failed_load_keeps_existing_data() {
    let mut c = SlicerController::new(
        SlicerSettings::default().with_server_side_search(true),
        VirtualListOptions::new(0, 20).with_viewport_extent(400),
    );
    c.set_on_can_load_more(Some(|_| true));
    c.set_items(make_items(4), 0);

    let req = c.search("boom", 1).expect("search issues a load");
    c.complete_load(req.generation, Err(LoadError::new("offline")), 2);

    assert!(!c.is_loading());
    assert_eq!(c.universe().len(), 4);
}

#[test]
fn scroll_near_end_requests_more_data() {
    let mut c = controller();
    c.set_on_can_load_more(Some(|is_search: bool| !is_search));
    c.set_items(make_items(100), 0);

    // total extent 2000, viewport 400, max_buffer 400.
    assert!(c.scroll([0, 0], 1).is_none());

    let req = c.scroll([1400, 0], 2).expect("near the end of the spacer");
    assert!(!req.is_search);
    assert!(c.is_loading());

    // Only one logical load at a time.
    assert!(c.scroll([1500, 0], 3).is_none());
}

#[test]
fn load_requests_require_host_consent() {
    let mut c = controller();
    c.set_items(make_items(100), 0);

    // No callback registered: never loads.
    assert!(c.scroll([1400, 0], 1).is_none());

    c.set_on_can_load_more(Some(|_| false));
    assert!(c.scroll([1500, 0], 2).is_none());
}

#[test]
fn append_load_dedups_by_id() {
    let mut c = SlicerController::new(
        SlicerSettings::default(),
        VirtualListOptions::new(0, 20).with_viewport_extent(40),
    );
    c.set_on_can_load_more(Some(|_| true));
    c.set_items(make_items(5), 0);

    let req = c.scroll([60, 0], 1).expect("scrolled to the end");
    let mut page = make_items(7).split_off(4); // i4, i5, i6
    assert_eq!(page[0].id, "i4");
    page[0].text = String::from("duplicate of i4");

    c.complete_load(req.generation, Ok(page), 2);
    assert_eq!(c.universe().len(), 7);
    // The duplicate did not replace the existing i4.
    assert_eq!(c.universe()[4].text, "Item 4");
}

#[test]
fn scroll_callback_reports_axis_pair() {
    let mut c = controller();
    c.set_items(make_items(100), 0);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    c.set_on_scroll(Some(move |position: [u64; 2]| {
        sink.lock().unwrap().push(position);
    }));

    c.scroll([600, 0], 1);
    c.list_mut().set_orientation(Orientation::Horizontal, 2);
    c.scroll([0, 800], 3);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.as_slice(), [[600, 0], [0, 800]]);
}

#[test]
fn snapshot_round_trip_reproduces_configuration() {
    let mut a = SlicerController::new(
        SlicerSettings::default().with_text_size(14.0).with_show_values(true),
        VirtualListOptions::new(0, 20).with_viewport_extent(400),
    );
    a.set_items(make_items(100), 0);
    a.item_clicked("i3", 1);
    a.key_pressed(mods(true, false));
    a.item_clicked("i7", 2);
    a.list_mut().set_orientation(Orientation::Horizontal, 3);
    a.scroll([0, 600], 4);

    let snap = a.capture();
    assert!(snap.horizontal);
    assert_eq!(snap.scroll_position, [0, 600]);
    assert_eq!(snap.selected_ids, ["i3", "i7"]);
    assert_eq!(snap.text_size, 14.0);

    let mut b = controller();
    b.set_items(make_items(100), 10);
    b.restore(&snap, 20);

    assert_eq!(b.capture(), snap);
    assert!(b.is_selected("i3"));
    assert!(b.is_selected("i7"));
}

#[test]
fn restore_does_not_emit_events() {
    let mut c = controller();
    c.set_items(make_items(10), 0);

    let fired = Arc::new(AtomicUsize::new(0));
    let selections = Arc::clone(&fired);
    c.set_on_selection_changed(Some(move |_: &[Item]| {
        selections.fetch_add(1, Ordering::SeqCst);
    }));
    let searches = Arc::clone(&fired);
    c.set_on_search_performed(Some(move |_: &str| {
        searches.fetch_add(1, Ordering::SeqCst);
    }));

    let snap = SlicerState {
        search: String::from("item"),
        selected_ids: [String::from("i1")].to_vec(),
        ..SlicerState::default()
    };
    c.restore(&snap, 1);

    assert_eq!(fired.load(Ordering::SeqCst), 0);
    assert!(c.is_selected("i1"));
    assert_eq!(c.search_text(), "item");
}

#[test]
fn restore_resolves_unknown_ids_as_bare_items() {
    let mut c = controller();
    c.set_items(make_items(3), 0);

    let snap = SlicerState {
        selected_ids: [String::from("ghost")].to_vec(),
        ..SlicerState::default()
    };
    c.restore(&snap, 1);

    assert!(c.is_selected("ghost"));
    assert_eq!(c.selected()[0].text, "ghost");
}

#[test]
fn tick_forwards_retired_indices_after_quiet_period() {
    let mut c = controller();
    c.set_items(make_items(1000), 0);
    c.tick(60);
    assert_eq!(c.list().window().end_index, 60);

    c.scroll([900, 0], 400);
    assert_eq!(c.list().window().start_index, 25);

    // Not quiet yet.
    assert!(c.tick(420).is_empty());

    let released = c.tick(800);
    assert_eq!(released.len(), 25);
}

#[test]
fn brush_gestures_flow_through_the_controller() {
    let mut c = controller();
    c.set_items(make_items(8), 0);
    c.set_brush_mode(true);

    c.start_drag();
    c.item_hovered("i7");
    let delta = c.item_hovered("i4");
    assert_eq!(delta.added, ["i4", "i5", "i6"]);
    c.end_drag(1);

    let selected: Vec<&str> = c.selected().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(selected, ["i4", "i5", "i6", "i7"]);
}

#[test]
fn item_matching_rules() {
    let item = Item::new("a", "Grand Total");
    assert!(item.matches("", true));
    assert!(item.matches("total", true));
    assert!(!item.matches("total", false));
    assert!(item.matches("Total", false));

    let bare = Item::from_id("only-id");
    assert_eq!(bare.text, "only-id");
    assert_eq!(bare.value, 0.0);
}
