// Example: driving the controller with abstract gestures.
use slicer::{KeyModifiers, VirtualListOptions};
use slicer_adapter::{Item, SlicerController, SlicerSettings};

fn main() {
    let mut c = SlicerController::new(
        SlicerSettings::default(),
        VirtualListOptions::new(0, 20).with_viewport_extent(400),
    );
    c.set_on_selection_changed(Some(|items: &[Item]| {
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        println!("selection changed: {ids:?}");
    }));

    let items: Vec<Item> = (0..50)
        .map(|i| Item::new(format!("cat{i}"), format!("Category {i}")).with_value(i as f64))
        .collect();
    c.set_items(items, 0);

    // Click, then extend with a shift range.
    c.item_clicked("cat3", 1);
    c.key_pressed(KeyModifiers {
        ctrl: false,
        shift: true,
    });
    c.item_clicked("cat8", 2);
    c.key_pressed(KeyModifiers::default());

    // Brush over a few rows.
    c.set_brush_mode(true);
    c.start_drag();
    c.item_hovered("cat20");
    c.item_hovered("cat24");
    c.end_drag(3);

    println!("selected count = {}", c.selected().len());

    // Local search keeps the selection alive even when filtered out.
    c.search("Category 1", 4);
    println!(
        "view = {} items, still selected = {}",
        c.items().len(),
        c.selected().len()
    );
}
