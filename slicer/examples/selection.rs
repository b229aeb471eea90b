// Example: gesture reconciliation in the selection state machine.
use slicer::{KeyModifiers, SelectionManager, SlicerItem};

#[derive(Clone, Debug)]
struct Row {
    id: String,
}

impl SlicerItem for Row {
    fn id(&self) -> &str {
        &self.id
    }
}

fn row(id: &str) -> Row {
    Row { id: id.into() }
}

fn main() {
    let mut sm = SelectionManager::new();
    sm.set_items(["a", "b", "c", "d", "e", "f", "g", "h"].map(row).to_vec());

    // Plain click, then a shift-range anchored at the click.
    sm.item_clicked(&row("c"));
    sm.key_pressed(KeyModifiers {
        ctrl: false,
        shift: true,
    });
    sm.item_clicked(&row("f"));
    println!(
        "range: {:?}",
        sm.selection().iter().map(|r| r.id.as_str()).collect::<Vec<_>>()
    );

    // Brush drag: hovering h then e auto-fills the skipped items.
    sm.key_pressed(KeyModifiers::default());
    sm.set_brush_mode(true);
    sm.start_drag();
    sm.item_hovered(&row("h"));
    let delta = sm.item_hovered(&row("e"));
    println!("hover delta: +{:?} -{:?}", delta.added, delta.removed);
    sm.end_drag();
    println!(
        "brushed: {:?}",
        sm.selection().iter().map(|r| r.id.as_str()).collect::<Vec<_>>()
    );
}
