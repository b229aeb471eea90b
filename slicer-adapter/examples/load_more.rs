// Example: the single-in-flight load-more workflow.
//
// The controller hands out LoadRequests; the host fulfils them whenever its
// data source resolves. Only the newest generation is applied, so a stale
// page arriving after a newer search is dropped silently.
use slicer::VirtualListOptions;
use slicer_adapter::{Item, SlicerController, SlicerSettings};

fn page(start: usize, len: usize) -> Vec<Item> {
    (start..start + len)
        .map(|i| Item::new(format!("row{i}"), format!("Row {i}")))
        .collect()
}

fn main() {
    let mut c = SlicerController::new(
        SlicerSettings::default().with_server_side_search(true),
        VirtualListOptions::new(0, 20).with_viewport_extent(400),
    );
    c.set_on_can_load_more(Some(|_is_search| true));

    let stale = c.search("ro", 0).expect("search issues a load");
    let fresh = c.search("row", 1).expect("newer search supersedes");

    // The slow first fetch resolves after the newer one was issued.
    c.complete_load(stale.generation, Ok(page(0, 100)), 2);
    println!("after stale completion: {} items", c.items().len());

    c.complete_load(fresh.generation, Ok(page(0, 40)), 3);
    println!("after fresh completion: {} items", c.items().len());

    // Scrolling near the end of the spacer pages in more rows.
    if let Some(req) = c.scroll([400, 0], 4) {
        c.complete_load(req.generation, Ok(page(40, 40)), 5);
    }
    println!("after scroll page: {} items", c.items().len());
}
