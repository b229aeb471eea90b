// Example: windowed rendering over a large collection.
use slicer::{VirtualList, VirtualListOptions};

fn main() {
    let mut list = VirtualList::new(
        VirtualListOptions::new(1_000_000, 20).with_viewport_extent(400),
    );
    let mut now_ms = 0u64;
    list.tick(now_ms);

    println!("spacer extent = {}", list.total_extent());
    println!("initial window = {:?}", list.window());

    // Simulate a fast scroll: most events are hysteresis no-ops.
    for offset in (0..20_000u64).step_by(150) {
        now_ms += 16;
        list.apply_scroll_event(offset, now_ms);
    }
    println!("window after scroll = {:?}", list.window());
    println!("retired (pending teardown) = {}", list.retired().len());

    // Once scrolling has been quiet, the sweep releases retired elements.
    now_ms += 500;
    let released = list.tick(now_ms);
    println!("released after quiet period = {}", released.len());

    let mut out = Vec::new();
    list.collect_window_items(&mut out);
    if let (Some(first), Some(last)) = (out.first(), out.last()) {
        println!("first={first:?} last={last:?}");
    }
}
