use alloc::vec::Vec;
use core::cmp;

use crate::options::VirtualListOptions;
use crate::{Orientation, WindowItem, WindowRange};

/// A headless windowed-list renderer.
///
/// Given a total item count and a fixed per-item extent, it maintains a
/// scrollable viewport abstraction: [`Self::total_extent`] sizes the host's
/// invisible scroll spacer so native scrollbars behave correctly, and only a
/// bounded window of indices around the current scroll offset is
/// materialized. Indices falling out of the window are retired lazily and
/// released by [`Self::tick`] once scrolling has been quiet for a grace
/// period, decoupling teardown cost from scroll-frame cost.
///
/// This type is intentionally UI-agnostic:
/// - It holds no UI objects and no clock; adapters feed it scroll offsets
///   and `now_ms` timestamps and drive `tick` periodically.
/// - Rendering is exposed via zero-allocation iteration
///   ([`Self::for_each_window_item`]) and an optional `on_render` callback.
#[derive(Clone, Debug)]
pub struct VirtualList {
    options: VirtualListOptions,
    scroll_offset: u64,
    last_rendered_offset: u64,
    window: WindowRange,
    retired: Vec<usize>,
    last_scroll_event_ms: Option<u64>,
    pending_render: Option<PendingRender>,
    last_sweep_ms: Option<u64>,
    destroyed: bool,
}

#[derive(Clone, Copy, Debug)]
struct PendingRender {
    due_ms: u64,
    start_index: usize,
}

impl VirtualList {
    /// Creates a new list from options.
    ///
    /// An initial render of the window starting at index 0 is scheduled; it
    /// materializes on the first [`Self::tick`].
    pub fn new(options: VirtualListOptions) -> Self {
        sdebug!(
            count = options.count,
            item_extent = options.item_extent,
            viewport_extent = options.viewport_extent,
            "VirtualList::new"
        );
        Self {
            options,
            scroll_offset: 0,
            last_rendered_offset: 0,
            window: WindowRange::default(),
            retired: Vec::new(),
            last_scroll_event_ms: None,
            pending_render: Some(PendingRender {
                due_ms: 0,
                start_index: 0,
            }),
            last_sweep_ms: None,
            destroyed: false,
        }
    }

    pub fn options(&self) -> &VirtualListOptions {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn item_extent(&self) -> u32 {
        self.options.item_extent
    }

    pub fn viewport_extent(&self) -> u32 {
        self.options.viewport_extent
    }

    pub fn orientation(&self) -> Orientation {
        self.options.orientation
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    /// The currently materialized window.
    pub fn window(&self) -> WindowRange {
        self.window
    }

    /// Indices flagged for deferred removal but not yet released.
    pub fn retired(&self) -> &[usize] {
        &self.retired
    }

    pub fn has_pending_render(&self) -> bool {
        self.pending_render.is_some()
    }

    /// Items visible in the viewport at once (ceiling division).
    pub fn visible_count(&self) -> u32 {
        let extent = self.options.item_extent;
        if extent == 0 {
            return 0;
        }
        self.options.viewport_extent.div_ceil(extent)
    }

    /// Window size in items: one page before, one visible, one after.
    pub fn cache_window(&self) -> usize {
        self.visible_count() as usize * 3
    }

    /// Hysteresis threshold: the scroll offset must move this far from the
    /// last rendered offset before a scroll event triggers a re-render.
    pub fn max_buffer(&self) -> u64 {
        self.visible_count() as u64 * self.options.item_extent as u64
    }

    /// Full logical extent of the collection, i.e. the host's scroll-spacer size.
    pub fn total_extent(&self) -> u64 {
        self.options.item_extent as u64 * self.options.count as u64
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_extent()
            .saturating_sub(self.options.viewport_extent as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// The current scroll position as a `[top, left]` pair for this axis.
    pub fn scroll_position(&self) -> [u64; 2] {
        self.options.orientation.scroll_position(self.scroll_offset)
    }

    /// Restores a `[top, left]` scroll position pair (e.g. from a saved
    /// snapshot), reading the axis-appropriate member.
    pub fn set_scroll_position(&mut self, position: [u64; 2], now_ms: u64) {
        let offset = self.options.orientation.offset_of(position);
        self.apply_scroll_event(offset, now_ms);
    }

    /// Replaces the backing collection.
    ///
    /// Recomputes the spacer extent, resets scroll bookkeeping and schedules
    /// a render of the window starting at index 0.
    pub fn set_items(&mut self, count: usize, now_ms: u64) {
        if self.destroyed {
            return;
        }
        sdebug!(count, "VirtualList::set_items");
        self.options.count = count;
        self.scroll_offset = 0;
        self.last_rendered_offset = 0;
        self.last_scroll_event_ms = None;
        self.schedule_render(0, now_ms);
    }

    /// Updates the viewport extent and schedules a render at the current
    /// scroll-derived start index.
    pub fn set_viewport_extent(&mut self, extent: u32, now_ms: u64) {
        if self.destroyed || self.options.viewport_extent == extent {
            return;
        }
        self.options.viewport_extent = extent;
        self.schedule_render(self.scroll_start_index(), now_ms);
    }

    /// Updates the per-item extent. The spacer extent changes with it.
    pub fn set_item_extent(&mut self, extent: u32, now_ms: u64) {
        if self.destroyed || self.options.item_extent == extent {
            return;
        }
        self.options.item_extent = extent;
        self.schedule_render(self.scroll_start_index(), now_ms);
    }

    /// Switches the scroll axis.
    pub fn set_orientation(&mut self, orientation: Orientation, now_ms: u64) {
        if self.destroyed || self.options.orientation == orientation {
            return;
        }
        sdebug!(horizontal = orientation.is_horizontal(), "VirtualList::set_orientation");
        self.options.orientation = orientation;
        self.schedule_render(self.scroll_start_index(), now_ms);
    }

    /// Applies a scroll offset update from the host.
    ///
    /// Re-renders only when the offset has moved more than [`Self::max_buffer`]
    /// away from the last rendered offset; every other event is a bookkeeping
    /// no-op, so most scroll frames stay render-free.
    pub fn apply_scroll_event(&mut self, offset: u64, now_ms: u64) {
        if self.destroyed {
            swarn!(offset, "apply_scroll_event on a destroyed VirtualList");
            return;
        }
        let offset = self.clamp_scroll_offset(offset);
        strace!(offset, now_ms, "VirtualList::apply_scroll_event");
        self.scroll_offset = offset;
        self.last_scroll_event_ms = Some(now_ms);
        if offset.abs_diff(self.last_rendered_offset) > self.max_buffer() {
            self.render_window(self.scroll_start_index());
        }
    }

    /// Schedules a debounced re-render of the current window.
    ///
    /// Use when item content or formatting changed without scroll movement.
    pub fn rerender(&mut self, now_ms: u64) {
        if self.destroyed {
            return;
        }
        self.schedule_render(self.window.start_index, now_ms);
    }

    /// Advances the debounce and cleanup timers.
    ///
    /// Fires a due scheduled render, runs the deferred-removal sweep on its
    /// own cadence, and returns the indices whose elements the host should
    /// now physically remove. The result stays empty while scrolling is
    /// still active; teardown waits for a quiet period.
    pub fn tick(&mut self, now_ms: u64) -> Vec<usize> {
        if self.destroyed {
            return Vec::new();
        }

        if let Some(pending) = self.pending_render {
            if now_ms >= pending.due_ms {
                self.render_window(pending.start_index);
            }
        }

        let sweep_due = match self.last_sweep_ms {
            Some(last) => now_ms.saturating_sub(last) >= self.options.sweep_interval_ms,
            None => true,
        };
        if !sweep_due {
            return Vec::new();
        }
        self.last_sweep_ms = Some(now_ms);

        let quiet = match self.last_scroll_event_ms {
            Some(last) => now_ms.saturating_sub(last) >= self.options.removal_quiet_ms,
            None => true,
        };
        if !quiet || self.retired.is_empty() {
            return Vec::new();
        }
        sdebug!(count = self.retired.len(), "releasing retired elements");
        core::mem::take(&mut self.retired)
    }

    /// Stops all scheduled work and invalidates the instance. Idempotent;
    /// every operation is a no-op afterwards.
    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.pending_render = None;
        self.retired.clear();
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Calls `f` for every materialized window item with its spacer position.
    ///
    /// Positions are `index * item_extent`, so visual order is correct
    /// regardless of the order the host (re)inserts elements.
    pub fn for_each_window_item(&self, mut f: impl FnMut(WindowItem)) {
        let extent = self.options.item_extent;
        for index in self.window.start_index..self.window.end_index {
            f(WindowItem {
                index,
                start: index as u64 * extent as u64,
                size: extent,
            });
        }
    }

    /// Collects the window items into `out` (clears `out` first).
    ///
    /// Convenience wrapper around [`Self::for_each_window_item`]; prefer the
    /// iteration form with a reused scratch buffer in hot paths.
    pub fn collect_window_items(&self, out: &mut Vec<WindowItem>) {
        out.clear();
        self.for_each_window_item(|item| out.push(item));
    }

    /// Window start index derived from the current offset:
    /// `floor(offset / item_extent) - visible_count`, clamped at 0.
    fn scroll_start_index(&self) -> usize {
        let extent = self.options.item_extent;
        if extent == 0 {
            return 0;
        }
        let page = (self.scroll_offset / extent as u64) as usize;
        page.saturating_sub(self.visible_count() as usize)
    }

    fn schedule_render(&mut self, start_index: usize, now_ms: u64) {
        // Latest request wins: repeated setter calls coalesce into a single
        // render at the newest start index.
        self.pending_render = Some(PendingRender {
            due_ms: now_ms.saturating_add(self.options.render_debounce_ms),
            start_index,
        });
    }

    fn render_window(&mut self, start_index: usize) {
        let count = self.options.count;
        let start = cmp::min(start_index, count);
        let end = cmp::min(start.saturating_add(self.cache_window()), count);
        let next = WindowRange {
            start_index: start,
            end_index: end,
        };

        // Indices leaving the window are flagged for deferred removal;
        // indices re-entering it are resurrected.
        let old = self.window;
        for index in old.start_index..old.end_index {
            if !next.contains(index) && !self.retired.contains(&index) {
                self.retired.push(index);
            }
        }
        self.retired
            .retain(|index| !next.contains(*index) && *index < count);

        self.window = next;
        self.last_rendered_offset = self.scroll_offset;
        self.pending_render = None;
        sdebug!(
            start = next.start_index,
            end = next.end_index,
            "render window"
        );
        self.notify_render();
    }

    fn notify_render(&self) {
        if let Some(cb) = &self.options.on_render {
            cb(self);
        }
    }
}
