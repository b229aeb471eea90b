use alloc::sync::Arc;

use crate::Orientation;
use crate::list::VirtualList;

/// A callback fired after the materialized window of a [`VirtualList`] changes.
pub type RenderCallback = Arc<dyn Fn(&VirtualList) + Send + Sync>;

/// A callback fired when a [`crate::SelectionManager`] commits a selection
/// whose id set differs from the previous one.
pub type SelectionChangedCallback<T> = Arc<dyn Fn(&[T]) + Send + Sync>;

/// Configuration for [`VirtualList`].
///
/// Cheap to clone: the render callback is stored in an `Arc` so adapters can
/// tweak a few fields without reallocating closures.
#[derive(Clone)]
pub struct VirtualListOptions {
    /// Number of items in the backing collection.
    pub count: usize,
    /// Fixed per-item extent in the scroll axis.
    pub item_extent: u32,
    /// Viewport extent in the scroll axis (height for vertical lists, width
    /// for horizontal ones).
    pub viewport_extent: u32,
    pub orientation: Orientation,
    /// Coalescing window for setter-driven re-renders.
    pub render_debounce_ms: u64,
    /// Cadence of the deferred-removal sweep run by `tick`.
    pub sweep_interval_ms: u64,
    /// How long scrolling must have been quiet before retired elements are
    /// released for physical removal.
    pub removal_quiet_ms: u64,
    /// Optional callback fired when the materialized window changes.
    pub on_render: Option<RenderCallback>,
}

impl VirtualListOptions {
    pub fn new(count: usize, item_extent: u32) -> Self {
        Self {
            count,
            item_extent,
            viewport_extent: 0,
            orientation: Orientation::Vertical,
            render_debounce_ms: 50,
            sweep_interval_ms: 300,
            removal_quiet_ms: 100,
            on_render: None,
        }
    }

    pub fn with_viewport_extent(mut self, viewport_extent: u32) -> Self {
        self.viewport_extent = viewport_extent;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_render_debounce_ms(mut self, render_debounce_ms: u64) -> Self {
        self.render_debounce_ms = render_debounce_ms;
        self
    }

    pub fn with_sweep_interval_ms(mut self, sweep_interval_ms: u64) -> Self {
        self.sweep_interval_ms = sweep_interval_ms;
        self
    }

    pub fn with_removal_quiet_ms(mut self, removal_quiet_ms: u64) -> Self {
        self.removal_quiet_ms = removal_quiet_ms;
        self
    }

    pub fn with_on_render(
        mut self,
        on_render: Option<impl Fn(&VirtualList) + Send + Sync + 'static>,
    ) -> Self {
        self.on_render = on_render.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for VirtualListOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualListOptions")
            .field("count", &self.count)
            .field("item_extent", &self.item_extent)
            .field("viewport_extent", &self.viewport_extent)
            .field("orientation", &self.orientation)
            .field("render_debounce_ms", &self.render_debounce_ms)
            .field("sweep_interval_ms", &self.sweep_interval_ms)
            .field("removal_quiet_ms", &self.removal_quiet_ms)
            .finish_non_exhaustive()
    }
}
