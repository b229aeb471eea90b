use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use slicer::{
    HoverDelta, KeyModifiers, Orientation, SelectionManager, VirtualList, VirtualListOptions,
};

use crate::events::{
    CanLoadMoreCallback, LoadError, LoadRequest, ScrollCallback, SearchPerformedCallback,
    SelectionChangedCallback,
};
use crate::{Item, SlicerSettings, SlicerState};

/// A framework-neutral controller wiring a [`SelectionManager`] to a
/// [`VirtualList`] and to host-facing events.
///
/// The controller owns the item universe and the filtered display view.
/// Adapters drive it by calling:
/// - the gesture methods (`item_clicked`, `item_hovered`, drag and key
///   events) translated from concrete pointer/keyboard input
/// - `scroll` / `search` when the corresponding UI events occur
/// - `tick(now_ms)` periodically, for debounced renders and deferred
///   element teardown
/// - `complete_load` when a host data fetch resolves
///
/// At most one data fetch is logically in flight: issuing a new search
/// supersedes the previous request, and the superseded completion is
/// ignored by a generation check rather than cancelled.
pub struct SlicerController {
    universe: Vec<Item>,
    view: Vec<Item>,
    selection: SelectionManager<Item>,
    list: VirtualList,
    settings: SlicerSettings,
    search: String,
    load_generation: u64,
    pending_load: Option<PendingLoad>,
    last_emitted_ids: Vec<String>,
    on_selection_changed: Option<SelectionChangedCallback>,
    on_search_performed: Option<SearchPerformedCallback>,
    on_can_load_more: Option<CanLoadMoreCallback>,
    on_scroll: Option<ScrollCallback>,
}

#[derive(Clone, Copy, Debug)]
struct PendingLoad {
    generation: u64,
    is_search: bool,
}

impl SlicerController {
    pub fn new(settings: SlicerSettings, list_options: VirtualListOptions) -> Self {
        Self {
            universe: Vec::new(),
            view: Vec::new(),
            selection: SelectionManager::new(),
            list: VirtualList::new(list_options),
            settings,
            search: String::new(),
            load_generation: 0,
            pending_load: None,
            last_emitted_ids: Vec::new(),
            on_selection_changed: None,
            on_search_performed: None,
            on_can_load_more: None,
            on_scroll: None,
        }
    }

    pub fn selection_manager(&self) -> &SelectionManager<Item> {
        &self.selection
    }

    pub fn selection_manager_mut(&mut self) -> &mut SelectionManager<Item> {
        &mut self.selection
    }

    pub fn list(&self) -> &VirtualList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut VirtualList {
        &mut self.list
    }

    pub fn settings(&self) -> &SlicerSettings {
        &self.settings
    }

    /// Replaces the settings and re-applies the local filter (the search
    /// flags may have changed).
    pub fn set_settings(&mut self, settings: SlicerSettings, now_ms: u64) {
        self.settings = settings;
        self.refresh_view(now_ms);
    }

    /// The filtered, ordered display view.
    pub fn items(&self) -> &[Item] {
        &self.view
    }

    /// The full known item universe, unfiltered.
    pub fn universe(&self) -> &[Item] {
        &self.universe
    }

    pub fn item_at(&self, index: usize) -> Option<&Item> {
        self.view.get(index)
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    /// Replaces the item universe and re-applies the current filter.
    ///
    /// The committed selection survives: items selected earlier stay
    /// selected even when the new universe no longer contains them.
    pub fn set_items(&mut self, items: Vec<Item>, now_ms: u64) {
        self.universe = items;
        self.refresh_view(now_ms);
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    pub fn set_on_selection_changed(
        &mut self,
        cb: Option<impl Fn(&[Item]) + Send + Sync + 'static>,
    ) {
        self.on_selection_changed = cb.map(|f| Arc::new(f) as _);
    }

    pub fn set_on_search_performed(&mut self, cb: Option<impl Fn(&str) + Send + Sync + 'static>) {
        self.on_search_performed = cb.map(|f| Arc::new(f) as _);
    }

    pub fn set_on_can_load_more(
        &mut self,
        cb: Option<impl Fn(bool) -> bool + Send + Sync + 'static>,
    ) {
        self.on_can_load_more = cb.map(|f| Arc::new(f) as _);
    }

    pub fn set_on_scroll(&mut self, cb: Option<impl Fn([u64; 2]) + Send + Sync + 'static>) {
        self.on_scroll = cb.map(|f| Arc::new(f) as _);
    }

    // ------------------------------------------------------------------
    // Gestures
    // ------------------------------------------------------------------

    pub fn item_clicked(&mut self, id: &str, now_ms: u64) {
        let Some(item) = self.find_item(id) else {
            return;
        };
        self.selection.item_clicked(&item);
        self.sync_selection(now_ms);
    }

    pub fn item_hovered(&mut self, id: &str) -> HoverDelta {
        let Some(item) = self.find_item(id) else {
            return HoverDelta::default();
        };
        self.selection.item_hovered(&item)
    }

    pub fn start_drag(&mut self) {
        self.selection.start_drag();
    }

    pub fn end_drag(&mut self, now_ms: u64) {
        self.selection.end_drag();
        self.sync_selection(now_ms);
    }

    pub fn key_pressed(&mut self, modifiers: KeyModifiers) {
        self.selection.key_pressed(modifiers);
    }

    /// The committed selection.
    pub fn selected(&self) -> &[Item] {
        self.selection.selection()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.selection().iter().any(|item| item.id == id)
    }

    /// Replaces the selection by item ids, resolving against the current
    /// data. Unresolvable ids become bare identity-only items.
    pub fn set_selection_by_ids<I, S>(&mut self, ids: I, now_ms: u64)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let selection: Vec<Item> = ids
            .into_iter()
            .map(|id| {
                let id = id.into();
                self.find_item(&id).unwrap_or_else(|| Item::from_id(id))
            })
            .collect();
        self.selection.set_selection(selection);
        self.sync_selection(now_ms);
    }

    pub fn single_select(&self) -> bool {
        self.selection.single_select()
    }

    pub fn set_single_select(&mut self, single_select: bool, now_ms: u64) {
        self.selection.set_single_select(single_select);
        self.sync_selection(now_ms);
    }

    pub fn brush_mode(&self) -> bool {
        self.selection.brush_mode()
    }

    pub fn set_brush_mode(&mut self, brush_mode: bool) {
        self.selection.set_brush_mode(brush_mode);
    }

    // ------------------------------------------------------------------
    // Search and data loading
    // ------------------------------------------------------------------

    /// Applies a new search text.
    ///
    /// Emits `search_performed`, then either re-applies the local filter or,
    /// with `server_side_search` set, supersedes any in-flight load with a
    /// new search request for the host to fulfil.
    pub fn search(&mut self, text: impl Into<String>, now_ms: u64) -> Option<LoadRequest> {
        let text = text.into();
        if text == self.search {
            return None;
        }
        self.search = text;
        if let Some(cb) = &self.on_search_performed {
            cb(&self.search);
        }
        if self.settings.server_side_search {
            self.request_load(true)
        } else {
            self.refresh_view(now_ms);
            None
        }
    }

    /// Whether a data fetch is logically in flight.
    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    /// Completes a host data fetch.
    ///
    /// Only the generation of the most recent request is honored; stale
    /// completions are ignored. A failed fetch clears the in-flight flag and
    /// leaves the existing data untouched.
    pub fn complete_load(
        &mut self,
        generation: u64,
        result: Result<Vec<Item>, LoadError>,
        now_ms: u64,
    ) {
        let Some(pending) = self.pending_load else {
            return;
        };
        if pending.generation != generation {
            // Superseded request: the resolution is dropped on the floor.
            return;
        }
        self.pending_load = None;
        let items = match result {
            Ok(items) => items,
            Err(_) => return,
        };
        if pending.is_search {
            self.universe = items;
        } else {
            for item in items {
                if !self.universe.iter().any(|u| u.id == item.id) {
                    self.universe.push(item);
                }
            }
        }
        self.refresh_view(now_ms);
    }

    // ------------------------------------------------------------------
    // Scroll and timers
    // ------------------------------------------------------------------

    /// Applies a `[top, left]` scroll event from the host.
    ///
    /// Forwards the axis-appropriate offset to the windowed list (its
    /// hysteresis decides whether to re-render), emits `scroll`, and when
    /// the offset nears the end of the spacer attempts a scroll-triggered
    /// load-more.
    pub fn scroll(&mut self, position: [u64; 2], now_ms: u64) -> Option<LoadRequest> {
        let offset = self.list.orientation().offset_of(position);
        self.list.apply_scroll_event(offset, now_ms);
        if let Some(cb) = &self.on_scroll {
            cb(self.list.scroll_position());
        }
        if self.pending_load.is_none() && self.near_end() {
            return self.request_load(false);
        }
        None
    }

    /// Advances the windowed list's timers and returns the indices whose
    /// elements the host should now physically remove.
    pub fn tick(&mut self, now_ms: u64) -> Vec<usize> {
        self.list.tick(now_ms)
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Captures the restorable state as a flat snapshot.
    pub fn capture(&self) -> SlicerState {
        SlicerState {
            search: self.search.clone(),
            selected_ids: self.selected_ids(),
            text_size: self.settings.text_size,
            item_text_color: self.settings.item_text_color.clone(),
            left_text_align: self.settings.left_text_align,
            show_options: self.settings.show_options,
            show_search: self.settings.show_search,
            show_values: self.settings.show_values,
            show_selections: self.settings.show_selections,
            value_column_width_percent: self.settings.value_column_width_percent,
            horizontal: self.list.orientation().is_horizontal(),
            single_select: self.selection.single_select(),
            brush_mode: self.selection.brush_mode(),
            scroll_position: self.list.scroll_position(),
            display_value_labels: self.settings.display_value_labels,
            overflow_value_labels: self.settings.overflow_value_labels,
        }
    }

    /// Applies a previously captured snapshot.
    ///
    /// Restoring emits neither `search_performed` nor `selection_changed`;
    /// the host initiated the restore and already knows the state. Selected
    /// ids not present in the current universe become bare identity-only
    /// items.
    pub fn restore(&mut self, state: &SlicerState, now_ms: u64) {
        self.settings.text_size = state.text_size;
        self.settings.item_text_color = state.item_text_color.clone();
        self.settings.left_text_align = state.left_text_align;
        self.settings.show_options = state.show_options;
        self.settings.show_search = state.show_search;
        self.settings.show_values = state.show_values;
        self.settings.show_selections = state.show_selections;
        self.settings.value_column_width_percent = state.value_column_width_percent;
        self.settings.display_value_labels = state.display_value_labels;
        self.settings.overflow_value_labels = state.overflow_value_labels;

        self.search = state.search.clone();
        self.refresh_view(now_ms);

        self.selection.set_single_select(state.single_select);
        self.selection.set_brush_mode(state.brush_mode);
        let selection: Vec<Item> = state
            .selected_ids
            .iter()
            .map(|id| {
                self.find_item(id)
                    .unwrap_or_else(|| Item::from_id(id.clone()))
            })
            .collect();
        self.selection.set_selection(selection);
        self.last_emitted_ids = self.selected_ids();

        let orientation = if state.horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        self.list.set_orientation(orientation, now_ms);
        self.list.set_scroll_position(state.scroll_position, now_ms);
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Rebuilds the display view from the universe and the current filter,
    /// then hands the new ordering to the selection manager and the list.
    fn refresh_view(&mut self, now_ms: u64) {
        self.view = if self.settings.server_side_search || self.search.is_empty() {
            self.universe.clone()
        } else {
            self.universe
                .iter()
                .filter(|item| item.matches(&self.search, self.settings.case_insensitive))
                .cloned()
                .collect()
        };
        self.selection.set_items(self.view.clone());
        self.list.set_items(self.view.len(), now_ms);
    }

    fn find_item(&self, id: &str) -> Option<Item> {
        self.view
            .iter()
            .find(|item| item.id == id)
            .or_else(|| self.universe.iter().find(|item| item.id == id))
            .cloned()
    }

    fn selected_ids(&self) -> Vec<String> {
        self.selection
            .selection()
            .iter()
            .map(|item| item.id.clone())
            .collect()
    }

    /// Emits `selection_changed` and schedules a window re-render, but only
    /// when the committed id set actually changed since the last emission.
    fn sync_selection(&mut self, now_ms: u64) {
        let ids = self.selected_ids();
        if same_id_set(&ids, &self.last_emitted_ids) {
            return;
        }
        self.last_emitted_ids = ids;
        if let Some(cb) = &self.on_selection_changed {
            cb(self.selection.selection());
        }
        self.list.rerender(now_ms);
    }

    fn request_load(&mut self, is_search: bool) -> Option<LoadRequest> {
        let can = self
            .on_can_load_more
            .as_ref()
            .map(|cb| cb(is_search))
            .unwrap_or(false);
        if !can {
            return None;
        }
        self.load_generation += 1;
        self.pending_load = Some(PendingLoad {
            generation: self.load_generation,
            is_search,
        });
        Some(LoadRequest {
            generation: self.load_generation,
            is_search,
            search: self.search.clone(),
        })
    }

    /// Within one viewport page of the end of the spacer.
    fn near_end(&self) -> bool {
        let total = self.list.total_extent();
        if total == 0 {
            return false;
        }
        let end = self
            .list
            .scroll_offset()
            .saturating_add(self.list.viewport_extent() as u64);
        end.saturating_add(self.list.max_buffer()) >= total
    }
}

impl core::fmt::Debug for SlicerController {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SlicerController")
            .field("universe", &self.universe.len())
            .field("view", &self.view.len())
            .field("selection", &self.selection)
            .field("list", &self.list)
            .field("search", &self.search)
            .field("load_generation", &self.load_generation)
            .field("pending_load", &self.pending_load)
            .finish_non_exhaustive()
    }
}

fn same_id_set(a: &[String], b: &[String]) -> bool {
    a.len() == b.len() && a.iter().all(|id| b.contains(id))
}
