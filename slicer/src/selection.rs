use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::options::SelectionChangedCallback;
use crate::{HoverDelta, KeyModifiers, SlicerItem};

/// A pure selection state machine for slicer-style list controls.
///
/// It reconciles click, shift-range, ctrl-toggle and drag ("brush") gestures
/// into one consistent multi-select model. The type holds no UI objects: an
/// adapter translates concrete pointer/keyboard events into the operations
/// below and applies the resulting selection to on-screen elements.
///
/// States are `Idle` and `Dragging` ([`Self::start_drag`]/[`Self::end_drag`]).
/// Modifier keys are orthogonal to the drag state and tracked continuously
/// via [`Self::key_pressed`].
///
/// Every selection mutation funnels through one private `apply` step that
/// enforces single-select collapsing and change detection, so the registered
/// listener fires exactly once per actual id-set change.
pub struct SelectionManager<T> {
    items: Vec<T>,
    selection: Vec<T>,
    brushing: Vec<T>,
    previously_brushed: Option<String>,
    pivot: Option<T>,
    modifiers: KeyModifiers,
    dragging: bool,
    single_select: bool,
    brush_mode: bool,
    on_change: Option<SelectionChangedCallback<T>>,
}

impl<T: SlicerItem + Clone> SelectionManager<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selection: Vec::new(),
            brushing: Vec::new(),
            previously_brushed: None,
            pivot: None,
            modifiers: KeyModifiers::default(),
            dragging: false,
            single_select: false,
            brush_mode: false,
            on_change: None,
        }
    }

    /// Replaces the ordered collection used for index lookups (shift ranges,
    /// brush bounds).
    ///
    /// Does not clear the selection: selected items survive filtering and
    /// paging. In-progress brush bookkeeping is reset, since indices into the
    /// old collection are no longer valid.
    pub fn set_items(&mut self, items: Vec<T>) {
        sdebug!(count = items.len(), "SelectionManager::set_items");
        self.items = items;
        self.brushing.clear();
        self.previously_brushed = None;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The committed selection, in selection order: click order for toggled
    /// items, collection order within a shift range.
    pub fn selection(&self) -> &[T] {
        &self.selection
    }

    /// Replaces the selection.
    ///
    /// Single-select collapsing and change detection are re-applied: the
    /// listener fires only when the id set actually changed, and an equal id
    /// set keeps the previously stored order.
    pub fn set_selection(&mut self, selection: Vec<T>) {
        self.apply(selection);
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(&[T]) + Send + Sync + 'static>) {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    pub fn single_select(&self) -> bool {
        self.single_select
    }

    /// Toggles single-select mode.
    ///
    /// Enabling collapses the current selection to its most recently selected
    /// element immediately, without waiting for the next interaction.
    pub fn set_single_select(&mut self, single_select: bool) {
        self.single_select = single_select;
        if single_select {
            let current = self.selection.clone();
            self.apply(current);
        }
    }

    pub fn brush_mode(&self) -> bool {
        self.brush_mode
    }

    pub fn set_brush_mode(&mut self, brush_mode: bool) {
        self.brush_mode = brush_mode;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn modifiers(&self) -> KeyModifiers {
        self.modifiers
    }

    /// The in-progress brushing selection (empty outside an active drag).
    pub fn brushing_selection(&self) -> &[T] {
        &self.brushing
    }

    /// Records the modifier state.
    ///
    /// When shift goes down the range pivot anchors from the last selected
    /// item (left unset when the selection is empty); releasing shift clears
    /// the pivot.
    pub fn key_pressed(&mut self, modifiers: KeyModifiers) {
        if modifiers.shift && !self.modifiers.shift {
            self.pivot = self.selection.last().cloned();
        } else if !modifiers.shift && self.modifiers.shift {
            self.pivot = None;
        }
        self.modifiers = modifiers;
    }

    /// Handles a click on an item, honoring the current modifier state.
    ///
    /// - ctrl: toggles the item in the selection.
    /// - shift: replaces the selection with the inclusive collection slice
    ///   between the pivot and the item. The first shift-click sets the pivot
    ///   when none exists; later shift-clicks keep re-anchoring from the same
    ///   pivot until shift is released. Degrades to a no-op when no item list
    ///   is known or an id cannot be resolved.
    /// - brush mode, no modifiers: selects exactly this item, unless it is
    ///   already the sole selection, in which case the selection is cleared.
    /// - otherwise: toggles the item (incremental multi-select without ctrl).
    pub fn item_clicked(&mut self, item: &T) {
        strace!(id = item.id(), "SelectionManager::item_clicked");
        if self.modifiers.ctrl {
            self.toggle(item);
        } else if self.modifiers.shift {
            if self.items.is_empty() {
                return;
            }
            if self.pivot.is_none() {
                self.pivot = Some(item.clone());
            }
            let Some(pivot_index) = self
                .pivot
                .as_ref()
                .and_then(|pivot| self.index_of(pivot.id()))
            else {
                return;
            };
            let Some(index) = self.index_of(item.id()) else {
                return;
            };
            let lo = pivot_index.min(index);
            let hi = pivot_index.max(index);
            let range = self.items[lo..=hi].to_vec();
            self.apply(range);
        } else if self.brush_mode {
            if self.selection.len() == 1 && self.selection[0].id() == item.id() {
                self.apply(Vec::new());
            } else {
                self.apply(alloc::vec![item.clone()]);
            }
        } else {
            self.toggle(item);
        }
    }

    /// Extends the in-progress brush with a hovered item.
    ///
    /// Only meaningful while dragging in brush mode; otherwise returns an
    /// empty delta. Hovering an already-brushed item removes the
    /// immediately-previously-brushed one ("drag back to shrink"); any other
    /// item is added. When an item list is known the brushing selection is
    /// then recomputed as the full contiguous collection slice spanning the
    /// brushed items, filling in items skipped by fast pointer movement.
    ///
    /// The returned delta lists every id that entered or left the brushing
    /// selection, auto-filled items included.
    pub fn item_hovered(&mut self, item: &T) -> HoverDelta {
        if !self.dragging || !self.brush_mode {
            return HoverDelta::default();
        }
        strace!(id = item.id(), "SelectionManager::item_hovered");

        let before: Vec<String> = self.brushing.iter().map(|b| b.id().to_string()).collect();

        if self.brushing.is_empty() {
            self.brushing.push(item.clone());
        } else {
            let is_member = self.brushing.iter().any(|b| b.id() == item.id());
            if is_member {
                if let Some(prev) = self.previously_brushed.as_deref() {
                    if let Some(pos) = self.brushing.iter().position(|b| b.id() == prev) {
                        self.brushing.remove(pos);
                    }
                }
            } else {
                self.brushing.push(item.clone());
            }
            if !self.items.is_empty() {
                self.fill_brush_span();
            }
        }
        self.previously_brushed = Some(item.id().to_string());

        let mut delta = HoverDelta::default();
        for brushed in &self.brushing {
            if !before.iter().any(|id| id == brushed.id()) {
                delta.added.push(brushed.id().to_string());
            }
        }
        for id in before {
            if !self.brushing.iter().any(|b| b.id() == id) {
                delta.removed.push(id);
            }
        }
        delta
    }

    /// Enters the dragging state and resets the brushing selection.
    pub fn start_drag(&mut self) {
        strace!("SelectionManager::start_drag");
        self.dragging = true;
        self.brushing.clear();
        self.previously_brushed = None;
    }

    /// Commits the brushing selection and leaves the dragging state.
    ///
    /// With ctrl held the brushed items are unioned with the existing
    /// selection (brushed items first, deduped by id); otherwise the brushed
    /// items alone become the new selection. A no-op when no drag is in
    /// progress.
    pub fn end_drag(&mut self) {
        if !self.dragging {
            return;
        }
        strace!("SelectionManager::end_drag");
        self.dragging = false;
        let brushed = core::mem::take(&mut self.brushing);
        self.previously_brushed = None;

        let next = if self.modifiers.ctrl {
            let mut next = brushed;
            for item in &self.selection {
                if !next.iter().any(|b| b.id() == item.id()) {
                    next.push(item.clone());
                }
            }
            next
        } else {
            brushed
        };
        self.apply(next);
    }

    fn toggle(&mut self, item: &T) {
        let mut next = self.selection.clone();
        if let Some(pos) = next.iter().position(|s| s.id() == item.id()) {
            next.remove(pos);
        } else {
            next.push(item.clone());
        }
        self.apply(next);
    }

    /// Recomputes the brushing selection as the contiguous collection slice
    /// spanning the min and max brushed indices.
    fn fill_brush_span(&mut self) {
        let mut lo = usize::MAX;
        let mut hi = 0usize;
        let mut resolved = false;
        for brushed in &self.brushing {
            if let Some(index) = self.index_of(brushed.id()) {
                lo = lo.min(index);
                hi = hi.max(index);
                resolved = true;
            }
        }
        // Nothing resolvable against the current collection: keep hover order.
        if !resolved {
            return;
        }
        self.brushing = self.items[lo..=hi].to_vec();
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// The single selection mutator.
    ///
    /// Collapses to the most recent element in single-select mode, drops
    /// duplicate ids, and only stores + notifies when the id set actually
    /// changed. Re-assigning an equal set keeps the old order and fires
    /// nothing, avoiding redundant downstream re-renders.
    fn apply(&mut self, mut next: Vec<T>) {
        if self.single_select && next.len() > 1 {
            let last = next.pop();
            next.clear();
            next.extend(last);
        }
        dedup_by_id(&mut next);

        if !self.changed(&next) {
            return;
        }
        sdebug!(len = next.len(), "selection changed");
        self.selection = next;
        if let Some(cb) = &self.on_change {
            cb(&self.selection);
        }
    }

    /// Symmetric difference by id: both sides are duplicate-free, so equal
    /// lengths plus containment one way means the sets are equal.
    fn changed(&self, next: &[T]) -> bool {
        if self.selection.len() != next.len() {
            return true;
        }
        next.iter()
            .any(|n| !self.selection.iter().any(|s| s.id() == n.id()))
    }
}

impl<T: SlicerItem + Clone> Default for SelectionManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SelectionManager<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            selection: self.selection.clone(),
            brushing: self.brushing.clone(),
            previously_brushed: self.previously_brushed.clone(),
            pivot: self.pivot.clone(),
            modifiers: self.modifiers,
            dragging: self.dragging,
            single_select: self.single_select,
            brush_mode: self.brush_mode,
            on_change: self.on_change.clone(),
        }
    }
}

impl<T> core::fmt::Debug for SelectionManager<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelectionManager")
            .field("items", &self.items.len())
            .field("selection", &self.selection.len())
            .field("brushing", &self.brushing.len())
            .field("modifiers", &self.modifiers)
            .field("dragging", &self.dragging)
            .field("single_select", &self.single_select)
            .field("brush_mode", &self.brush_mode)
            .finish_non_exhaustive()
    }
}

fn dedup_by_id<T: SlicerItem>(items: &mut Vec<T>) {
    let mut kept: Vec<String> = Vec::with_capacity(items.len());
    items.retain(|item| {
        if kept.iter().any(|id| id == item.id()) {
            false
        } else {
            kept.push(item.id().to_string());
            true
        }
    });
}
