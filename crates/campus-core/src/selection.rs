// ── Row selection engine ──
//
// Tracks which rows of a list are selected, with the keyboard-modifier
// semantics of a desktop file manager: plain click selects exactly one
// row, ctrl/cmd toggles one row, shift extends a contiguous range from
// the last anchor. Positions are always resolved against the caller's
// current ordered id list, never cached.
//
// Callers must only forward clicks on the non-interactive row surface;
// clicks on buttons, links, or inputs inside a row never reach this
// engine.

use campus_api::ItemId;
use indexmap::IndexSet;

/// Keyboard modifiers active on a row click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl_or_cmd: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl_or_cmd: false,
    };
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl_or_cmd: false,
    };
    pub const CTRL: Self = Self {
        shift: false,
        ctrl_or_cmd: true,
    };
}

/// The set of selected row identifiers plus the range-select anchor.
///
/// Insertion order is preserved so diagnostics stay deterministic, but
/// [`selected_in_order`](Self::selected_in_order) is the surface
/// consumers should render from: it follows source-list order.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    selected: IndexSet<ItemId>,
    anchor: Option<ItemId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one click with modifiers against the current ordered list.
    ///
    /// A stale `id` (no longer present in `ordered`) is a no-op: the
    /// row the user clicked has already disappeared.
    pub fn select(&mut self, id: &ItemId, modifiers: Modifiers, ordered: &[ItemId]) {
        let Some(clicked_pos) = ordered.iter().position(|x| x == id) else {
            return;
        };

        if modifiers.shift {
            // Range select from the anchor. An anchor that has fallen
            // out of the current list is treated as absent.
            let anchor_pos = self
                .anchor
                .as_ref()
                .and_then(|a| ordered.iter().position(|x| x == a));
            if let Some(anchor_pos) = anchor_pos {
                let (lo, hi) = if anchor_pos <= clicked_pos {
                    (anchor_pos, clicked_pos)
                } else {
                    (clicked_pos, anchor_pos)
                };
                for item in &ordered[lo..=hi] {
                    self.selected.insert(item.clone());
                }
                return;
            }
            // No usable anchor: fall through to exclusive select.
        } else if modifiers.ctrl_or_cmd {
            // Additive toggle; the anchor moves only when the toggle
            // lands on "selected".
            if self.selected.shift_remove(id) {
                return;
            }
            self.selected.insert(id.clone());
            self.anchor = Some(id.clone());
            return;
        }

        self.selected.clear();
        self.selected.insert(id.clone());
        self.anchor = Some(id.clone());
    }

    /// Purge identifiers no longer present in the source list.
    ///
    /// Called whenever the source list changes, so deleted items can
    /// never linger in the selected count.
    pub fn retain(&mut self, ordered: &[ItemId]) {
        self.selected.retain(|id| ordered.contains(id));
        if let Some(ref anchor) = self.anchor {
            if !ordered.contains(anchor) {
                self.anchor = None;
            }
        }
    }

    /// Whether the given id is currently selected.
    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.selected.contains(id)
    }

    /// Selected identifiers filtered to the given list, preserving the
    /// list's order.
    pub fn selected_in_order(&self, ordered: &[ItemId]) -> Vec<ItemId> {
        ordered
            .iter()
            .filter(|id| self.selected.contains(*id))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.anchor = None;
    }

    /// The current range-select anchor, if any.
    pub fn anchor(&self) -> Option<&ItemId> {
        self.anchor.as_ref()
    }
}
