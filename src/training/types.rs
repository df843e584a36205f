//! Training slot types.

use serde::{Deserialize, Serialize};

/// One occupied training slot. `coach_multiplier` is cached and only
/// rewritten by `recompute_coach_multipliers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillSlot {
    pub drill_id: String,
    pub coach_multiplier: f64,
    /// Training points produced by this slot so far (display only).
    pub accumulated_tp: f64,
}

impl DrillSlot {
    pub fn new(drill_id: &str) -> Self {
        Self {
            drill_id: drill_id.to_string(),
            coach_multiplier: 1.0,
            accumulated_tp: 0.0,
        }
    }
}

/// Fixed-capacity slot array. The vector length is the capacity; it only
/// grows through [`TrainingState::grow`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingState {
    slots: Vec<Option<DrillSlot>>,
}

impl TrainingState {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Option<DrillSlot>] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&DrillSlot> {
        self.slots.get(index).and_then(|s| s.as_ref())
    }

    pub fn active_slots(&self) -> impl Iterator<Item = (usize, &DrillSlot)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|slot| (i, slot)))
    }

    pub fn active_slots_mut(&mut self) -> impl Iterator<Item = &mut DrillSlot> {
        self.slots.iter_mut().flatten()
    }

    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.is_none())
    }

    pub fn is_assigned(&self, drill_id: &str) -> bool {
        self.active_slots().any(|(_, s)| s.drill_id == drill_id)
    }

    /// Places `slot` at `index`. Out-of-range indices are ignored.
    pub fn assign(&mut self, index: usize, slot: DrillSlot) {
        if let Some(entry) = self.slots.get_mut(index) {
            *entry = Some(slot);
        }
    }

    pub fn clear(&mut self, index: usize) -> Option<DrillSlot> {
        self.slots.get_mut(index).and_then(|s| s.take())
    }

    /// Adds `count` empty slots without exceeding `max`. Returns the new capacity.
    pub fn grow(&mut self, count: usize, max: usize) -> usize {
        let target = (self.slots.len() + count).min(max);
        self.resize(target);
        self.slots.len()
    }

    /// Forces the slot array to exactly `capacity` entries, dropping any
    /// drills past the end.
    pub fn resize(&mut self, capacity: usize) {
        self.slots.resize(capacity, None);
    }
}
