//! Tray module - the three pieces on offer
//!
//! A tray generation is three independent draws. Slots are only ever marked
//! used; the whole tray is replaced once all three are gone.

use crate::pieces::PieceRandomizer;
use crate::types::{PieceKind, TRAY_SIZE};

/// One tray position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraySlot {
    pub kind: PieceKind,
    pub used: bool,
}

/// The active tray
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tray {
    slots: [TraySlot; TRAY_SIZE],
}

impl Tray {
    /// Create a tray filled with fresh draws
    pub fn new(randomizer: &mut PieceRandomizer) -> Self {
        let mut tray = Self {
            slots: [TraySlot {
                kind: PieceKind::Single,
                used: true,
            }; TRAY_SIZE],
        };
        tray.regenerate(randomizer);
        tray
    }

    /// Build a tray from explicit kinds (all unused)
    pub fn from_kinds(kinds: [PieceKind; TRAY_SIZE]) -> Self {
        Self {
            slots: kinds.map(|kind| TraySlot { kind, used: false }),
        }
    }

    /// Replace all slots with fresh, unused draws
    pub fn regenerate(&mut self, randomizer: &mut PieceRandomizer) {
        for slot in &mut self.slots {
            *slot = TraySlot {
                kind: randomizer.draw(),
                used: false,
            };
        }
    }

    /// True iff every slot has been used
    pub fn is_exhausted(&self) -> bool {
        self.slots.iter().all(|s| s.used)
    }

    pub fn slot(&self, index: usize) -> Option<&TraySlot> {
        self.slots.get(index)
    }

    pub fn slots(&self) -> &[TraySlot; TRAY_SIZE] {
        &self.slots
    }

    /// Kind in `index` if that slot exists and is still unused
    pub fn available(&self, index: usize) -> Option<PieceKind> {
        self.slot(index).filter(|s| !s.used).map(|s| s.kind)
    }

    /// Mark a slot used. Returns false if the index is out of range or already used.
    pub fn mark_used(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if !slot.used => {
                slot.used = true;
                true
            }
            _ => false,
        }
    }

    /// Iterate unused slots as `(index, kind)`
    pub fn unused(&self) -> impl Iterator<Item = (usize, PieceKind)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.used)
            .map(|(i, s)| (i, s.kind))
    }
}
