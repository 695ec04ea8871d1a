//! Avatar color assignment for the users appearing in a feed.
//!
//! Slot 0 belongs to the viewer. Everyone else draws from a five-slot palette
//! in round-robin order, and keeps their slot for the lifetime of the feed.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::entry::ActivityEntry;

pub const PALETTE_SIZE: u8 = 5;

const TOKENS: [&str; PALETTE_SIZE as usize + 1] =
    ["brand", "purple", "error", "green", "gold", "grey"];

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
pub struct ColorSlot(u8);

impl ColorSlot {
    pub const VIEWER: ColorSlot = ColorSlot(0);

    /// Palette slots are numbered `1..=PALETTE_SIZE`.
    pub fn palette(index: u8) -> Option<Self> {
        (1..=PALETTE_SIZE).contains(&index).then_some(Self(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn token(self) -> &'static str {
        TOKENS[self.0 as usize]
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserColorMap {
    slots: BTreeMap<i64, ColorSlot>,
}

impl UserColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, user_id: i64) -> Option<ColorSlot> {
        self.slots.get(&user_id).copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, ColorSlot)> + '_ {
        self.slots.iter().map(|(id, slot)| (*id, *slot))
    }

    /// Returns a map extended with every new user in `entries`.
    ///
    /// Existing assignments are never touched. System entries (no user) get no
    /// color. The rotation resumes after the highest slot already handed out.
    pub fn assign(&self, entries: &[ActivityEntry], viewer_id: i64) -> UserColorMap {
        let mut next = self.clone();
        let max_used = self.slots.values().map(|slot| slot.0).max().unwrap_or(0);
        let mut cursor = if max_used > 0 && max_used < PALETTE_SIZE {
            max_used
        } else {
            0
        };

        for entry in entries {
            let Some(user_id) = entry.user_id else {
                continue;
            };
            if next.slots.contains_key(&user_id) {
                continue;
            }
            let slot = if user_id == viewer_id {
                ColorSlot::VIEWER
            } else {
                let slot = ColorSlot(cursor + 1);
                cursor = (cursor + 1) % PALETTE_SIZE;
                slot
            };
            next.slots.insert(user_id, slot);
        }

        next
    }
}
