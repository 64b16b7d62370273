/// Jewelry sets whose pieces compete for the two ring slots and the amulet slot.
#[derive(Debug)]
pub struct JewelrySet {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub pieces: &'static [&'static str],
    pub slots: &'static [JewelrySlot],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JewelrySlot {
    Ring,
    Amulet,
}

impl JewelrySet {
    pub fn ring_slots(&self) -> usize {
        self.slots.iter().filter(|s| **s == JewelrySlot::Ring).count()
    }

    /// The set itself or one of its pieces is named (case-insensitive substring).
    pub fn matches(&self, candidate: &str) -> bool {
        std::iter::once(self.name)
            .chain(self.aliases.iter().copied())
            .chain(self.pieces.iter().copied())
            .any(|name| contains_ignore_case(candidate, name))
    }
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    !needle.is_empty() && haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub(super) const JEWELRY_SETS: &[JewelrySet] = &[
    JewelrySet {
        name: "Bastion of Will",
        aliases: &["Bastions of Will"],
        pieces: &["Focus", "Restraint"],
        slots: &[JewelrySlot::Ring, JewelrySlot::Ring],
    },
    JewelrySet {
        name: "Legacy of Nightmares",
        aliases: &[],
        pieces: &["Litany of the Undaunted", "The Wailing Host"],
        slots: &[JewelrySlot::Ring, JewelrySlot::Ring],
    },
    JewelrySet {
        name: "Endless Walk",
        aliases: &[],
        pieces: &["Traveler's Pledge", "The Compass Rose"],
        slots: &[JewelrySlot::Amulet, JewelrySlot::Ring],
    },
];
