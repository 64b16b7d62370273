//! Static rules tables the advisor checks producer output against.
//!
//! Lookups are exact first, then ASCII case-insensitive. Nothing here is fetched at
//! runtime; the tables change with game patches and are edited by hand.

mod items;
mod jewelry;
mod passives;
mod sets;

use crate::domain::recommendation::{FarmingMethod, TimeTier};
use crate::domain::snapshot::HeroClass;

pub use jewelry::{JewelrySet, JewelrySlot};
pub(crate) use jewelry::contains_ignore_case;

#[derive(Debug)]
pub struct SetDefinition {
    pub name: &'static str,
    /// `(pieces, bonus)` in ascending piece order.
    pub bonuses: &'static [(u32, &'static str)],
}

impl SetDefinition {
    /// Bonus tiers unlocked by wearing `pieces` items of the set, ascending.
    pub fn bonuses_up_to(&self, pieces: u32) -> impl Iterator<Item = (u32, &'static str)> + '_ {
        self.bonuses
            .iter()
            .copied()
            .filter(move |(tier, _)| *tier <= pieces)
    }
}

#[derive(Debug)]
pub struct AcquisitionInfo {
    pub name: &'static str,
    pub slot: &'static str,
    pub methods: &'static [FarmingMethod],
    pub primary: FarmingMethod,
    pub time_tier: TimeTier,
    pub costs: &'static [(&'static str, u64)],
    pub notes: &'static str,
}

pub fn passives(class: HeroClass) -> &'static [&'static str] {
    passives::for_class(class)
}

pub fn is_passive(class: HeroClass, skill: &str) -> bool {
    let skill = skill.trim();
    !skill.is_empty()
        && passives(class)
            .iter()
            .any(|p| p.eq_ignore_ascii_case(skill))
}

/// Also resolves the aliases jewelry sets are known by ("Bastions of Will").
pub fn find_set(name: &str) -> Option<&'static SetDefinition> {
    lookup(sets::SETS, |s| s.name, name).or_else(|| {
        let name = name.trim();
        let canonical = jewelry::JEWELRY_SETS
            .iter()
            .find(|j| j.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name)))?;
        lookup(sets::SETS, |s| s.name, canonical.name)
    })
}

pub fn jewelry_sets() -> &'static [JewelrySet] {
    jewelry::JEWELRY_SETS
}

pub fn find_acquisition(name: &str) -> Option<&'static AcquisitionInfo> {
    lookup(items::ITEMS, |i| i.name, name)
}

fn lookup<T>(table: &'static [T], key: fn(&T) -> &'static str, name: &str) -> Option<&'static T> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    table
        .iter()
        .find(|entry| key(entry) == name)
        .or_else(|| table.iter().find(|entry| key(entry).eq_ignore_ascii_case(name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_class_has_passives() {
        for class in HeroClass::ALL {
            assert!(passives(class).len() >= 15, "{class} passive table looks truncated");
        }
    }

    #[test]
    fn passive_lookup_is_case_insensitive_and_class_scoped() {
        assert!(is_passive(HeroClass::Necromancer, "bone prison"));
        assert!(is_passive(HeroClass::Wizard, "  GLASS CANNON "));
        assert!(!is_passive(HeroClass::Wizard, "Bone Prison"));
        assert!(!is_passive(HeroClass::Wizard, ""));
    }

    #[test]
    fn set_lookup_falls_back_to_case_insensitive() {
        assert_eq!(find_set("Bones of Rathma").map(|s| s.name), Some("Bones of Rathma"));
        assert_eq!(find_set("bones of rathma").map(|s| s.name), Some("Bones of Rathma"));
        assert!(find_set("Bones of Nobody").is_none());
    }

    #[test]
    fn set_lookup_resolves_jewelry_aliases() {
        assert_eq!(find_set("Bastions of Will").map(|s| s.name), Some("Bastion of Will"));
        assert_eq!(find_set("bastions of will").map(|s| s.name), Some("Bastion of Will"));
    }

    #[test]
    fn set_bonus_tables_are_ascending() {
        for set in sets::SETS {
            let tiers: Vec<u32> = set.bonuses.iter().map(|(p, _)| *p).collect();
            let mut sorted = tiers.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(tiers, sorted, "{} bonuses out of order", set.name);
        }
    }

    #[test]
    fn bonuses_up_to_filters_by_piece_count() {
        let set = find_set("Bones of Rathma").unwrap();
        let tiers: Vec<u32> = set.bonuses_up_to(4).map(|(p, _)| p).collect();
        assert_eq!(tiers, vec![2, 4]);
    }

    #[test]
    fn acquisition_primary_method_is_listed() {
        for item in items::ITEMS {
            assert!(
                item.methods.contains(&item.primary),
                "{} primary method missing from its method list",
                item.name
            );
        }
        assert!(find_acquisition("the compass rose").is_some());
    }
}
