//! Advisory rule checks on a normalized recommendation.
//!
//! Rules are independent and all of them run. Nothing here rejects or repairs the
//! recommendation; it only produces warnings for the caller to surface.

use crate::domain::recommendation::{BuildRecommendation, Severity, ValidationWarning, WarningKind};
use crate::domain::snapshot::HeroClass;
use crate::reference::{self, JewelrySet};

/// "Standing still" amulet/ring combo (Endless Walk).
const STANDING_STILL: &[&str] = &["endless walk", "traveler", "compass rose"];
/// "Generator/spender" ring combo (Bastion of Will).
const GENERATOR_SPENDER: &[&str] = &["bastion of will", "bastions of will", "focus", "restraint"];

pub fn validate(rec: &BuildRecommendation, class: HeroClass) -> Vec<ValidationWarning> {
    let candidates = ring_candidates(rec);

    let mut warnings = Vec::new();
    warnings.extend(passives_in_active_slots(rec, class));
    warnings.extend(competing_ring_sets(&candidates));
    warnings.extend(standing_still_vs_generator_spender(&candidates));
    warnings.extend(unknown_sets(rec));

    if !warnings.is_empty() {
        tracing::debug!(
            %class,
            count = warnings.len(),
            errors = warnings.iter().filter(|w| w.severity == Severity::Error).count(),
            "recommendation has validation warnings"
        );
    }
    warnings
}

fn passives_in_active_slots(
    rec: &BuildRecommendation,
    class: HeroClass,
) -> impl Iterator<Item = ValidationWarning> + '_ {
    rec.skills
        .active
        .iter()
        .filter(move |pick| reference::is_passive(class, &pick.skill))
        .map(move |pick| ValidationWarning {
            kind: WarningKind::SkillTypeError,
            message: format!(
                "\"{}\" is a {class} passive skill but was recommended as an active skill",
                pick.skill
            ),
            severity: Severity::Error,
        })
}

/// Recommended set names plus every item assigned to a ring slot.
fn ring_candidates(rec: &BuildRecommendation) -> Vec<&str> {
    let sets = rec.sets.iter().map(|s| s.name.as_str());
    let rings = rec
        .items
        .iter()
        .filter(|item| is_ring_slot(&item.slot))
        .map(|item| item.name.as_str());
    sets.chain(rings).filter(|name| !name.trim().is_empty()).collect()
}

fn is_ring_slot(slot: &str) -> bool {
    let slot = slot.to_ascii_lowercase();
    slot.contains("ring") || slot.contains("finger")
}

fn competing_ring_sets(candidates: &[&str]) -> Option<ValidationWarning> {
    let matched: Vec<&JewelrySet> = reference::jewelry_sets()
        .iter()
        .filter(|set| set.ring_slots() == 2)
        .filter(|set| candidates.iter().any(|c| set.matches(c)))
        .collect();

    if matched.len() < 2 {
        return None;
    }

    let names: Vec<&str> = matched.iter().map(|set| set.name).collect();
    Some(ValidationWarning {
        kind: WarningKind::SlotConflict,
        message: format!(
            "{} each need both ring slots and cannot be worn together",
            names.join(" and ")
        ),
        severity: Severity::Error,
    })
}

// Endless Walk takes the amulet and one ring, so the two-ring rule above never sees it; it
// still cannot be completed next to Bastion of Will.
fn standing_still_vs_generator_spender(candidates: &[&str]) -> Option<ValidationWarning> {
    let mentions = |synonyms: &[&str]| {
        candidates
            .iter()
            .any(|c| synonyms.iter().any(|s| reference::contains_ignore_case(c, s)))
    };

    if !(mentions(STANDING_STILL) && mentions(GENERATOR_SPENDER)) {
        return None;
    }

    Some(ValidationWarning {
        kind: WarningKind::SlotConflict,
        message: "Endless Walk (Traveler's Pledge + Compass Rose) and Bastion of Will (Focus + Restraint) \
                  need three ring slots between them; only one of the two can be completed"
            .to_string(),
        severity: Severity::Warning,
    })
}

fn unknown_sets(rec: &BuildRecommendation) -> impl Iterator<Item = ValidationWarning> + '_ {
    rec.sets
        .iter()
        .filter(|set| {
            !set.name.trim().is_empty()
                && set.bonuses.is_empty()
                && reference::find_set(&set.name).is_none()
        })
        .map(|set| ValidationWarning {
            kind: WarningKind::UnknownItem,
            message: format!(
                "set \"{}\" is not in the reference tables; its bonuses could not be listed",
                set.name
            ),
            severity: Severity::Warning,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::normalize::normalize_basic;
    use crate::domain::recommendation::{ItemRecommendation, PassiveSkillPick, SetRecommendation};
    use serde_json::json;

    fn with_sets(names: &[&str]) -> BuildRecommendation {
        BuildRecommendation {
            sets: names
                .iter()
                .map(|n| SetRecommendation {
                    name: n.to_string(),
                    pieces: 2,
                    bonuses: Vec::new(),
                })
                .collect(),
            ..BuildRecommendation::default()
        }
    }

    fn count(warnings: &[ValidationWarning], kind: WarningKind) -> usize {
        warnings.iter().filter(|w| w.kind == kind).count()
    }

    #[test]
    fn clean_recommendation_has_no_warnings() {
        assert!(validate(&BuildRecommendation::default(), HeroClass::Wizard).is_empty());
    }

    #[test]
    fn passive_in_active_list_is_an_error() {
        let raw = json!({
            "skills": {"active": [{"skill": "Bone Prison", "rune": "X", "reason": "y"}], "passive": []}
        })
        .to_string();
        let rec = normalize_basic(&raw).unwrap();
        let warnings = validate(&rec, HeroClass::Necromancer);

        assert_eq!(rec.skills.active.len(), 1);
        assert_eq!(rec.skills.active[0].skill, "Bone Prison");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::SkillTypeError);
        assert_eq!(warnings[0].severity, Severity::Error);
        assert!(warnings[0].message.contains("Bone Prison"));
    }

    #[test]
    fn passive_match_is_case_insensitive() {
        let raw = json!({"skills": {"active": [
            {"skill": "glass cannon"},
            {"skill": "Meteor"}
        ]}})
        .to_string();
        let rec = normalize_basic(&raw).unwrap();
        let warnings = validate(&rec, HeroClass::Wizard);
        assert_eq!(count(&warnings, WarningKind::SkillTypeError), 1);
        assert!(warnings[0].message.contains("glass cannon"));
    }

    #[test]
    fn passive_in_passive_list_is_fine() {
        let mut rec = BuildRecommendation::default();
        rec.skills.passive.push(PassiveSkillPick {
            skill: "Glass Cannon".to_string(),
            reason: String::new(),
        });
        assert!(validate(&rec, HeroClass::Wizard).is_empty());
    }

    #[test]
    fn passives_are_checked_per_class() {
        let raw = json!({"skills": {"active": [{"skill": "Glass Cannon"}]}}).to_string();
        let rec = normalize_basic(&raw).unwrap();
        assert!(validate(&rec, HeroClass::Necromancer).is_empty());
    }

    #[test]
    fn two_two_ring_sets_conflict() {
        let rec = with_sets(&["Bastion of Will", "Legacy of Nightmares"]);
        let warnings = validate(&rec, HeroClass::Monk);
        assert_eq!(count(&warnings, WarningKind::SlotConflict), 1);
        let w = &warnings[0];
        assert_eq!(w.severity, Severity::Error);
        assert!(w.message.contains("Bastion of Will"));
        assert!(w.message.contains("Legacy of Nightmares"));
    }

    #[test]
    fn ring_items_count_as_candidates() {
        let mut rec = with_sets(&["Bastion of Will"]);
        rec.items.push(ItemRecommendation {
            slot: "leftFinger".to_string(),
            name: "The Wailing Host".to_string(),
            reason: String::new(),
        });
        // Not a ring slot, so ignored.
        rec.items.push(ItemRecommendation {
            slot: "neck".to_string(),
            name: "Litany of the Undaunted".to_string(),
            reason: String::new(),
        });
        let warnings = validate(&rec, HeroClass::Monk);
        assert_eq!(count(&warnings, WarningKind::SlotConflict), 1);
    }

    #[test]
    fn single_ring_set_is_fine() {
        let rec = with_sets(&["Bastion of Will", "Inna's Mantra"]);
        assert_eq!(count(&validate(&rec, HeroClass::Monk), WarningKind::SlotConflict), 0);

        let mut halves = BuildRecommendation::default();
        for name in ["Focus", "Restraint"] {
            halves.items.push(ItemRecommendation {
                slot: "ring".to_string(),
                name: name.to_string(),
                reason: String::new(),
            });
        }
        assert!(validate(&halves, HeroClass::Monk).is_empty());
    }

    #[test]
    fn standing_still_and_generator_spender_conflict() {
        let mut rec = with_sets(&["Endless Walk"]);
        rec.items.push(ItemRecommendation {
            slot: "ring2".to_string(),
            name: "Focus".to_string(),
            reason: String::new(),
        });
        let warnings = validate(&rec, HeroClass::Wizard);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::SlotConflict);
        assert_eq!(warnings[0].severity, Severity::Warning);
    }

    #[test]
    fn unknown_set_without_bonuses_is_flagged() {
        let rec = with_sets(&["Homebrew Regalia"]);
        let warnings = validate(&rec, HeroClass::Crusader);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::UnknownItem);
        assert_eq!(warnings[0].severity, Severity::Warning);
    }

    #[test]
    fn all_rules_run_together() {
        let raw = json!({
            "skills": {"active": [{"skill": "Unity"}]},
            "sets": [{"name": "Legacy of Nightmares", "pieces": 2}, {"name": "Bastions of Will", "pieces": 2}],
            "items": [{"slot": "ring", "name": "The Compass Rose"}]
        })
        .to_string();
        let rec = normalize_basic(&raw).unwrap();
        let warnings = validate(&rec, HeroClass::Monk);

        assert_eq!(count(&warnings, WarningKind::SkillTypeError), 1);
        assert_eq!(count(&warnings, WarningKind::SlotConflict), 2);
        assert_eq!(count(&warnings, WarningKind::UnknownItem), 0);
        assert!(!rec.sets[1].bonuses.is_empty());
    }

    #[test]
    fn jewelry_alias_is_not_an_unknown_set() {
        let rec = with_sets(&["Bastions of Will"]);
        assert_eq!(count(&validate(&rec, HeroClass::Monk), WarningKind::UnknownItem), 0);
    }
}
