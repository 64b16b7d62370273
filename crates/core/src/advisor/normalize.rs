//! Turns a producer reply into a fully populated recommendation.
//!
//! Parsing is the only step that can fail. After that every field is coerced: whatever the
//! producer got wrong is replaced by a default, and set bonuses / acquisition details it
//! left out are filled from the reference tables.

use crate::advisor::coerce::{as_u64, Coercer, CoercionReport, DefaultReason};
use crate::advisor::json;
use crate::domain::recommendation::{
    ActiveSkillPick, AnalysisMode, BuildRecommendation, CubePower, CubePowers,
    EnhancedBuildRecommendation, FarmingMethod, GemRecommendation, GreaterRiftProjection, Impact,
    ItemAcquisition, ItemRecommendation, PassiveSkillPick, ProgressionPath, ProgressionStep,
    Recommendation, SetBonus, SetRecommendation, SkillRecommendations, StatProjection,
    StatProjections, TieredUpgrades, TimeTier, UpgradeStep,
};
use crate::reference;
use serde_json::Value;
use std::collections::BTreeMap;

const UNKNOWN_ITEM_NOTE: &str =
    "World drop; no targeted source on record. Check an external build guide for farming routes.";

pub fn normalize(raw: &str, mode: AnalysisMode) -> anyhow::Result<Recommendation> {
    Ok(match mode {
        AnalysisMode::Basic => Recommendation::Basic(normalize_basic(raw)?),
        AnalysisMode::Enhanced => Recommendation::Enhanced(normalize_enhanced(raw)?),
    })
}

pub fn normalize_basic(raw: &str) -> anyhow::Result<BuildRecommendation> {
    normalize_basic_with_report(raw).map(|(rec, _)| rec)
}

pub fn normalize_enhanced(raw: &str) -> anyhow::Result<EnhancedBuildRecommendation> {
    normalize_enhanced_with_report(raw).map(|(rec, _)| rec)
}

pub fn normalize_basic_with_report(
    raw: &str,
) -> anyhow::Result<(BuildRecommendation, CoercionReport)> {
    let root = parse(raw)?;
    let mut c = Coercer::new();
    let rec = build_recommendation(&mut c, &root);
    Ok((rec, finish(c, AnalysisMode::Basic)))
}

pub fn normalize_enhanced_with_report(
    raw: &str,
) -> anyhow::Result<(EnhancedBuildRecommendation, CoercionReport)> {
    let root = parse(raw)?;
    let mut c = Coercer::new();
    let rec = EnhancedBuildRecommendation {
        base: build_recommendation(&mut c, &root),
        tiered_upgrades: c.nested(&root, "tieredUpgrades", tiered_upgrades),
        progression_path: c.nested(&root, "progressionPath", progression_path),
    };
    Ok((rec, finish(c, AnalysisMode::Enhanced)))
}

fn parse(raw: &str) -> anyhow::Result<Value> {
    json::parse_object(raw).map_err(|err| {
        tracing::warn!(error = %err, raw_output = %raw, "producer reply could not be parsed");
        anyhow::Error::new(err)
    })
}

fn finish(c: Coercer, mode: AnalysisMode) -> CoercionReport {
    let report = c.finish();
    tracing::debug!(
        ?mode,
        defaulted = report.defaulted.len(),
        "normalized producer reply"
    );
    report
}

fn build_recommendation(c: &mut Coercer, root: &Value) -> BuildRecommendation {
    BuildRecommendation {
        skills: c.nested(root, "skills", |c, skills| SkillRecommendations {
            active: c.objects(skills, "active", |c, _, v| ActiveSkillPick {
                skill: c.string(v, &["skill", "name"]),
                rune: c.string(v, &["rune"]),
                reason: c.string(v, &["reason", "rationale"]),
            }),
            passive: c.objects(skills, "passive", |c, _, v| PassiveSkillPick {
                skill: c.string(v, &["skill", "name"]),
                reason: c.string(v, &["reason", "rationale"]),
            }),
        }),
        sets: c.objects(root, "sets", |c, _, v| set_recommendation(c, v)),
        items: c.objects(root, "items", |c, _, v| ItemRecommendation {
            slot: c.string(v, &["slot"]),
            name: c.string(v, &["name", "item"]),
            reason: c.string(v, &["reason", "rationale"]),
        }),
        cube_powers: c.nested(root, "cubePowers", |c, cube| CubePowers {
            weapon: cube_power(c, cube, "weapon"),
            armor: cube_power(c, cube, "armor"),
            jewelry: cube_power(c, cube, "jewelry"),
        }),
        gems: c.objects(root, "gems", |c, _, v| GemRecommendation {
            name: c.string(v, &["name"]),
            priority: c.u32(v, &["priority", "rank"]),
            reason: c.string(v, &["reason", "rationale"]),
        }),
        playstyle: c.string(root, &["playstyle"]),
        summary: c.string(root, &["summary"]),
        farming_priority: c.strings(root, "farmingPriority"),
        stat_projections: c.optional_nested(root, "statProjections", |c, v| StatProjections {
            damage: c.nested(v, "damage", stat_projection),
            toughness: c.nested(v, "toughness", stat_projection),
            recovery: c.nested(v, "recovery", stat_projection),
        }),
        greater_rift_projection: c.optional_nested(root, "greaterRiftProjection", |c, v| {
            let min = c.u32(v, &["min"]);
            let max = c.u32(v, &["max"]);
            GreaterRiftProjection {
                min: min.min(max),
                max: min.max(max),
                reason: c.string(v, &["reason", "justification"]),
            }
        }),
        warnings: Vec::new(),
    }
}

fn set_recommendation(c: &mut Coercer, v: &Value) -> SetRecommendation {
    let name = c.string(v, &["name"]);
    let pieces = c.u32(v, &["pieces"]);
    let mut bonuses = c.objects(v, "bonuses", |c, _, b| SetBonus {
        pieces: c.u32(b, &["pieces"]),
        bonus: c.string(b, &["bonus", "description"]),
    });

    if bonuses.is_empty() {
        if let Some(set) = reference::find_set(&name) {
            bonuses = set
                .bonuses_up_to(pieces)
                .map(|(tier, text)| SetBonus {
                    pieces: tier,
                    bonus: text.to_string(),
                })
                .collect();
        }
    }

    SetRecommendation {
        name,
        pieces,
        bonuses,
    }
}

/// A cube slot arrives either as a bare power name or as `{name, reason}`.
fn cube_power(c: &mut Coercer, cube: &Value, slot: &str) -> CubePower {
    match c.field(cube, &[slot]) {
        Some(Value::String(name)) => CubePower {
            name: name.trim().to_string(),
            reason: String::new(),
        },
        Some(v @ Value::Object(_)) => c.scoped(slot, |c| CubePower {
            name: c.string(v, &["name", "power"]),
            reason: c.string(v, &["reason", "rationale"]),
        }),
        Some(_) => {
            c.note(slot, DefaultReason::WrongType);
            CubePower::default()
        }
        None => CubePower::default(),
    }
}

fn stat_projection(c: &mut Coercer, v: &Value) -> StatProjection {
    StatProjection {
        current: c.f64(v, &["current"]),
        projected: c.f64(v, &["projected", "projectedValue"]),
        multiplier: c.string(v, &["multiplier"]),
        rating: c
            .enumeration(v, &["rating"], Impact::parse_loose)
            .unwrap_or_default(),
        justification: c.string(v, &["justification", "reason"]),
    }
}

fn tiered_upgrades(c: &mut Coercer, v: &Value) -> TieredUpgrades {
    TieredUpgrades {
        quick: upgrade_bucket(c, v, "quick", TimeTier::Quick),
        medium: upgrade_bucket(c, v, "medium", TimeTier::Medium),
        long: upgrade_bucket(c, v, "long", TimeTier::Long),
    }
}

fn upgrade_bucket(c: &mut Coercer, v: &Value, key: &str, bucket: TimeTier) -> Vec<UpgradeStep> {
    c.objects(v, key, |c, idx, step| {
        let mut id = c.string(step, &["id"]);
        if id.is_empty() {
            id = format!("{key}-{}", idx + 1);
        }
        UpgradeStep {
            id,
            priority: c.u32(step, &["priority"]),
            item: item_acquisition(c, step, bucket),
            reason: c.string(step, &["reason", "rationale"]),
            power_impact: c
                .enumeration(step, &["powerImpact", "impact"], Impact::parse_loose)
                .unwrap_or_default(),
            depends_on: c.strings(step, "dependsOn"),
            unlocks: c.strings(step, "unlocks"),
        }
    })
}

/// Reads the step's `item` (object or bare name) and fills what the producer omitted from
/// the acquisition table.
fn item_acquisition(c: &mut Coercer, step: &Value, bucket: TimeTier) -> ItemAcquisition {
    let mut item = match c.field(step, &["item"]) {
        Some(Value::String(name)) => ProducerItem {
            name: name.trim().to_string(),
            ..ProducerItem::default()
        },
        Some(v @ Value::Object(_)) => c.scoped("item", |c| ProducerItem {
            name: c.string(v, &["name"]),
            slot: c.string(v, &["slot"]),
            farming_methods: farming_methods(c, v),
            primary_method: c.enumeration(v, &["primaryMethod"], FarmingMethod::parse_loose),
            time_tier: c.enumeration(v, &["timeTier"], TimeTier::parse_loose),
            costs: costs(c, v),
            notes: c.string(v, &["notes"]),
        }),
        Some(_) => {
            c.note("item", DefaultReason::WrongType);
            ProducerItem::default()
        }
        None => ProducerItem::default(),
    };

    let known = reference::find_acquisition(&item.name);
    if known.is_none() && !item.name.is_empty() {
        tracing::debug!(item = %item.name, "no acquisition record; using world-drop fallback");
    }

    if item.farming_methods.is_empty() {
        item.farming_methods = match known {
            Some(info) => info.methods.to_vec(),
            None => vec![FarmingMethod::WorldDrop],
        };
    }
    let primary_method = item
        .primary_method
        .or(known
            .map(|info| info.primary)
            .filter(|m| item.farming_methods.contains(m)))
        .or(item.farming_methods.first().copied())
        .unwrap_or_default();
    let time_tier = item
        .time_tier
        .or(known.map(|info| info.time_tier))
        .unwrap_or(bucket);
    if item.costs.is_empty() {
        if let Some(info) = known {
            item.costs = info
                .costs
                .iter()
                .map(|(resource, amount)| (resource.to_string(), *amount))
                .collect();
        }
    }
    if item.notes.is_empty() {
        item.notes = match known {
            Some(info) => info.notes.to_string(),
            None => UNKNOWN_ITEM_NOTE.to_string(),
        };
    }
    if item.slot.is_empty() {
        if let Some(info) = known {
            item.slot = info.slot.to_string();
        }
    }

    ItemAcquisition {
        name: item.name,
        slot: item.slot,
        farming_methods: item.farming_methods,
        primary_method,
        time_tier,
        costs: item.costs,
        notes: item.notes,
    }
}

/// What the producer supplied before enrichment; enums stay `None` when unusable.
#[derive(Debug, Default)]
struct ProducerItem {
    name: String,
    slot: String,
    farming_methods: Vec<FarmingMethod>,
    primary_method: Option<FarmingMethod>,
    time_tier: Option<TimeTier>,
    costs: BTreeMap<String, u64>,
    notes: String,
}

fn farming_methods(c: &mut Coercer, v: &Value) -> Vec<FarmingMethod> {
    let mut out = Vec::new();
    for (idx, raw) in c.strings(v, "farmingMethods").iter().enumerate() {
        match FarmingMethod::parse_loose(raw) {
            Some(method) if !out.contains(&method) => out.push(method),
            Some(_) => {}
            None => c.note(
                &format!("farmingMethods[{idx}]"),
                DefaultReason::OutOfRange,
            ),
        }
    }
    out
}

fn costs(c: &mut Coercer, v: &Value) -> BTreeMap<String, u64> {
    let mut out = BTreeMap::new();
    match v.get("costs") {
        None | Some(Value::Null) => {}
        Some(Value::Object(map)) => {
            for (resource, amount) in map {
                match as_u64(amount) {
                    Ok(n) => {
                        out.insert(resource.clone(), n);
                    }
                    Err(reason) => c.note(&format!("costs.{resource}"), reason),
                }
            }
        }
        Some(_) => c.note("costs", DefaultReason::WrongType),
    }
    out
}

fn progression_path(c: &mut Coercer, v: &Value) -> ProgressionPath {
    let mut steps = c.objects(v, "steps", |c, _, s| ProgressionStep {
        step: c.u32(s, &["step", "order"]),
        title: c.string(s, &["title"]),
        description: c.string(s, &["description"]),
        upgrade_ids: c.strings(s, "upgradeIds"),
    });
    steps.sort_by_key(|s| s.step);

    ProgressionPath {
        steps,
        critical_path: c.strings(v, "criticalPath"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::error::ParseError;
    use serde_json::json;

    fn full_basic_json() -> serde_json::Value {
        json!({
            "skills": {
                "active": [
                    {"skill": "Skeletal Mage", "rune": "Life Support", "reason": "main spender"},
                    {"skill": "Command Skeletons", "rune": "Dark Mending", "reason": "pets"}
                ],
                "passive": [
                    {"skill": "Extended Servitude", "reason": "mage uptime"}
                ]
            },
            "sets": [
                {"name": "Bones of Rathma", "pieces": 6, "bonuses": [{"pieces": 2, "bonus": "custom"}]}
            ],
            "items": [
                {"slot": "ring1", "name": "Convention of Elements", "reason": "damage"}
            ],
            "cubePowers": {
                "weapon": {"name": "Reilena's Shadowhook", "reason": "essence"},
                "armor": {"name": "Krysbin's Sentence", "reason": "slowed"},
                "jewelry": {"name": "Ring of Royal Grandeur", "reason": "set slot"}
            },
            "gems": [{"name": "Bane of the Trapped", "priority": 1, "reason": "aoe"}],
            "playstyle": "Keep mages up.",
            "summary": "Solid push build.",
            "farmingPriority": ["Ancient Rathma pieces", "Gem levels"],
            "statProjections": {
                "damage": {"current": 100.0, "projected": 150.0, "multiplier": "1.5x", "rating": "major", "justification": "set"},
                "toughness": {"current": 10.0, "projected": 10.0, "multiplier": "1.0x", "rating": "minor", "justification": "same"},
                "recovery": {"current": 1.0, "projected": 2.0, "multiplier": "2.0x", "rating": "moderate", "justification": "gem"}
            },
            "greaterRiftProjection": {"min": 110, "max": 100, "reason": "paragon"}
        })
    }

    #[test]
    fn normalizes_well_formed_reply_without_defaults() {
        let raw = full_basic_json().to_string();
        let (rec, report) = normalize_basic_with_report(&raw).unwrap();

        assert!(report.is_clean(), "{:?}", report.defaulted);
        assert_eq!(rec.skills.active.len(), 2);
        assert_eq!(rec.skills.active[0].rune, "Life Support");
        assert_eq!(rec.skills.passive[0].skill, "Extended Servitude");
        assert_eq!(rec.sets[0].bonuses, vec![SetBonus { pieces: 2, bonus: "custom".to_string() }]);
        assert_eq!(rec.cube_powers.armor.name, "Krysbin's Sentence");
        assert_eq!(rec.gems[0].priority, 1);
        assert_eq!(rec.farming_priority.len(), 2);
        let stats = rec.stat_projections.unwrap();
        assert_eq!(stats.damage.rating, Impact::Major);
        assert_eq!(stats.recovery.rating, Impact::Moderate);
        let gr = rec.greater_rift_projection.unwrap();
        assert_eq!((gr.min, gr.max), (100, 110));
        assert!(rec.warnings.is_empty());
    }

    #[test]
    fn normalization_is_idempotent() {
        let raw = full_basic_json().to_string();
        assert_eq!(normalize_basic(&raw).unwrap(), normalize_basic(&raw).unwrap());
        assert_eq!(normalize_enhanced(&raw).unwrap(), normalize_enhanced(&raw).unwrap());

        let once = normalize_basic(&raw).unwrap();
        let twice = normalize_basic(&serde_json::to_string(&once).unwrap()).unwrap();
        assert_eq!(once, twice);

        let enhanced_raw = json!({
            "summary": "s",
            "tieredUpgrades": {"quick": [{"item": {"name": "Focus"}, "dependsOn": []}]},
            "progressionPath": {"steps": [{"step": 1, "upgradeIds": ["quick-1"]}]}
        })
        .to_string();
        let once = normalize_enhanced(&enhanced_raw).unwrap();
        let (twice, report) =
            normalize_enhanced_with_report(&serde_json::to_string(&once).unwrap()).unwrap();
        assert_eq!(once, twice);
        assert!(report.is_clean(), "{:?}", report.defaulted);
    }

    #[test]
    fn fenced_reply_matches_unwrapped() {
        let raw = full_basic_json().to_string();
        let fenced = format!("```json\n{raw}\n```");
        assert_eq!(normalize_basic(&fenced).unwrap(), normalize_basic(&raw).unwrap());
    }

    #[test]
    fn empty_object_yields_zero_shape() {
        let rec = normalize_basic("{}").unwrap();
        assert_eq!(rec, BuildRecommendation::default());
    }

    #[test]
    fn wrong_types_fall_back_to_defaults() {
        let raw = json!({
            "skills": {"active": [{"skill": 5, "rune": ["x"], "reason": null}, "Bone Spear"], "passive": 3},
            "sets": {"name": "not a list"},
            "items": [{"slot": "head", "name": true}],
            "cubePowers": {"weapon": 42, "armor": null, "jewelry": {"name": 1}},
            "gems": [{"name": "Esoteric Alteration", "priority": "first"}],
            "playstyle": 12,
            "summary": ["a"],
            "farmingPriority": "everything",
            "statProjections": {"damage": {"current": "lots", "multiplier": 1.5, "rating": "huge"}, "toughness": 7},
            "greaterRiftProjection": "high"
        })
        .to_string();

        let (rec, report) = normalize_basic_with_report(&raw).unwrap();

        assert_eq!(rec.skills.active, vec![ActiveSkillPick::default()]);
        assert!(rec.skills.passive.is_empty());
        assert!(rec.sets.is_empty());
        assert_eq!(rec.items[0].name, "");
        assert_eq!(rec.items[0].slot, "head");
        assert_eq!(rec.cube_powers, CubePowers::default());
        assert_eq!(rec.gems[0].priority, 0);
        assert_eq!(rec.playstyle, "");
        assert_eq!(rec.summary, "");
        assert!(rec.farming_priority.is_empty());
        let stats = rec.stat_projections.unwrap();
        assert_eq!(stats.damage.current, 0.0);
        assert_eq!(stats.damage.multiplier, "");
        assert_eq!(stats.damage.rating, Impact::Minor);
        assert_eq!(stats.toughness, StatProjection::default());
        assert!(rec.greater_rift_projection.is_none());

        assert_eq!(report.reason_for("skills.active[0].skill"), Some(DefaultReason::WrongType));
        assert_eq!(report.reason_for("skills.active[1]"), Some(DefaultReason::WrongType));
        assert_eq!(report.reason_for("statProjections.damage.rating"), Some(DefaultReason::OutOfRange));
        assert_eq!(report.reason_for("cubePowers.weapon"), Some(DefaultReason::WrongType));
        assert_eq!(report.reason_for("greaterRiftProjection"), Some(DefaultReason::WrongType));
    }

    #[test]
    fn unrecognized_rating_becomes_minor() {
        let raw = json!({"statProjections": {"damage": {"rating": "legendary"}}}).to_string();
        let rec = normalize_basic(&raw).unwrap();
        assert_eq!(rec.stat_projections.unwrap().damage.rating, Impact::Minor);
    }

    #[test]
    fn bare_string_cube_power_normalizes_to_object() {
        let raw = json!({"cubePowers": {"weapon": "Lost Time"}}).to_string();
        let rec = normalize_basic(&raw).unwrap();
        assert_eq!(
            rec.cube_powers.weapon,
            CubePower {
                name: "Lost Time".to_string(),
                reason: String::new()
            }
        );
        assert_eq!(rec.cube_powers.armor, CubePower::default());
    }

    #[test]
    fn set_bonuses_are_synthesized_up_to_piece_count() {
        let raw = json!({"sets": [
            {"name": "bones of rathma", "pieces": 6},
            {"name": "Captain Crimson's Trimmings", "pieces": 2},
            {"name": "Homebrew Set", "pieces": 4}
        ]})
        .to_string();
        let rec = normalize_basic(&raw).unwrap();

        let tiers: Vec<u32> = rec.sets[0].bonuses.iter().map(|b| b.pieces).collect();
        assert_eq!(tiers, vec![2, 4, 6]);
        assert!(rec.sets[0].bonuses.iter().all(|b| !b.bonus.is_empty()));

        let crimson: Vec<u32> = rec.sets[1].bonuses.iter().map(|b| b.pieces).collect();
        assert_eq!(crimson, vec![2]);

        assert!(rec.sets[2].bonuses.is_empty());
    }

    #[test]
    fn malformed_reply_is_a_parse_error() {
        let err = normalize_basic("not json at all").unwrap_err();
        let parse = err.downcast_ref::<ParseError>().expect("ParseError");
        assert_eq!(parse.raw_output, "not json at all");
    }

    #[test]
    fn enhanced_enriches_known_items_case_insensitively() {
        let raw = json!({
            "tieredUpgrades": {
                "quick": [
                    {"id": "q1", "priority": 1, "item": {"name": "the compass rose"}, "reason": "ring", "powerImpact": "major"}
                ],
                "long": [
                    {"priority": 2, "item": "Hellfire Amulet", "powerImpact": "enormous", "dependsOn": ["q1", 3]}
                ]
            }
        })
        .to_string();

        let rec = normalize_enhanced(&raw).unwrap();
        let quick = &rec.tiered_upgrades.quick[0];
        assert_eq!(quick.item.slot, "ring");
        assert_eq!(quick.item.primary_method, FarmingMethod::Kadala);
        assert_eq!(quick.item.costs.get("bloodShards").copied(), Some(50));
        assert_eq!(quick.item.time_tier, TimeTier::Quick);
        assert_eq!(quick.power_impact, Impact::Major);

        let long = &rec.tiered_upgrades.long[0];
        assert_eq!(long.id, "long-1");
        assert_eq!(long.item.name, "Hellfire Amulet");
        assert_eq!(long.item.primary_method, FarmingMethod::Crafting);
        assert_eq!(long.item.costs.get("infernalMachines").copied(), Some(4));
        assert_eq!(long.power_impact, Impact::Minor);
        assert_eq!(long.depends_on, vec!["q1".to_string()]);
    }

    #[test]
    fn enhanced_keeps_producer_supplied_acquisition_fields() {
        let raw = json!({
            "tieredUpgrades": {"medium": [{
                "id": "m1",
                "item": {
                    "name": "Focus",
                    "farmingMethods": ["Greater Rifts"],
                    "timeTier": "long",
                    "costs": {"bloodShards": 500, "deathsBreath": 50.0, "gold": "a lot", "veiledCrystals": -3},
                    "notes": "Roll for ancient."
                }
            }]}
        })
        .to_string();

        let (rec, report) = normalize_enhanced_with_report(&raw).unwrap();
        let item = &rec.tiered_upgrades.medium[0].item;
        assert_eq!(item.farming_methods, vec![FarmingMethod::GreaterRift]);
        // the table's primary (Kadala) is not among the producer's methods
        assert_eq!(item.primary_method, FarmingMethod::GreaterRift);
        assert_eq!(item.time_tier, TimeTier::Long);
        assert_eq!(item.costs.len(), 2);
        assert_eq!(item.costs.get("deathsBreath").copied(), Some(50));
        assert_eq!(item.notes, "Roll for ancient.");
        assert_eq!(
            report.reason_for("tieredUpgrades.medium[0].item.costs.gold"),
            Some(DefaultReason::WrongType)
        );
        assert_eq!(
            report.reason_for("tieredUpgrades.medium[0].item.costs.veiledCrystals"),
            Some(DefaultReason::OutOfRange)
        );
    }

    #[test]
    fn enhanced_unknown_item_gets_world_drop_fallback() {
        let raw = json!({
            "tieredUpgrades": {"medium": [{"id": "m1", "item": {"name": "Mystery Blade"}}]}
        })
        .to_string();

        let rec = normalize_enhanced(&raw).unwrap();
        let item = &rec.tiered_upgrades.medium[0].item;
        assert_eq!(item.farming_methods, vec![FarmingMethod::WorldDrop]);
        assert_eq!(item.primary_method, FarmingMethod::WorldDrop);
        assert_eq!(item.time_tier, TimeTier::Medium);
        assert!(item.costs.is_empty());
        assert!(item.notes.contains("external build guide"));
    }

    #[test]
    fn progression_steps_are_ordered() {
        let raw = json!({
            "progressionPath": {
                "steps": [
                    {"step": 3, "title": "Push", "upgradeIds": ["l1"]},
                    {"step": 1, "title": "Gear up", "upgradeIds": ["q1", "q2"]},
                    {"step": 2, "title": "Gems"}
                ],
                "criticalPath": ["q1", 7, "l1"]
            }
        })
        .to_string();

        let rec = normalize_enhanced(&raw).unwrap();
        let titles: Vec<&str> = rec.progression_path.steps.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Gear up", "Gems", "Push"]);
        assert_eq!(rec.progression_path.critical_path, vec!["q1".to_string(), "l1".to_string()]);
    }

    #[test]
    fn mode_selects_shape() {
        let raw = full_basic_json().to_string();
        let basic = normalize(&raw, AnalysisMode::Basic).unwrap();
        let enhanced = normalize(&raw, AnalysisMode::Enhanced).unwrap();
        assert_eq!(basic.mode(), AnalysisMode::Basic);
        assert_eq!(enhanced.mode(), AnalysisMode::Enhanced);
        assert_eq!(basic.base(), enhanced.base());
    }
}
