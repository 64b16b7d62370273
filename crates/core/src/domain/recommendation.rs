use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which response shape the producer is asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    #[default]
    Basic,
    Enhanced,
}

/// Normalized advisor output. Every field is always populated (lists empty, strings empty,
/// objects in their zero shape) no matter how much of the producer reply was usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildRecommendation {
    pub skills: SkillRecommendations,
    pub sets: Vec<SetRecommendation>,
    pub items: Vec<ItemRecommendation>,
    pub cube_powers: CubePowers,
    pub gems: Vec<GemRecommendation>,
    pub playstyle: String,
    pub summary: String,
    pub farming_priority: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stat_projections: Option<StatProjections>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greater_rift_projection: Option<GreaterRiftProjection>,
    pub warnings: Vec<ValidationWarning>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillRecommendations {
    pub active: Vec<ActiveSkillPick>,
    pub passive: Vec<PassiveSkillPick>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveSkillPick {
    pub skill: String,
    pub rune: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassiveSkillPick {
    pub skill: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetRecommendation {
    pub name: String,
    pub pieces: u32,
    pub bonuses: Vec<SetBonus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetBonus {
    pub pieces: u32,
    pub bonus: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemRecommendation {
    pub slot: String,
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubePowers {
    pub weapon: CubePower,
    pub armor: CubePower,
    pub jewelry: CubePower,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubePower {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GemRecommendation {
    pub name: String,
    pub priority: u32,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatProjections {
    pub damage: StatProjection,
    pub toughness: StatProjection,
    pub recovery: StatProjection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatProjection {
    pub current: f64,
    pub projected: f64,
    pub multiplier: String,
    pub rating: Impact,
    pub justification: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreaterRiftProjection {
    pub min: u32,
    pub max: u32,
    pub reason: String,
}

/// Shared scale for stat-projection ratings and upgrade power impact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Major,
    Moderate,
    #[default]
    Minor,
}

impl Impact {
    pub fn parse_loose(s: &str) -> Option<Self> {
        match loose_key(s).as_str() {
            "major" => Some(Impact::Major),
            "moderate" => Some(Impact::Moderate),
            "minor" => Some(Impact::Minor),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    SkillTypeError,
    SlotConflict,
    UnknownItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub kind: WarningKind,
    pub message: String,
    pub severity: Severity,
}

/// Basic recommendation plus a tiered upgrade plan and a progression path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedBuildRecommendation {
    #[serde(flatten)]
    pub base: BuildRecommendation,
    #[serde(default)]
    pub tiered_upgrades: TieredUpgrades,
    #[serde(default)]
    pub progression_path: ProgressionPath,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TieredUpgrades {
    pub quick: Vec<UpgradeStep>,
    pub medium: Vec<UpgradeStep>,
    pub long: Vec<UpgradeStep>,
}

impl TieredUpgrades {
    pub fn iter(&self) -> impl Iterator<Item = &UpgradeStep> {
        self.quick.iter().chain(&self.medium).chain(&self.long)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpgradeStep {
    pub id: String,
    pub priority: u32,
    pub item: ItemAcquisition,
    pub reason: String,
    pub power_impact: Impact,
    pub depends_on: Vec<String>,
    pub unlocks: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemAcquisition {
    pub name: String,
    pub slot: String,
    pub farming_methods: Vec<FarmingMethod>,
    pub primary_method: FarmingMethod,
    pub time_tier: TimeTier,
    /// Resource name to amount, e.g. `deathsBreath -> 25`.
    pub costs: BTreeMap<String, u64>,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FarmingMethod {
    GreaterRift,
    Kadala,
    BountyCache,
    CubeUpgrade,
    CubeReforge,
    Crafting,
    SeasonJourney,
    #[default]
    WorldDrop,
}

impl FarmingMethod {
    /// Accepts the snake_case name or the phrasing producers tend to use
    /// ("Greater Rifts", "gamble at Kadala", "Horadric cache").
    pub fn parse_loose(s: &str) -> Option<Self> {
        let key = loose_key(s);
        let method = if key.contains("greater_rift") || key == "gr" || key.contains("rift") {
            FarmingMethod::GreaterRift
        } else if key.contains("kadala") || key.contains("gambl") || key.contains("blood_shard") {
            FarmingMethod::Kadala
        } else if key.contains("bount") || key.contains("cache") {
            FarmingMethod::BountyCache
        } else if key.contains("reforge") {
            FarmingMethod::CubeReforge
        } else if key.contains("upgrade") || key.contains("cube") {
            FarmingMethod::CubeUpgrade
        } else if key.contains("craft") || key.contains("blacksmith") {
            FarmingMethod::Crafting
        } else if key.contains("season") || key.contains("haedrig") {
            FarmingMethod::SeasonJourney
        } else if key.contains("drop") || key.contains("world") {
            FarmingMethod::WorldDrop
        } else {
            return None;
        };
        Some(method)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeTier {
    Quick,
    Medium,
    #[default]
    Long,
}

impl TimeTier {
    pub fn parse_loose(s: &str) -> Option<Self> {
        match loose_key(s).as_str() {
            "quick" | "short" | "fast" => Some(TimeTier::Quick),
            "medium" | "mid" => Some(TimeTier::Medium),
            "long" | "slow" => Some(TimeTier::Long),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressionPath {
    pub steps: Vec<ProgressionStep>,
    pub critical_path: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressionStep {
    pub step: u32,
    pub title: String,
    pub description: String,
    pub upgrade_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Recommendation {
    Basic(BuildRecommendation),
    Enhanced(EnhancedBuildRecommendation),
}

impl Recommendation {
    pub fn mode(&self) -> AnalysisMode {
        match self {
            Recommendation::Basic(_) => AnalysisMode::Basic,
            Recommendation::Enhanced(_) => AnalysisMode::Enhanced,
        }
    }

    pub fn base(&self) -> &BuildRecommendation {
        match self {
            Recommendation::Basic(rec) => rec,
            Recommendation::Enhanced(rec) => &rec.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut BuildRecommendation {
        match self {
            Recommendation::Basic(rec) => rec,
            Recommendation::Enhanced(rec) => &mut rec.base,
        }
    }

    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.base().warnings
    }
}

fn loose_key(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace([' ', '-'], "_")
}
