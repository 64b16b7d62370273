use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Battle.net hero id. Profiles report it as a number, the dashboard passes it around as a
/// string; both deserialize to the same key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawCharacterId")]
pub struct CharacterId(pub String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCharacterId {
    Number(u64),
    Text(String),
}

impl From<RawCharacterId> for CharacterId {
    fn from(raw: RawCharacterId) -> Self {
        match raw {
            RawCharacterId::Number(n) => Self(n.to_string()),
            RawCharacterId::Text(s) => Self(s.trim().to_string()),
        }
    }
}

impl From<&str> for CharacterId {
    fn from(s: &str) -> Self {
        Self(s.trim().to_string())
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum HeroClass {
    Barbarian,
    Crusader,
    DemonHunter,
    Monk,
    Necromancer,
    WitchDoctor,
    Wizard,
}

impl HeroClass {
    pub const ALL: [HeroClass; 7] = [
        HeroClass::Barbarian,
        HeroClass::Crusader,
        HeroClass::DemonHunter,
        HeroClass::Monk,
        HeroClass::Necromancer,
        HeroClass::WitchDoctor,
        HeroClass::Wizard,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            HeroClass::Barbarian => "barbarian",
            HeroClass::Crusader => "crusader",
            HeroClass::DemonHunter => "demon-hunter",
            HeroClass::Monk => "monk",
            HeroClass::Necromancer => "necromancer",
            HeroClass::WitchDoctor => "witch-doctor",
            HeroClass::Wizard => "wizard",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            HeroClass::Barbarian => "Barbarian",
            HeroClass::Crusader => "Crusader",
            HeroClass::DemonHunter => "Demon Hunter",
            HeroClass::Monk => "Monk",
            HeroClass::Necromancer => "Necromancer",
            HeroClass::WitchDoctor => "Witch Doctor",
            HeroClass::Wizard => "Wizard",
        }
    }
}

impl FromStr for HeroClass {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let slug = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        for class in HeroClass::ALL {
            if class.slug() == slug {
                return Ok(class);
            }
        }
        bail!("unknown hero class: {s:?}")
    }
}

impl TryFrom<String> for HeroClass {
    type Error = anyhow::Error;

    fn try_from(s: String) -> anyhow::Result<Self> {
        s.parse()
    }
}

impl fmt::Display for HeroClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Point-in-time view of a hero as reported by the profile API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSnapshot {
    pub id: CharacterId,
    #[serde(default)]
    pub name: String,
    pub class: HeroClass,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub paragon_level: u32,
    #[serde(default)]
    pub hardcore: bool,
    #[serde(default)]
    pub seasonal: bool,
    #[serde(default)]
    pub items: Vec<EquippedItem>,
    #[serde(default)]
    pub skills: SkillLoadout,
    #[serde(default)]
    pub cube: CubeLoadout,
    #[serde(default)]
    pub gems: Vec<EquippedGem>,
    #[serde(default)]
    pub stats: CharacterStats,
}

impl CharacterSnapshot {
    /// Equipped piece count per set, ordered by set name.
    pub fn set_piece_counts(&self) -> BTreeMap<&str, u32> {
        let mut out = BTreeMap::new();
        for item in &self.items {
            if let Some(set) = item.set_name.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
                *out.entry(set).or_insert(0) += 1;
            }
        }
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquippedItem {
    pub slot: String,
    pub name: String,
    #[serde(default)]
    pub set_name: Option<String>,
    #[serde(default)]
    pub legendary_power: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillLoadout {
    #[serde(default)]
    pub active: Vec<EquippedSkill>,
    #[serde(default)]
    pub passive: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquippedSkill {
    pub name: String,
    #[serde(default)]
    pub rune: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CubeLoadout {
    #[serde(default)]
    pub weapon: Option<String>,
    #[serde(default)]
    pub armor: Option<String>,
    #[serde(default)]
    pub jewelry: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquippedGem {
    pub name: String,
    #[serde(default)]
    pub rank: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterStats {
    #[serde(default)]
    pub damage: f64,
    #[serde(default)]
    pub toughness: f64,
    #[serde(default)]
    pub recovery: f64,
    #[serde(default)]
    pub life: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hero_class_accepts_slugs_and_spaced_names() {
        assert_eq!("demon-hunter".parse::<HeroClass>().unwrap(), HeroClass::DemonHunter);
        assert_eq!("Witch Doctor".parse::<HeroClass>().unwrap(), HeroClass::WitchDoctor);
        assert_eq!("NECROMANCER".parse::<HeroClass>().unwrap(), HeroClass::Necromancer);
        assert!("druid".parse::<HeroClass>().is_err());
    }

    #[test]
    fn snapshot_deserializes_numeric_id_and_defaults() {
        let v = json!({
            "id": 123456789,
            "class": "witch-doctor",
            "items": [
                {"slot": "head", "name": "Helltooth Mask", "setName": "Helltooth Harness"},
                {"slot": "hands", "name": "Helltooth Gauntlets", "setName": "Helltooth Harness"},
                {"slot": "leftFinger", "name": "Focus", "setName": "Bastion of Will"}
            ]
        });

        let snapshot: CharacterSnapshot = serde_json::from_value(v).unwrap();
        assert_eq!(snapshot.id, CharacterId("123456789".to_string()));
        assert_eq!(snapshot.class, HeroClass::WitchDoctor);
        assert_eq!(snapshot.paragon_level, 0);
        assert!(snapshot.skills.active.is_empty());

        let counts = snapshot.set_piece_counts();
        assert_eq!(counts.get("Helltooth Harness").copied(), Some(2));
        assert_eq!(counts.get("Bastion of Will").copied(), Some(1));
    }

    #[test]
    fn hero_class_serializes_as_slug() {
        let v = serde_json::to_value(HeroClass::DemonHunter).unwrap();
        assert_eq!(v, json!("demon-hunter"));
    }
}
