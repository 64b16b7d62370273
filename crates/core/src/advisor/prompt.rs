use crate::domain::snapshot::CharacterSnapshot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptOptions {
    pub enhanced: bool,
    pub use_meta_builds: bool,
    pub focus_on_survivability: bool,
}

/// A community build the producer should measure the hero against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetaBuildReference {
    pub name: String,
    pub skills: Vec<String>,
    pub sets: Vec<String>,
    pub items: Vec<String>,
    pub cube_powers: Vec<String>,
    pub notes: Option<String>,
}

pub fn build_prompt(
    snapshot: &CharacterSnapshot,
    options: &PromptOptions,
    meta_reference: Option<&MetaBuildReference>,
) -> String {
    let mut out = String::new();

    out.push_str("Analyze this Diablo III hero and recommend the strongest build it can reach.\n\n");
    out.push_str(&hero_section(snapshot));

    if let Some(meta) = meta_reference.filter(|_| options.use_meta_builds) {
        out.push('\n');
        out.push_str(&meta_section(meta));
    }

    if options.focus_on_survivability {
        out.push_str(
            "\nFOCUS: favour toughness and recovery over raw damage. Prefer defensive passives, \
             damage reduction affixes and sustain when choosing between otherwise equal options.\n",
        );
    }

    out.push_str("\nRespond with a single JSON object of exactly this shape:\n");
    out.push_str(&schema(options.enhanced));
    out.push_str("\n\n");
    out.push_str(&rules(options.enhanced));
    out
}

fn hero_section(s: &CharacterSnapshot) -> String {
    let mode = match (s.hardcore, s.seasonal) {
        (true, true) => "hardcore, seasonal",
        (true, false) => "hardcore, non-seasonal",
        (false, true) => "softcore, seasonal",
        (false, false) => "softcore, non-seasonal",
    };
    let name = if s.name.is_empty() { "(unnamed)" } else { s.name.as_str() };

    let mut lines = vec![
        "HERO".to_string(),
        format!("Name: {name}"),
        format!("Class: {}", s.class),
        format!("Level: {} (Paragon {})", s.level, s.paragon_level),
        format!("Mode: {mode}"),
        String::new(),
        "EQUIPPED ITEMS".to_string(),
    ];
    if s.items.is_empty() {
        lines.push("- none reported".to_string());
    }
    for item in &s.items {
        let mut line = format!("- {}: {}", item.slot, item.name);
        if let Some(set) = item.set_name.as_deref().filter(|v| !v.is_empty()) {
            line.push_str(&format!(" [set: {set}]"));
        }
        if let Some(power) = item.legendary_power.as_deref().filter(|v| !v.is_empty()) {
            line.push_str(&format!(" (power: {power})"));
        }
        lines.push(line);
    }

    let counts = s.set_piece_counts();
    if !counts.is_empty() {
        lines.push(String::new());
        lines.push("SET PIECES".to_string());
        lines.extend(
            counts
                .into_iter()
                .map(|(set, pieces)| format!("- {set}: {pieces} piece(s)")),
        );
    }

    lines.push(String::new());
    lines.push("ACTIVE SKILLS".to_string());
    lines.extend(s.skills.active.iter().map(|skill| {
        match skill.rune.as_deref().filter(|r| !r.is_empty()) {
            Some(rune) => format!("- {} (rune: {rune})", skill.name),
            None => format!("- {} (no rune)", skill.name),
        }
    }));

    lines.push(String::new());
    lines.push("PASSIVE SKILLS".to_string());
    lines.extend(s.skills.passive.iter().map(|p| format!("- {p}")));

    lines.push(String::new());
    lines.push("KANAI'S CUBE".to_string());
    for (label, power) in [
        ("Weapon", &s.cube.weapon),
        ("Armor", &s.cube.armor),
        ("Jewelry", &s.cube.jewelry),
    ] {
        lines.push(format!("- {label}: {}", power.as_deref().unwrap_or("empty")));
    }

    lines.push(String::new());
    lines.push("LEGENDARY GEMS".to_string());
    if s.gems.is_empty() {
        lines.push("- none".to_string());
    }
    lines.extend(s.gems.iter().map(|gem| match gem.rank {
        Some(rank) => format!("- {} (rank {rank})", gem.name),
        None => format!("- {}", gem.name),
    }));

    lines.push(String::new());
    lines.push("STATS".to_string());
    lines.push(format!("- Damage: {}", s.stats.damage));
    lines.push(format!("- Toughness: {}", s.stats.toughness));
    lines.push(format!("- Recovery: {}", s.stats.recovery));
    lines.push(format!("- Life: {}", s.stats.life));

    lines.join("\n") + "\n"
}

fn meta_section(meta: &MetaBuildReference) -> String {
    let list = |values: &[String]| {
        if values.is_empty() {
            "-".to_string()
        } else {
            values.join(", ")
        }
    };

    let mut lines = vec![
        format!("META BUILD REFERENCE: {}", meta.name),
        format!("- Skills: {}", list(&meta.skills)),
        format!("- Sets: {}", list(&meta.sets)),
        format!("- Items: {}", list(&meta.items)),
        format!("- Cube: {}", list(&meta.cube_powers)),
    ];
    if let Some(notes) = meta.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        lines.push(format!("- Notes: {notes}"));
    }
    lines.push(
        "Use this build as a reference point; adapt it to the gear the hero already owns."
            .to_string(),
    );
    lines.join("\n") + "\n"
}

fn schema(enhanced: bool) -> String {
    let mut lines = vec![
        "{",
        "  \"skills\": {",
        "    \"active\": [{\"skill\": \"Skill Name\", \"rune\": \"Rune Name\", \"reason\": \"why\"}],",
        "    \"passive\": [{\"skill\": \"Passive Name\", \"reason\": \"why\"}]",
        "  },",
        "  \"sets\": [{\"name\": \"Set Name\", \"pieces\": 6, \"bonuses\": [{\"pieces\": 2, \"bonus\": \"text\"}]}],",
        "  \"items\": [{\"slot\": \"head\", \"name\": \"Item Name\", \"reason\": \"why\"}],",
        "  \"cubePowers\": {",
        "    \"weapon\": {\"name\": \"Item Name\", \"reason\": \"why\"},",
        "    \"armor\": {\"name\": \"Item Name\", \"reason\": \"why\"},",
        "    \"jewelry\": {\"name\": \"Item Name\", \"reason\": \"why\"}",
        "  },",
        "  \"gems\": [{\"name\": \"Gem Name\", \"priority\": 1, \"reason\": \"why\"}],",
        "  \"playstyle\": \"how to play the build\",",
        "  \"summary\": \"one paragraph overview\",",
        "  \"farmingPriority\": [\"first thing to farm\", \"second thing to farm\"],",
        "  \"statProjections\": {",
        "    \"damage\": {\"current\": 0, \"projected\": 0, \"multiplier\": \"1.0x\", \"rating\": \"major\", \"justification\": \"why\"},",
        "    \"toughness\": {\"current\": 0, \"projected\": 0, \"multiplier\": \"1.0x\", \"rating\": \"moderate\", \"justification\": \"why\"},",
        "    \"recovery\": {\"current\": 0, \"projected\": 0, \"multiplier\": \"1.0x\", \"rating\": \"minor\", \"justification\": \"why\"}",
        "  },",
    ];

    if enhanced {
        lines.extend([
            "  \"greaterRiftProjection\": {\"min\": 70, \"max\": 80, \"reason\": \"why\"},",
            "  \"tieredUpgrades\": {",
            "    \"quick\": [{",
            "      \"id\": \"quick-1\",",
            "      \"priority\": 1,",
            "      \"item\": {",
            "        \"name\": \"Item Name\",",
            "        \"slot\": \"ring\",",
            "        \"farmingMethods\": [\"kadala\", \"greater_rift\"],",
            "        \"primaryMethod\": \"kadala\",",
            "        \"timeTier\": \"quick\",",
            "        \"costs\": {\"bloodShards\": 50},",
            "        \"notes\": \"where and how to get it\"",
            "      },",
            "      \"reason\": \"why\",",
            "      \"powerImpact\": \"major\",",
            "      \"dependsOn\": [],",
            "      \"unlocks\": [\"medium-1\"]",
            "    }],",
            "    \"medium\": [],",
            "    \"long\": []",
            "  },",
            "  \"progressionPath\": {",
            "    \"steps\": [{\"step\": 1, \"title\": \"title\", \"description\": \"what to do\", \"upgradeIds\": [\"quick-1\"]}],",
            "    \"criticalPath\": [\"quick-1\"]",
            "  }",
        ]);
    } else {
        lines.push("  \"greaterRiftProjection\": {\"min\": 70, \"max\": 80, \"reason\": \"why\"}");
    }
    lines.push("}");
    lines.join("\n")
}

fn rules(enhanced: bool) -> String {
    let mut lines = vec![
        "Rules:",
        "- Recommend exactly 6 active skills and 4 passive skills.",
        "- Passive skills have NO rune field; never list a passive skill under \"active\".",
        "- A hero has exactly 2 ring slots and 1 amulet slot.",
        "- At most ONE recommended set may need both ring slots (Bastion of Will, Legacy of Nightmares).",
        "- Endless Walk (Traveler's Pledge + The Compass Rose) uses a ring slot too; do not pair it with Focus + Restraint.",
        "- \"multiplier\" must equal projected / current, written like \"1.35x\".",
        "- \"rating\" must be one of \"major\", \"moderate\", \"minor\".",
    ];
    if enhanced {
        lines.extend([
            "- \"powerImpact\" must be one of \"major\", \"moderate\", \"minor\".",
            "- \"timeTier\" must be one of \"quick\", \"medium\", \"long\" and match the bucket the step is in.",
            "- Farming methods: greater_rift, kadala, bounty_cache, cube_upgrade, cube_reforge, crafting, season_journey, world_drop.",
            "- Every id in \"dependsOn\", \"unlocks\", \"upgradeIds\" and \"criticalPath\" must refer to an upgrade id.",
        ]);
    }
    lines.push("- Return ONLY the JSON object: no markdown, no code fences, no prose, no comments, no trailing commas.");
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot() -> CharacterSnapshot {
        serde_json::from_value(json!({
            "id": 42,
            "name": "Ashe",
            "class": "necromancer",
            "level": 70,
            "paragonLevel": 1200,
            "seasonal": true,
            "items": [
                {"slot": "head", "name": "Pestilence Mask", "setName": "Pestilence Master's Shroud"},
                {"slot": "torso", "name": "Pestilence Robe", "setName": "Pestilence Master's Shroud"},
                {"slot": "leftFinger", "name": "Focus", "setName": "Bastion of Will", "legendaryPower": "+50% damage"}
            ],
            "skills": {
                "active": [{"name": "Corpse Lance", "rune": "Ricochet"}, {"name": "Bone Armor"}],
                "passive": ["Swift Harvesting"]
            },
            "cube": {"weapon": "Reilena's Shadowhook"},
            "gems": [{"name": "Bane of the Trapped", "rank": 100}],
            "stats": {"damage": 1250000.0, "toughness": 48000000.0, "recovery": 900000.0, "life": 600000.0}
        }))
        .unwrap()
    }

    #[test]
    fn basic_prompt_describes_hero() {
        let prompt = build_prompt(&snapshot(), &PromptOptions::default(), None);

        assert!(prompt.contains("Class: Necromancer"));
        assert!(prompt.contains("Level: 70 (Paragon 1200)"));
        assert!(prompt.contains("Mode: softcore, seasonal"));
        assert!(prompt.contains("- leftFinger: Focus [set: Bastion of Will] (power: +50% damage)"));
        assert!(prompt.contains("- Pestilence Master's Shroud: 2 piece(s)"));
        assert!(prompt.contains("- Corpse Lance (rune: Ricochet)"));
        assert!(prompt.contains("- Bone Armor (no rune)"));
        assert!(prompt.contains("- Swift Harvesting"));
        assert!(prompt.contains("- Weapon: Reilena's Shadowhook"));
        assert!(prompt.contains("- Armor: empty"));
        assert!(prompt.contains("- Bane of the Trapped (rank 100)"));
        assert!(prompt.contains("- Damage: 1250000"));
    }

    #[test]
    fn basic_prompt_states_constraints_and_schema() {
        let prompt = build_prompt(&snapshot(), &PromptOptions::default(), None);

        assert!(prompt.contains("exactly 6 active skills and 4 passive skills"));
        assert!(prompt.contains("Passive skills have NO rune field"));
        assert!(prompt.contains("exactly 2 ring slots and 1 amulet slot"));
        assert!(prompt.contains("At most ONE recommended set may need both ring slots"));
        assert!(prompt.contains("must equal projected / current"));
        assert!(prompt.contains("Return ONLY the JSON object"));
        assert!(prompt.contains("\"cubePowers\""));
        assert!(prompt.contains("\"statProjections\""));
        assert!(!prompt.contains("tieredUpgrades"));
        assert!(!prompt.contains("progressionPath"));
    }

    #[test]
    fn enhanced_prompt_embeds_upgrade_schema() {
        let options = PromptOptions {
            enhanced: true,
            ..PromptOptions::default()
        };
        let prompt = build_prompt(&snapshot(), &options, None);

        assert!(prompt.contains("\"tieredUpgrades\""));
        assert!(prompt.contains("\"progressionPath\""));
        assert!(prompt.contains("\"primaryMethod\""));
        assert!(prompt.contains("\"powerImpact\" must be one of"));
    }

    #[test]
    fn meta_reference_requires_flag() {
        let meta = MetaBuildReference {
            name: "Rathma Corpse Lance".to_string(),
            skills: vec!["Corpse Lance".to_string(), "Devour".to_string()],
            sets: vec!["Bones of Rathma".to_string()],
            items: Vec::new(),
            cube_powers: vec!["Reilena's Shadowhook".to_string()],
            notes: Some("push build".to_string()),
        };

        let without = build_prompt(&snapshot(), &PromptOptions::default(), Some(&meta));
        assert!(!without.contains("META BUILD REFERENCE"));

        let options = PromptOptions {
            use_meta_builds: true,
            ..PromptOptions::default()
        };
        let with = build_prompt(&snapshot(), &options, Some(&meta));
        assert!(with.contains("META BUILD REFERENCE: Rathma Corpse Lance"));
        assert!(with.contains("- Skills: Corpse Lance, Devour"));
        assert!(with.contains("- Items: -"));
        assert!(with.contains("- Notes: push build"));

        let flag_only = build_prompt(&snapshot(), &options, None);
        assert!(!flag_only.contains("META BUILD REFERENCE"));
    }

    #[test]
    fn survivability_focus_adds_instruction() {
        let options = PromptOptions {
            focus_on_survivability: true,
            ..PromptOptions::default()
        };
        let prompt = build_prompt(&snapshot(), &options, None);
        assert!(prompt.contains("favour toughness and recovery"));
        assert!(!build_prompt(&snapshot(), &PromptOptions::default(), None).contains("FOCUS:"));
    }

    #[test]
    fn embedded_schemas_are_valid_json() {
        serde_json::from_str::<serde_json::Value>(&schema(false)).unwrap();
        let enhanced: serde_json::Value = serde_json::from_str(&schema(true)).unwrap();
        assert!(enhanced["tieredUpgrades"]["quick"].is_array());
    }
}
