use super::AcquisitionInfo;
use crate::domain::recommendation::FarmingMethod::{
    self, BountyCache, Crafting, CubeReforge, CubeUpgrade, GreaterRift, Kadala, SeasonJourney,
    WorldDrop,
};
use crate::domain::recommendation::TimeTier::{Long, Medium, Quick};

const GAMBLE_OR_UPGRADE: &[FarmingMethod] = &[Kadala, CubeUpgrade, GreaterRift, WorldDrop];
const LEGENDARY_GEM: &[FarmingMethod] = &[GreaterRift];

pub(super) const ITEMS: &[AcquisitionInfo] = &[
    AcquisitionInfo {
        name: "The Compass Rose",
        slot: "ring",
        methods: &[Kadala, GreaterRift, WorldDrop],
        primary: Kadala,
        time_tier: Quick,
        costs: &[("bloodShards", 50)],
        notes: "Rings cost 50 blood shards at Kadala; pair with Traveler's Pledge.",
    },
    AcquisitionInfo {
        name: "Traveler's Pledge",
        slot: "neck",
        methods: &[Kadala, GreaterRift, WorldDrop],
        primary: Kadala,
        time_tier: Quick,
        costs: &[("bloodShards", 100)],
        notes: "Amulets cost 100 blood shards at Kadala.",
    },
    AcquisitionInfo {
        name: "Focus",
        slot: "ring",
        methods: &[Kadala, GreaterRift, WorldDrop],
        primary: Kadala,
        time_tier: Quick,
        costs: &[("bloodShards", 50)],
        notes: "Both halves of Bastion of Will are needed for the set bonus.",
    },
    AcquisitionInfo {
        name: "Restraint",
        slot: "ring",
        methods: &[Kadala, GreaterRift, WorldDrop],
        primary: Kadala,
        time_tier: Quick,
        costs: &[("bloodShards", 50)],
        notes: "Both halves of Bastion of Will are needed for the set bonus.",
    },
    AcquisitionInfo {
        name: "Litany of the Undaunted",
        slot: "ring",
        methods: &[Kadala, GreaterRift, WorldDrop],
        primary: Kadala,
        time_tier: Medium,
        costs: &[("bloodShards", 50)],
        notes: "Legacy of Nightmares only pays off with a full ancient non-set loadout.",
    },
    AcquisitionInfo {
        name: "The Wailing Host",
        slot: "ring",
        methods: &[Kadala, GreaterRift, WorldDrop],
        primary: Kadala,
        time_tier: Medium,
        costs: &[("bloodShards", 50)],
        notes: "Legacy of Nightmares only pays off with a full ancient non-set loadout.",
    },
    AcquisitionInfo {
        name: "Ring of Royal Grandeur",
        slot: "ring",
        methods: &[BountyCache],
        primary: BountyCache,
        time_tier: Medium,
        costs: &[],
        notes: "Drops only from Act I Horadric caches.",
    },
    AcquisitionInfo {
        name: "Convention of Elements",
        slot: "ring",
        methods: &[Kadala, GreaterRift, WorldDrop],
        primary: Kadala,
        time_tier: Quick,
        costs: &[("bloodShards", 50)],
        notes: "Aim for an ancient roll before pushing.",
    },
    AcquisitionInfo {
        name: "Stone of Jordan",
        slot: "ring",
        methods: &[Kadala, GreaterRift, WorldDrop],
        primary: Kadala,
        time_tier: Quick,
        costs: &[("bloodShards", 50)],
        notes: "",
    },
    AcquisitionInfo {
        name: "Unity",
        slot: "ring",
        methods: &[Kadala, GreaterRift, WorldDrop],
        primary: Kadala,
        time_tier: Quick,
        costs: &[("bloodShards", 50)],
        notes: "Only works when the follower also wears Unity and an Enchanted Token.",
    },
    AcquisitionInfo {
        name: "Hellfire Amulet",
        slot: "neck",
        methods: &[Crafting],
        primary: Crafting,
        time_tier: Long,
        costs: &[
            ("arcaneDust", 50),
            ("deathsBreath", 25),
            ("forgottenSouls", 25),
            ("infernalMachines", 4),
        ],
        notes: "Craft from the four Uber boss keys; rolls a random fifth passive.",
    },
    AcquisitionInfo {
        name: "Convention of Elements (Cube)",
        slot: "cube",
        methods: &[CubeUpgrade],
        primary: CubeUpgrade,
        time_tier: Quick,
        costs: &[("deathsBreath", 5), ("forgottenSouls", 1)],
        notes: "Extract with Kanai's Cube once the ring is found.",
    },
    AcquisitionInfo {
        name: "Ancient Parthan Defenders",
        slot: "bracers",
        methods: GAMBLE_OR_UPGRADE,
        primary: Kadala,
        time_tier: Quick,
        costs: &[("bloodShards", 25)],
        notes: "",
    },
    AcquisitionInfo {
        name: "Nemesis Bracers",
        slot: "bracers",
        methods: GAMBLE_OR_UPGRADE,
        primary: Kadala,
        time_tier: Quick,
        costs: &[("bloodShards", 25)],
        notes: "",
    },
    AcquisitionInfo {
        name: "Krelm's Buff Bracers",
        slot: "bracers",
        methods: GAMBLE_OR_UPGRADE,
        primary: CubeUpgrade,
        time_tier: Quick,
        costs: &[("deathsBreath", 25), ("reusableParts", 50), ("arcaneDust", 50), ("veiledCrystals", 50)],
        notes: "Upgrade rare bracers in Kanai's Cube for a guaranteed legendary bracer.",
    },
    AcquisitionInfo {
        name: "Leoric's Crown",
        slot: "head",
        methods: &[Kadala, CubeUpgrade, WorldDrop],
        primary: Kadala,
        time_tier: Medium,
        costs: &[("bloodShards", 25)],
        notes: "Used to boost socketed gem effects; an ancient roll matters.",
    },
    AcquisitionInfo {
        name: "Lost Time",
        slot: "cube",
        methods: &[SeasonJourney, WorldDrop],
        primary: WorldDrop,
        time_tier: Medium,
        costs: &[("deathsBreath", 5), ("forgottenSouls", 1)],
        notes: "Cube power; extract from the source cold-skill item once found.",
    },
    AcquisitionInfo {
        name: "Bane of the Trapped",
        slot: "gem",
        methods: LEGENDARY_GEM,
        primary: GreaterRift,
        time_tier: Quick,
        costs: &[],
        notes: "Drops from Greater Rift guardians; level through Urshi upgrades.",
    },
    AcquisitionInfo {
        name: "Zei's Stone of Vengeance",
        slot: "gem",
        methods: LEGENDARY_GEM,
        primary: GreaterRift,
        time_tier: Quick,
        costs: &[],
        notes: "Drops from Greater Rift guardians; level through Urshi upgrades.",
    },
    AcquisitionInfo {
        name: "Bane of the Stricken",
        slot: "gem",
        methods: LEGENDARY_GEM,
        primary: GreaterRift,
        time_tier: Medium,
        costs: &[],
        notes: "Rank 25 unlocks the damage-reduction bonus against elites.",
    },
    AcquisitionInfo {
        name: "Esoteric Alteration",
        slot: "gem",
        methods: LEGENDARY_GEM,
        primary: GreaterRift,
        time_tier: Quick,
        costs: &[],
        notes: "",
    },
    AcquisitionInfo {
        name: "Gogok of Swiftness",
        slot: "gem",
        methods: LEGENDARY_GEM,
        primary: GreaterRift,
        time_tier: Quick,
        costs: &[],
        notes: "Rank 25 adds cooldown reduction at full stacks.",
    },
    AcquisitionInfo {
        name: "Ancient Set Pieces",
        slot: "any",
        methods: &[CubeReforge, GreaterRift, Kadala],
        primary: GreaterRift,
        time_tier: Long,
        costs: &[("deathsBreath", 50), ("forgottenSouls", 50)],
        notes: "Reforge in Kanai's Cube or keep pushing Greater Rifts for ancient rolls.",
    },
    AcquisitionInfo {
        name: "Haedrig's Gift",
        slot: "set",
        methods: &[SeasonJourney],
        primary: SeasonJourney,
        time_tier: Quick,
        costs: &[],
        notes: "Seasonal journey chapters II-IV award a class set in three parts.",
    },
];
