use crate::domain::snapshot::HeroClass;

pub(super) fn for_class(class: HeroClass) -> &'static [&'static str] {
    match class {
        HeroClass::Barbarian => BARBARIAN,
        HeroClass::Crusader => CRUSADER,
        HeroClass::DemonHunter => DEMON_HUNTER,
        HeroClass::Monk => MONK,
        HeroClass::Necromancer => NECROMANCER,
        HeroClass::WitchDoctor => WITCH_DOCTOR,
        HeroClass::Wizard => WIZARD,
    }
}

const BARBARIAN: &[&str] = &[
    "Pound of Flesh",
    "Ruthless",
    "Nerves of Steel",
    "Weapons Master",
    "Inspiring Presence",
    "Berserker Rage",
    "Bloodthirst",
    "Animosity",
    "Superstition",
    "Tough as Nails",
    "No Escape",
    "Relentless",
    "Brawler",
    "Juggernaut",
    "Unforgiving",
    "Boon of Bul-Kathos",
    "Earthen Might",
    "Sword and Board",
    "Rampage",
];

const CRUSADER: &[&str] = &[
    "Heavenly Strength",
    "Fervor",
    "Vigilant",
    "Righteousness",
    "Insurmountable",
    "Fanaticism",
    "Indestructible",
    "Holy Cause",
    "Wrathful",
    "Divine Fortress",
    "Lord Commander",
    "Hold Your Ground",
    "Long Arm of the Law",
    "Iron Maiden",
    "Renewal",
    "Finery",
    "Blunt",
    "Towering Shield",
];

const DEMON_HUNTER: &[&str] = &[
    "Thrill of the Hunt",
    "Tactical Advantage",
    "Blood Vengeance",
    "Steady Aim",
    "Cull the Weak",
    "Night Stalker",
    "Brooding",
    "Hot Pursuit",
    "Archery",
    "Numbing Traps",
    "Perfectionist",
    "Custom Engineering",
    "Grenadier",
    "Sharpshooter",
    "Ballistics",
    "Leech",
    "Ambush",
    "Awareness",
    "Single Out",
];

const MONK: &[&str] = &[
    "Resolve",
    "Fleet Footed",
    "Exalted Soul",
    "Transcendence",
    "Chant of Resonance",
    "Seize the Initiative",
    "The Guardian's Path",
    "Sixth Sense",
    "Pacifism",
    "Beacon of Ytar",
    "Unity",
    "Combination Strike",
    "Near Death Experience",
    "Relentless Assault",
    "Harmony",
    "Mythic Rhythm",
];

// Bone Prison is tracked here as well: producers regularly slot it as a passive.
const NECROMANCER: &[&str] = &[
    "Aberrant Animator",
    "Blood for Blood",
    "Blood is Power",
    "Bone Prison",
    "Commander of the Risen Dead",
    "Dark Reaping",
    "Draining Spirit",
    "Eternal Torment",
    "Extended Servitude",
    "Final Service",
    "Fueled by Death",
    "Grisly Tribute",
    "Life from Death",
    "Overwhelming Essence",
    "Rathma's Shield",
    "Serration",
    "Spreading Malediction",
    "Stand Alone",
    "Swift Harvesting",
];

const WITCH_DOCTOR: &[&str] = &[
    "Circle of Life",
    "Spiritual Attunement",
    "Gruesome Feast",
    "Blood Ritual",
    "Bad Medicine",
    "Zombie Handler",
    "Pierce the Veil",
    "Spirit Vessel",
    "Fetish Sycophants",
    "Rush of Essence",
    "Vision Quest",
    "Fierce Loyalty",
    "Grave Injustice",
    "Tribal Rites",
    "Confidence Ritual",
    "Creeping Death",
    "Swami",
    "Midnight Feast",
    "Jungle Fortitude",
];

const WIZARD: &[&str] = &[
    "Power Hungry",
    "Blur",
    "Evocation",
    "Glass Cannon",
    "Prodigy",
    "Astral Presence",
    "Illusionist",
    "Cold Blooded",
    "Conflagration",
    "Paralysis",
    "Galvanizing Ward",
    "Temporal Flux",
    "Dominance",
    "Arcane Dynamo",
    "Unstable Anomaly",
    "Unwavering Will",
    "Audacity",
    "Elemental Exposure",
];
