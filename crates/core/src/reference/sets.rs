use super::SetDefinition;

pub(super) const SETS: &[SetDefinition] = &[
    // Barbarian
    SetDefinition {
        name: "Might of the Earth",
        bonuses: &[
            (2, "Reduce the cooldown of Earthquake, Avalanche, Leap, and Ground Stomp by 3 seconds for every 30 Fury you spend."),
            (4, "Leap causes an Earthquake when you land."),
            (6, "Earthquake, Avalanche, Leap, Ground Stomp, Ancient Spear, and Seismic Slam deal 20000% increased damage."),
        ],
    },
    SetDefinition {
        name: "Wrath of the Wastes",
        bonuses: &[
            (2, "Increase the damage per second of Whirlwind by 500% and Whirlwind gains the effect of every rune."),
            (4, "You take 50% less damage while Whirlwinding."),
            (6, "Whirlwind and Rend deal 20000% increased damage."),
        ],
    },
    SetDefinition {
        name: "Immortal King's Call",
        bonuses: &[
            (2, "Call of the Ancients last until they die."),
            (4, "Your Ancients deal 250% increased damage and you take 50% less damage while they are alive."),
            (6, "While both Wrath of the Berserker and Call of the Ancients are active, you deal 10000% increased damage."),
        ],
    },
    // Crusader
    SetDefinition {
        name: "Armor of Akkhan",
        bonuses: &[
            (2, "Reduce the cost of all abilities by 50% while Akarat's Champion is active."),
            (4, "Reduce the cooldown of Akarat's Champion by 50%."),
            (6, "While Akarat's Champion is active, you deal 12000% increased damage and take 50% less damage."),
        ],
    },
    SetDefinition {
        name: "Roland's Legacy",
        bonuses: &[
            (2, "Every use of Shield Bash and Sweep Attack reduces the cooldowns of your Laws and Defensive skills by 1 second."),
            (4, "Increase the attack speed of Shield Bash and Sweep Attack by 50% for 5 seconds, stacking up to 5 times."),
            (6, "Increase the damage of Shield Bash and Sweep Attack by 13000%."),
        ],
    },
    SetDefinition {
        name: "Seeker of the Light",
        bonuses: &[
            (2, "Every use of Bombardment reduces the cooldown of Falling Sword by 1 second."),
            (4, "Reduce damage taken by 50% for 5 seconds after landing with Falling Sword."),
            (6, "Falling Sword and Blessed Hammer deal 10000% increased damage."),
        ],
    },
    // Demon Hunter
    SetDefinition {
        name: "Natalya's Vengeance",
        bonuses: &[
            (2, "Reduce the cooldown of Rain of Vengeance by 4 seconds every time you hit with a Hatred-generating or Hatred-spending attack."),
            (4, "Rain of Vengeance deals 100% increased damage."),
            (6, "After casting Rain of Vengeance, deal 14000% increased damage and take 60% reduced damage for 10 seconds."),
        ],
    },
    SetDefinition {
        name: "Unhallowed Essence",
        bonuses: &[
            (2, "Your generators generate 1 additional Hatred and 1 Discipline."),
            (4, "Gain 60% damage reduction and deal 60% increased damage for 3 seconds if no enemy is within 10 yards of you."),
            (6, "Your generators, Multishot, and Vengeance deal 100% increased damage for every point of Discipline you have."),
        ],
    },
    SetDefinition {
        name: "Embodiment of the Marauder",
        bonuses: &[
            (2, "Companion calls all companions to your side."),
            (4, "Sentries cast Elemental Arrow, Chakram, Impale, Multishot, Cluster Arrow, or Rapid Fire when you do."),
            (6, "Your primary skills, Elemental Arrow, Chakram, Impale, Multishot, Cluster Arrow, Rapid Fire, and Sentry deal 12000% increased damage for every active Sentry."),
        ],
    },
    // Monk
    SetDefinition {
        name: "Inna's Mantra",
        bonuses: &[
            (2, "Increase the passive effect of your Mantra by 100%."),
            (4, "Gain the base effect of all four Mystic Ally runes."),
            (6, "Increase the damage of Mystic Ally by 1500% and your damage is increased by 100% for each Mystic Ally you have."),
        ],
    },
    SetDefinition {
        name: "Raiment of a Thousand Storms",
        bonuses: &[
            (2, "Your Spirit Generators have 25% increased attack speed and 300% increased damage."),
            (4, "Dashing Strike spends 75 Spirit, but refunds a Charge when it does."),
            (6, "Your generators deal 15000% increased damage and Dashing Strike increases the damage of your generators by 6000% for 6 seconds."),
        ],
    },
    SetDefinition {
        name: "Uliana's Stratagem",
        bonuses: &[
            (2, "Every third hit of your Spirit Generators applies Exploding Palm."),
            (4, "Your Seven-Sided Strike deals its total damage with each hit."),
            (6, "Exploding Palm's on-death explosion damage is increased by 14000%."),
        ],
    },
    // Necromancer
    SetDefinition {
        name: "Bones of Rathma",
        bonuses: &[
            (2, "Each active Skeletal Mage reduces damage taken by 3%."),
            (4, "Each time your minions deal damage, reduce the cooldown of Army of the Dead by 1 second."),
            (6, "You take 1% less damage for every minion you have and your minions deal 4000% increased damage."),
        ],
    },
    SetDefinition {
        name: "Grace of Inarius",
        bonuses: &[
            (2, "Bone Armor damage is increased by 1000%."),
            (4, "Bone Armor grants an additional 2% damage reduction per enemy hit."),
            (6, "Bone Armor grants a swirling tornado of bone, damaging nearby enemies for 1000% weapon damage and increasing damage taken by enemies by 3000%."),
        ],
    },
    SetDefinition {
        name: "Trag'Oul's Avatar",
        bonuses: &[
            (2, "Blood Rush grants unlimited range."),
            (4, "While at full Life, your healing from skills is added to your maximum Life for 45 seconds."),
            (6, "Your Life-spending abilities deal 8000% increased damage and your healing from skills is increased by 100%."),
        ],
    },
    SetDefinition {
        name: "Pestilence Master's Shroud",
        bonuses: &[
            (2, "Each corpse you consume fires a Corpse Lance at a nearby enemy."),
            (4, "Each corpse you consume grants 15% damage reduction for 15 seconds, stacking up to 10 times."),
            (6, "Corpse Lance and Corpse Explosion deal 15000% increased damage."),
        ],
    },
    // Witch Doctor
    SetDefinition {
        name: "Helltooth Harness",
        bonuses: &[
            (2, "Enemies hit by your primary skills are inflicted with Necrosis."),
            (4, "After casting Wall of Death, gain 60% damage reduction for 15 seconds."),
            (6, "After casting Wall of Death, your primary skills, Acid Cloud, Firebats, Zombie Charger, Zombie Dogs, Gargantuan, Grasp of the Dead, Piranhas, and Wall of Death deal 4500% increased damage for 15 seconds."),
        ],
    },
    SetDefinition {
        name: "Raiment of the Jade Harvester",
        bonuses: &[
            (2, "Haunt lasts almost forever."),
            (4, "Soul Harvest reduces the cooldown of Soul Harvest by 1 second for each enemy harvested."),
            (6, "Soul Harvest consumes your damage-over-time effects and deals 3500 seconds of their remaining damage instantly."),
        ],
    },
    SetDefinition {
        name: "Spirit of Arachyr",
        bonuses: &[
            (2, "Summon Zombie Dogs, Gargantuan, Hex, Locust Swarm, Piranhas, and Wall of Death gain the effect of the Spider rune."),
            (4, "Hex gains the effect of the Toad of Hugeness rune and damage reduction is increased by 60%."),
            (6, "Increases the damage of Firebats and your pets by 15000%."),
        ],
    },
    // Wizard
    SetDefinition {
        name: "Tal Rasha's Elements",
        bonuses: &[
            (2, "Arcane, Cold, Fire, and Lightning attacks each cause a Meteor to fall from the sky."),
            (4, "Arcane, Cold, Fire, and Lightning attacks each increase your resistances by 25% for 8 seconds."),
            (6, "Arcane, Cold, Fire, and Lightning attacks each increase your damage by 2500% for 8 seconds, stacking once per element."),
        ],
    },
    SetDefinition {
        name: "Firebird's Finery",
        bonuses: &[
            (2, "When you die, a fiery rebirth returns you to life after 3 seconds."),
            (4, "Casting a skill sets enemies on fire, stacking Ignite up to 3 times per second."),
            (6, "Ignite deals 3000% weapon damage per second for 3 seconds and you take 3% reduced damage per stack on your Ignite target."),
        ],
    },
    SetDefinition {
        name: "Delsere's Magnum Opus",
        bonuses: &[
            (2, "Casting Arcane Orb, Energy Twister, Explosive Blast, Magic Missile, Shock Pulse, Spectral Blade, or Wave of Force reduces the cooldown of Slow Time by 3 seconds."),
            (4, "You take 50% reduced damage while you have a Slow Time active."),
            (6, "Enemies affected by your Slow Time take 13000% increased damage from your Arcane Orb, Energy Twister, Explosive Blast, Magic Missile, Shock Pulse, Spectral Blade, and Wave of Force."),
        ],
    },
    // Jewelry
    SetDefinition {
        name: "Bastion of Will",
        bonuses: &[(
            2,
            "Resource generating attacks increase damage by 50% for 5 seconds; resource spending attacks increase damage by 50% for 5 seconds.",
        )],
    },
    SetDefinition {
        name: "Endless Walk",
        bonuses: &[(
            2,
            "While standing still you deal up to 100% increased damage; while moving you take up to 50% reduced damage.",
        )],
    },
    SetDefinition {
        name: "Legacy of Nightmares",
        bonuses: &[(
            2,
            "Each equipped ancient item that is not part of a set increases your damage by 750% and reduces damage taken by 4%.",
        )],
    },
    SetDefinition {
        name: "Captain Crimson's Trimmings",
        bonuses: &[
            (2, "Regenerates 6000 Life per second and reduces cooldowns by 10%."),
            (3, "Reduces resource costs by 10% and grants 50% increased damage per point of cooldown reduction."),
        ],
    },
];
