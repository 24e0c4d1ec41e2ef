use serde::{Deserialize, Serialize};

/// The fixed class catalog. Order matters: listings and distribution
/// reports follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerClass {
    #[serde(rename = "Rune Knight")]
    RuneKnight,
    #[serde(rename = "Warlock")]
    Warlock,
    #[serde(rename = "Ranger")]
    Ranger,
    #[serde(rename = "Arch Bishop")]
    ArchBishop,
    #[serde(rename = "Mechanic")]
    Mechanic,
    #[serde(rename = "Guillotine Cross")]
    GuillotineCross,
    #[serde(rename = "Royal Guard")]
    RoyalGuard,
    #[serde(rename = "Sorcerer")]
    Sorcerer,
    #[serde(rename = "Minstrel")]
    Minstrel,
    #[serde(rename = "Wanderer")]
    Wanderer,
    #[serde(rename = "Sura")]
    Sura,
    #[serde(rename = "Genetic")]
    Genetic,
    #[serde(rename = "Shadow Chaser")]
    ShadowChaser,
}

impl PlayerClass {
    /// Catalog order, used for listings and the distribution report.
    pub const ALL: [PlayerClass; 13] = [
        PlayerClass::RuneKnight,
        PlayerClass::Warlock,
        PlayerClass::Ranger,
        PlayerClass::ArchBishop,
        PlayerClass::Mechanic,
        PlayerClass::GuillotineCross,
        PlayerClass::RoyalGuard,
        PlayerClass::Sorcerer,
        PlayerClass::Minstrel,
        PlayerClass::Wanderer,
        PlayerClass::Sura,
        PlayerClass::Genetic,
        PlayerClass::ShadowChaser,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PlayerClass::RuneKnight => "Rune Knight",
            PlayerClass::Warlock => "Warlock",
            PlayerClass::Ranger => "Ranger",
            PlayerClass::ArchBishop => "Arch Bishop",
            PlayerClass::Mechanic => "Mechanic",
            PlayerClass::GuillotineCross => "Guillotine Cross",
            PlayerClass::RoyalGuard => "Royal Guard",
            PlayerClass::Sorcerer => "Sorcerer",
            PlayerClass::Minstrel => "Minstrel",
            PlayerClass::Wanderer => "Wanderer",
            PlayerClass::Sura => "Sura",
            PlayerClass::Genetic => "Genetic",
            PlayerClass::ShadowChaser => "Shadow Chaser",
        }
    }

    /// Exact, case-sensitive catalog lookup.
    pub fn parse(name: &str) -> Option<PlayerClass> {
        PlayerClass::ALL.iter().copied().find(|c| c.as_str() == name)
    }

    pub fn is_valid(name: &str) -> bool {
        PlayerClass::parse(name).is_some()
    }
}

/// One row of the class distribution report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassCount {
    pub class: PlayerClass,
    pub count: usize,
}

/// Tally classes against the full catalog. Every catalog entry appears in
/// the output, zero-counted when absent from the input.
pub fn distribution<I>(classes: I) -> Vec<ClassCount>
where
    I: IntoIterator<Item = PlayerClass>,
{
    let observed: Vec<PlayerClass> = classes.into_iter().collect();
    PlayerClass::ALL
        .iter()
        .map(|class| ClassCount {
            class: *class,
            count: observed.iter().filter(|c| *c == class).count(),
        })
        .collect()
}
