//! House numbering and the derived-house arithmetic.
//!
//! Deriving treats a root house as the 1st house of a local numbering and
//! counts forward around the wheel. The same count applied to the root
//! house's cusp sign gives the overlay sign.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::fold;
use super::signs::Sign;
use crate::error::{Result, UraniaError};

/// A house number, always in 1..=12
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct House(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseKind {
    Angular,
    Succedent,
    Cadent,
}

impl House {
    pub fn new(number: u32) -> Result<House> {
        if (1..=12).contains(&number) {
            Ok(House(number as u8))
        } else {
            Err(UraniaError::InvalidHouse(number))
        }
    }

    pub fn all() -> impl Iterator<Item = House> {
        (1..=12u8).map(House)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based position on the wheel
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    pub fn kind(self) -> HouseKind {
        match self.0 % 3 {
            1 => HouseKind::Angular,
            2 => HouseKind::Succedent,
            _ => HouseKind::Cadent,
        }
    }

    /// The house `n` steps into a numbering that starts at `self`
    pub fn derived(self, n: u8) -> House {
        derived_house(self, n)
    }
}

impl TryFrom<u32> for House {
    type Error = UraniaError;

    fn try_from(value: u32) -> Result<Self> {
        House::new(value)
    }
}

impl From<House> for u32 {
    fn from(house: House) -> u32 {
        house.0 as u32
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `((root-1) + (n-1)) mod 12 + 1`.
///
/// `n` is taken modulo 12, so the function is total; callers are expected to
/// pass 1..=12.
pub fn derived_house(root: House, n: u8) -> House {
    let steps = (n as usize + 11) % 12;
    House(((root.index() + steps) % 12) as u8 + 1)
}

/// Sign reached by counting `n` signs from `root_sign`, the root itself being 1.
pub fn overlay_sign(root_sign: Sign, n: u8) -> Sign {
    let steps = (n as usize + 11) % 12;
    Sign::from_index(root_sign.index() + steps)
}

/// Life topics offered as shortcuts for picking a root house
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseTopic {
    Identity,
    Money,
    Siblings,
    Home,
    Romance,
    Routine,
    Partnership,
    Crisis,
    Travel,
    Career,
    Friends,
    Seclusion,
}

impl HouseTopic {
    pub const ALL: [HouseTopic; 12] = [
        HouseTopic::Identity,
        HouseTopic::Money,
        HouseTopic::Siblings,
        HouseTopic::Home,
        HouseTopic::Romance,
        HouseTopic::Routine,
        HouseTopic::Partnership,
        HouseTopic::Crisis,
        HouseTopic::Travel,
        HouseTopic::Career,
        HouseTopic::Friends,
        HouseTopic::Seclusion,
    ];

    pub fn root_house(self) -> House {
        House(self as u8 + 1)
    }

    pub fn slug(self) -> &'static str {
        TOPIC_SLUGS[self as usize]
    }
}

const TOPIC_SLUGS: [&str; 12] = [
    "identity",
    "money",
    "siblings",
    "home",
    "romance",
    "routine",
    "partnership",
    "crisis",
    "travel",
    "career",
    "friends",
    "seclusion",
];

impl FromStr for HouseTopic {
    type Err = UraniaError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = fold(s.trim());
        HouseTopic::ALL
            .iter()
            .copied()
            .find(|topic| topic.slug() == wanted)
            .ok_or_else(|| UraniaError::UnknownTopic {
                name: s.to_string(),
                valid: TOPIC_SLUGS.iter().map(|t| t.to_string()).collect(),
            })
    }
}
