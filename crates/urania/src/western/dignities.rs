//! Essential dignity of a body by sign.
//!
//! Only rulership and detriment are tracked, both derived from the selected
//! rulership table so that modern and traditional schemes stay consistent.

use serde::{Deserialize, Serialize};

use super::rulers::RulershipSystem;
use crate::zodiac::{Body, Sign};

pub const DIGNITY_WEIGHT: f64 = 10.0;
pub const DETRIMENT_WEIGHT: f64 = -10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DignityType {
    Rulership,
    Detriment,
}

impl DignityType {
    pub fn weight(self) -> f64 {
        match self {
            DignityType::Rulership => DIGNITY_WEIGHT,
            DignityType::Detriment => DETRIMENT_WEIGHT,
        }
    }
}

/// Dignity of `body` placed in `sign`.
///
/// Rulership takes precedence: a body that rules the sign it occupies is
/// never also in detriment there.
pub fn get_dignity(body: &Body, sign: Sign, system: RulershipSystem) -> Option<DignityType> {
    if system.ruler(sign) == body {
        return Some(DignityType::Rulership);
    }
    let in_detriment = system
        .signs_ruled_by(body)
        .into_iter()
        .any(|ruled| ruled.opposite() == sign);
    if in_detriment {
        Some(DignityType::Detriment)
    } else {
        None
    }
}

/// +10 for rulership, -10 for detriment, 0 otherwise
pub fn rulership_weight(body: &Body, sign: Sign, system: RulershipSystem) -> f64 {
    get_dignity(body, sign, system).map_or(0.0, DignityType::weight)
}
