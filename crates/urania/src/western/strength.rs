//! Strength score of a ruling body.
//!
//! `total = clamp(50 + house + rulership + aspects, 0, 100)`, with every term
//! kept in the breakdown.

use serde::Serialize;
use std::fmt;

use super::dignities::rulership_weight;
use super::rulers::RulershipSystem;
use crate::aspects::Aspect;
use crate::chart::Placements;
use crate::zodiac::{Body, House, HouseKind};

pub const BASE_SCORE: f64 = 50.0;

/// Orb at which an aspect's contribution has fallen to zero, for every kind
pub const ASPECT_FALLOFF_ORB: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub house: f64,
    pub rulership: f64,
    pub aspects: f64,
    /// Sum of the terms, clamped to [0, 100]
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLabel {
    Flowing,
    Moderate,
    Challenging,
    Intense,
}

impl StrengthLabel {
    pub fn from_score(total: f64) -> StrengthLabel {
        if total >= 75.0 {
            StrengthLabel::Flowing
        } else if total >= 55.0 {
            StrengthLabel::Moderate
        } else if total >= 35.0 {
            StrengthLabel::Challenging
        } else {
            StrengthLabel::Intense
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StrengthLabel::Flowing => "flowing",
            StrengthLabel::Moderate => "moderate",
            StrengthLabel::Challenging => "challenging",
            StrengthLabel::Intense => "intense",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ScoreBreakdown {
    pub fn label(&self) -> StrengthLabel {
        StrengthLabel::from_score(self.total)
    }

    /// Unclamped sum of the terms
    pub fn raw(&self) -> f64 {
        self.base + self.house + self.rulership + self.aspects
    }
}

/// Angular 12, succedent 6, cadent 0
pub fn house_weight(house: House) -> f64 {
    match house.kind() {
        HouseKind::Angular => 12.0,
        HouseKind::Succedent => 6.0,
        HouseKind::Cadent => 0.0,
    }
}

/// Sum of weighted aspect contributions for `body`, each scaled linearly
/// down to zero at `ASPECT_FALLOFF_ORB`.
pub fn aspect_weight(body: &Body, aspects: &[Aspect]) -> f64 {
    aspects
        .iter()
        .filter(|a| a.touches(body))
        .map(|a| a.kind.weight() * (1.0 - a.orb / ASPECT_FALLOFF_ORB).max(0.0))
        .sum()
}

/// Score `ruler`. `None` when the ruler has no placement in the chart,
/// which is an expected outcome rather than an error.
pub fn score(
    ruler: &Body,
    placements: &Placements,
    aspects: &[Aspect],
    system: RulershipSystem,
) -> Option<ScoreBreakdown> {
    let placement = placements.get(ruler)?;

    let house = house_weight(placement.house());
    let rulership = rulership_weight(ruler, placement.sign(), system);
    let aspects = aspect_weight(ruler, aspects);
    let raw = BASE_SCORE + house + rulership + aspects;

    Some(ScoreBreakdown {
        base: BASE_SCORE,
        house,
        rulership,
        aspects,
        total: raw.clamp(0.0, 100.0),
    })
}
