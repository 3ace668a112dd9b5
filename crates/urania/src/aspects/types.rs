use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::zodiac::Body;

/// Aspect kinds, declared in classification priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

// (kind, exact angle, default max orb, score weight)
const ASPECT_TABLE: [(AspectKind, f64, f64, f64); 5] = [
    (AspectKind::Conjunction, 0.0, 8.0, 10.0),
    (AspectKind::Sextile, 60.0, 4.0, 8.0),
    (AspectKind::Square, 90.0, 6.0, -12.0),
    (AspectKind::Trine, 120.0, 7.0, 12.0),
    (AspectKind::Opposition, 180.0, 8.0, -14.0),
];

impl AspectKind {
    /// All kinds in the order they are tried when classifying an angle
    pub const PRIORITY: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Sextile,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Opposition,
    ];

    pub fn exact_angle(self) -> f64 {
        ASPECT_TABLE[self as usize].1
    }

    pub fn default_orb(self) -> f64 {
        ASPECT_TABLE[self as usize].2
    }

    /// Contribution of an exact aspect to a body's strength score
    pub fn weight(self) -> f64 {
        ASPECT_TABLE[self as usize].3
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Opposition => "opposition",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification of a single angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectCore {
    pub kind: AspectKind,
    /// Exact angle for this aspect (0, 60, 90, 120, 180)
    pub exact_angle: f64,
    /// Deviation from the exact angle
    pub orb: f64,
    /// Within 0.1 degrees of exact
    pub is_exact: bool,
}

/// An aspect between two placed bodies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aspect {
    pub body_a: Body,
    pub body_b: Body,
    pub kind: AspectKind,
    pub orb: f64,
    pub is_exact: bool,
    /// Either body is retrograde
    pub is_retrograde: bool,
}

impl Aspect {
    pub fn touches(&self, body: &Body) -> bool {
        &self.body_a == body || &self.body_b == body
    }

    /// The other body of the pair, if `body` is part of it
    pub fn partner_of(&self, body: &Body) -> Option<&Body> {
        if &self.body_a == body {
            Some(&self.body_b)
        } else if &self.body_b == body {
            Some(&self.body_a)
        } else {
            None
        }
    }
}

/// Settings for aspect calculations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AspectSettings {
    /// Max orb overrides per kind; kinds not listed use their default orb
    pub orb_settings: HashMap<AspectKind, f64>,
}

impl AspectSettings {
    pub fn orb_for(&self, kind: AspectKind) -> f64 {
        self.orb_settings
            .get(&kind)
            .copied()
            .unwrap_or_else(|| kind.default_orb())
    }

    pub fn with_orb(mut self, kind: AspectKind, orb: f64) -> Self {
        self.orb_settings.insert(kind, orb);
        self
    }
}
