//! Sign rulers for Western astrology.
//!
//! Maps zodiac signs to their planetary rulers (traditional and modern).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, UraniaError};
use crate::zodiac::{Body, Sign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulershipSystem {
    /// Outer planets rule Scorpio, Aquarius and Pisces
    Modern,
    /// Classical seven-planet scheme
    Traditional,
}

// Modern rulerships include outer planets
static MODERN_RULERS: [Body; 12] = [
    Body::Mars,    // Aries
    Body::Venus,   // Taurus
    Body::Mercury, // Gemini
    Body::Moon,    // Cancer
    Body::Sun,     // Leo
    Body::Mercury, // Virgo
    Body::Venus,   // Libra
    Body::Pluto,   // Scorpio (modern)
    Body::Jupiter, // Sagittarius
    Body::Saturn,  // Capricorn
    Body::Uranus,  // Aquarius (modern)
    Body::Neptune, // Pisces (modern)
];

static TRADITIONAL_RULERS: [Body; 12] = [
    Body::Mars,    // Aries
    Body::Venus,   // Taurus
    Body::Mercury, // Gemini
    Body::Moon,    // Cancer
    Body::Sun,     // Leo
    Body::Mercury, // Virgo
    Body::Venus,   // Libra
    Body::Mars,    // Scorpio (traditional)
    Body::Jupiter, // Sagittarius
    Body::Saturn,  // Capricorn
    Body::Saturn,  // Aquarius (traditional)
    Body::Jupiter, // Pisces (traditional)
];

impl RulershipSystem {
    pub fn other(self) -> RulershipSystem {
        match self {
            RulershipSystem::Modern => RulershipSystem::Traditional,
            RulershipSystem::Traditional => RulershipSystem::Modern,
        }
    }

    fn table(self) -> &'static [Body; 12] {
        match self {
            RulershipSystem::Modern => &MODERN_RULERS,
            RulershipSystem::Traditional => &TRADITIONAL_RULERS,
        }
    }

    /// Ruler of `sign` under this system
    pub fn ruler(self, sign: Sign) -> &'static Body {
        &self.table()[sign.index()]
    }

    /// Signs that `body` rules under this system (empty for non-rulers)
    pub fn signs_ruled_by(self, body: &Body) -> Vec<Sign> {
        Sign::ALL
            .iter()
            .copied()
            .filter(|sign| self.ruler(*sign) == body)
            .collect()
    }

    pub fn name(self) -> &'static str {
        match self {
            RulershipSystem::Modern => "modern",
            RulershipSystem::Traditional => "traditional",
        }
    }
}

impl Default for RulershipSystem {
    fn default() -> Self {
        RulershipSystem::Modern
    }
}

impl fmt::Display for RulershipSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RulershipSystem {
    type Err = UraniaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "modern" => Ok(RulershipSystem::Modern),
            "traditional" | "classical" | "klasik" => Ok(RulershipSystem::Traditional),
            _ => Err(UraniaError::UnknownRulershipSystem {
                name: s.to_string(),
                valid: vec!["modern".to_string(), "traditional".to_string()],
            }),
        }
    }
}

/// Ruler of `sign` under `system`
pub fn get_sign_ruler(sign: Sign, system: RulershipSystem) -> Body {
    system.ruler(sign).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_sign_ruler_traditional() {
        let t = RulershipSystem::Traditional;
        assert_eq!(get_sign_ruler(Sign::Aries, t), Body::Mars);
        assert_eq!(get_sign_ruler(Sign::Cancer, t), Body::Moon);
        assert_eq!(get_sign_ruler(Sign::Leo, t), Body::Sun);
        assert_eq!(get_sign_ruler(Sign::Scorpio, t), Body::Mars);
        assert_eq!(get_sign_ruler(Sign::Pisces, t), Body::Jupiter);
    }

    #[test]
    fn test_get_sign_ruler_modern() {
        let m = RulershipSystem::Modern;
        assert_eq!(get_sign_ruler(Sign::Scorpio, m), Body::Pluto);
        assert_eq!(get_sign_ruler(Sign::Aquarius, m), Body::Uranus);
        assert_eq!(get_sign_ruler(Sign::Pisces, m), Body::Neptune);
    }

    #[test]
    fn test_signs_ruled_by() {
        let t = RulershipSystem::Traditional;
        assert_eq!(t.signs_ruled_by(&Body::Mars), vec![Sign::Aries, Sign::Scorpio]);
        assert_eq!(t.signs_ruled_by(&Body::Saturn), vec![Sign::Capricorn, Sign::Aquarius]);
        assert!(t.signs_ruled_by(&Body::Pluto).is_empty());
        assert_eq!(RulershipSystem::Modern.signs_ruled_by(&Body::Pluto), vec![Sign::Scorpio]);
    }

    #[test]
    fn test_parse_system() {
        assert_eq!("Modern".parse::<RulershipSystem>().unwrap(), RulershipSystem::Modern);
        assert_eq!("klasik".parse::<RulershipSystem>().unwrap(), RulershipSystem::Traditional);
        assert!("vedic".parse::<RulershipSystem>().is_err());
        assert_eq!(RulershipSystem::Modern.other(), RulershipSystem::Traditional);
    }
}
