//! The twelve zodiac signs and their alias vocabulary.
//!
//! A sign's identity is its ordinal in the fixed cycle Aries (0) .. Pisces (11).
//! Chart exports name signs in Turkish, ASCII-transliterated Turkish, English,
//! three-letter abbreviations or single glyphs; all of them resolve here.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::fold;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Ordinal position in the cycle (0-11)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Sign at `index`, wrapping modulo 12
    pub fn from_index(index: usize) -> Sign {
        Self::ALL[index % 12]
    }

    /// Sign containing an ecliptic longitude; any finite value is accepted.
    pub fn from_longitude(longitude: f64) -> Sign {
        let lon = longitude.rem_euclid(360.0);
        Self::from_index((lon / 30.0) as usize)
    }

    /// Sign reached by stepping `steps` positions forward (negative steps go back).
    pub fn offset(self, steps: i64) -> Sign {
        let idx = (self.index() as i64 + steps).rem_euclid(12);
        Self::from_index(idx as usize)
    }

    pub fn opposite(self) -> Sign {
        self.offset(6)
    }

    /// Longitude of the sign's first degree
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * 30.0
    }

    pub fn name(self) -> &'static str {
        SIGN_NAMES[self.index()].0
    }

    pub fn turkish_name(self) -> &'static str {
        SIGN_NAMES[self.index()].1
    }

    pub fn glyph(self) -> &'static str {
        SIGN_NAMES[self.index()].2
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// (english, turkish, glyph) in cycle order
const SIGN_NAMES: [(&str, &str, &str); 12] = [
    ("Aries", "Koç", "♈"),
    ("Taurus", "Boğa", "♉"),
    ("Gemini", "İkizler", "♊"),
    ("Cancer", "Yengeç", "♋"),
    ("Leo", "Aslan", "♌"),
    ("Virgo", "Başak", "♍"),
    ("Libra", "Terazi", "♎"),
    ("Scorpio", "Akrep", "♏"),
    ("Sagittarius", "Yay", "♐"),
    ("Capricorn", "Oğlak", "♑"),
    ("Aquarius", "Kova", "♒"),
    ("Pisces", "Balık", "♓"),
];

const SIGN_ALIASES: &[(&str, Sign)] = &[
    // Turkish, canonical and ASCII spellings
    ("Koç", Sign::Aries),
    ("Koc", Sign::Aries),
    ("Boğa", Sign::Taurus),
    ("Boga", Sign::Taurus),
    ("İkizler", Sign::Gemini),
    ("Ikizler", Sign::Gemini),
    ("Yengeç", Sign::Cancer),
    ("Yengec", Sign::Cancer),
    ("Aslan", Sign::Leo),
    ("Başak", Sign::Virgo),
    ("Basak", Sign::Virgo),
    ("Terazi", Sign::Libra),
    ("Akrep", Sign::Scorpio),
    ("Yay", Sign::Sagittarius),
    ("Oğlak", Sign::Capricorn),
    ("Oglak", Sign::Capricorn),
    ("Kova", Sign::Aquarius),
    ("Balık", Sign::Pisces),
    ("Balik", Sign::Pisces),
    // English
    ("Aries", Sign::Aries),
    ("Taurus", Sign::Taurus),
    ("Gemini", Sign::Gemini),
    ("Cancer", Sign::Cancer),
    ("Leo", Sign::Leo),
    ("Virgo", Sign::Virgo),
    ("Libra", Sign::Libra),
    ("Scorpio", Sign::Scorpio),
    ("Sagittarius", Sign::Sagittarius),
    ("Capricorn", Sign::Capricorn),
    ("Aquarius", Sign::Aquarius),
    ("Pisces", Sign::Pisces),
    // Common export abbreviations
    ("Ari", Sign::Aries),
    ("Tau", Sign::Taurus),
    ("Gem", Sign::Gemini),
    ("Can", Sign::Cancer),
    ("Vir", Sign::Virgo),
    ("Lib", Sign::Libra),
    ("Sco", Sign::Scorpio),
    ("Sag", Sign::Sagittarius),
    ("Cap", Sign::Capricorn),
    ("Aqu", Sign::Aquarius),
    ("Pis", Sign::Pisces),
    // Glyphs
    ("♈", Sign::Aries),
    ("♉", Sign::Taurus),
    ("♊", Sign::Gemini),
    ("♋", Sign::Cancer),
    ("♌", Sign::Leo),
    ("♍", Sign::Virgo),
    ("♎", Sign::Libra),
    ("♏", Sign::Scorpio),
    ("♐", Sign::Sagittarius),
    ("♑", Sign::Capricorn),
    ("♒", Sign::Aquarius),
    ("♓", Sign::Pisces),
    // Canonical ids, so normalizing `Sign::name()` output is a no-op
    ("aries", Sign::Aries),
    ("taurus", Sign::Taurus),
    ("gemini", Sign::Gemini),
    ("cancer", Sign::Cancer),
    ("leo", Sign::Leo),
    ("virgo", Sign::Virgo),
    ("libra", Sign::Libra),
    ("scorpio", Sign::Scorpio),
    ("sagittarius", Sign::Sagittarius),
    ("capricorn", Sign::Capricorn),
    ("aquarius", Sign::Aquarius),
    ("pisces", Sign::Pisces),
];

lazy_static::lazy_static! {
    static ref EXACT: HashMap<&'static str, Sign> = SIGN_ALIASES.iter().copied().collect();
    static ref FOLDED: HashMap<String, Sign> = SIGN_ALIASES
        .iter()
        .map(|(alias, sign)| (fold(alias), *sign))
        .collect();
}

/// Every alias spelling, longest first. Used to build the compact-line grammar.
pub(crate) fn sign_alias_spellings() -> Vec<&'static str> {
    let mut spellings: Vec<&'static str> = SIGN_ALIASES.iter().map(|(alias, _)| *alias).collect();
    spellings.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    spellings.dedup();
    spellings
}

/// Resolve a sign token. Exact alias first, then a case- and
/// diacritic-insensitive match against the same table.
pub fn normalize_sign(token: &str) -> Option<Sign> {
    let trimmed = token
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':' | '.' | '(' | ')' | '\u{FE0E}' | '\u{FE0F}'));
    if trimmed.is_empty() {
        return None;
    }
    if let Some(sign) = EXACT.get(trimmed) {
        return Some(*sign);
    }
    FOLDED.get(&fold(trimmed)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_six_away() {
        for sign in Sign::ALL {
            assert_eq!(sign.opposite().index(), (sign.index() + 6) % 12);
            assert_eq!(sign.opposite().opposite(), sign);
        }
    }

    #[test]
    fn test_from_longitude_wraps() {
        assert_eq!(Sign::from_longitude(0.0), Sign::Aries);
        assert_eq!(Sign::from_longitude(359.9), Sign::Pisces);
        assert_eq!(Sign::from_longitude(370.0), Sign::Aries);
        assert_eq!(Sign::from_longitude(-10.0), Sign::Pisces);
    }

    #[test]
    fn test_normalize_sign_variants() {
        assert_eq!(normalize_sign("Akrep"), Some(Sign::Scorpio));
        assert_eq!(normalize_sign("akrep"), Some(Sign::Scorpio));
        assert_eq!(normalize_sign("BALIK"), Some(Sign::Pisces));
        assert_eq!(normalize_sign("ikizler"), Some(Sign::Gemini));
        assert_eq!(normalize_sign("♐"), Some(Sign::Sagittarius));
        assert_eq!(normalize_sign("♐\u{FE0F}"), Some(Sign::Sagittarius));
        assert_eq!(normalize_sign("♏\u{FE0E}"), Some(Sign::Scorpio));
        assert_eq!(normalize_sign("Sagittarius,"), Some(Sign::Sagittarius));
        assert_eq!(normalize_sign("Ophiuchus"), None);
        assert_eq!(normalize_sign(""), None);
    }

    #[test]
    fn test_normalize_sign_is_idempotent_on_names() {
        for sign in Sign::ALL {
            assert_eq!(normalize_sign(sign.name()), Some(sign));
            assert_eq!(normalize_sign(sign.turkish_name()), Some(sign));
            assert_eq!(normalize_sign(sign.glyph()), Some(sign));
        }
    }
}
