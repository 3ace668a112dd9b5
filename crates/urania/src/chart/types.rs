use serde::Serialize;
use std::collections::BTreeMap;

use crate::zodiac::{Body, House, Sign};

/// A body's position as read from one chart line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    body: Body,
    sign: Sign,
    /// Degree within the sign, 0 <= x < 30
    #[serde(rename = "degreeInSign")]
    degree_in_sign: f64,
    house: House,
    /// Ecliptic longitude, 0 <= x < 360
    longitude: f64,
    retrograde: bool,
}

impl Placement {
    /// `degree_in_sign` is expected in [0, 30); values outside are wrapped
    /// into the sign.
    pub fn new(body: Body, sign: Sign, degree_in_sign: f64, house: House, retrograde: bool) -> Self {
        let degree_in_sign = degree_in_sign.rem_euclid(30.0);
        Self {
            longitude: sign.start_longitude() + degree_in_sign,
            body,
            sign,
            degree_in_sign,
            house,
            retrograde,
        }
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn degree_in_sign(&self) -> f64 {
        self.degree_in_sign
    }

    pub fn house(&self) -> House {
        self.house
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn is_retrograde(&self) -> bool {
        self.retrograde
    }
}

/// Body -> placement, ordered by canonical body order
pub type Placements = BTreeMap<Body, Placement>;

/// House cusp signs read from input. May be incomplete.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CuspMap {
    cusps: BTreeMap<House, Sign>,
}

impl CuspMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later inserts for the same house replace earlier ones.
    pub fn insert(&mut self, house: House, sign: Sign) -> Option<Sign> {
        self.cusps.insert(house, sign)
    }

    pub fn get(&self, house: House) -> Option<Sign> {
        self.cusps.get(&house).copied()
    }

    pub fn sign_or(&self, house: House, default: Sign) -> Sign {
        self.get(house).unwrap_or(default)
    }

    /// Cusp sign of every house, filling gaps from `defaults`
    pub fn resolve(&self, defaults: &CuspDefaults) -> [Sign; 12] {
        let mut out = defaults.signs();
        for (house, sign) in &self.cusps {
            out[house.index()] = *sign;
        }
        out
    }

    pub fn len(&self) -> usize {
        self.cusps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cusps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (House, Sign)> + '_ {
        self.cusps.iter().map(|(h, s)| (*h, *s))
    }
}

/// Caller-supplied cusp signs for houses missing from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CuspDefaults([Sign; 12]);

impl CuspDefaults {
    /// House h defaults to the h-th sign (1st house Aries, ...)
    pub fn natural() -> Self {
        Self(Sign::ALL)
    }

    /// Consecutive signs starting from the ascendant sign, as in whole-sign houses
    pub fn from_ascendant(asc: Sign) -> Self {
        let mut signs = Sign::ALL;
        for (i, slot) in signs.iter_mut().enumerate() {
            *slot = asc.offset(i as i64);
        }
        Self(signs)
    }

    pub fn get(&self, house: House) -> Sign {
        self.0[house.index()]
    }

    pub fn signs(&self) -> [Sign; 12] {
        self.0
    }
}

impl Default for CuspDefaults {
    fn default() -> Self {
        Self::natural()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longitude_from_sign_and_degree() {
        let p = Placement::new(Body::Sun, Sign::Sagittarius, 4.5, House::new(7).unwrap(), false);
        assert_eq!(p.longitude(), 244.5);
        assert!(p.longitude() < 360.0);
    }

    #[test]
    fn test_cusp_resolve_fills_gaps() {
        let mut cusps = CuspMap::new();
        cusps.insert(House::new(1).unwrap(), Sign::Leo);
        cusps.insert(House::new(1).unwrap(), Sign::Virgo);
        let resolved = cusps.resolve(&CuspDefaults::natural());
        assert_eq!(resolved[0], Sign::Virgo);
        assert_eq!(resolved[1], Sign::Taurus);
        assert_eq!(cusps.len(), 1);
    }

    #[test]
    fn test_defaults_from_ascendant() {
        let d = CuspDefaults::from_ascendant(Sign::Scorpio);
        assert_eq!(d.get(House::new(1).unwrap()), Sign::Scorpio);
        assert_eq!(d.get(House::new(5).unwrap()), Sign::Pisces);
    }
}
