use log::debug;

use crate::aspects::types::{Aspect, AspectCore, AspectKind, AspectSettings};
use crate::chart::{Placement, Placements};

/// Circular distance between two longitudes, in [0, 180]
pub fn angular_distance(lon_a: f64, lon_b: f64) -> f64 {
    let d = (lon_a - lon_b).abs() % 360.0;
    d.min(360.0 - d)
}

/// Aspect calculator
pub struct AspectCalculator;

impl AspectCalculator {
    /// Create a new aspect calculator
    pub fn new() -> Self {
        Self
    }

    /// Classify the angle between two longitudes.
    ///
    /// Kinds are tried in `AspectKind::PRIORITY` order and the first one
    /// within its orb wins, even if a later kind would be closer to exact.
    pub fn calculate_aspect(&self, lon1: f64, lon2: f64, settings: &AspectSettings) -> Option<AspectCore> {
        let angle_diff = angular_distance(lon1, lon2);

        for kind in AspectKind::PRIORITY {
            let orb_value = (angle_diff - kind.exact_angle()).abs();
            if orb_value <= settings.orb_for(kind) {
                return Some(AspectCore {
                    kind,
                    exact_angle: kind.exact_angle(),
                    orb: orb_value,
                    is_exact: orb_value < 0.1,
                });
            }
        }

        None
    }

    fn pair_aspect(&self, a: &Placement, b: &Placement, settings: &AspectSettings) -> Option<Aspect> {
        let core = self.calculate_aspect(a.longitude(), b.longitude(), settings)?;
        Some(Aspect {
            body_a: a.body().clone(),
            body_b: b.body().clone(),
            kind: core.kind,
            orb: core.orb,
            is_exact: core.is_exact,
            is_retrograde: a.is_retrograde() || b.is_retrograde(),
        })
    }

    /// Aspects between every unordered pair of placed bodies, in canonical
    /// body order. Fewer than two placements yields no aspects.
    pub fn compute_aspects(&self, placements: &Placements, settings: &AspectSettings) -> Vec<Aspect> {
        let bodies: Vec<&Placement> = placements.values().collect();

        // Early exit if not enough planets
        if bodies.len() < 2 {
            return Vec::new();
        }

        let mut aspects = Vec::new();
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                if let Some(aspect) = self.pair_aspect(bodies[i], bodies[j], settings) {
                    aspects.push(aspect);
                }
            }
        }

        debug!("{} aspects among {} bodies", aspects.len(), bodies.len());
        aspects
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}
