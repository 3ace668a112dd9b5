use log::debug;
use serde::Serialize;

use super::rulers::RulershipSystem;
use crate::chart::Placements;
use crate::zodiac::{Body, Sign};

/// The body chosen to rule the overlay sign and the system it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RulerResolution {
    pub ruler: Body,
    pub system: RulershipSystem,
    pub fallback_used: bool,
}

/// Pick the ruler of `sign`, preferring one that is actually placed.
///
/// The primary system's ruler is used when placed. Otherwise, if fallback is
/// enabled and the other system's ruler is placed, that one is returned with
/// `fallback_used`. If neither is placed the primary ruler is returned
/// anyway, and scoring it will come back undefined.
pub fn resolve_ruler(
    sign: Sign,
    primary: RulershipSystem,
    placements: &Placements,
    fallback_enabled: bool,
) -> RulerResolution {
    let ruler = primary.ruler(sign);
    if placements.contains_key(ruler) {
        return RulerResolution {
            ruler: ruler.clone(),
            system: primary,
            fallback_used: false,
        };
    }

    if fallback_enabled {
        let alternate = primary.other();
        let alt_ruler = alternate.ruler(sign);
        if alt_ruler != ruler && placements.contains_key(alt_ruler) {
            debug!("{} ruler {} not placed, falling back to {} ruler {}", primary, ruler, alternate, alt_ruler);
            return RulerResolution {
                ruler: alt_ruler.clone(),
                system: alternate,
                fallback_used: true,
            };
        }
    }

    RulerResolution {
        ruler: ruler.clone(),
        system: primary,
        fallback_used: false,
    }
}
