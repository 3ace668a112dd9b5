pub mod dignities;
pub mod resolver;
pub mod rulers;
pub mod strength;

pub use dignities::{get_dignity, rulership_weight, DignityType};
pub use resolver::{resolve_ruler, RulerResolution};
pub use rulers::{get_sign_ruler, RulershipSystem};
pub use strength::{aspect_weight, house_weight, score, ScoreBreakdown, StrengthLabel};
