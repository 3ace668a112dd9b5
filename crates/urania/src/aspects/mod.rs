pub mod calculator;
pub mod types;

pub use calculator::{angular_distance, AspectCalculator};
pub use types::{Aspect, AspectCore, AspectKind, AspectSettings};
