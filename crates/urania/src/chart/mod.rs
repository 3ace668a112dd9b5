pub mod types;

pub use types::{CuspDefaults, CuspMap, Placement, Placements};
