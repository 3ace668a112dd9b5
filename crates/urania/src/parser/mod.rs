pub mod cusps;
pub mod diagnostics;
pub(crate) mod grammar;
pub mod placements;

pub use cusps::{parse_cusps, CuspParse};
pub use diagnostics::{LineNote, PlacementDiagnostics, SignError};
pub use placements::{is_noise_line, parse_placements, PlacementParse};
