//! Derived-house analysis of a textual chart.
//!
//! Placement and cusp text go in; the parsers normalize them, the zodiac
//! algebra picks the derived house and overlay sign, and the overlay's ruler
//! is scored from its house, dignity and aspects.

pub mod analysis;
pub mod aspects;
pub mod chart;
pub mod error;
pub mod parser;
pub mod western;
pub mod zodiac;

pub use analysis::{analyze, AnalysisDiagnostics, AnalysisParams, AnalysisReport, ChartAnalyzer};
pub use error::UraniaError;
pub use zodiac::{Body, House, HouseTopic, Sign};
