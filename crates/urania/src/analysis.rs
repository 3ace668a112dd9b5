//! One-call analysis: parse both texts, derive the overlay, score its ruler.

use log::info;
use serde::Serialize;

use crate::aspects::{Aspect, AspectCalculator, AspectSettings};
use crate::chart::{CuspDefaults, CuspMap, Placements};
use crate::error::{Result, UraniaError};
use crate::parser::{parse_cusps, parse_placements, LineNote, SignError};
use crate::western::{resolve_ruler, score, RulerResolution, RulershipSystem, ScoreBreakdown, StrengthLabel};
use crate::zodiac::{overlay_sign, House, HouseTopic, Sign};

/// Scalar inputs of an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisParams {
    pub root_house: House,
    /// Count from the root house, the root itself being 1
    pub derived_n: u8,
    pub system: RulershipSystem,
    pub fallback: bool,
}

impl AnalysisParams {
    pub fn new(root_house: u32, derived_n: u32, system: RulershipSystem, fallback: bool) -> Result<Self> {
        let root_house = House::new(root_house)?;
        if !(1..=12).contains(&derived_n) {
            return Err(UraniaError::InvalidDerivedIndex(derived_n));
        }
        Ok(Self {
            root_house,
            derived_n: derived_n as u8,
            system,
            fallback,
        })
    }
}

impl Default for AnalysisParams {
    // Crisis topic (8th house), second derived house
    fn default() -> Self {
        Self {
            root_house: HouseTopic::Crisis.root_house(),
            derived_n: 2,
            system: RulershipSystem::Modern,
            fallback: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisDiagnostics {
    pub noise_ignored: Vec<LineNote>,
    pub format_ignored: Vec<LineNote>,
    pub sign_errors: Vec<SignError>,
    pub cusp_errors: Vec<LineNote>,
}

/// Everything the presentation layer needs to render a result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub params: AnalysisParams,
    pub derived_house: House,
    pub root_sign: Sign,
    /// The root sign came from the caller's defaults, not the cusp text
    pub root_sign_defaulted: bool,
    pub overlay_sign: Sign,
    pub ruler: RulerResolution,
    pub placements: Placements,
    pub cusps: CuspMap,
    pub aspects: Vec<Aspect>,
    /// `None` when the ruler is not placed in the chart
    pub score: Option<ScoreBreakdown>,
    pub label: Option<StrengthLabel>,
    pub diagnostics: AnalysisDiagnostics,
}

/// Runs the parse -> derive -> aspect -> score pipeline
#[derive(Default)]
pub struct ChartAnalyzer {
    calculator: AspectCalculator,
    aspect_settings: AspectSettings,
    cusp_defaults: CuspDefaults,
}

impl ChartAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aspect_settings(mut self, settings: AspectSettings) -> Self {
        self.aspect_settings = settings;
        self
    }

    pub fn with_cusp_defaults(mut self, defaults: CuspDefaults) -> Self {
        self.cusp_defaults = defaults;
        self
    }

    pub fn analyze(&self, placement_text: &str, cusp_text: &str, params: &AnalysisParams) -> AnalysisReport {
        let placement_parse = parse_placements(placement_text);
        let cusp_parse = parse_cusps(cusp_text);

        let root = params.root_house;
        let (root_sign, root_sign_defaulted) = match cusp_parse.cusps.get(root) {
            Some(sign) => (sign, false),
            None => (self.cusp_defaults.get(root), true),
        };
        let derived = root.derived(params.derived_n);
        let overlay = overlay_sign(root_sign, params.derived_n);

        let placements: Placements = placement_parse.placements;
        let aspects = self.calculator.compute_aspects(&placements, &self.aspect_settings);

        let ruler = resolve_ruler(overlay, params.system, &placements, params.fallback);
        // Dignity is judged under the system the ruler was resolved from.
        let breakdown = score(&ruler.ruler, &placements, &aspects, ruler.system);

        match &breakdown {
            Some(b) => info!(
                "root {} -> house {}, {} overlay, ruler {} ({}) scores {:.1}",
                root, derived, overlay, ruler.ruler, ruler.system, b.total
            ),
            None => info!(
                "root {} -> house {}, {} overlay, ruler {} ({}) is not placed",
                root, derived, overlay, ruler.ruler, ruler.system
            ),
        }

        AnalysisReport {
            params: *params,
            derived_house: derived,
            root_sign,
            root_sign_defaulted,
            overlay_sign: overlay,
            ruler,
            placements,
            cusps: cusp_parse.cusps,
            aspects,
            label: breakdown.as_ref().map(ScoreBreakdown::label),
            score: breakdown,
            diagnostics: AnalysisDiagnostics {
                noise_ignored: placement_parse.diagnostics.noise_ignored,
                format_ignored: placement_parse.diagnostics.format_ignored,
                sign_errors: placement_parse.diagnostics.sign_errors,
                cusp_errors: cusp_parse.errors,
            },
        }
    }
}

/// Analyze with default aspect orbs and natural cusp defaults
pub fn analyze(placement_text: &str, cusp_text: &str, params: &AnalysisParams) -> AnalysisReport {
    ChartAnalyzer::new().analyze(placement_text, cusp_text, params)
}
