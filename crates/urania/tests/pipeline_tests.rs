use urania::aspects::{AspectKind, AspectSettings};
use urania::chart::CuspDefaults;
use urania::western::{resolve_ruler, score, RulershipSystem, StrengthLabel};
use urania::{analyze, AnalysisParams, Body, ChartAnalyzer, House, Sign};

fn params(root: u32, n: u32, system: RulershipSystem, fallback: bool) -> AnalysisParams {
    AnalysisParams::new(root, n, system, fallback).unwrap()
}

#[test]
fn test_angular_ruler_without_dignity_or_aspects() {
    // Cancer on the 8th, second derived house carries Leo, ruled by the Sun.
    let report = analyze(
        "Sun Aries 10°00' 1",
        "8 Cancer",
        &params(8, 2, RulershipSystem::Modern, true),
    );

    assert_eq!(report.derived_house, House::new(9).unwrap());
    assert_eq!(report.overlay_sign, Sign::Leo);
    assert_eq!(report.ruler.ruler, Body::Sun);
    assert!(report.aspects.is_empty());

    let score = report.score.unwrap();
    assert_eq!(score.base, 50.0);
    assert_eq!(score.house, 12.0);
    assert_eq!(score.rulership, 0.0);
    assert_eq!(score.aspects, 0.0);
    assert_eq!(score.total, 62.0);
    assert_eq!(report.label, Some(StrengthLabel::Moderate));
}

#[test]
fn test_fallback_to_placed_ruler() {
    let report = analyze(
        "Jupiter Pisces 5°00' 12",
        "8 Akrep",
        &params(8, 5, RulershipSystem::Modern, true),
    );

    assert_eq!(report.derived_house, House::new(12).unwrap());
    assert_eq!(report.overlay_sign, Sign::Pisces);
    assert_eq!(report.ruler.ruler, Body::Jupiter);
    assert_eq!(report.ruler.system, RulershipSystem::Traditional);
    assert!(report.ruler.fallback_used);

    // Jupiter rules Pisces traditionally, cadent house adds nothing.
    let score = report.score.unwrap();
    assert_eq!(score.rulership, 10.0);
    assert_eq!(score.total, 60.0);
}

#[test]
fn test_unplaced_ruler_without_fallback() {
    let report = analyze(
        "Jupiter Pisces 5°00' 12",
        "8 Akrep",
        &params(8, 5, RulershipSystem::Modern, false),
    );
    assert_eq!(report.ruler.ruler, Body::Neptune);
    assert!(!report.ruler.fallback_used);
    assert!(report.score.is_none());
    assert!(report.label.is_none());
}

#[test]
fn test_resolver_and_score_directly() {
    let parsed = urania::parser::parse_placements("Jüpiter Balık 5°00' 12");
    assert!(score(&Body::Neptune, &parsed.placements, &[], RulershipSystem::Modern).is_none());

    let ruler = resolve_ruler(Sign::Pisces, RulershipSystem::Modern, &parsed.placements, true);
    assert_eq!(ruler.ruler, Body::Jupiter);
    assert!(ruler.fallback_used);
}

#[test]
fn test_score_is_clamped() {
    // Saturn in its own sign on an angle, trined exactly twice.
    let report = analyze(
        "Saturn Capricorn 10°00' 10\nSun Taurus 10°00' 2\nMoon Virgo 10°00' 6",
        "1 Aries",
        &params(1, 10, RulershipSystem::Modern, true),
    );
    assert_eq!(report.overlay_sign, Sign::Capricorn);
    assert_eq!(report.ruler.ruler, Body::Saturn);

    let score = report.score.unwrap();
    assert_eq!(score.raw(), 50.0 + 12.0 + 10.0 + 24.0);
    assert_eq!(score.total, 96.0);

    let heavy = analyze(
        "Mars Libra 0°00' 12\nSun Aries 0°00' 6\nVenus Aries 0°00' 6\nMoon Cancer 0°00' 3\nSaturn Capricorn 0°00' 9",
        "1 Aries",
        &params(1, 1, RulershipSystem::Modern, true),
    );
    let score = heavy.score.unwrap();
    assert_eq!(heavy.ruler.ruler, Body::Mars);
    assert!(score.raw() < 0.0);
    assert_eq!(score.total, 0.0);
    assert_eq!(heavy.label, Some(StrengthLabel::Intense));
}

#[test]
fn test_root_sign_defaults_and_custom_defaults() {
    let p = params(1, 3, RulershipSystem::Modern, true);

    let natural = analyze("", "", &p);
    assert!(natural.root_sign_defaulted);
    assert_eq!(natural.root_sign, Sign::Aries);
    assert_eq!(natural.overlay_sign, Sign::Gemini);

    let custom = ChartAnalyzer::new()
        .with_cusp_defaults(CuspDefaults::from_ascendant(Sign::Virgo))
        .analyze("", "", &p);
    assert_eq!(custom.root_sign, Sign::Virgo);
    assert_eq!(custom.overlay_sign, Sign::Scorpio);
}

#[test]
fn test_orb_settings_flow_into_aspects() {
    let text = "Sun Aries 0°00' 1\nMoon Gemini 3°00' 3";
    let p = AnalysisParams::default();

    let wide = analyze(text, "", &p);
    assert_eq!(wide.aspects.len(), 1);
    assert_eq!(wide.aspects[0].kind, AspectKind::Sextile);

    let tight = ChartAnalyzer::new()
        .with_aspect_settings(AspectSettings::default().with_orb(AspectKind::Sextile, 2.0))
        .analyze(text, "", &p);
    assert!(tight.aspects.is_empty());
}

#[test]
fn test_diagnostics_are_collected() {
    let report = analyze(
        "Moon phase: Full Moon\nSun Leo twelve degrees\nVenus Xyzzy 1°00' 1",
        "3 ???\n8 Scorpio",
        &AnalysisParams::default(),
    );
    assert_eq!(report.diagnostics.noise_ignored.len(), 1);
    assert_eq!(report.diagnostics.format_ignored.len(), 1);
    assert_eq!(report.diagnostics.sign_errors.len(), 1);
    assert_eq!(report.diagnostics.cusp_errors.len(), 1);
    assert!(report.placements.is_empty());
    assert!(!report.root_sign_defaulted);
}

#[test]
fn test_report_serializes() {
    let report = analyze(
        "Sun Aries 10°00' 1",
        "8 Cancer",
        &params(8, 2, RulershipSystem::Modern, true),
    );
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["overlay_sign"], "leo");
    assert_eq!(json["ruler"]["ruler"], "sun");
    assert_eq!(json["label"], "moderate");
    assert_eq!(json["placements"]["sun"]["degreeInSign"], 10.0);
    assert_eq!(json["cusps"]["8"], "cancer");
}
