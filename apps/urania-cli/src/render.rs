use std::fmt::Write;
use urania::AnalysisReport;

/// Plain-text summary of a report, one fact per line.
pub(crate) fn summary(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let p = &report.params;

    let _ = writeln!(
        out,
        "Root house {} ({}{}), derived house {} (n={})",
        p.root_house,
        report.root_sign,
        if report.root_sign_defaulted { ", default" } else { "" },
        report.derived_house,
        p.derived_n
    );
    let _ = writeln!(out, "Overlay sign: {} ({})", report.overlay_sign, report.overlay_sign.turkish_name());

    let ruler = &report.ruler;
    let _ = writeln!(
        out,
        "Ruler: {} ({}{})",
        ruler.ruler,
        ruler.system,
        if ruler.fallback_used { ", fallback" } else { "" }
    );

    match (&report.score, report.label) {
        (Some(score), Some(label)) => {
            let _ = writeln!(
                out,
                "Score: {:.1} {} (base {:.0}, house {:+.0}, rulership {:+.0}, aspects {:+.1})",
                score.total, label, score.base, score.house, score.rulership, score.aspects
            );
        }
        _ => {
            let _ = writeln!(out, "Score: undefined, {} is not placed in the chart", ruler.ruler);
        }
    }

    let touching: Vec<_> = report.aspects.iter().filter(|a| a.touches(&ruler.ruler)).collect();
    if !touching.is_empty() {
        let _ = writeln!(out, "Aspects to {}:", ruler.ruler);
        for aspect in touching {
            let partner = aspect.partner_of(&ruler.ruler).map_or_else(String::new, |b| b.to_string());
            let _ = writeln!(
                out,
                "  {} {} orb {:.2}{}{}",
                aspect.kind,
                partner,
                aspect.orb,
                if aspect.is_exact { " exact" } else { "" },
                if aspect.is_retrograde { " (R)" } else { "" }
            );
        }
    }

    let d = &report.diagnostics;
    let _ = writeln!(
        out,
        "Placements: {}, cusps: {}, ignored: {} noise / {} unrecognized",
        report.placements.len(),
        report.cusps.len(),
        d.noise_ignored.len(),
        d.format_ignored.len()
    );
    for note in &d.format_ignored {
        let _ = writeln!(out, "  line {}: not understood: {}", note.line, note.text);
    }
    for err in &d.sign_errors {
        let _ = writeln!(out, "  line {}: unknown sign {:?}", err.line, err.token);
    }
    for note in &d.cusp_errors {
        let _ = writeln!(out, "  cusp line {}: no sign found: {}", note.line, note.text);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use urania::{analyze, AnalysisParams};

    #[test]
    fn test_summary_with_score() {
        let params = AnalysisParams::new(8, 2, urania::western::RulershipSystem::Modern, true).unwrap();
        let text = summary(&analyze("Sun Aries 10°00' 1", "8 Cancer", &params));
        assert!(text.contains("Overlay sign: Leo (Aslan)"));
        assert!(text.contains("Ruler: sun (modern)"));
        assert!(text.contains("Score: 62.0 moderate"));
    }

    #[test]
    fn test_summary_undefined_score() {
        let text = summary(&analyze("", "", &AnalysisParams::default()));
        assert!(text.contains("Score: undefined"));
        assert!(text.contains("default"));
    }
}
