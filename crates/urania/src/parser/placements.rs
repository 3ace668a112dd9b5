//! Placement text -> canonical placements.

use log::{debug, warn};
use regex::Regex;
use serde::Serialize;

use super::diagnostics::{LineNote, PlacementDiagnostics, SignError};
use super::grammar::{GrammarMatch, GRAMMARS};
use crate::chart::{Placement, Placements};
use crate::zodiac::{normalize_sign, parse_body_token, House};

lazy_static::lazy_static! {
    /// Lunar phase annotations that chart exports mix in with placements
    static ref NOISE: Regex = Regex::new(
        r"(?i)\b(?:moon\s+phase|lunar\s+phase|phase|new\s+moon|full\s+moon|first\s+quarter|last\s+quarter|third\s+quarter|waxing|waning|crescent|gibbous|balsamic|ay\s+evresi|evresi|yeni\s+ay|dolunay|hilal|ilk\s+dördün|son\s+dördün|şişkin\s+ay)\b"
    ).expect("noise pattern");
}

/// Output of `parse_placements`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlacementParse {
    pub placements: Placements,
    pub diagnostics: PlacementDiagnostics,
}

enum LineOutcome {
    Placed(Placement),
    SignError(String),
    Unrecognized,
}

pub fn is_noise_line(line: &str) -> bool {
    NOISE.is_match(line)
}

/// Try every grammar in order. An unknown sign token only becomes a sign
/// error when no later grammar places the line.
fn parse_line(line: &str) -> LineOutcome {
    let mut unknown_sign: Option<&str> = None;

    for grammar in GRAMMARS {
        let raw = match grammar.match_line(line) {
            GrammarMatch::Matched(raw) => raw,
            GrammarMatch::NoMatch => continue,
        };
        // Out-of-range numbers mean this grammar misread the line.
        let Some((degree, house)) = raw.checked_numbers() else {
            continue;
        };
        let Some(sign) = normalize_sign(raw.sign) else {
            debug!("{} grammar read unknown sign {:?} in {:?}", grammar.name(), raw.sign, line);
            unknown_sign.get_or_insert(raw.sign);
            continue;
        };
        let Ok(house) = House::new(house) else {
            continue;
        };
        let token = parse_body_token(raw.body);
        debug!("{} grammar matched {:?} as {}", grammar.name(), line, token.body);
        return LineOutcome::Placed(Placement::new(
            token.body,
            sign,
            degree,
            house,
            raw.retrograde || token.retrograde_marker,
        ));
    }

    match unknown_sign {
        Some(token) => LineOutcome::SignError(token.to_string()),
        None => LineOutcome::Unrecognized,
    }
}

/// Parse placement lines. Never fails: each line either becomes a
/// placement or lands in one of the diagnostic lists. When a body appears
/// on several lines the last one wins.
pub fn parse_placements(text: &str) -> PlacementParse {
    let mut out = PlacementParse::default();

    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = idx + 1;

        if is_noise_line(line) {
            debug!("line {}: chart noise {:?}", line_no, line);
            out.diagnostics.noise_ignored.push(LineNote {
                line: line_no,
                text: line.to_string(),
            });
            continue;
        }

        match parse_line(line) {
            LineOutcome::Placed(placement) => {
                if let Some(previous) = out.placements.insert(placement.body().clone(), placement) {
                    debug!("line {}: {} replaces an earlier placement", line_no, previous.body());
                }
            }
            LineOutcome::SignError(token) => {
                warn!("line {}: unknown sign {:?} in {:?}", line_no, token, line);
                out.diagnostics.sign_errors.push(SignError {
                    line: line_no,
                    text: line.to_string(),
                    token,
                });
            }
            LineOutcome::Unrecognized => {
                debug!("line {}: no grammar matched {:?}", line_no, line);
                out.diagnostics.format_ignored.push(LineNote {
                    line: line_no,
                    text: line.to_string(),
                });
            }
        }
    }

    debug!(
        "parsed {} placements ({} noise, {} unrecognized, {} sign errors)",
        out.placements.len(),
        out.diagnostics.noise_ignored.len(),
        out.diagnostics.format_ignored.len(),
        out.diagnostics.sign_errors.len()
    );
    out
}
