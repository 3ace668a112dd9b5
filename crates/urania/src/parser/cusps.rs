//! House cusp text -> house/sign map.

use log::{debug, warn};
use regex::Regex;
use serde::Serialize;

use super::diagnostics::LineNote;
use crate::chart::CuspMap;
use crate::zodiac::{normalize_sign, House, Sign};

lazy_static::lazy_static! {
    // Optional axis marker or label, then the house number with an optional
    // ordinal suffix ("1st", "2.", "10th house", "House 7", "7. Ev").
    static ref HOUSE_PREFIX: Regex = Regex::new(
        r"(?ix)
        ^\s*
        (?:(?:asc|dsc|desc|ac|dc|mc|ic)\b\s*[:\-]?\s*)?
        (?:(?:house|cusp|ev|h)\s*[:\#]?\s*)?
        (?P<num>\d{1,2})
        (?:st|nd|rd|th|\.)?
        (?:\s*(?:house|ev)\b)?
        \s*[:\-]?"
    ).expect("cusp house pattern");

    static ref AXIS_PREFIX: Regex = Regex::new(r"(?i)^\s*(?P<axis>asc|ac|dsc|desc|dc|mc|ic)\b\s*[:\-]?")
        .expect("cusp axis pattern");
}

/// House whose cusp an angle marker names
fn axis_house(marker: &str) -> Option<House> {
    let number = match marker.to_ascii_lowercase().as_str() {
        "asc" | "ac" => 1,
        "ic" => 4,
        "dsc" | "desc" | "dc" => 7,
        "mc" => 10,
        _ => return None,
    };
    House::new(number).ok()
}

/// The number ending at `end` is a degree figure, as in `ASC 12°30'`
fn is_degree(line: &str, end: usize) -> bool {
    matches!(line[end..].trim_start().chars().next(), Some('°' | 'º'))
}

/// House number and the text after it. A leading number that is really a
/// degree does not count; an angle marker then names the house instead.
fn house_and_rest(line: &str) -> Option<(Option<House>, &str)> {
    if let Some(caps) = HOUSE_PREFIX.captures(line) {
        let num = caps.name("num")?;
        if !is_degree(line, num.end()) {
            let house = num.as_str().parse::<u32>().ok().and_then(|n| House::new(n).ok());
            let end = caps.get(0).map_or(num.end(), |m| m.end());
            return Some((house, &line[end..]));
        }
    }
    let caps = AXIS_PREFIX.captures(line)?;
    let axis = caps.name("axis")?;
    let end = caps.get(0).map_or(axis.end(), |m| m.end());
    Some((axis_house(axis.as_str()), &line[end..]))
}

/// Axis labels that commonly sit between the house number and the sign
const AXIS_MARKERS: &[&str] = &["asc", "dsc", "desc", "ac", "dc", "mc", "ic", "cusp", "house", "ev"];

/// Output of `parse_cusps`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CuspParse {
    pub cusps: CuspMap,
    /// Lines with a house number but no recognizable sign
    pub errors: Vec<LineNote>,
}

fn strip_parentheticals(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' if depth > 0 => {
                depth -= 1;
                out.push(' ');
            }
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// First sign mentioned in `rest`, ignoring axis markers and degree figures.
/// Fragments are split on digits too so "12Cap30" still yields Capricorn.
fn find_sign(rest: &str) -> Option<Sign> {
    let cleaned = strip_parentheticals(rest);
    cleaned
        .split(|c: char| c.is_whitespace() || c.is_ascii_digit() || matches!(c, '°' | '\'' | '′' | '"' | '″' | ',' | ';' | ':' | '/' | '-'))
        .filter(|frag| !frag.is_empty())
        .filter(|frag| {
            let lower = frag.trim_matches('.').to_lowercase();
            !AXIS_MARKERS.contains(&lower.as_str())
        })
        .find_map(normalize_sign)
}

/// Parse cusp lines. Lines without a house number are skipped silently;
/// lines with a house number but no sign are reported in `errors`.
/// Houses not present in the text are left unset.
pub fn parse_cusps(text: &str) -> CuspParse {
    let mut out = CuspParse::default();

    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = idx + 1;

        let Some((house, rest)) = house_and_rest(line) else {
            debug!("line {}: no house number in {:?}", line_no, line);
            continue;
        };
        let Some(house) = house else {
            debug!("line {}: house number out of range in {:?}", line_no, line);
            continue;
        };

        match find_sign(rest) {
            Some(sign) => {
                if let Some(previous) = out.cusps.insert(house, sign) {
                    debug!("line {}: house {} cusp {} replaces {}", line_no, house, sign, previous);
                }
            }
            None => {
                warn!("line {}: house {} has no recognizable sign: {:?}", line_no, house, line);
                out.errors.push(LineNote {
                    line: line_no,
                    text: line.to_string(),
                });
            }
        }
    }

    debug!("parsed {} cusps ({} errors)", out.cusps.len(), out.errors.len());
    out
}
