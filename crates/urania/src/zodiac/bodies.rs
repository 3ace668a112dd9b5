//! Celestial bodies and the name vocabulary used to recognize them.

use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

use super::fold;

/// A planet or chart point. Unrecognized names are kept as `Other` with
/// their cleaned spelling, since chart exports carry arbitrary extra points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    SouthNode,
    Chiron,
    Lilith,
    Ascendant,
    Midheaven,
    Other(String),
}

impl Body {
    /// Canonical identifier ("sun", "north_node", ...)
    pub fn id(&self) -> &str {
        match self {
            Body::Sun => "sun",
            Body::Moon => "moon",
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
            Body::Uranus => "uranus",
            Body::Neptune => "neptune",
            Body::Pluto => "pluto",
            Body::NorthNode => "north_node",
            Body::SouthNode => "south_node",
            Body::Chiron => "chiron",
            Body::Lilith => "lilith",
            Body::Ascendant => "asc",
            Body::Midheaven => "mc",
            Body::Other(name) => name,
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, Body::Other(_))
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// Bodies key JSON maps, so they serialize as their plain id.
impl Serialize for Body {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

static BODY_ALIASES: &[(&str, Body)] = &[
    ("sun", Body::Sun),
    ("Güneş", Body::Sun),
    ("☉", Body::Sun),
    ("moon", Body::Moon),
    ("Ay", Body::Moon),
    ("☽", Body::Moon),
    ("☾", Body::Moon),
    ("mercury", Body::Mercury),
    ("Merkür", Body::Mercury),
    ("☿", Body::Mercury),
    ("venus", Body::Venus),
    ("Venüs", Body::Venus),
    ("♀", Body::Venus),
    ("mars", Body::Mars),
    ("♂", Body::Mars),
    ("jupiter", Body::Jupiter),
    ("Jüpiter", Body::Jupiter),
    ("♃", Body::Jupiter),
    ("saturn", Body::Saturn),
    ("Satürn", Body::Saturn),
    ("♄", Body::Saturn),
    ("uranus", Body::Uranus),
    ("Uranüs", Body::Uranus),
    ("♅", Body::Uranus),
    ("⛢", Body::Uranus),
    ("neptune", Body::Neptune),
    ("Neptün", Body::Neptune),
    ("♆", Body::Neptune),
    ("pluto", Body::Pluto),
    ("Plüton", Body::Pluto),
    ("♇", Body::Pluto),
    ("north_node", Body::NorthNode),
    ("North Node", Body::NorthNode),
    ("NNode", Body::NorthNode),
    ("True Node", Body::NorthNode),
    ("Mean Node", Body::NorthNode),
    ("Node", Body::NorthNode),
    ("Rahu", Body::NorthNode),
    ("Kuzey Ay Düğümü", Body::NorthNode),
    ("Kuzey Düğüm", Body::NorthNode),
    ("Ay Düğümü", Body::NorthNode),
    ("☊", Body::NorthNode),
    ("south_node", Body::SouthNode),
    ("South Node", Body::SouthNode),
    ("SNode", Body::SouthNode),
    ("Ketu", Body::SouthNode),
    ("Güney Ay Düğümü", Body::SouthNode),
    ("Güney Düğüm", Body::SouthNode),
    ("☋", Body::SouthNode),
    ("chiron", Body::Chiron),
    ("Şiron", Body::Chiron),
    ("Kiron", Body::Chiron),
    ("⚷", Body::Chiron),
    ("lilith", Body::Lilith),
    ("Black Moon", Body::Lilith),
    ("Black Moon Lilith", Body::Lilith),
    ("Kara Ay", Body::Lilith),
    ("⚸", Body::Lilith),
    ("asc", Body::Ascendant),
    ("Ascendant", Body::Ascendant),
    ("Yükselen", Body::Ascendant),
    ("mc", Body::Midheaven),
    ("Midheaven", Body::Midheaven),
    ("Medium Coeli", Body::Midheaven),
    ("Tepe Noktası", Body::Midheaven),
];

lazy_static::lazy_static! {
    static ref EXACT: HashMap<&'static str, Body> = BODY_ALIASES
        .iter()
        .map(|(alias, body)| (*alias, body.clone()))
        .collect();

    /// Folded alias split into words, longest alias first so that
    /// "Kuzey Ay Düğümü" is tried before the bare "Ay".
    static ref BY_WORDS: Vec<(Vec<String>, usize, Body)> = {
        let mut entries: Vec<(Vec<String>, usize, Body)> = BODY_ALIASES
            .iter()
            .map(|(alias, body)| {
                let folded = fold(alias);
                let words: Vec<String> = folded.split_whitespace().map(str::to_string).collect();
                (words, folded.chars().count(), body.clone())
            })
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    };
}

/// Result of cleaning a raw body token
#[derive(Debug, Clone, PartialEq)]
pub struct BodyToken {
    pub body: Body,
    /// The token carried a retrograde marker such as `(R)` or `℞`
    pub retrograde_marker: bool,
}

/// Strip annotations and incidental punctuation from a body token.
///
/// Returns the cleaned text and whether a retrograde marker was among the
/// stripped annotations. Cleaning an already-clean token is a no-op.
pub(crate) fn clean_body_token(token: &str) -> (String, bool) {
    let mut retro = false;
    let mut out = String::with_capacity(token.len());
    let mut depth = 0usize;
    let mut annotation = String::new();

    for c in token.chars() {
        match c {
            '(' | '[' => {
                depth += 1;
                annotation.clear();
            }
            ')' | ']' if depth > 0 => {
                depth -= 1;
                if is_retro_marker(annotation.trim()) {
                    retro = true;
                }
            }
            '℞' => retro = true,
            '\u{FE0E}' | '\u{FE0F}' => {}
            _ if depth > 0 => annotation.push(c),
            _ => out.push(c),
        }
    }

    let cleaned = out
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| {
            c.is_whitespace() || matches!(c, ':' | ';' | ',' | '.' | '-' | '*' | '_' | '=')
        })
        .to_string();

    (cleaned, retro)
}

fn is_retro_marker(s: &str) -> bool {
    s.eq_ignore_ascii_case("r") || s.eq_ignore_ascii_case("rx") || s.eq_ignore_ascii_case("retrograde")
}

/// Clean and resolve a body token, keeping the retrograde annotation.
pub fn parse_body_token(token: &str) -> BodyToken {
    let (cleaned, retrograde_marker) = clean_body_token(token);
    BodyToken {
        body: lookup_body(&cleaned),
        retrograde_marker,
    }
}

/// Resolve a body name to its canonical identity. Never fails: unknown
/// names come back as `Body::Other` holding the cleaned spelling.
pub fn normalize_planet(token: &str) -> Body {
    parse_body_token(token).body
}

fn lookup_body(cleaned: &str) -> Body {
    if let Some(body) = EXACT.get(cleaned) {
        return body.clone();
    }

    let folded = fold(cleaned);
    let words: Vec<&str> = folded.split_whitespace().collect();
    if words.is_empty() {
        return Body::Other(cleaned.to_string());
    }

    // Whole-word match, longest alias wins. An exact folded match is simply
    // the case where the alias spans every word.
    for (alias_words, _, body) in BY_WORDS.iter() {
        if alias_words.is_empty() || alias_words.len() > words.len() {
            continue;
        }
        let hit = words
            .windows(alias_words.len())
            .any(|w| w.iter().zip(alias_words.iter()).all(|(a, b)| *a == b.as_str()));
        if hit {
            return body.clone();
        }
    }

    Body::Other(cleaned.to_string())
}
