//! Line grammars for placement text.
//!
//! Each grammar is an independent matcher. The placement parser tries them
//! in `GRAMMARS` order and keeps the first accepted match.

use regex::{Captures, Regex};

use crate::zodiac::{normalize_planet, normalize_sign};
use crate::zodiac::signs::sign_alias_spellings;

/// Captured fields of one placement line, not yet resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawPlacement<'a> {
    pub body: &'a str,
    pub sign: &'a str,
    pub degree: u32,
    pub minute: u32,
    pub second: u32,
    pub house: u32,
    pub retrograde: bool,
}

impl RawPlacement<'_> {
    /// Degree within sign and house number, or `None` if any field is out of range
    pub fn checked_numbers(&self) -> Option<(f64, u32)> {
        if self.degree >= 30 || self.minute >= 60 || self.second >= 60 {
            return None;
        }
        if !(1..=12).contains(&self.house) {
            return None;
        }
        let degree = self.degree as f64 + self.minute as f64 / 60.0 + self.second as f64 / 3600.0;
        Some((degree, self.house))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum GrammarMatch<'a> {
    Matched(RawPlacement<'a>),
    NoMatch,
}

pub(crate) trait LineGrammar: Sync {
    fn name(&self) -> &'static str;
    fn match_line<'a>(&self, line: &'a str) -> GrammarMatch<'a>;
}

/// `<body>[:] <sign> <deg>°<min>' [<sec>"] [end of] <house> [Direct|Retrograde|R]`
pub(crate) struct SpacedGrammar;

/// `<body><sign><deg>°<min>'<house>` with no whitespace at all
pub(crate) struct CompactGrammar;

/// First token is the body, any recognized sign token, last three numbers
/// are degree, minute and house.
pub(crate) struct GenericGrammar;

pub(crate) static GRAMMARS: &[&dyn LineGrammar] = &[&SpacedGrammar, &CompactGrammar, &GenericGrammar];

lazy_static::lazy_static! {
    static ref SPACED: Regex = Regex::new(
        r#"(?ix)
        ^(?P<body>.+?)\s*:?\s+
        (?P<sign>[^\s\d°]+)\s+
        (?P<deg>\d{1,2})\s*°\s*
        (?P<min>\d{1,2})\s*['′’]?\s*
        (?:(?P<sec>\d{1,2})\s*(?:″|′′|''|"|”)\s*)?
        (?:end\s+of\s+)?
        (?P<house>\d{1,2})
        (?:\s*(?P<motion>retrograde|direct|rx|r|d)\b)?
        \s*$"#
    ).expect("spaced placement grammar");

    static ref COMPACT: Regex = {
        let signs = sign_alias_spellings()
            .into_iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(
            r"(?i)^(?P<body>\S+?)(?P<sign>{signs})(?P<deg>\d{{1,2}})°(?P<min>\d{{1,2}})['′’](?P<house>\d{{1,2}})(?P<motion>rx|r)?$"
        ))
        .expect("compact placement grammar")
    };

    static ref NUMBER: Regex = Regex::new(r"\d+").expect("number pattern");

    static ref TOKEN: Regex = Regex::new(r"\S+").expect("token pattern");

    /// `<deg>°<min>' [<sec>"] [end of] <house>` anywhere in a line
    static ref DEGREE_TAIL: Regex = Regex::new(
        r#"(?ix)
        (?P<deg>\d{1,2})\s*°\s*
        (?P<min>\d{1,2})\s*['′’]?\s*
        (?:(?P<sec>\d{1,2})\s*(?:″|′′|''|"|”)\s*)?
        (?:end\s+of\s+)?
        (?P<house>\d{1,2})"#
    ).expect("degree tail pattern");

    /// A standalone motion qualifier, or one glued to the house number
    static ref RETRO_MARK: Regex = Regex::new(r"(?i)(?:^|[\s\d(\[])(?:retrograde|rx|r)\b|℞")
        .expect("retrograde marker pattern");
}

fn number(caps: &Captures<'_>, name: &str) -> Option<u32> {
    caps.name(name).and_then(|m| m.as_str().parse().ok())
}

fn is_retrograde_motion(motion: &str) -> bool {
    let m = motion.to_ascii_lowercase();
    m == "r" || m == "rx" || m == "retrograde"
}

fn raw_from_captures<'a>(caps: &Captures<'a>) -> Option<RawPlacement<'a>> {
    Some(RawPlacement {
        body: caps.name("body")?.as_str(),
        sign: caps.name("sign")?.as_str(),
        degree: number(caps, "deg")?,
        minute: number(caps, "min")?,
        second: number(caps, "sec").unwrap_or(0),
        house: number(caps, "house")?,
        retrograde: caps
            .name("motion")
            .map_or(false, |m| is_retrograde_motion(m.as_str())),
    })
}

impl LineGrammar for SpacedGrammar {
    fn name(&self) -> &'static str {
        "spaced"
    }

    fn match_line<'a>(&self, line: &'a str) -> GrammarMatch<'a> {
        match SPACED.captures(line).and_then(|caps| raw_from_captures(&caps)) {
            Some(raw) => GrammarMatch::Matched(raw),
            None => GrammarMatch::NoMatch,
        }
    }
}

impl LineGrammar for CompactGrammar {
    fn name(&self) -> &'static str {
        "compact"
    }

    fn match_line<'a>(&self, line: &'a str) -> GrammarMatch<'a> {
        match COMPACT.captures(line).and_then(|caps| raw_from_captures(&caps)) {
            Some(raw) => GrammarMatch::Matched(raw),
            None => GrammarMatch::NoMatch,
        }
    }
}

impl LineGrammar for GenericGrammar {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn match_line<'a>(&self, line: &'a str) -> GrammarMatch<'a> {
        let mut tokens = TOKEN.find_iter(line);
        let Some(first) = tokens.next() else {
            return GrammarMatch::NoMatch;
        };
        let Some(sign) = tokens.find(|t| normalize_sign(t.as_str()).is_some()) else {
            return GrammarMatch::NoMatch;
        };
        let Some((degree, minute, second, house)) = degree_tail(&line[first.end()..]) else {
            return GrammarMatch::NoMatch;
        };

        GrammarMatch::Matched(RawPlacement {
            body: generic_body(line, first.as_str(), sign.start()),
            sign: sign.as_str(),
            degree,
            minute,
            second,
            house,
            retrograde: RETRO_MARK.is_match(&line[sign.end()..]),
        })
    }
}

/// The words before the sign name the body when they resolve to a known one
/// ("Sun in", "North Node"); otherwise the first token is the body.
fn generic_body<'a>(line: &'a str, first: &'a str, sign_start: usize) -> &'a str {
    let prefix = line[..sign_start].trim();
    if normalize_planet(prefix).is_other() {
        first
    } else {
        prefix
    }
}

/// Degree, minute, second and house: the last `<deg>°<min>' <house>` group
/// if there is one, else the last three numbers.
fn degree_tail(text: &str) -> Option<(u32, u32, u32, u32)> {
    if let Some(caps) = DEGREE_TAIL.captures_iter(text).last() {
        return Some((
            number(&caps, "deg")?,
            number(&caps, "min")?,
            number(&caps, "sec").unwrap_or(0),
            number(&caps, "house")?,
        ));
    }
    let numbers: Vec<u32> = NUMBER
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();
    if numbers.len() < 3 {
        return None;
    }
    let tail = &numbers[numbers.len() - 3..];
    Some((tail[0], tail[1], 0, tail[2]))
}
