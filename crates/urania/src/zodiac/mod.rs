pub mod bodies;
pub mod houses;
pub mod signs;

pub use bodies::{normalize_planet, parse_body_token, Body, BodyToken};
pub use houses::{derived_house, overlay_sign, House, HouseKind, HouseTopic};
pub use signs::{normalize_sign, Sign};

/// Case- and diacritic-insensitive form of a name.
///
/// Turkish letters fold to their ASCII base (`ı`, `İ` -> `i`, `ş` -> `s`, ...)
/// so that transliterated exports resolve to the same alias.
pub(crate) fn fold(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| *c != '\u{307}')
        .map(|c| match c {
            'ı' | 'î' => 'i',
            'ğ' => 'g',
            'ş' => 's',
            'ç' => 'c',
            'ö' => 'o',
            'ü' | 'û' => 'u',
            'â' => 'a',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::fold;

    #[test]
    fn test_fold_turkish() {
        assert_eq!(fold("İkizler"), "ikizler");
        assert_eq!(fold("BALIK"), "balik");
        assert_eq!(fold("Güneş"), "gunes");
        assert_eq!(fold("Oğlak"), "oglak");
    }
}
