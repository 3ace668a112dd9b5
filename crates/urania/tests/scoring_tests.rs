use urania::aspects::{Aspect, AspectKind};
use urania::chart::{Placement, Placements};
use urania::western::{get_dignity, score, DignityType, RulershipSystem, StrengthLabel};
use urania::{Body, House, Sign};

fn chart(entries: &[(Body, Sign, u32)]) -> Placements {
    entries
        .iter()
        .map(|(body, sign, house)| {
            let p = Placement::new(body.clone(), *sign, 10.0, House::new(*house).unwrap(), false);
            (body.clone(), p)
        })
        .collect()
}

fn aspect(a: Body, b: Body, kind: AspectKind, orb: f64) -> Aspect {
    Aspect {
        body_a: a,
        body_b: b,
        kind,
        orb,
        is_exact: orb < 0.1,
        is_retrograde: false,
    }
}

#[test]
fn test_dignity_depends_on_system() {
    assert_eq!(get_dignity(&Body::Mars, Sign::Scorpio, RulershipSystem::Traditional), Some(DignityType::Rulership));
    assert_eq!(get_dignity(&Body::Mars, Sign::Scorpio, RulershipSystem::Modern), None);
    assert_eq!(get_dignity(&Body::Mars, Sign::Taurus, RulershipSystem::Traditional), Some(DignityType::Detriment));
    assert_eq!(get_dignity(&Body::Pluto, Sign::Taurus, RulershipSystem::Modern), Some(DignityType::Detriment));
    assert_eq!(get_dignity(&Body::Sun, Sign::Aries, RulershipSystem::Modern), None);
}

#[test]
fn test_house_kinds_weigh_differently() {
    let angular = score(&Body::Sun, &chart(&[(Body::Sun, Sign::Aries, 7)]), &[], RulershipSystem::Modern).unwrap();
    let succedent = score(&Body::Sun, &chart(&[(Body::Sun, Sign::Aries, 5)]), &[], RulershipSystem::Modern).unwrap();
    let cadent = score(&Body::Sun, &chart(&[(Body::Sun, Sign::Aries, 3)]), &[], RulershipSystem::Modern).unwrap();
    assert_eq!(angular.total, 62.0);
    assert_eq!(succedent.total, 56.0);
    assert_eq!(cadent.total, 50.0);
    assert_eq!(cadent.label(), StrengthLabel::Challenging);
}

#[test]
fn test_aspects_fall_off_with_orb() {
    let placements = chart(&[(Body::Venus, Sign::Libra, 10), (Body::Moon, Sign::Aquarius, 2)]);
    let exact = [aspect(Body::Venus, Body::Moon, AspectKind::Trine, 0.0)];
    let loose = [aspect(Body::Moon, Body::Venus, AspectKind::Trine, 3.0)];
    let past = [aspect(Body::Venus, Body::Moon, AspectKind::Trine, 6.5)];

    let s = score(&Body::Venus, &placements, &exact, RulershipSystem::Modern).unwrap();
    assert_eq!(s.aspects, 12.0);
    assert_eq!(s.total, 84.0);
    assert_eq!(s.label(), StrengthLabel::Flowing);

    let s = score(&Body::Venus, &placements, &loose, RulershipSystem::Modern).unwrap();
    assert_eq!(s.aspects, 6.0);

    let s = score(&Body::Venus, &placements, &past, RulershipSystem::Modern).unwrap();
    assert_eq!(s.aspects, 0.0);
}

#[test]
fn test_score_always_in_range() {
    let placements = chart(&[(Body::Mars, Sign::Libra, 12)]);
    let hard: Vec<Aspect> = (0..6)
        .map(|_| aspect(Body::Mars, Body::Saturn, AspectKind::Opposition, 0.0))
        .collect();
    let easy: Vec<Aspect> = (0..6)
        .map(|_| aspect(Body::Mars, Body::Jupiter, AspectKind::Trine, 0.0))
        .collect();

    for aspects in [&hard, &easy] {
        let s = score(&Body::Mars, &placements, aspects, RulershipSystem::Modern).unwrap();
        assert!((0.0..=100.0).contains(&s.total));
    }
    assert_eq!(score(&Body::Mars, &placements, &hard, RulershipSystem::Modern).unwrap().total, 0.0);
    assert_eq!(score(&Body::Mars, &placements, &easy, RulershipSystem::Modern).unwrap().total, 100.0);
}
