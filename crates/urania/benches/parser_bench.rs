use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::parser::{parse_cusps, parse_placements};
use urania::{analyze, AnalysisParams};

const PLACEMENTS: &str = "\
Sun Sagittarius 4°26' 7
Moon Leo 15°30' 3
Mercury Scorpio 28°02' 6
Venus Capricorn 1°45' 8
Mars (R) Aries 10°15' 11
Jupiter Pisces 5°00' 10
Saturn Balık 20°10' 10 Retrograde
North Node Gemini 2°05' 1
Moon phase: Waxing Gibbous
Chiron Taurus 7 12 4
";

const CUSPS: &str = "\
1st (ASC) Scorpio 12°30'
2 Yay
3 Oğlak
4 IC Aquarius
8 Gemini
10th house MC ♌
";

fn bench_parse_placements(c: &mut Criterion) {
    c.bench_function("parse_placements", |b| b.iter(|| parse_placements(black_box(PLACEMENTS))));
}

fn bench_parse_cusps(c: &mut Criterion) {
    c.bench_function("parse_cusps", |b| b.iter(|| parse_cusps(black_box(CUSPS))));
}

fn bench_analyze(c: &mut Criterion) {
    let params = AnalysisParams::default();
    c.bench_function("analyze", |b| {
        b.iter(|| analyze(black_box(PLACEMENTS), black_box(CUSPS), black_box(&params)))
    });
}

criterion_group!(benches, bench_parse_placements, bench_parse_cusps, bench_analyze);
criterion_main!(benches);
