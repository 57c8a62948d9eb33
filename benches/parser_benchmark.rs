//! Benchmarks for scenetag.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scenetag::config::ParserConfig;
use scenetag::{parse, Parser};

const MOVIES: &[&str] = &[
    "Dawn.of.the.Planet.of.the.Apes.2014.HDRip.XViD-EVO",
    "Rain Man 1988 REMASTERED 1080p BRRip x264 AAC-m2g",
    "Gold 2016 1080p BluRay DTS-HD MA 5 1 x264-HDH",
    "Harry Potter All Movies Collection 2001-2011 720p Dual KartiKing'",
];

const EPISODES: &[&str] = &[
    "The Simpsons S28E21 720p HDTV x264-AVS",
    "Doctor.Who.2005.8x11.Dark.Water.720p.HDTV.x264-FoV",
    "Marvel's.Agents.of.S.H.I.E.L.D.S02E01-03.Shadows.1080p.WEB-DL.DD5.1",
    "Friends - [7x23-24] - The One with Monica and Chandler's Wedding + Audio Commentary.mkv",
];

const ANIME: &[&str] = &[
    "[AnimeRG] Naruto Shippuden - 107 [720p] [x265] [pseudo].mkv",
    "Mob Psycho 100 - 09 [1080p].mkv",
    "[OMDA] Bleach - 002 (480p x264 AAC) [rich_jc].mkv",
];

fn bench_parse_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_single");

    group.bench_function("movie", |b| b.iter(|| parse(black_box(MOVIES[0]))));
    group.bench_function("episode", |b| b.iter(|| parse(black_box(EPISODES[0]))));
    group.bench_function("anime", |b| b.iter(|| parse(black_box(ANIME[0]))));

    // Engine output only, without the typed conversion
    let parser = Parser::default();
    group.bench_function("raw_episode", |b| {
        b.iter(|| parser.parse_raw(black_box(EPISODES[0])))
    });

    group.finish();
}

fn bench_parse_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_batch");

    for (name, samples) in [("movies", MOVIES), ("episodes", EPISODES), ("anime", ANIME)] {
        group.throughput(Throughput::Elements(samples.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                for sample in samples {
                    black_box(parse(black_box(sample)));
                }
            })
        });
    }

    group.finish();
}

fn bench_input_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_length");

    let long = "Some.Very.Long.Release.Name.".repeat(20) + "2014.1080p.BluRay.x264-GRP";
    let inputs = [
        ("short", "Movie.2020.720p".to_string()),
        ("medium", EPISODES[1].to_string()),
        ("long", long),
    ];

    for (name, input) in &inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", name), input.as_str(), |b, input| {
            b.iter(|| parse(black_box(input)))
        });
    }

    group.finish();
}

fn bench_build_registry(c: &mut Criterion) {
    c.bench_function("build_default_parser", |b| {
        b.iter(|| Parser::new(black_box(ParserConfig::default())))
    });
}

criterion_group!(
    benches,
    bench_parse_single,
    bench_parse_batch,
    bench_input_length,
    bench_build_registry,
);

criterion_main!(benches);
