use criterion::{Criterion, black_box, criterion_group, criterion_main};
use spellrank::spelling::{
    DistanceTable, SpellingDictionary, SuggestionConfig, SuggestionEngine, levenshtein_distance,
};

fn generate_words(count: usize) -> Vec<String> {
    let mut words = Vec::with_capacity(count);
    for i in 0..count {
        let len = 3 + i % 9;
        let word: String = (0..len)
            .map(|j| char::from(b'a' + ((i * 7 + j * 13) % 26) as u8))
            .collect();
        words.push(word);
    }
    words
}

fn bench_distances(c: &mut Criterion) {
    let pairs = [
        ("kitten", "sitting"),
        ("intention", "execution"),
        ("pneumonoultramicroscopic", "pneumonoultramicroscopically"),
    ];

    let mut group = c.benchmark_group("levenshtein");

    group.bench_function("two_row", |b| {
        b.iter(|| {
            for (s1, s2) in pairs {
                black_box(levenshtein_distance(black_box(s1), black_box(s2)));
            }
        })
    });

    group.bench_function("full_table", |b| {
        b.iter(|| {
            for (s1, s2) in pairs {
                black_box(DistanceTable::build(black_box(s1), black_box(s2)).distance());
            }
        })
    });

    group.finish();
}

fn bench_ranking(c: &mut Criterion) {
    let dictionary = SpellingDictionary::from_words(generate_words(50_000));
    let sequential = SuggestionEngine::new(&dictionary);
    let parallel = SuggestionEngine::with_config(
        &dictionary,
        SuggestionConfig {
            parallel: true,
            ..Default::default()
        },
    )
    .unwrap();
    let pruned = SuggestionEngine::with_config(
        &dictionary,
        SuggestionConfig {
            max_distance: Some(2),
            ..Default::default()
        },
    )
    .unwrap();

    let mut group = c.benchmark_group("rank");

    group.bench_function("sequential", |b| {
        b.iter(|| black_box(sequential.check(black_box("speling"))))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(parallel.check(black_box("speling"))))
    });
    group.bench_function("pruned", |b| {
        b.iter(|| black_box(pruned.check(black_box("speling"))))
    });

    group.finish();
}

criterion_group!(benches, bench_distances, bench_ranking);
criterion_main!(benches);
