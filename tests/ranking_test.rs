//! End-to-end ranking scenarios against loaded dictionaries.

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::NamedTempFile;

use spellrank::spelling::{
    SpellCheck, SpellingDictionary, SuggestionConfig, SuggestionEngine, levenshtein_distance, rank,
};

fn random_dictionary(seed: u64, size: usize) -> SpellingDictionary {
    let mut rng = StdRng::seed_from_u64(seed);
    let words = (0..size).map(|_| {
        let len = rng.random_range(1..=7);
        (0..len)
            .map(|_| char::from(b'a' + rng.random_range(0..6u8)))
            .collect::<String>()
    });
    SpellingDictionary::from_words(words)
}

#[test]
fn test_cot_scenario_from_json_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"cat": 1, "bat": 1, "rat": 1, "hat": 1}}"#).unwrap();
    file.flush().unwrap();

    let dictionary = SpellingDictionary::load_json_file(file.path()).unwrap();
    let result = rank("cot", &dictionary, 10);

    let ranked = result.suggestions().expect("cot is not a dictionary word");
    assert_eq!(ranked.words(), vec!["cat", "bat", "rat", "hat"]);
    let distances: Vec<usize> = ranked.iter().map(|s| s.distance).collect();
    assert_eq!(distances, vec![1, 2, 2, 2]);
}

#[test]
fn test_full_tie_group_from_json_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"bat": 1, "cat": 1, "rat": 1, "hat": 1}}"#).unwrap();
    file.flush().unwrap();

    let dictionary = SpellingDictionary::load_json_file(file.path()).unwrap();
    let result = rank("zat", &dictionary, 10);

    let ranked = result.suggestions().unwrap();
    assert_eq!(ranked.words(), vec!["bat", "cat", "rat", "hat"]);
    assert!(ranked.iter().all(|s| s.distance == 1));
}

#[test]
fn test_k_boundary_splits_tie_group() {
    // Fifteen words one substitution from "cot", out of alphabetical order,
    // behind a far word so the tie group does not start at index 0
    let letters = "qwertyuipasdfgh";
    let mut words = vec!["xxxxxx".to_string()];
    words.extend(letters.chars().map(|ch| format!("c{ch}t")));
    let dictionary = SpellingDictionary::from_words(words);

    let result = rank("cot", &dictionary, 10);
    let ranked = result.suggestions().unwrap();

    let expected: Vec<String> = letters.chars().take(10).map(|ch| format!("c{ch}t")).collect();
    assert_eq!(ranked.words(), expected);
    assert!(ranked.iter().all(|s| s.distance == 1));
}

#[test]
fn test_known_word_is_correct() {
    let dictionary = random_dictionary(3, 200);
    let word = dictionary.words()[42].clone();
    assert_eq!(rank(&word, &dictionary, 10), SpellCheck::Correct);
}

#[test]
fn test_ranking_matches_reference_sort() {
    let dictionary = random_dictionary(5, 2_000);

    for query in ["abcdefg", "fff", "zz", "bead"] {
        if dictionary.contains(query) {
            continue;
        }

        let mut expected: Vec<(String, usize)> = dictionary
            .iter()
            .map(|w| (w.to_string(), levenshtein_distance(query, w)))
            .collect();
        // Vec::sort_by_key is stable, so ties stay in dictionary order
        expected.sort_by_key(|(_, d)| *d);
        expected.truncate(10);

        let result = rank(query, &dictionary, 10);
        let actual: Vec<(String, usize)> = result
            .suggestions()
            .unwrap()
            .iter()
            .map(|s| (s.word.clone(), s.distance))
            .collect();

        assert_eq!(actual, expected, "query {query:?}");
    }
}

#[test]
fn test_result_size_is_min_of_k_and_dictionary() {
    for size in [0, 1, 9, 10, 11, 50] {
        let words: Vec<String> = (0..size).map(|i| format!("word{i}")).collect();
        let dictionary = SpellingDictionary::from_words(words);

        let result = rank("query", &dictionary, 10);
        assert_eq!(result.suggestions().unwrap().len(), size.min(10));
    }
}

#[test]
fn test_parallel_engine_matches_sequential() {
    let dictionary = random_dictionary(9, 5_000);
    let sequential = SuggestionEngine::new(&dictionary);
    let parallel = SuggestionEngine::with_config(
        &dictionary,
        SuggestionConfig {
            parallel: true,
            thread_pool_size: Some(3),
            ..Default::default()
        },
    )
    .unwrap();

    for query in ["abcabc", "f", "eeeeeeeee", "dab"] {
        assert_eq!(sequential.suggest(query), parallel.suggest(query), "{query}");
    }
}

#[test]
fn test_pruned_mode_is_prefix_of_exact() {
    let dictionary = random_dictionary(21, 1_000);
    let exact_engine = SuggestionEngine::new(&dictionary);
    let pruned_engine = SuggestionEngine::with_config(
        &dictionary,
        SuggestionConfig {
            max_distance: Some(2),
            ..Default::default()
        },
    )
    .unwrap();

    for query in ["abcd", "ffffff", "ace"] {
        let exact = exact_engine.suggest(query);
        let pruned = pruned_engine.suggest(query);

        let within: Vec<_> = exact.iter().filter(|s| s.distance <= 2).cloned().collect();
        assert_eq!(pruned.as_slice(), &within[..], "{query}");
    }
}
