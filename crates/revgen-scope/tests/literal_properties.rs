//! Behavioural properties of literal scopes.
//!
//! Each test pins one guarantee callers rely on: how many draws a scope
//! makes, which arguments it draws with, and which strings it may emit.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use revgen_random::{ScriptedRandom, SeededRandom};
use revgen_scope::{ConfigurationError, GenerateError, LiteralScope, Scope};
use revgen_test_utils::{
    generate_string, init_tracing, literal_pool, repetitions_of_width, single_literal, CountingRandom,
};

#[test]
fn single_literal_is_verbatim_for_any_source() {
    init_tracing();
    let scope = single_literal("a");

    for seed in 0..16 {
        let mut random = CountingRandom::new(SeededRandom::new(seed));
        assert_eq!(generate_string(&scope, &mut random).unwrap(), "a");
        assert_eq!(random.calls(), &[(0, 0)]);
    }
}

#[test]
fn fixed_two_emits_two_copies_with_two_draws() {
    let scope = literal_pool("pair", &["a"], 2, 2);
    let mut random = ScriptedRandom::empty().then_expect(0, 0, 0).then_expect(0, 0, 0);

    assert_eq!(generate_string(&scope, &mut random).unwrap(), "aa");
    assert_eq!(random.calls(), &[(0, 0), (0, 0)]);
}

#[test]
fn counted_script_is_fully_consumed() {
    let scope = literal_pool("ab", &["a", "b"], 1, 3);
    let mut random = CountingRandom::new(ScriptedRandom::new([2, 1, 0]));

    assert_eq!(generate_string(&scope, &mut random).unwrap(), "ba");
    assert_eq!(random.calls(), &[(1, 3), (0, 1), (0, 1)]);

    let scripted = random.into_inner();
    assert!(scripted.is_exhausted());
    assert_eq!(scripted.calls(), &[(1, 3), (0, 1), (0, 1)]);
}

#[test]
fn one_to_two_never_leaves_bounds() {
    let scope = literal_pool("one-two", &["a"], 1, 2);
    let mut random = SeededRandom::new(42);

    for _ in 0..500 {
        let out = generate_string(&scope, &mut random).unwrap();
        let count = repetitions_of_width(&out, 1);
        assert!((1..=2).contains(&count), "count {count} out of bounds");
    }
}

#[test]
fn four_letter_pool_stays_in_pool() {
    let scope = literal_pool("abcd", &["a", "b", "c", "d"], 1, 4);
    let mut random = SeededRandom::new(7);
    let mut seen_counts = [false; 5];

    for _ in 0..500 {
        let out = generate_string(&scope, &mut random).unwrap();
        let count = repetitions_of_width(&out, 1);
        assert!((1..=4).contains(&count));
        assert!(out.chars().all(|c| "abcd".contains(c)), "unexpected output {out:?}");
        seen_counts[count] = true;
    }

    assert!(seen_counts[1..].iter().all(|&seen| seen), "not every count was produced");
}

#[test]
fn scripted_sequence_is_reproducible() {
    let scope = literal_pool("abcd", &["a", "b", "c", "d"], 1, 4);
    let mut random = ScriptedRandom::new([3, 2, 0, 1]);

    let first = generate_string(&scope, &mut random).unwrap();
    for _ in 0..5 {
        random.reset();
        assert_eq!(generate_string(&scope, &mut random).unwrap(), first);
    }
    assert_eq!(first, "cab");
}

#[test]
fn empty_pool_fails_instead_of_emitting_nothing() {
    let mut scope = LiteralScope::new("empty");
    scope.set_min_occurrences(1);
    scope.set_max_occurrences(1);

    let mut out = String::new();
    let err = scope.generate(&mut out, &mut SeededRandom::new(0)).unwrap_err();

    assert_eq!(
        err,
        GenerateError::Configuration(ConfigurationError::EmptyLiteralPool {
            scope: "empty".to_string()
        })
    );
    assert!(out.is_empty());
}

#[test]
fn one_tree_serves_many_sources() {
    let scope = literal_pool("xy", &["x", "y"], 3, 3);

    let a = generate_string(&scope, &mut ScriptedRandom::new([0, 0, 0])).unwrap();
    let b = generate_string(&scope, &mut ScriptedRandom::new([1, 1, 1])).unwrap();
    let c = generate_string(&scope, &mut SeededRandom::new(3)).unwrap();

    assert_eq!(a, "xxx");
    assert_eq!(b, "yyy");
    assert_eq!(c.len(), 3);
}

proptest! {
    #[test]
    fn prop_fixed_count_never_draws_for_count(seed in any::<u64>(), n in 0..16u64) {
        let scope = literal_pool("pool", &["p", "q", "r"], n, n);
        let mut random = CountingRandom::new(SeededRandom::new(seed));

        let out = generate_string(&scope, &mut random).unwrap();

        prop_assert_eq!(out.len() as u64, n);
        prop_assert_eq!(random.call_count() as u64, n);
        prop_assert!(random.calls().iter().all(|&call| call == (0, 2)));
    }

    #[test]
    fn prop_mixed_width_length_bounds(seed in any::<u64>(), min in 0..5u64, span in 0..5u64) {
        let max = min + span;
        let scope = literal_pool("mixed", &["a", "bbb", "cc"], min, max);
        let (shortest, longest) = scope.literal_len_bounds().unwrap();

        let out = generate_string(&scope, &mut SeededRandom::new(seed)).unwrap();
        let len = out.len() as u64;

        prop_assert!(len >= min * shortest as u64);
        prop_assert!(len <= max * longest as u64);
    }
}
