use std::cell::Cell;

use sequin::{from, IndexMap, Sequence, SequinError, Source};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Positional sequence over `[10, 20, 30, 40]`.
fn numbers() -> Sequence<usize, i32> {
    Sequence::from_values(vec![10, 20, 30, 40])
}

/// Keyed sequence mapping short names to counts.
fn stock() -> Sequence<&'static str, u32> {
    Sequence::from_pairs([("bolts", 40), ("nuts", 25), ("washers", 0)]).unwrap()
}

fn values_of<K, V: Copy>(seq: &Sequence<K, V>) -> Vec<V> {
    seq.iter().map(|(_, v)| *v).collect()
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn from_vec_keys_by_position() {
    let seq = from(vec!["a", "b", "c"]).unwrap();
    let pairs: Vec<_> = seq.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(pairs, vec![(0, "a"), (1, "b"), (2, "c")]);
}

#[test]
fn from_array_and_slice_agree() {
    let from_array = from([1, 2, 3]).unwrap();
    let backing = vec![1, 2, 3];
    let from_slice = from(backing.as_slice()).unwrap();

    assert_eq!(values_of(&from_array), values_of(&from_slice));
}

#[test]
fn from_pairs_rejects_duplicate_keys() {
    let err = Sequence::from_pairs([("a", 1), ("a", 2)]).unwrap_err();

    assert!(matches!(err, SequinError::InvalidSource(_)));
    assert!(!err.is_data_dependent());
    assert_eq!(err.to_string(), "invalid source: duplicate key at position 1");
}

#[test]
fn rewrapping_a_sequence_keeps_its_snapshot() {
    let original = stock();
    let expected: Vec<_> = original.iter().map(|(k, v)| (*k, *v)).collect();

    let rewrapped = from(original).unwrap();
    let pairs: Vec<_> = rewrapped.iter().map(|(k, v)| (*k, *v)).collect();

    assert_eq!(pairs, expected);
}

#[test]
fn custom_source_works() {
    struct Csv(&'static str);

    impl Source for Csv {
        type Key = usize;
        type Value = String;

        fn drain(self) -> Result<IndexMap<usize, String>, SequinError> {
            Ok(self.0.split(',').map(str::to_string).enumerate().collect())
        }
    }

    let fields = from(Csv("north,42,kg")).unwrap();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields.first().unwrap(), "north");
}

#[test]
fn snapshot_is_isolated_from_the_original_source() {
    let mut data = vec![1, 2, 3];
    let seq = Sequence::from_values(data.iter().copied());

    data.push(4);
    data.clear();

    assert_eq!(seq.len(), 3);
    assert_eq!(values_of(&seq), vec![1, 2, 3]);
}

// ---------------------------------------------------------------------------
// Iteration contract
// ---------------------------------------------------------------------------

#[test]
fn iteration_restarts_from_the_first_entry() {
    let seq = numbers();

    let first_pass: Vec<_> = seq.iter().map(|(k, v)| (*k, *v)).collect();
    let second_pass: Vec<_> = seq.iter().map(|(k, v)| (*k, *v)).collect();

    assert_eq!(first_pass, second_pass);
    assert_eq!(first_pass[0], (0, 10));
}

#[test]
fn a_partial_pass_does_not_affect_the_next_one() {
    let seq = numbers();

    let mut pass = seq.iter();
    pass.next();
    pass.next();
    drop(pass);

    assert_eq!(seq.iter().count(), 4);
}

// ---------------------------------------------------------------------------
// where_ — in-place filtering
// ---------------------------------------------------------------------------

#[test]
fn where_keeps_matching_entries_in_order() {
    let mut seq = Sequence::from_values(vec![1, 2, 3, 4]);
    seq.where_(|v, _| v % 2 == 0);

    let pairs: Vec<_> = seq.iter().map(|(k, v)| (*k, *v)).collect();
    // Survivors keep their original keys.
    assert_eq!(pairs, vec![(1, 2), (3, 4)]);
}

#[test]
fn where_returns_the_same_handle_for_chaining() {
    let mut seq = numbers();
    seq.where_(|v, _| *v > 10).where_(|v, _| *v < 40);

    assert_eq!(values_of(&seq), vec![20, 30]);
}

#[test]
fn chained_where_equals_conjunction() {
    let mut chained = numbers();
    chained.where_(|v, _| *v > 10).where_(|v, _| *v < 40);

    let mut conjoined = numbers();
    conjoined.where_(|v, _| *v > 10 && *v < 40);

    assert_eq!(values_of(&chained), values_of(&conjoined));
}

#[test]
fn where_evaluates_the_predicate_once_per_entry() {
    let calls = Cell::new(0usize);
    let mut seq = numbers();

    seq.where_(|v, _| {
        calls.set(calls.get() + 1);
        *v > 15
    });

    assert_eq!(calls.get(), 4);
    assert_eq!(seq.len(), 3);
}

#[test]
fn where_can_empty_the_sequence() {
    let mut seq = numbers();
    seq.where_(|_, _| false);

    assert!(seq.is_empty());
    assert!(matches!(seq.first(), Err(SequinError::NoMatches)));
}

#[test]
fn where_sees_keys_as_well_as_values() {
    let mut seq = stock();
    seq.where_(|_, key| key.starts_with('b') || key.starts_with('n'));

    let keys: Vec<_> = seq.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec!["bolts", "nuts"]);
}

// ---------------------------------------------------------------------------
// first / firstOrDefault
// ---------------------------------------------------------------------------

#[test]
fn first_returns_the_first_element() {
    let seq = from(vec![10, 20, 30]).unwrap();
    assert_eq!(seq.first().unwrap(), 10);
}

#[test]
fn first_on_empty_sequence_fails() {
    let seq = from(Vec::<i32>::new()).unwrap();
    let err = seq.first().unwrap_err();

    assert!(matches!(err, SequinError::NoMatches));
    assert!(err.is_data_dependent());
    assert_eq!(err.to_string(), "Sequence contains no matching elements.");
}

#[test]
fn first_where_returns_the_first_match() {
    let seq = numbers();
    assert_eq!(seq.first_where(|v, _| *v > 15).unwrap(), 20);
}

#[test]
fn first_where_short_circuits_after_a_match() {
    let calls = Cell::new(0usize);
    let seq = numbers();

    let found = seq
        .first_where(|v, _| {
            calls.set(calls.get() + 1);
            *v == 20
        })
        .unwrap();

    assert_eq!(found, 20);
    assert_eq!(calls.get(), 2, "scan must stop at the match");
}

#[test]
fn first_or_default_on_empty_sequence() {
    let seq = from(Vec::<i32>::new()).unwrap();
    assert_eq!(seq.first_or_default(99), 99);
}

#[test]
fn first_or_default_where_falls_back_when_nothing_matches() {
    let seq = from(vec![5]).unwrap();
    assert_eq!(seq.first_or_default_where(0, |v, _| *v > 10), 0);
}

#[test]
fn first_and_first_or_default_agree_on_matches() {
    let seq = numbers();

    let first = seq.first_where(|v, _| *v > 25).unwrap();
    let defaulted = seq.first_or_default_where(-1, |v, _| *v > 25);

    assert_eq!(first, defaulted);
    assert_eq!(first, 30);
}

#[test]
fn terminal_scans_do_not_mutate_the_sequence() {
    let seq = numbers();
    let _ = seq.first_where(|v, _| *v > 15);
    let _ = seq.first_or_default(0);

    assert_eq!(values_of(&seq), vec![10, 20, 30, 40]);
}

// ---------------------------------------------------------------------------
// single
// ---------------------------------------------------------------------------

#[test]
fn single_on_one_element_sequence() {
    let seq = from(vec![7]).unwrap();
    assert_eq!(seq.single().unwrap(), 7);
}

#[test]
fn single_fails_on_empty_and_on_many() {
    let empty = from(Vec::<i32>::new()).unwrap();
    assert!(matches!(empty.single(), Err(SequinError::NoMatches)));

    let many = from(vec![1, 2]).unwrap();
    let err = many.single().unwrap_err();
    assert!(matches!(err, SequinError::ManyMatches));
    assert_eq!(
        err.to_string(),
        "Sequence contains more than one matching element."
    );
}

#[test]
fn single_where_requires_exactly_one_match() {
    let seq = numbers();

    assert_eq!(seq.single_where(|v, _| *v == 30).unwrap(), 30);
    assert!(matches!(
        seq.single_where(|v, _| *v > 15),
        Err(SequinError::ManyMatches)
    ));
    assert!(matches!(
        seq.single_where(|v, _| *v > 100),
        Err(SequinError::NoMatches)
    ));
}

#[test]
fn single_where_stops_scanning_at_the_second_match() {
    let calls = Cell::new(0usize);
    let seq = numbers();

    let result = seq.single_where(|v, _| {
        calls.set(calls.get() + 1);
        *v > 15
    });

    assert!(matches!(result, Err(SequinError::ManyMatches)));
    // 10 rejected, 20 matched, 30 matched — 40 must never be evaluated.
    assert_eq!(calls.get(), 3, "scan must stop at the second match");
}

#[test]
fn single_or_default_defaults_only_the_empty_case() {
    let seq = numbers();

    assert_eq!(
        seq.single_or_default_where(-1, |v, _| *v > 100).unwrap(),
        -1
    );
    assert!(matches!(
        seq.single_or_default_where(-1, |v, _| *v > 15),
        Err(SequinError::ManyMatches)
    ));

    let empty = from(Vec::<i32>::new()).unwrap();
    assert_eq!(empty.single_or_default(42).unwrap(), 42);
}

// ---------------------------------------------------------------------------
// element_at
// ---------------------------------------------------------------------------

#[test]
fn element_at_looks_up_by_key() {
    let seq = stock();
    assert_eq!(seq.element_at(&"nuts").unwrap(), 25);
}

#[test]
fn element_at_missing_key_fails() {
    let seq = stock();
    let err = seq.element_at(&"rivets").unwrap_err();

    assert!(matches!(err, SequinError::KeyNotFound));
    assert!(err.is_data_dependent());
    assert_eq!(err.to_string(), "Sequence does not contain the key.");
}

#[test]
fn element_at_or_default_never_fails() {
    let seq = stock();
    assert_eq!(seq.element_at_or_default(&"rivets", 7), 7);
    assert_eq!(seq.element_at_or_default(&"bolts", 7), 40);
}

#[test]
fn element_at_sees_where_removals() {
    let mut seq = stock();
    seq.where_(|count, _| *count > 0);

    assert!(matches!(
        seq.element_at(&"washers"),
        Err(SequinError::KeyNotFound)
    ));
    assert_eq!(seq.element_at(&"bolts").unwrap(), 40);
}
