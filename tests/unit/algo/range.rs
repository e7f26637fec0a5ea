use super::*;
use crate::foundation::compare::Greater;

const INPUT: [i32; 10] = [-7, 1, 2, 3, 4, 5, 6, 7, 8, 9];
const CLAMPED: [i32; 10] = [3, 3, 3, 3, 4, 5, 6, 7, 7, 7];

#[test]
fn range_clamps_out_of_place() {
    let mut out = [0; 10];
    let rest = clamp_range(&INPUT, &mut out, &3, &7);
    assert!(rest.is_empty());
    assert_eq!(out, CLAMPED);
}

#[test]
fn range_returns_unwritten_tail() {
    let mut out = [-1; 13];
    let rest = clamp_range(&INPUT, &mut out, &3, &7);
    assert_eq!(rest, [-1, -1, -1]);
    rest[0] = 42;
    assert_eq!(out[..10], CLAMPED);
    assert_eq!(out[10], 42);
}

#[test]
fn range_tails_compose() {
    let mut out = [0; 20];
    let rest = clamp_range(&INPUT, &mut out, &3, &7);
    let rest = clamp_range(&INPUT, rest, &0, &5);
    assert!(rest.is_empty());
    assert_eq!(out[..10], CLAMPED);
    assert_eq!(out[10..], [0, 1, 2, 3, 4, 5, 5, 5, 5, 5]);
}

#[test]
fn empty_input_writes_nothing() {
    let empty: [i32; 0] = [];
    let mut out = [9; 2];
    let rest = clamp_range(&empty, &mut out, &3, &7);
    assert_eq!(rest.len(), 2);
    assert_eq!(out, [9, 9]);
}

#[test]
#[should_panic(expected = "output holds")]
fn short_output_panics() {
    let mut out = [0; 3];
    let _ = clamp_range(&INPUT, &mut out, &3, &7);
}

#[test]
fn in_place_matches_out_of_place() {
    let mut out = [0; 10];
    clamp_range(&INPUT, &mut out, &3, &7);
    let mut values = INPUT;
    clamp_in_place(&mut values, &3, &7);
    assert_eq!(values, out);
}

#[test]
fn in_place_counts_changed_elements() {
    let mut values = INPUT;
    assert_eq!(clamp_in_place_by(&mut values, &3, &7, Less), 5);
    assert_eq!(clamp_in_place_by(&mut values, &3, &7, Less), 0);

    let mut values = INPUT;
    assert_eq!(clamp_in_place(&mut values, &3, &7), 5);
    assert_eq!(values, CLAMPED);
    assert_eq!(clamp_in_place(&mut values, &3, &7), 0);
}

#[test]
fn greater_predicate_over_range() {
    let mut values = INPUT;
    clamp_in_place_by(&mut values, &7, &3, Greater);
    assert_eq!(values, CLAMPED);
}

#[test]
fn owned_strings_clone_bounds() {
    let input: Vec<String> = ["apple", "kiwi", "zebra"].map(String::from).into();
    let lo = String::from("banana");
    let hi = String::from("pear");
    let mut out = vec![String::new(); 3];
    clamp_range(&input, &mut out, &lo, &hi);
    assert_eq!(out, ["banana", "kiwi", "pear"]);
}

#[test]
fn try_range_rejects_before_writing() {
    let mut out = [0; 10];
    let err = try_clamp_range_by(&INPUT, &mut out, &7, &3, Less).unwrap_err();
    assert!(matches!(err, ClampError::MalformedRange(_)));
    assert_eq!(out, [0; 10]);

    let mut short = [0; 4];
    let err = try_clamp_range_by(&INPUT, &mut short, &3, &7, Less).unwrap_err();
    assert!(matches!(
        err,
        ClampError::OutputTooShort {
            needed: 10,
            available: 4
        }
    ));
    assert_eq!(short, [0; 4]);

    let rest = try_clamp_range_by(&INPUT, &mut out, &3, &7, Less).unwrap();
    assert!(rest.is_empty());
    assert_eq!(out, CLAMPED);
}

#[test]
fn try_in_place_leaves_values_on_error() {
    let mut values = INPUT;
    assert!(try_clamp_in_place_by(&mut values, &7, &3, Less).is_err());
    assert_eq!(values, INPUT);
    assert_eq!(try_clamp_in_place_by(&mut values, &3, &7, Less).unwrap(), 5);
    assert_eq!(values, CLAMPED);
}

#[test]
fn parallel_matches_sequential() {
    let input: Vec<i64> = (0..10_000).map(|i| (i * 7919) % 2001 - 1000).collect();
    let mut seq = input.clone();
    let mut par = input;
    let a = clamp_in_place_by(&mut seq, &-250, &300, Less);
    let b = par_clamp_in_place_by(&mut par, &-250, &300, Less);
    assert_eq!(a, b);
    assert_eq!(seq, par);
}

#[test]
fn iter_preserves_length_and_order() {
    let it = clamp_iter(&INPUT, &3, &7);
    assert_eq!(it.len(), INPUT.len());
    let out: Vec<i32> = it.copied().collect();
    assert_eq!(out, CLAMPED);

    let back: Vec<i32> = clamp_iter(&INPUT, &3, &7).rev().copied().collect();
    assert_eq!(back, CLAMPED.iter().rev().copied().collect::<Vec<_>>());
}

#[test]
fn iter_borrows_without_cloning() {
    #[derive(PartialEq, PartialOrd)]
    struct Opaque(u8);

    let items = [Opaque(0), Opaque(5), Opaque(9)];
    let (lo, hi) = (Opaque(2), Opaque(6));
    let refs: Vec<&Opaque> = clamp_iter(&items, &lo, &hi).collect();
    assert!(std::ptr::eq(refs[0], &lo));
    assert!(std::ptr::eq(refs[1], &items[1]));
    assert!(std::ptr::eq(refs[2], &hi));
}

#[test]
fn iter_with_closure_predicate() {
    let words = ["a", "abcdefgh", "abc"];
    let by_len = |a: &&str, b: &&str| a.len() < b.len();
    let out: Vec<&str> = clamp_iter_by(&words, &"xx", &"xxxx", by_len)
        .copied()
        .collect();
    assert_eq!(out, ["xx", "xxxx", "abc"]);
}
