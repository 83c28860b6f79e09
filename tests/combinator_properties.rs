//! End-to-end checks of the combinator algebra: the two-state truth tables,
//! the algebraic laws, and the documented chaining scenarios.

use nullopt::{guarded, EmptyValueAccess, LawWitness, NullOpt, Nullable};

/// A reserved-sentinel type: the in-band marker is a valid value to pass
/// around, and `of` normalizes it to the canonical absent instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Token(u16);

const VOID: Token = Token(u16::MAX);

impl Nullable for Token {
    type Repr = Token;

    fn absent() -> Token {
        VOID
    }

    fn is_absent(repr: &Token) -> bool {
        *repr == VOID
    }

    fn embed(value: Token) -> Token {
        value
    }

    fn project(repr: Token) -> Token {
        repr
    }

    fn project_ref(repr: &Token) -> &Token {
        repr
    }
}

#[test]
fn construction_inspection_truth_table() {
    let present = NullOpt::of(1u32);
    assert!(present.is_defined());
    assert!(present.non_empty());
    assert!(!present.is_empty());

    let absent = NullOpt::<u32>::empty();
    assert!(!absent.is_defined());
    assert!(absent.is_empty());
}

#[test]
fn of_agrees_with_standard_optional_for_every_input() {
    // Ordinary values land on the present side of both types.
    assert_eq!(NullOpt::of(Token(3)).to_option(), Some(Token(3)));

    // The marker itself normalizes: both sides agree on "no value".
    assert_eq!(NullOpt::of(VOID), NullOpt::<Token>::empty());
    assert_eq!(NullOpt::of(VOID).to_option(), None);
}

#[test]
fn map_identity_and_composition() {
    let f = |n: u32| n + 1;
    let g = |n: u32| n * 2;

    assert!(LawWitness::map_identity(NullOpt::of(5u32)).is_valid());
    assert!(LawWitness::map_identity(NullOpt::<u32>::empty()).is_valid());

    assert!(LawWitness::map_composition(NullOpt::of(5u32), f, g).is_valid());
    assert_eq!(
        NullOpt::of(5u32).map(f).map(g),
        NullOpt::of(5u32).map(|n| g(f(n)))
    );
    assert!(NullOpt::<u32>::empty().map(f).is_empty());
}

#[test]
fn flat_map_associativity() {
    let f = |n: u32| {
        if n > 0 {
            NullOpt::of(n - 1)
        } else {
            NullOpt::empty()
        }
    };
    let g = |n: u32| NullOpt::of(n * 3);

    for input in [NullOpt::of(4u32), NullOpt::of(0u32), NullOpt::empty()] {
        let witness = LawWitness::flat_map_associativity(input, f, g);
        assert!(witness.is_valid());
    }
}

#[test]
fn filter_truth_table() {
    let even = |n: &u32| n % 2 == 0;
    assert_eq!(NullOpt::of(4u32).filter(even), NullOpt::of(4u32));
    assert!(NullOpt::of(5u32).filter(even).is_empty());
    assert!(NullOpt::<u32>::empty().filter(even).is_empty());
    assert!(NullOpt::<u32>::empty().filter(|_| true).is_empty());
}

#[test]
fn contains_truth_table_including_marker_probe() {
    assert!(NullOpt::of(Token(1)).contains(&Token(1)));
    assert!(!NullOpt::of(Token(1)).contains(&Token(2)));
    assert!(!NullOpt::<Token>::empty().contains(&Token(1)));
    // Absence does not contain absence.
    assert!(!NullOpt::<Token>::empty().contains(&VOID));
}

#[test]
fn zip_unzip_round_trips() {
    let (a, b) = NullOpt::of(("x", "y")).unzip();
    assert_eq!(a, NullOpt::of("x"));
    assert_eq!(b, NullOpt::of("y"));

    let (a, b) = NullOpt::of(1u8).zip(NullOpt::of(2u8)).unzip();
    assert_eq!(a, NullOpt::of(1u8));
    assert_eq!(b, NullOpt::of(2u8));

    assert!(NullOpt::of(1u8).zip(NullOpt::<u8>::empty()).is_empty());
    assert!(NullOpt::<u8>::empty().zip(NullOpt::of(2u8)).is_empty());
}

#[test]
fn iteration_lengths() {
    assert_eq!(NullOpt::of(9u32).to_vec().len(), 1);
    assert_eq!(NullOpt::of(9u32).to_vec()[0], 9);
    assert!(NullOpt::<u32>::empty().to_vec().is_empty());

    assert_eq!(NullOpt::of(9u32).iter().count(), 1);
    assert_eq!(NullOpt::<u32>::empty().iter().count(), 0);
}

#[test]
fn forced_unwrap_behavior() {
    assert_eq!(NullOpt::of(7u64).or_fail(), Ok(7));
    assert_eq!(NullOpt::<u64>::empty().or_fail(), Err(EmptyValueAccess));
    // Deterministic: every forced unwrap of absent fails the same way.
    assert_eq!(NullOpt::<u64>::empty().or_fail(), Err(EmptyValueAccess));
}

#[test]
fn scenario_map_then_get_or_else() {
    let out = NullOpt::of(42i32).map(|n| n + 1).get_or_else(|| 0);
    assert_eq!(out, 43);
}

#[test]
fn scenario_absent_map_then_get_or_else() {
    let out = NullOpt::<i32>::empty().map(|n| n + 1).get_or_else(|| 0);
    assert_eq!(out, 0);
}

#[test]
fn scenario_zip_with_absent() {
    let out = NullOpt::of("foo").zip(NullOpt::<&str>::empty());
    assert!(out.is_empty());
}

#[test]
fn scenario_unzip_pair() {
    let (a, b) = NullOpt::of(("a", "b")).unzip();
    assert_eq!(a, NullOpt::of("a"));
    assert_eq!(b, NullOpt::of("b"));
}

#[test]
fn scenario_flat_map_to_absent() {
    let out = NullOpt::of(4i32).flat_map(|_| NullOpt::<i32>::empty());
    assert!(out.is_empty());
}

#[test]
fn collect_through_a_partial_function() {
    let parse_even = guarded(|n: &u32| n % 2 == 0, |n: u32| n / 2);
    assert_eq!(NullOpt::of(10u32).collect(parse_even), NullOpt::of(5u32));

    let parse_even = guarded(|n: &u32| n % 2 == 0, |n: u32| n / 2);
    assert!(NullOpt::of(7u32).collect(parse_even).is_empty());
}

#[test]
fn or_else_chain_takes_first_present() {
    let out = NullOpt::<u32>::empty()
        .or_else(NullOpt::empty)
        .or_else(|| NullOpt::of(3))
        .or_else(|| NullOpt::of(4));
    assert_eq!(out, NullOpt::of(3));
}

#[test]
fn result_sided_conversions() {
    let right: Result<u32, &str> = NullOpt::of(1u32).ok_or_else(|| "empty");
    assert_eq!(right, Ok(1));

    let left: Result<&str, u32> = NullOpt::of(1u32).err_or_else(|| "empty");
    assert_eq!(left, Err(1));

    let right: Result<u32, &str> = NullOpt::<u32>::empty().ok_or_else(|| "empty");
    assert_eq!(right, Err("empty"));

    let left: Result<&str, u32> = NullOpt::<u32>::empty().err_or_else(|| "empty");
    assert_eq!(left, Ok("empty"));
}
