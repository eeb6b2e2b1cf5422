use fermat_core::{Excess, FermatError};
use fermat_search::{find_triples, pair_count, MAX_BOUND, MAX_EXPONENT};

#[test]
fn enumerates_every_ordered_pair() {
    for (n, bound) in [(2, 1), (2, 5), (3, 17), (5, 40)] {
        let set = find_triples(n, bound).expect("search");
        assert_eq!(set.len(), pair_count(bound));
        assert_eq!(set.len(), (bound * (bound - 1) / 2 + bound) as usize);
        assert!(set.iter().all(|t| 1 <= t.a && t.a <= t.b && t.b <= bound));
    }
}

#[test]
fn bound_five_has_single_pythagorean_triple() {
    let set = find_triples(2, 5).expect("search");
    let exact: Vec<_> = set.exact().iter().map(|t| (t.a, t.b, t.c_rounded)).collect();
    assert_eq!(exact, vec![(3, 4, 5)]);
    assert_eq!(set.exact()[0].relative_error, 0.0);
    assert_eq!(set.best().map(|t| (t.a, t.b)), Some((3, 4)));
}

#[test]
fn bound_thirteen_contains_known_triples() {
    let set = find_triples(2, 13).expect("search");
    let mut exact: Vec<_> = set.exact().iter().map(|t| (t.a, t.b, t.c_rounded)).collect();
    exact.sort();
    assert_eq!(exact, vec![(3, 4, 5), (5, 12, 13), (6, 8, 10), (9, 12, 15)]);

    let mut primitive: Vec<_> = set
        .primitive_exact()
        .iter()
        .filter(|t| t.c_rounded <= 13)
        .map(|t| (t.a, t.b, t.c_rounded))
        .collect();
    primitive.sort();
    assert_eq!(primitive, vec![(3, 4, 5), (5, 12, 13)]);
}

#[test]
fn cubes_have_no_exact_solution() {
    let set = find_triples(3, 100).expect("search");
    assert!(set.exact().is_empty());
    assert!(set.iter().all(|t| t.relative_error > 0.0));
    assert!(set.iter().all(|t| t.excess != Excess::Exact));
    let best = set.best().expect("non-empty");
    assert!(best.relative_error > 0.0);
}

#[test]
fn higher_exponents_stay_strictly_positive_at_the_ceiling() {
    let set = find_triples(MAX_EXPONENT, 64).expect("search");
    assert!(set.iter().all(|t| t.relative_error > 0.0 && t.c_exact.is_finite()));
}

#[test]
fn output_is_sorted_with_tie_breaks() {
    let set = find_triples(2, 30).expect("search");
    for pair in set.as_slice().windows(2) {
        let (lhs, rhs) = (&pair[0], &pair[1]);
        assert!(
            lhs.relative_error < rhs.relative_error
                || (lhs.relative_error == rhs.relative_error && (lhs.a, lhs.b) < (rhs.a, rhs.b))
        );
    }
}

#[test]
fn repeated_calls_are_identical() {
    let first = find_triples(4, 60).expect("search");
    let second = find_triples(4, 60).expect("search");
    assert_eq!(first, second);
}

#[test]
fn larger_bound_never_worsens_the_best_error() {
    let mut previous = f64::INFINITY;
    for bound in 1..=40 {
        let best = find_triples(3, bound)
            .expect("search")
            .best()
            .map(|t| t.relative_error)
            .expect("non-empty");
        assert!(best <= previous);
        previous = best;
    }
}

#[test]
fn classic_cube_near_miss_is_reported() {
    let set = find_triples(3, 12).expect("search");
    let near_miss = set
        .iter()
        .find(|t| (t.a, t.b) == (9, 10))
        .expect("pair present");
    assert_eq!(near_miss.c_rounded, 12);
    assert_eq!(near_miss.difference, 1.0);
    assert_eq!(near_miss.excess, Excess::Over);
}

#[test]
fn invalid_inputs_fail_before_searching() {
    let err = find_triples(1, 10).unwrap_err();
    assert!(matches!(err, FermatError::InvalidExponent(ref info) if info.code == "exponent-too-small"));

    let err = find_triples(2, 0).unwrap_err();
    assert!(matches!(err, FermatError::InvalidBound(ref info) if info.code == "bound-too-small"));

    let err = find_triples(MAX_EXPONENT + 1, 10).unwrap_err();
    assert!(matches!(err, FermatError::InvalidExponent(ref info) if info.code == "exponent-too-large"));

    let err = find_triples(2, MAX_BOUND + 1).unwrap_err();
    assert!(matches!(err, FermatError::InvalidBound(ref info) if info.code == "bound-too-large"));
}

#[test]
fn top_and_within_are_prefixes() {
    let set = find_triples(3, 50).expect("search");
    assert_eq!(set.top(5), &set.as_slice()[..5]);
    assert_eq!(set.top(usize::MAX).len(), set.len());
    let threshold = set.as_slice()[10].relative_error;
    let within = set.within(threshold);
    assert!(within.len() >= 11);
    assert!(within.iter().all(|t| t.relative_error <= threshold));
}
