use fermat_search::{euclid_triples, find_triples, pythagorean_triples, MAX_EUCLID_LIMIT};

#[test]
fn euclid_matches_primitive_exact_view() {
    let limit = 30;
    let from_euclid: Vec<_> = euclid_triples(limit)
        .expect("euclid")
        .into_iter()
        .map(|t| (t.a, t.b, t.c))
        .collect();

    let set = find_triples(2, limit as u32).expect("search");
    let mut from_search: Vec<_> = set
        .primitive_exact()
        .into_iter()
        .filter(|t| t.c_rounded <= limit)
        .map(|t| (u64::from(t.a), u64::from(t.b), t.c_rounded))
        .collect();
    from_search.sort_by_key(|&(a, _, c)| (c, a));

    assert_eq!(from_euclid, from_search);
}

#[test]
fn pythagorean_view_is_ordered_by_legs() {
    let triples = pythagorean_triples(20).expect("search");
    let legs: Vec<_> = triples.iter().map(|t| (t.a, t.b)).collect();
    assert_eq!(
        legs,
        vec![(3, 4), (5, 12), (6, 8), (8, 15), (9, 12), (12, 16), (15, 20)]
    );
    assert!(triples.iter().all(|t| t.relative_error == 0.0));
    assert!(triples
        .iter()
        .all(|t| u64::from(t.a).pow(2) + u64::from(t.b).pow(2) == t.c_rounded.pow(2)));
}

#[test]
fn euclid_rejects_zero_limit() {
    assert!(euclid_triples(0).is_err());
    assert!(euclid_triples(4).expect("small limit").is_empty());
}

#[test]
fn euclid_rejects_limits_past_the_ceiling() {
    let err = euclid_triples(MAX_EUCLID_LIMIT + 1).expect_err("too large");
    assert_eq!(err.code(), "limit-too-large");
    assert_eq!(
        err.info().context.get("max").map(String::as_str),
        Some("16777216")
    );
    assert!(euclid_triples(u64::MAX).is_err());
}
