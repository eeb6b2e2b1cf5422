use fermat_core::{to_canonical_json_bytes, FermatError};
use fermat_exp::{survey, SurveyPlan};

#[test]
fn default_plan_mirrors_the_classic_run() {
    let plan = SurveyPlan::default();
    assert_eq!(plan.bound, 50);
    assert_eq!(plan.exponents, vec![2, 3, 4, 5]);
    assert_eq!(plan.top_k, Some(100));
}

#[test]
fn survey_reports_repeat() {
    let plan = SurveyPlan {
        bound: 30,
        exponents: vec![2, 3],
        top_k: Some(10),
        parallelism: 1,
    };
    let first = survey(&plan).expect("survey");
    let second = survey(&plan).expect("survey");
    assert_eq!(first.report, second.report);
    let json_a = to_canonical_json_bytes(&first.report).expect("json");
    let json_b = to_canonical_json_bytes(&second.report).expect("json");
    assert_eq!(json_a, json_b);
    assert_eq!(first.report.plan_hash.len(), 64);
}

#[test]
fn survey_counts_exact_solutions_per_exponent() {
    let plan = SurveyPlan {
        bound: 13,
        exponents: vec![3, 2],
        top_k: Some(5),
        parallelism: 2,
    };
    let outcome = survey(&plan).expect("survey");
    let order: Vec<_> = outcome.report.exponents.iter().map(|s| s.n).collect();
    assert_eq!(order, vec![3, 2]);

    let squares = outcome.report.exponent(2).expect("n = 2");
    assert_eq!(squares.pairs, 91);
    assert_eq!(squares.exact, 4);
    assert_eq!(squares.primitive_exact, 2);
    assert_eq!(squares.top.len(), 5);
    assert_eq!(squares.best.map(|t| t.relative_error), Some(0.0));

    let cubes = outcome.report.exponent(3).expect("n = 3");
    assert_eq!(cubes.exact, 0);
    assert!(cubes.best.expect("best").relative_error > 0.0);

    assert_eq!(outcome.sets.len(), 2);
    assert_eq!(outcome.sets[1].exponent(), 2);
}

#[test]
fn invalid_plans_are_rejected_before_searching() {
    let duplicate = SurveyPlan {
        exponents: vec![2, 3, 2],
        ..SurveyPlan::default()
    };
    let err = survey(&duplicate).unwrap_err();
    assert!(matches!(err, FermatError::InvalidPlan(ref info) if info.code == "duplicate-exponent"));

    let empty = SurveyPlan {
        exponents: Vec::new(),
        ..SurveyPlan::default()
    };
    assert!(matches!(survey(&empty), Err(FermatError::InvalidPlan(_))));

    let bad_exponent = SurveyPlan {
        exponents: vec![1],
        ..SurveyPlan::default()
    };
    assert!(matches!(survey(&bad_exponent), Err(FermatError::InvalidExponent(_))));

    let bad_bound = SurveyPlan {
        bound: 0,
        ..SurveyPlan::default()
    };
    assert!(matches!(survey(&bad_bound), Err(FermatError::InvalidBound(_))));
}
