use std::fs;

use fermat_core::from_json_slice;
use fermat_exp::{
    error_profile, load_plan, persist_survey, plot_points, survey, write_triples_csv,
    SurveyPlan, SurveyReport,
};
use fermat_search::find_triples;

#[test]
fn persisted_survey_reloads() {
    let dir = tempfile::tempdir().expect("tempdir");
    let plan = SurveyPlan {
        bound: 12,
        exponents: vec![2, 4],
        top_k: Some(8),
        parallelism: 1,
    };
    let outcome = survey(&plan).expect("survey");
    let written = persist_survey(dir.path(), &outcome).expect("persist");
    assert_eq!(written.len(), 5);

    let bytes = fs::read(dir.path().join("survey_report.json")).expect("report");
    let reloaded: SurveyReport = from_json_slice(&bytes).expect("decode");
    assert_eq!(reloaded, outcome.report);

    let triples = fs::read_to_string(dir.path().join("n_2/triples.csv")).expect("csv");
    let mut lines = triples.lines();
    assert_eq!(
        lines.next(),
        Some("a,b,n,c_exact,c_rounded,relative_error,difference,excess")
    );
    assert_eq!(lines.next(), Some("3,4,2,5.0,5,0.0,0.0,exact"));
    assert_eq!(triples.lines().count(), 1 + 78);

    let profile = fs::read_to_string(dir.path().join("n_4/profile.csv")).expect("csv");
    assert_eq!(profile.lines().count(), 1 + 8);
}

#[test]
fn plan_loads_from_yaml_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("plan.yaml");
    fs::write(&path, "bound: 20\nexponents: [3, 5]\n").expect("write plan");
    let plan = load_plan(&path).expect("load");
    assert_eq!(plan.bound, 20);
    assert_eq!(plan.exponents, vec![3, 5]);
    assert_eq!(plan.top_k, Some(100));
    assert_eq!(plan.parallelism, 1);

    let json_path = dir.path().join("plan.json");
    fs::write(&json_path, r#"{"exponents": [2], "top_k": null}"#).expect("write plan");
    let plan = load_plan(&json_path).expect("load");
    assert_eq!(plan.bound, 50);
    assert_eq!(plan.top_k, None);
}

#[test]
fn error_profile_spans_unit_interval() {
    let set = find_triples(2, 25).expect("search");
    let profile = error_profile(&set, 100);
    assert_eq!(profile.len(), 100);
    assert_eq!(profile.first().map(|p| p.index), Some(0.0));
    assert_eq!(profile.last().map(|p| p.index), Some(1.0));
    assert!(profile[0].exact);
    assert!(profile.windows(2).all(|w| w[0].relative_error <= w[1].relative_error));

    let single = error_profile(&set, 1);
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].index, 0.0);
}

#[test]
fn plot_points_carry_precision_scale() {
    let set = find_triples(3, 10).expect("search");
    let points = plot_points(&set);
    assert_eq!(points.len(), set.len());
    assert!(points.iter().all(|p| (0.0..1.0).contains(&p.precision) && !p.exact));

    let mut buffer = Vec::new();
    write_triples_csv(&mut buffer, set.top(3)).expect("csv");
    let text = String::from_utf8(buffer).expect("utf8");
    assert_eq!(text.lines().count(), 4);
}
