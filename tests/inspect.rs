mod common;

use common::{with, Inspect, THREE_WIDE};
use serde_json::{json, Value};

fn trace_field(report: &Value, field: &str) -> Vec<Value> {
    report["trace"]
        .as_array()
        .expect("trace should be an array")
        .iter()
        .map(|step| step[field].clone())
        .collect()
}

#[test]
fn test_layout_places_items_on_one_row() {
    let report = Inspect::run(THREE_WIDE).report();

    assert_eq!(report["item_count"], 3);
    assert_eq!(report["columns_per_row"], 2);
    let xs: Vec<Value> = report["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["rect"]["x"].clone())
        .collect();
    assert_eq!(xs, vec![json!(0.0), json!(400.0), json!(800.0)]);
    for item in report["items"].as_array().unwrap() {
        assert_eq!(item["rect"]["y"], json!(0.0));
        assert_eq!(item["rect"]["row"], 0);
    }
}

#[test]
fn test_navigation_trace_scrolls_eagerly() {
    let args = with(THREE_WIDE, &["--moves", "down,up,right,right"]);
    let report = Inspect::run(&args).report();

    assert_eq!(
        trace_field(&report, "focused"),
        vec![json!(2), json!(0), json!(1), json!(2)]
    );
    let xs: Vec<Value> = trace_field(&report, "offset")
        .iter()
        .map(|offset| offset["x"].clone())
        .collect();
    assert_eq!(xs, vec![json!(200.0), json!(0.0), json!(0.0), json!(200.0)]);
    assert!(trace_field(&report, "frames").iter().all(|f| f == &json!(0)));
}

#[test]
fn test_animated_step_scroll_settles_on_leading_edge() {
    let args = with(
        THREE_WIDE,
        &["--animate", "--scroll", "step", "--moves", "down"],
    );
    let report = Inspect::run(&args).report();

    let step = &report["trace"][0];
    assert_eq!(step["focused"], 2);
    assert_eq!(step["offset"]["x"], json!(800.0));
    assert!(step["frames"].as_u64().unwrap() > 1);
    assert_eq!(report["policy"], "step");
}

#[test]
fn test_point_lookup() {
    let args = with(THREE_WIDE, &["--at", "450,50", "--at", "5000,50"]);
    let report = Inspect::run(&args).report();

    assert_eq!(report["hits"][0]["index"], 1);
    assert_eq!(report["hits"][1]["index"], 2);
}

#[test]
fn test_empty_grid() {
    let report = Inspect::run(&[
        "--items",
        "0",
        "--viewport-width",
        "80",
        "--viewport-height",
        "24",
        "--moves",
        "down",
    ])
    .report();

    assert_eq!(report["items"], json!([]));
    assert_eq!(report["trace"][0]["focused"], Value::Null);
}

#[test]
fn test_generated_items_are_reproducible() {
    let args = [
        "--items",
        "50",
        "--seed",
        "7",
        "--viewport-width",
        "80",
        "--viewport-height",
        "24",
        "--row-index",
    ];
    let first = Inspect::run(&args).report();
    let second = Inspect::run(&args).report();

    assert_eq!(first["items"], second["items"]);
    assert!(first["row_count"].as_u64().unwrap() > 1);
}

#[test]
fn test_limit_truncates_item_list() {
    let args = with(THREE_WIDE, &["--limit", "1"]);
    let report = Inspect::run(&args).report();

    assert_eq!(report["items"].as_array().unwrap().len(), 1);
    assert_eq!(report["item_count"], 3);
}

#[test]
fn test_invalid_arguments_fail() {
    let unknown_move = Inspect::run(&with(THREE_WIDE, &["--moves", "north"]));
    assert!(!unknown_move.success());

    let bad_width = Inspect::run(&[
        "--widths",
        "10,-1",
        "--viewport-width",
        "80",
        "--viewport-height",
        "24",
    ]);
    assert!(!bad_width.success());
    assert!(bad_width.stderr().contains("Error:"));
}

#[test]
fn test_logs_go_to_stderr_only() {
    let inspect = Inspect::run(THREE_WIDE);

    assert!(inspect.stderr().contains("Inspection finished"));
    assert_eq!(inspect.report()["item_count"], 3);
}
