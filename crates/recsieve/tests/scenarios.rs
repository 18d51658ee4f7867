//! End-to-end parse-then-filter scenarios.

use recsieve::{filter, parse_query, Literal, MalformedReason, Query, QueryError, Record};
use serde_json::{json, Value as JsonValue};

fn records(value: JsonValue) -> Vec<Record> {
    serde_json::from_value(value).expect("fixture is an array of objects")
}

fn run(data: &[Record], query: &str) -> Vec<JsonValue> {
    let query = parse_query(query).expect("query parses");
    filter(data, &query)
        .into_iter()
        .map(|r| JsonValue::Object(r.clone()))
        .collect()
}

#[test]
fn greater_than_skips_non_numeric() {
    let data = records(json!([{"length": 300}, {"length": 150}, {"length": "unknown"}]));
    assert_eq!(run(&data, "WHERE length>200"), [json!({"length": 300})]);
}

#[test]
fn quoted_text_matches_case_insensitively() {
    let data = records(json!([{"type": "Cargo"}, {"type": "Tanker"}]));
    assert_eq!(run(&data, "WHERE type='tanker'"), [json!({"type": "Tanker"})]);
}

#[test]
fn missing_field_excludes_regardless_of_other_conditions() {
    let data = records(json!([{"a": 1}, {"a": 1, "b": 2}]));
    assert_eq!(run(&data, "WHERE a=1 AND b=2"), [json!({"a": 1, "b": 2})]);
}

#[test]
fn bare_word_without_operator_is_malformed() {
    let err = parse_query("WHERE foo").unwrap_err();
    assert!(matches!(
        err,
        QueryError::MalformedQuery {
            reason: MalformedReason::InvalidCondition,
            ..
        }
    ));
}

#[test]
fn keyword_and_value_case_do_not_matter() {
    let upper_field = records(json!([{"Name": "Titanic"}, {"Name": "Olympic"}]));
    let lower_field = records(json!([{"name": " titanic "}, {"name": "Britannic"}]));

    assert_eq!(
        run(&upper_field, "WHERE Name='Titanic'"),
        [json!({"Name": "Titanic"})]
    );
    assert_eq!(
        run(&lower_field, "where name = 'TITANIC'"),
        [json!({"name": " titanic "})]
    );
}

#[test]
fn field_names_are_case_sensitive() {
    let data = records(json!([{"Name": "Titanic"}]));
    assert!(run(&data, "WHERE name='Titanic'").is_empty());
}

#[test]
fn quoted_and_bare_five_parse_differently() {
    let quoted = parse_query("WHERE x='5'").unwrap();
    let bare = parse_query("WHERE x=5").unwrap();
    assert_eq!(quoted.conditions()[0].literal, Literal::Text("5".into()));
    assert_eq!(bare.conditions()[0].literal, Literal::Number(5.0));
}

#[test]
fn quoted_number_still_compares_numerically_on_numeric_field() {
    let data = records(json!([{"x": 5}, {"x": 6}, {"x": "5"}]));
    assert_eq!(
        run(&data, "WHERE x='5'"),
        [json!({"x": 5}), json!({"x": "5"})]
    );
}

#[test]
fn non_numeric_literal_against_number_is_a_miss_not_an_error() {
    let data = records(json!([{"length": 300}, {"length": "long"}]));
    assert!(run(&data, "WHERE length>long").is_empty());
    assert_eq!(run(&data, "WHERE length=long"), [json!({"length": "long"})]);
}

#[test]
fn null_values_never_match() {
    let data = records(json!([{"flag": null}, {"flag": "null"}]));
    assert_eq!(run(&data, "WHERE flag=null"), [json!({"flag": "null"})]);
}

#[test]
fn nested_values_compare_by_text() {
    let data = records(json!([
        {"active": true, "tags": ["a"]},
        {"active": false, "tags": []},
    ]));
    assert_eq!(
        run(&data, "WHERE active=TRUE"),
        [json!({"active": true, "tags": ["a"]})]
    );
    assert!(run(&data, "WHERE active>false").is_empty());
}

#[test]
fn result_preserves_input_order_and_field_order() {
    let data = records(json!([
        {"name": "Eider", "length": 250},
        {"name": "Aurora", "length": 310},
        {"name": "Brisk", "length": 30},
    ]));
    let query = parse_query("WHERE length > 100").unwrap();
    let hits = filter(&data, &query);

    let names: Vec<&str> = hits.iter().filter_map(|r| r["name"].as_str()).collect();
    assert_eq!(names, ["Eider", "Aurora"]);

    let keys: Vec<&String> = hits[0].keys().collect();
    assert_eq!(keys, ["name", "length"]);
}

#[test]
fn malformed_queries_return_no_partial_result() {
    for input in ["", "length > 5", "WHERE a=1 AND b", "WHERE a ! 1"] {
        assert!(parse_query(input).is_err(), "expected {input:?} to fail");
    }
}

#[test]
fn bare_where_returns_every_record() {
    let data = records(json!([{"a": 1}, {"b": null}]));
    for input in ["WHERE", "where  ", "WHERE AND"] {
        let query = parse_query(input).unwrap();
        assert_eq!(filter(&data, &query).len(), 2, "{input:?}");
    }
}

#[test]
fn dotted_field_compares_last_segment() {
    let data = records(json!([
        {"name": "Aurora", "vessel": "x"},
        {"name": "Brisk"},
    ]));
    let query = parse_query("WHERE vessel.name='aurora'").unwrap();
    let hits = filter(&data, &query);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["name"], "Aurora");
}

#[test]
fn query_can_be_reused() {
    let data = records(json!([{"n": 1}, {"n": 2}, {"n": 3}]));
    let query: Query = "WHERE n > 1".parse().unwrap();
    assert_eq!(query.filter(&data), query.filter(&data));
    assert_eq!(query.count(&data), 2);
}
