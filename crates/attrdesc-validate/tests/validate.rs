//! End-to-end tests: declarations normalize into rules, rules evaluate
//! candidate values.

use std::collections::BTreeMap;

use serde_json::json;

use attrdesc_meta::normalize;
use attrdesc_model::{AttrValue, DescriptorError, RuleSet};
use attrdesc_validate::validate;

fn rules(decls: serde_json::Value) -> RuleSet {
    let payload = serde_json::from_value(decls).expect("payload deserializes");
    normalize(&payload).expect("declarations normalize")
}

fn snapshot(pairs: &[(&str, AttrValue)]) -> BTreeMap<String, AttrValue> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

#[test]
fn six_digit_pattern_accepts_and_rejects() {
    let rules = rules(json!({
        "digits": { "validate": r"\d{6}", "require": false }
    }));

    let report = validate(&rules, &snapshot(&[("digits", AttrValue::from("12g334"))])).unwrap();
    assert_eq!(report.messages_for("digits"), ["is invalid"]);

    let report = validate(&rules, &snapshot(&[("digits", AttrValue::from("123456"))])).unwrap();
    assert!(report.is_valid());
}

#[test]
fn required_empty_reports_only_is_required() {
    let rules = rules(json!({
        "digits": { "validate": r"\d{6}", "min_length": 6 }
    }));

    let report = validate(&rules, &snapshot(&[("digits", AttrValue::from(""))])).unwrap();
    assert_eq!(report.messages_for("digits"), ["is required"]);
    assert_eq!(report.error_count(), 1);
}

#[test]
fn single_choice_rejects_a_second_value() {
    let rules = rules(json!({
        "Favorite animals": {
            "programmatic_name": "fav_animals",
            "valid_num_values": "1",
            "valid_values": ["snake", "hippo", "squirel", "other"]
        }
    }));

    let report = validate(
        &rules,
        &snapshot(&[("fav_animals", AttrValue::from(vec!["hippo", "snake"]))]),
    )
    .unwrap();
    assert_eq!(report.messages_for("fav_animals"), ["too many values given"]);

    let report = validate(
        &rules,
        &snapshot(&[("fav_animals", AttrValue::from(vec!["hippo"]))]),
    )
    .unwrap();
    assert!(report.is_valid());
}

#[test]
fn scalar_and_singleton_list_are_equivalent() {
    let rules = rules(json!({
        "Favorite animals": {
            "programmatic_name": "fav_animals",
            "valid_num_values": "1",
            "valid_values": ["snake", "hippo", "squirel", "other"]
        }
    }));

    for value in [AttrValue::from("hippo"), AttrValue::from(vec!["hippo"])] {
        let report = validate(&rules, &snapshot(&[("fav_animals", value)])).unwrap();
        assert!(report.is_valid(), "{report:?}");
    }

    let report = validate(&rules, &snapshot(&[("fav_animals", AttrValue::from("cat"))])).unwrap();
    assert_eq!(report.messages_for("fav_animals"), ["is invalid"]);
}

#[test]
fn count_window_brackets_collection_sizes() {
    let rules = rules(json!({
        "tags": { "valid_num_values": "2-4", "require": false }
    }));

    for size in [0usize, 1] {
        let value = AttrValue::Many(vec!["x".to_string(); size]);
        let report = validate(&rules, &snapshot(&[("tags", value)])).unwrap();
        assert_eq!(
            report.messages_for("tags"),
            ["too few values given"],
            "size {size}"
        );
    }

    for size in [2usize, 3, 4] {
        let value = AttrValue::Many(vec!["x".to_string(); size]);
        let report = validate(&rules, &snapshot(&[("tags", value)])).unwrap();
        assert!(report.is_valid(), "size {size}: {report:?}");
    }

    let value = AttrValue::Many(vec!["x".to_string(); 5]);
    let report = validate(&rules, &snapshot(&[("tags", value)])).unwrap();
    assert_eq!(report.messages_for("tags"), ["too many values given"]);
}

#[test]
fn empty_collection_hits_the_count_check_not_required() {
    let rules = rules(json!({
        "tags": { "valid_num_values": "2-4" }
    }));

    // Supplying an empty collection is different from supplying nothing:
    // the declared window judges it
    let report = validate(&rules, &snapshot(&[("tags", AttrValue::Many(Vec::new()))])).unwrap();
    assert_eq!(report.messages_for("tags"), ["too few values given"]);

    // Absence still reports through the required check
    let report = validate(&rules, &snapshot(&[])).unwrap();
    assert_eq!(report.messages_for("tags"), ["is required"]);
}

#[test]
fn open_ended_minimum_only_rejects_below() {
    let rules = rules(json!({
        "tags": { "valid_num_values": "2+", "require": false }
    }));

    let report = validate(
        &rules,
        &snapshot(&[("tags", AttrValue::from(vec!["a"]))]),
    )
    .unwrap();
    assert_eq!(report.messages_for("tags"), ["too few values given"]);

    let many = AttrValue::Many(vec!["x".to_string(); 50]);
    let report = validate(&rules, &snapshot(&[("tags", many)])).unwrap();
    assert!(report.is_valid());
}

#[test]
fn pattern_valid_values_admit_matching_entries() {
    // Mixed bucket: literals plus slash-delimited patterns
    let rules = rules(json!({
        "gmail email": {
            "valid_values": [r"/.*@gmail\.com/", "none"],
            "require": false
        }
    }));

    let ok = validate(
        &rules,
        &snapshot(&[("gmail_email", AttrValue::from("manossef@gmail.com"))]),
    )
    .unwrap();
    assert!(ok.is_valid());

    let literal = validate(
        &rules,
        &snapshot(&[("gmail_email", AttrValue::from("none"))]),
    )
    .unwrap();
    assert!(literal.is_valid());

    let bad = validate(
        &rules,
        &snapshot(&[("gmail_email", AttrValue::from("manossef@yahoo.com"))]),
    )
    .unwrap();
    assert_eq!(bad.messages_for("gmail_email"), ["is invalid"]);
}

#[test]
fn collection_count_and_element_errors_accumulate() {
    let rules = rules(json!({
        "animals": {
            "valid_num_values": "1",
            "valid_values": ["snake", "hippo"],
            "require": false
        }
    }));

    let report = validate(
        &rules,
        &snapshot(&[("animals", AttrValue::from(vec!["hippo", "lion"]))]),
    )
    .unwrap();
    assert_eq!(
        report.messages_for("animals"),
        ["too many values given", "is invalid"]
    );
}

#[test]
fn multiple_attributes_report_independently() {
    let rules = rules(json!({
        "Forename": null,
        "digits": { "validate": r"\d{6}", "require": false }
    }));

    let report = validate(&rules, &snapshot(&[("digits", AttrValue::from("12g334"))])).unwrap();
    assert_eq!(report.attribute_count(), 2);
    assert_eq!(report.messages_for("Forename"), ["is required"]);
    assert_eq!(report.messages_for("digits"), ["is invalid"]);
}

#[test]
fn malformed_range_only_fails_when_a_collection_arrives() {
    let rules = rules(json!({
        "tags": { "valid_num_values": "whenever", "require": false }
    }));

    // Scalar values never resolve the range
    let report = validate(&rules, &snapshot(&[("tags", AttrValue::from("one"))])).unwrap();
    assert!(report.is_valid());

    let err = validate(
        &rules,
        &snapshot(&[("tags", AttrValue::from(vec!["one", "two"]))]),
    )
    .unwrap_err();
    match err {
        DescriptorError::InvalidCardinality { attribute, raw } => {
            assert_eq!(attribute, "tags");
            assert_eq!(raw, "whenever");
        }
        other => panic!("expected InvalidCardinality, got {other:?}"),
    }
}

#[test]
fn values_without_rules_are_ignored() {
    let rules = rules(json!({ "Forename": { "require": false } }));
    let report = validate(
        &rules,
        &snapshot(&[("stray", AttrValue::from("anything"))]),
    )
    .unwrap();
    assert!(report.is_valid());
}

#[test]
fn filtered_rule_sets_validate_independently() {
    let all = rules(json!({ "a": null, "b": null }));
    let only_a = attrdesc_meta::filter(
        &all,
        &attrdesc_meta::FilterSpec::Only(vec!["a".to_string()]),
    )
    .unwrap();

    let empty = snapshot(&[]);
    let full_report = validate(&all, &empty).unwrap();
    let subset_report = validate(&only_a, &empty).unwrap();

    assert_eq!(full_report.attribute_count(), 2);
    assert_eq!(subset_report.attribute_count(), 1);
    assert_eq!(subset_report.messages_for("a"), ["is required"]);
}
