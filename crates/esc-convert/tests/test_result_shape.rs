//! The serialized result shape consumed by pooling code

mod common;

use common::*;
use esc_convert::{
    convert_d2or, convert_or2d, ConversionInput, EffectMeasure, EffectSizeResult, LogitMetric,
    TargetMetric,
};
use serde_json::Value;

const FIELDS: [&str; 10] = [
    "es", "se", "var", "ci.lo", "ci.hi", "w", "totaln", "measure", "info", "study",
];

#[test]
fn test_field_names() {
    let input = reference_input().with_total_n(40.0).with_study("Adams 2011");
    let r = convert_or2d(&input, TargetMetric::G)
        .unwrap()
        .result;
    let json = serde_json::to_value(&r).unwrap();
    let object = json.as_object().unwrap();

    assert_eq!(object.len(), FIELDS.len());
    for field in FIELDS {
        assert!(object.contains_key(field), "missing field {field}");
    }
    assert_eq!(object["measure"], Value::from("g"));
    assert_eq!(object["totaln"], Value::from(40));
    assert_eq!(object["study"], Value::from("Adams 2011"));
}

#[test]
fn test_shape_is_the_same_for_every_conversion() {
    let from_or = serde_json::to_value(
        convert_or2d(&reference_input(), TargetMetric::CoxD).unwrap().result,
    )
    .unwrap();
    let from_d = serde_json::to_value(
        convert_d2or(&reference_input(), LogitMetric::Logit).unwrap().result,
    )
    .unwrap();
    let generic = serde_json::to_value(
        EffectSizeResult::builder(0.2, 0.01, EffectMeasure::D)
            .group_sizes(Some(20), Some(22))
            .build(),
    )
    .unwrap();

    let keys = |v: &Value| {
        let mut k: Vec<String> = v.as_object().unwrap().keys().cloned().collect();
        k.sort();
        k
    };
    assert_eq!(keys(&from_or), keys(&from_d));
    assert_eq!(keys(&from_or), keys(&generic));
    assert_eq!(generic["totaln"], Value::from(42));
}

#[test]
fn test_missing_serializes_as_nulls() {
    let json = serde_json::to_value(EffectSizeResult::missing(EffectMeasure::Eta)).unwrap();
    for field in ["es", "se", "var", "ci.lo", "ci.hi", "w", "totaln", "info", "study"] {
        assert!(json[field].is_null(), "{field} should be null");
    }
    assert_eq!(json["measure"], Value::from("eta"));
}

#[test]
fn test_roundtrip() {
    let r = convert_or2d(&reference_input().with_study("Adams 2011"), TargetMetric::D)
        .unwrap()
        .result;
    let text = serde_json::to_string(&r).unwrap();
    let back: EffectSizeResult = serde_json::from_str(&text).unwrap();

    for (a, b) in [
        (back.es, r.es),
        (back.se, r.se),
        (back.var, r.var),
        (back.ci_lo, r.ci_lo),
        (back.ci_hi, r.ci_hi),
        (back.w, r.w),
    ] {
        assert_abs_diff_eq!(a, b, epsilon = 1e-12);
    }
    assert_eq!(back.measure, r.measure);
    assert_eq!(back.info, r.info);
    assert_eq!(back.study, r.study);
}

#[test]
fn test_missing_roundtrip() {
    let missing = EffectSizeResult::missing(EffectMeasure::D);
    let text = serde_json::to_string(&missing).unwrap();
    let back: EffectSizeResult = serde_json::from_str(&text).unwrap();

    assert!(back.is_missing());
    for value in [back.es, back.se, back.var, back.ci_lo, back.ci_hi, back.w] {
        assert!(value.is_nan());
    }
    assert_eq!(back.measure, EffectMeasure::D);
    assert_eq!(back.totaln, None);
    assert_eq!(back.info, None);
    assert_eq!(back.study, None);
}

#[test]
fn test_zero_variance_roundtrip() {
    let r = convert_or2d(&ConversionInput::new(2.0).with_se(0.0), TargetMetric::D)
        .unwrap()
        .result;
    assert_eq!(r.w, f64::INFINITY);

    let text = serde_json::to_string(&r).unwrap();
    assert!(text.contains("\"w\":null"));
    let back: EffectSizeResult = serde_json::from_str(&text).unwrap();

    assert_eq!(back.var, 0.0);
    assert_eq!(back.se, 0.0);
    assert_eq!(back.w, f64::INFINITY);
    assert_abs_diff_eq!(back.es, r.es, epsilon = 1e-12);
    assert_eq!(back.ci_lo, back.ci_hi);
    assert_eq!(back.info, r.info);
}
