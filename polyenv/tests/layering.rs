//! Combining environments with `env_concat`, `env_append` and `layered`.

use polyenv::{BoxError, Environment, MemberKind, MethodTable, PropertyTable, prelude::*};
use pretty_assertions::assert_eq;
use std::thread;

mod common;
use common::{Nullary, Unary, init_tracing, outcomes};

/// Fallible methods with plain numeric properties.
type Checked = Environment<&'static str, (), Result<f64, BoxError>, f64>;

#[test]
fn test_env_append_properties_prefer_argument() {
    init_tracing();

    let env0 = Nullary::new().property("a", 0.25).unwrap();
    let env1 = Nullary::new().property("a", 0.75).unwrap();
    let env2 = env0.env_append(&env1);

    assert_eq!(env2.property_value("a"), Some(&0.75));
}

#[test]
fn test_env_append_keeps_receiver_only_properties() {
    let env0 = Nullary::new()
        .property("a", 0.25)
        .unwrap()
        .property("b", 1.0)
        .unwrap();
    let env1 = Nullary::new().property("a", 0.75).unwrap();
    let env2 = env0.env_append(&env1);

    assert_eq!(env2.property_value("a"), Some(&0.75));
    assert_eq!(env2.property_value("b"), Some(&1.0));
}

#[test]
fn test_env_append_methods_prefer_argument() {
    let env0 = Nullary::new().method("a", always(), constant(0.25)).unwrap();
    let env1 = Nullary::new().method("a", always(), constant(0.75)).unwrap();
    let env2 = env0.env_append(&env1);

    assert_eq!(env2.invoke("a", &()).unwrap(), 0.75);
}

#[test]
fn test_env_append_with_more_methods() {
    let env0 = Checked::new()
        .method("a", always(), |_| Ok(0.25))
        .unwrap()
        .method("b", always(), failing("Failed if called"))
        .unwrap();
    let env1 = Checked::new().method("a", always(), |_| Ok(0.75)).unwrap();
    let env2 = env0.env_append(&env1);

    assert_eq!(env2.invoke("a", &()).unwrap().unwrap(), 0.75);

    let untouched = env2.invoke("b", &()).unwrap().unwrap_err();
    assert_eq!(untouched.to_string(), "Failed if called");
}

#[test]
fn test_env_append_falls_back_to_receiver() {
    let defaults = Unary::new()
        .method("describe", always(), |_| "number")
        .unwrap();
    let overrides = Unary::new()
        .method("describe", equal_to(0), |_| "zero")
        .unwrap();

    let env = defaults.env_append(&overrides);

    assert_eq!(
        outcomes(&env, "describe", &[0, 1]),
        vec![Some("zero"), Some("number")]
    );
    assert_eq!(env.registrations("describe").map(<[_]>::len), Some(2));
}

#[test]
fn test_env_append_leaves_both_sides_untouched() {
    let base = Unary::new()
        .method("a", always(), |_| "base")
        .unwrap()
        .property("p", 1)
        .unwrap();
    let overlay = Unary::new()
        .method("a", always(), |_| "overlay")
        .unwrap()
        .property("p", 2)
        .unwrap();

    let _combined = base.env_append(&overlay);

    assert_eq!(base.invoke("a", &0).unwrap(), "base");
    assert_eq!(base.property_value("p"), Some(&1));
    assert_eq!(overlay.invoke("a", &0).unwrap(), "overlay");
    assert_eq!(overlay.property_value("p"), Some(&2));
    assert_eq!(base.registrations("a").map(<[_]>::len), Some(1));
}

#[test]
fn test_env_concat_appends_extra_registrations() {
    let env = Unary::new()
        .method("a", less_than(0), |_| "negative")
        .unwrap();

    let mut extra_methods = MethodTable::new();
    extra_methods.insert(
        "a",
        vec![
            Registration::new(less_than(-100), |_: &i64| "shadowed"),
            Registration::new(always(), |_: &i64| "other"),
        ],
    );
    extra_methods.insert("b", vec![Registration::new(always(), |_: &i64| "b")]);

    let mut extra_properties = PropertyTable::new();
    extra_properties.insert("p", 3);

    let merged = env.env_concat(&extra_methods, &extra_properties);

    assert_eq!(
        outcomes(&merged, "a", &[-500, -1, 1]),
        vec![Some("negative"), Some("negative"), Some("other")]
    );
    assert_eq!(merged.invoke("b", &0).unwrap(), "b");
    assert_eq!(merged.property_value("p"), Some(&3));

    assert!(env.get("b").is_none());
    assert!(env.get("p").is_none());
}

#[test]
fn test_env_concat_extra_properties_overwrite() {
    let env = Unary::new()
        .property("p", 1)
        .unwrap()
        .property("q", 2)
        .unwrap();

    let mut extra_properties = PropertyTable::new();
    extra_properties.insert("p", 10);
    extra_properties.insert("r", 30);

    let merged = env.env_concat(&MethodTable::new(), &extra_properties);

    let mut properties: Vec<_> = merged
        .properties()
        .iter()
        .map(|(name, value)| (*name, *value))
        .collect();
    properties.sort();
    assert_eq!(properties, vec![("p", 10), ("q", 2), ("r", 30)]);
}

#[test]
fn test_env_concat_does_not_check_collisions() {
    let env = Unary::new().method("a", always(), |_| "method").unwrap();

    let mut extra_properties = PropertyTable::new();
    extra_properties.insert("a", 1);

    let merged = env.env_concat(&MethodTable::new(), &extra_properties);

    assert_eq!(merged.kind_of("a"), Some(MemberKind::Method));
    assert_eq!(merged.property_value("a"), Some(&1));
    assert!(
        Unary::try_from_parts(merged.methods().clone(), merged.properties().clone()).is_err()
    );
}

#[test]
fn test_layered_priority() {
    let defaults = Unary::new()
        .method("greet", always(), |_| "hello")
        .unwrap()
        .property("volume", 1)
        .unwrap();
    let loud = Unary::new().property("volume", 11).unwrap();
    let polite = Unary::new()
        .method("greet", greater_than(100), |_| "good day")
        .unwrap();

    let env = Unary::layered([defaults, loud, polite]);

    assert_eq!(
        outcomes(&env, "greet", &[1, 1000]),
        vec![Some("hello"), Some("good day")]
    );
    assert_eq!(env.property_value("volume"), Some(&11));
}

#[test]
fn test_layered_empty_is_empty() {
    let env = Unary::layered(Vec::new());
    assert!(env.is_empty());
}

#[test]
fn test_environment_shared_across_threads() {
    let env = Unary::new()
        .method("parity", |n| n % 2 == 0, |_| "even")
        .unwrap()
        .method("parity", always(), |_| "odd")
        .unwrap();

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4i64)
            .map(|n| {
                let env = &env;
                scope.spawn(move || env.invoke("parity", &n).unwrap())
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(results, vec!["even", "odd", "even", "odd"]);
}
