#![cfg(feature = "compose")]
//! Tests for `curry!` and `apply!`.

use pointfree::{apply, curry};
use proptest::prelude::*;
use rstest::rstest;

fn add(first: i32, second: i32) -> i32 {
    first + second
}

fn add_three(first: i32, second: i32, third: i32) -> i32 {
    first + second + third
}

fn concat(first: &str, second: &str) -> String {
    format!("{first}{second}")
}

fn describe(name: String, age: u32, city: String, admin: bool) -> String {
    let role = if admin { "admin" } else { "user" };
    format!("{name} ({age}) from {city}, {role}")
}

mod paths {
    pub fn scale(factor: f64, value: f64) -> f64 {
        factor * value
    }
}

#[rstest]
fn curried_function_takes_one_argument_per_call() {
    let curried_add = curry!(add, 2);
    assert_eq!(curried_add(5)(3), 8);
}

#[rstest]
fn partial_applications_are_reusable() {
    let curried_add = curry!(add, 2);
    let add_five = curried_add(5);

    for value in -10..10 {
        assert_eq!(add_five(value), 5 + value);
    }
}

#[rstest]
fn call_shapes_agree_through_apply() {
    let curried = curry!(add_three, 3);

    assert_eq!(curried(1)(2)(3), 6);
    assert_eq!(apply!(curried, 1, 2, 3), 6);
    assert_eq!(apply!(curried, 1, 2)(3), 6);
    assert_eq!(apply!(curried(1), 2, 3), 6);
}

#[rstest]
fn closures_are_curried_by_parameter_count() {
    let volume = curry!(|width: u32, height: u32, depth: u32| width * height * depth);
    let flat = volume(10)(1);
    assert_eq!(flat(3), 30);
    assert_eq!(flat(7), 70);
}

#[rstest]
fn borrowed_arguments_are_forwarded() {
    let greet = curry!(concat, 2)("Hello, ");
    assert_eq!(greet("World"), "Hello, World");
    assert_eq!(greet("Rust"), "Hello, Rust");
}

#[rstest]
fn owned_arguments_are_cloned_for_each_call() {
    let describe_ada = curry!(describe, 4)(String::from("Ada"))(36);
    let in_london = describe_ada(String::from("London"));

    assert_eq!(in_london(true), "Ada (36) from London, admin");
    assert_eq!(in_london(false), "Ada (36) from London, user");
}

#[rstest]
fn paths_to_functions_are_accepted() {
    let triple = curry!(paths::scale, 2)(3.0);
    assert!((triple(2.5) - 7.5).abs() < f64::EPSILON);
}

#[rstest]
fn captured_state_is_shared_by_partials() {
    let offset = 100;
    let shifted_sum = curry!(move |a: i32, b: i32| a + b + offset);
    let from_one = shifted_sum(1);
    assert_eq!(from_one(1), 102);
    assert_eq!(from_one(2), 103);
}

proptest! {
    #[test]
    fn prop_curry_matches_uncurried(first: i16, second: i16, third: i16) {
        let (first, second, third) = (i32::from(first), i32::from(second), i32::from(third));
        let curried = curry!(add_three, 3);
        prop_assert_eq!(curried(first)(second)(third), add_three(first, second, third));
        prop_assert_eq!(apply!(curried(first), second)(third), add_three(first, second, third));
    }
}
