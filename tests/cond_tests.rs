#![cfg(feature = "compose")]
//! Tests for `cond!`.

use pointfree::compose::not;
use pointfree::{cond, pipe};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
enum Shipping {
    Free,
    Flat(u32),
    Weighted(u32),
}

fn shipping_for(total_cents: u32) -> Shipping {
    let rule = cond!(
        |total: u32| Shipping::Weighted(total / 10);
        |total: &u32| *total >= 10_000 => |_| Shipping::Free,
        |total: &u32| *total >= 2_000 => |_| Shipping::Flat(500),
    );
    rule(total_cents)
}

#[rstest]
#[case(25_000, Shipping::Free)]
#[case(10_000, Shipping::Free)]
#[case(4_000, Shipping::Flat(500))]
#[case(1_500, Shipping::Weighted(150))]
fn first_holding_predicate_decides(#[case] total: u32, #[case] expected: Shipping) {
    assert_eq!(shipping_for(total), expected);
}

#[rstest]
#[case(0, 0)]
#[case(-7, 0)]
#[case(12, 99)]
fn falsy_branch_results_do_not_fall_through(#[case] input: i32, #[case] expected: i32) {
    let clamp = cond!(
        |n: i32| n * 100;
        |n: &i32| *n <= 0 => |_| 0,
        |_: &i32| true => |_| 99,
    );
    assert_eq!(clamp(input), expected);
}

#[rstest]
fn cond_composes_with_not_and_pipe() {
    let is_blank = |text: &String| text.trim().is_empty();
    let label = pipe!(
        |text: &str| text.to_string(),
        cond!(
            |_: String| String::from("(empty)");
            not(is_blank) => |text: String| text.trim().to_string(),
        ),
    );

    assert_eq!(label("  hi "), "hi");
    assert_eq!(label("   "), "(empty)");
}
