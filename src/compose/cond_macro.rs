//! The `cond!` macro for predicate-driven branching.

/// Builds a closure that dispatches on the first predicate that holds.
///
/// ```text
/// cond!(otherwise; predicate_1 => function_1, predicate_2 => function_2, ...)
/// ```
///
/// Predicates receive `&input` and are tested in order. The first one that
/// returns `true` decides the result: its function is applied to the input
/// and no later predicate is evaluated, whatever the function returns. When
/// no predicate holds, `otherwise(input)` is returned.
///
/// # Examples
///
/// ```
/// use pointfree::cond;
///
/// let classify = cond!(
///     |_: i32| "positive";
///     |n: &i32| *n < 0 => |_| "negative",
///     |n: &i32| *n == 0 => |_| "zero",
/// );
///
/// assert_eq!(classify(-4), "negative");
/// assert_eq!(classify(0), "zero");
/// assert_eq!(classify(9), "positive");
/// ```
///
/// A matched branch is final even when it produces a "falsy" value:
///
/// ```
/// use pointfree::cond;
///
/// let clamp = cond!(|n: i32| n; |n: &i32| *n < 0 => |_| 0);
/// assert_eq!(clamp(-3), 0);
/// ```
#[macro_export]
macro_rules! cond {
    ($otherwise:expr $(;)? $(,)?) => {{
        let otherwise = $otherwise;
        move |input| otherwise(input)
    }};

    ($otherwise:expr; $predicate:expr => $function:expr $(, $remaining_predicates:expr => $remaining_functions:expr)* $(,)?) => {{
        let predicate = $predicate;
        let function = $function;
        let remaining = $crate::cond!($otherwise; $($remaining_predicates => $remaining_functions),*);
        move |input| {
            if predicate(&input) {
                function(input)
            } else {
                remaining(input)
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn cond_without_clauses_runs_otherwise() {
        let negate = cond!(|n: i32| -n);
        assert_eq!(negate(5), -5);
    }

    #[rstest]
    #[case(15, "FizzBuzz")]
    #[case(9, "Fizz")]
    #[case(10, "Buzz")]
    #[case(7, "7")]
    fn cond_takes_the_first_matching_clause(#[case] input: u32, #[case] expected: &str) {
        let fizz_buzz = cond!(
            |n: u32| n.to_string();
            |n: &u32| n % 15 == 0 => |_| "FizzBuzz".to_string(),
            |n: &u32| n % 3 == 0 => |_| "Fizz".to_string(),
            |n: &u32| n % 5 == 0 => |_| "Buzz".to_string(),
        );
        assert_eq!(fizz_buzz(input), expected);
    }

    #[rstest]
    fn cond_stops_testing_after_a_match() {
        let later_checks = Cell::new(0);
        let pick = cond!(
            |_: i32| false;
            |_: &i32| true => |_| false,
            |_: &i32| {
                later_checks.set(later_checks.get() + 1);
                true
            } => |_| true,
        );

        assert!(!pick(1));
        assert_eq!(later_checks.get(), 0);
    }
}
