//! The `pipe!` macro for left-to-right function composition.

/// Composes functions left to right into a single closure.
///
/// `pipe!(f, g, h)` returns a closure computing `h(g(f(x)))`: data flows
/// through the functions in the order they are written. `pipe!()` is
/// [`identity`](crate::compose::identity).
///
/// # Examples
///
/// ```
/// use pointfree::pipe;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
///
/// assert_eq!(pipe!(add_one, double)(3), 8);
/// assert_eq!(pipe!()(3), 3);
/// ```
///
/// Each step may change the type:
///
/// ```
/// use pointfree::pipe;
///
/// let describe = pipe!(
///     |text: &str| text.trim().to_string(),
///     |text: String| text.len(),
///     |length: usize| format!("{length} chars"),
/// );
/// assert_eq!(describe("  hello "), "5 chars");
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::compose::identity
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::pipe!($($remaining_functions),+);
        move |input| remaining(first(input))
    }};
}
