//! The `apply!` macro for feeding arguments to curried functions.

/// Applies arguments to a curried function one at a time.
///
/// `apply!(f, a, b, c)` expands to `f(a)(b)(c)`. It lets call sites stay
/// the same whether the arguments are supplied together or spread over
/// several partial applications.
///
/// # Examples
///
/// ```
/// use pointfree::{apply, curry};
///
/// fn add3(a: i32, b: i32, c: i32) -> i32 {
///     a + b + c
/// }
///
/// let add = curry!(add3, 3);
/// let add_one = add(1);
///
/// assert_eq!(apply!(add, 1, 2, 3), 6);
/// assert_eq!(apply!(add_one, 2, 3), 6);
/// ```
#[macro_export]
macro_rules! apply {
    ($function:expr $(,)?) => {
        $function
    };

    ($function:expr, $($argument:expr),+ $(,)?) => {
        ($function)$(($argument))+
    };
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    #[rstest]
    fn apply_feeds_each_argument_in_turn() {
        let join = |a: &'static str| move |b: &'static str| format!("{a}-{b}");
        assert_eq!(apply!(join, "left", "right"), "left-right");
    }

    #[rstest]
    fn apply_without_arguments_is_the_function() {
        let double = |x: i32| x * 2;
        assert_eq!(apply!(double)(4), 8);
    }
}
