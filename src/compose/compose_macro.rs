//! The `compose!` macro for right-to-left function composition.

/// Composes functions right to left, as in mathematical notation.
///
/// `compose!(f, g, h)` returns a closure computing `f(g(h(x)))`: the last
/// function listed runs first. `compose!()` is
/// [`identity`](crate::compose::identity).
///
/// # Examples
///
/// ```
/// use pointfree::compose;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
///
/// // add_one(double(3))
/// assert_eq!(compose!(add_one, double)(3), 7);
/// ```
///
/// # Laws
///
/// - `compose!(f, compose!(g, h))` behaves as `compose!(compose!(f, g), h)`
/// - `compose!(identity, f)` and `compose!(f, identity)` behave as `f`
#[macro_export]
macro_rules! compose {
    () => {
        $crate::compose::identity
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $($inner_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner = $crate::compose!($($inner_functions),+);
        move |input| outer(inner(input))
    }};
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    #[rstest]
    fn compose_empty_is_identity() {
        assert_eq!(compose!()(42), 42);
    }

    #[rstest]
    fn compose_applies_right_to_left() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let square = |x: i32| x * x;
        // add_one(double(square(3))) = add_one(18) = 19
        assert_eq!(compose!(add_one, double, square)(3), 19);
    }

    #[rstest]
    fn compose_mirrors_pipe() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        assert_eq!(compose!(add_one, double)(3), crate::pipe!(double, add_one)(3));
    }
}
