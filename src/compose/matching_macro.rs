//! The `matching!` macro for equality-driven dispatch.

/// Builds a closure that looks its input up among literal cases.
///
/// ```text
/// matching!(fallback; literal_1 => function_1, literal_2 => function_2, ...)
/// ```
///
/// Cases are compared with `==` in order and the first equal one applies
/// its function to the input. When no case is equal, the closure returns a
/// clone of `fallback` itself; the fallback is a value and is never called.
///
/// This is the closure-building counterpart of
/// [`Matcher`](crate::control::Matcher).
///
/// # Examples
///
/// ```
/// use pointfree::matching;
///
/// let name = matching!("none"; 1 => |_| "one", 2 => |_| "two");
///
/// assert_eq!(name(2), "two");
/// assert_eq!(name(5), "none");
/// ```
#[macro_export]
macro_rules! matching {
    ($fallback:expr $(;)? $(,)?) => {{
        let fallback = $fallback;
        move |_input| ::std::clone::Clone::clone(&fallback)
    }};

    ($fallback:expr; $literal:expr => $function:expr $(, $remaining_literals:expr => $remaining_functions:expr)* $(,)?) => {{
        let literal = $literal;
        let function = $function;
        let remaining = $crate::matching!($fallback; $($remaining_literals => $remaining_functions),*);
        move |input| {
            if input == literal {
                function(input)
            } else {
                remaining(input)
            }
        }
    }};
}
