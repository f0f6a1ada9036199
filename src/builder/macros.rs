//! Macros for ergonomic guard lists.

/// Build a `Vec<Guard>` from bare names and bracketed groups.
///
/// Bracketed groups nest to any depth. Names that are not valid Rust
/// identifiers can be written as string literals.
///
/// # Example
///
/// ```
/// use statechart_render::core::Guard;
/// use statechart_render::guards;
///
/// let guards = guards![[many_guard1, many_guard2], many_guard3, "ok?"];
///
/// assert_eq!(
///     guards,
///     vec![
///         Guard::group([Guard::name("many_guard1"), Guard::name("many_guard2")]),
///         Guard::name("many_guard3"),
///         Guard::name("ok?"),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! guards {
    (@guard [$($inner:tt),* $(,)?]) => {
        $crate::core::Guard::Group(::std::vec![$($crate::guards!(@guard $inner)),*])
    };
    (@guard $name:ident) => {
        $crate::core::Guard::name(::std::stringify!($name))
    };
    (@guard $name:literal) => {
        $crate::core::Guard::name($name)
    };
    ($($guard:tt),* $(,)?) => {
        ::std::vec![$($crate::guards!(@guard $guard)),*]
    };
}
