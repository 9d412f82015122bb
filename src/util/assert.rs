//! Contract checks. These are not error paths: a failed check is a caller bug and panics with the
//! location and the expression that failed.

pub fn assert_partial_ord<T: PartialOrd>(_: &T) {}
pub fn assert_same_type<T, U>(_: &T, _: &U) {}
pub fn assert_type<T>(_: &T) {}

#[allow(unused_macros)]
#[macro_export]
macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}
#[allow(unused_imports)]
pub use current_location;

/// Formats the optional trailing context of a failed check.
#[doc(hidden)]
pub fn context(extra: Option<&dyn std::fmt::Display>) -> String {
    extra.map(|extra| format!(": {extra}")).unwrap_or_default()
}

/// Checks that a boolean expression holds, with optional context for the panic message.
#[allow(unused_macros)]
#[macro_export]
macro_rules! check {
    ($cond:expr $(, $extra:expr)? $(,)?) => {{
        let value = $cond;
        $crate::util::assert::assert_type::<bool>(&value);
        if !value {
            panic!(
                "check failed: {}: {}{}",
                $crate::util::assert::current_location!(),
                stringify!($cond),
                $crate::util::assert::context(
                    None $(.or(Some(&$extra as &dyn ::std::fmt::Display)))?
                ),
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check;

/// Checks `lhs < rhs`. Used for component and column indices.
#[allow(unused_macros)]
#[macro_export]
macro_rules! check_lt {
    ($lhs:expr, $rhs:expr) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_partial_ord(&lhs);
        if lhs >= rhs {
            panic!(
                "check failed: {}: {} < {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check_lt;

/// Checks `lhs.almost_eq(rhs)`, for anything with an `almost_eq()` method (vectors, matrices).
#[allow(unused_macros)]
#[macro_export]
macro_rules! check_almost_eq {
    ($lhs:expr, $rhs:expr $(, $extra:expr)? $(,)?) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        if !lhs.almost_eq(rhs) {
            panic!(
                "check failed: {}: {} ~= {}: {:?} vs. {:?}{}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs,
                $crate::util::assert::context(
                    None $(.or(Some(&$extra as &dyn ::std::fmt::Display)))?
                ),
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check_almost_eq;
