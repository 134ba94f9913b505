//! Ergonomic macros for building failures with formatted messages.
//!
//! - [`macro@crate::fail`] - Formats a message and wraps it in
//!   [`Outcome::Failure`](crate::Outcome::Failure), or in
//!   [`Status::Failure`](crate::Status::Failure) with the `status:` prefix.
//!
//! # Examples
//!
//! ```
//! use maybe_rail::{fail, Outcome, Status};
//!
//! let user_id = 42;
//! let outcome: Outcome<()> = fail!("user {} not found", user_id);
//! assert_eq!(outcome.error(), "user 42 not found");
//!
//! let status: Status = fail!(status: "quota {} exceeded", "disk");
//! assert_eq!(status.error(), "quota disk exceeded");
//! ```

/// Creates a failed [`Outcome`](crate::Outcome) or [`Status`](crate::Status)
/// with a formatted message.
///
/// The message is always formatted, so inline captures such as
/// `fail!("user {id} missing")` work as they do with `format!`.
///
/// # Syntax
///
/// - `fail!("fmt {}", args..)` - `Outcome::fail(format!(..))`
/// - `fail!(status: ...)` - the same, producing a `Status`
///
/// # Examples
///
/// ```
/// use maybe_rail::prelude::*;
///
/// fn withdraw(balance: u32, amount: u32) -> Outcome<u32> {
///     if amount > balance {
///         return fail!("cannot withdraw {} from {}", amount, balance);
///     }
///     Outcome::ok(balance - amount)
/// }
///
/// assert_eq!(withdraw(10, 3), Outcome::ok(7));
/// assert_eq!(withdraw(1, 3).error(), "cannot withdraw 3 from 1");
/// ```
#[macro_export]
macro_rules! fail {
    (status: $($arg:tt)+) => {
        $crate::Status::fail(format!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::Outcome::fail(format!($($arg)+))
    };
}
