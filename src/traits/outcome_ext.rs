//! Railway combinators for [`Outcome`].
//!
//! This module provides [`OutcomeExt`], the chaining layer over the public
//! contract of [`Outcome`]. Transform combinators forward a failure
//! untouched; taps observe the outcome and hand it back unchanged.
//!
//! # Examples
//!
//! ```
//! use maybe_rail::traits::OutcomeExt;
//! use maybe_rail::Outcome;
//!
//! let mut logged = Vec::new();
//! let result = Outcome::ok(5)
//!     .ensure(|x| *x > 0, "must be positive")
//!     .map(|x| x * 2)
//!     .on_success(|x| logged.push(*x));
//!
//! assert_eq!(result, Outcome::ok(10));
//! assert_eq!(logged, vec![10]);
//! ```

use crate::outcome::Outcome;
use crate::types::ErrorMessage;

/// Chaining operations for [`Outcome`].
///
/// # Railway Semantics
///
/// | Combinator | On success | On failure |
/// |------------|-----------|------------|
/// | [`map`](OutcomeExt::map) / [`on_success_map`](OutcomeExt::on_success_map) | `ok(f(value))` | same message, `f` not called |
/// | [`and_then`](OutcomeExt::and_then) | `f(value)` | same message, `f` not called |
/// | [`ensure`](OutcomeExt::ensure) | unchanged, or `fail(message)` if rejected | unchanged, predicate not called |
/// | [`on_success`](OutcomeExt::on_success) | tap with the value | unchanged |
/// | [`on_failure`](OutcomeExt::on_failure) | unchanged | tap with the message |
/// | [`on_both`](OutcomeExt::on_both) | `f(self)` | `f(self)` |
pub trait OutcomeExt<T>: Sized {
    /// Transforms the success value; a failure keeps its message.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the success value from type `T` to type `K`
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::traits::OutcomeExt;
    /// use maybe_rail::Outcome;
    ///
    /// assert_eq!(Outcome::ok(2).map(|x| x + 1), Outcome::ok(3));
    ///
    /// let failed = Outcome::<i32>::fail("bad input").map(|x| x + 1);
    /// assert_eq!(failed.error(), "bad input");
    /// ```
    fn map<K, F>(self, f: F) -> Outcome<K>
    where
        F: FnOnce(T) -> K;

    /// Alias of [`map`](OutcomeExt::map) that reads as a pipeline step.
    #[inline]
    fn on_success_map<K, F>(self, f: F) -> Outcome<K>
    where
        F: FnOnce(T) -> K,
    {
        self.map(f)
    }

    /// Chains a fallible step.
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the next outcome
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::traits::OutcomeExt;
    /// use maybe_rail::Outcome;
    ///
    /// fn parse(input: &str) -> Outcome<u16> {
    ///     Outcome::from(input.parse::<u16>())
    /// }
    ///
    /// assert_eq!(Outcome::ok("80").and_then(parse), Outcome::ok(80));
    /// assert!(Outcome::ok("eighty").and_then(parse).is_failure());
    /// ```
    fn and_then<K, F>(self, f: F) -> Outcome<K>
    where
        F: FnOnce(T) -> Outcome<K>;

    /// Turns a success into a failure when `predicate` rejects its value.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Returns `true` to keep the success
    /// * `message` - Failure description used on rejection
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::traits::OutcomeExt;
    /// use maybe_rail::Outcome;
    ///
    /// let kept = Outcome::ok(5).ensure(|x| *x > 0, "must be positive");
    /// assert_eq!(kept, Outcome::ok(5));
    ///
    /// let rejected = Outcome::ok(-5).ensure(|x| *x > 0, "must be positive");
    /// assert_eq!(rejected.error(), "must be positive");
    /// ```
    fn ensure<P, M>(self, predicate: P, message: M) -> Outcome<T>
    where
        P: FnOnce(&T) -> bool,
        M: Into<ErrorMessage>;

    /// Calls `action` with the success value and returns the outcome unchanged.
    fn on_success<A>(self, action: A) -> Outcome<T>
    where
        A: FnOnce(&T);

    /// Calls `action` with the failure message and returns the outcome unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::traits::OutcomeExt;
    /// use maybe_rail::Outcome;
    ///
    /// let mut reported = None;
    /// let failed = Outcome::<u8>::fail("timeout").on_failure(|e| reported = Some(e.to_owned()));
    /// assert_eq!(reported.as_deref(), Some("timeout"));
    /// assert_eq!(failed, Outcome::fail("timeout"));
    /// ```
    fn on_failure<A>(self, action: A) -> Outcome<T>
    where
        A: FnOnce(&str);

    /// Hands the whole outcome to `f` and returns its result.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::traits::OutcomeExt;
    /// use maybe_rail::Outcome;
    ///
    /// let code = Outcome::<()>::fail("denied").on_both(|o| if o.is_success() { 200 } else { 403 });
    /// assert_eq!(code, 403);
    /// ```
    #[inline]
    fn on_both<U, F>(self, f: F) -> U
    where
        F: FnOnce(Self) -> U,
    {
        f(self)
    }
}

impl<T> OutcomeExt<T> for Outcome<T> {
    #[inline]
    fn map<K, F>(self, f: F) -> Outcome<K>
    where
        F: FnOnce(T) -> K,
    {
        match self {
            Outcome::Success(value) => Outcome::ok(f(value)),
            Outcome::Failure(message) => Outcome::Failure(message),
        }
    }

    #[inline]
    fn and_then<K, F>(self, f: F) -> Outcome<K>
    where
        F: FnOnce(T) -> Outcome<K>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(message) => Outcome::Failure(message),
        }
    }

    #[inline]
    fn ensure<P, M>(self, predicate: P, message: M) -> Outcome<T>
    where
        P: FnOnce(&T) -> bool,
        M: Into<ErrorMessage>,
    {
        let rejected = match &self {
            Outcome::Success(value) => !predicate(value),
            Outcome::Failure(_) => false,
        };

        if rejected {
            Outcome::fail(message)
        } else {
            self
        }
    }

    #[inline]
    fn on_success<A>(self, action: A) -> Outcome<T>
    where
        A: FnOnce(&T),
    {
        if let Outcome::Success(value) = &self {
            action(value);
        }
        self
    }

    #[inline]
    fn on_failure<A>(self, action: A) -> Outcome<T>
    where
        A: FnOnce(&str),
    {
        if let Some(message) = self.as_error() {
            action(message);
        }
        self
    }
}
