use crate::types::contract_violation::{violated, ContractViolation};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Optional value that makes absence an explicit, checked state.
///
/// `Maybe<T>` is either [`Present`](Maybe::Present) with exactly one value or
/// [`Absent`](Maybe::Absent). Chains of "maybe produces a value" steps are
/// written with [`map`](Maybe::map) and [`and_then`](Maybe::and_then), which
/// stop at the first absence without calling the remaining steps.
///
/// # Serde Support
///
/// `Maybe` implements `Serialize` and `Deserialize` when `T` does and the
/// `serde` feature is enabled.
///
/// # Type Parameters
///
/// * `T` - The held value type
///
/// # Variants
///
/// * `Absent` - No value
/// * `Present(T)` - Exactly one value
///
/// # Examples
///
/// ```
/// use maybe_rail::Maybe;
///
/// let name = Maybe::some("ferris");
/// assert!(name.has_value());
/// assert_eq!(name.value(), &"ferris");
///
/// let missing: Maybe<&str> = Maybe::none();
/// assert_eq!(missing.value_or_default("anonymous"), "anonymous");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Maybe<T> {
    Absent,
    Present(T),
}

impl<T> Maybe<T> {
    /// Creates a present value.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to hold
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// let m = Maybe::some(42);
    /// assert_eq!(m, Maybe::Present(42));
    /// ```
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates a present value from a nullable source that must not be empty.
    ///
    /// Use `Maybe::from(option)` when an empty source is an acceptable absence.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::NullValue`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// let m = Maybe::some_checked(Some("config.toml"));
    /// assert_eq!(m, Maybe::some("config.toml"));
    /// ```
    ///
    /// ```should_panic
    /// use maybe_rail::Maybe;
    ///
    /// let _ = Maybe::<i32>::some_checked(None);
    /// ```
    #[inline]
    #[track_caller]
    pub fn some_checked(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => violated(ContractViolation::NullValue),
        }
    }

    /// Creates an absent value.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// let m: Maybe<u8> = Maybe::none();
    /// assert!(m.is_absent());
    /// ```
    #[inline]
    pub const fn none() -> Self {
        Self::Absent
    }

    /// Returns `true` if a value is present.
    #[must_use]
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[must_use]
    #[inline]
    pub const fn is_absent(&self) -> bool {
        !self.has_value()
    }

    /// Borrows the held value.
    ///
    /// Prefer [`match_ref`](Maybe::match_ref), [`if_some`](Maybe::if_some) or
    /// [`try_value`](Maybe::try_value) when absence is possible.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::AbsentValue`] if absent.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use maybe_rail::Maybe;
    ///
    /// let m: Maybe<i32> = Maybe::none();
    /// let _ = m.value();
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Present(value) => value,
            Self::Absent => violated(ContractViolation::AbsentValue),
        }
    }

    /// Consumes the container and returns the held value.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::AbsentValue`] if absent.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => violated(ContractViolation::AbsentValue),
        }
    }

    /// Borrows the held value, reporting absence as an error instead of panicking.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::{ContractViolation, Maybe};
    ///
    /// assert_eq!(Maybe::some(3).try_value(), Ok(&3));
    /// assert_eq!(Maybe::<i32>::none().try_value(), Err(ContractViolation::AbsentValue));
    /// ```
    #[inline]
    pub fn try_value(&self) -> Result<&T, ContractViolation> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(ContractViolation::AbsentValue),
        }
    }

    /// Returns the held value, or `default` when absent.
    ///
    /// # Arguments
    ///
    /// * `default` - The fallback value
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// assert_eq!(Maybe::some(7).value_or_default(0), 7);
    /// assert_eq!(Maybe::none().value_or_default(0), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn value_or_default(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the held value, or computes a fallback when absent.
    ///
    /// `f` is only called when the value is absent.
    #[must_use]
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => f(),
        }
    }

    /// Returns the held value, or the caller's own error when absent.
    ///
    /// The error is returned as `Err` so it propagates with `?`.
    ///
    /// # Arguments
    ///
    /// * `error` - The error reported on absence
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct MissingUser;
    ///
    /// fn lookup(found: Maybe<u64>) -> Result<u64, MissingUser> {
    ///     let id = found.value_or_throw(MissingUser)?;
    ///     Ok(id * 10)
    /// }
    ///
    /// assert_eq!(lookup(Maybe::some(4)), Ok(40));
    /// assert_eq!(lookup(Maybe::none()), Err(MissingUser));
    /// ```
    #[inline]
    pub fn value_or_throw<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(error),
        }
    }

    /// Consumes the container, calling exactly one of the callbacks.
    ///
    /// # Arguments
    ///
    /// * `on_some` - Receives the held value when present
    /// * `on_none` - Called when absent
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// let greeting = Maybe::some("ana").match_with(|n| format!("hi {n}"), || "hi".to_string());
    /// assert_eq!(greeting, "hi ana");
    /// ```
    #[inline]
    pub fn match_with<U, S, N>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Self::Present(value) => on_some(value),
            Self::Absent => on_none(),
        }
    }

    /// Borrowing form of [`match_with`](Maybe::match_with).
    ///
    /// With `U = ()` this is the side-effecting dispatch: exactly one of the
    /// callbacks runs and the container stays available.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// use std::cell::RefCell;
    ///
    /// let seen = RefCell::new(Vec::new());
    /// let m = Maybe::some(5);
    /// m.match_ref(|v| seen.borrow_mut().push(*v), || seen.borrow_mut().push(0));
    /// assert_eq!(seen.into_inner(), vec![5]);
    /// assert!(m.has_value());
    /// ```
    #[inline]
    pub fn match_ref<'a, U, S, N>(&'a self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(&'a T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Self::Present(value) => on_some(value),
            Self::Absent => on_none(),
        }
    }

    /// Calls `action` with the held value when present; does nothing otherwise.
    #[inline]
    pub fn if_some<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = self {
            action(value);
        }
    }

    /// Maps the held value using the provided function.
    ///
    /// Absence propagates without calling `f`.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the value from type `T` to type `U`
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// assert_eq!(Maybe::some(21).map(|x| x * 2), Maybe::some(42));
    /// assert_eq!(Maybe::<i32>::none().map(|x| x * 2), Maybe::none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(f(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Chains a step that may itself produce no value.
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the next optional value
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// fn half(x: u32) -> Maybe<u32> {
    ///     if x % 2 == 0 { Maybe::some(x / 2) } else { Maybe::none() }
    /// }
    ///
    /// assert_eq!(Maybe::some(8).and_then(half).and_then(half), Maybe::some(2));
    /// assert_eq!(Maybe::some(6).and_then(half).and_then(half), Maybe::none());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => f(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Returns `true` if a value is present and equals `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// let name = Maybe::some(String::from("ferris"));
    /// assert!(name.contains(&"ferris"));
    /// assert!(!Maybe::<String>::none().contains(&"ferris"));
    /// ```
    #[must_use]
    #[inline]
    pub fn contains<U>(&self, other: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self {
            Self::Present(value) => value == other,
            Self::Absent => false,
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Converts into the standard library's `Option`.
    #[must_use]
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}
