//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use maybe_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fail!`]
//! - **Types**: [`Maybe`], [`Outcome`], [`Status`]
//! - **Traits**: [`ToOutcome`], [`OutcomeExt`], [`StatusExt`]
//!
//! # Examples
//!
//! ```
//! use maybe_rail::prelude::*;
//!
//! fn find_email(user_id: u64) -> Maybe<&'static str> {
//!     if user_id == 1 { Maybe::some("ana@example.com") } else { Maybe::none() }
//! }
//!
//! fn domain_of(user_id: u64) -> Outcome<String> {
//!     find_email(user_id)
//!         .to_outcome("user has no email")
//!         .ensure(|email| email.contains('@'), "malformed email")
//!         .map(|email| email.split('@').nth(1).unwrap_or_default().to_string())
//! }
//!
//! assert_eq!(domain_of(1), Outcome::ok("example.com".to_string()));
//! assert_eq!(domain_of(2).error(), "user has no email");
//! ```

// Macros
pub use crate::fail;

// Core types
pub use crate::maybe::Maybe;
pub use crate::outcome::{Outcome, Status};

// Traits
pub use crate::traits::{OutcomeExt, StatusExt, ToOutcome};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::{MaybeTraceExt, OutcomeTraceExt};
