//! Optional values without sentinels.
//!
//! This module provides the [`Maybe`] type, an explicit `Absent` / `Present`
//! container, together with zero-or-one element iterators and collection
//! support.
//!
//! # Key Components
//!
//! - [`Maybe`] - Core type holding either nothing or exactly one value
//! - Iterator adapters over the held value
//! - `FromIterator` support that is absent as soon as one element is absent
//!
//! # Examples
//!
//! ```
//! use maybe_rail::maybe::Maybe;
//!
//! let port = Maybe::some("8080").and_then(|p| Maybe::from(p.parse::<u16>().ok()));
//! assert!(port.contains(&8080u16));
//!
//! let total: u16 = port.iter().sum();
//! assert_eq!(total, 8080);
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
