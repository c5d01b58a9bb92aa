//! Sets of closed ranges over discretely ordered domains.
//!
//! A [`RangeSet`] is a union of closed ranges `[min, max]` kept in canonical
//! form: ranges are sorted, disjoint, and never adjacent. Because the domain
//! is discrete, `[1, 2]` and `[3, 4]` touch and are merged into `[1, 4]`.
//! This library defines three basic types, [`Value`], [`Range`] and
//! [`RangeSet`], over any domain implementing [`Discrete`].
//!
//! ## Usage
//!
//! Primitive integers and `char` work out of the box through the [`Natural`]
//! domain.
//!
//! ```
//! use discrete_range_set::{Range, RangeSet};
//!
//! let set: RangeSet<i32> = RangeSet::of([
//!   Range::new(1, 2).unwrap(),
//!   Range::new(3, 4).unwrap(),
//!   Range::new(8, 9).unwrap(),
//! ]);
//! assert_eq!(set.range_count(), 2);
//! assert_eq!(set.to_string(), "{[1, 4], [8, 9]}");
//! ```
//!
//! Sets are immutable values supporting the usual set algebra:
//!
//! ```
//! # use discrete_range_set::{Range, RangeSet};
//! let a: RangeSet<i32> = Range::new(4, 9).unwrap().into();
//! let b: RangeSet<i32> = Range::new(6, 7).unwrap().into();
//!
//! assert_eq!(a.difference(&b).to_string(), "{[4, 5], [8, 9]}");
//! assert_eq!(a.intersect(&b), b);
//! assert_eq!(a.union(&b), a);
//! assert!(a.contains(&b));
//! ```
//!
//! Constructing a range with its minimum after its maximum is an error,
//! the endpoints are never swapped:
//!
//! ```
//! # use discrete_range_set::{Error, Range};
//! assert_eq!(
//!   Range::<u8>::new(9, 4),
//!   Err(Error::InvalidRange { min: 9, max: 4 })
//! );
//! ```
//!
//! ### Custom domains
//!
//! Any type can be used once it is given an order and a stepping rule, either
//! by implementing [`Discrete`] or with a run-time [`Stepper`].
//!
//! ```
//! use std::cmp::Ordering;
//! use discrete_range_set::{Discrete, RangeSet};
//!
//! /// Hours of a day, from 0 to 23.
//! #[derive(Clone, Copy)]
//! struct Hours;
//!
//! impl Discrete<u8> for Hours {
//!   fn compare(&self, a: &u8, b: &u8) -> Ordering {
//!     a.cmp(b)
//!   }
//!
//!   fn succ(&self, t: &u8) -> Option<u8> {
//!     (*t < 23).then(|| t + 1)
//!   }
//!
//!   fn pred(&self, t: &u8) -> Option<u8> {
//!     t.checked_sub(1)
//!   }
//! }
//!
//! let office = RangeSet::of([Hours.range(9, 11).unwrap(), Hours.range(13, 17).unwrap()]);
//! let meetings = RangeSet::of([Hours.range(10, 10).unwrap(), Hours.range(16, 18).unwrap()]);
//! assert_eq!(office.difference(&meetings).to_string(), "{[9, 9], [11, 11], [13, 15]}");
//! ```
//!
//! ## Features
//!
//! - `serde`: serialization of ranges and sets.
//! - `chrono`: calendar domains over days and months, see the `calendar`
//!   module.
pub mod domain;
mod error;
mod range;
pub mod set;
mod value;

#[cfg(feature = "chrono")]
pub mod calendar;

#[cfg(feature = "serde")]
mod serde;

pub use domain::{Discrete, Natural, Stepper};
pub use error::*;
pub use range::*;
pub use set::RangeSet;
pub use value::Value;
