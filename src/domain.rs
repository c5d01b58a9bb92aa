//! Discretely ordered domains.
//!
//! A domain pairs a total order with a stepping rule. It is what turns a
//! bare type into something ranges can be merged over: two ranges `[a, b]`
//! and `[c, d]` are adjacent when the successor of `b` is `c`.
use std::{cmp::Ordering, fmt};

use range_traits::PartialEnum;

use crate::{Error, Range, Value};

/// Total order and stepping rule over `T`.
///
/// # Contract
///
/// The stepping rule must agree with the order:
/// - `succ(t)`, when defined, compares strictly greater than `t`, and no
///   value of the domain compares strictly between `t` and `succ(t)`;
/// - `pred(t)`, when defined, is the mirror image of `succ`.
///
/// This is not checked. A stepping rule that skips values makes adjacent
/// ranges look disjoint, and one that is not monotonic silently breaks the
/// canonical form of every [`RangeSet`](crate::RangeSet) built over it.
///
/// `succ` and `pred` return `None` at the edges of the domain instead of
/// wrapping around.
pub trait Discrete<T> {
	fn compare(&self, a: &T, b: &T) -> Ordering;

	fn succ(&self, t: &T) -> Option<T>;

	fn pred(&self, t: &T) -> Option<T>;

	/// Wraps `t` into a value of this domain.
	fn value(&self, t: T) -> Value<T, Self>
	where
		Self: Sized + Clone,
	{
		Value::new(t, self.clone())
	}

	/// Creates the range `[min, max]` in this domain.
	///
	/// Fails with [`Error::InvalidRange`] if `min` is after `max`.
	fn range(&self, min: T, max: T) -> Result<Range<T, Self>, Error<T>>
	where
		Self: Sized + Clone,
	{
		Range::between(self.value(min), self.value(max))
	}
}

/// Natural domain of a type.
///
/// Uses the [`Ord`] implementation of `T` and its [`PartialEnum`]
/// stepping functions. This covers every primitive integer type and `char`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + PartialEnum> Discrete<T> for Natural {
	fn compare(&self, a: &T, b: &T) -> Ordering {
		a.cmp(b)
	}

	fn succ(&self, t: &T) -> Option<T> {
		t.succ()
	}

	fn pred(&self, t: &T) -> Option<T> {
		t.pred()
	}
}

/// Domain assembled at run time from plain functions.
///
/// ```
/// use discrete_range_set::{Discrete, Stepper};
///
/// // even numbers only.
/// let evens = Stepper::ordered(|t: &i64| t.checked_add(2), |t: &i64| t.checked_sub(2));
///
/// let a = evens.range(0, 4).unwrap();
/// let b = evens.range(6, 10).unwrap();
/// assert_eq!(a.enclose_with(&b), evens.range(0, 10).unwrap());
/// ```
pub struct Stepper<T> {
	compare: fn(&T, &T) -> Ordering,
	succ: fn(&T) -> Option<T>,
	pred: fn(&T) -> Option<T>,
}

impl<T> Stepper<T> {
	pub fn new(
		compare: fn(&T, &T) -> Ordering,
		succ: fn(&T) -> Option<T>,
		pred: fn(&T) -> Option<T>,
	) -> Self {
		Self {
			compare,
			succ,
			pred,
		}
	}

	/// Stepper using the [`Ord`] implementation of `T` as comparator.
	pub fn ordered(succ: fn(&T) -> Option<T>, pred: fn(&T) -> Option<T>) -> Self
	where
		T: Ord,
	{
		Self::new(T::cmp, succ, pred)
	}
}

impl<T> Clone for Stepper<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Stepper<T> {}

impl<T> fmt::Debug for Stepper<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("Stepper").finish_non_exhaustive()
	}
}

impl<T> Discrete<T> for Stepper<T> {
	fn compare(&self, a: &T, b: &T) -> Ordering {
		(self.compare)(a, b)
	}

	fn succ(&self, t: &T) -> Option<T> {
		(self.succ)(t)
	}

	fn pred(&self, t: &T) -> Option<T> {
		(self.pred)(t)
	}
}
