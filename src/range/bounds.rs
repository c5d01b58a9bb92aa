use std::ops::{Bound, RangeBounds, RangeInclusive};

use crate::{Discrete, Endpoint, Error, Range, Value};

impl<T: Clone, D: Discrete<T> + Clone> Range<T, D> {
	/// Converts standard range bounds into a closed range of `domain`.
	///
	/// Excluded bounds are stepped inward, so `2..5` becomes `[2, 4]`.
	/// Unbounded ends are rejected with [`Error::MissingValue`], as is an
	/// excluded bound with nothing to step to.
	///
	/// ```
	/// use discrete_range_set::{Endpoint, Error, Natural, Range};
	///
	/// let r = Range::try_from_bounds(Natural, 2u32..5).unwrap();
	/// assert_eq!(r, Range::new(2, 4).unwrap());
	///
	/// assert_eq!(
	///   Range::<u32>::try_from_bounds(Natural, 2..),
	///   Err(Error::MissingValue(Endpoint::Max))
	/// );
	/// ```
	pub fn try_from_bounds<R: RangeBounds<T>>(domain: D, bounds: R) -> Result<Self, Error<T>> {
		let min = match bounds.start_bound() {
			Bound::Included(t) => Some(t.clone()),
			Bound::Excluded(t) => domain.succ(t),
			Bound::Unbounded => None,
		}
		.ok_or(Error::MissingValue(Endpoint::Min))?;

		let max = match bounds.end_bound() {
			Bound::Included(t) => Some(t.clone()),
			Bound::Excluded(t) => domain.pred(t),
			Bound::Unbounded => None,
		}
		.ok_or(Error::MissingValue(Endpoint::Max))?;

		Self::between(Value::new(min, domain.clone()), Value::new(max, domain))
	}
}

impl<T: Clone, D: Discrete<T> + Clone + Default> TryFrom<RangeInclusive<T>> for Range<T, D> {
	type Error = Error<T>;

	fn try_from(range: RangeInclusive<T>) -> Result<Self, Error<T>> {
		let (min, max) = range.into_inner();
		Self::new(min, max)
	}
}
