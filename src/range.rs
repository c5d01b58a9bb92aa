use std::{cmp::Ordering, fmt};

use crate::{Discrete, Error, Natural, RangeSet, Value};

mod bounds;
mod values;

pub use values::RangeValues;

/// Closed range `[min, max]`.
///
/// A range is never empty: `min <= max` is checked by every constructor.
/// Equal endpoints denote a single point.
#[derive(Clone, Copy)]
pub struct Range<T, D = Natural> {
	min: Value<T, D>,
	max: Value<T, D>,
}

impl<T, D: Discrete<T>> Range<T, D> {
	/// Creates the range between two values.
	///
	/// Fails with [`Error::InvalidRange`] if `min` is after `max`.
	/// The endpoints are never swapped.
	pub fn between(min: Value<T, D>, max: Value<T, D>) -> Result<Self, Error<T>> {
		if min.is_after(&max) {
			Err(Error::InvalidRange {
				min: min.into_value(),
				max: max.into_value(),
			})
		} else {
			Ok(Self { min, max })
		}
	}

	/// Creates the range `[min, max]` in the default domain.
	pub fn new(min: T, max: T) -> Result<Self, Error<T>>
	where
		D: Default,
	{
		Self::between(Value::from(min), Value::from(max))
	}

	pub fn singleton(t: T) -> Self
	where
		T: Clone,
		D: Default + Clone,
	{
		let min: Value<T, D> = Value::from(t);
		Self {
			max: min.clone(),
			min,
		}
	}

	pub fn min(&self) -> &T {
		self.min.value()
	}

	pub fn max(&self) -> &T {
		self.max.value()
	}

	pub fn min_value(&self) -> &Value<T, D> {
		&self.min
	}

	pub fn max_value(&self) -> &Value<T, D> {
		&self.max
	}

	pub fn into_values(self) -> (Value<T, D>, Value<T, D>) {
		(self.min, self.max)
	}

	pub fn is_singleton(&self) -> bool {
		self.min == self.max
	}

	/// Checks if the given element is in the range, bounds included.
	pub fn contains(&self, t: &T) -> bool {
		self.min.compare_to(t) != Ordering::Greater && self.max.compare_to(t) != Ordering::Less
	}

	pub fn contains_value(&self, value: &Value<T, D>) -> bool {
		self.min.is_before_or_equal(value) && self.max.is_after_or_equal(value)
	}

	/// Checks if both endpoints of `other` are in this range.
	pub fn contains_range(&self, other: &Self) -> bool {
		self.contains_value(&other.min) && self.contains_value(&other.max)
	}

	/// Checks if the two ranges share at least one element.
	///
	/// Testing the endpoints of `other` alone is not enough since `other`
	/// may enclose `self` entirely.
	pub fn intersects(&self, other: &Self) -> bool {
		self.contains_value(&other.min)
			|| self.contains_value(&other.max)
			|| other.contains_range(self)
	}

	pub fn is_disjoint(&self, other: &Self) -> bool {
		!self.intersects(other)
	}

	/// Checks if the whole range is strictly before `other`.
	pub fn is_before(&self, other: &Self) -> bool {
		self.max.is_before(&other.min)
	}

	/// Checks if the whole range is strictly after `other`.
	pub fn is_after(&self, other: &Self) -> bool {
		self.min.is_after(&other.max)
	}

	pub fn starts_before(&self, other: &Self) -> bool {
		self.min.is_before(&other.min)
	}

	/// Checks if `other` starts right after the end of this range.
	pub fn is_followed_by(&self, other: &Self) -> bool
	where
		D: Clone,
	{
		self.max.is_followed_by(&other.min)
	}

	/// Checks if the union of the two ranges is itself a range.
	pub fn connected_to(&self, other: &Self) -> bool
	where
		D: Clone,
	{
		self.intersects(other) || self.is_followed_by(other) || other.is_followed_by(self)
	}

	/// Smallest range spanning all the given ranges.
	///
	/// Gaps between the inputs are ignored. Returns `None` if there are no
	/// ranges to enclose.
	pub fn enclose<'a, I>(ranges: I) -> Option<Self>
	where
		I: IntoIterator<Item = &'a Self>,
		T: 'a + Clone,
		D: 'a + Clone,
	{
		ranges.into_iter().fold(None, |acc: Option<Self>, r| match acc {
			Some(acc) => Some(acc.enclose_with(r)),
			None => Some(r.clone()),
		})
	}

	/// Smallest range spanning both ranges.
	pub fn enclose_with(&self, other: &Self) -> Self
	where
		T: Clone,
		D: Clone,
	{
		Self {
			min: std::cmp::min(&self.min, &other.min).clone(),
			max: std::cmp::max(&self.max, &other.max).clone(),
		}
	}

	/// Common part of the two ranges, if any.
	pub fn intersect(&self, other: &Self) -> Option<Self>
	where
		T: Clone,
		D: Clone,
	{
		if self.intersects(other) {
			Some(Self {
				min: std::cmp::max(&self.min, &other.min).clone(),
				max: std::cmp::min(&self.max, &other.max).clone(),
			})
		} else {
			None
		}
	}

	/// Removes `to_remove` from this range.
	///
	/// Returns the fragments left on each side of `to_remove`, in
	/// ascending order. A range that does not intersect `to_remove` is
	/// returned unchanged as the first fragment.
	pub fn subtract(&self, to_remove: &Self) -> (Option<Self>, Option<Self>)
	where
		T: Clone,
		D: Clone,
	{
		if !self.intersects(to_remove) {
			return (Some(self.clone()), None);
		}

		if to_remove.contains_range(self) {
			return (None, None);
		}

		let left = if to_remove.min.is_after(&self.min) {
			self.head_before(&to_remove.min)
		} else {
			None
		};

		let right = if to_remove.max.is_before(&self.max) {
			self.tail_after(&to_remove.max)
		} else {
			None
		};

		(left, right)
	}

	/// `[self.min, pred(bound)]`, provided `bound` is after `self.min`.
	fn head_before(&self, bound: &Value<T, D>) -> Option<Self>
	where
		T: Clone,
		D: Clone,
	{
		bound.previous().map(|max| Self {
			min: self.min.clone(),
			max,
		})
	}

	/// `[succ(bound), self.max]`, provided `bound` is before `self.max`.
	fn tail_after(&self, bound: &Value<T, D>) -> Option<Self>
	where
		T: Clone,
		D: Clone,
	{
		bound.next().map(|min| Self {
			min,
			max: self.max.clone(),
		})
	}

	/// Iterates over every element of the range, in ascending order.
	pub fn values(&self) -> RangeValues<T, D>
	where
		T: Clone,
		D: Clone,
	{
		RangeValues::new(self.clone())
	}
}

impl<T, D: Discrete<T>> PartialEq for Range<T, D> {
	fn eq(&self, other: &Self) -> bool {
		self.min == other.min && self.max == other.max
	}
}

impl<T, D: Discrete<T>> Eq for Range<T, D> {}

impl<T: fmt::Debug, D> fmt::Debug for Range<T, D> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("Range")
			.field("min", &self.min)
			.field("max", &self.max)
			.finish()
	}
}

impl<T: fmt::Display, D> fmt::Display for Range<T, D> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "[{}, {}]", self.min, self.max)
	}
}

impl<T, D: Discrete<T>> From<Range<T, D>> for RangeSet<T, D> {
	fn from(range: Range<T, D>) -> Self {
		RangeSet::from_canonical(vec![range])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn r(min: i32, max: i32) -> Range<i32> {
		Range::new(min, max).unwrap()
	}

	macro_rules! assert_subtract {
		($a:expr, $b:expr => ($left:expr, $right:expr)) => {
			assert_eq!($a.subtract(&$b), ($left, $right))
		};
	}

	#[test]
	fn invalid_range() {
		assert_eq!(
			Range::<i32>::new(5, 4).unwrap_err(),
			Error::InvalidRange { min: 5, max: 4 }
		);
		assert!(Range::<i32>::new(4, 4).unwrap().is_singleton());
	}

	#[test]
	fn contains() {
		assert!(!r(1, 1).contains(&3));
		assert!(!r(5, 5).contains(&3));
		assert!(r(1, 4).contains(&1));
		assert!(r(1, 4).contains(&4));

		assert!(r(1, 4).contains_range(&r(1, 1)));
		assert!(r(1, 4).contains_range(&r(4, 4)));
		assert!(r(1, 4).contains_range(&r(2, 4)));
		assert!(r(1, 4).contains_range(&r(1, 4)));
		assert!(!r(2, 4).contains_range(&r(1, 2)));
		assert!(!r(2, 4).contains_range(&r(3, 5)));
		assert!(!r(2, 3).contains_range(&r(1, 5)));
	}

	#[test]
	fn intersects() {
		assert!(r(1, 1).intersects(&r(1, 1)));
		assert!(r(1, 4).intersects(&r(2, 3)));
		assert!(r(2, 3).intersects(&r(1, 4)));
		assert!(r(1, 3).intersects(&r(2, 4)));
		assert!(r(2, 4).intersects(&r(1, 3)));
		assert!(r(7, 10).intersects(&r(9, 11)));

		assert!(!r(1, 1).intersects(&r(2, 2)));
		assert!(r(2, 2).is_disjoint(&r(1, 1)));
	}

	#[test]
	fn is_before_only_if_entirely_before() {
		assert!(r(1, 2).is_before(&r(3, 4)));
		assert!(!r(2, 3).is_before(&r(3, 4)));
		assert!(!r(3, 3).is_before(&r(3, 4)));
		assert!(!r(3, 4).is_before(&r(3, 4)));
		assert!(!r(4, 5).is_before(&r(3, 4)));
		assert!(!r(5, 5).is_before(&r(3, 4)));
	}

	#[test]
	fn is_after_only_if_entirely_after() {
		assert!(r(2, 2).is_after(&r(1, 1)));
		assert!(r(3, 4).is_after(&r(1, 2)));
		assert!(!r(1, 2).is_after(&r(1, 2)));
		assert!(!r(2, 4).is_after(&r(1, 3)));
		assert!(!r(2, 4).is_after(&r(1, 2)));
	}

	#[test]
	fn connected() {
		assert!(r(1, 2).connected_to(&r(3, 4)));
		assert!(r(3, 4).connected_to(&r(1, 2)));
		assert!(r(1, 3).connected_to(&r(3, 4)));
		assert!(!r(1, 2).connected_to(&r(4, 5)));
		assert!(r(1, 2).starts_before(&r(2, 2)));
	}

	#[test]
	fn enclose() {
		assert_eq!(Range::enclose(&[r(1, 3), r(5, 8)]), Some(r(1, 8)));
		assert_eq!(Range::enclose(&[r(5, 8), r(1, 6)]), Some(r(1, 8)));
		assert_eq!(Range::enclose(&[r(5, 8)]), Some(r(5, 8)));
		assert_eq!(Range::<i32>::enclose(&[]), None);
	}

	#[test]
	fn intersect() {
		assert_eq!(r(1, 1).intersect(&r(1, 1)), Some(r(1, 1)));
		assert_eq!(r(1, 4).intersect(&r(2, 3)), Some(r(2, 3)));
		assert_eq!(r(2, 3).intersect(&r(1, 4)), Some(r(2, 3)));
		assert_eq!(r(1, 3).intersect(&r(2, 4)), Some(r(2, 3)));
		assert_eq!(r(7, 10).intersect(&r(9, 11)), Some(r(9, 10)));
		assert_eq!(r(1, 1).intersect(&r(2, 2)), None);
		assert_eq!(r(2, 2).intersect(&r(1, 1)), None);
	}

	#[test]
	fn subtract() {
		// disjoint
		assert_subtract!(r(4, 9), r(1, 2) => (Some(r(4, 9)), None));
		assert_subtract!(r(4, 9), r(10, 12) => (Some(r(4, 9)), None));
		// full removal
		assert_subtract!(r(2, 4), r(1, 5) => (None, None));
		assert_subtract!(r(2, 4), r(2, 4) => (None, None));
		// interior split
		assert_subtract!(r(4, 9), r(6, 7) => (Some(r(4, 5)), Some(r(8, 9))));
		assert_subtract!(r(4, 9), r(5, 5) => (Some(r(4, 4)), Some(r(6, 9))));
		// head removed
		assert_subtract!(r(4, 9), r(2, 6) => (None, Some(r(7, 9))));
		assert_subtract!(r(4, 9), r(4, 6) => (None, Some(r(7, 9))));
		// tail removed
		assert_subtract!(r(4, 9), r(6, 11) => (Some(r(4, 5)), None));
		assert_subtract!(r(4, 9), r(6, 9) => (Some(r(4, 5)), None));
	}

	#[test]
	fn subtract_at_domain_edges() {
		let full = Range::<u8>::new(0, 255).unwrap();
		assert_eq!(
			full.subtract(&Range::new(0, 9).unwrap()),
			(None, Some(Range::new(10, 255).unwrap()))
		);
		assert_eq!(
			full.subtract(&Range::new(250, 255).unwrap()),
			(Some(Range::new(0, 249).unwrap()), None)
		);
	}

	#[test]
	fn display() {
		assert_eq!(r(1, 4).to_string(), "[1, 4]");
		assert_eq!(format!("{:?}", r(1, 4)), "Range { min: 1, max: 4 }");
	}
}
