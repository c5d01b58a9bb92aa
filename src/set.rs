use std::{cmp::Ordering, fmt, slice};

use crate::{Discrete, Natural, Range, RangeValues};

mod normalize;

pub(crate) use normalize::{is_canonical, merge, normalize};

/// Union of closed ranges, in canonical form.
///
/// The ranges of a set are always sorted by minimum, pairwise disjoint and
/// never adjacent: two ranges that touch are stored as one. A set is never
/// assembled from arbitrary ranges directly, every constructor and operation
/// goes through normalization.
///
/// Sets are immutable values. Every operation returns a new set.
#[derive(Clone)]
pub struct RangeSet<T, D = Natural> {
	ranges: Vec<Range<T, D>>,
}

impl<T, D> RangeSet<T, D> {
	/// Empty set.
	pub const fn empty() -> Self {
		Self { ranges: Vec::new() }
	}

	/// Wraps ranges already known to be in canonical form.
	pub(crate) fn from_canonical(ranges: Vec<Range<T, D>>) -> Self {
		Self { ranges }
	}

	pub fn is_empty(&self) -> bool {
		self.ranges.is_empty()
	}

	/// Number of ranges in the set (not the number of elements).
	pub fn range_count(&self) -> usize {
		self.ranges.len()
	}

	/// Ranges of the set, in ascending order.
	pub fn ranges(&self) -> &[Range<T, D>] {
		&self.ranges
	}

	pub fn iter(&self) -> slice::Iter<Range<T, D>> {
		self.ranges.iter()
	}

	pub fn into_ranges(self) -> Vec<Range<T, D>> {
		self.ranges
	}
}

impl<T: Clone, D: Discrete<T> + Clone> RangeSet<T, D> {
	/// Normalizes the given ranges into a set.
	///
	/// Ranges may come in any order, overlap or touch each other.
	pub fn of<I: IntoIterator<Item = Range<T, D>>>(ranges: I) -> Self {
		Self::from_canonical(normalize(ranges.into_iter().collect()))
	}

	/// Set of all the elements that are in `self` or `other`.
	pub fn union(&self, other: &Self) -> Self {
		let ranges = merge(self.ranges.iter().cloned(), other.ranges.iter().cloned());
		log::trace!(
			"union of {} and {} ranges: {} ranges",
			self.range_count(),
			other.range_count(),
			ranges.len()
		);
		Self::from_canonical(ranges)
	}

	/// Set of all the elements that are in `self` but not in `other`.
	pub fn difference(&self, other: &Self) -> Self {
		let mut ranges = Vec::with_capacity(self.range_count());

		for range in &self.ranges {
			// the top of the stack is always the highest remaining fragment.
			let mut stack = vec![range.clone()];
			for to_remove in &other.ranges {
				if let Some(top) = stack.pop() {
					let (left, right) = top.subtract(to_remove);
					stack.extend(left);
					stack.extend(right);
				}
			}

			ranges.extend(stack)
		}

		debug_assert!(is_canonical(&ranges));
		log::trace!(
			"difference of {} and {} ranges: {} ranges",
			self.range_count(),
			other.range_count(),
			ranges.len()
		);
		Self::from_canonical(ranges)
	}

	/// Set of all the elements that are in both `self` and `other`.
	pub fn intersect(&self, other: &Self) -> Self {
		let fragments: Vec<_> = self
			.ranges
			.iter()
			.flat_map(|r| other.ranges.iter().filter_map(move |o| r.intersect(o)))
			.collect();

		Self::from_canonical(normalize(fragments))
	}

	/// Checks that every range of `other` is contained in a range of `self`.
	pub fn contains(&self, other: &Self) -> bool {
		other.ranges.iter().all(|o| self.contains_range(o))
	}

	/// Checks that `range` is contained in a range of `self`.
	pub fn contains_range(&self, range: &Range<T, D>) -> bool {
		self.ranges.iter().any(|r| r.contains_range(range))
	}

	/// Checks if some range of `self` intersects some range of `other`.
	pub fn intersects(&self, other: &Self) -> bool {
		self.ranges
			.iter()
			.any(|r| other.ranges.iter().any(|o| r.intersects(o)))
	}

	pub fn intersects_range(&self, range: &Range<T, D>) -> bool {
		self.ranges.iter().any(|r| r.intersects(range))
	}

	pub fn is_disjoint(&self, other: &Self) -> bool {
		!self.intersects(other)
	}

	/// Checks if the given element is in the set.
	pub fn contains_value(&self, t: &T) -> bool {
		self.ranges
			.binary_search_by(|r| {
				if r.max_value().compare_to(t) == Ordering::Less {
					Ordering::Less
				} else if r.min_value().compare_to(t) == Ordering::Greater {
					Ordering::Greater
				} else {
					Ordering::Equal
				}
			})
			.is_ok()
	}

	/// Smallest element of the set.
	pub fn first(&self) -> Option<&T> {
		self.ranges.first().map(Range::min)
	}

	/// Greatest element of the set.
	pub fn last(&self) -> Option<&T> {
		self.ranges.last().map(Range::max)
	}

	/// Smallest range enclosing the whole set.
	pub fn span(&self) -> Option<Range<T, D>> {
		match (self.ranges.first(), self.ranges.last()) {
			(Some(first), Some(last)) => Some(first.enclose_with(last)),
			_ => None,
		}
	}

	/// Iterates over every element of the set, in ascending order.
	pub fn values(&self) -> Values<T, D> {
		Values {
			ranges: self.ranges.iter(),
			current: None,
		}
	}
}

impl<T, D> Default for RangeSet<T, D> {
	fn default() -> Self {
		Self::empty()
	}
}

impl<T, D: Discrete<T>> PartialEq for RangeSet<T, D> {
	fn eq(&self, other: &Self) -> bool {
		self.ranges == other.ranges
	}
}

impl<T, D: Discrete<T>> Eq for RangeSet<T, D> {}

impl<T: fmt::Debug, D> fmt::Debug for RangeSet<T, D> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_set().entries(self.ranges.iter()).finish()
	}
}

impl<T: fmt::Display, D> fmt::Display for RangeSet<T, D> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{{")?;
		for (i, range) in self.ranges.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			fmt::Display::fmt(range, f)?;
		}
		write!(f, "}}")
	}
}

impl<T: Clone, D: Discrete<T> + Clone> FromIterator<Range<T, D>> for RangeSet<T, D> {
	fn from_iter<I: IntoIterator<Item = Range<T, D>>>(iter: I) -> Self {
		Self::of(iter)
	}
}

/// Union of all the collected sets.
impl<T: Clone, D: Discrete<T> + Clone> FromIterator<RangeSet<T, D>> for RangeSet<T, D> {
	fn from_iter<I: IntoIterator<Item = RangeSet<T, D>>>(iter: I) -> Self {
		iter.into_iter()
			.fold(Self::empty(), |acc, set| Self::from_canonical(merge(acc.ranges, set.ranges)))
	}
}

impl<'a, T, D> IntoIterator for &'a RangeSet<T, D> {
	type Item = &'a Range<T, D>;
	type IntoIter = slice::Iter<'a, Range<T, D>>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<T, D> IntoIterator for RangeSet<T, D> {
	type Item = Range<T, D>;
	type IntoIter = std::vec::IntoIter<Range<T, D>>;

	fn into_iter(self) -> Self::IntoIter {
		self.ranges.into_iter()
	}
}

/// Iterator over the elements of a [`RangeSet`].
pub struct Values<'a, T, D> {
	ranges: slice::Iter<'a, Range<T, D>>,
	current: Option<RangeValues<T, D>>,
}

impl<'a, T: Clone, D: Discrete<T> + Clone> Iterator for Values<'a, T, D> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		loop {
			if let Some(t) = self.current.as_mut().and_then(|values| values.next()) {
				return Some(t);
			}

			self.current = Some(self.ranges.next()?.values());
		}
	}
}
