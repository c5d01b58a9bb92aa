use std::iter::FusedIterator;

use crate::{Discrete, Range, Value};

/// Iterator over the elements of a [`Range`].
pub struct RangeValues<T, D> {
	next: Option<Value<T, D>>,
	max: Value<T, D>,
}

impl<T, D> RangeValues<T, D> {
	pub(crate) fn new(range: Range<T, D>) -> Self
	where
		D: Discrete<T>,
	{
		let (min, max) = range.into_values();
		Self {
			next: Some(min),
			max,
		}
	}
}

impl<T: Clone, D: Discrete<T> + Clone> Iterator for RangeValues<T, D> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		let current = self.next.take()?;
		if current != self.max {
			self.next = current.next();
		}

		Some(current.into_value())
	}
}

impl<T: Clone, D: Discrete<T> + Clone> FusedIterator for RangeValues<T, D> {}
