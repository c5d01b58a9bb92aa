use std::{cmp::Ordering, fmt};

use crate::{Discrete, Natural};

/// Point of a discretely ordered domain.
///
/// Carries the element together with the [`Discrete`] domain that orders and
/// steps it. Values are compared through their domain, never through `T`
/// itself.
#[derive(Clone, Copy)]
pub struct Value<T, D = Natural> {
	t: T,
	domain: D,
}

impl<T, D> Value<T, D> {
	pub const fn new(t: T, domain: D) -> Self {
		Self { t, domain }
	}

	pub fn value(&self) -> &T {
		&self.t
	}

	pub fn into_value(self) -> T {
		self.t
	}

	pub fn domain(&self) -> &D {
		&self.domain
	}

	/// Rebinds the domain of this value to another element.
	pub fn with(&self, t: T) -> Self
	where
		D: Clone,
	{
		Self::new(t, self.domain.clone())
	}
}

impl<T, D: Discrete<T> + Clone> Value<T, D> {
	/// Successor of this value, if the domain has one.
	pub fn next(&self) -> Option<Self> {
		self.domain.succ(&self.t).map(|t| self.with(t))
	}

	/// Predecessor of this value, if the domain has one.
	pub fn previous(&self) -> Option<Self> {
		self.domain.pred(&self.t).map(|t| self.with(t))
	}

	/// Checks that `other` immediately follows this value.
	pub fn is_followed_by(&self, other: &Self) -> bool {
		self.domain
			.succ(&self.t)
			.map(|s| self.domain.compare(&s, &other.t) == Ordering::Equal)
			.unwrap_or(false)
	}
}

impl<T, D: Discrete<T>> Value<T, D> {
	pub fn is_before(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Less
	}

	pub fn is_after(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Greater
	}

	pub fn is_before_or_equal(&self, other: &Self) -> bool {
		self.cmp(other) != Ordering::Greater
	}

	pub fn is_after_or_equal(&self, other: &Self) -> bool {
		self.cmp(other) != Ordering::Less
	}

	/// Compares this value to a bare element of the domain.
	pub fn compare_to(&self, t: &T) -> Ordering {
		self.domain.compare(&self.t, t)
	}
}

impl<T, D: Discrete<T>> PartialEq for Value<T, D> {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl<T, D: Discrete<T>> Eq for Value<T, D> {}

impl<T, D: Discrete<T>> PartialOrd for Value<T, D> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<T, D: Discrete<T>> Ord for Value<T, D> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.domain.compare(&self.t, &other.t)
	}
}

impl<T: fmt::Debug, D> fmt::Debug for Value<T, D> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Debug::fmt(&self.t, f)
	}
}

impl<T: fmt::Display, D> fmt::Display for Value<T, D> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Display::fmt(&self.t, f)
	}
}

impl<T, D: Default> From<T> for Value<T, D> {
	fn from(t: T) -> Self {
		Self::new(t, D::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn v(t: i32) -> Value<i32> {
		Value::from(t)
	}

	#[test]
	fn ordering_predicates() {
		assert!(v(1).is_before(&v(2)));
		assert!(!v(2).is_before(&v(2)));
		assert!(v(2).is_before_or_equal(&v(2)));
		assert!(v(3).is_after(&v(2)));
		assert!(v(3).is_after_or_equal(&v(3)));
		assert!(!v(2).is_after_or_equal(&v(3)));
	}

	#[test]
	fn stepping() {
		assert_eq!(v(1).next(), Some(v(2)));
		assert_eq!(v(1).previous(), Some(v(0)));
		assert_eq!(v(i32::MAX).next(), None);
		assert_eq!(v(i32::MIN).previous(), None);
		assert!(v(4).is_followed_by(&v(5)));
		assert!(!v(4).is_followed_by(&v(6)));
		assert!(!v(i32::MAX).is_followed_by(&v(i32::MIN)));
	}

	#[test]
	fn with_keeps_domain() {
		let a = v(10);
		let b = a.with(20);
		assert_eq!(*b.value(), 20);
		assert_eq!(b.compare_to(&15), Ordering::Greater);
	}
}
