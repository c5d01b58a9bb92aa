//! Canonical form maintenance.
//!
//! A sequence of ranges is canonical when it is sorted by minimum and no two
//! consecutive ranges intersect or touch.
use std::iter::Peekable;

use crate::{Discrete, Range};

/// Pushes `range` on top of a canonical stack, merging it with the current
/// top if they are connected.
///
/// `range` must not start before the top of the stack. Under this condition
/// every range below the top is strictly before `range` and separated from
/// it by a gap, so the top is the only candidate for merging.
fn push_merged<T, D>(stack: &mut Vec<Range<T, D>>, range: Range<T, D>)
where
	T: Clone,
	D: Discrete<T> + Clone,
{
	if let Some(top) = stack.last_mut() {
		if top.intersects(&range) || top.is_followed_by(&range) {
			*top = top.enclose_with(&range);
			return;
		}
	}

	stack.push(range)
}

/// Sorts and reduces arbitrary ranges into canonical form.
pub(crate) fn normalize<T, D>(mut ranges: Vec<Range<T, D>>) -> Vec<Range<T, D>>
where
	T: Clone,
	D: Discrete<T> + Clone,
{
	let count = ranges.len();
	ranges.sort_by(|a, b| a.min_value().cmp(b.min_value()));

	let mut stack = Vec::with_capacity(count);
	for range in ranges {
		push_merged(&mut stack, range)
	}

	log::trace!("normalized {} ranges into {}", count, stack.len());
	stack
}

/// Merges two canonical sequences into one.
///
/// Runs in linear time: ranges are consumed in ascending order of minimum,
/// alternating between the two inputs, and only the junction with the top
/// of the output is ever tested for merging.
pub(crate) fn merge<T, D, A, B>(a: A, b: B) -> Vec<Range<T, D>>
where
	T: Clone,
	D: Discrete<T> + Clone,
	A: IntoIterator<Item = Range<T, D>>,
	B: IntoIterator<Item = Range<T, D>>,
{
	let mut a = a.into_iter().peekable();
	let mut b = b.into_iter().peekable();
	let mut stack = Vec::with_capacity(a.size_hint().0 + b.size_hint().0);

	while let Some(range) = next_lowest(&mut a, &mut b) {
		push_merged(&mut stack, range)
	}

	stack
}

fn next_lowest<T, D, A, B>(a: &mut Peekable<A>, b: &mut Peekable<B>) -> Option<Range<T, D>>
where
	D: Discrete<T>,
	A: Iterator<Item = Range<T, D>>,
	B: Iterator<Item = Range<T, D>>,
{
	match (a.peek(), b.peek()) {
		(Some(x), Some(y)) => {
			if y.starts_before(x) {
				b.next()
			} else {
				a.next()
			}
		}
		(Some(_), None) => a.next(),
		(None, _) => b.next(),
	}
}

/// Checks that the given ranges are in canonical form.
pub(crate) fn is_canonical<T, D>(ranges: &[Range<T, D>]) -> bool
where
	D: Discrete<T> + Clone,
{
	ranges
		.windows(2)
		.all(|w| w[0].is_before(&w[1]) && !w[0].is_followed_by(&w[1]))
}
