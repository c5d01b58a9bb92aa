use std::fmt;
use thiserror::Error;

/// Range endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
	Min,
	Max,
}

impl fmt::Display for Endpoint {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Min => write!(f, "min"),
			Self::Max => write!(f, "max"),
		}
	}
}

/// Range construction error.
///
/// Construction is the only fallible operation of the crate: once a
/// [`Range`](crate::Range) exists, every set operation is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error<T> {
	/// A required endpoint is absent.
	#[error("missing {0} value")]
	MissingValue(Endpoint),

	/// The minimum is after the maximum.
	///
	/// Both endpoints are handed back untouched.
	#[error("invalid range: min {min:?} is after max {max:?}")]
	InvalidRange { min: T, max: T },
}
