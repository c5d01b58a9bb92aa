//! Calendar domains.
//!
//! ```
//! use chrono::NaiveDate;
//! use discrete_range_set::calendar::{DateRange, DateRangeSet, YearMonth};
//!
//! let december = YearMonth::new(2021, 12).unwrap();
//! let day = |d| december.day(d).unwrap();
//!
//! let away: DateRangeSet = [
//!   DateRange::new(day(1), day(9)).unwrap(),
//!   DateRange::new(day(14), day(31)).unwrap(),
//! ].into_iter().collect();
//!
//! let present = DateRangeSet::from(december.days().unwrap()).difference(&away);
//! assert_eq!(present.to_string(), "{[2021-12-10, 2021-12-13]}");
//! ```
use std::{cmp::Ordering, fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::{Discrete, Range, RangeSet};

pub type DateRange = Range<NaiveDate, Days>;
pub type DateRangeSet = RangeSet<NaiveDate, Days>;
pub type MonthRange = Range<YearMonth, Months>;
pub type MonthRangeSet = RangeSet<YearMonth, Months>;

/// Calendar days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Days;

impl Discrete<NaiveDate> for Days {
	fn compare(&self, a: &NaiveDate, b: &NaiveDate) -> Ordering {
		a.cmp(b)
	}

	fn succ(&self, t: &NaiveDate) -> Option<NaiveDate> {
		t.succ_opt()
	}

	fn pred(&self, t: &NaiveDate) -> Option<NaiveDate> {
		t.pred_opt()
	}
}

/// Month of a given year.
///
/// Ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
	year: i32,
	month: u32,
}

impl YearMonth {
	/// Creates a year-month. `month` ranges from 1 to 12.
	pub fn new(year: i32, month: u32) -> Option<Self> {
		if (1..=12).contains(&month) {
			Some(Self { year, month })
		} else {
			None
		}
	}

	pub fn year(&self) -> i32 {
		self.year
	}

	pub fn month(&self) -> u32 {
		self.month
	}

	pub fn next(&self) -> Option<Self> {
		if self.month == 12 {
			Some(Self {
				year: self.year.checked_add(1)?,
				month: 1,
			})
		} else {
			Some(Self {
				year: self.year,
				month: self.month + 1,
			})
		}
	}

	pub fn previous(&self) -> Option<Self> {
		if self.month == 1 {
			Some(Self {
				year: self.year.checked_sub(1)?,
				month: 12,
			})
		} else {
			Some(Self {
				year: self.year,
				month: self.month - 1,
			})
		}
	}

	/// Given day of the month, if it exists.
	pub fn day(&self, day: u32) -> Option<NaiveDate> {
		NaiveDate::from_ymd_opt(self.year, self.month, day)
	}

	pub fn first_day(&self) -> Option<NaiveDate> {
		self.day(1)
	}

	pub fn last_day(&self) -> Option<NaiveDate> {
		match self.next() {
			Some(next) => next.first_day()?.pred_opt(),
			None => self.day(31),
		}
	}

	/// Every day of the month.
	pub fn days(&self) -> Option<DateRange> {
		DateRange::new(self.first_day()?, self.last_day()?).ok()
	}
}

impl From<NaiveDate> for YearMonth {
	fn from(date: NaiveDate) -> Self {
		Self {
			year: date.year(),
			month: date.month(),
		}
	}
}

impl fmt::Display for YearMonth {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if (0..=9999).contains(&self.year) {
			write!(f, "{:04}-{:02}", self.year, self.month)
		} else {
			write!(f, "{:+05}-{:02}", self.year, self.month)
		}
	}
}

/// Invalid `YYYY-MM` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid year-month `{0}`")]
pub struct ParseYearMonthError(String);

impl FromStr for YearMonth {
	type Err = ParseYearMonthError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid = || ParseYearMonthError(s.to_owned());
		let (year, month) = s.rsplit_once('-').ok_or_else(invalid)?;
		let year = year.parse().map_err(|_| invalid())?;
		let month = month.parse().map_err(|_| invalid())?;
		Self::new(year, month).ok_or_else(invalid)
	}
}

/// Calendar months.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Months;

impl Discrete<YearMonth> for Months {
	fn compare(&self, a: &YearMonth, b: &YearMonth) -> Ordering {
		a.cmp(b)
	}

	fn succ(&self, t: &YearMonth) -> Option<YearMonth> {
		t.next()
	}

	fn pred(&self, t: &YearMonth) -> Option<YearMonth> {
		t.previous()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ym(s: &str) -> YearMonth {
		s.parse().unwrap()
	}

	#[test]
	fn parse_year_month() {
		assert_eq!(ym("2021-01"), YearMonth::new(2021, 1).unwrap());
		assert_eq!(ym("-0044-03"), YearMonth::new(-44, 3).unwrap());
		assert!("2021-13".parse::<YearMonth>().is_err());
		assert!("2021".parse::<YearMonth>().is_err());
		assert_eq!(ym("2021-01").to_string(), "2021-01");
		assert_eq!(YearMonth::new(-44, 3).unwrap().to_string(), "-0044-03");
	}

	#[test]
	fn month_stepping() {
		assert_eq!(ym("2021-12").next(), Some(ym("2022-01")));
		assert_eq!(ym("2022-01").previous(), Some(ym("2021-12")));
		assert_eq!(YearMonth::new(i32::MAX, 12).unwrap().next(), None);
	}

	#[test]
	fn month_bounds() {
		assert_eq!(ym("2024-02").last_day(), NaiveDate::from_ymd_opt(2024, 2, 29));
		assert_eq!(ym("2023-02").last_day(), NaiveDate::from_ymd_opt(2023, 2, 28));
		assert_eq!(ym("2021-12").last_day(), NaiveDate::from_ymd_opt(2021, 12, 31));
	}

	#[test]
	fn invalid_month_range() {
		assert!(MonthRange::new(ym("2021-02"), ym("2021-01")).is_err());
		assert!(MonthRange::new(ym("2021-01"), ym("2021-01")).is_ok());
	}

	#[test]
	fn adjacent_months_merge() {
		let set = MonthRangeSet::of([
			MonthRange::new(ym("2021-01"), ym("2021-03")).unwrap(),
			MonthRange::new(ym("2021-04"), ym("2021-06")).unwrap(),
		]);
		assert_eq!(set.to_string(), "{[2021-01, 2021-06]}");
	}
}
