#![cfg(feature = "chrono")]
use chrono::NaiveDate;
use discrete_range_set::calendar::{DateRange, DateRangeSet, MonthRange, YearMonth};

fn dec(day: u32) -> NaiveDate {
	NaiveDate::from_ymd_opt(2021, 12, day).unwrap()
}

fn days(min: u32, max: u32) -> DateRange {
	DateRange::new(dec(min), dec(max)).unwrap()
}

fn vacations() -> (DateRangeSet, DateRangeSet) {
	let first = DateRangeSet::of([days(1, 5), days(14, 26), days(28, 31)]);
	let second = DateRangeSet::of([days(1, 9), days(23, 29)]);
	(first, second)
}

#[test]
fn someone_is_absent() {
	let (first, second) = vacations();
	let third = DateRangeSet::from(days(1, 9));

	let absent = first.union(&second).union(&third);
	assert_eq!(absent.ranges(), &[days(1, 9), days(14, 31)]);
}

#[test]
fn everybody_is_present() {
	let (first, second) = vacations();
	let december = YearMonth::new(2021, 12).unwrap().days().unwrap();

	let present = DateRangeSet::from(december).difference(&first).difference(&second);
	assert_eq!(present.ranges(), &[days(10, 13)]);
}

#[test]
fn everybody_is_absent() {
	let (first, second) = vacations();
	let both = first.intersect(&second);
	assert_eq!(both.ranges(), &[days(1, 5), days(23, 26), days(28, 29)]);
}

#[test]
fn days_cross_month_boundaries() {
	let a = DateRange::new(dec(20), dec(31)).unwrap();
	let b = DateRange::new(
		NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
		NaiveDate::from_ymd_opt(2022, 1, 10).unwrap(),
	)
	.unwrap();

	assert!(a.is_followed_by(&b));
	assert_eq!(DateRangeSet::of([a, b]).range_count(), 1);
}

#[test]
fn month_ranges() {
	let ym = |s: &str| s.parse::<YearMonth>().unwrap();
	let one_to_four = MonthRange::new(ym("2021-01"), ym("2021-04")).unwrap();
	let three_to_six = MonthRange::new(ym("2021-03"), ym("2021-06")).unwrap();
	let seven = MonthRange::singleton(ym("2021-07"));

	assert!(one_to_four.intersects(&three_to_six));
	assert!(three_to_six.intersects(&one_to_four));
	assert!(seven.is_after(&three_to_six));
	assert!(three_to_six.is_followed_by(&seven));
	assert_eq!(
		one_to_four.values().map(|m| m.to_string()).collect::<Vec<_>>(),
		["2021-01", "2021-02", "2021-03", "2021-04"]
	);
}
