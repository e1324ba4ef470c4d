use time::{Date, Month};

/// Minor version of the QuickBooks API schema requested on every query.
pub const MINOR_VERSION: &str = "65";

/// First day of the previous calendar year relative to `today`.
pub fn window_start(today: Date) -> Date {
	let year = today.year() - 1;
	// January 1 exists for every year in `time`'s supported range.
	Date::from_calendar_date(year, Month::January, 1).unwrap_or(Date::MIN)
}

pub fn payments_since(since: Date) -> String {
	format!("SELECT * FROM Payment WHERE TxnDate >= '{since}'")
}
