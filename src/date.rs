use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime};

/// Calendar date without a time of day. Ordered and compared by (year, month, day).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateValue {
    pub year: i32,
    pub month: u8, // 1..=12
    pub day: u8,   // 1..=days_in_month
}

impl DateValue {
    /// Validated constructor; `None` when the triple is not a real Gregorian date.
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    pub fn to_time(self) -> Option<Date> {
        let month = Month::try_from(self.month).ok()?;
        Date::from_calendar_date(self.year, month, self.day).ok()
    }

    /// Following day, `None` past the end of the supported calendar.
    pub fn succ(self) -> Option<Self> {
        self.to_time()?.next_day().map(Self::from)
    }

    pub fn pred(self) -> Option<Self> {
        self.to_time()?.previous_day().map(Self::from)
    }

    pub fn year_month(self) -> YearMonth {
        YearMonth { year: self.year, month: self.month }
    }

    /// Day of week, 0 = Sunday.
    pub fn weekday_from_sunday(self) -> u8 {
        self.to_time().map(|d| d.weekday().number_days_from_sunday()).unwrap_or(0)
    }

    pub fn today() -> Self {
        OffsetDateTime::now_utc().date().into()
    }

    /// Long Korean form, e.g. "2024년 5월 20일".
    pub fn to_korean_long(self) -> String {
        let format = format_description!("[year]년 [month padding:none]월 [day padding:none]일");
        self.to_time()
            .and_then(|d| d.format(&format).ok())
            .unwrap_or_else(|| format!("{}년 {}월 {}일", self.year, self.month, self.day))
    }
}

impl From<Date> for DateValue {
    fn from(d: Date) -> Self {
        Self { year: d.year(), month: d.month() as u8, day: d.day() }
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for DateValue {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format = format_description!("[year]-[month]-[day]");
        Date::parse(s.trim(), &format)
            .map(Self::from)
            .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
    }
}

/// First-of-month anchor for a calendar view, with safe arithmetic and ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u8, // 1..=12
}

impl YearMonth {
    pub fn new(year: i32, month: u8) -> Self {
        assert!((1..=12).contains(&month), "Month must be 1..=12");
        Self { year, month }
    }
    pub fn next(self) -> Self {
        if self.month < 12 {
            Self { year: self.year, month: self.month + 1 }
        } else {
            Self { year: self.year + 1, month: 1 }
        }
    }
    pub fn prev(self) -> Self {
        if self.month > 1 {
            Self { year: self.year, month: self.month - 1 }
        } else {
            Self { year: self.year - 1, month: 12 }
        }
    }
    /// Same year, different month. Out-of-range months leave the anchor untouched.
    pub fn with_month(self, month: u8) -> Self {
        if (1..=12).contains(&month) { Self { month, ..self } } else { self }
    }
    pub fn with_year(self, year: i32) -> Self {
        Self { year, ..self }
    }
    pub fn first_day(self) -> DateValue {
        DateValue { year: self.year, month: self.month, day: 1 }
    }
    pub fn last_day(self) -> DateValue {
        DateValue { year: self.year, month: self.month, day: days_in_month(self.year, self.month) }
    }
    pub fn contains(self, d: DateValue) -> bool {
        d.year == self.year && d.month == self.month
    }
}

impl From<DateValue> for YearMonth {
    fn from(d: DateValue) -> Self {
        d.year_month()
    }
}

/// Rendered as the month part of an ISO date, `YYYY-MM`.
impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (y, m) = s.trim().split_once('-').ok_or_else(|| format!("expected YYYY-MM, got {s:?}"))?;
        let year = y.parse::<i32>().map_err(|e| format!("year {y:?}: {e}"))?;
        match m.parse::<u8>() {
            Ok(month) if (1..=12).contains(&month) => Ok(Self { year, month }),
            _ => Err(format!("month {m:?} is not 01..12")),
        }
    }
}

pub fn is_leap_year(year: i32) -> bool {
    time::util::is_leap_year(year)
}

/// Number of days in `month` of `year`; 0 for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
