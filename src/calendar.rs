use chrono::{Datelike, NaiveDate};
use std::fmt;

pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Year and month of the displayed grid. Day-of-month is not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    /// Returns `None` unless `month` is in `1..=12` and the first of that
    /// month is a representable date.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    /// Parse `YYYY-MM`.
    pub fn parse(raw: &str) -> Option<Self> {
        let (year, month) = raw.trim().split_once('-')?;
        if month.len() != 2 {
            return None;
        }
        Self::new(year.parse().ok()?, month.parse().ok()?)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month cursor always points at a representable month")
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn shifted(&self, delta: i32) -> Self {
        let index = self.month_index() + i64::from(delta);
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// Signed number of months from `self` to `other`.
    pub fn months_until(&self, other: MonthCursor) -> i32 {
        (other.month_index() - self.month_index()) as i32
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Human label such as `March 2024`.
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    fn month_index(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// One slot of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    /// Padding before the first of the month.
    Blank,
    Day { date: NaiveDate, is_today: bool },
}

impl CalendarCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            CalendarCell::Blank => None,
            CalendarCell::Day { date, .. } => Some(*date),
        }
    }

    pub fn is_today(&self) -> bool {
        matches!(self, CalendarCell::Day { is_today: true, .. })
    }
}

#[derive(Debug, Clone)]
pub struct CalendarModel {
    cursor: MonthCursor,
}

impl CalendarModel {
    pub fn new(today: NaiveDate) -> Self {
        Self { cursor: MonthCursor::from_date(today) }
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn advance_month(&mut self, delta: i32) {
        self.cursor = self.cursor.shifted(delta);
    }

    /// Leading blanks (Sunday-first weekday of the 1st) followed by one
    /// cell per day. Pure in the cursor and `today`.
    pub fn cells_for_current_month(&self, today: NaiveDate) -> Vec<CalendarCell> {
        let first = self.cursor.first_day();
        let leading = first.weekday().num_days_from_sunday() as usize;
        let days = self.cursor.days_in_month();

        let mut cells = Vec::with_capacity(leading + days as usize);
        cells.extend(std::iter::repeat_n(CalendarCell::Blank, leading));
        for date in first.iter_days().take(days as usize) {
            cells.push(CalendarCell::Day { date, is_today: date == today });
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn day_count(cells: &[CalendarCell]) -> usize {
        cells.iter().filter(|c| c.date().is_some()).count()
    }

    #[test]
    fn march_2024_layout() {
        let today = ymd(2024, 3, 19);
        let model = CalendarModel::new(today);
        let cells = model.cells_for_current_month(today);

        let blanks = cells.iter().take_while(|c| **c == CalendarCell::Blank);
        assert_eq!(blanks.count(), 5);
        assert_eq!(day_count(&cells), 31);
        assert_eq!(cells.len(), 36);
        assert_eq!(cells[5].date(), Some(ymd(2024, 3, 1)));

        let today_cells: Vec<_> = cells.iter().filter(|c| c.is_today()).collect();
        assert_eq!(today_cells.len(), 1);
        assert_eq!(today_cells[0].date(), Some(today));
    }

    #[test]
    fn february_length_follows_leap_years() {
        let feb_2024 = CalendarModel::new(ymd(2024, 2, 10));
        assert_eq!(day_count(&feb_2024.cells_for_current_month(ymd(2024, 2, 10))), 29);

        let feb_2023 = CalendarModel::new(ymd(2023, 2, 10));
        assert_eq!(day_count(&feb_2023.cells_for_current_month(ymd(2023, 2, 10))), 28);

        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn no_today_marker_outside_current_month() {
        let model = CalendarModel::new(ymd(2024, 3, 1));
        let cells = model.cells_for_current_month(ymd(2024, 4, 2));
        assert!(cells.iter().all(|c| !c.is_today()));
    }

    #[test]
    fn sunday_start_has_no_blanks() {
        // 1 September 2024 is a Sunday.
        let model = CalendarModel::new(ymd(2024, 9, 14));
        let cells = model.cells_for_current_month(ymd(2024, 9, 14));
        assert_eq!(cells[0].date(), Some(ymd(2024, 9, 1)));
    }

    #[test]
    fn cells_are_restartable() {
        let today = ymd(2024, 3, 19);
        let model = CalendarModel::new(today);
        assert_eq!(
            model.cells_for_current_month(today),
            model.cells_for_current_month(today)
        );
    }

    #[test]
    fn navigation_rolls_over_years() {
        let mut model = CalendarModel::new(ymd(2023, 12, 5));
        model.advance_month(1);
        assert_eq!(model.cursor(), MonthCursor::new(2024, 1).unwrap());
        model.advance_month(-1);
        model.advance_month(-1);
        assert_eq!(model.cursor(), MonthCursor::new(2023, 11).unwrap());
        model.advance_month(-23);
        assert_eq!(model.cursor(), MonthCursor::new(2021, 12).unwrap());
    }

    #[test]
    fn cursor_parse_and_distance() {
        let a = MonthCursor::parse("2024-03").unwrap();
        assert_eq!(a.to_string(), "2024-03");
        assert_eq!(a.label(), "March 2024");
        assert!(MonthCursor::parse("2024-13").is_none());
        assert!(MonthCursor::parse("2024-3").is_none());
        assert!(MonthCursor::parse("march").is_none());

        let b = MonthCursor::parse("2023-11").unwrap();
        assert_eq!(a.months_until(b), -4);
        assert_eq!(b.months_until(a), 4);
        assert_eq!(b.shifted(4), a);
    }
}
