use serde::Serialize;
use time::{Date, Duration, OffsetDateTime};

/// Longest look-back accepted by [`DateRange::trailing`], about ten years.
const MAX_TRAILING_DAYS: i64 = 3660;

/// Calendar range, inclusive on both ends. `start > end` is a valid, empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    pub fn single(day: Date) -> Self {
        Self::new(day, day)
    }

    /// `[today - days, today]`.
    pub fn trailing(today: Date, days: i64) -> Self {
        let days = days.clamp(0, MAX_TRAILING_DAYS);
        let start = today.checked_sub(Duration::days(days)).unwrap_or(Date::MIN);
        Self::new(start, today)
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of days covered.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).whole_days() as usize + 1
        }
    }

    /// True when the range covers more days than any trailing window can.
    pub fn exceeds_max_span(&self) -> bool {
        self.len() > MAX_TRAILING_DAYS as usize + 1
    }

    pub fn contains(&self, day: Date) -> bool {
        self.start <= day && day <= self.end
    }

    /// Position of `day` in [`DateRange::days`].
    pub fn offset_of(&self, day: Date) -> Option<usize> {
        self.contains(day)
            .then(|| (day - self.start).whole_days() as usize)
    }

    /// Every day in the range, ascending.
    pub fn days(&self) -> impl Iterator<Item = Date> {
        let end = self.end;
        let first = Some(self.start).filter(|s| *s <= end);
        std::iter::successors(first, move |d| d.next_day().filter(|n| *n <= end))
    }
}

/// Current UTC calendar day.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}
