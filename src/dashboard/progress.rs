//! Progress analytics over the daily samples.

use crate::data::progress::{sample_progress, ProgressSample};
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Day,
    Week,
    Month,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::Day, TimeRange::Week, TimeRange::Month];

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::Day => "Day",
            TimeRange::Week => "Week",
            TimeRange::Month => "Month",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSummary {
    pub total_minutes: u32,
    pub total_cards: u32,
    pub total_topics: u32,
    /// Rounded mean over samples that have a score; 0 when none do.
    pub average_quiz_score: u32,
    pub days_studied: usize,
    pub study_streak: u32,
}

impl ProgressSummary {
    pub fn total_hours(&self) -> f32 {
        self.total_minutes as f32 / 60.0
    }
}

pub fn summarize(samples: &[ProgressSample]) -> ProgressSummary {
    let scores: Vec<u32> = samples.iter().filter_map(|s| s.quiz_score).collect();
    let average_quiz_score = if scores.is_empty() {
        0
    } else {
        (scores.iter().sum::<u32>() as f64 / scores.len() as f64).round() as u32
    };
    ProgressSummary {
        total_minutes: samples.iter().map(|s| s.study_minutes).sum(),
        total_cards: samples.iter().map(|s| s.cards_reviewed).sum(),
        total_topics: samples.iter().map(|s| s.topics_completed).sum(),
        average_quiz_score,
        days_studied: samples.len(),
        study_streak: study_streak(samples),
    }
}

/// Consecutive studied days ending at the most recent sample.
pub fn study_streak(samples: &[ProgressSample]) -> u32 {
    let mut dates: Vec<NaiveDate> = samples
        .iter()
        .filter(|s| s.study_minutes > 0)
        .map(|s| s.date)
        .collect();
    dates.sort_unstable();
    dates.dedup();
    let Some(mut expected) = dates.last().copied() else {
        return 0;
    };
    let mut streak = 0;
    for date in dates.iter().rev() {
        if *date != expected {
            break;
        }
        streak += 1;
        match expected.pred_opt() {
            Some(prev) => expected = prev,
            None => break,
        }
    }
    streak
}

/// Study minutes per weekday, Monday first.
pub fn weekday_minutes(samples: &[ProgressSample]) -> [u32; 7] {
    let mut totals = [0u32; 7];
    for s in samples {
        totals[s.date.weekday().num_days_from_monday() as usize] += s.study_minutes;
    }
    totals
}

/// Sunday-to-Saturday week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    let start = date.checked_sub_days(Days::new(offset)).unwrap_or(date);
    let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
    (start, end)
}

pub fn range_label(range: TimeRange, date: NaiveDate) -> String {
    match range {
        TimeRange::Day => date.format("%b %-d, %Y").to_string(),
        TimeRange::Week => {
            let (start, end) = week_bounds(date);
            format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
        }
        TimeRange::Month => date.format("%B %Y").to_string(),
    }
}

pub fn shift(range: TimeRange, date: NaiveDate, forward: bool) -> NaiveDate {
    let moved = match (range, forward) {
        (TimeRange::Day, true) => date.checked_add_days(Days::new(1)),
        (TimeRange::Day, false) => date.checked_sub_days(Days::new(1)),
        (TimeRange::Week, true) => date.checked_add_days(Days::new(7)),
        (TimeRange::Week, false) => date.checked_sub_days(Days::new(7)),
        (TimeRange::Month, true) => date.checked_add_months(Months::new(1)),
        (TimeRange::Month, false) => date.checked_sub_months(Months::new(1)),
    };
    moved.unwrap_or(date)
}

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug)]
pub struct ProgressSection {
    pub samples: Vec<ProgressSample>,
    pub range: TimeRange,
    pub current: NaiveDate,
    today: NaiveDate,
    /// First table row shown.
    pub table_offset: usize,
}

impl ProgressSection {
    pub fn new(today: NaiveDate) -> Self {
        Self::with_samples(sample_progress(), today)
    }

    pub fn with_samples(samples: Vec<ProgressSample>, today: NaiveDate) -> Self {
        Self {
            samples,
            range: TimeRange::Week,
            current: today,
            today,
            table_offset: 0,
        }
    }

    pub fn summary(&self) -> ProgressSummary {
        summarize(&self.samples)
    }

    pub fn set_range(&mut self, range: TimeRange) {
        self.range = range;
    }

    pub fn previous(&mut self) {
        self.current = shift(self.range, self.current, false);
    }

    /// Disabled once the current date has reached today.
    pub fn next_enabled(&self) -> bool {
        self.current < self.today
    }

    pub fn next(&mut self) {
        if self.next_enabled() {
            self.current = shift(self.range, self.current, true);
        }
    }

    pub fn label(&self) -> String {
        range_label(self.range, self.current)
    }

    pub fn scroll_table(&mut self, down: bool) {
        if down {
            if self.table_offset + 1 < self.samples.len() {
                self.table_offset += 1;
            }
        } else {
            self.table_offset = self.table_offset.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_summary_of_samples() {
        let summary = summarize(&sample_progress());
        assert_eq!(summary.total_minutes, 720);
        assert_eq!(summary.total_hours(), 12.0);
        assert_eq!(summary.total_cards, 120);
        assert_eq!(summary.total_topics, 13);
        // (85 + 90 + 75 + 95) / 4 = 86.25
        assert_eq!(summary.average_quiz_score, 86);
        assert_eq!(summary.days_studied, 7);
        assert_eq!(summary.study_streak, 7);
    }

    #[test]
    fn test_summary_without_scores() {
        let summary = summarize(&[]);
        assert_eq!(summary.average_quiz_score, 0);
        assert_eq!(summary.study_streak, 0);
    }

    #[test]
    fn test_streak_breaks_on_gap() {
        let mut samples = sample_progress();
        samples.remove(4); // June 5
        assert_eq!(study_streak(&samples), 2);
    }

    #[test]
    fn test_weekday_minutes() {
        // June 1 2023 was a Thursday.
        let totals = weekday_minutes(&sample_progress());
        assert_eq!(totals, [90, 30, 180, 90, 120, 60, 150]);
    }

    #[test]
    fn test_labels() {
        let date = d(2023, 6, 7);
        assert_eq!(range_label(TimeRange::Day, date), "Jun 7, 2023");
        assert_eq!(range_label(TimeRange::Week, date), "Jun 4 - Jun 10, 2023");
        assert_eq!(range_label(TimeRange::Month, date), "June 2023");
    }

    #[test]
    fn test_navigation_stops_at_today() {
        let today = d(2026, 10, 16);
        let mut section = ProgressSection::new(today);
        assert!(!section.next_enabled());
        section.next();
        assert_eq!(section.current, today);

        section.previous();
        assert_eq!(section.current, d(2026, 10, 9));
        section.set_range(TimeRange::Month);
        section.previous();
        assert_eq!(section.current, d(2026, 9, 9));
        section.next();
        section.next();
        assert_eq!(section.current, d(2026, 11, 9));
        assert!(!section.next_enabled());
    }

    #[test]
    fn test_month_shift_clamps_day() {
        assert_eq!(shift(TimeRange::Month, d(2026, 3, 31), false), d(2026, 2, 28));
    }
}
