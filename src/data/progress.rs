use chrono::NaiveDate;

/// One day's study metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSample {
    pub date: NaiveDate,
    pub study_minutes: u32,
    pub cards_reviewed: u32,
    pub topics_completed: u32,
    pub quiz_score: Option<u32>,
}

impl ProgressSample {
    pub fn study_hours(&self) -> f32 {
        self.study_minutes as f32 / 60.0
    }
}

fn sample(day: u32, minutes: u32, cards: u32, topics: u32, quiz: Option<u32>) -> ProgressSample {
    ProgressSample {
        date: NaiveDate::from_ymd_opt(2023, 6, day).unwrap_or(NaiveDate::MIN),
        study_minutes: minutes,
        cards_reviewed: cards,
        topics_completed: topics,
        quiz_score: quiz,
    }
}

pub fn sample_progress() -> Vec<ProgressSample> {
    vec![
        sample(1, 90, 15, 2, Some(85)),
        sample(2, 120, 20, 1, Some(90)),
        sample(3, 60, 10, 1, None),
        sample(4, 150, 25, 3, Some(75)),
        sample(5, 90, 15, 2, None),
        sample(6, 30, 5, 0, None),
        sample(7, 180, 30, 4, Some(95)),
    ]
}
