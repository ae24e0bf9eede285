//! The landing view of the dashboard: today's plan and the week at a glance.

use crate::data::progress::{sample_progress, ProgressSample};
use crate::data::user::UserProfile;

pub const FOCUS_TOPICS: u32 = 3;
pub const WEEKLY_TOPIC_GOAL: u32 = 15;

/// An item on today's reading list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedMaterial {
    pub title: &'static str,
    pub subject: &'static str,
    pub minutes: u32,
}

pub const TODAYS_MATERIALS: [PlannedMaterial; 3] = [
    PlannedMaterial {
        title: "Chapter 5: Data Structures",
        subject: "Computer Science",
        minutes: 45,
    },
    PlannedMaterial {
        title: "Introduction to Algorithms",
        subject: "Computer Science",
        minutes: 30,
    },
    PlannedMaterial {
        title: "Big O Notation",
        subject: "Computer Science",
        minutes: 20,
    },
];

pub const STUDY_TIPS: [(&str, &str); 3] = [
    (
        "Spaced Repetition",
        "Review your flashcards at increasing intervals to improve long-term retention.",
    ),
    (
        "Active Recall",
        "Test yourself on concepts rather than passively reading your notes.",
    ),
    (
        "Pomodoro Technique",
        "Study in focused 25-minute intervals with 5-minute breaks in between.",
    ),
];

/// A labelled progress bar: `done` out of `goal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gauge {
    pub label: &'static str,
    pub done: f32,
    pub goal: f32,
    pub unit: &'static str,
}

impl Gauge {
    pub fn ratio(&self) -> f64 {
        if self.goal <= 0.0 {
            return 0.0;
        }
        f64::from(self.done / self.goal).clamp(0.0, 1.0)
    }
}

/// Weekly totals against seven days of the user's daily targets.
pub fn weekly_progress(samples: &[ProgressSample], user: &UserProfile) -> Vec<Gauge> {
    let minutes: u32 = samples.iter().map(|s| s.study_minutes).sum();
    let cards: u32 = samples.iter().map(|s| s.cards_reviewed).sum();
    let topics: u32 = samples.iter().map(|s| s.topics_completed).sum();
    let scores: Vec<u32> = samples.iter().filter_map(|s| s.quiz_score).collect();
    let average = if scores.is_empty() {
        0.0
    } else {
        (scores.iter().sum::<u32>() as f32 / scores.len() as f32).round()
    };

    vec![
        Gauge {
            label: "Study Time",
            done: minutes as f32 / 60.0,
            goal: user.study_hours * 7.0,
            unit: "hours",
        },
        Gauge {
            label: "Flashcards Reviewed",
            done: cards as f32,
            goal: (user.flashcard_target * 7) as f32,
            unit: "cards",
        },
        Gauge {
            label: "Topics Covered",
            done: topics as f32,
            goal: WEEKLY_TOPIC_GOAL as f32,
            unit: "topics",
        },
        Gauge {
            label: "Quiz Performance",
            done: average,
            goal: 100.0,
            unit: "% average",
        },
    ]
}

#[derive(Debug)]
pub struct OverviewSection {
    pub weekly: Vec<Gauge>,
}

impl OverviewSection {
    pub fn new(user: &UserProfile) -> Self {
        Self {
            weekly: weekly_progress(&sample_progress(), user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserProfile {
        UserProfile {
            id: "user123".into(),
            nickname: "Demo User".into(),
            email: None,
            student_id: "STUD12345".into(),
            exam_date: None,
            study_hours: 2.0,
            flashcard_target: 20,
            completed_onboarding: true,
        }
    }

    #[test]
    fn test_weekly_progress_from_samples() {
        let gauges = weekly_progress(&sample_progress(), &user());
        assert_eq!(gauges.len(), 4);
        // 720 minutes against 14 hours
        assert_eq!(gauges[0].done, 12.0);
        assert_eq!(gauges[0].goal, 14.0);
        assert_eq!(gauges[1].done, 120.0);
        assert_eq!(gauges[1].goal, 140.0);
        assert_eq!(gauges[2].done, 13.0);
        // (85 + 90 + 75 + 95) / 4 = 86.25
        assert_eq!(gauges[3].done, 86.0);
    }

    #[test]
    fn test_gauge_ratio_is_clamped() {
        let gauge = Gauge {
            label: "x",
            done: 30.0,
            goal: 10.0,
            unit: "",
        };
        assert_eq!(gauge.ratio(), 1.0);
        let empty = Gauge { goal: 0.0, ..gauge };
        assert_eq!(empty.ratio(), 0.0);
    }
}
