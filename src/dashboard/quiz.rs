//! Quiz taking: one answer slot per question, all-or-nothing scoring.

use crate::data::materials::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
    /// `correct / total` as a rounded percentage.
    pub percent: u32,
}

/// Score `answers` against `questions`, index-aligned. Empty slots count as
/// wrong.
pub fn score(questions: &[Question], answers: &[Option<usize>]) -> QuizScore {
    let correct = questions
        .iter()
        .zip(answers)
        .filter(|(q, a)| **a == Some(q.correct_answer))
        .count();
    let total = questions.len();
    let percent = if total == 0 {
        0
    } else {
        (correct as f64 / total as f64 * 100.0).round() as u32
    };
    QuizScore {
        correct,
        total,
        percent,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    pub current: usize,
    pub answers: Vec<Option<usize>>,
    /// Option under the selection cursor on the current question.
    pub highlighted: usize,
    pub submitted: bool,
}

impl QuizSession {
    pub fn new(question_count: usize) -> Self {
        Self {
            current: 0,
            answers: vec![None; question_count],
            highlighted: 0,
            submitted: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.answers.len());
    }

    pub fn question_count(&self) -> usize {
        self.answers.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.question_count()
    }

    pub fn current_answer(&self) -> Option<usize> {
        self.answers.get(self.current).copied().flatten()
    }

    /// Fill the current slot. `option` must be below `option_count`.
    pub fn select(&mut self, option: usize, option_count: usize) {
        if self.submitted || option >= option_count {
            return;
        }
        if let Some(slot) = self.answers.get_mut(self.current) {
            *slot = Some(option);
            self.highlighted = option;
        }
    }

    pub fn highlight_next(&mut self, option_count: usize) {
        if self.highlighted + 1 < option_count {
            self.highlighted += 1;
        }
    }

    pub fn highlight_prev(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// "Next" is disabled exactly while the current slot is empty.
    pub fn next_enabled(&self) -> bool {
        self.current_answer().is_some()
    }

    pub fn previous_enabled(&self) -> bool {
        self.current > 0
    }

    pub fn submit_enabled(&self) -> bool {
        !self.answers.is_empty() && self.answers.iter().all(Option::is_some)
    }

    pub fn next(&mut self) {
        if self.next_enabled() && !self.is_last_question() {
            self.current += 1;
            self.highlighted = self.current_answer().unwrap_or(0);
        }
    }

    pub fn previous(&mut self) {
        if self.previous_enabled() {
            self.current -= 1;
            self.highlighted = self.current_answer().unwrap_or(0);
        }
    }

    pub fn submit(&mut self, questions: &[Question]) -> Option<QuizScore> {
        if !self.submit_enabled() {
            return None;
        }
        self.submitted = true;
        Some(score(questions, &self.answers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions(correct: &[usize]) -> Vec<Question> {
        correct
            .iter()
            .map(|&c| Question {
                id: "q",
                text: "?",
                options: vec!["a", "b", "c", "d"],
                correct_answer: c,
            })
            .collect()
    }

    #[test]
    fn test_score_examples() {
        let qs = questions(&[1, 2]);
        assert_eq!(score(&qs, &[Some(1), Some(2)]).percent, 100);
        assert_eq!(score(&qs, &[Some(0), Some(0)]).percent, 0);
        assert_eq!(score(&qs, &[Some(1), Some(0)]).percent, 50);
    }

    #[test]
    fn test_score_rounds() {
        let qs = questions(&[1, 2, 3]);
        let s = score(&qs, &[Some(1), Some(2), Some(0)]);
        assert_eq!((s.correct, s.total, s.percent), (2, 3, 67));
        assert_eq!(score(&qs, &[Some(1), None, None]).percent, 33);
    }

    #[test]
    fn test_next_disabled_until_answered() {
        let qs = questions(&[1, 2, 3]);
        let mut session = QuizSession::new(qs.len());
        assert!(!session.next_enabled());
        session.next();
        assert_eq!(session.current, 0);

        session.select(1, 4);
        assert!(session.next_enabled());
        session.next();
        assert_eq!(session.current, 1);
        assert!(!session.next_enabled());

        session.previous();
        assert_eq!(session.current, 0);
        assert!(session.next_enabled());
        assert_eq!(session.highlighted, 1);
    }

    #[test]
    fn test_submit_requires_every_slot() {
        let qs = questions(&[1, 2]);
        let mut session = QuizSession::new(qs.len());
        session.select(1, 4);
        assert!(session.submit(&qs).is_none());
        session.next();
        session.select(2, 4);
        assert!(session.is_last_question());
        let result = session.submit(&qs).unwrap();
        assert_eq!(result.percent, 100);
        assert!(session.submitted);

        session.reset();
        assert_eq!(session, QuizSession::new(2));
    }

    #[test]
    fn test_select_ignores_out_of_range() {
        let mut session = QuizSession::new(1);
        session.select(7, 4);
        assert_eq!(session.current_answer(), None);
    }
}
