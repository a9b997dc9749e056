// SPDX-License-Identifier: MPL-2.0
use super::question::Question;
use chrono::NaiveDate;

/// Identifier for an activity within the session's working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivityId(pub u32);

/// An assessable activity (quiz, homework, exam) owning an ordered question
/// list. Question order is significant: display order is grading order.
#[derive(Debug, Clone)]
pub struct Activity {
    pub id: ActivityId,
    pub title: String,
    pub subject: String,
    pub due_date: NaiveDate,
    pub questions: Vec<Question>,
}

impl Activity {
    pub fn total_points(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::question::QuestionKind;

    #[test]
    fn total_points_sums_question_weights() {
        let mut quiz = Activity {
            id: ActivityId(1),
            title: "Fractions quiz".into(),
            subject: "Mathematics".into(),
            due_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            questions: vec![
                Question::with_prompt(QuestionKind::MultipleChoice, "1/2 + 1/4 = ?"),
                Question::with_prompt(QuestionKind::ShortAnswer, "Simplify 6/8."),
            ],
        };
        quiz.questions[1].points = 3;
        assert_eq!(quiz.total_points(), 4);
    }
}
