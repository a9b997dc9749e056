// SPDX-License-Identifier: MPL-2.0
//! Question records owned by activities and edited by the question editor.

use uuid::Uuid;

/// Opaque identifier for a question, stable for the question's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestionId(Uuid);

impl QuestionId {
    /// Generates a fresh, collision-free identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for QuestionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Answer shape of a question. Determines which fields are meaningful and
/// which edit form the editor renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
    Essay,
    Problem,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 5] = [
        QuestionKind::MultipleChoice,
        QuestionKind::TrueFalse,
        QuestionKind::ShortAnswer,
        QuestionKind::Essay,
        QuestionKind::Problem,
    ];

    /// Message key for the localized kind label.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "question-kind-multiple-choice",
            QuestionKind::TrueFalse => "question-kind-true-false",
            QuestionKind::ShortAnswer => "question-kind-short-answer",
            QuestionKind::Essay => "question-kind-essay",
            QuestionKind::Problem => "question-kind-problem",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn i18n_key(&self) -> &'static str {
        match self {
            Difficulty::Easy => "difficulty-easy",
            Difficulty::Medium => "difficulty-medium",
            Difficulty::Hard => "difficulty-hard",
        }
    }
}

/// Number of answer options a new multiple-choice question starts with.
pub const DEFAULT_OPTION_COUNT: usize = 4;

/// One gradable item within an activity.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: QuestionId,
    pub kind: QuestionKind,
    pub prompt: String,
    /// Ordered answer options; meaningful only for [`QuestionKind::MultipleChoice`].
    pub options: Vec<String>,
    /// Empty means "not yet specified". Semantics depend on `kind`: an option
    /// letter for multiple choice, `"true"`/`"false"` for true/false, free
    /// text otherwise.
    pub correct_answer: String,
    pub points: u32,
    pub difficulty: Difficulty,
}

impl Question {
    /// A blank multiple-choice question with editor defaults.
    pub fn new() -> Self {
        Self {
            id: QuestionId::new(),
            kind: QuestionKind::MultipleChoice,
            prompt: String::new(),
            options: vec![String::new(); DEFAULT_OPTION_COUNT],
            correct_answer: String::new(),
            points: 1,
            difficulty: Difficulty::Medium,
        }
    }

    /// Convenience constructor used by the mock data provider and tests.
    pub fn with_prompt(kind: QuestionKind, prompt: impl Into<String>) -> Self {
        Self {
            kind,
            prompt: prompt.into(),
            ..Self::new()
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.prompt.trim().is_empty()
    }
}

impl Default for Question {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_question_matches_editor_defaults() {
        let question = Question::new();
        assert_eq!(question.kind, QuestionKind::MultipleChoice);
        assert_eq!(question.options.len(), DEFAULT_OPTION_COUNT);
        assert!(question.options.iter().all(String::is_empty));
        assert!(question.correct_answer.is_empty());
        assert_eq!(question.points, 1);
        assert_eq!(question.difficulty, Difficulty::Medium);
    }

    #[test]
    fn fresh_ids_are_distinct() {
        let a = Question::new();
        let b = Question::new();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn blank_prompt_is_incomplete() {
        let mut question = Question::new();
        assert!(!question.is_complete());
        question.prompt = "   ".into();
        assert!(!question.is_complete());
        question.prompt = "What is 2 + 2?".into();
        assert!(question.is_complete());
    }
}
