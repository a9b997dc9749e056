// SPDX-License-Identifier: MPL-2.0
//! Working-copy operations behind the editor facade.
//!
//! Every mutation goes through these methods; nothing outside the module can
//! reach into the working copy. Reordering and duplication keep questions
//! referentially independent: no two questions ever share sub-structures.

use super::{Event, FieldEdit, MoveDirection, State, COPY_SUFFIX};
use crate::domain::question::DEFAULT_OPTION_COUNT;
use crate::domain::{Question, QuestionId, QuestionKind};

impl State {
    pub(super) fn add_question(&mut self) {
        let question = Question::new();
        let id = question.id;
        self.working.push(question);
        self.set_active_edit(Some(id));
        self.validation_failures = 0;
    }

    pub(super) fn request_remove(&mut self, id: QuestionId) -> Event {
        if self.index_of(id).is_none() {
            return Event::None;
        }
        self.pending_remove = Some(id);
        Event::ConfirmRemove(id)
    }

    /// Applies or abandons a pending remove. A declined confirmation is
    /// equivalent to a no-op.
    pub(super) fn resolve_remove(&mut self, id: QuestionId, accepted: bool) {
        let pending = self.pending_remove.take();
        if !accepted || pending != Some(id) {
            return;
        }
        self.working.retain(|q| q.id != id);
        if self.active_edit == Some(id) {
            self.active_edit = None;
        }
        self.validation_failures = 0;
    }

    pub(super) fn duplicate(&mut self, id: QuestionId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        // Clone gives an independent options vector; the copy and the
        // original never alias.
        let mut copy = self.working[index].clone();
        copy.id = QuestionId::new();
        copy.prompt.push_str(COPY_SUFFIX);
        self.working.insert(index + 1, copy);
        self.validation_failures = 0;
    }

    pub(super) fn move_question(&mut self, id: QuestionId, direction: MoveDirection) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let neighbor = match direction {
            MoveDirection::Up => {
                if index == 0 {
                    return;
                }
                index - 1
            }
            MoveDirection::Down => {
                if index + 1 >= self.working.len() {
                    return;
                }
                index + 1
            }
        };
        self.working.swap(index, neighbor);
    }

    /// Switches which question renders as an editable form. Field edits are
    /// applied to the working copy as they happen, so switching targets never
    /// discards anything.
    pub(super) fn set_active_edit(&mut self, target: Option<QuestionId>) {
        self.active_edit = target.filter(|id| self.index_of(*id).is_some());
        self.points_input = self
            .active_edit
            .and_then(|id| self.index_of(id))
            .map(|index| self.working[index].points.to_string())
            .unwrap_or_default();
    }

    pub(super) fn edit_field(&mut self, id: QuestionId, edit: FieldEdit) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let question = &mut self.working[index];

        match edit {
            FieldEdit::Prompt(prompt) => question.prompt = prompt,
            FieldEdit::Options(options) => question.options = options,
            FieldEdit::CorrectAnswer(answer) => question.correct_answer = answer,
            FieldEdit::PointsInput(raw) => {
                question.points = coerce_points(&raw);
                self.points_input = raw;
            }
            FieldEdit::Kind(kind) => {
                question.kind = kind;
                if kind == QuestionKind::MultipleChoice && question.options.is_empty() {
                    question.options = vec![String::new(); DEFAULT_OPTION_COUNT];
                }
            }
            FieldEdit::Difficulty(difficulty) => question.difficulty = difficulty,
        }
        self.validation_failures = 0;
    }

    /// All-or-nothing commit: either every question has a non-empty prompt
    /// and the full collection is handed back, or the working copy stays as
    /// it is and the failure count is surfaced.
    pub(super) fn save(&mut self) -> Event {
        let incomplete = self.working.iter().filter(|q| !q.is_complete()).count();
        if incomplete > 0 {
            self.validation_failures = incomplete;
            return Event::None;
        }
        Event::Saved(self.working.clone())
    }

    fn index_of(&self, id: QuestionId) -> Option<usize> {
        self.working.iter().position(|q| q.id == id)
    }
}

/// Points are a positive integer weight; anything unparsable (or zero) falls
/// back to 1 without surfacing an error.
fn coerce_points(raw: &str) -> u32 {
    raw.trim().parse::<u32>().ok().filter(|p| *p > 0).unwrap_or(1)
}

#[cfg(test)]
mod coerce_tests {
    use super::coerce_points;

    #[test]
    fn valid_numbers_pass_through() {
        assert_eq!(coerce_points("3"), 3);
        assert_eq!(coerce_points(" 12 "), 12);
    }

    #[test]
    fn garbage_and_zero_fall_back_to_one() {
        assert_eq!(coerce_points(""), 1);
        assert_eq!(coerce_points("abc"), 1);
        assert_eq!(coerce_points("0"), 1);
        assert_eq!(coerce_points("-4"), 1);
    }
}
