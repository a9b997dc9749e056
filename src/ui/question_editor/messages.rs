// SPDX-License-Identifier: MPL-2.0
//! Editor message/event types re-exported by the facade.

use crate::domain::{Difficulty, Question, QuestionId, QuestionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Closed set of typed field edits. Each variant targets one semantically
/// distinct field group; there is no generic key/value mutation path.
#[derive(Debug, Clone)]
pub enum FieldEdit {
    Prompt(String),
    /// Full replacement of the options sequence. Callers replacing a single
    /// option clone the current sequence and swap one entry.
    Options(Vec<String>),
    CorrectAnswer(String),
    /// Raw text from the points input; coerced to a positive integer, `1` on
    /// parse failure.
    PointsInput(String),
    Kind(QuestionKind),
    Difficulty(Difficulty),
}

/// Messages emitted by the editor widgets.
#[derive(Debug, Clone)]
pub enum Message {
    AddQuestion,
    /// Delete pressed on a card; the mutation waits for confirmation.
    RemoveRequested(QuestionId),
    /// Outcome of the remove confirmation dialog.
    RemoveConfirmed {
        id: QuestionId,
        accepted: bool,
    },
    Duplicate(QuestionId),
    Move(QuestionId, MoveDirection),
    SetActiveEdit(Option<QuestionId>),
    Field(QuestionId, FieldEdit),
    Save,
    Dismiss,
}

/// Events propagated to the parent application for side effects.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Ask the user to confirm removing the question before the mutation is
    /// applied.
    ConfirmRemove(QuestionId),
    /// The session validated and ended; the parent receives the full
    /// replacement collection.
    Saved(Vec<Question>),
    /// The session ended without handing back a collection.
    Dismissed,
}
