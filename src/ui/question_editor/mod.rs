// SPDX-License-Identifier: MPL-2.0
//! Question list editor for one activity.
//!
//! This module follows the "state down, messages up" pattern used by the
//! other screens. The editor operates on a working copy of the activity's
//! question list and only hands the collection back to the caller on an
//! explicit, validated save; dismissing the session leaves the caller's data
//! untouched.

mod messages;
mod session;
mod view;

pub use messages::{Event, FieldEdit, Message, MoveDirection};

use crate::domain::{Question, QuestionId};
use crate::i18n::fluent::I18n;
use iced::Element;

/// Suffix appended to a duplicated question's prompt. Display convenience
/// only; the exact wording carries no meaning elsewhere.
pub const COPY_SUFFIX: &str = " (copy)";

/// Local UI state for the editor screen.
#[derive(Debug, Clone)]
pub struct State {
    /// Display-only title of the activity being edited.
    activity_title: String,
    /// Private working copy; the caller's collection is never touched until
    /// [`Event::Saved`] hands back a full replacement.
    working: Vec<Question>,
    /// The single question rendered in editable-form mode, if any.
    active_edit: Option<QuestionId>,
    /// Raw text of the points input for the active edit target.
    points_input: String,
    /// Question awaiting remove confirmation.
    pending_remove: Option<QuestionId>,
    /// Incomplete questions found by the last failed save; `0` means no
    /// validation banner is shown.
    validation_failures: usize,
}

/// Contextual data needed to render the editor.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    /// Starts an editing session from a snapshot of the activity's questions.
    pub fn new(activity_title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            activity_title: activity_title.into(),
            working: questions,
            active_edit: None,
            points_input: String::new(),
            pending_remove: None,
            validation_failures: 0,
        }
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::AddQuestion => {
                self.add_question();
                Event::None
            }
            Message::RemoveRequested(id) => self.request_remove(id),
            Message::RemoveConfirmed { id, accepted } => {
                self.resolve_remove(id, accepted);
                Event::None
            }
            Message::Duplicate(id) => {
                self.duplicate(id);
                Event::None
            }
            Message::Move(id, direction) => {
                self.move_question(id, direction);
                Event::None
            }
            Message::SetActiveEdit(target) => {
                self.set_active_edit(target);
                Event::None
            }
            Message::Field(id, edit) => {
                self.edit_field(id, edit);
                Event::None
            }
            Message::Save => self.save(),
            Message::Dismiss => Event::Dismissed,
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::view(self, ctx)
    }

    pub fn activity_title(&self) -> &str {
        &self.activity_title
    }

    pub fn questions(&self) -> &[Question] {
        &self.working
    }

    pub fn active_edit(&self) -> Option<QuestionId> {
        self.active_edit
    }

    pub(crate) fn points_input(&self) -> &str {
        &self.points_input
    }

    /// Incomplete-question count from the last failed save attempt.
    pub fn validation_failures(&self) -> usize {
        self.validation_failures
    }
}
