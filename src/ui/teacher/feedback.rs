// SPDX-License-Identifier: MPL-2.0
//! Per-student feedback drafts with confirm-gated sending.

use crate::data::mock;
use crate::i18n::fluent::I18n;
use crate::ui::components::badge;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, scrollable, text, text_input, Column, Row, Space};
use iced::{Element, Length};

/// One feedback draft row. View-model local to this screen; "sending" only
/// flips the flag after confirmation.
#[derive(Debug, Clone)]
pub struct FeedbackDraft {
    pub student_name: String,
    pub activity_title: String,
    pub body: String,
    pub sent: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    BodyChanged(usize, String),
    SendRequested(usize),
    SendConfirmed { index: usize, accepted: bool },
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Ask the user to confirm sending the feedback at `index`.
    ConfirmSend(usize),
}

#[derive(Debug, Clone)]
pub struct State {
    drafts: Vec<FeedbackDraft>,
    pending_send: Option<usize>,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl Default for State {
    fn default() -> Self {
        // Seed one draft per graded submission in the mock queue.
        let drafts = mock::submissions()
            .into_iter()
            .filter(|submission| submission.score.is_some())
            .map(|submission| FeedbackDraft {
                student_name: submission.student_name,
                activity_title: submission.activity_title,
                body: String::new(),
                sent: false,
            })
            .collect();
        Self {
            drafts,
            pending_send: None,
        }
    }
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::BodyChanged(index, body) => {
                if let Some(draft) = self.drafts.get_mut(index) {
                    if !draft.sent {
                        draft.body = body;
                    }
                }
                Event::None
            }
            Message::SendRequested(index) => match self.drafts.get(index) {
                Some(draft) if !draft.sent && !draft.body.trim().is_empty() => {
                    self.pending_send = Some(index);
                    Event::ConfirmSend(index)
                }
                _ => Event::None,
            },
            Message::SendConfirmed { index, accepted } => {
                let pending = self.pending_send.take();
                if accepted && pending == Some(index) {
                    if let Some(draft) = self.drafts.get_mut(index) {
                        draft.sent = true;
                    }
                }
                Event::None
            }
        }
    }

    pub fn drafts(&self) -> &[FeedbackDraft] {
        &self.drafts
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let title = text(ctx.i18n.tr("feedback-title")).size(typography::TITLE);
        let subtitle = text(ctx.i18n.tr("feedback-subtitle"))
            .size(typography::BODY_SM)
            .color(palette::GRAY_400);

        let mut list = Column::new().spacing(spacing::SM);
        for (index, draft) in self.drafts.iter().enumerate() {
            list = list.push(row(index, draft, &ctx));
        }

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(title)
            .push(subtitle)
            .push(scrollable(list).height(Length::Fill))
            .into()
    }
}

fn row<'a>(index: usize, draft: &'a FeedbackDraft, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut heading = Row::new()
        .spacing(spacing::SM)
        .align_y(iced::alignment::Vertical::Center)
        .push(text(&draft.student_name).size(typography::BODY))
        .push(
            text(&draft.activity_title)
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        );

    if draft.sent {
        heading = heading.push(badge(ctx.i18n.tr("feedback-sent"), palette::SUCCESS_500));
    }

    let mut input = text_input(&ctx.i18n.tr("feedback-placeholder"), &draft.body)
        .padding(spacing::SM)
        .size(typography::BODY);
    if !draft.sent {
        input = input.on_input(move |body| Message::BodyChanged(index, body));
    }

    let can_send = !draft.sent && !draft.body.trim().is_empty();
    let send = button(text(ctx.i18n.tr("feedback-send")).size(typography::CAPTION))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::primary)
        .on_press_maybe(can_send.then_some(Message::SendRequested(index)));

    container(
        Column::new()
            .spacing(spacing::SM)
            .push(heading)
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(iced::alignment::Vertical::Center)
                    .push(input)
                    .push(Space::new().width(spacing::SM))
                    .push(send),
            ),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drafts_are_seeded_from_graded_submissions() {
        let state = State::default();
        assert!(!state.drafts().is_empty());
        assert!(state.drafts().iter().all(|d| !d.sent && d.body.is_empty()));
    }

    #[test]
    fn empty_draft_cannot_be_sent() {
        let mut state = State::default();
        let event = state.update(Message::SendRequested(0));
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn send_flows_through_confirmation() {
        let mut state = State::default();
        state.update(Message::BodyChanged(0, "Well done.".into()));

        let event = state.update(Message::SendRequested(0));
        assert!(matches!(event, Event::ConfirmSend(0)));
        assert!(!state.drafts()[0].sent);

        state.update(Message::SendConfirmed {
            index: 0,
            accepted: false,
        });
        assert!(!state.drafts()[0].sent);

        state.update(Message::SendRequested(0));
        state.update(Message::SendConfirmed {
            index: 0,
            accepted: true,
        });
        assert!(state.drafts()[0].sent);
    }

    #[test]
    fn sent_drafts_are_frozen() {
        let mut state = State::default();
        state.update(Message::BodyChanged(0, "Good work".into()));
        state.update(Message::SendRequested(0));
        state.update(Message::SendConfirmed {
            index: 0,
            accepted: true,
        });

        state.update(Message::BodyChanged(0, "changed my mind".into()));
        assert_eq!(state.drafts()[0].body, "Good work");
    }
}
