// SPDX-License-Identifier: MPL-2.0
//! Corrections queue: filterable submission list plus an activity strip for
//! jumping into the question editor.
//!
//! Activities are owned by the app (they are the collection the question
//! editor replaces on save); this screen only renders them.

use crate::data::mock;
use crate::domain::{Activity, ActivityId, Submission, SubmissionId, SubmissionStatus};
use crate::i18n::fluent::I18n;
use crate::ui::components::badge;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentArgs;
use iced::widget::{button, container, scrollable, text, text_input, Column, Row, Space};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    StatusFilter(Option<SubmissionStatus>),
    OpenSubmission(SubmissionId),
    EditQuestions(ActivityId),
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Navigate to the submission detail screen.
    OpenSubmission(SubmissionId),
    /// Start a question editing session for the activity.
    EditActivity(ActivityId),
}

#[derive(Debug, Clone)]
pub struct State {
    submissions: Vec<Submission>,
    query: String,
    status_filter: Option<SubmissionStatus>,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// App-owned activities rendered in the editing strip.
    pub activities: &'a [Activity],
}

impl Default for State {
    fn default() -> Self {
        Self {
            submissions: mock::submissions(),
            query: String::new(),
            status_filter: None,
        }
    }
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                Event::None
            }
            Message::StatusFilter(filter) => {
                self.status_filter = filter;
                Event::None
            }
            Message::OpenSubmission(id) => Event::OpenSubmission(id),
            Message::EditQuestions(id) => Event::EditActivity(id),
        }
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn submission(&self, id: SubmissionId) -> Option<&Submission> {
        self.submissions.iter().find(|s| s.id == id)
    }

    /// Writes a graded submission back into the queue after the detail screen
    /// finishes with it.
    pub fn store_submission(&mut self, submission: Submission) {
        if let Some(slot) = self.submissions.iter_mut().find(|s| s.id == submission.id) {
            *slot = submission;
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Submission> {
        self.submissions.iter().filter(move |submission| {
            let status_ok = self
                .status_filter
                .is_none_or(|status| submission.status == status);
            let query_ok = self.query.is_empty()
                || submission
                    .student_name
                    .to_lowercase()
                    .contains(&self.query.to_lowercase());
            status_ok && query_ok
        })
    }

    /// Submissions still waiting for a grade (pending or late).
    pub fn pending_count(&self) -> usize {
        self.submissions.iter().filter(|s| s.is_pending()).count()
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let title = text(ctx.i18n.tr("corrections-title")).size(typography::TITLE);

        let mut args = FluentArgs::new();
        args.set("count", self.pending_count() as i64);
        let pending = text(ctx.i18n.tr_with("corrections-pending-count", &args))
            .size(typography::BODY_SM)
            .color(palette::GRAY_400);

        let search = text_input(&ctx.i18n.tr("corrections-search-placeholder"), &self.query)
            .on_input(Message::QueryChanged)
            .padding(spacing::SM)
            .size(typography::BODY)
            .width(280);

        let mut filters = Row::new().spacing(spacing::XS).push(chip(
            ctx.i18n.tr("filter-all"),
            self.status_filter.is_none(),
            Message::StatusFilter(None),
        ));
        for status in SubmissionStatus::ALL {
            filters = filters.push(chip(
                ctx.i18n.tr(status.i18n_key()),
                self.status_filter == Some(status),
                Message::StatusFilter(Some(status)),
            ));
        }

        let mut list = Column::new().spacing(spacing::SM);
        for submission in self.visible() {
            list = list.push(submission_row(submission, &ctx));
        }

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(
                Row::new()
                    .spacing(spacing::MD)
                    .align_y(iced::alignment::Vertical::Center)
                    .push(title)
                    .push(pending)
                    .push(Space::new().width(Length::Fill))
                    .push(search),
            )
            .push(activity_strip(&ctx))
            .push(filters)
            .push(scrollable(list).height(Length::Fill))
            .into()
    }
}

fn activity_strip<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut strip = Row::new().spacing(spacing::SM);
    for activity in ctx.activities {
        let mut args = FluentArgs::new();
        args.set("count", activity.questions.len() as i64);

        strip = strip.push(
            container(
                Column::new()
                    .spacing(spacing::XS)
                    .push(text(&activity.title).size(typography::BODY))
                    .push(
                        text(ctx.i18n.tr_with("corrections-question-count", &args))
                            .size(typography::CAPTION)
                            .color(palette::GRAY_400),
                    )
                    .push(
                        button(
                            text(ctx.i18n.tr("corrections-edit-questions"))
                                .size(typography::CAPTION),
                        )
                        .padding([spacing::XS, spacing::SM])
                        .style(styles::button::chip)
                        .on_press(Message::EditQuestions(activity.id)),
                    ),
            )
            .padding(spacing::SM)
            .style(styles::container::card),
        );
    }
    strip.into()
}

fn submission_row<'a>(submission: &'a Submission, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let status_color = match submission.status {
        SubmissionStatus::Pending => palette::WARNING_500,
        SubmissionStatus::Graded => palette::SUCCESS_500,
        SubmissionStatus::Late => palette::ERROR_500,
    };

    let score = match submission.score {
        Some(score) => format!("{}/{}", score, submission.max_score),
        None => format!("—/{}", submission.max_score),
    };

    let open = button(text(ctx.i18n.tr("corrections-open")).size(typography::CAPTION))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::primary)
        .on_press(Message::OpenSubmission(submission.id));

    container(
        Row::new()
            .spacing(spacing::MD)
            .align_y(iced::alignment::Vertical::Center)
            .push(
                Column::new()
                    .spacing(spacing::XS)
                    .width(Length::FillPortion(3))
                    .push(text(&submission.student_name).size(typography::BODY))
                    .push(
                        text(&submission.activity_title)
                            .size(typography::BODY_SM)
                            .color(palette::GRAY_400),
                    ),
            )
            .push(badge(ctx.i18n.tr(submission.status.i18n_key()), status_color))
            .push(text(score).size(typography::BODY_SM))
            .push(
                text(submission.submitted_at.format("%Y-%m-%d %H:%M").to_string())
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .push(Space::new().width(Length::Fill))
            .push(open),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn chip<'a>(label: String, selected: bool, message: Message) -> Element<'a, Message> {
    let style = if selected {
        styles::button::selected
    } else {
        styles::button::chip
    };
    button(text(label).size(typography::BODY_SM))
        .padding([spacing::XS, spacing::SM])
        .style(style)
        .on_press(message)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_limits_queue() {
        let mut state = State::default();
        state.update(Message::StatusFilter(Some(SubmissionStatus::Pending)));
        assert!(state
            .visible()
            .all(|s| s.status == SubmissionStatus::Pending));
        assert!(state.visible().count() < state.submissions().len());
    }

    #[test]
    fn search_is_case_insensitive_on_student_name() {
        let mut state = State::default();
        state.update(Message::QueryChanged("LINA".into()));
        let names: Vec<&str> = state.visible().map(|s| s.student_name.as_str()).collect();
        assert_eq!(names, vec!["Lina Moreau"]);
    }

    #[test]
    fn open_submission_raises_navigation_event() {
        let mut state = State::default();
        let id = state.submissions()[0].id;
        let event = state.update(Message::OpenSubmission(id));
        assert!(matches!(event, Event::OpenSubmission(got) if got == id));
    }

    #[test]
    fn store_submission_replaces_matching_row() {
        let mut state = State::default();
        let mut graded = state.submissions()[0].clone();
        graded.status = SubmissionStatus::Graded;
        graded.score = Some(5);

        state.store_submission(graded);

        assert_eq!(state.submissions()[0].status, SubmissionStatus::Graded);
        assert_eq!(state.submissions()[0].score, Some(5));
    }
}
