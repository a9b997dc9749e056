// SPDX-License-Identifier: MPL-2.0
//! Submission detail screen: answers next to prompts, AI pre-grade, score
//! entry, confirm-gated grade commit.

use crate::domain::{Submission, SubmissionStatus};
use crate::i18n::fluent::I18n;
use crate::ui::components::badge;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentArgs;
use iced::widget::{button, container, scrollable, text, text_input, Column, Row, Space};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    ScoreInputChanged(String),
    AcceptAiSuggestion,
    FinishRequested,
    FinishConfirmed { accepted: bool },
    Back,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Ask the user to confirm committing the grade.
    ConfirmFinish,
    /// Grading finished; hand the updated submission back to the queue.
    Finished(Submission),
    Back,
}

#[derive(Debug, Clone)]
pub struct State {
    submission: Submission,
    score_input: String,
    awaiting_confirm: bool,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    pub fn new(submission: Submission) -> Self {
        let score_input = submission
            .score
            .map(|score| score.to_string())
            .unwrap_or_default();
        Self {
            submission,
            score_input,
            awaiting_confirm: false,
        }
    }

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    pub fn score_input(&self) -> &str {
        &self.score_input
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ScoreInputChanged(raw) => {
                self.score_input = raw;
                Event::None
            }
            Message::AcceptAiSuggestion => {
                if let Some(suggested) = self.submission.ai_suggested_score {
                    self.score_input = suggested.to_string();
                }
                Event::None
            }
            Message::FinishRequested => {
                self.awaiting_confirm = true;
                Event::ConfirmFinish
            }
            Message::FinishConfirmed { accepted } => {
                if !std::mem::take(&mut self.awaiting_confirm) || !accepted {
                    return Event::None;
                }
                let mut graded = self.submission.clone();
                graded.score = Some(self.committed_score());
                graded.status = SubmissionStatus::Graded;
                self.submission = graded.clone();
                Event::Finished(graded)
            }
            Message::Back => Event::Back,
        }
    }

    /// Score committed on finish. Same policy as question points: anything
    /// unparsable falls back silently, and the value is capped at the
    /// activity's maximum.
    fn committed_score(&self) -> u32 {
        self.score_input
            .trim()
            .parse::<u32>()
            .unwrap_or(0)
            .min(self.submission.max_score)
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let back = button(text(ctx.i18n.tr("submission-back")).size(typography::BODY_SM))
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::chip)
            .on_press(Message::Back);

        let status_color = match self.submission.status {
            SubmissionStatus::Pending => palette::WARNING_500,
            SubmissionStatus::Graded => palette::SUCCESS_500,
            SubmissionStatus::Late => palette::ERROR_500,
        };

        let header = Row::new()
            .spacing(spacing::MD)
            .align_y(iced::alignment::Vertical::Center)
            .push(back)
            .push(
                Column::new()
                    .spacing(spacing::XS)
                    .push(text(&self.submission.student_name).size(typography::TITLE))
                    .push(
                        text(&self.submission.activity_title)
                            .size(typography::BODY_SM)
                            .color(palette::GRAY_400),
                    ),
            )
            .push(badge(
                ctx.i18n.tr(self.submission.status.i18n_key()),
                status_color,
            ));

        let mut answers = Column::new().spacing(spacing::SM);
        for (index, answer) in self.submission.answers.iter().enumerate() {
            answers = answers.push(
                container(
                    Column::new()
                        .spacing(spacing::XS)
                        .push(
                            text(format!("{}. {}", index + 1, answer.prompt))
                                .size(typography::BODY_SM)
                                .color(palette::GRAY_400),
                        )
                        .push(text(&answer.response).size(typography::BODY)),
                )
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(styles::container::card),
            );
        }

        let grading = self.grading_panel(&ctx);

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(header)
            .push(
                scrollable(
                    Column::new()
                        .spacing(spacing::MD)
                        .push(answers)
                        .push(grading),
                )
                .height(Length::Fill),
            )
            .into()
    }

    fn grading_panel<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let mut panel = Column::new()
            .spacing(spacing::SM)
            .push(text(ctx.i18n.tr("submission-grading-title")).size(typography::TITLE_SM));

        if let Some(suggested) = self.submission.ai_suggested_score {
            let mut args = FluentArgs::new();
            args.set("score", suggested as i64);
            args.set("max", self.submission.max_score as i64);

            let mut suggestion = Column::new().spacing(spacing::XS).push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(iced::alignment::Vertical::Center)
                    .push(badge(ctx.i18n.tr("submission-ai-badge"), palette::INFO_500))
                    .push(
                        text(ctx.i18n.tr_with("submission-ai-suggestion", &args))
                            .size(typography::BODY),
                    )
                    .push(
                        button(
                            text(ctx.i18n.tr("submission-accept-suggestion"))
                                .size(typography::CAPTION),
                        )
                        .padding([spacing::XS, spacing::SM])
                        .style(styles::button::chip)
                        .on_press(Message::AcceptAiSuggestion),
                    ),
            );

            if let Some(rationale) = &self.submission.ai_rationale {
                suggestion = suggestion.push(
                    text(rationale)
                        .size(typography::BODY_SM)
                        .color(palette::GRAY_400),
                );
            }
            panel = panel.push(suggestion);
        }

        let mut args = FluentArgs::new();
        args.set("max", self.submission.max_score as i64);

        let score_row = Row::new()
            .spacing(spacing::SM)
            .align_y(iced::alignment::Vertical::Center)
            .push(
                text(ctx.i18n.tr_with("submission-score-label", &args))
                    .size(typography::BODY_SM)
                    .color(palette::GRAY_400),
            )
            .push(
                text_input("0", &self.score_input)
                    .on_input(Message::ScoreInputChanged)
                    .padding(spacing::SM)
                    .size(typography::BODY)
                    .width(80),
            )
            .push(Space::new().width(Length::Fill))
            .push(
                button(text(ctx.i18n.tr("submission-finish")).size(typography::BODY))
                    .padding([spacing::SM, spacing::MD])
                    .style(styles::button::primary)
                    .on_press(Message::FinishRequested),
            );

        panel = panel.push(score_row);

        container(panel)
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::panel)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock;

    fn pending_submission() -> Submission {
        mock::submissions()
            .into_iter()
            .find(|s| s.status == SubmissionStatus::Pending)
            .expect("mock data has a pending submission")
    }

    #[test]
    fn accept_suggestion_fills_score_input() {
        let submission = pending_submission();
        let suggested = submission.ai_suggested_score.unwrap();
        let mut state = State::new(submission);

        state.update(Message::AcceptAiSuggestion);
        assert_eq!(state.score_input(), suggested.to_string());
    }

    #[test]
    fn finish_requires_confirmation() {
        let mut state = State::new(pending_submission());
        state.update(Message::ScoreInputChanged("5".into()));

        let event = state.update(Message::FinishRequested);
        assert!(matches!(event, Event::ConfirmFinish));
        assert_eq!(state.submission().status, SubmissionStatus::Pending);

        let event = state.update(Message::FinishConfirmed { accepted: true });
        match event {
            Event::Finished(graded) => {
                assert_eq!(graded.status, SubmissionStatus::Graded);
                assert_eq!(graded.score, Some(5));
            }
            other => panic!("expected Finished, got {:?}", other),
        }
    }

    #[test]
    fn declined_finish_changes_nothing() {
        let mut state = State::new(pending_submission());
        state.update(Message::FinishRequested);
        let event = state.update(Message::FinishConfirmed { accepted: false });

        assert!(matches!(event, Event::None));
        assert_eq!(state.submission().status, SubmissionStatus::Pending);
        assert_eq!(state.submission().score, None);
    }

    #[test]
    fn unsolicited_confirmation_is_ignored() {
        let mut state = State::new(pending_submission());
        let event = state.update(Message::FinishConfirmed { accepted: true });
        assert!(matches!(event, Event::None));
        assert_eq!(state.submission().status, SubmissionStatus::Pending);
    }

    #[test]
    fn malformed_score_is_coerced_and_capped() {
        let mut state = State::new(pending_submission());
        state.update(Message::ScoreInputChanged("nonsense".into()));
        state.update(Message::FinishRequested);
        match state.update(Message::FinishConfirmed { accepted: true }) {
            Event::Finished(graded) => assert_eq!(graded.score, Some(0)),
            other => panic!("expected Finished, got {:?}", other),
        }

        let mut state = State::new(pending_submission());
        state.update(Message::ScoreInputChanged("999".into()));
        state.update(Message::FinishRequested);
        match state.update(Message::FinishConfirmed { accepted: true }) {
            Event::Finished(graded) => {
                assert_eq!(graded.score, Some(state.submission().max_score));
            }
            other => panic!("expected Finished, got {:?}", other),
        }
    }
}
