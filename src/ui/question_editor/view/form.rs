// SPDX-License-Identifier: MPL-2.0
//! Editable form for the active edit target, with a per-kind answer section.

use crate::domain::{Difficulty, Question, QuestionKind};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::question_editor::{FieldEdit, Message, State, ViewContext};
use crate::ui::styles;
use fluent_bundle::FluentArgs;
use iced::widget::{button, container, text, text_input, Column, Row, Space};
use iced::{Element, Length};

pub(super) fn view<'a>(
    state: &'a State,
    index: usize,
    question: &'a Question,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let id = question.id;

    let mut args = FluentArgs::new();
    args.set("number", (index + 1) as i64);
    let heading = Row::new()
        .align_y(iced::alignment::Vertical::Center)
        .push(text(ctx.i18n.tr_with("editor-form-title", &args)).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(ctx.i18n.tr("editor-done")).size(typography::BODY_SM))
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::primary)
                .on_press(Message::SetActiveEdit(None)),
        );

    let kind_row = choice_row(
        ctx.i18n.tr("editor-kind-label"),
        QuestionKind::ALL.iter().map(|kind| {
            (
                ctx.i18n.tr(kind.i18n_key()),
                *kind == question.kind,
                Message::Field(id, FieldEdit::Kind(*kind)),
            )
        }),
    );

    let prompt_input = labelled(
        ctx.i18n.tr("editor-prompt-label"),
        text_input(&ctx.i18n.tr("editor-prompt-placeholder"), &question.prompt)
            .on_input(move |value| Message::Field(id, FieldEdit::Prompt(value)))
            .padding(spacing::SM)
            .size(typography::BODY)
            .into(),
    );

    let answer_section = answer_section(question, ctx);

    let difficulty_row = choice_row(
        ctx.i18n.tr("editor-difficulty-label"),
        Difficulty::ALL.iter().map(|difficulty| {
            (
                ctx.i18n.tr(difficulty.i18n_key()),
                *difficulty == question.difficulty,
                Message::Field(id, FieldEdit::Difficulty(*difficulty)),
            )
        }),
    );

    let points_input = labelled(
        ctx.i18n.tr("editor-points-field-label"),
        text_input("1", state.points_input())
            .on_input(move |value| Message::Field(id, FieldEdit::PointsInput(value)))
            .padding(spacing::SM)
            .size(typography::BODY)
            .width(80)
            .into(),
    );

    container(
        Column::new()
            .spacing(spacing::MD)
            .push(heading)
            .push(kind_row)
            .push(prompt_input)
            .push(answer_section)
            .push(
                Row::new()
                    .spacing(spacing::LG)
                    .push(difficulty_row)
                    .push(points_input),
            ),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::panel)
    .into()
}

fn answer_section<'a>(question: &'a Question, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let id = question.id;

    match question.kind {
        QuestionKind::MultipleChoice => {
            let mut options = Column::new().spacing(spacing::SM);
            for (option_index, value) in question.options.iter().enumerate() {
                let letter = char::from(b'A' + (option_index % 26) as u8);
                let base = question.options.clone();
                let input = text_input(&ctx.i18n.tr("editor-option-placeholder"), value)
                    .on_input(move |value| {
                        // Full replacement of the sequence with one entry
                        // swapped; the other options are preserved.
                        let mut replacement = base.clone();
                        replacement[option_index] = value;
                        Message::Field(id, FieldEdit::Options(replacement))
                    })
                    .padding(spacing::SM)
                    .size(typography::BODY);

                options = options.push(
                    Row::new()
                        .spacing(spacing::SM)
                        .align_y(iced::alignment::Vertical::Center)
                        .push(text(format!("{letter}.")).size(typography::BODY))
                        .push(input),
                );
            }

            let correct = labelled(
                ctx.i18n.tr("editor-correct-option-label"),
                text_input("A", &question.correct_answer)
                    .on_input(move |value| Message::Field(id, FieldEdit::CorrectAnswer(value)))
                    .padding(spacing::SM)
                    .size(typography::BODY)
                    .width(80)
                    .into(),
            );

            Column::new()
                .spacing(spacing::SM)
                .push(labelled(ctx.i18n.tr("editor-options-label"), options.into()))
                .push(correct)
                .into()
        }
        QuestionKind::TrueFalse => choice_row(
            ctx.i18n.tr("editor-correct-answer-label"),
            [("editor-answer-true", "true"), ("editor-answer-false", "false")]
                .iter()
                .map(|(key, value)| {
                    (
                        ctx.i18n.tr(key),
                        question.correct_answer == *value,
                        Message::Field(id, FieldEdit::CorrectAnswer((*value).to_string())),
                    )
                }),
        ),
        QuestionKind::ShortAnswer | QuestionKind::Problem => labelled(
            ctx.i18n.tr("editor-correct-answer-label"),
            text_input(
                &ctx.i18n.tr("editor-correct-answer-placeholder"),
                &question.correct_answer,
            )
            .on_input(move |value| Message::Field(id, FieldEdit::CorrectAnswer(value)))
            .padding(spacing::SM)
            .size(typography::BODY)
            .into(),
        ),
        QuestionKind::Essay => text(ctx.i18n.tr("editor-essay-note"))
            .size(typography::BODY_SM)
            .color(palette::GRAY_400)
            .into(),
    }
}

fn labelled<'a>(label: String, control: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(text(label).size(typography::BODY_SM).color(palette::GRAY_400))
        .push(control)
        .into()
}

fn choice_row<'a>(
    label: String,
    choices: impl Iterator<Item = (String, bool, Message)>,
) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);
    for (choice_label, selected, message) in choices {
        let style = if selected {
            styles::button::selected
        } else {
            styles::button::chip
        };
        row = row.push(
            button(text(choice_label).size(typography::BODY_SM))
                .padding([spacing::XS, spacing::SM])
                .style(style)
                .on_press(message),
        );
    }
    labelled(label, row.into())
}
