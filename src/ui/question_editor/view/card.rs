// SPDX-License-Identifier: MPL-2.0
//! Read-only summary card for a question that is not being edited.

use crate::domain::Question;
use crate::ui::components::badge;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::question_editor::{Message, MoveDirection, ViewContext};
use crate::ui::styles;
use fluent_bundle::FluentArgs;
use iced::widget::{button, container, text, Column, Row, Space};
use iced::{Element, Length};

pub(super) fn view<'a>(
    index: usize,
    question: &'a Question,
    total: usize,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let id = question.id;

    let prompt: Element<'a, Message> = if question.prompt.trim().is_empty() {
        text(ctx.i18n.tr("editor-prompt-missing"))
            .size(typography::BODY)
            .color(palette::WARNING_500)
            .into()
    } else {
        text(&question.prompt).size(typography::BODY).into()
    };

    let mut points_args = FluentArgs::new();
    points_args.set("count", question.points as i64);

    let tags = Row::new()
        .spacing(spacing::SM)
        .push(badge(
            ctx.i18n.tr(question.kind.i18n_key()),
            palette::PRIMARY_500,
        ))
        .push(badge(
            ctx.i18n.tr(question.difficulty.i18n_key()),
            palette::INFO_500,
        ))
        .push(
            text(ctx.i18n.tr_with("editor-points-label", &points_args))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    let summary = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(
                    text(format!("{}.", index + 1))
                        .size(typography::BODY)
                        .color(palette::GRAY_400),
                )
                .push(prompt),
        )
        .push(tags);

    let move_up = small_button(ctx.i18n.tr("editor-move-up"))
        .on_press_maybe((index > 0).then_some(Message::Move(id, MoveDirection::Up)));
    let move_down = small_button(ctx.i18n.tr("editor-move-down"))
        .on_press_maybe((index + 1 < total).then_some(Message::Move(id, MoveDirection::Down)));
    let edit = small_button(ctx.i18n.tr("editor-edit")).on_press(Message::SetActiveEdit(Some(id)));
    let duplicate =
        small_button(ctx.i18n.tr("editor-duplicate")).on_press(Message::Duplicate(id));
    let remove = button(text(ctx.i18n.tr("editor-delete")).size(typography::CAPTION))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::destructive)
        .on_press(Message::RemoveRequested(id));

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(move_up)
        .push(move_down)
        .push(edit)
        .push(duplicate)
        .push(remove);

    container(
        Row::new()
            .spacing(spacing::MD)
            .align_y(iced::alignment::Vertical::Center)
            .push(summary)
            .push(Space::new().width(Length::Fill))
            .push(actions),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn small_button<'a>(label: String) -> iced::widget::Button<'a, Message> {
    button(text(label).size(typography::CAPTION))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::chip)
}
