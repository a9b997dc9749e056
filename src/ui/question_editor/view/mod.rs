// SPDX-License-Identifier: MPL-2.0
//! Editor screen layout: header, validation banner, question list.

mod card;
mod form;

use super::{Message, State, ViewContext};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentArgs;
use iced::widget::{button, container, scrollable, text, Column, Row, Space};
use iced::{Element, Length};

pub(super) fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = header(state, &ctx);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(header);

    if state.validation_failures() > 0 {
        content = content.push(validation_banner(state, &ctx));
    }

    content = content.push(toolbar(state, &ctx));
    content = content.push(question_list(state, &ctx));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn header<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let titles = Column::new()
        .spacing(spacing::XS)
        .push(text(state.activity_title()).size(typography::TITLE))
        .push(
            text(ctx.i18n.tr("editor-subtitle"))
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        );

    let cancel = button(text(ctx.i18n.tr("editor-cancel")).size(typography::BODY))
        .padding([spacing::SM, spacing::MD])
        .style(styles::button::chip)
        .on_press(Message::Dismiss);

    let save = button(text(ctx.i18n.tr("editor-save")).size(typography::BODY))
        .padding([spacing::SM, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::Save);

    Row::new()
        .spacing(spacing::SM)
        .align_y(iced::alignment::Vertical::Center)
        .push(titles)
        .push(Space::new().width(Length::Fill))
        .push(cancel)
        .push(save)
        .into()
}

fn validation_banner<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut args = FluentArgs::new();
    args.set("count", state.validation_failures() as i64);

    container(
        text(ctx.i18n.tr_with("editor-validation-error", &args))
            .size(typography::BODY)
            .color(palette::ERROR_500),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn toolbar<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let add = button(text(ctx.i18n.tr("editor-add-question")).size(typography::BODY))
        .padding([spacing::SM, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::AddQuestion);

    let mut args = FluentArgs::new();
    args.set("count", state.questions().len() as i64);
    let count = text(ctx.i18n.tr_with("editor-question-count", &args))
        .size(typography::BODY_SM)
        .color(palette::GRAY_400);

    Row::new()
        .spacing(spacing::MD)
        .align_y(iced::alignment::Vertical::Center)
        .push(add)
        .push(count)
        .into()
}

fn question_list<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if state.questions().is_empty() {
        return container(
            text(ctx.i18n.tr("editor-empty"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .padding(spacing::XL)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into();
    }

    let total = state.questions().len();
    let mut list = Column::new().spacing(spacing::SM);

    for (index, question) in state.questions().iter().enumerate() {
        let element = if state.active_edit() == Some(question.id) {
            form::view(state, index, question, ctx)
        } else {
            card::view(index, question, total, ctx)
        };
        list = list.push(element);
    }

    scrollable(list).height(Length::Fill).into()
}
