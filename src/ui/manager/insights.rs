// SPDX-License-Identifier: MPL-2.0
//! AI insights dashboard.
//!
//! Cards are generated server-side in the real deployment; here they come
//! from the mock provider. Dismissing a card only removes it from the local
//! list, behind a confirmation dialog.

use crate::data::mock;
use crate::domain::{Insight, InsightId, InsightSeverity};
use crate::i18n::fluent::I18n;
use crate::ui::components::badge;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, scrollable, text, Column, Row, Space};
use iced::{Color, Element, Length};

#[derive(Debug, Clone)]
pub struct State {
    insights: Vec<Insight>,
    filter: Option<InsightSeverity>,
    pending_dismiss: Option<InsightId>,
}

#[derive(Debug, Clone)]
pub enum Message {
    FilterChanged(Option<InsightSeverity>),
    Refresh,
    DismissRequested(InsightId),
    DismissConfirmed { id: InsightId, accepted: bool },
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Ask the user to confirm hiding the insight card.
    ConfirmDismiss(InsightId),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn severity_color(severity: InsightSeverity) -> Color {
    match severity {
        InsightSeverity::Positive => palette::SUCCESS_500,
        InsightSeverity::Warning => palette::WARNING_500,
        InsightSeverity::Critical => palette::ERROR_500,
    }
}

impl Default for State {
    fn default() -> Self {
        Self {
            insights: mock::insights(),
            filter: None,
            pending_dismiss: None,
        }
    }
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::FilterChanged(filter) => {
                self.filter = filter;
                Event::None
            }
            Message::Refresh => {
                self.insights = mock::insights();
                Event::None
            }
            Message::DismissRequested(id) => {
                if self.insights.iter().any(|insight| insight.id == id) {
                    self.pending_dismiss = Some(id);
                    Event::ConfirmDismiss(id)
                } else {
                    Event::None
                }
            }
            Message::DismissConfirmed { id, accepted } => {
                let pending = self.pending_dismiss.take();
                if accepted && pending == Some(id) {
                    self.insights.retain(|insight| insight.id != id);
                }
                Event::None
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Insight> {
        self.insights
            .iter()
            .filter(move |insight| self.filter.is_none_or(|f| insight.severity == f))
    }

    pub fn insights(&self) -> &[Insight] {
        &self.insights
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let title = text(ctx.i18n.tr("insights-title")).size(typography::TITLE);

        let refresh = button(text(ctx.i18n.tr("insights-refresh")).size(typography::BODY_SM))
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::chip)
            .on_press(Message::Refresh);

        let header = Row::new()
            .align_y(iced::alignment::Vertical::Center)
            .push(title)
            .push(Space::new().width(Length::Fill))
            .push(refresh);

        let mut filters = Row::new().spacing(spacing::XS).push(filter_chip(
            ctx.i18n.tr("filter-all"),
            self.filter.is_none(),
            Message::FilterChanged(None),
        ));
        for severity in InsightSeverity::ALL {
            filters = filters.push(filter_chip(
                ctx.i18n.tr(severity.i18n_key()),
                self.filter == Some(severity),
                Message::FilterChanged(Some(severity)),
            ));
        }

        let mut list = Column::new().spacing(spacing::SM);
        for insight in self.visible() {
            list = list.push(card(insight, &ctx));
        }

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(header)
            .push(filters)
            .push(scrollable(list).height(Length::Fill))
            .into()
    }
}

fn filter_chip<'a>(label: String, selected: bool, message: Message) -> Element<'a, Message> {
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

fn card<'a>(insight: &'a Insight, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let color = severity_color(insight.severity);

    let mut heading = Row::new()
        .spacing(spacing::SM)
        .align_y(iced::alignment::Vertical::Center)
        .push(badge(ctx.i18n.tr(insight.severity.i18n_key()), color))
        .push(text(&insight.title).size(typography::TITLE_SM));

    if let Some(delta) = insight.metric_delta {
        let delta_color = if delta >= 0.0 {
            palette::SUCCESS_500
        } else {
            palette::ERROR_500
        };
        heading = heading.push(
            text(format!("{delta:+.1}%"))
                .size(typography::BODY_SM)
                .color(delta_color),
        );
    }

    let dismiss = button(text(ctx.i18n.tr("insights-dismiss")).size(typography::CAPTION))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::chip)
        .on_press(Message::DismissRequested(insight.id));

    let body = text(&insight.body)
        .size(typography::BODY)
        .color(palette::GRAY_400);

    container(
        Row::new()
            .spacing(spacing::MD)
            .push(
                Column::new()
                    .spacing(spacing::XS)
                    .width(Length::Fill)
                    .push(heading)
                    .push(body),
            )
            .push(dismiss),
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
    fn filter_limits_visible_cards_to_one_severity() {
        let mut state = State::default();
        state.update(Message::FilterChanged(Some(InsightSeverity::Critical)));
        assert!(state
            .visible()
            .all(|insight| insight.severity == InsightSeverity::Critical));
        assert!(state.visible().count() < state.insights().len());
    }

    #[test]
    fn dismiss_requires_confirmation() {
        let mut state = State::default();
        let id = state.insights()[0].id;
        let before = state.insights().len();

        let event = state.update(Message::DismissRequested(id));
        assert!(matches!(event, Event::ConfirmDismiss(got) if got == id));
        assert_eq!(state.insights().len(), before);

        state.update(Message::DismissConfirmed {
            id,
            accepted: false,
        });
        assert_eq!(state.insights().len(), before);

        state.update(Message::DismissRequested(id));
        state.update(Message::DismissConfirmed { id, accepted: true });
        assert_eq!(state.insights().len(), before - 1);
    }

    #[test]
    fn refresh_restores_dismissed_cards() {
        let mut state = State::default();
        let id = state.insights()[0].id;
        state.update(Message::DismissRequested(id));
        state.update(Message::DismissConfirmed { id, accepted: true });

        state.update(Message::Refresh);
        assert_eq!(state.insights().len(), mock::insights().len());
    }
}
