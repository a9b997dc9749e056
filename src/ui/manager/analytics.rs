// SPDX-License-Identifier: MPL-2.0
//! Institution analytics dashboard: stat tiles, class table, grade trend.

use crate::data::mock;
use crate::domain::AnalyticsSnapshot;
use crate::i18n::fluent::I18n;
use crate::ui::components::stat_card;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, scrollable, text, Column, Row, Space};
use iced::{Element, Length};

/// Reporting period selector. Mock data is identical for every period; the
/// selector only exercises local view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    ThisTerm,
    LastTerm,
    FullYear,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::ThisTerm, Period::LastTerm, Period::FullYear];

    fn i18n_key(&self) -> &'static str {
        match self {
            Period::ThisTerm => "analytics-period-this-term",
            Period::LastTerm => "analytics-period-last-term",
            Period::FullYear => "analytics-period-full-year",
        }
    }
}

#[derive(Debug, Clone)]
pub struct State {
    snapshot: AnalyticsSnapshot,
    period: Period,
}

#[derive(Debug, Clone)]
pub enum Message {
    PeriodSelected(Period),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl Default for State {
    fn default() -> Self {
        Self {
            snapshot: mock::analytics(),
            period: Period::default(),
        }
    }
}

impl State {
    pub fn update(&mut self, message: Message) {
        match message {
            Message::PeriodSelected(period) => self.period = period,
        }
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let title = text(ctx.i18n.tr("analytics-title")).size(typography::TITLE);

        let mut periods = Row::new().spacing(spacing::XS);
        for period in Period::ALL {
            let style = if self.period == period {
                styles::button::selected
            } else {
                styles::button::chip
            };
            periods = periods.push(
                button(text(ctx.i18n.tr(period.i18n_key())).size(typography::BODY_SM))
                    .padding([spacing::XS, spacing::SM])
                    .style(style)
                    .on_press(Message::PeriodSelected(period)),
            );
        }

        let stats = Row::new()
            .spacing(spacing::MD)
            .push(stat_card(
                ctx.i18n.tr("analytics-enrollment"),
                self.snapshot.enrollment.to_string(),
                None,
            ))
            .push(stat_card(
                ctx.i18n.tr("analytics-attendance"),
                format!("{:.1}%", self.snapshot.attendance_rate),
                Some(ctx.i18n.tr("analytics-attendance-caption")),
            ))
            .push(stat_card(
                ctx.i18n.tr("analytics-average-grade"),
                format!("{:.1}", self.snapshot.average_grade),
                Some(ctx.i18n.tr("analytics-average-grade-caption")),
            ));

        let classes = class_table(&self.snapshot, &ctx);
        let trend = trend_section(&self.snapshot, &ctx);

        let content = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(
                Row::new()
                    .align_y(iced::alignment::Vertical::Center)
                    .push(title)
                    .push(Space::new().width(Length::Fill))
                    .push(periods),
            )
            .push(stats)
            .push(classes)
            .push(trend);

        scrollable(content).height(Length::Fill).into()
    }
}

fn class_table<'a>(
    snapshot: &'a AnalyticsSnapshot,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::MD)
        .push(cell(ctx.i18n.tr("analytics-class"), 2))
        .push(cell(ctx.i18n.tr("analytics-students"), 1))
        .push(cell(ctx.i18n.tr("analytics-average-grade"), 2))
        .push(cell(ctx.i18n.tr("analytics-attendance"), 2));

    let mut rows = Column::new()
        .spacing(spacing::SM)
        .push(header);

    for class in &snapshot.classes {
        let grade_color = if class.average_grade < 75.0 {
            palette::WARNING_500
        } else {
            palette::SUCCESS_500
        };
        rows = rows.push(
            Row::new()
                .spacing(spacing::MD)
                .push(cell(class.class_name.clone(), 2))
                .push(cell(class.students.to_string(), 1))
                .push(
                    text(format!("{:.1}", class.average_grade))
                        .size(typography::BODY)
                        .color(grade_color)
                        .width(Length::FillPortion(2)),
                )
                .push(cell(format!("{:.1}%", class.attendance_rate), 2)),
        );
    }

    container(
        Column::new()
            .spacing(spacing::SM)
            .push(text(ctx.i18n.tr("analytics-classes-title")).size(typography::TITLE_SM))
            .push(rows),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn trend_section<'a>(
    snapshot: &'a AnalyticsSnapshot,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::XS);
    for point in &snapshot.trend {
        // Poor man's bar chart: a filled strip proportional to the value.
        let bar_width = Length::FillPortion(point.value.round().max(1.0) as u16);
        let rest = Length::FillPortion((100.0 - point.value).round().max(1.0) as u16);
        rows = rows.push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(iced::alignment::Vertical::Center)
                .push(text(point.label.clone()).size(typography::CAPTION).width(40))
                .push(
                    container(Space::new().height(10))
                        .width(bar_width)
                        .style(styles::container::accent(palette::PRIMARY_400)),
                )
                .push(Space::new().width(rest))
                .push(text(format!("{:.1}", point.value)).size(typography::CAPTION)),
        );
    }

    container(
        Column::new()
            .spacing(spacing::SM)
            .push(text(ctx.i18n.tr("analytics-trend-title")).size(typography::TITLE_SM))
            .push(rows),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn cell<'a>(value: String, portion: u16) -> Element<'a, Message> {
    text(value)
        .size(typography::BODY)
        .width(Length::FillPortion(portion))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_selection_is_local_state() {
        let mut state = State::default();
        assert_eq!(state.period(), Period::ThisTerm);
        state.update(Message::PeriodSelected(Period::FullYear));
        assert_eq!(state.period(), Period::FullYear);
    }
}
