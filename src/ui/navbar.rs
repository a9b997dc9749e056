// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar.
//!
//! Tabs are grouped by audience: the manager dashboards on the left, the
//! teacher workflows next to them, settings pinned to the right. The bar only
//! reports which tab was pressed; the app decides what switching screens
//! means (and whether an editing session blocks it).

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Row, Space};
use iced::{Element, Length};

/// Navigation destinations reachable from the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Insights,
    Analytics,
    Reports,
    Users,
    Institution,
    Corrections,
    Feedback,
    Settings,
}

impl Tab {
    const MANAGER: [Tab; 5] = [
        Tab::Insights,
        Tab::Analytics,
        Tab::Reports,
        Tab::Users,
        Tab::Institution,
    ];
    const TEACHER: [Tab; 2] = [Tab::Corrections, Tab::Feedback];

    fn i18n_key(&self) -> &'static str {
        match self {
            Tab::Insights => "nav-insights",
            Tab::Analytics => "nav-analytics",
            Tab::Reports => "nav-reports",
            Tab::Users => "nav-users",
            Tab::Institution => "nav-institution",
            Tab::Corrections => "nav-corrections",
            Tab::Feedback => "nav-feedback",
            Tab::Settings => "nav-settings",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    TabPressed(Tab),
}

/// Contextual data needed to render the bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Tab corresponding to the active screen, if any is highlighted.
    pub active: Option<Tab>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(iced::alignment::Vertical::Center);

    row = row.push(
        text(ctx.i18n.tr("app-title"))
            .size(typography::TITLE_SM)
            .color(palette::PRIMARY_500),
    );
    row = row.push(Space::new().width(spacing::MD));

    for tab in Tab::MANAGER {
        row = row.push(tab_button(&ctx, tab));
    }

    row = row.push(Space::new().width(spacing::MD));

    for tab in Tab::TEACHER {
        row = row.push(tab_button(&ctx, tab));
    }

    row = row.push(Space::new().width(Length::Fill));
    row = row.push(tab_button(&ctx, Tab::Settings));

    container(row)
        .padding([spacing::SM, spacing::MD])
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn tab_button<'a>(ctx: &ViewContext<'a>, tab: Tab) -> Element<'a, Message> {
    let label = text(ctx.i18n.tr(tab.i18n_key())).size(typography::BODY_SM);
    let style = if ctx.active == Some(tab) {
        styles::button::selected
    } else {
        styles::button::chip
    };

    button(label)
        .padding([spacing::XS, spacing::SM])
        .style(style)
        .on_press(Message::TabPressed(tab))
        .into()
}
