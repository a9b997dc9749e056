// SPDX-License-Identifier: MPL-2.0
//! Reports screen: filterable report list with confirm-gated actions.
//!
//! Generating and exporting are stand-ins for backend calls: after the
//! confirmation dialog the row is marked and nothing else happens.

use crate::data::mock;
use crate::domain::{ReportId, ReportKind, ReportStatus, ReportSummary};
use crate::i18n::fluent::I18n;
use crate::ui::components::badge;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, scrollable, text, Column, Row, Space};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportAction {
    Generate,
    Export,
}

#[derive(Debug, Clone)]
pub enum Message {
    KindFilter(Option<ReportKind>),
    ActionRequested(ReportId, ReportAction),
    ActionConfirmed {
        id: ReportId,
        action: ReportAction,
        accepted: bool,
    },
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Ask the user to confirm the (mock) backend action.
    Confirm(ReportId, ReportAction),
}

#[derive(Debug, Clone)]
pub struct State {
    reports: Vec<ReportSummary>,
    kind_filter: Option<ReportKind>,
    pending: Option<(ReportId, ReportAction)>,
    /// Most recent confirmed action, surfaced as a caption on the row.
    last_action: Option<(ReportId, ReportAction)>,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl Default for State {
    fn default() -> Self {
        Self {
            reports: mock::reports(),
            kind_filter: None,
            pending: None,
            last_action: None,
        }
    }
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::KindFilter(filter) => {
                self.kind_filter = filter;
                Event::None
            }
            Message::ActionRequested(id, action) => {
                if self.reports.iter().any(|report| report.id == id) {
                    self.pending = Some((id, action));
                    Event::Confirm(id, action)
                } else {
                    Event::None
                }
            }
            Message::ActionConfirmed {
                id,
                action,
                accepted,
            } => {
                let pending = self.pending.take();
                if accepted && pending == Some((id, action)) {
                    self.apply(id, action);
                }
                Event::None
            }
        }
    }

    fn apply(&mut self, id: ReportId, action: ReportAction) {
        if let Some(report) = self.reports.iter_mut().find(|report| report.id == id) {
            if action == ReportAction::Generate {
                report.status = ReportStatus::Requested;
                report.generated_at = None;
            }
            self.last_action = Some((id, action));
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &ReportSummary> {
        self.reports
            .iter()
            .filter(move |report| self.kind_filter.is_none_or(|kind| report.kind == kind))
    }

    pub fn reports(&self) -> &[ReportSummary] {
        &self.reports
    }

    pub fn last_action(&self) -> Option<(ReportId, ReportAction)> {
        self.last_action
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let title = text(ctx.i18n.tr("reports-title")).size(typography::TITLE);

        let mut filters = Row::new().spacing(spacing::XS).push(chip(
            ctx.i18n.tr("filter-all"),
            self.kind_filter.is_none(),
            Message::KindFilter(None),
        ));
        for kind in ReportKind::ALL {
            filters = filters.push(chip(
                ctx.i18n.tr(kind.i18n_key()),
                self.kind_filter == Some(kind),
                Message::KindFilter(Some(kind)),
            ));
        }

        let mut list = Column::new().spacing(spacing::SM);
        for report in self.visible() {
            list = list.push(self.row(report, &ctx));
        }

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(title)
            .push(filters)
            .push(scrollable(list).height(Length::Fill))
            .into()
    }

    fn row<'a>(&'a self, report: &'a ReportSummary, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let status_color = match report.status {
            ReportStatus::Ready => palette::SUCCESS_500,
            ReportStatus::Requested => palette::WARNING_500,
        };

        let generated = match report.generated_at {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => "—".to_string(),
        };

        let mut info = Column::new()
            .spacing(spacing::XS)
            .width(Length::Fill)
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(iced::alignment::Vertical::Center)
                    .push(text(ctx.i18n.tr(report.kind.i18n_key())).size(typography::TITLE_SM))
                    .push(badge(ctx.i18n.tr(report.status.i18n_key()), status_color)),
            )
            .push(
                text(format!("{} · {}", report.period, generated))
                    .size(typography::BODY_SM)
                    .color(palette::GRAY_400),
            );

        if self.last_action.map(|(id, _)| id) == Some(report.id) {
            let key = match self.last_action.unwrap().1 {
                ReportAction::Generate => "reports-generate-queued",
                ReportAction::Export => "reports-export-queued",
            };
            info = info.push(
                text(ctx.i18n.tr(key))
                    .size(typography::CAPTION)
                    .color(palette::INFO_500),
            );
        }

        let generate = button(text(ctx.i18n.tr("reports-generate")).size(typography::CAPTION))
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::chip)
            .on_press(Message::ActionRequested(report.id, ReportAction::Generate));
        let export = button(text(ctx.i18n.tr("reports-export")).size(typography::CAPTION))
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::chip)
            .on_press_maybe(
                (report.status == ReportStatus::Ready)
                    .then_some(Message::ActionRequested(report.id, ReportAction::Export)),
            );

        container(
            Row::new()
                .spacing(spacing::MD)
                .align_y(iced::alignment::Vertical::Center)
                .push(info)
                .push(Space::new().width(Length::Fill))
                .push(generate)
                .push(export),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
    }
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
    fn kind_filter_limits_rows() {
        let mut state = State::default();
        state.update(Message::KindFilter(Some(ReportKind::Grades)));
        assert!(state.visible().all(|r| r.kind == ReportKind::Grades));
        assert!(state.visible().count() < state.reports().len());
    }

    #[test]
    fn generate_needs_confirmation_then_marks_row_requested() {
        let mut state = State::default();
        let id = state.reports()[0].id;

        let event = state.update(Message::ActionRequested(id, ReportAction::Generate));
        assert!(matches!(event, Event::Confirm(got, ReportAction::Generate) if got == id));
        assert_eq!(state.reports()[0].status, ReportStatus::Ready);

        state.update(Message::ActionConfirmed {
            id,
            action: ReportAction::Generate,
            accepted: true,
        });
        assert_eq!(state.reports()[0].status, ReportStatus::Requested);
        assert!(state.reports()[0].generated_at.is_none());
    }

    #[test]
    fn declined_confirmation_changes_nothing() {
        let mut state = State::default();
        let id = state.reports()[0].id;
        let before = state.reports()[0].clone();

        state.update(Message::ActionRequested(id, ReportAction::Export));
        state.update(Message::ActionConfirmed {
            id,
            action: ReportAction::Export,
            accepted: false,
        });

        assert_eq!(state.reports()[0].status, before.status);
        assert!(state.last_action().is_none());
    }

    #[test]
    fn export_marks_last_action_without_touching_status() {
        let mut state = State::default();
        let id = state.reports()[1].id;

        state.update(Message::ActionRequested(id, ReportAction::Export));
        state.update(Message::ActionConfirmed {
            id,
            action: ReportAction::Export,
            accepted: true,
        });

        assert_eq!(state.last_action(), Some((id, ReportAction::Export)));
        assert_eq!(state.reports()[1].status, ReportStatus::Ready);
    }
}
