// SPDX-License-Identifier: MPL-2.0
//! User management screen: searchable, filterable member list with
//! confirm-gated activate/deactivate.

use crate::data::mock;
use crate::domain::{UserAccount, UserId, UserRole, UserStatus};
use crate::i18n::fluent::I18n;
use crate::ui::components::badge;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, scrollable, text, text_input, Column, Row, Space};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    RoleFilter(Option<UserRole>),
    ToggleRequested(UserId),
    ToggleConfirmed { id: UserId, accepted: bool },
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Ask the user to confirm flipping the account's status to `to`.
    ConfirmToggle { id: UserId, to: UserStatus },
}

#[derive(Debug, Clone)]
pub struct State {
    users: Vec<UserAccount>,
    query: String,
    role_filter: Option<UserRole>,
    pending_toggle: Option<UserId>,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl Default for State {
    fn default() -> Self {
        Self {
            users: mock::users(),
            query: String::new(),
            role_filter: None,
            pending_toggle: None,
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
            Message::RoleFilter(filter) => {
                self.role_filter = filter;
                Event::None
            }
            Message::ToggleRequested(id) => match self.users.iter().find(|user| user.id == id) {
                Some(user) => {
                    self.pending_toggle = Some(id);
                    Event::ConfirmToggle {
                        id,
                        to: user.status.toggled(),
                    }
                }
                None => Event::None,
            },
            Message::ToggleConfirmed { id, accepted } => {
                let pending = self.pending_toggle.take();
                if accepted && pending == Some(id) {
                    if let Some(user) = self.users.iter_mut().find(|user| user.id == id) {
                        user.status = user.status.toggled();
                    }
                }
                Event::None
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &UserAccount> {
        self.users.iter().filter(move |user| {
            user.matches(&self.query) && self.role_filter.is_none_or(|role| user.role == role)
        })
    }

    pub fn users(&self) -> &[UserAccount] {
        &self.users
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let title = text(ctx.i18n.tr("users-title")).size(typography::TITLE);

        let search = text_input(&ctx.i18n.tr("users-search-placeholder"), &self.query)
            .on_input(Message::QueryChanged)
            .padding(spacing::SM)
            .size(typography::BODY)
            .width(280);

        let mut filters = Row::new().spacing(spacing::XS).push(chip(
            ctx.i18n.tr("filter-all"),
            self.role_filter.is_none(),
            Message::RoleFilter(None),
        ));
        for role in UserRole::ALL {
            filters = filters.push(chip(
                ctx.i18n.tr(role.i18n_key()),
                self.role_filter == Some(role),
                Message::RoleFilter(Some(role)),
            ));
        }

        let mut list = Column::new().spacing(spacing::SM);
        for user in self.visible() {
            list = list.push(row(user, &ctx));
        }

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(
                Row::new()
                    .align_y(iced::alignment::Vertical::Center)
                    .push(title)
                    .push(Space::new().width(Length::Fill))
                    .push(search),
            )
            .push(filters)
            .push(scrollable(list).height(Length::Fill))
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

fn row<'a>(user: &'a UserAccount, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let status_color = match user.status {
        UserStatus::Active => palette::SUCCESS_500,
        UserStatus::Inactive => palette::GRAY_400,
    };

    let identity = Column::new()
        .spacing(spacing::XS)
        .width(Length::FillPortion(3))
        .push(text(&user.name).size(typography::BODY))
        .push(
            text(&user.email)
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        );

    let toggle_key = match user.status {
        UserStatus::Active => "users-deactivate",
        UserStatus::Inactive => "users-activate",
    };
    let toggle = button(text(ctx.i18n.tr(toggle_key)).size(typography::CAPTION))
        .padding([spacing::XS, spacing::SM])
        .style(match user.status {
            UserStatus::Active => styles::button::destructive,
            UserStatus::Inactive => styles::button::chip,
        })
        .on_press(Message::ToggleRequested(user.id));

    container(
        Row::new()
            .spacing(spacing::MD)
            .align_y(iced::alignment::Vertical::Center)
            .push(identity)
            .push(badge(ctx.i18n.tr(user.role.i18n_key()), palette::PRIMARY_500))
            .push(badge(ctx.i18n.tr(user.status.i18n_key()), status_color))
            .push(
                text(user.last_active.format("%Y-%m-%d").to_string())
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .push(Space::new().width(Length::Fill))
            .push(toggle),
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
    fn search_matches_name_and_email() {
        let mut state = State::default();
        state.update(Message::QueryChanged("amelia".into()));
        let names: Vec<&str> = state.visible().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Amelia Torres"]);
    }

    #[test]
    fn role_filter_combines_with_search() {
        let mut state = State::default();
        state.update(Message::RoleFilter(Some(UserRole::Student)));
        state.update(Message::QueryChanged("northgate".into()));
        assert!(state.visible().all(|u| u.role == UserRole::Student));
        assert!(state.visible().count() >= 1);
    }

    #[test]
    fn toggle_flows_through_confirmation() {
        let mut state = State::default();
        let id = state.users()[1].id;
        assert_eq!(state.users()[1].status, UserStatus::Active);

        let event = state.update(Message::ToggleRequested(id));
        assert!(matches!(
            event,
            Event::ConfirmToggle {
                id: got,
                to: UserStatus::Inactive
            } if got == id
        ));
        assert_eq!(state.users()[1].status, UserStatus::Active);

        state.update(Message::ToggleConfirmed { id, accepted: true });
        assert_eq!(state.users()[1].status, UserStatus::Inactive);
    }

    #[test]
    fn declined_toggle_keeps_status() {
        let mut state = State::default();
        let id = state.users()[0].id;
        let before = state.users()[0].status;

        state.update(Message::ToggleRequested(id));
        state.update(Message::ToggleConfirmed {
            id,
            accepted: false,
        });

        assert_eq!(state.users()[0].status, before);
    }

    #[test]
    fn confirmation_for_unknown_user_is_ignored() {
        let mut state = State::default();
        let event = state.update(Message::ToggleRequested(UserId(999)));
        assert!(matches!(event, Event::None));
    }
}
