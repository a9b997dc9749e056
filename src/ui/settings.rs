// SPDX-License-Identifier: MPL-2.0
//! Application preferences screen (language, theme mode).
//!
//! The screen only reports selections up as events; the app applies them and
//! persists the config.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, container, text, Column, Row};
use iced::{Element, Length};
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone, Default)]
pub struct State {
    theme_mode: ThemeMode,
}

#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    Back,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    Back,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    pub fn new(theme_mode: ThemeMode) -> Self {
        Self { theme_mode }
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
            Message::ThemeModeSelected(mode) => {
                self.theme_mode = mode;
                Event::ThemeModeSelected(mode)
            }
            Message::Back => Event::Back,
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let title = text(ctx.i18n.tr("settings-title")).size(typography::TITLE);

        let mut language_row = Row::new().spacing(spacing::XS);
        for locale in &ctx.i18n.available_locales {
            let name_key = format!("language-name-{}", locale);
            let translated = ctx.i18n.tr(&name_key);
            let label = if translated.starts_with("MISSING:") {
                locale.to_string()
            } else {
                translated
            };

            let style = if ctx.i18n.current_locale() == locale {
                styles::button::selected
            } else {
                styles::button::chip
            };
            language_row = language_row.push(
                button(text(label).size(typography::BODY))
                    .padding([spacing::XS, spacing::SM])
                    .style(style)
                    .on_press(Message::LanguageSelected(locale.clone())),
            );
        }

        let mut theme_row = Row::new().spacing(spacing::XS);
        for mode in ThemeMode::ALL {
            let style = if self.theme_mode == mode {
                styles::button::selected
            } else {
                styles::button::chip
            };
            theme_row = theme_row.push(
                button(text(ctx.i18n.tr(mode.i18n_key())).size(typography::BODY))
                    .padding([spacing::XS, spacing::SM])
                    .style(style)
                    .on_press(Message::ThemeModeSelected(mode)),
            );
        }

        let back = button(text(ctx.i18n.tr("settings-back")).size(typography::BODY))
            .padding([spacing::SM, spacing::MD])
            .style(styles::button::chip)
            .on_press(Message::Back);

        let panel = container(
            Column::new()
                .spacing(spacing::LG)
                .push(section(ctx.i18n.tr("settings-language-label"), language_row.into()))
                .push(section(ctx.i18n.tr("settings-theme-label"), theme_row.into())),
        )
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::panel);

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(title)
            .push(panel)
            .push(back)
            .into()
    }
}

fn section<'a>(label: String, control: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(text(label).size(typography::BODY_SM).color(palette::GRAY_400))
        .push(control)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_selection_updates_state_and_reports_event() {
        let mut state = State::new(ThemeMode::System);
        let event = state.update(Message::ThemeModeSelected(ThemeMode::Dark));
        assert!(matches!(event, Event::ThemeModeSelected(ThemeMode::Dark)));
        assert_eq!(state.theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn back_produces_back_event() {
        let mut state = State::default();
        assert!(matches!(state.update(Message::Back), Event::Back));
    }
}
