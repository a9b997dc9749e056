// SPDX-License-Identifier: MPL-2.0
//! Institution settings screen with an explicit edit mode.
//!
//! Read-only by default; entering edit mode copies the profile into a draft.
//! Saving validates the draft and replaces the profile locally, cancelling
//! throws the draft away. Nothing leaves the screen.

use crate::data::mock;
use crate::domain::InstitutionProfile;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, text_input, Column, Row, Space};
use iced::{Element, Length};

/// Closed set of draft field edits.
#[derive(Debug, Clone)]
pub enum DraftEdit {
    Name(String),
    Address(String),
    ContactEmail(String),
    Phone(String),
    AcademicYear(String),
    GradingScale(String),
}

#[derive(Debug, Clone)]
pub enum Message {
    EnterEdit,
    Draft(DraftEdit),
    Save,
    Cancel,
}

#[derive(Debug, Clone)]
pub struct State {
    profile: InstitutionProfile,
    draft: Option<InstitutionProfile>,
    /// i18n key of the validation message shown under the form.
    error_key: Option<&'static str>,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl Default for State {
    fn default() -> Self {
        Self {
            profile: mock::institution(),
            draft: None,
            error_key: None,
        }
    }
}

impl State {
    pub fn update(&mut self, message: Message) {
        match message {
            Message::EnterEdit => {
                self.draft = Some(self.profile.clone());
                self.error_key = None;
            }
            Message::Draft(edit) => {
                if let Some(draft) = self.draft.as_mut() {
                    apply_edit(draft, edit);
                    self.error_key = None;
                }
            }
            Message::Save => {
                let Some(draft) = self.draft.as_ref() else {
                    return;
                };
                if draft.name.trim().is_empty() {
                    self.error_key = Some("institution-error-name");
                } else if draft.contact_email.trim().is_empty()
                    || !draft.contact_email.contains('@')
                {
                    self.error_key = Some("institution-error-email");
                } else {
                    self.profile = self.draft.take().unwrap();
                    self.error_key = None;
                }
            }
            Message::Cancel => {
                self.draft = None;
                self.error_key = None;
            }
        }
    }

    pub fn profile(&self) -> &InstitutionProfile {
        &self.profile
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn error_key(&self) -> Option<&'static str> {
        self.error_key
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let title = text(ctx.i18n.tr("institution-title")).size(typography::TITLE);

        let body: Element<'a, Message> = match &self.draft {
            Some(draft) => edit_form(draft, self.error_key, &ctx),
            None => read_only(&self.profile, &ctx),
        };

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(title)
            .push(body)
            .into()
    }
}

fn apply_edit(draft: &mut InstitutionProfile, edit: DraftEdit) {
    match edit {
        DraftEdit::Name(value) => draft.name = value,
        DraftEdit::Address(value) => draft.address = value,
        DraftEdit::ContactEmail(value) => draft.contact_email = value,
        DraftEdit::Phone(value) => draft.phone = value,
        DraftEdit::AcademicYear(value) => draft.academic_year = value,
        DraftEdit::GradingScale(value) => draft.grading_scale = value,
    }
}

fn read_only<'a>(
    profile: &'a InstitutionProfile,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let edit = button(text(ctx.i18n.tr("institution-edit")).size(typography::BODY))
        .padding([spacing::SM, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::EnterEdit);

    container(
        Column::new()
            .spacing(spacing::SM)
            .push(field_row(ctx.i18n.tr("institution-name"), &profile.name))
            .push(field_row(ctx.i18n.tr("institution-address"), &profile.address))
            .push(field_row(
                ctx.i18n.tr("institution-email"),
                &profile.contact_email,
            ))
            .push(field_row(ctx.i18n.tr("institution-phone"), &profile.phone))
            .push(field_row(
                ctx.i18n.tr("institution-academic-year"),
                &profile.academic_year,
            ))
            .push(field_row(
                ctx.i18n.tr("institution-grading-scale"),
                &profile.grading_scale,
            ))
            .push(Space::new().height(spacing::SM))
            .push(edit),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::panel)
    .into()
}

fn edit_form<'a>(
    draft: &'a InstitutionProfile,
    error_key: Option<&'static str>,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let mut form = Column::new()
        .spacing(spacing::SM)
        .push(input(ctx.i18n.tr("institution-name"), &draft.name, |v| {
            Message::Draft(DraftEdit::Name(v))
        }))
        .push(input(
            ctx.i18n.tr("institution-address"),
            &draft.address,
            |v| Message::Draft(DraftEdit::Address(v)),
        ))
        .push(input(
            ctx.i18n.tr("institution-email"),
            &draft.contact_email,
            |v| Message::Draft(DraftEdit::ContactEmail(v)),
        ))
        .push(input(ctx.i18n.tr("institution-phone"), &draft.phone, |v| {
            Message::Draft(DraftEdit::Phone(v))
        }))
        .push(input(
            ctx.i18n.tr("institution-academic-year"),
            &draft.academic_year,
            |v| Message::Draft(DraftEdit::AcademicYear(v)),
        ))
        .push(input(
            ctx.i18n.tr("institution-grading-scale"),
            &draft.grading_scale,
            |v| Message::Draft(DraftEdit::GradingScale(v)),
        ));

    if let Some(key) = error_key {
        form = form.push(
            text(ctx.i18n.tr(key))
                .size(typography::BODY_SM)
                .color(palette::ERROR_500),
        );
    }

    let save = button(text(ctx.i18n.tr("institution-save")).size(typography::BODY))
        .padding([spacing::SM, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::Save);
    let cancel = button(text(ctx.i18n.tr("institution-cancel")).size(typography::BODY))
        .padding([spacing::SM, spacing::MD])
        .style(styles::button::chip)
        .on_press(Message::Cancel);

    form = form.push(Space::new().height(spacing::SM)).push(
        Row::new().spacing(spacing::SM).push(save).push(cancel),
    );

    container(form)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn field_row<'a>(label: String, value: &'a str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::MD)
        .push(
            text(label)
                .size(typography::BODY_SM)
                .color(palette::GRAY_400)
                .width(Length::FillPortion(1)),
        )
        .push(
            text(value)
                .size(typography::BODY)
                .width(Length::FillPortion(3)),
        )
        .into()
}

fn input<'a>(
    label: String,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(text(label).size(typography::BODY_SM).color(palette::GRAY_400))
        .push(
            text_input("", value)
                .on_input(on_input)
                .padding(spacing::SM)
                .size(typography::BODY),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_discards_draft_edits() {
        let mut state = State::default();
        let original_name = state.profile().name.clone();

        state.update(Message::EnterEdit);
        state.update(Message::Draft(DraftEdit::Name("Renamed".into())));
        state.update(Message::Cancel);

        assert!(!state.is_editing());
        assert_eq!(state.profile().name, original_name);
    }

    #[test]
    fn save_commits_valid_draft() {
        let mut state = State::default();
        state.update(Message::EnterEdit);
        state.update(Message::Draft(DraftEdit::Name("Westbrook Academy".into())));
        state.update(Message::Save);

        assert!(!state.is_editing());
        assert_eq!(state.profile().name, "Westbrook Academy");
        assert!(state.error_key().is_none());
    }

    #[test]
    fn save_rejects_empty_name_and_keeps_editing() {
        let mut state = State::default();
        state.update(Message::EnterEdit);
        state.update(Message::Draft(DraftEdit::Name("  ".into())));
        state.update(Message::Save);

        assert!(state.is_editing());
        assert_eq!(state.error_key(), Some("institution-error-name"));
    }

    #[test]
    fn save_rejects_malformed_email() {
        let mut state = State::default();
        state.update(Message::EnterEdit);
        state.update(Message::Draft(DraftEdit::ContactEmail("not-an-email".into())));
        state.update(Message::Save);

        assert!(state.is_editing());
        assert_eq!(state.error_key(), Some("institution-error-email"));
    }

    #[test]
    fn draft_edits_do_not_leak_before_save() {
        let mut state = State::default();
        let original = state.profile().clone();
        state.update(Message::EnterEdit);
        state.update(Message::Draft(DraftEdit::Phone("+1 555 0100".into())));

        assert_eq!(state.profile(), &original);
    }
}
