// SPDX-License-Identifier: MPL-2.0
//! Small colored status label.

use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{container, text};
use iced::{Background, Border, Color, Element};

/// Renders `label` on a tinted pill in the given accent color.
pub fn badge<'a, Message: 'a>(label: String, color: Color) -> Element<'a, Message> {
    let tint = Color { a: 0.15, ..color };
    container(text(label).size(typography::CAPTION).color(color))
        .padding([spacing::XS, spacing::SM])
        .style(move |_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(tint)),
            border: Border {
                color,
                width: 1.0,
                radius: 999.0.into(),
            },
            ..Default::default()
        })
        .into()
}
