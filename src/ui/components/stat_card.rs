// SPDX-License-Identifier: MPL-2.0
//! Stat tile used by the dashboard screens.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, text, Column};
use iced::{Element, Length};

/// A labelled figure with an optional caption underneath.
pub fn stat_card<'a, Message: 'a>(
    label: String,
    value: String,
    caption: Option<String>,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(text(label).size(typography::BODY_SM))
        .push(text(value).size(typography::STAT));

    if let Some(caption) = caption {
        column = column.push(
            text(caption)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    container(column)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}
