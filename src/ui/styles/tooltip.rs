// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! Tooltips invert the theme (light bubble on dark themes and the reverse)
//! so the hint stays readable over any panel.

use crate::ui::design_tokens::{border, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Style for the tooltip bubble.
pub fn bubble(theme: &Theme) -> container::Style {
    let (background, text_color) = if theme.extended_palette().is_dark {
        (Color::from_rgba(0.95, 0.95, 0.95, 0.98), Color::from_rgb(0.1, 0.1, 0.1))
    } else {
        (Color::from_rgba(0.15, 0.15, 0.15, 0.98), Color::from_rgb(0.95, 0.95, 0.95))
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: Color { a: 0.3, ..text_color },
        },
        shadow: shadow::SM,
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let bubble_content = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(bubble);

    tooltip(content, bubble_content, position).gap(spacing::XXS)
}
