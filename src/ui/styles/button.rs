// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::gradient::Linear;
use iced::widget::button;
use iced::{Background, Border, Color, Radians, Theme};
use std::f32::consts::FRAC_PI_4;

/// Style for the selected state of a toggle (aspect lock engaged).
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        _ => palette::PRIMARY_600,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_700,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Style for the unselected state of a toggle.
/// Translucent so it sits on any panel surface.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let alpha = match status {
        button::Status::Hovered => 0.2,
        _ => 0.1,
    };
    let tint = if theme.extended_palette().is_dark {
        WHITE
    } else {
        palette::BLACK
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..tint })),
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for the main "apply" action: green diagonal gradient that
/// flattens to a muted tone when disabled.
pub fn apply(_theme: &Theme, status: button::Status) -> button::Style {
    let (from, to, shadow, text_color) = match status {
        button::Status::Active => (palette::SUCCESS_600, palette::SUCCESS_500, shadow::MD, WHITE),
        button::Status::Hovered => (palette::SUCCESS_500, palette::SUCCESS_400, shadow::LG, WHITE),
        button::Status::Pressed => (palette::SUCCESS_700, palette::SUCCESS_600, shadow::NONE, WHITE),
        button::Status::Disabled => (
            palette::SUCCESS_800,
            palette::SUCCESS_700,
            shadow::NONE,
            Color { a: 0.6, ..WHITE },
        ),
    };

    let gradient = Linear::new(Radians(FRAC_PI_4))
        .add_stop(0.0, from)
        .add_stop(1.0, to);

    button::Style {
        background: Some(Background::Gradient(gradient.into())),
        text_color,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_button_uses_brand_colors() {
        let style = selected(&Theme::Dark, button::Status::Active);
        let Some(Background::Color(bg)) = style.background else {
            panic!("Expected background color")
        };
        assert_eq!(bg, palette::PRIMARY_600);
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn unselected_button_brightens_on_hover() {
        let normal = unselected(&Theme::Dark, button::Status::Active);
        let hover = unselected(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn apply_button_dims_text_when_disabled() {
        let active = apply(&Theme::Dark, button::Status::Active);
        let disabled = apply(&Theme::Dark, button::Status::Disabled);
        assert!(disabled.text_color.a < active.text_color.a);
        assert_eq!(disabled.shadow, shadow::NONE);
    }
}
