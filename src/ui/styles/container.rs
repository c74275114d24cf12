// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Panel surface for the dimension editor.
///
/// Lifted slightly from the theme background (lighter on dark themes,
/// darker on light ones) with a thin outline.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;
    let shift = if palette.is_dark { 0.08 } else { -0.04 };
    let tint = |channel: f32| (channel + shift).clamp(0.0, 1.0);

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            tint(base.r),
            tint(base.g),
            tint(base.b),
            opacity::SURFACE,
        ))),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Status line background, tinted by severity color.
pub fn status(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..color
        })),
        border: Border {
            color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_is_lighter_than_background_on_dark_theme() {
        let theme = Theme::Dark;
        let base = theme.extended_palette().background.base.color;
        let Some(Background::Color(bg)) = panel(&theme).background else {
            panic!("Expected color background")
        };
        assert!(bg.r > base.r);
    }

    #[test]
    fn panel_is_darker_than_background_on_light_theme() {
        let theme = Theme::Light;
        let base = theme.extended_palette().background.base.color;
        let Some(Background::Color(bg)) = panel(&theme).background else {
            panic!("Expected color background")
        };
        assert!(bg.r < base.r);
    }

    #[test]
    fn status_uses_translucent_fill() {
        let style = status(Color::from_rgb(1.0, 0.0, 0.0))(&Theme::Dark);
        let Some(Background::Color(bg)) = style.background else {
            panic!("Expected color background")
        };
        assert!(bg.a < 1.0);
    }
}
