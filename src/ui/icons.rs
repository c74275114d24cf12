// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for vector glyphs.
//!
//! Glyphs are embedded at compile time as SVG sources and their handles are
//! cached using `OnceLock`, so repeated renders reuse the parsed tree.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `link` not `lock_aspect_ratio`).

use crate::ui::design_tokens::palette;
use iced::widget::svg::{self, Handle, Svg};
use iced::{Length, Theme};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $source:expr, $doc:literal) => {
        #[doc = $doc]
        fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            HANDLE
                .get_or_init(|| Handle::from_memory($source.as_bytes()))
                .clone()
        }
    };
}

const LINK_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><path d="M13.19 8.688a4.5 4.5 0 0 1 1.242 7.244l-4.5 4.5a4.5 4.5 0 0 1-6.364-6.364l1.757-1.757m13.35-.622 1.757-1.757a4.5 4.5 0 0 0-6.364-6.364l-4.5 4.5a4.5 4.5 0 0 0 1.242 7.244"/></svg>"#;

define_icon!(
    link_handle,
    LINK_SVG,
    "Link glyph: two interlocking chain segments."
);

/// Link glyph used by the aspect-ratio toggle.
///
/// Drawn white when `active` (on the brand-colored selected button) and in
/// the theme text color otherwise. Purely visual; carries no data.
pub fn link(active: bool) -> Svg<'static> {
    Svg::new(link_handle()).style(move |theme: &Theme, _status| svg::Style {
        color: Some(if active {
            palette::WHITE
        } else {
            theme.extended_palette().background.base.text
        }),
    })
}

/// Sets both dimensions of an icon to `size`.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
