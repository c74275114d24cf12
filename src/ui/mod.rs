// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its local state, renders from a borrowed view context and reports
//! outcomes to the host as events.
//!
//! - [`dimension_editor`] - Width/height inputs with an aspect-ratio lock
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod design_tokens;
pub mod dimension_editor;
pub mod icons;
pub mod styles;
pub mod theming;
